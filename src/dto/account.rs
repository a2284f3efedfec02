//! DTOs shaped for the special-account screen.

use crate::domain::schedule::ScheduleGrid;
use crate::dto::EnablementContext;
use crate::forms::account::AccountForm;

/// Aggregated data required to render the account edit screen.
#[derive(Debug)]
pub struct AccountPageData {
    pub form: AccountForm,
    pub loss_run: ScheduleGrid,
    pub deductible: ScheduleGrid,
    pub claim_review: ScheduleGrid,
    pub enablement: EnablementContext,
    pub locked: bool,
    pub is_create: bool,
    pub confirm_text: &'static str,
}
