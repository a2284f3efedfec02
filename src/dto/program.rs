//! DTOs shaped for the affinity program screen.

use crate::domain::schedule::ScheduleGrid;
use crate::dto::EnablementContext;
use crate::forms::program::ProgramForm;

/// Aggregated data required to render the program edit screen.
#[derive(Debug)]
pub struct ProgramPageData {
    pub form: ProgramForm,
    pub loss_run: ScheduleGrid,
    pub claim_review: ScheduleGrid,
    pub enablement: EnablementContext,
    /// Submitted records are read-only for directors.
    pub locked: bool,
    pub is_create: bool,
    /// Role-dependent wording for the submit confirmation dialog.
    pub confirm_text: &'static str,
}
