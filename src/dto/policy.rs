//! DTOs shaped for the policy screen.

use crate::dto::EnablementContext;
use crate::forms::policy::PolicyForm;

/// Aggregated data required to render the policy edit screen.
#[derive(Debug)]
pub struct PolicyPageData {
    pub form: PolicyForm,
    pub enablement: EnablementContext,
    pub locked: bool,
    pub is_create: bool,
    /// Editing a next-mod draft seeded from an existing record.
    pub is_next_mod: bool,
    /// Derived from the current status each time the page renders.
    pub show_cancel_date: bool,
    pub show_completion_date: bool,
    pub confirm_text: &'static str,
}
