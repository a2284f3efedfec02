//! DTOs shaped for the policy-type screen.

use crate::dto::EnablementContext;
use crate::forms::policy_type::PolicyTypeForm;

/// Aggregated data required to render the policy-type edit screen.
#[derive(Debug)]
pub struct PolicyTypePageData {
    pub form: PolicyTypeForm,
    pub enablement: EnablementContext,
    pub locked: bool,
    pub is_create: bool,
    pub confirm_text: &'static str,
}
