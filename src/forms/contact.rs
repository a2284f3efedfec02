//! Form posted when a contact-assignment field changes.
//!
//! Fired on change, not on save: the distribution lists follow the selection
//! immediately, while the record field itself is persisted with the next
//! save.

use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct ContactChangeForm {
    /// Natural key of the owning record (program name or customer number).
    #[validate(length(min = 1, message = "Record key is missing"))]
    pub owner: String,
    /// Which contact field changed (`acct_owner`, `loss_ctl_rep1`, ...).
    #[validate(length(min = 1, message = "Contact field is missing"))]
    pub field: String,
    /// Previous selection; empty when the field was blank.
    #[serde(default)]
    pub old_value: String,
    /// New selection; empty when the field was cleared.
    #[serde(default)]
    pub new_value: String,
}
