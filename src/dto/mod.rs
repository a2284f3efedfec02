//! DTO modules that bridge services with templates and APIs.

use serde::Serialize;

use crate::domain::permissions::FieldAccess;

pub mod account;
pub mod main;
pub mod policy;
pub mod policy_type;
pub mod program;
pub mod search;

/// Field enablement rendered into a template context.
#[derive(Debug, Clone, Serialize)]
pub struct EnablementContext {
    /// Sentinel: the role may edit every field.
    pub all_fields: bool,
    /// Allow-list consulted when `all_fields` is false.
    pub allowed: Vec<&'static str>,
}

impl From<FieldAccess> for EnablementContext {
    fn from(access: FieldAccess) -> Self {
        match access.allowed_fields() {
            None => Self {
                all_fields: true,
                allowed: Vec::new(),
            },
            Some(fields) => Self {
                all_fields: false,
                allowed: fields.to_vec(),
            },
        }
    }
}
