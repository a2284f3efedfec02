//! Service layer: pure functions over the repository traits.
//!
//! Routes stay thin; everything the edit screens do — loading, validation,
//! the submit lifecycle, the distribution side effect — lives here and is
//! unit-tested against mock repositories.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod account;
pub mod distribution;
pub mod dropdowns;
pub mod main;
#[cfg(feature = "server")]
pub mod outlook;
pub mod policy;
pub mod policy_type;
pub mod program;
pub mod search;
pub mod session;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// Client-side rule failed; carries the user-facing message.
    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The best-effort distribution sync could not complete every call.
    #[error("Distribution sync failed: {0}")]
    DistributionSync(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.message())
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
