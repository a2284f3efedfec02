//! Shared pieces of the record edit-session lifecycle.
//!
//! Every edit screen follows the same path: load (or seed defaults), edit
//! across tabs, validate, transform, persist through one-or-more upserts,
//! then confirm and navigate. The per-entity services compose the pieces
//! defined here so the lifecycle behaves identically on all four screens.

use std::str::FromStr;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::permissions::Role;
use crate::models::auth::AuthenticatedUser;
use crate::services::{ServiceError, ServiceResult};

/// Resolves the screen role after the service-access gate.
pub fn screen_role(user: &AuthenticatedUser) -> ServiceResult<Role> {
    if !user.has_role(SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }
    Role::from_roles(&user.roles).ok_or(ServiceError::Unauthorized)
}

/// The two user-initiated persistence actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// Persist and keep the session open.
    Save,
    /// Persist and hand the record to the next workflow stage.
    Submit,
}

impl FromStr for SubmitAction {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "save" => Ok(SubmitAction::Save),
            "submit" => Ok(SubmitAction::Submit),
            other => Err(ServiceError::Validation(format!(
                "Unknown submit action: {other}"
            ))),
        }
    }
}

/// How the edit session was opened.
///
/// This is the explicit command/result channel for wizard embedding: an
/// embedded caller invokes the submit service directly and receives the
/// persisted key back instead of holding an imperative handle into the
/// screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditContext {
    /// Creating a brand-new record (no prior loaded record).
    pub is_create: bool,
    /// The session was opened from the pending-items queue.
    pub from_pending_queue: bool,
    /// Rendered as one step of a wizard rather than a standalone page.
    pub embedded: bool,
}

impl EditContext {
    pub fn standalone(is_create: bool, from_pending_queue: bool) -> Self {
        Self {
            is_create,
            from_pending_queue,
            embedded: false,
        }
    }
}

/// Result of one submit invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome<K> {
    /// Every upsert succeeded.
    Saved { key: K, created: bool },
    /// Insert path found an existing record under the candidate key.
    DuplicateKey { message: String },
    /// The premium/service-level warning needs an explicit override.
    PremiumConflict,
}

/// Workflow stamp written on every save: the stage is the acting role, and
/// the submitted flag moves the record into the pending-review queue.
///
/// A plain save marks the record submitted only when re-editing an existing
/// record that did not come out of the pending queue; submit always does.
pub fn workflow_stamp(role: Role, action: SubmitAction, ctx: &EditContext) -> (String, i32) {
    let is_submitted = match action {
        SubmitAction::Submit => 1,
        SubmitAction::Save => {
            if !ctx.is_create && !ctx.from_pending_queue {
                1
            } else {
                0
            }
        }
    };
    (role.as_str().to_string(), is_submitted)
}

/// Wording for the submit confirmation dialog.
///
/// Underwriters keep the account open after submit; every other role hands
/// it off, so the wording warns about closing.
pub fn submit_confirmation_text(role: Role) -> &'static str {
    match role {
        Role::Underwriter => {
            "This will save all the changes to the account, is that what you want to do?"
        }
        _ => "This will save all the changes & close the account. Is that what you want to do?",
    }
}

/// Service-level tiers that only fit accounts with no active premium.
const ZERO_PREMIUM_TIERS: [&str; 4] = [
    "Deductible Billing - Special Accounts",
    "Loss Run",
    "Deductible Billing - Paragon",
    "Inactive",
];

/// Checks the declared total premium against the selected service-level
/// tier's premium band.
///
/// The band edges are transcribed from the service-level matrix as-is,
/// overlaps included; they are compared literally rather than re-derived.
pub fn premium_conflicts_with_service_level(total_prem: f64, service_level: &str) -> bool {
    let tier = service_level.trim();
    if tier.is_empty() {
        return false;
    }

    (total_prem != 0.0 && ZERO_PREMIUM_TIERS.contains(&tier))
        || (total_prem < 750_000.0 && tier.contains("Comprehensive"))
        || ((total_prem < 500_000.0 || total_prem > 750_000.0) && tier.contains("Enhanced"))
        || ((total_prem < 250_000.0 || total_prem > 500_000.0) && tier.contains("Essential"))
        || ((total_prem < 150_000.0 || total_prem > 250_000.0) && tier.contains("Primary"))
        || ((total_prem < 0.0 || total_prem > 150_000.0) && tier.contains("Exception"))
}

/// Parses a stored or posted amount ("1,250,000.00") to a number; blank or
/// unparseable values count as zero.
pub fn currency_amount(value: Option<&str>) -> f64 {
    value
        .map(|v| v.replace(',', ""))
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// A `column=value` lookup segment from a view route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordLookup {
    pub column: String,
    pub value: String,
}

impl RecordLookup {
    /// Parses a route segment, allowing only the named filter columns.
    pub fn parse(segment: &str, allowed: &[&str]) -> ServiceResult<Self> {
        let (column, value) = segment.split_once('=').ok_or_else(|| {
            ServiceError::Validation(format!("Malformed record lookup: {segment}"))
        })?;

        if !allowed.contains(&column) {
            return Err(ServiceError::Validation(format!(
                "Unsupported lookup column: {column}"
            )));
        }

        let value = value.trim();
        if value.is_empty() {
            return Err(ServiceError::Validation(
                "Record lookup value is empty".to_string(),
            ));
        }

        Ok(Self {
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}
