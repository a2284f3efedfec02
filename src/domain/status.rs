//! Account and policy status values with their field-gating rules.
//!
//! Several date fields are only meaningful for specific statuses; the rules
//! here are derived on demand from the current status value rather than kept
//! as mutable flags, so they can never go stale.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Status of an affinity program or special account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
    InRunoff,
    Unique,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::InRunoff => "In Runoff",
            AccountStatus::Unique => "Unique",
        }
    }

    /// Termination cause/date and the notification date are only editable
    /// while the account is winding down.
    pub fn unlocks_termination(&self) -> bool {
        matches!(self, AccountStatus::Inactive | AccountStatus::InRunoff)
    }

    /// The notification date becomes mandatory once the account is inactive.
    pub fn requires_notification_date(&self) -> bool {
        matches!(self, AccountStatus::Inactive)
    }
}

impl Display for AccountStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Active" => Ok(AccountStatus::Active),
            "Inactive" => Ok(AccountStatus::Inactive),
            "In Runoff" => Ok(AccountStatus::InRunoff),
            "Unique" => Ok(AccountStatus::Unique),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Status of a policy record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Canceled,
    CanceledModBump,
    CanceledRewrite,
    CancellationPending,
    ExpiredMod,
    FrontedPolicy,
    NewBusiness,
    NonRenewal,
    PendingRenewal,
    Runoff,
}

impl PolicyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::Canceled => "Canceled",
            PolicyStatus::CanceledModBump => "Canceled - Mod Bump",
            PolicyStatus::CanceledRewrite => "Canceled - Rewrite",
            PolicyStatus::CancellationPending => "Cancellation Pending",
            PolicyStatus::ExpiredMod => "Expired Mod",
            PolicyStatus::FrontedPolicy => "Fronted Policy - Not Hanover Paper",
            PolicyStatus::NewBusiness => "New Business - Not in PMS Yet",
            PolicyStatus::NonRenewal => "Non-Renewal",
            PolicyStatus::PendingRenewal => "Pending Renewal",
            PolicyStatus::Runoff => "Runoff",
        }
    }

    /// The cancellation date field is only shown/edited for these statuses.
    pub fn unlocks_cancel_date(&self) -> bool {
        matches!(
            self,
            PolicyStatus::Canceled
                | PolicyStatus::CanceledModBump
                | PolicyStatus::CanceledRewrite
                | PolicyStatus::CancellationPending
                | PolicyStatus::NonRenewal
        )
    }

    /// Statuses that close out the location list and stamp a completion date.
    pub fn requires_completion_date(&self) -> bool {
        matches!(
            self,
            PolicyStatus::Canceled
                | PolicyStatus::CanceledModBump
                | PolicyStatus::CanceledRewrite
                | PolicyStatus::NonRenewal
        )
    }

    /// Pending-renewal switches the record onto the renewal book.
    pub fn is_pending_renewal(&self) -> bool {
        matches!(self, PolicyStatus::PendingRenewal)
    }
}

impl Display for PolicyStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PolicyStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Active" => Ok(PolicyStatus::Active),
            "Canceled" => Ok(PolicyStatus::Canceled),
            "Canceled - Mod Bump" => Ok(PolicyStatus::CanceledModBump),
            "Canceled - Rewrite" => Ok(PolicyStatus::CanceledRewrite),
            "Cancellation Pending" => Ok(PolicyStatus::CancellationPending),
            "Expired Mod" => Ok(PolicyStatus::ExpiredMod),
            "Fronted Policy - Not Hanover Paper" => Ok(PolicyStatus::FrontedPolicy),
            "New Business - Not in PMS Yet" => Ok(PolicyStatus::NewBusiness),
            "Non-Renewal" => Ok(PolicyStatus::NonRenewal),
            "Pending Renewal" => Ok(PolicyStatus::PendingRenewal),
            "Runoff" => Ok(PolicyStatus::Runoff),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Parses a status string leniently: unknown or blank values carry none of
/// the special gating rules.
pub fn parse_account_status(value: &str) -> Option<AccountStatus> {
    value.parse().ok()
}

/// See [`parse_account_status`].
pub fn parse_policy_status(value: &str) -> Option<PolicyStatus> {
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_and_runoff_unlock_termination() {
        assert!(AccountStatus::Inactive.unlocks_termination());
        assert!(AccountStatus::InRunoff.unlocks_termination());
        assert!(!AccountStatus::Active.unlocks_termination());
        assert!(!AccountStatus::Unique.unlocks_termination());
    }

    #[test]
    fn only_inactive_requires_notification_date() {
        assert!(AccountStatus::Inactive.requires_notification_date());
        assert!(!AccountStatus::InRunoff.requires_notification_date());
        assert!(!AccountStatus::Active.requires_notification_date());
    }

    #[test]
    fn cancel_date_statuses() {
        for s in [
            PolicyStatus::Canceled,
            PolicyStatus::CanceledModBump,
            PolicyStatus::CanceledRewrite,
            PolicyStatus::CancellationPending,
            PolicyStatus::NonRenewal,
        ] {
            assert!(s.unlocks_cancel_date(), "{s} should unlock cancel date");
        }
        assert!(!PolicyStatus::Active.unlocks_cancel_date());
        assert!(!PolicyStatus::PendingRenewal.unlocks_cancel_date());
    }

    #[test]
    fn cancellation_pending_does_not_complete_locations() {
        assert!(!PolicyStatus::CancellationPending.requires_completion_date());
        assert!(PolicyStatus::Canceled.requires_completion_date());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for s in [
            "Active",
            "Canceled - Mod Bump",
            "Fronted Policy - Not Hanover Paper",
            "Pending Renewal",
        ] {
            assert_eq!(parse_policy_status(s).map(|p| p.as_str()), Some(s));
        }
        assert_eq!(parse_policy_status("Retired"), None);
        assert_eq!(parse_account_status("In Runoff"), Some(AccountStatus::InRunoff));
    }
}
