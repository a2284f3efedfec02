//! Report distribution lists.
//!
//! Who receives the scheduled loss-run and claim-review reports is derived
//! from the contact-assignment fields on the program/account screens: the
//! sync handler keeps one entry per attention-to name in each list.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Which distribution list an entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionList {
    LossRun,
    ClaimReview,
}

impl DistributionList {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionList::LossRun => "loss_run",
            DistributionList::ClaimReview => "claim_review",
        }
    }

    /// Both lists, in the order the sync handler touches them.
    pub const BOTH: [DistributionList; 2] =
        [DistributionList::ClaimReview, DistributionList::LossRun];
}

impl Display for DistributionList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DistributionList {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loss_run" => Ok(DistributionList::LossRun),
            "claim_review" => Ok(DistributionList::ClaimReview),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// One recipient entry in a distribution list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Natural key of the owning record (program name or customer number).
    pub owner: String,
    pub list: DistributionList,
    /// Why this person receives the report ("Account Owner", ...).
    pub recipient_category: String,
    /// Display name the report is attention-to; the de-dup key within a list.
    pub attn_to: String,
    pub email_address: String,
    pub dist_via: String,
}

/// The contact-assignment fields whose edits drive the distribution sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactField {
    AcctOwner,
    LossCtlRep1,
    LossCtlRep2,
    Underwriter,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::AcctOwner => "acct_owner",
            ContactField::LossCtlRep1 => "loss_ctl_rep1",
            ContactField::LossCtlRep2 => "loss_ctl_rep2",
            ContactField::Underwriter => "underwriter_name",
        }
    }

    /// Account owners and underwriters resolve against the staff directory;
    /// the loss-control assignments resolve against the rep roster.
    pub fn uses_staff_directory(&self) -> bool {
        matches!(self, ContactField::AcctOwner | ContactField::Underwriter)
    }
}

impl FromStr for ContactField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "acct_owner" => Ok(ContactField::AcctOwner),
            "loss_ctl_rep1" => Ok(ContactField::LossCtlRep1),
            "loss_ctl_rep2" => Ok(ContactField::LossCtlRep2),
            "underwriter_name" => Ok(ContactField::Underwriter),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}
