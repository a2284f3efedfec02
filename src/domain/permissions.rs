//! Role-based field-level enablement.
//!
//! Every input on the edit screens asks `is_enabled(role, field)` before it
//! renders as editable. Underwriters own data entry and may edit everything;
//! the other roles get fixed allow-lists. A handful of fields carry extra
//! status-dependent conditions on top of this policy — those live with the
//! field's own rules, not here.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Screen role of the signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Underwriter,
    Admin,
    Director,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Underwriter => "Underwriter",
            Role::Admin => "Admin",
            Role::Director => "Director",
        }
    }

    /// Picks the screen role out of the JWT role list.
    pub fn from_roles(roles: &[String]) -> Option<Role> {
        for role in roles {
            match role.as_str() {
                "Underwriter" => return Some(Role::Underwriter),
                "Admin" => return Some(Role::Admin),
                "Director" => return Some(Role::Director),
                _ => {}
            }
        }
        None
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which fields a role may edit on one screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldAccess {
    /// Sentinel: every field is editable.
    All,
    /// Only the listed field names are editable.
    Only(&'static [&'static str]),
}

impl FieldAccess {
    pub fn is_enabled(&self, field: &str) -> bool {
        match self {
            FieldAccess::All => true,
            FieldAccess::Only(fields) => fields.contains(&field),
        }
    }

    /// Field names for template contexts; `None` means the sentinel.
    pub fn allowed_fields(&self) -> Option<&'static [&'static str]> {
        match self {
            FieldAccess::All => None,
            FieldAccess::Only(fields) => Some(fields),
        }
    }
}

/// Scheduling, notes and assignment fields the service team maintains after
/// onboarding. Shared by the program and account screens.
const ADMIN_SERVICING_FIELDS: &[&str] = &[
    "acct_status",
    "spec_acct1",
    "spec_acct2",
    "sac_contact1",
    "sac_contact2",
    "loss_ctl1",
    "loss_ctl2",
    "loss_ctl_rep1",
    "loss_ctl_rep2",
    "acct_owner",
    "risk_sol_mgr",
    "ob_method",
    "accom_type",
    "term_cause",
    "term_code",
    "term_date",
    "date_notif",
    "serv_req",
    "services_req",
    "except_yn",
    "exceptions",
    "except_type",
    "acct_notes",
    "account_notes",
    "loss_run_dist_freq",
    "loss_run_grid",
    "loss_run_notes",
    "deduct_dist_freq",
    "deduct_grid",
    "deduct_notes",
    "due_date",
    "received_date",
    "total_amt_due",
    "claim_rev_dist_freq",
    "cr_thresh",
    "claim_rev_grid",
    "claim_rev_notes",
    "shi_complete",
    "shi_notes",
    "shi_comments",
    "change_notes",
];

const DIRECTOR_REVIEW_FIELDS: &[&str] = &["change_notes"];

const ADMIN_POLICY_FIELDS: &[&str] = &[
    "policy_status",
    "loc_list",
    "loc_coded",
    "loc_comp_date",
    "canceled_date",
    "dnr_date",
    "dnr_status",
    "renew_diary_dt",
    "policy_notes",
    "insured_notes",
];

const ADMIN_POLICY_TYPE_FIELDS: &[&str] = &[
    "policy_status",
    "loc_coded",
    "term_reason",
    "term_date",
    "policy_notes",
    "insured_notes",
    "contact_instruct",
    "coverage_instruct",
    "litigation_instruct",
    "recovery_instruct",
    "misc_cov_instruct",
    "acct_loc_notes",
    "cct_other_notes",
    "cct_assg_instruct",
];

pub fn program_field_access(role: Role) -> FieldAccess {
    match role {
        Role::Underwriter => FieldAccess::All,
        Role::Admin => FieldAccess::Only(ADMIN_SERVICING_FIELDS),
        Role::Director => FieldAccess::Only(DIRECTOR_REVIEW_FIELDS),
    }
}

pub fn account_field_access(role: Role) -> FieldAccess {
    match role {
        Role::Underwriter => FieldAccess::All,
        Role::Admin => FieldAccess::Only(ADMIN_SERVICING_FIELDS),
        Role::Director => FieldAccess::Only(DIRECTOR_REVIEW_FIELDS),
    }
}

pub fn policy_field_access(role: Role) -> FieldAccess {
    match role {
        Role::Underwriter => FieldAccess::All,
        Role::Admin => FieldAccess::Only(ADMIN_POLICY_FIELDS),
        Role::Director => FieldAccess::Only(DIRECTOR_REVIEW_FIELDS),
    }
}

pub fn policy_type_field_access(role: Role) -> FieldAccess {
    match role {
        Role::Underwriter => FieldAccess::All,
        Role::Admin => FieldAccess::Only(ADMIN_POLICY_TYPE_FIELDS),
        Role::Director => FieldAccess::Only(DIRECTOR_REVIEW_FIELDS),
    }
}

/// Directors may not re-edit a record the service team has already submitted.
pub fn locked_for_director(role: Role, stage: Option<&str>, is_submitted: i32) -> bool {
    role == Role::Director && stage == Some(Role::Admin.as_str()) && is_submitted == 1
}
