//! Summary rows returned by the list/search views.
//!
//! The column set varies with the chosen search field, mirroring the
//! type-ahead search screens.

use serde::Serialize;

/// Program search row; agent columns only present for producer-code search.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgramSearchRow {
    pub program_name: String,
    pub onboard_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
}

/// Account search row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountSearchRow {
    pub customer_num: String,
    pub customer_name: String,
    pub acct_status: String,
    pub onboard_date: String,
}

/// Policy list row for the per-customer policy browser.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PolicySummary {
    pub pk_number: i32,
    pub pol_pref: String,
    pub policy_num: String,
    pub pol_mod: String,
    pub account_name: String,
    pub incept_date: String,
    pub exp_date: String,
    pub policy_type: String,
    pub policy_status: String,
}

/// Client-side filters applied to the policy list.
#[derive(Debug, Clone, Default)]
pub struct PolicyListFilter {
    pub status: Option<String>,
    pub policy_num: Option<String>,
    pub policy_type: Option<String>,
}
