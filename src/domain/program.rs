//! Affinity program aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One affinity program record, keyed by its program name.
///
/// Loaded and persisted wholesale: the edit screen binds every field, and the
/// upsert writes the full record back under the natural key. `None` means the
/// column has never been set; the form layer renders it as an empty string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AffinityProgram {
    pub program_name: String,
    pub acct_status: String,
    pub spec_acct1: Option<String>,
    pub spec_acct2: Option<String>,
    pub loss_ctl1: Option<String>,
    pub loss_ctl2: Option<String>,
    pub dt_created: Option<NaiveDate>,
    pub acct_owner: Option<String>,
    pub risk_sol_mgr: Option<String>,
    pub onboard_dt: Option<NaiveDate>,
    pub bus_type: Option<String>,
    pub ob_method: Option<String>,
    pub total_prem: Option<String>,
    pub accom_type: Option<String>,
    pub term_cause: Option<String>,
    pub term_date: Option<NaiveDate>,
    pub branch_val: Option<String>,
    pub date_notif: Option<NaiveDate>,
    pub serv_req: Option<String>,
    pub except_yn: Option<String>,
    pub except_type: Option<String>,
    pub acct_notes: Option<String>,
    pub loss_run_dist_freq: Option<String>,
    pub loss_run_notes: Option<String>,
    pub claim_rev_dist_freq: Option<String>,
    pub cr_thresh: Option<String>,
    pub claim_rev_notes: Option<String>,
    pub shi_complete: Option<String>,
    pub shi_notes: Option<String>,
    pub change_notes: Option<String>,
    pub stage: Option<String>,
    pub is_submitted: i32,
}
