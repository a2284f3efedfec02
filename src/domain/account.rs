//! Special-account (SAC) aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One special-account record, keyed by customer number.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SacAccount {
    pub customer_num: String,
    pub customer_name: String,
    pub acct_status: String,
    pub sac_contact1: Option<String>,
    pub sac_contact2: Option<String>,
    pub emp_two_title: Option<String>,
    pub emp_two_email: Option<String>,
    pub emp_two_tel: Option<String>,
    pub loss_ctl_rep1: Option<String>,
    pub loss_ctl_rep2: Option<String>,
    pub date_created: Option<NaiveDate>,
    pub related_ent: Option<String>,
    pub date_notif: Option<NaiveDate>,
    pub onboard_date: Option<NaiveDate>,
    pub term_date: Option<NaiveDate>,
    pub acct_owner: Option<String>,
    pub risk_sol_mgr: Option<String>,
    pub ob_method: Option<String>,
    pub term_code: Option<String>,
    pub branch_name: Option<String>,
    pub market_segmentation: Option<String>,
    pub account_notes: Option<String>,
    pub services_req: Option<String>,
    pub exceptions: Option<String>,
    pub hcm_access: Option<String>,
    pub total_prem: Option<String>,
    pub except_type: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub disc_date: Option<NaiveDate>,
    pub business_type: Option<String>,
    pub accom_form: Option<String>,
    pub renew_letter_dt: Option<NaiveDate>,
    pub serv_level: Option<String>,
    pub accom_type: Option<String>,
    pub insured_website: Option<String>,
    pub hcm_loc_only: Option<String>,
    pub ncm_type: Option<String>,
    pub ncm_status: Option<String>,
    pub ncm_start_dt: Option<NaiveDate>,
    pub ncm_end_dt: Option<NaiveDate>,
    pub ncm_term_reason: Option<String>,
    pub ncm_comments: Option<String>,
    pub loss_run_dist_freq: Option<String>,
    pub loss_run_notes: Option<String>,
    pub deduct_dist_freq: Option<String>,
    pub deduct_notes: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub received_date: Option<NaiveDate>,
    pub total_amt_due: Option<String>,
    pub claim_rev_dist_freq: Option<String>,
    pub cr_thresh: Option<String>,
    pub claim_rev_notes: Option<String>,
    pub shi_complete: Option<String>,
    pub shi_comments: Option<String>,
    pub change_notes: Option<String>,
    pub stage: Option<String>,
    pub is_submitted: i32,
}
