use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::program::AffinityProgram as DomainProgram;

/// Diesel model for [`crate::domain::program::AffinityProgram`].
///
/// The same struct serves reads and the natural-key upsert; `AsChangeset`
/// treats `None` as `NULL` so a cleared field clears the column instead of
/// silently keeping the old value.
#[derive(Debug, Clone, Identifiable, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::affinity_programs)]
#[diesel(primary_key(program_name))]
#[diesel(treat_none_as_null = true)]
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

impl From<AffinityProgram> for DomainProgram {
    fn from(record: AffinityProgram) -> Self {
        Self {
            program_name: record.program_name,
            acct_status: record.acct_status,
            spec_acct1: record.spec_acct1,
            spec_acct2: record.spec_acct2,
            loss_ctl1: record.loss_ctl1,
            loss_ctl2: record.loss_ctl2,
            dt_created: record.dt_created,
            acct_owner: record.acct_owner,
            risk_sol_mgr: record.risk_sol_mgr,
            onboard_dt: record.onboard_dt,
            bus_type: record.bus_type,
            ob_method: record.ob_method,
            total_prem: record.total_prem,
            accom_type: record.accom_type,
            term_cause: record.term_cause,
            term_date: record.term_date,
            branch_val: record.branch_val,
            date_notif: record.date_notif,
            serv_req: record.serv_req,
            except_yn: record.except_yn,
            except_type: record.except_type,
            acct_notes: record.acct_notes,
            loss_run_dist_freq: record.loss_run_dist_freq,
            loss_run_notes: record.loss_run_notes,
            claim_rev_dist_freq: record.claim_rev_dist_freq,
            cr_thresh: record.cr_thresh,
            claim_rev_notes: record.claim_rev_notes,
            shi_complete: record.shi_complete,
            shi_notes: record.shi_notes,
            change_notes: record.change_notes,
            stage: record.stage,
            is_submitted: record.is_submitted,
        }
    }
}

impl From<&DomainProgram> for AffinityProgram {
    fn from(record: &DomainProgram) -> Self {
        Self {
            program_name: record.program_name.clone(),
            acct_status: record.acct_status.clone(),
            spec_acct1: record.spec_acct1.clone(),
            spec_acct2: record.spec_acct2.clone(),
            loss_ctl1: record.loss_ctl1.clone(),
            loss_ctl2: record.loss_ctl2.clone(),
            dt_created: record.dt_created,
            acct_owner: record.acct_owner.clone(),
            risk_sol_mgr: record.risk_sol_mgr.clone(),
            onboard_dt: record.onboard_dt,
            bus_type: record.bus_type.clone(),
            ob_method: record.ob_method.clone(),
            total_prem: record.total_prem.clone(),
            accom_type: record.accom_type.clone(),
            term_cause: record.term_cause.clone(),
            term_date: record.term_date,
            branch_val: record.branch_val.clone(),
            date_notif: record.date_notif,
            serv_req: record.serv_req.clone(),
            except_yn: record.except_yn.clone(),
            except_type: record.except_type.clone(),
            acct_notes: record.acct_notes.clone(),
            loss_run_dist_freq: record.loss_run_dist_freq.clone(),
            loss_run_notes: record.loss_run_notes.clone(),
            claim_rev_dist_freq: record.claim_rev_dist_freq.clone(),
            cr_thresh: record.cr_thresh.clone(),
            claim_rev_notes: record.claim_rev_notes.clone(),
            shi_complete: record.shi_complete.clone(),
            shi_notes: record.shi_notes.clone(),
            change_notes: record.change_notes.clone(),
            stage: record.stage.clone(),
            is_submitted: record.is_submitted,
        }
    }
}
