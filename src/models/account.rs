use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::account::SacAccount as DomainAccount;

/// Diesel model for [`crate::domain::account::SacAccount`].
///
/// Serves reads and the natural-key upsert; `AsChangeset` treats `None` as
/// `NULL` so a cleared field clears the column.
#[derive(Debug, Clone, Identifiable, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::sac_accounts)]
#[diesel(primary_key(customer_num))]
#[diesel(treat_none_as_null = true)]
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

impl From<SacAccount> for DomainAccount {
    fn from(record: SacAccount) -> Self {
        Self {
            customer_num: record.customer_num,
            customer_name: record.customer_name,
            acct_status: record.acct_status,
            sac_contact1: record.sac_contact1,
            sac_contact2: record.sac_contact2,
            emp_two_title: record.emp_two_title,
            emp_two_email: record.emp_two_email,
            emp_two_tel: record.emp_two_tel,
            loss_ctl_rep1: record.loss_ctl_rep1,
            loss_ctl_rep2: record.loss_ctl_rep2,
            date_created: record.date_created,
            related_ent: record.related_ent,
            date_notif: record.date_notif,
            onboard_date: record.onboard_date,
            term_date: record.term_date,
            acct_owner: record.acct_owner,
            risk_sol_mgr: record.risk_sol_mgr,
            ob_method: record.ob_method,
            term_code: record.term_code,
            branch_name: record.branch_name,
            market_segmentation: record.market_segmentation,
            account_notes: record.account_notes,
            services_req: record.services_req,
            exceptions: record.exceptions,
            hcm_access: record.hcm_access,
            total_prem: record.total_prem,
            except_type: record.except_type,
            effective_date: record.effective_date,
            disc_date: record.disc_date,
            business_type: record.business_type,
            accom_form: record.accom_form,
            renew_letter_dt: record.renew_letter_dt,
            serv_level: record.serv_level,
            accom_type: record.accom_type,
            insured_website: record.insured_website,
            hcm_loc_only: record.hcm_loc_only,
            ncm_type: record.ncm_type,
            ncm_status: record.ncm_status,
            ncm_start_dt: record.ncm_start_dt,
            ncm_end_dt: record.ncm_end_dt,
            ncm_term_reason: record.ncm_term_reason,
            ncm_comments: record.ncm_comments,
            loss_run_dist_freq: record.loss_run_dist_freq,
            loss_run_notes: record.loss_run_notes,
            deduct_dist_freq: record.deduct_dist_freq,
            deduct_notes: record.deduct_notes,
            due_date: record.due_date,
            received_date: record.received_date,
            total_amt_due: record.total_amt_due,
            claim_rev_dist_freq: record.claim_rev_dist_freq,
            cr_thresh: record.cr_thresh,
            claim_rev_notes: record.claim_rev_notes,
            shi_complete: record.shi_complete,
            shi_comments: record.shi_comments,
            change_notes: record.change_notes,
            stage: record.stage,
            is_submitted: record.is_submitted,
        }
    }
}

impl From<&DomainAccount> for SacAccount {
    fn from(record: &DomainAccount) -> Self {
        Self {
            customer_num: record.customer_num.clone(),
            customer_name: record.customer_name.clone(),
            acct_status: record.acct_status.clone(),
            sac_contact1: record.sac_contact1.clone(),
            sac_contact2: record.sac_contact2.clone(),
            emp_two_title: record.emp_two_title.clone(),
            emp_two_email: record.emp_two_email.clone(),
            emp_two_tel: record.emp_two_tel.clone(),
            loss_ctl_rep1: record.loss_ctl_rep1.clone(),
            loss_ctl_rep2: record.loss_ctl_rep2.clone(),
            date_created: record.date_created,
            related_ent: record.related_ent.clone(),
            date_notif: record.date_notif,
            onboard_date: record.onboard_date,
            term_date: record.term_date,
            acct_owner: record.acct_owner.clone(),
            risk_sol_mgr: record.risk_sol_mgr.clone(),
            ob_method: record.ob_method.clone(),
            term_code: record.term_code.clone(),
            branch_name: record.branch_name.clone(),
            market_segmentation: record.market_segmentation.clone(),
            account_notes: record.account_notes.clone(),
            services_req: record.services_req.clone(),
            exceptions: record.exceptions.clone(),
            hcm_access: record.hcm_access.clone(),
            total_prem: record.total_prem.clone(),
            except_type: record.except_type.clone(),
            effective_date: record.effective_date,
            disc_date: record.disc_date,
            business_type: record.business_type.clone(),
            accom_form: record.accom_form.clone(),
            renew_letter_dt: record.renew_letter_dt,
            serv_level: record.serv_level.clone(),
            accom_type: record.accom_type.clone(),
            insured_website: record.insured_website.clone(),
            hcm_loc_only: record.hcm_loc_only.clone(),
            ncm_type: record.ncm_type.clone(),
            ncm_status: record.ncm_status.clone(),
            ncm_start_dt: record.ncm_start_dt,
            ncm_end_dt: record.ncm_end_dt,
            ncm_term_reason: record.ncm_term_reason.clone(),
            ncm_comments: record.ncm_comments.clone(),
            loss_run_dist_freq: record.loss_run_dist_freq.clone(),
            loss_run_notes: record.loss_run_notes.clone(),
            deduct_dist_freq: record.deduct_dist_freq.clone(),
            deduct_notes: record.deduct_notes.clone(),
            due_date: record.due_date,
            received_date: record.received_date,
            total_amt_due: record.total_amt_due.clone(),
            claim_rev_dist_freq: record.claim_rev_dist_freq.clone(),
            cr_thresh: record.cr_thresh.clone(),
            claim_rev_notes: record.claim_rev_notes.clone(),
            shi_complete: record.shi_complete.clone(),
            shi_comments: record.shi_comments.clone(),
            change_notes: record.change_notes.clone(),
            stage: record.stage.clone(),
            is_submitted: record.is_submitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_round_trips_through_domain() {
        let domain = DomainAccount {
            customer_num: "C104233".to_string(),
            customer_name: "Granite Mutual Holdings".to_string(),
            acct_status: "Active".to_string(),
            serv_level: Some("Comprehensive".to_string()),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            is_submitted: 0,
            ..DomainAccount::default()
        };

        let model: SacAccount = (&domain).into();
        let back: DomainAccount = model.into();
        assert_eq!(back, domain);
    }
}
