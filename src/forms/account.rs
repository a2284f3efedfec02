use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::account::SacAccount;
use crate::domain::dates::format_form_date;
use crate::domain::schedule::ScheduleGrid;
use crate::domain::status::parse_account_status;
use crate::forms::schedule::{claim_review_grid, deductible_grid, loss_run_grid};
use crate::forms::{FormError, opt_currency, opt_date, opt_note, opt_text};

/// Form state for the special-account screen.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
pub struct AccountForm {
    #[validate(length(min = 1, message = "Customer Number is mandatory and cannot be empty"))]
    #[serde(default)]
    pub customer_num: String,
    #[validate(length(min = 1, message = "Customer Name is mandatory and cannot be empty"))]
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub acct_status: String,
    #[serde(default)]
    pub sac_contact1: String,
    #[serde(default)]
    pub sac_contact2: String,
    #[serde(default)]
    pub emp_two_title: String,
    #[serde(default)]
    pub emp_two_email: String,
    #[serde(default)]
    pub emp_two_tel: String,
    #[serde(default)]
    pub loss_ctl_rep1: String,
    #[serde(default)]
    pub loss_ctl_rep2: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub related_ent: String,
    #[serde(default)]
    pub date_notif: String,
    #[serde(default)]
    pub onboard_date: String,
    #[serde(default)]
    pub term_date: String,
    #[serde(default)]
    pub acct_owner: String,
    #[serde(default)]
    pub risk_sol_mgr: String,
    #[serde(default)]
    pub ob_method: String,
    #[serde(default)]
    pub term_code: String,
    #[serde(default)]
    pub branch_name: String,
    #[serde(default)]
    pub market_segmentation: String,
    #[serde(default)]
    pub account_notes: String,
    #[serde(default)]
    pub services_req: String,
    #[serde(default)]
    pub exceptions: String,
    #[serde(default)]
    pub hcm_access: String,
    #[serde(default)]
    pub total_prem: String,
    #[serde(default)]
    pub except_type: String,
    #[serde(default)]
    pub effective_date: String,
    #[serde(default)]
    pub disc_date: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub accom_form: String,
    #[serde(default)]
    pub renew_letter_dt: String,
    #[serde(default)]
    pub serv_level: String,
    #[serde(default)]
    pub accom_type: String,
    #[serde(default)]
    pub insured_website: String,
    #[serde(default)]
    pub hcm_loc_only: String,
    #[serde(default)]
    pub ncm_type: String,
    #[serde(default)]
    pub ncm_status: String,
    #[serde(default)]
    pub ncm_start_dt: String,
    #[serde(default)]
    pub ncm_end_dt: String,
    #[serde(default)]
    pub ncm_term_reason: String,
    #[serde(default)]
    pub ncm_comments: String,
    #[serde(default)]
    pub loss_run_dist_freq: String,
    #[serde(default)]
    pub loss_run_notes: String,
    #[serde(default)]
    pub deduct_dist_freq: String,
    #[serde(default)]
    pub deduct_notes: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub received_date: String,
    #[serde(default)]
    pub total_amt_due: String,
    #[serde(default)]
    pub claim_rev_dist_freq: String,
    #[serde(default)]
    pub cr_thresh: String,
    #[serde(default)]
    pub claim_rev_notes: String,
    #[serde(default)]
    pub shi_complete: String,
    #[serde(default)]
    pub shi_comments: String,
    #[serde(default)]
    pub change_notes: String,

    // Loss-run scheduling grid, posted as parallel per-month fields.
    #[serde(default)]
    pub loss_run_months: Vec<i32>,
    #[serde(default)]
    pub loss_run_sent: Vec<String>,
    #[serde(default)]
    pub loss_run_no_claims: Vec<i32>,
    #[serde(default)]
    pub loss_run_ad_hoc: Vec<i32>,

    // Deductible-bill scheduling grid.
    #[serde(default)]
    pub deduct_months: Vec<i32>,
    #[serde(default)]
    pub deduct_sent: Vec<String>,

    // Claim-review scheduling grid.
    #[serde(default)]
    pub claim_rev_months: Vec<i32>,
    #[serde(default)]
    pub claim_rev_sent: Vec<String>,
    #[serde(default)]
    pub claim_rev_report_type: Vec<String>,
    #[serde(default)]
    pub claim_rev_delivery: Vec<String>,
    #[serde(default)]
    pub claim_rev_narratives: Vec<String>,

    // Workflow controls posted alongside the record fields.
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub is_create: bool,
    #[serde(default)]
    pub from_pending: bool,
    /// Set once the user has confirmed the premium/service-level warning.
    #[serde(default)]
    pub acknowledge_conflict: bool,
}

impl AccountForm {
    /// Fresh defaults for a new account.
    pub fn defaults(today: chrono::NaiveDate) -> Self {
        Self {
            acct_status: "Active".to_string(),
            date_created: format_form_date(Some(today)),
            cr_thresh: "50000".to_string(),
            shi_complete: "Yes".to_string(),
            hcm_loc_only: "No".to_string(),
            ..Self::default()
        }
    }

    /// Form values for an existing record; `None` renders as `""`.
    pub fn from_record(record: &SacAccount) -> Self {
        Self {
            customer_num: record.customer_num.clone(),
            customer_name: record.customer_name.clone(),
            acct_status: record.acct_status.clone(),
            sac_contact1: record.sac_contact1.clone().unwrap_or_default(),
            sac_contact2: record.sac_contact2.clone().unwrap_or_default(),
            emp_two_title: record.emp_two_title.clone().unwrap_or_default(),
            emp_two_email: record.emp_two_email.clone().unwrap_or_default(),
            emp_two_tel: record.emp_two_tel.clone().unwrap_or_default(),
            loss_ctl_rep1: record.loss_ctl_rep1.clone().unwrap_or_default(),
            loss_ctl_rep2: record.loss_ctl_rep2.clone().unwrap_or_default(),
            date_created: format_form_date(record.date_created),
            related_ent: record.related_ent.clone().unwrap_or_default(),
            date_notif: format_form_date(record.date_notif),
            onboard_date: format_form_date(record.onboard_date),
            term_date: format_form_date(record.term_date),
            acct_owner: record.acct_owner.clone().unwrap_or_default(),
            risk_sol_mgr: record.risk_sol_mgr.clone().unwrap_or_default(),
            ob_method: record.ob_method.clone().unwrap_or_default(),
            term_code: record.term_code.clone().unwrap_or_default(),
            branch_name: record.branch_name.clone().unwrap_or_default(),
            market_segmentation: record.market_segmentation.clone().unwrap_or_default(),
            account_notes: record.account_notes.clone().unwrap_or_default(),
            services_req: record.services_req.clone().unwrap_or_default(),
            exceptions: record.exceptions.clone().unwrap_or_default(),
            hcm_access: record.hcm_access.clone().unwrap_or_default(),
            total_prem: record.total_prem.clone().unwrap_or_default(),
            except_type: record.except_type.clone().unwrap_or_default(),
            effective_date: format_form_date(record.effective_date),
            disc_date: format_form_date(record.disc_date),
            business_type: record.business_type.clone().unwrap_or_default(),
            accom_form: record.accom_form.clone().unwrap_or_default(),
            renew_letter_dt: format_form_date(record.renew_letter_dt),
            serv_level: record.serv_level.clone().unwrap_or_default(),
            accom_type: record.accom_type.clone().unwrap_or_default(),
            insured_website: record.insured_website.clone().unwrap_or_default(),
            hcm_loc_only: record.hcm_loc_only.clone().unwrap_or_default(),
            ncm_type: record.ncm_type.clone().unwrap_or_default(),
            ncm_status: record.ncm_status.clone().unwrap_or_default(),
            ncm_start_dt: format_form_date(record.ncm_start_dt),
            ncm_end_dt: format_form_date(record.ncm_end_dt),
            ncm_term_reason: record.ncm_term_reason.clone().unwrap_or_default(),
            ncm_comments: record.ncm_comments.clone().unwrap_or_default(),
            loss_run_dist_freq: record.loss_run_dist_freq.clone().unwrap_or_default(),
            loss_run_notes: record.loss_run_notes.clone().unwrap_or_default(),
            deduct_dist_freq: record.deduct_dist_freq.clone().unwrap_or_default(),
            deduct_notes: record.deduct_notes.clone().unwrap_or_default(),
            due_date: format_form_date(record.due_date),
            received_date: format_form_date(record.received_date),
            total_amt_due: record.total_amt_due.clone().unwrap_or_default(),
            claim_rev_dist_freq: record.claim_rev_dist_freq.clone().unwrap_or_default(),
            cr_thresh: record.cr_thresh.clone().unwrap_or_default(),
            claim_rev_notes: record.claim_rev_notes.clone().unwrap_or_default(),
            shi_complete: record.shi_complete.clone().unwrap_or_default(),
            shi_comments: record.shi_comments.clone().unwrap_or_default(),
            change_notes: record.change_notes.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Status-dependent required fields, checked after the derive rules.
    pub fn validate_status_rules(&self) -> Result<(), FormError> {
        let requires_notification = parse_account_status(&self.acct_status)
            .is_some_and(|status| status.requires_notification_date());
        if requires_notification && self.date_notif.trim().is_empty() {
            return Err(FormError::Required(
                "Notification date is mandatory and cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses the scalar fields into the domain record, clearing termination
    /// fields that are incompatible with the current status.
    pub fn to_record(&self) -> Result<SacAccount, FormError> {
        let mut record = SacAccount {
            customer_num: self.customer_num.trim().to_string(),
            customer_name: self.customer_name.trim().to_string(),
            acct_status: self.acct_status.trim().to_string(),
            sac_contact1: opt_text(&self.sac_contact1),
            sac_contact2: opt_text(&self.sac_contact2),
            emp_two_title: opt_text(&self.emp_two_title),
            emp_two_email: opt_text(&self.emp_two_email),
            emp_two_tel: opt_text(&self.emp_two_tel),
            loss_ctl_rep1: opt_text(&self.loss_ctl_rep1),
            loss_ctl_rep2: opt_text(&self.loss_ctl_rep2),
            date_created: opt_date(&self.date_created, "Created Date")?,
            related_ent: opt_text(&self.related_ent),
            date_notif: opt_date(&self.date_notif, "Notification Date")?,
            onboard_date: opt_date(&self.onboard_date, "On Board Date")?,
            term_date: opt_date(&self.term_date, "Termination Date")?,
            acct_owner: opt_text(&self.acct_owner),
            risk_sol_mgr: opt_text(&self.risk_sol_mgr),
            ob_method: opt_text(&self.ob_method),
            term_code: opt_text(&self.term_code),
            branch_name: opt_text(&self.branch_name),
            market_segmentation: opt_text(&self.market_segmentation),
            account_notes: opt_note(&self.account_notes),
            services_req: opt_text(&self.services_req),
            exceptions: opt_text(&self.exceptions),
            hcm_access: opt_text(&self.hcm_access),
            total_prem: opt_currency(&self.total_prem),
            except_type: opt_text(&self.except_type),
            effective_date: opt_date(&self.effective_date, "Effective Date")?,
            disc_date: opt_date(&self.disc_date, "Discontinued Date")?,
            business_type: opt_text(&self.business_type),
            accom_form: opt_text(&self.accom_form),
            renew_letter_dt: opt_date(&self.renew_letter_dt, "Renewal Letter Date")?,
            serv_level: opt_text(&self.serv_level),
            accom_type: opt_text(&self.accom_type),
            insured_website: opt_text(&self.insured_website),
            hcm_loc_only: opt_text(&self.hcm_loc_only),
            ncm_type: opt_text(&self.ncm_type),
            ncm_status: opt_text(&self.ncm_status),
            ncm_start_dt: opt_date(&self.ncm_start_dt, "NT24 Start Date")?,
            ncm_end_dt: opt_date(&self.ncm_end_dt, "NT24 End Date")?,
            ncm_term_reason: opt_text(&self.ncm_term_reason),
            ncm_comments: opt_note(&self.ncm_comments),
            loss_run_dist_freq: opt_text(&self.loss_run_dist_freq),
            loss_run_notes: opt_note(&self.loss_run_notes),
            deduct_dist_freq: opt_text(&self.deduct_dist_freq),
            deduct_notes: opt_note(&self.deduct_notes),
            due_date: opt_date(&self.due_date, "Due Date")?,
            received_date: opt_date(&self.received_date, "Received Date")?,
            total_amt_due: opt_currency(&self.total_amt_due),
            claim_rev_dist_freq: opt_text(&self.claim_rev_dist_freq),
            cr_thresh: opt_text(&self.cr_thresh),
            claim_rev_notes: opt_note(&self.claim_rev_notes),
            shi_complete: opt_text(&self.shi_complete),
            shi_comments: opt_note(&self.shi_comments),
            change_notes: opt_note(&self.change_notes),
            stage: None,
            is_submitted: 0,
        };

        let unlocks_termination = parse_account_status(&record.acct_status)
            .is_some_and(|status| status.unlocks_termination());
        if !unlocks_termination {
            record.date_notif = None;
            record.term_date = None;
            record.term_code = None;
        }

        Ok(record)
    }

    /// Decodes the three scheduling grids out of the posted fields.
    pub fn grids(&self) -> Result<(ScheduleGrid, ScheduleGrid, ScheduleGrid), FormError> {
        let loss_run = loss_run_grid(
            &self.loss_run_months,
            &self.loss_run_sent,
            &self.loss_run_no_claims,
            &self.loss_run_ad_hoc,
        )?;
        let deductible = deductible_grid(&self.deduct_months, &self.deduct_sent)?;
        let claim_review = claim_review_grid(
            &self.claim_rev_months,
            &self.claim_rev_sent,
            &self.claim_rev_report_type,
            &self.claim_rev_delivery,
            &self.claim_rev_narratives,
        )?;
        Ok((loss_run, deductible, claim_review))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn filled_form() -> AccountForm {
        AccountForm {
            customer_num: "C104233".to_string(),
            customer_name: "Granite Mutual Holdings".to_string(),
            acct_status: "Active".to_string(),
            ..AccountForm::default()
        }
    }

    #[test]
    fn missing_customer_number_reports_its_message() {
        let form = AccountForm {
            customer_num: String::new(),
            ..filled_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            crate::forms::first_validation_message(&errors),
            "Customer Number is mandatory and cannot be empty"
        );
    }

    #[test]
    fn runoff_keeps_termination_fields() {
        let form = AccountForm {
            acct_status: "In Runoff".to_string(),
            term_date: "2025-06-30".to_string(),
            term_code: "Non-payment".to_string(),
            date_notif: "2025-06-01".to_string(),
            ..filled_form()
        };
        let record = form.to_record().unwrap();
        assert!(record.term_date.is_some());
        assert_eq!(record.term_code.as_deref(), Some("Non-payment"));
        assert!(record.date_notif.is_some());
    }

    #[test]
    fn inactive_requires_notification_date() {
        let form = AccountForm {
            acct_status: "Inactive".to_string(),
            ..filled_form()
        };
        assert!(form.validate_status_rules().is_err());

        let form = AccountForm {
            acct_status: "Inactive".to_string(),
            date_notif: "2025-06-01".to_string(),
            ..filled_form()
        };
        assert!(form.validate_status_rules().is_ok());
    }

    #[test]
    fn amounts_normalize_to_currency_strings() {
        let form = AccountForm {
            total_prem: "750,000".to_string(),
            total_amt_due: "12500.75".to_string(),
            ..filled_form()
        };
        let record = form.to_record().unwrap();
        assert_eq!(record.total_prem.as_deref(), Some("750000.00"));
        assert_eq!(record.total_amt_due.as_deref(), Some("12500.75"));
    }
}
