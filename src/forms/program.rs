use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dates::format_form_date;
use crate::domain::program::AffinityProgram;
use crate::domain::schedule::ScheduleGrid;
use crate::domain::status::parse_account_status;
use crate::forms::schedule::{claim_review_grid, loss_run_grid};
use crate::forms::{FormError, opt_currency, opt_date, opt_note, opt_text};

/// Form state for the affinity program screen.
///
/// Doubles as the rendered form values and the decoded POST payload; every
/// scalar is a defined string so the template never sees a null.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
pub struct ProgramForm {
    #[validate(length(min = 1, message = "Program Name is mandatory and cannot be empty"))]
    #[serde(default)]
    pub program_name: String,
    #[serde(default)]
    pub acct_status: String,
    #[serde(default)]
    pub spec_acct1: String,
    #[serde(default)]
    pub spec_acct2: String,
    #[serde(default)]
    pub loss_ctl1: String,
    #[serde(default)]
    pub loss_ctl2: String,
    #[serde(default)]
    pub dt_created: String,
    #[serde(default)]
    pub acct_owner: String,
    #[serde(default)]
    pub risk_sol_mgr: String,
    #[validate(length(min = 1, message = "On Board Date is mandatory and cannot be empty"))]
    #[serde(default)]
    pub onboard_dt: String,
    #[serde(default)]
    pub bus_type: String,
    #[serde(default)]
    pub ob_method: String,
    #[serde(default)]
    pub total_prem: String,
    #[serde(default)]
    pub accom_type: String,
    #[serde(default)]
    pub term_cause: String,
    #[serde(default)]
    pub term_date: String,
    #[validate(length(min = 1, message = "Branch Name is mandatory and cannot be empty"))]
    #[serde(default)]
    pub branch_val: String,
    #[serde(default)]
    pub date_notif: String,
    #[serde(default)]
    pub serv_req: String,
    #[serde(default)]
    pub except_yn: String,
    #[serde(default)]
    pub except_type: String,
    #[serde(default)]
    pub acct_notes: String,
    #[serde(default)]
    pub loss_run_dist_freq: String,
    #[serde(default)]
    pub loss_run_notes: String,
    #[serde(default)]
    pub claim_rev_dist_freq: String,
    #[serde(default)]
    pub cr_thresh: String,
    #[serde(default)]
    pub claim_rev_notes: String,
    #[serde(default)]
    pub shi_complete: String,
    #[serde(default)]
    pub shi_notes: String,
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
}

impl ProgramForm {
    /// Fresh defaults for a new program.
    pub fn defaults(today: chrono::NaiveDate) -> Self {
        Self {
            acct_status: "Active".to_string(),
            bus_type: "Affinity".to_string(),
            dt_created: format_form_date(Some(today)),
            cr_thresh: "50000".to_string(),
            shi_complete: "Yes".to_string(),
            ..Self::default()
        }
    }

    /// Form values for an existing record; `None` renders as `""`.
    pub fn from_record(record: &AffinityProgram) -> Self {
        Self {
            program_name: record.program_name.clone(),
            acct_status: record.acct_status.clone(),
            spec_acct1: record.spec_acct1.clone().unwrap_or_default(),
            spec_acct2: record.spec_acct2.clone().unwrap_or_default(),
            loss_ctl1: record.loss_ctl1.clone().unwrap_or_default(),
            loss_ctl2: record.loss_ctl2.clone().unwrap_or_default(),
            dt_created: format_form_date(record.dt_created),
            acct_owner: record.acct_owner.clone().unwrap_or_default(),
            risk_sol_mgr: record.risk_sol_mgr.clone().unwrap_or_default(),
            onboard_dt: format_form_date(record.onboard_dt),
            bus_type: record.bus_type.clone().unwrap_or_default(),
            ob_method: record.ob_method.clone().unwrap_or_default(),
            total_prem: record.total_prem.clone().unwrap_or_default(),
            accom_type: record.accom_type.clone().unwrap_or_default(),
            term_cause: record.term_cause.clone().unwrap_or_default(),
            term_date: format_form_date(record.term_date),
            branch_val: record.branch_val.clone().unwrap_or_default(),
            date_notif: format_form_date(record.date_notif),
            serv_req: record.serv_req.clone().unwrap_or_default(),
            except_yn: record.except_yn.clone().unwrap_or_default(),
            except_type: record.except_type.clone().unwrap_or_default(),
            acct_notes: record.acct_notes.clone().unwrap_or_default(),
            loss_run_dist_freq: record.loss_run_dist_freq.clone().unwrap_or_default(),
            loss_run_notes: record.loss_run_notes.clone().unwrap_or_default(),
            claim_rev_dist_freq: record.claim_rev_dist_freq.clone().unwrap_or_default(),
            cr_thresh: record.cr_thresh.clone().unwrap_or_default(),
            claim_rev_notes: record.claim_rev_notes.clone().unwrap_or_default(),
            shi_complete: record.shi_complete.clone().unwrap_or_default(),
            shi_notes: record.shi_notes.clone().unwrap_or_default(),
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

    /// Parses the scalar fields into the domain record.
    ///
    /// Termination fields incompatible with the current status are cleared
    /// rather than persisted stale.
    pub fn to_record(&self) -> Result<AffinityProgram, FormError> {
        let mut record = AffinityProgram {
            program_name: self.program_name.trim().to_string(),
            acct_status: self.acct_status.trim().to_string(),
            spec_acct1: opt_text(&self.spec_acct1),
            spec_acct2: opt_text(&self.spec_acct2),
            loss_ctl1: opt_text(&self.loss_ctl1),
            loss_ctl2: opt_text(&self.loss_ctl2),
            dt_created: opt_date(&self.dt_created, "Created Date")?,
            acct_owner: opt_text(&self.acct_owner),
            risk_sol_mgr: opt_text(&self.risk_sol_mgr),
            onboard_dt: opt_date(&self.onboard_dt, "On Board Date")?,
            bus_type: opt_text(&self.bus_type),
            ob_method: opt_text(&self.ob_method),
            total_prem: opt_currency(&self.total_prem),
            accom_type: opt_text(&self.accom_type),
            term_cause: opt_text(&self.term_cause),
            term_date: opt_date(&self.term_date, "Termination Date")?,
            branch_val: opt_text(&self.branch_val),
            date_notif: opt_date(&self.date_notif, "Notification Date")?,
            serv_req: opt_text(&self.serv_req),
            except_yn: opt_text(&self.except_yn),
            except_type: opt_text(&self.except_type),
            acct_notes: opt_note(&self.acct_notes),
            loss_run_dist_freq: opt_text(&self.loss_run_dist_freq),
            loss_run_notes: opt_note(&self.loss_run_notes),
            claim_rev_dist_freq: opt_text(&self.claim_rev_dist_freq),
            cr_thresh: opt_text(&self.cr_thresh),
            claim_rev_notes: opt_note(&self.claim_rev_notes),
            shi_complete: opt_text(&self.shi_complete),
            shi_notes: opt_note(&self.shi_notes),
            change_notes: opt_note(&self.change_notes),
            stage: None,
            is_submitted: 0,
        };

        let unlocks_termination = parse_account_status(&record.acct_status)
            .is_some_and(|status| status.unlocks_termination());
        if !unlocks_termination {
            record.date_notif = None;
            record.term_date = None;
            record.term_cause = None;
        }

        Ok(record)
    }

    /// Decodes both scheduling grids out of the posted fields.
    pub fn grids(&self) -> Result<(ScheduleGrid, ScheduleGrid), FormError> {
        let loss_run = loss_run_grid(
            &self.loss_run_months,
            &self.loss_run_sent,
            &self.loss_run_no_claims,
            &self.loss_run_ad_hoc,
        )?;
        let claim_review = claim_review_grid(
            &self.claim_rev_months,
            &self.claim_rev_sent,
            &self.claim_rev_report_type,
            &self.claim_rev_delivery,
            &self.claim_rev_narratives,
        )?;
        Ok((loss_run, claim_review))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use validator::Validate;

    fn filled_form() -> ProgramForm {
        ProgramForm {
            program_name: "Summit Fleet Program".to_string(),
            branch_val: "Worcester".to_string(),
            onboard_dt: "2024-05-01".to_string(),
            acct_status: "Active".to_string(),
            ..ProgramForm::default()
        }
    }

    #[test]
    fn missing_program_name_reports_its_message() {
        let form = ProgramForm {
            program_name: String::new(),
            ..filled_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            crate::forms::first_validation_message(&errors),
            "Program Name is mandatory and cannot be empty"
        );
    }

    #[test]
    fn loaded_nulls_render_as_empty_strings() {
        let record = AffinityProgram {
            program_name: "Summit Fleet Program".to_string(),
            acct_status: "Active".to_string(),
            acct_owner: None,
            total_prem: None,
            ..AffinityProgram::default()
        };
        let form = ProgramForm::from_record(&record);
        assert_eq!(form.acct_owner, "");
        assert_eq!(form.total_prem, "");
        // Already-empty values load identically.
        let record_with_empty = AffinityProgram {
            acct_owner: Some(String::new()),
            ..record
        };
        let form2 = ProgramForm::from_record(&record_with_empty);
        assert_eq!(form2.acct_owner, form.acct_owner);
    }

    #[test]
    fn inactive_status_requires_notification_date() {
        let form = ProgramForm {
            acct_status: "Inactive".to_string(),
            date_notif: String::new(),
            ..filled_form()
        };
        let err = form.validate_status_rules().unwrap_err();
        assert_eq!(
            err.message(),
            "Notification date is mandatory and cannot be empty"
        );
    }

    #[test]
    fn active_status_clears_termination_fields() {
        let form = ProgramForm {
            acct_status: "Active".to_string(),
            term_date: "2025-01-01".to_string(),
            term_cause: "Non-payment".to_string(),
            date_notif: "2025-01-01".to_string(),
            ..filled_form()
        };
        let record = form.to_record().unwrap();
        assert_eq!(record.term_date, None);
        assert_eq!(record.term_cause, None);
        assert_eq!(record.date_notif, None);
    }

    #[test]
    fn premium_normalizes_and_dates_parse() {
        let form = ProgramForm {
            total_prem: "1,250,000".to_string(),
            onboard_dt: "2024-05-01".to_string(),
            ..filled_form()
        };
        let record = form.to_record().unwrap();
        assert_eq!(record.total_prem.as_deref(), Some("1250000.00"));
        assert_eq!(record.onboard_dt, NaiveDate::from_ymd_opt(2024, 5, 1));
    }
}
