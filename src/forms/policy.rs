use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dates::format_form_date;
use crate::domain::policy::Policy;
use crate::domain::status::parse_policy_status;
use crate::domain::types::is_valid_ten_digit_phone;
use crate::forms::{FormError, opt_currency, opt_date, opt_note, opt_text};

/// Form state for the policy screen.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
pub struct PolicyForm {
    #[serde(default)]
    pub pol_pref: String,
    #[validate(length(min = 1, message = "Policy Number is mandatory and cannot be empty"))]
    #[serde(default)]
    pub policy_num: String,
    #[validate(length(min = 1, message = "Policy Mod is mandatory and cannot be empty"))]
    #[serde(default)]
    pub pol_mod: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub customer_num: String,
    #[serde(default)]
    pub acct_on_policy_name: String,
    #[serde(default)]
    pub policy_status: String,
    #[serde(default)]
    pub loc_list: String,
    #[serde(default)]
    pub loc_coded: String,
    #[serde(default)]
    pub incept_date: String,
    #[serde(default)]
    pub loc_comp_date: String,
    #[serde(default)]
    pub exp_date: String,
    #[serde(default)]
    pub canceled_date: String,
    #[serde(default)]
    pub policy_type: String,
    #[serde(default)]
    pub policy_business_type: String,
    #[serde(default)]
    pub policy_notes: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub underwriter_name: String,
    #[serde(default)]
    pub uw_mgr: String,
    #[serde(default)]
    pub dnr_date: String,
    #[serde(default)]
    pub dnr_status: String,
    #[serde(default)]
    pub renew_diary_dt: String,
    #[serde(default)]
    pub premium_amt: String,
    #[serde(default)]
    pub un_man_pol: String,
    #[serde(default)]
    pub agent_name: String,
    #[serde(default)]
    pub agent_code: String,
    #[serde(default)]
    pub agent_seg: String,
    #[serde(default)]
    pub agent_contact1: String,
    #[serde(default)]
    pub agent_tel1: String,
    #[serde(default)]
    pub agent_cell1: String,
    #[serde(default)]
    pub agent_fax1: String,
    #[serde(default)]
    pub agent_email1: String,
    #[serde(default)]
    pub agent_contact2: String,
    #[serde(default)]
    pub agent_tel2: String,
    #[serde(default)]
    pub agent_cell2: String,
    #[serde(default)]
    pub agent_fax2: String,
    #[serde(default)]
    pub agent_email2: String,
    #[serde(default)]
    pub insured_contact1: String,
    #[serde(default)]
    pub insured_title1: String,
    #[serde(default)]
    pub insured_phone1: String,
    #[serde(default)]
    pub insured_cell1: String,
    #[serde(default)]
    pub insured_email1: String,
    #[serde(default)]
    pub insured_contact2: String,
    #[serde(default)]
    pub insured_title2: String,
    #[serde(default)]
    pub insured_phone2: String,
    #[serde(default)]
    pub insured_cell2: String,
    #[serde(default)]
    pub insured_email2: String,
    #[serde(default)]
    pub insured_notes: String,
    #[serde(default)]
    pub large_deduct_yn: String,
    #[serde(default)]
    pub bill_exp_yn: String,
    #[serde(default)]
    pub bill_name: String,
    #[serde(default)]
    pub agg_met: String,
    #[serde(default)]
    pub agg_amt: String,
    #[serde(default)]
    pub lcf_rate: String,
    #[serde(default)]
    pub lc_yn: String,
    #[serde(default)]
    pub lc_amt: String,
    #[serde(default)]
    pub lc_bank: String,
    #[serde(default)]
    pub per_claim_agg_amt: String,
    #[serde(default)]
    pub feat_type: String,

    // Workflow controls posted alongside the record fields.
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub pk_number: String,
    #[serde(default)]
    pub is_create: bool,
    #[serde(default)]
    pub is_next_mod: bool,
    #[serde(default)]
    pub from_pending: bool,
}

impl PolicyForm {
    /// Fresh defaults for a new policy, optionally pre-filled with the
    /// customer it is being written under.
    pub fn defaults(today: NaiveDate, customer: Option<(&str, &str)>) -> Self {
        let (customer_num, account_name) = customer.unwrap_or_default();
        Self {
            date_created: format_form_date(Some(today)),
            large_deduct_yn: "No".to_string(),
            bill_exp_yn: "No".to_string(),
            agg_met: "No".to_string(),
            lc_yn: "No".to_string(),
            agg_amt: "0".to_string(),
            lcf_rate: "0".to_string(),
            lc_amt: "0".to_string(),
            per_claim_agg_amt: "0.00".to_string(),
            customer_num: customer_num.to_string(),
            account_name: account_name.to_string(),
            ..Self::default()
        }
    }

    /// Form values for an existing record; `None` renders as `""`.
    pub fn from_record(record: &Policy) -> Self {
        Self {
            pol_pref: record.pol_pref.clone().unwrap_or_default(),
            policy_num: record.policy_num.clone(),
            pol_mod: record.pol_mod.clone(),
            account_name: record.account_name.clone().unwrap_or_default(),
            customer_num: record.customer_num.clone().unwrap_or_default(),
            acct_on_policy_name: record.acct_on_policy_name.clone().unwrap_or_default(),
            policy_status: record.policy_status.clone().unwrap_or_default(),
            loc_list: record.loc_list.clone().unwrap_or_default(),
            loc_coded: record.loc_coded.clone().unwrap_or_default(),
            incept_date: format_form_date(record.incept_date),
            loc_comp_date: format_form_date(record.loc_comp_date),
            exp_date: format_form_date(record.exp_date),
            canceled_date: format_form_date(record.canceled_date),
            policy_type: record.policy_type.clone().unwrap_or_default(),
            policy_business_type: record.policy_business_type.clone().unwrap_or_default(),
            policy_notes: record.policy_notes.clone().unwrap_or_default(),
            date_created: format_form_date(record.date_created),
            created_by: record.created_by.clone().unwrap_or_default(),
            underwriter_name: record.underwriter_name.clone().unwrap_or_default(),
            uw_mgr: record.uw_mgr.clone().unwrap_or_default(),
            dnr_date: format_form_date(record.dnr_date),
            dnr_status: record.dnr_status.clone().unwrap_or_default(),
            renew_diary_dt: format_form_date(record.renew_diary_dt),
            premium_amt: record.premium_amt.clone().unwrap_or_default(),
            un_man_pol: record.un_man_pol.clone().unwrap_or_default(),
            agent_name: record.agent_name.clone().unwrap_or_default(),
            agent_code: record.agent_code.clone().unwrap_or_default(),
            agent_seg: record.agent_seg.clone().unwrap_or_default(),
            agent_contact1: record.agent_contact1.clone().unwrap_or_default(),
            agent_tel1: record.agent_tel1.clone().unwrap_or_default(),
            agent_cell1: record.agent_cell1.clone().unwrap_or_default(),
            agent_fax1: record.agent_fax1.clone().unwrap_or_default(),
            agent_email1: record.agent_email1.clone().unwrap_or_default(),
            agent_contact2: record.agent_contact2.clone().unwrap_or_default(),
            agent_tel2: record.agent_tel2.clone().unwrap_or_default(),
            agent_cell2: record.agent_cell2.clone().unwrap_or_default(),
            agent_fax2: record.agent_fax2.clone().unwrap_or_default(),
            agent_email2: record.agent_email2.clone().unwrap_or_default(),
            insured_contact1: record.insured_contact1.clone().unwrap_or_default(),
            insured_title1: record.insured_title1.clone().unwrap_or_default(),
            insured_phone1: record.insured_phone1.clone().unwrap_or_default(),
            insured_cell1: record.insured_cell1.clone().unwrap_or_default(),
            insured_email1: record.insured_email1.clone().unwrap_or_default(),
            insured_contact2: record.insured_contact2.clone().unwrap_or_default(),
            insured_title2: record.insured_title2.clone().unwrap_or_default(),
            insured_phone2: record.insured_phone2.clone().unwrap_or_default(),
            insured_cell2: record.insured_cell2.clone().unwrap_or_default(),
            insured_email2: record.insured_email2.clone().unwrap_or_default(),
            insured_notes: record.insured_notes.clone().unwrap_or_default(),
            large_deduct_yn: record.large_deduct_yn.clone().unwrap_or_default(),
            bill_exp_yn: record.bill_exp_yn.clone().unwrap_or_default(),
            bill_name: record.bill_name.clone().unwrap_or_default(),
            agg_met: record.agg_met.clone().unwrap_or_default(),
            agg_amt: record.agg_amt.clone().unwrap_or_default(),
            lcf_rate: record.lcf_rate.clone().unwrap_or_default(),
            lc_yn: record.lc_yn.clone().unwrap_or_default(),
            lc_amt: record.lc_amt.clone().unwrap_or_default(),
            lc_bank: record.lc_bank.clone().unwrap_or_default(),
            per_claim_agg_amt: record.per_claim_agg_amt.clone().unwrap_or_default(),
            feat_type: record.feat_type.clone().unwrap_or_default(),
            pk_number: record
                .pk_number
                .map(|pk| pk.to_string())
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Contact phone entries must be ten digits when present.
    pub fn validate_phones(&self) -> Result<(), FormError> {
        let entries = [
        ("Agent Work Phone 1", self.agent_tel1.as_str()),
        ("Agent Cell 1", self.agent_cell1.as_str()),
        ("Agent Fax 1", self.agent_fax1.as_str()),
        ("Agent Work Phone 2", self.agent_tel2.as_str()),
        ("Agent Cell 2", self.agent_cell2.as_str()),
        ("Agent Fax 2", self.agent_fax2.as_str()),
        ("Insured Phone 1", self.insured_phone1.as_str()),
        ("Insured Cell 1", self.insured_cell1.as_str()),
        ("Insured Phone 2", self.insured_phone2.as_str()),
        ("Insured Cell 2", self.insured_cell2.as_str()),
        ];
        for (label, value) in entries {
            if !is_valid_ten_digit_phone(value) {
                return Err(FormError::InvalidPhone(label.to_string()));
            }
        }
        Ok(())
    }

    /// Parses the scalar fields into the domain record.
    ///
    /// The completion and cancellation dates are derived from the current
    /// status: an incompatible stale value is cleared, and a missing
    /// completion date for a closing status defaults to today.
    pub fn to_record(&self, today: NaiveDate) -> Result<Policy, FormError> {
        let pk_number = self.pk_number.trim().parse::<i32>().ok();
        let mut record = Policy {
            pk_number,
            pol_pref: opt_text(&self.pol_pref),
            policy_num: self.policy_num.trim().to_string(),
            pol_mod: self.pol_mod.trim().to_string(),
            account_name: opt_text(&self.account_name),
            customer_num: opt_text(&self.customer_num),
            acct_on_policy_name: opt_text(&self.acct_on_policy_name),
            policy_status: opt_text(&self.policy_status),
            loc_list: opt_text(&self.loc_list),
            loc_coded: opt_text(&self.loc_coded),
            incept_date: opt_date(&self.incept_date, "Inception Date")?,
            loc_comp_date: opt_date(&self.loc_comp_date, "Location Completion Date")?,
            exp_date: opt_date(&self.exp_date, "Expiration Date")?,
            canceled_date: opt_date(&self.canceled_date, "Canceled Date")?,
            policy_type: opt_text(&self.policy_type),
            policy_business_type: opt_text(&self.policy_business_type),
            policy_notes: opt_note(&self.policy_notes),
            date_created: opt_date(&self.date_created, "Created Date")?,
            created_by: opt_text(&self.created_by),
            underwriter_name: opt_text(&self.underwriter_name),
            uw_mgr: opt_text(&self.uw_mgr),
            dnr_date: opt_date(&self.dnr_date, "DNR Date")?,
            dnr_status: opt_text(&self.dnr_status),
            renew_diary_dt: opt_date(&self.renew_diary_dt, "Renewal Diary Date")?,
            premium_amt: opt_currency(&self.premium_amt),
            un_man_pol: opt_text(&self.un_man_pol),
            agent_name: opt_text(&self.agent_name),
            agent_code: opt_text(&self.agent_code),
            agent_seg: opt_text(&self.agent_seg),
            agent_contact1: opt_text(&self.agent_contact1),
            agent_tel1: opt_text(&self.agent_tel1),
            agent_cell1: opt_text(&self.agent_cell1),
            agent_fax1: opt_text(&self.agent_fax1),
            agent_email1: opt_text(&self.agent_email1),
            agent_contact2: opt_text(&self.agent_contact2),
            agent_tel2: opt_text(&self.agent_tel2),
            agent_cell2: opt_text(&self.agent_cell2),
            agent_fax2: opt_text(&self.agent_fax2),
            agent_email2: opt_text(&self.agent_email2),
            insured_contact1: opt_text(&self.insured_contact1),
            insured_title1: opt_text(&self.insured_title1),
            insured_phone1: opt_text(&self.insured_phone1),
            insured_cell1: opt_text(&self.insured_cell1),
            insured_email1: opt_text(&self.insured_email1),
            insured_contact2: opt_text(&self.insured_contact2),
            insured_title2: opt_text(&self.insured_title2),
            insured_phone2: opt_text(&self.insured_phone2),
            insured_cell2: opt_text(&self.insured_cell2),
            insured_email2: opt_text(&self.insured_email2),
            insured_notes: opt_note(&self.insured_notes),
            large_deduct_yn: opt_text(&self.large_deduct_yn),
            bill_exp_yn: opt_text(&self.bill_exp_yn),
            bill_name: opt_text(&self.bill_name),
            agg_met: opt_text(&self.agg_met),
            agg_amt: opt_currency(&self.agg_amt),
            lcf_rate: opt_text(&self.lcf_rate),
            lc_yn: opt_text(&self.lc_yn),
            lc_amt: opt_currency(&self.lc_amt),
            lc_bank: opt_text(&self.lc_bank),
            per_claim_agg_amt: opt_currency(&self.per_claim_agg_amt),
            feat_type: opt_text(&self.feat_type),
            stage: None,
            is_submitted: 0,
        };

        let status = record
            .policy_status
            .as_deref()
            .and_then(parse_policy_status);

        let completes_locations = status.is_some_and(|s| s.requires_completion_date())
            || record.loc_list.as_deref() == Some("Completed");
        if completes_locations {
            record.loc_comp_date = record.loc_comp_date.or(Some(today));
        } else {
            record.loc_comp_date = None;
        }

        if !status.is_some_and(|s| s.unlocks_cancel_date()) {
            record.canceled_date = None;
        }

        if status.is_some_and(|s| s.is_pending_renewal()) {
            record.policy_business_type = Some("Renewal Business".to_string());
            record.un_man_pol = Some("1".to_string());
        } else if record.un_man_pol.is_none() {
            record.un_man_pol = Some("2".to_string());
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
    }

    fn filled_form() -> PolicyForm {
        PolicyForm {
            policy_num: "HN5501".to_string(),
            pol_mod: "00".to_string(),
            policy_status: "Active".to_string(),
            ..PolicyForm::default()
        }
    }

    #[test]
    fn missing_policy_number_reports_its_message() {
        let form = PolicyForm {
            policy_num: String::new(),
            ..filled_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            crate::forms::first_validation_message(&errors),
            "Policy Number is mandatory and cannot be empty"
        );
    }

    #[test]
    fn canceled_status_defaults_completion_date_to_today() {
        let form = PolicyForm {
            policy_status: "Canceled".to_string(),
            canceled_date: "2025-07-01".to_string(),
            ..filled_form()
        };
        let record = form.to_record(today()).unwrap();
        assert_eq!(record.loc_comp_date, Some(today()));
        assert_eq!(record.canceled_date, NaiveDate::from_ymd_opt(2025, 7, 1));
    }

    #[test]
    fn active_status_clears_cancel_and_completion_dates() {
        let form = PolicyForm {
            policy_status: "Active".to_string(),
            canceled_date: "2025-07-01".to_string(),
            loc_comp_date: "2025-07-01".to_string(),
            ..filled_form()
        };
        let record = form.to_record(today()).unwrap();
        assert_eq!(record.canceled_date, None);
        assert_eq!(record.loc_comp_date, None);
    }

    #[test]
    fn pending_renewal_moves_onto_the_renewal_book() {
        let form = PolicyForm {
            policy_status: "Pending Renewal".to_string(),
            ..filled_form()
        };
        let record = form.to_record(today()).unwrap();
        assert_eq!(record.policy_business_type.as_deref(), Some("Renewal Business"));
        assert_eq!(record.un_man_pol.as_deref(), Some("1"));
    }

    #[test]
    fn bad_agent_phone_is_rejected() {
        let form = PolicyForm {
            agent_tel1: "555-0199".to_string(),
            ..filled_form()
        };
        let err = form.validate_phones().unwrap_err();
        assert_eq!(
            err.message(),
            "Agent Work Phone 1 must be a ten digit phone number"
        );

        let form = PolicyForm {
            agent_tel1: "(508) 555-0199".to_string(),
            ..filled_form()
        };
        assert!(form.validate_phones().is_ok());
    }

    #[test]
    fn completed_location_list_keeps_completion_date() {
        let form = PolicyForm {
            loc_list: "Completed".to_string(),
            loc_comp_date: "2025-06-30".to_string(),
            ..filled_form()
        };
        let record = form.to_record(today()).unwrap();
        assert_eq!(record.loc_comp_date, NaiveDate::from_ymd_opt(2025, 6, 30));
    }
}
