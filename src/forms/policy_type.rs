use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dates::format_form_date;
use crate::domain::policy_type::PolicyType;
use crate::domain::types::is_valid_ten_digit_phone;
use crate::forms::{FormError, opt_date, opt_note, opt_text};

/// Form state for the policy-type screen.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
pub struct PolicyTypeForm {
    #[validate(length(min = 1, message = "Affinity Program Name is mandatory and cannot be empty"))]
    #[serde(default)]
    pub program_name: String,
    #[validate(length(min = 1, message = "Policy Type Name is mandatory and cannot be empty"))]
    #[serde(default)]
    pub policy_type: String,
    #[serde(default)]
    pub policy_status: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub policy_business_type: String,
    #[serde(default)]
    pub underwriter_name: String,
    #[serde(default)]
    pub uw_mgr: String,
    #[serde(default)]
    pub loc_coded: String,
    #[serde(default)]
    pub term_reason: String,
    #[serde(default)]
    pub term_date: String,
    #[serde(default)]
    pub policy_notes: String,
    #[serde(default)]
    pub insured_contact1: String,
    #[serde(default)]
    pub insured_phone1: String,
    #[serde(default)]
    pub insured_cell1: String,
    #[serde(default)]
    pub insured_email1: String,
    #[serde(default)]
    pub insured_contact2: String,
    #[serde(default)]
    pub insured_phone2: String,
    #[serde(default)]
    pub insured_cell2: String,
    #[serde(default)]
    pub insured_email2: String,
    #[serde(default)]
    pub insured_notes: String,
    #[serde(default)]
    pub contact_instruct: String,
    #[serde(default)]
    pub coverage_instruct: String,
    #[serde(default)]
    pub pref_counsel_yn: String,
    #[serde(default)]
    pub litigation_instruct: String,
    #[serde(default)]
    pub recovery_instruct: String,
    #[serde(default)]
    pub misc_cov_instruct: String,
    #[serde(default)]
    pub acct_loc_id: String,
    #[serde(default)]
    pub acct_loc_notes: String,
    #[serde(default)]
    pub acct_prod_claims: String,
    #[serde(default)]
    pub acct_valet_cov: String,
    #[serde(default)]
    pub cct_other_notes: String,
    #[serde(default)]
    pub add_l_docs: String,
    #[serde(default)]
    pub spec_hand: String,
    #[serde(default)]
    pub cct_assg_instruct: String,

    // Workflow controls posted alongside the record fields.
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub pk_number: String,
    #[serde(default)]
    pub is_create: bool,
    #[serde(default)]
    pub from_pending: bool,
}

impl PolicyTypeForm {
    /// Fresh defaults for a new policy type under the given program.
    pub fn defaults(today: NaiveDate, program_name: &str) -> Self {
        Self {
            program_name: program_name.to_string(),
            policy_status: "Active".to_string(),
            policy_business_type: "Affinity".to_string(),
            date_created: format_form_date(Some(today)),
            add_l_docs: "No".to_string(),
            spec_hand: "Auto Assign".to_string(),
            ..Self::default()
        }
    }

    /// Form values for an existing record; `None` renders as `""`.
    pub fn from_record(record: &PolicyType) -> Self {
        Self {
            program_name: record.program_name.clone(),
            policy_type: record.policy_type.clone(),
            policy_status: record.policy_status.clone().unwrap_or_default(),
            date_created: format_form_date(record.date_created),
            policy_business_type: record.policy_business_type.clone().unwrap_or_default(),
            underwriter_name: record.underwriter_name.clone().unwrap_or_default(),
            uw_mgr: record.uw_mgr.clone().unwrap_or_default(),
            loc_coded: record.loc_coded.clone().unwrap_or_default(),
            term_reason: record.term_reason.clone().unwrap_or_default(),
            term_date: format_form_date(record.term_date),
            policy_notes: record.policy_notes.clone().unwrap_or_default(),
            insured_contact1: record.insured_contact1.clone().unwrap_or_default(),
            insured_phone1: record.insured_phone1.clone().unwrap_or_default(),
            insured_cell1: record.insured_cell1.clone().unwrap_or_default(),
            insured_email1: record.insured_email1.clone().unwrap_or_default(),
            insured_contact2: record.insured_contact2.clone().unwrap_or_default(),
            insured_phone2: record.insured_phone2.clone().unwrap_or_default(),
            insured_cell2: record.insured_cell2.clone().unwrap_or_default(),
            insured_email2: record.insured_email2.clone().unwrap_or_default(),
            insured_notes: record.insured_notes.clone().unwrap_or_default(),
            contact_instruct: record.contact_instruct.clone().unwrap_or_default(),
            coverage_instruct: record.coverage_instruct.clone().unwrap_or_default(),
            pref_counsel_yn: record.pref_counsel_yn.clone().unwrap_or_default(),
            litigation_instruct: record.litigation_instruct.clone().unwrap_or_default(),
            recovery_instruct: record.recovery_instruct.clone().unwrap_or_default(),
            misc_cov_instruct: record.misc_cov_instruct.clone().unwrap_or_default(),
            acct_loc_id: record.acct_loc_id.clone().unwrap_or_default(),
            acct_loc_notes: record.acct_loc_notes.clone().unwrap_or_default(),
            acct_prod_claims: record.acct_prod_claims.clone().unwrap_or_default(),
            acct_valet_cov: record.acct_valet_cov.clone().unwrap_or_default(),
            cct_other_notes: record.cct_other_notes.clone().unwrap_or_default(),
            add_l_docs: record.add_l_docs.clone().unwrap_or_default(),
            spec_hand: record.spec_hand.clone().unwrap_or_default(),
            cct_assg_instruct: record.cct_assg_instruct.clone().unwrap_or_default(),
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

    /// Parses the scalar fields into the domain record and applies the
    /// save-time handling defaults.
    pub fn to_record(&self) -> Result<PolicyType, FormError> {
        let pk_number = self.pk_number.trim().parse::<i32>().ok();
        let mut record = PolicyType {
            pk_number,
            program_name: self.program_name.trim().to_string(),
            policy_type: self.policy_type.trim().to_string(),
            policy_status: opt_text(&self.policy_status),
            date_created: opt_date(&self.date_created, "Created Date")?,
            policy_business_type: opt_text(&self.policy_business_type),
            underwriter_name: opt_text(&self.underwriter_name),
            uw_mgr: opt_text(&self.uw_mgr),
            loc_coded: opt_text(&self.loc_coded),
            term_reason: opt_text(&self.term_reason),
            term_date: opt_date(&self.term_date, "Termination Date")?,
            policy_notes: opt_note(&self.policy_notes),
            insured_contact1: opt_text(&self.insured_contact1),
            insured_phone1: opt_text(&self.insured_phone1),
            insured_cell1: opt_text(&self.insured_cell1),
            insured_email1: opt_text(&self.insured_email1),
            insured_contact2: opt_text(&self.insured_contact2),
            insured_phone2: opt_text(&self.insured_phone2),
            insured_cell2: opt_text(&self.insured_cell2),
            insured_email2: opt_text(&self.insured_email2),
            insured_notes: opt_note(&self.insured_notes),
            contact_instruct: opt_text(&self.contact_instruct),
            coverage_instruct: opt_text(&self.coverage_instruct),
            pref_counsel_yn: opt_text(&self.pref_counsel_yn),
            litigation_instruct: opt_text(&self.litigation_instruct),
            recovery_instruct: opt_text(&self.recovery_instruct),
            misc_cov_instruct: opt_text(&self.misc_cov_instruct),
            acct_loc_id: opt_text(&self.acct_loc_id),
            acct_loc_notes: opt_note(&self.acct_loc_notes),
            acct_prod_claims: opt_text(&self.acct_prod_claims),
            acct_valet_cov: opt_text(&self.acct_valet_cov),
            cct_other_notes: opt_note(&self.cct_other_notes),
            add_l_docs: opt_text(&self.add_l_docs),
            spec_hand: opt_text(&self.spec_hand),
            cct_assg_instruct: opt_text(&self.cct_assg_instruct),
            stage: None,
            is_submitted: 0,
        };
        record.apply_defaults();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn filled_form() -> PolicyTypeForm {
        PolicyTypeForm {
            program_name: "Summit Fleet Program".to_string(),
            policy_type: "Workers Comp".to_string(),
            ..PolicyTypeForm::default()
        }
    }

    #[test]
    fn missing_type_name_reports_its_message() {
        let form = PolicyTypeForm {
            policy_type: String::new(),
            ..filled_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            crate::forms::first_validation_message(&errors),
            "Policy Type Name is mandatory and cannot be empty"
        );
    }

    #[test]
    fn blank_handling_fields_get_defaults_at_save() {
        let record = filled_form().to_record().unwrap();
        assert_eq!(record.add_l_docs.as_deref(), Some("No"));
        assert_eq!(record.spec_hand.as_deref(), Some("Auto Assign"));
    }

    #[test]
    fn surrogate_key_round_trips_as_text() {
        let form = PolicyTypeForm {
            pk_number: "42".to_string(),
            ..filled_form()
        };
        assert_eq!(form.to_record().unwrap().pk_number, Some(42));

        let form = PolicyTypeForm {
            pk_number: String::new(),
            ..filled_form()
        };
        assert_eq!(form.to_record().unwrap().pk_number, None);
    }
}
