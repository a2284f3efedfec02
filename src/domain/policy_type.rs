//! Affinity policy-type aggregate and the next-type clone transform.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Defaults stamped onto a policy type at save when the fields are blank.
pub const ADD_L_DOCS_DEFAULT: &str = "No";
pub const SPEC_HAND_DEFAULT: &str = "Auto Assign";

/// One policy-type record under an affinity program.
///
/// The business key is `program_name` + `policy_type`; `pk_number` is the
/// surrogate key assigned on insert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyType {
    pub pk_number: Option<i32>,
    pub program_name: String,
    pub policy_type: String,
    pub policy_status: Option<String>,
    pub date_created: Option<NaiveDate>,
    pub policy_business_type: Option<String>,
    pub underwriter_name: Option<String>,
    pub uw_mgr: Option<String>,
    pub loc_coded: Option<String>,
    pub term_reason: Option<String>,
    pub term_date: Option<NaiveDate>,
    pub policy_notes: Option<String>,
    pub insured_contact1: Option<String>,
    pub insured_phone1: Option<String>,
    pub insured_cell1: Option<String>,
    pub insured_email1: Option<String>,
    pub insured_contact2: Option<String>,
    pub insured_phone2: Option<String>,
    pub insured_cell2: Option<String>,
    pub insured_email2: Option<String>,
    pub insured_notes: Option<String>,
    pub contact_instruct: Option<String>,
    pub coverage_instruct: Option<String>,
    pub pref_counsel_yn: Option<String>,
    pub litigation_instruct: Option<String>,
    pub recovery_instruct: Option<String>,
    pub misc_cov_instruct: Option<String>,
    pub acct_loc_id: Option<String>,
    pub acct_loc_notes: Option<String>,
    pub acct_prod_claims: Option<String>,
    pub acct_valet_cov: Option<String>,
    pub cct_other_notes: Option<String>,
    pub add_l_docs: Option<String>,
    pub spec_hand: Option<String>,
    pub cct_assg_instruct: Option<String>,
    pub stage: Option<String>,
    pub is_submitted: i32,
}

impl PolicyType {
    /// Seeds a draft for an additional policy type under the same program:
    /// everything carries over except the type name (to be entered fresh),
    /// the surrogate key and the creation date.
    pub fn next_type(&self, today: NaiveDate) -> PolicyType {
        PolicyType {
            pk_number: None,
            policy_type: String::new(),
            date_created: Some(today),
            ..self.clone()
        }
    }

    /// Applies the save-time defaults for blank handling fields.
    pub fn apply_defaults(&mut self) {
        if self.add_l_docs.as_deref().is_none_or(|v| v.trim().is_empty()) {
            self.add_l_docs = Some(ADD_L_DOCS_DEFAULT.to_string());
        }
        if self.spec_hand.as_deref().is_none_or(|v| v.trim().is_empty()) {
            self.spec_hand = Some(SPEC_HAND_DEFAULT.to_string());
        }
    }
}
