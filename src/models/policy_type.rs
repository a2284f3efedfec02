use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::policy_type::PolicyType as DomainPolicyType;

/// Diesel row model for [`crate::domain::policy_type::PolicyType`].
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::policy_types)]
#[diesel(primary_key(pk_number))]
pub struct PolicyType {
    pub pk_number: i32,
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

/// Insert/update payload for a policy type; the surrogate key never appears.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::policy_types)]
#[diesel(treat_none_as_null = true)]
pub struct PolicyTypeChanges {
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

impl From<PolicyType> for DomainPolicyType {
    fn from(record: PolicyType) -> Self {
        Self {
            pk_number: Some(record.pk_number),
            program_name: record.program_name,
            policy_type: record.policy_type,
            policy_status: record.policy_status,
            date_created: record.date_created,
            policy_business_type: record.policy_business_type,
            underwriter_name: record.underwriter_name,
            uw_mgr: record.uw_mgr,
            loc_coded: record.loc_coded,
            term_reason: record.term_reason,
            term_date: record.term_date,
            policy_notes: record.policy_notes,
            insured_contact1: record.insured_contact1,
            insured_phone1: record.insured_phone1,
            insured_cell1: record.insured_cell1,
            insured_email1: record.insured_email1,
            insured_contact2: record.insured_contact2,
            insured_phone2: record.insured_phone2,
            insured_cell2: record.insured_cell2,
            insured_email2: record.insured_email2,
            insured_notes: record.insured_notes,
            contact_instruct: record.contact_instruct,
            coverage_instruct: record.coverage_instruct,
            pref_counsel_yn: record.pref_counsel_yn,
            litigation_instruct: record.litigation_instruct,
            recovery_instruct: record.recovery_instruct,
            misc_cov_instruct: record.misc_cov_instruct,
            acct_loc_id: record.acct_loc_id,
            acct_loc_notes: record.acct_loc_notes,
            acct_prod_claims: record.acct_prod_claims,
            acct_valet_cov: record.acct_valet_cov,
            cct_other_notes: record.cct_other_notes,
            add_l_docs: record.add_l_docs,
            spec_hand: record.spec_hand,
            cct_assg_instruct: record.cct_assg_instruct,
            stage: record.stage,
            is_submitted: record.is_submitted,
        }
    }
}

impl From<&DomainPolicyType> for PolicyTypeChanges {
    fn from(record: &DomainPolicyType) -> Self {
        Self {
            program_name: record.program_name.clone(),
            policy_type: record.policy_type.clone(),
            policy_status: record.policy_status.clone(),
            date_created: record.date_created,
            policy_business_type: record.policy_business_type.clone(),
            underwriter_name: record.underwriter_name.clone(),
            uw_mgr: record.uw_mgr.clone(),
            loc_coded: record.loc_coded.clone(),
            term_reason: record.term_reason.clone(),
            term_date: record.term_date,
            policy_notes: record.policy_notes.clone(),
            insured_contact1: record.insured_contact1.clone(),
            insured_phone1: record.insured_phone1.clone(),
            insured_cell1: record.insured_cell1.clone(),
            insured_email1: record.insured_email1.clone(),
            insured_contact2: record.insured_contact2.clone(),
            insured_phone2: record.insured_phone2.clone(),
            insured_cell2: record.insured_cell2.clone(),
            insured_email2: record.insured_email2.clone(),
            insured_notes: record.insured_notes.clone(),
            contact_instruct: record.contact_instruct.clone(),
            coverage_instruct: record.coverage_instruct.clone(),
            pref_counsel_yn: record.pref_counsel_yn.clone(),
            litigation_instruct: record.litigation_instruct.clone(),
            recovery_instruct: record.recovery_instruct.clone(),
            misc_cov_instruct: record.misc_cov_instruct.clone(),
            acct_loc_id: record.acct_loc_id.clone(),
            acct_loc_notes: record.acct_loc_notes.clone(),
            acct_prod_claims: record.acct_prod_claims.clone(),
            acct_valet_cov: record.acct_valet_cov.clone(),
            cct_other_notes: record.cct_other_notes.clone(),
            add_l_docs: record.add_l_docs.clone(),
            spec_hand: record.spec_hand.clone(),
            cct_assg_instruct: record.cct_assg_instruct.clone(),
            stage: record.stage.clone(),
            is_submitted: record.is_submitted,
        }
    }
}
