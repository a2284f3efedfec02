use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::policy::Policy as DomainPolicy;

/// Diesel row model for [`crate::domain::policy::Policy`].
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::policies)]
#[diesel(primary_key(pk_number))]
pub struct Policy {
    pub pk_number: i32,
    pub pol_pref: Option<String>,
    pub policy_num: String,
    pub pol_mod: String,
    pub account_name: Option<String>,
    pub customer_num: Option<String>,
    pub acct_on_policy_name: Option<String>,
    pub policy_status: Option<String>,
    pub loc_list: Option<String>,
    pub loc_coded: Option<String>,
    pub incept_date: Option<NaiveDate>,
    pub loc_comp_date: Option<NaiveDate>,
    pub exp_date: Option<NaiveDate>,
    pub canceled_date: Option<NaiveDate>,
    pub policy_type: Option<String>,
    pub policy_business_type: Option<String>,
    pub policy_notes: Option<String>,
    pub date_created: Option<NaiveDate>,
    pub created_by: Option<String>,
    pub underwriter_name: Option<String>,
    pub uw_mgr: Option<String>,
    pub dnr_date: Option<NaiveDate>,
    pub dnr_status: Option<String>,
    pub renew_diary_dt: Option<NaiveDate>,
    pub premium_amt: Option<String>,
    pub un_man_pol: Option<String>,
    pub agent_name: Option<String>,
    pub agent_code: Option<String>,
    pub agent_seg: Option<String>,
    pub agent_contact1: Option<String>,
    pub agent_tel1: Option<String>,
    pub agent_cell1: Option<String>,
    pub agent_fax1: Option<String>,
    pub agent_email1: Option<String>,
    pub agent_contact2: Option<String>,
    pub agent_tel2: Option<String>,
    pub agent_cell2: Option<String>,
    pub agent_fax2: Option<String>,
    pub agent_email2: Option<String>,
    pub insured_contact1: Option<String>,
    pub insured_title1: Option<String>,
    pub insured_phone1: Option<String>,
    pub insured_cell1: Option<String>,
    pub insured_email1: Option<String>,
    pub insured_contact2: Option<String>,
    pub insured_title2: Option<String>,
    pub insured_phone2: Option<String>,
    pub insured_cell2: Option<String>,
    pub insured_email2: Option<String>,
    pub insured_notes: Option<String>,
    pub large_deduct_yn: Option<String>,
    pub bill_exp_yn: Option<String>,
    pub bill_name: Option<String>,
    pub agg_met: Option<String>,
    pub agg_amt: Option<String>,
    pub lcf_rate: Option<String>,
    pub lc_yn: Option<String>,
    pub lc_amt: Option<String>,
    pub lc_bank: Option<String>,
    pub per_claim_agg_amt: Option<String>,
    pub feat_type: Option<String>,
    pub stage: Option<String>,
    pub is_submitted: i32,
}

/// Insert/update payload for a policy.
///
/// The surrogate key never appears here: inserts let SQLite assign it and
/// updates address the row through the query. `None` clears the column.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::policies)]
#[diesel(treat_none_as_null = true)]
pub struct PolicyChanges {
    pub pol_pref: Option<String>,
    pub policy_num: String,
    pub pol_mod: String,
    pub account_name: Option<String>,
    pub customer_num: Option<String>,
    pub acct_on_policy_name: Option<String>,
    pub policy_status: Option<String>,
    pub loc_list: Option<String>,
    pub loc_coded: Option<String>,
    pub incept_date: Option<NaiveDate>,
    pub loc_comp_date: Option<NaiveDate>,
    pub exp_date: Option<NaiveDate>,
    pub canceled_date: Option<NaiveDate>,
    pub policy_type: Option<String>,
    pub policy_business_type: Option<String>,
    pub policy_notes: Option<String>,
    pub date_created: Option<NaiveDate>,
    pub created_by: Option<String>,
    pub underwriter_name: Option<String>,
    pub uw_mgr: Option<String>,
    pub dnr_date: Option<NaiveDate>,
    pub dnr_status: Option<String>,
    pub renew_diary_dt: Option<NaiveDate>,
    pub premium_amt: Option<String>,
    pub un_man_pol: Option<String>,
    pub agent_name: Option<String>,
    pub agent_code: Option<String>,
    pub agent_seg: Option<String>,
    pub agent_contact1: Option<String>,
    pub agent_tel1: Option<String>,
    pub agent_cell1: Option<String>,
    pub agent_fax1: Option<String>,
    pub agent_email1: Option<String>,
    pub agent_contact2: Option<String>,
    pub agent_tel2: Option<String>,
    pub agent_cell2: Option<String>,
    pub agent_fax2: Option<String>,
    pub agent_email2: Option<String>,
    pub insured_contact1: Option<String>,
    pub insured_title1: Option<String>,
    pub insured_phone1: Option<String>,
    pub insured_cell1: Option<String>,
    pub insured_email1: Option<String>,
    pub insured_contact2: Option<String>,
    pub insured_title2: Option<String>,
    pub insured_phone2: Option<String>,
    pub insured_cell2: Option<String>,
    pub insured_email2: Option<String>,
    pub insured_notes: Option<String>,
    pub large_deduct_yn: Option<String>,
    pub bill_exp_yn: Option<String>,
    pub bill_name: Option<String>,
    pub agg_met: Option<String>,
    pub agg_amt: Option<String>,
    pub lcf_rate: Option<String>,
    pub lc_yn: Option<String>,
    pub lc_amt: Option<String>,
    pub lc_bank: Option<String>,
    pub per_claim_agg_amt: Option<String>,
    pub feat_type: Option<String>,
    pub stage: Option<String>,
    pub is_submitted: i32,
}

impl From<Policy> for DomainPolicy {
    fn from(record: Policy) -> Self {
        Self {
            pk_number: Some(record.pk_number),
            pol_pref: record.pol_pref,
            policy_num: record.policy_num,
            pol_mod: record.pol_mod,
            account_name: record.account_name,
            customer_num: record.customer_num,
            acct_on_policy_name: record.acct_on_policy_name,
            policy_status: record.policy_status,
            loc_list: record.loc_list,
            loc_coded: record.loc_coded,
            incept_date: record.incept_date,
            loc_comp_date: record.loc_comp_date,
            exp_date: record.exp_date,
            canceled_date: record.canceled_date,
            policy_type: record.policy_type,
            policy_business_type: record.policy_business_type,
            policy_notes: record.policy_notes,
            date_created: record.date_created,
            created_by: record.created_by,
            underwriter_name: record.underwriter_name,
            uw_mgr: record.uw_mgr,
            dnr_date: record.dnr_date,
            dnr_status: record.dnr_status,
            renew_diary_dt: record.renew_diary_dt,
            premium_amt: record.premium_amt,
            un_man_pol: record.un_man_pol,
            agent_name: record.agent_name,
            agent_code: record.agent_code,
            agent_seg: record.agent_seg,
            agent_contact1: record.agent_contact1,
            agent_tel1: record.agent_tel1,
            agent_cell1: record.agent_cell1,
            agent_fax1: record.agent_fax1,
            agent_email1: record.agent_email1,
            agent_contact2: record.agent_contact2,
            agent_tel2: record.agent_tel2,
            agent_cell2: record.agent_cell2,
            agent_fax2: record.agent_fax2,
            agent_email2: record.agent_email2,
            insured_contact1: record.insured_contact1,
            insured_title1: record.insured_title1,
            insured_phone1: record.insured_phone1,
            insured_cell1: record.insured_cell1,
            insured_email1: record.insured_email1,
            insured_contact2: record.insured_contact2,
            insured_title2: record.insured_title2,
            insured_phone2: record.insured_phone2,
            insured_cell2: record.insured_cell2,
            insured_email2: record.insured_email2,
            insured_notes: record.insured_notes,
            large_deduct_yn: record.large_deduct_yn,
            bill_exp_yn: record.bill_exp_yn,
            bill_name: record.bill_name,
            agg_met: record.agg_met,
            agg_amt: record.agg_amt,
            lcf_rate: record.lcf_rate,
            lc_yn: record.lc_yn,
            lc_amt: record.lc_amt,
            lc_bank: record.lc_bank,
            per_claim_agg_amt: record.per_claim_agg_amt,
            feat_type: record.feat_type,
            stage: record.stage,
            is_submitted: record.is_submitted,
        }
    }
}

impl From<&DomainPolicy> for PolicyChanges {
    fn from(record: &DomainPolicy) -> Self {
        Self {
            pol_pref: record.pol_pref.clone(),
            policy_num: record.policy_num.clone(),
            pol_mod: record.pol_mod.clone(),
            account_name: record.account_name.clone(),
            customer_num: record.customer_num.clone(),
            acct_on_policy_name: record.acct_on_policy_name.clone(),
            policy_status: record.policy_status.clone(),
            loc_list: record.loc_list.clone(),
            loc_coded: record.loc_coded.clone(),
            incept_date: record.incept_date,
            loc_comp_date: record.loc_comp_date,
            exp_date: record.exp_date,
            canceled_date: record.canceled_date,
            policy_type: record.policy_type.clone(),
            policy_business_type: record.policy_business_type.clone(),
            policy_notes: record.policy_notes.clone(),
            date_created: record.date_created,
            created_by: record.created_by.clone(),
            underwriter_name: record.underwriter_name.clone(),
            uw_mgr: record.uw_mgr.clone(),
            dnr_date: record.dnr_date,
            dnr_status: record.dnr_status.clone(),
            renew_diary_dt: record.renew_diary_dt,
            premium_amt: record.premium_amt.clone(),
            un_man_pol: record.un_man_pol.clone(),
            agent_name: record.agent_name.clone(),
            agent_code: record.agent_code.clone(),
            agent_seg: record.agent_seg.clone(),
            agent_contact1: record.agent_contact1.clone(),
            agent_tel1: record.agent_tel1.clone(),
            agent_cell1: record.agent_cell1.clone(),
            agent_fax1: record.agent_fax1.clone(),
            agent_email1: record.agent_email1.clone(),
            agent_contact2: record.agent_contact2.clone(),
            agent_tel2: record.agent_tel2.clone(),
            agent_cell2: record.agent_cell2.clone(),
            agent_fax2: record.agent_fax2.clone(),
            agent_email2: record.agent_email2.clone(),
            insured_contact1: record.insured_contact1.clone(),
            insured_title1: record.insured_title1.clone(),
            insured_phone1: record.insured_phone1.clone(),
            insured_cell1: record.insured_cell1.clone(),
            insured_email1: record.insured_email1.clone(),
            insured_contact2: record.insured_contact2.clone(),
            insured_title2: record.insured_title2.clone(),
            insured_phone2: record.insured_phone2.clone(),
            insured_cell2: record.insured_cell2.clone(),
            insured_email2: record.insured_email2.clone(),
            insured_notes: record.insured_notes.clone(),
            large_deduct_yn: record.large_deduct_yn.clone(),
            bill_exp_yn: record.bill_exp_yn.clone(),
            bill_name: record.bill_name.clone(),
            agg_met: record.agg_met.clone(),
            agg_amt: record.agg_amt.clone(),
            lcf_rate: record.lcf_rate.clone(),
            lc_yn: record.lc_yn.clone(),
            lc_amt: record.lc_amt.clone(),
            lc_bank: record.lc_bank.clone(),
            per_claim_agg_amt: record.per_claim_agg_amt.clone(),
            feat_type: record.feat_type.clone(),
            stage: record.stage.clone(),
            is_submitted: record.is_submitted,
        }
    }
}
