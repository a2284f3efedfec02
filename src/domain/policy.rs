//! Policy aggregate and the next-mod clone transform.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dates::add_one_year;
use crate::domain::status::PolicyStatus;
use crate::domain::types::PolicyMod;

/// One policy record.
///
/// The business key is `policy_num` + `pol_mod`; `pk_number` is the surrogate
/// key assigned on insert and used for view routes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub pk_number: Option<i32>,
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

impl Policy {
    /// Seeds the draft for the next policy modification.
    ///
    /// The source record is untouched: the draft drops the surrogate key,
    /// bumps the zero-padded mod, advances inception/expiration by one year,
    /// stamps today's creation date and moves the record onto the renewal
    /// book as Pending Renewal.
    pub fn next_mod(&self, today: NaiveDate) -> Policy {
        let next_mod = PolicyMod::new(self.pol_mod.as_str())
            .map(|m| m.next().into_inner())
            .unwrap_or_else(|_| "01".to_string());

        Policy {
            pk_number: None,
            pol_mod: next_mod,
            incept_date: self.incept_date.map(add_one_year),
            exp_date: self.exp_date.map(add_one_year),
            date_created: Some(today),
            policy_status: Some(PolicyStatus::PendingRenewal.as_str().to_string()),
            policy_business_type: Some("Renewal Business".to_string()),
            canceled_date: None,
            loc_comp_date: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_policy() -> Policy {
        Policy {
            pk_number: Some(77),
            policy_num: "HN5501".to_string(),
            pol_mod: "00".to_string(),
            incept_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            exp_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            date_created: NaiveDate::from_ymd_opt(2024, 2, 12),
            policy_status: Some("Active".to_string()),
            policy_business_type: Some("New Business".to_string()),
            ..Policy::default()
        }
    }

    #[test]
    fn next_mod_advances_dates_by_one_year() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let draft = base_policy().next_mod(today);

        assert_eq!(draft.incept_date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(draft.exp_date, NaiveDate::from_ymd_opt(2026, 3, 1));
        assert_eq!(draft.date_created, Some(today));
    }

    #[test]
    fn next_mod_bumps_sequence_and_resets_workflow() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let source = base_policy();
        let draft = source.next_mod(today);

        assert_eq!(draft.pol_mod, "01");
        assert_eq!(draft.pk_number, None);
        assert_eq!(draft.policy_status.as_deref(), Some("Pending Renewal"));
        assert_eq!(draft.policy_business_type.as_deref(), Some("Renewal Business"));
        assert_eq!(draft.policy_num, source.policy_num);
        // source untouched
        assert_eq!(source.pol_mod, "00");
        assert_eq!(source.pk_number, Some(77));
    }
}
