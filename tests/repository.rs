use chrono::NaiveDate;
use diesel::prelude::*;

use sac_backoffice::domain::account::SacAccount;
use sac_backoffice::domain::distribution::{DistributionEntry, DistributionList};
use sac_backoffice::domain::policy::Policy;
use sac_backoffice::domain::policy_type::PolicyType;
use sac_backoffice::domain::program::AffinityProgram;
use sac_backoffice::domain::schedule::{MonthSlot, ScheduleGrid, ScheduleKind};
use sac_backoffice::domain::types::{CustomerNum, MonthNumber, PolicyMod, PolicyNumber, ProgramName};
use sac_backoffice::repository::{
    AccountReader, AccountWriter, DistributionReader, DistributionWriter, PolicyReader,
    PolicyTypeReader, PolicyTypeWriter, PolicyWriter, ProgramReader, ProgramWriter,
    ReferenceReader, ScheduleReader, ScheduleWriter,
};

mod common;

fn sample_program(name: &str) -> AffinityProgram {
    AffinityProgram {
        program_name: name.to_string(),
        acct_status: "Active".to_string(),
        branch_val: Some("Worcester".to_string()),
        onboard_dt: NaiveDate::from_ymd_opt(2024, 5, 1),
        dt_created: NaiveDate::from_ymd_opt(2024, 4, 20),
        bus_type: Some("Affinity".to_string()),
        is_submitted: 0,
        ..AffinityProgram::default()
    }
}

#[test]
fn test_program_upsert_round_trip() {
    let test_db = common::TestDb::new("test_program_upsert_round_trip.db");
    let repo = test_db.repository();

    let program = sample_program("Summit Fleet Program");
    repo.upsert_program(&program).unwrap();

    let name = ProgramName::new("Summit Fleet Program").unwrap();
    let stored = repo.get_program(&name).unwrap().unwrap();
    assert_eq!(stored, program);

    // Second upsert under the same key updates in place and can clear fields.
    let updated = AffinityProgram {
        acct_status: "In Runoff".to_string(),
        branch_val: None,
        is_submitted: 1,
        ..program
    };
    repo.upsert_program(&updated).unwrap();

    let stored = repo.get_program(&name).unwrap().unwrap();
    assert_eq!(stored.acct_status, "In Runoff");
    assert_eq!(stored.branch_val, None);

    let submitted = repo.list_submitted_programs().unwrap();
    assert_eq!(submitted.len(), 1);

    assert!(
        repo.get_program(&ProgramName::new("Nobody").unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_schedule_replace_and_reload() {
    let test_db = common::TestDb::new("test_schedule_replace_and_reload.db");
    let repo = test_db.repository();

    let mut grid = ScheduleGrid::empty(ScheduleKind::LossRun);
    grid.slot_mut(MonthNumber::new(3).unwrap()).scheduled = true;
    grid.slot_mut(MonthNumber::new(3).unwrap()).no_claims = true;
    grid.slot_mut(MonthNumber::new(9).unwrap()).scheduled = true;
    grid.slot_mut(MonthNumber::new(9).unwrap()).last_send_date =
        NaiveDate::from_ymd_opt(2025, 9, 30);

    let rows = grid.to_rows("C104233");
    assert_eq!(repo.replace_schedule("C104233", ScheduleKind::LossRun, &rows).unwrap(), 12);

    let stored = repo.list_schedule("C104233", ScheduleKind::LossRun).unwrap();
    let rebuilt = ScheduleGrid::from_rows(ScheduleKind::LossRun, &stored).unwrap();
    assert_eq!(rebuilt, grid);

    // A second write for the same owner and kind overwrites, never duplicates.
    grid.slot_mut(MonthNumber::new(3).unwrap()).scheduled = false;
    let rows = grid.to_rows("C104233");
    repo.replace_schedule("C104233", ScheduleKind::LossRun, &rows).unwrap();

    let stored = repo.list_schedule("C104233", ScheduleKind::LossRun).unwrap();
    assert_eq!(stored.len(), 12);
    let rebuilt = ScheduleGrid::from_rows(ScheduleKind::LossRun, &stored).unwrap();
    assert_eq!(
        *rebuilt.slot(MonthNumber::new(3).unwrap()),
        MonthSlot {
            no_claims: true,
            ..MonthSlot::unscheduled()
        }
    );

    // Other kinds for the same owner stay independent.
    assert!(
        repo.list_schedule("C104233", ScheduleKind::ClaimReview)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_out_of_calendar_month_fails_the_load() {
    let test_db = common::TestDb::new("test_out_of_calendar_month.db");
    let repo = test_db.repository();

    {
        use sac_backoffice::schema::schedule_months;
        let mut conn = test_db.pool().get().unwrap();
        diesel::insert_into(schedule_months::table)
            .values((
                schedule_months::owner.eq("C104233"),
                schedule_months::kind.eq("loss_run"),
                schedule_months::month_num.eq(13),
                schedule_months::scheduled.eq(true),
                schedule_months::no_claims.eq(false),
                schedule_months::ad_hoc.eq(false),
            ))
            .execute(&mut conn)
            .unwrap();
    }

    let result = repo.list_schedule("C104233", ScheduleKind::LossRun);
    assert!(result.is_err(), "month 13 must be rejected as a data error");
}

#[test]
fn test_policy_insert_update_and_ordering() {
    let test_db = common::TestDb::new("test_policy_insert_update.db");
    let repo = test_db.repository();

    let policy = Policy {
        policy_num: "HN5501".to_string(),
        pol_mod: "00".to_string(),
        customer_num: Some("C104233".to_string()),
        account_name: Some("Granite Mutual Holdings".to_string()),
        incept_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        ..Policy::default()
    };

    let pk = repo.upsert_policy(&policy).unwrap();
    assert!(pk > 0);

    let second = Policy {
        pol_mod: "01".to_string(),
        ..policy.clone()
    };
    let pk2 = repo.upsert_policy(&second).unwrap();
    assert_ne!(pk, pk2);

    let stored = repo.get_policy_by_pk(pk).unwrap().unwrap();
    assert_eq!(stored.pol_mod, "00");

    let by_key = repo
        .get_policy_by_key(
            &PolicyNumber::new("HN5501").unwrap(),
            &PolicyMod::new("01").unwrap(),
        )
        .unwrap()
        .unwrap();
    assert_eq!(by_key.pk_number, Some(pk2));

    // Update through the surrogate key keeps the same row.
    let updated = Policy {
        pk_number: Some(pk),
        policy_status: Some("Canceled".to_string()),
        ..policy.clone()
    };
    assert_eq!(repo.upsert_policy(&updated).unwrap(), pk);
    let stored = repo.get_policy_by_pk(pk).unwrap().unwrap();
    assert_eq!(stored.policy_status.as_deref(), Some("Canceled"));

    let customer = CustomerNum::new("C104233").unwrap();
    let listed = repo.list_policies_by_customer(&customer).unwrap();
    assert_eq!(listed.len(), 2);

    // The policy-number/mod combination is unique.
    let duplicate = Policy {
        pk_number: None,
        ..policy
    };
    assert!(repo.upsert_policy(&duplicate).is_err());
}

#[test]
fn test_policy_type_upsert_by_business_key() {
    let test_db = common::TestDb::new("test_policy_type_upsert.db");
    let repo = test_db.repository();

    let record = PolicyType {
        program_name: "Summit Fleet Program".to_string(),
        policy_type: "Workers Comp".to_string(),
        policy_status: Some("Active".to_string()),
        add_l_docs: Some("No".to_string()),
        spec_hand: Some("Auto Assign".to_string()),
        ..PolicyType::default()
    };

    let pk = repo.upsert_policy_type(&record).unwrap();

    let program = ProgramName::new("Summit Fleet Program").unwrap();
    let by_key = repo
        .get_policy_type_by_key(&program, "Workers Comp")
        .unwrap()
        .unwrap();
    assert_eq!(by_key.pk_number, Some(pk));

    let listed = repo.list_policy_types(&program).unwrap();
    assert_eq!(listed.len(), 1);

    let updated = PolicyType {
        pk_number: Some(pk),
        policy_status: Some("Inactive".to_string()),
        ..record
    };
    assert_eq!(repo.upsert_policy_type(&updated).unwrap(), pk);
    let stored = repo.get_policy_type_by_pk(pk).unwrap().unwrap();
    assert_eq!(stored.policy_status.as_deref(), Some("Inactive"));
}

#[test]
fn test_account_search_and_upsert() {
    let test_db = common::TestDb::new("test_account_search.db");
    let repo = test_db.repository();

    let account = SacAccount {
        customer_num: "C104233".to_string(),
        customer_name: "Granite Mutual Holdings".to_string(),
        acct_status: "Active".to_string(),
        serv_level: Some("Comprehensive".to_string()),
        date_created: NaiveDate::from_ymd_opt(2024, 1, 15),
        ..SacAccount::default()
    };
    repo.upsert_account(&account).unwrap();

    let stored = repo
        .get_account(&CustomerNum::new("C104233").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(stored, account);

    assert_eq!(repo.search_accounts("Granite").unwrap().len(), 1);
    assert_eq!(repo.search_accounts("104233").unwrap().len(), 1);
    assert!(repo.search_accounts("Missing").unwrap().is_empty());
}

#[test]
fn test_distribution_entry_lifecycle() {
    let test_db = common::TestDb::new("test_distribution_lifecycle.db");
    let repo = test_db.repository();

    let entry = DistributionEntry {
        owner: "C104233".to_string(),
        list: DistributionList::LossRun,
        recipient_category: "Account Owner".to_string(),
        attn_to: "R. Calloway".to_string(),
        email_address: "rcalloway@example.com".to_string(),
        dist_via: "Email".to_string(),
    };
    repo.upsert_distribution_entry(&entry).unwrap();

    // Upsert by (owner, list, attn_to) replaces the email in place.
    let moved = DistributionEntry {
        email_address: "r.calloway@example.com".to_string(),
        ..entry.clone()
    };
    repo.upsert_distribution_entry(&moved).unwrap();

    let listed = repo
        .list_distribution("C104233", DistributionList::LossRun)
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].email_address, "r.calloway@example.com");

    // The claim-review list is independent.
    assert!(
        repo.list_distribution("C104233", DistributionList::ClaimReview)
            .unwrap()
            .is_empty()
    );

    let deleted = repo
        .delete_distribution_entry("C104233", DistributionList::LossRun, "R. Calloway")
        .unwrap();
    assert_eq!(deleted, 1);
    assert!(
        repo.list_distribution("C104233", DistributionList::LossRun)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_reference_lists() {
    let test_db = common::TestDb::new("test_reference_lists.db");
    let repo = test_db.repository();

    {
        use sac_backoffice::schema::{dropdown_options, loss_control_reps, staff};
        let mut conn = test_db.pool().get().unwrap();
        diesel::insert_into(staff::table)
            .values((
                staff::name.eq("R. Calloway"),
                staff::title.eq("Senior Account Executive"),
                staff::email.eq("rcalloway@example.com"),
            ))
            .execute(&mut conn)
            .unwrap();
        diesel::insert_into(loss_control_reps::table)
            .values(vec![
                (
                    loss_control_reps::rep_name.eq("T. Okafor"),
                    loss_control_reps::active.eq("Yes"),
                ),
                (
                    loss_control_reps::rep_name.eq("Retired Rep"),
                    loss_control_reps::active.eq("No"),
                ),
            ])
            .execute(&mut conn)
            .unwrap();
        diesel::insert_into(dropdown_options::table)
            .values((
                dropdown_options::dd_type.eq("BusinessType"),
                dropdown_options::dd_value.eq("Affinity"),
            ))
            .execute(&mut conn)
            .unwrap();
    }

    let staff = repo.list_staff().unwrap();
    assert_eq!(staff.len(), 1);

    let found = repo.find_staff_by_name("R. Calloway").unwrap().unwrap();
    assert_eq!(found.email.as_deref(), Some("rcalloway@example.com"));

    assert_eq!(repo.list_loss_control_reps(false).unwrap().len(), 2);
    assert_eq!(repo.list_loss_control_reps(true).unwrap().len(), 1);

    let options = repo.list_dropdown_options("BusinessType").unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].dd_value, "Affinity");
    assert!(repo.list_dropdown_options("Nothing").unwrap().is_empty());
}
