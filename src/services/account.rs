//! Edit-session services for the special-account screen.

use chrono::Utc;
use validator::Validate;

use crate::domain::permissions::{Role, account_field_access, locked_for_director};
use crate::domain::schedule::{ScheduleGrid, ScheduleKind};
use crate::domain::types::{ContactEmail, ContactPhone, CustomerNum};
use crate::dto::account::AccountPageData;
use crate::forms::account::AccountForm;
use crate::forms::first_validation_message;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{
    AccountReader, AccountWriter, ReferenceReader, ScheduleReader, ScheduleWriter,
};
use crate::services::session::{
    EditContext, RecordLookup, SubmitAction, SubmitOutcome, currency_amount,
    premium_conflicts_with_service_level, screen_role, submit_confirmation_text, workflow_stamp,
};
use crate::services::{ServiceError, ServiceResult};

/// Filter columns accepted by the account view route.
const LOOKUP_COLUMNS: [&str; 2] = ["customer_num", "customer_name"];

/// What the account screen should open on.
#[derive(Clone, Debug)]
pub enum AccountTarget {
    New,
    Lookup(String),
    /// A caller-supplied customer number (wizard embedding).
    Seed(String),
}

/// Loads the account edit screen; all four fetches complete before any page
/// state is assembled.
pub fn load_account_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    target: AccountTarget,
    from_pending: bool,
) -> ServiceResult<AccountPageData>
where
    R: AccountReader + ScheduleReader + ?Sized,
{
    let role = screen_role(user)?;
    let enablement = account_field_access(role).into();
    let confirm_text = submit_confirmation_text(role);

    let key = match target {
        AccountTarget::New => {
            let mut form = AccountForm::defaults(Utc::now().date_naive());
            form.is_create = true;
            return Ok(AccountPageData {
                form,
                loss_run: ScheduleGrid::empty(ScheduleKind::LossRun),
                deductible: ScheduleGrid::empty(ScheduleKind::DeductibleBill),
                claim_review: ScheduleGrid::empty(ScheduleKind::ClaimReview),
                enablement,
                locked: false,
                is_create: true,
                confirm_text,
            });
        }
        AccountTarget::Lookup(segment) => RecordLookup::parse(&segment, &LOOKUP_COLUMNS)?.value,
        AccountTarget::Seed(key) => key,
    };

    let customer_num = CustomerNum::new(key)?;
    let record = repo.get_account(&customer_num)?.ok_or(ServiceError::NotFound)?;
    let owner = record.customer_num.as_str();
    let loss_run_rows = repo.list_schedule(owner, ScheduleKind::LossRun)?;
    let deductible_rows = repo.list_schedule(owner, ScheduleKind::DeductibleBill)?;
    let claim_review_rows = repo.list_schedule(owner, ScheduleKind::ClaimReview)?;

    let loss_run = ScheduleGrid::from_rows(ScheduleKind::LossRun, &loss_run_rows)?;
    let deductible = ScheduleGrid::from_rows(ScheduleKind::DeductibleBill, &deductible_rows)?;
    let claim_review = ScheduleGrid::from_rows(ScheduleKind::ClaimReview, &claim_review_rows)?;

    let mut form = AccountForm::from_record(&record);
    form.from_pending = from_pending;

    Ok(AccountPageData {
        form,
        loss_run,
        deductible,
        claim_review,
        enablement,
        locked: locked_for_director(role, record.stage.as_deref(), record.is_submitted),
        is_create: false,
        confirm_text,
    })
}

/// Runs the submit lifecycle for the account screen.
///
/// On top of the shared lifecycle this screen gates on the premium/
/// service-level warning: a conflicting combination is returned to the
/// caller until the user explicitly continues, with zero writes issued.
pub fn submit_account<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &AccountForm,
) -> ServiceResult<SubmitOutcome<String>>
where
    R: AccountReader + AccountWriter + ScheduleWriter + ReferenceReader + ?Sized,
{
    let role = screen_role(user)?;
    let action: SubmitAction = form.action.parse()?;
    let ctx = EditContext::standalone(form.is_create, form.from_pending);

    // Step 1: field-level rules, before any repository call.
    form.validate()
        .map_err(|errors| ServiceError::Validation(first_validation_message(&errors)))?;
    form.validate_status_rules()?;

    // Step 3: the business-rule warning needs an explicit override.
    let premium = currency_amount(Some(form.total_prem.as_str()));
    if premium_conflicts_with_service_level(premium, &form.serv_level)
        && !form.acknowledge_conflict
    {
        return Ok(SubmitOutcome::PremiumConflict);
    }

    // Step 4: transform into the persisted shape.
    let mut record = form.to_record()?;
    let (loss_run, deductible, claim_review) = form.grids()?;
    let (stage, is_submitted) = workflow_stamp(role, action, &ctx);
    record.stage = Some(stage);
    record.is_submitted = is_submitted;

    // Selecting the secondary contact carries their title/email/phone along,
    // normalized where the directory entry parses cleanly.
    if let Some(name) = record.sac_contact2.clone() {
        if record.emp_two_email.is_none() {
            if let Some(contact) = repo.find_staff_by_name(&name)? {
                record.emp_two_title = contact.title;
                record.emp_two_email = contact.email.map(|email| {
                    ContactEmail::new(email.as_str())
                        .map(ContactEmail::into_inner)
                        .unwrap_or(email)
                });
                record.emp_two_tel = contact.phone.map(|phone| {
                    ContactPhone::new(phone.as_str())
                        .map(ContactPhone::into_inner)
                        .unwrap_or(phone)
                });
            }
        }
    }

    let customer_num = CustomerNum::new(record.customer_num.as_str())?;

    // Step 5: duplicate check, insert path only.
    if ctx.is_create && role == Role::Underwriter && repo.get_account(&customer_num)?.is_some() {
        return Ok(SubmitOutcome::DuplicateKey {
            message: "This Customer Number already exists, duplicate records are not permitted"
                .to_string(),
        });
    }

    // Step 6: the record plus all three schedule collections.
    repo.upsert_account(&record)?;
    let owner = customer_num.as_str();
    repo.replace_schedule(owner, ScheduleKind::LossRun, &loss_run.to_rows(owner))?;
    repo.replace_schedule(owner, ScheduleKind::DeductibleBill, &deductible.to_rows(owner))?;
    repo.replace_schedule(owner, ScheduleKind::ClaimReview, &claim_review.to_rows(owner))?;

    Ok(SubmitOutcome::Saved {
        key: record.customer_num,
        created: ctx.is_create,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::account::SacAccount;
    use crate::domain::reference::{
        Branch, DropdownOption, LossControlRep, ServiceLevel, StaffContact,
    };
    use crate::domain::schedule::ScheduleRow;
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    #[derive(Default)]
    struct MockRepo {
        existing: Option<SacAccount>,
        staff: Vec<StaffContact>,
        upserted: RefCell<Vec<SacAccount>>,
        replaced: RefCell<Vec<(String, ScheduleKind, usize)>>,
        fail_schedule_kind: Option<ScheduleKind>,
    }

    impl ReferenceReader for MockRepo {
        fn list_staff(&self) -> RepositoryResult<Vec<StaffContact>> {
            Ok(self.staff.clone())
        }

        fn find_staff_by_name(&self, name: &str) -> RepositoryResult<Option<StaffContact>> {
            Ok(self.staff.iter().find(|s| s.name == name).cloned())
        }

        fn list_loss_control_reps(
            &self,
            _active_only: bool,
        ) -> RepositoryResult<Vec<LossControlRep>> {
            Ok(vec![])
        }

        fn find_rep_by_name(&self, _name: &str) -> RepositoryResult<Option<LossControlRep>> {
            Ok(None)
        }

        fn list_branches(&self) -> RepositoryResult<Vec<Branch>> {
            Ok(vec![])
        }

        fn list_service_levels(&self) -> RepositoryResult<Vec<ServiceLevel>> {
            Ok(vec![])
        }

        fn list_dropdown_options(&self, _dd_type: &str) -> RepositoryResult<Vec<DropdownOption>> {
            Ok(vec![])
        }
    }

    impl AccountReader for MockRepo {
        fn get_account(&self, customer_num: &CustomerNum) -> RepositoryResult<Option<SacAccount>> {
            Ok(self
                .existing
                .clone()
                .filter(|a| a.customer_num == customer_num.as_str()))
        }

        fn search_accounts(&self, _term: &str) -> RepositoryResult<Vec<SacAccount>> {
            Ok(vec![])
        }

        fn list_submitted_accounts(&self) -> RepositoryResult<Vec<SacAccount>> {
            Ok(vec![])
        }
    }

    impl AccountWriter for MockRepo {
        fn upsert_account(&self, account: &SacAccount) -> RepositoryResult<()> {
            self.upserted.borrow_mut().push(account.clone());
            Ok(())
        }
    }

    impl ScheduleReader for MockRepo {
        fn list_schedule(
            &self,
            _owner: &str,
            _kind: ScheduleKind,
        ) -> RepositoryResult<Vec<ScheduleRow>> {
            Ok(vec![])
        }
    }

    impl ScheduleWriter for MockRepo {
        fn replace_schedule(
            &self,
            owner: &str,
            kind: ScheduleKind,
            rows: &[ScheduleRow],
        ) -> RepositoryResult<usize> {
            if self.fail_schedule_kind == Some(kind) {
                return Err(RepositoryError::DatabaseError("disk full".to_string()));
            }
            self.replaced
                .borrow_mut()
                .push((owner.to_string(), kind, rows.len()));
            Ok(rows.len())
        }
    }

    fn underwriter() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "uw@example.com".to_string(),
            name: "U. Writer".to_string(),
            roles: vec!["sac".to_string(), "Underwriter".to_string()],
            exp: 0,
        }
    }

    fn valid_form() -> AccountForm {
        AccountForm {
            customer_num: "C104233".to_string(),
            customer_name: "Granite Mutual Holdings".to_string(),
            acct_status: "Active".to_string(),
            action: "submit".to_string(),
            is_create: true,
            ..AccountForm::default()
        }
    }

    #[test]
    fn premium_conflict_blocks_until_acknowledged() {
        let repo = MockRepo::default();
        let form = AccountForm {
            total_prem: "100000".to_string(),
            serv_level: "Comprehensive".to_string(),
            ..valid_form()
        };

        // Declined (no acknowledgement): nothing is written.
        let outcome = submit_account(&repo, &underwriter(), &form).unwrap();
        assert_eq!(outcome, SubmitOutcome::PremiumConflict);
        assert!(repo.upserted.borrow().is_empty());
        assert!(repo.replaced.borrow().is_empty());

        // Accepted: the save proceeds.
        let form = AccountForm {
            acknowledge_conflict: true,
            ..form
        };
        let outcome = submit_account(&repo, &underwriter(), &form).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Saved { .. }));
        assert_eq!(repo.upserted.borrow().len(), 1);
    }

    #[test]
    fn matching_band_needs_no_acknowledgement() {
        let repo = MockRepo::default();
        let form = AccountForm {
            total_prem: "800000".to_string(),
            serv_level: "Comprehensive".to_string(),
            ..valid_form()
        };

        let outcome = submit_account(&repo, &underwriter(), &form).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Saved { .. }));
    }

    #[test]
    fn duplicate_customer_number_blocks_the_insert() {
        let repo = MockRepo {
            existing: Some(SacAccount {
                customer_num: "C104233".to_string(),
                ..SacAccount::default()
            }),
            ..MockRepo::default()
        };

        let outcome = submit_account(&repo, &underwriter(), &valid_form()).unwrap();
        assert!(matches!(outcome, SubmitOutcome::DuplicateKey { message }
            if message.contains("Customer Number already exists")));
        assert!(repo.upserted.borrow().is_empty());
    }

    #[test]
    fn submit_writes_all_three_schedules() {
        let repo = MockRepo::default();
        submit_account(&repo, &underwriter(), &valid_form()).unwrap();

        let replaced = repo.replaced.borrow();
        let kinds: Vec<ScheduleKind> = replaced.iter().map(|(_, kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                ScheduleKind::LossRun,
                ScheduleKind::DeductibleBill,
                ScheduleKind::ClaimReview
            ]
        );
        assert!(replaced.iter().all(|(_, _, count)| *count == 12));
    }

    #[test]
    fn child_write_failure_is_an_aggregate_failure() {
        let repo = MockRepo {
            fail_schedule_kind: Some(ScheduleKind::ClaimReview),
            ..MockRepo::default()
        };

        let err = submit_account(&repo, &underwriter(), &valid_form()).unwrap_err();
        assert!(matches!(err, ServiceError::Repository(_)));
        // Primary and earlier children had already been written.
        assert_eq!(repo.upserted.borrow().len(), 1);
        assert_eq!(repo.replaced.borrow().len(), 2);
    }

    #[test]
    fn secondary_contact_selection_fills_the_companion_fields() {
        let repo = MockRepo {
            staff: vec![StaffContact {
                id: 4,
                lan_id: None,
                name: "M. Delgado".to_string(),
                title: Some("Account Services Lead".to_string()),
                email: Some("mdelgado@example.com".to_string()),
                phone: Some("+15085550144".to_string()),
            }],
            ..MockRepo::default()
        };
        let form = AccountForm {
            sac_contact2: "M. Delgado".to_string(),
            ..valid_form()
        };

        submit_account(&repo, &underwriter(), &form).unwrap();
        let upserted = repo.upserted.borrow();
        assert_eq!(upserted[0].emp_two_title.as_deref(), Some("Account Services Lead"));
        assert_eq!(upserted[0].emp_two_email.as_deref(), Some("mdelgado@example.com"));
        assert_eq!(upserted[0].emp_two_tel.as_deref(), Some("+15085550144"));
    }

    #[test]
    fn inactive_account_requires_notification_date_before_any_write() {
        let repo = MockRepo::default();
        let form = AccountForm {
            acct_status: "Inactive".to_string(),
            ..valid_form()
        };

        let err = submit_account(&repo, &underwriter(), &form).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(message)
            if message.contains("Notification date")));
        assert!(repo.upserted.borrow().is_empty());
    }
}
