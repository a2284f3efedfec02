//! Edit-session services for the policy screen.

use chrono::Utc;
use validator::Validate;

use crate::domain::permissions::{locked_for_director, policy_field_access};
use crate::domain::policy::Policy;
use crate::domain::status::parse_policy_status;
use crate::domain::types::{CustomerNum, PolicyMod, PolicyNumber};
use crate::dto::policy::PolicyPageData;
use crate::forms::first_validation_message;
use crate::forms::policy::PolicyForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{PolicyReader, PolicyWriter};
use crate::services::session::{
    EditContext, RecordLookup, SubmitAction, SubmitOutcome, screen_role,
    submit_confirmation_text, workflow_stamp,
};
use crate::services::{ServiceError, ServiceResult};

/// Filter columns accepted by the policy view route.
const LOOKUP_COLUMNS: [&str; 1] = ["pk_number"];

/// What the policy screen should open on.
#[derive(Clone, Debug)]
pub enum PolicyTarget {
    /// Blank defaults, optionally under a known customer.
    New {
        customer: Option<(String, String)>,
    },
    /// A `pk_number=value` segment from the view route.
    Lookup(String),
    /// Seed the next modification of the identified policy.
    NextMod(String),
    /// A caller-supplied surrogate key (wizard embedding).
    SeedPk(i32),
}

fn parse_pk(segment: &str) -> ServiceResult<i32> {
    let lookup = RecordLookup::parse(segment, &LOOKUP_COLUMNS)?;
    lookup
        .value
        .parse::<i32>()
        .map_err(|_| ServiceError::Validation(format!("Invalid policy key: {}", lookup.value)))
}

fn fetch_policy<R>(repo: &R, pk: i32) -> ServiceResult<Policy>
where
    R: PolicyReader + ?Sized,
{
    repo.get_policy_by_pk(pk)?.ok_or(ServiceError::NotFound)
}

/// Loads the policy edit screen.
pub fn load_policy_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    target: PolicyTarget,
    from_pending: bool,
) -> ServiceResult<PolicyPageData>
where
    R: PolicyReader + ?Sized,
{
    let role = screen_role(user)?;
    let enablement = policy_field_access(role).into();
    let confirm_text = submit_confirmation_text(role);
    let today = Utc::now().date_naive();

    let (form, locked, is_create, is_next_mod) = match target {
        PolicyTarget::New { customer } => {
            let mut form = PolicyForm::defaults(
                today,
                customer.as_ref().map(|(num, name)| (num.as_str(), name.as_str())),
            );
            form.is_create = true;
            (form, false, true, false)
        }
        PolicyTarget::Lookup(segment) => {
            let record = fetch_policy(repo, parse_pk(&segment)?)?;
            let locked = locked_for_director(role, record.stage.as_deref(), record.is_submitted);
            let mut form = PolicyForm::from_record(&record);
            form.from_pending = from_pending;
            (form, locked, false, false)
        }
        PolicyTarget::NextMod(segment) => {
            let source = fetch_policy(repo, parse_pk(&segment)?)?;
            let draft = source.next_mod(today);
            let mut form = PolicyForm::from_record(&draft);
            form.is_next_mod = true;
            (form, false, false, true)
        }
        PolicyTarget::SeedPk(pk) => {
            let record = fetch_policy(repo, pk)?;
            let locked = locked_for_director(role, record.stage.as_deref(), record.is_submitted);
            (PolicyForm::from_record(&record), locked, false, false)
        }
    };

    let status = parse_policy_status(&form.policy_status);
    let show_cancel_date = status.is_some_and(|s| s.unlocks_cancel_date());
    let show_completion_date = status.is_some_and(|s| s.requires_completion_date())
        || form.loc_list == "Completed";

    Ok(PolicyPageData {
        form,
        enablement,
        locked,
        is_create,
        is_next_mod,
        show_cancel_date,
        show_completion_date,
        confirm_text,
    })
}

/// Runs the submit lifecycle for the policy screen.
///
/// The policy screen persists a single record; empty fields are stripped to
/// `NULL` during the transform, and the duplicate check guards any path that
/// would insert a new policy-number/mod combination.
pub fn submit_policy<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &PolicyForm,
) -> ServiceResult<SubmitOutcome<i32>>
where
    R: PolicyReader + PolicyWriter + ?Sized,
{
    let role = screen_role(user)?;
    let action: SubmitAction = form.action.parse()?;
    let ctx = EditContext::standalone(form.is_create, form.from_pending);

    // Step 1: field-level rules, before any repository call.
    form.validate()
        .map_err(|errors| ServiceError::Validation(first_validation_message(&errors)))?;
    form.validate_phones()?;

    // Step 4: transform into the persisted shape.
    let mut record = form.to_record(Utc::now().date_naive())?;
    let (stage, is_submitted) = workflow_stamp(role, action, &ctx);
    record.stage = Some(stage);
    record.is_submitted = is_submitted;

    // Step 5: duplicate check on any insert path (create or next-mod).
    if record.pk_number.is_none() {
        let policy_num = PolicyNumber::new(record.policy_num.as_str())?;
        let pol_mod = PolicyMod::new(record.pol_mod.as_str())?;
        if repo.get_policy_by_key(&policy_num, &pol_mod)?.is_some() {
            return Ok(SubmitOutcome::DuplicateKey {
                message: "This Policy Number and Mod combination already exists, duplicate \
                          records are not permitted"
                    .to_string(),
            });
        }
    }

    // Step 6: single upsert returning the surrogate key.
    let pk = repo.upsert_policy(&record)?;

    Ok(SubmitOutcome::Saved {
        key: pk,
        created: record.pk_number.is_none(),
    })
}

/// Policies written under one customer, for the policy browser.
pub fn list_customer_policies<R>(
    repo: &R,
    user: &AuthenticatedUser,
    customer_num: &str,
) -> ServiceResult<Vec<Policy>>
where
    R: PolicyReader + ?Sized,
{
    screen_role(user)?;
    let customer_num = CustomerNum::new(customer_num)?;
    repo.list_policies_by_customer(&customer_num)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::repository::errors::RepositoryResult;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct MockRepo {
        by_pk: Option<Policy>,
        by_key: Option<Policy>,
        upserted: RefCell<Vec<Policy>>,
    }

    impl PolicyReader for MockRepo {
        fn get_policy_by_pk(&self, pk_number: i32) -> RepositoryResult<Option<Policy>> {
            Ok(self
                .by_pk
                .clone()
                .filter(|p| p.pk_number == Some(pk_number)))
        }

        fn get_policy_by_key(
            &self,
            policy_num: &PolicyNumber,
            pol_mod: &PolicyMod,
        ) -> RepositoryResult<Option<Policy>> {
            Ok(self.by_key.clone().filter(|p| {
                p.policy_num == policy_num.as_str() && p.pol_mod == pol_mod.as_str()
            }))
        }

        fn list_policies_by_customer(
            &self,
            _customer_num: &CustomerNum,
        ) -> RepositoryResult<Vec<Policy>> {
            Ok(vec![])
        }

        fn list_submitted_policies(&self) -> RepositoryResult<Vec<Policy>> {
            Ok(vec![])
        }
    }

    impl PolicyWriter for MockRepo {
        fn upsert_policy(&self, policy: &Policy) -> RepositoryResult<i32> {
            self.upserted.borrow_mut().push(policy.clone());
            Ok(policy.pk_number.unwrap_or(101))
        }
    }

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".to_string(),
            email: "admin@example.com".to_string(),
            name: "A. Min".to_string(),
            roles: vec!["sac".to_string(), "Admin".to_string()],
            exp: 0,
        }
    }

    fn stored_policy() -> Policy {
        Policy {
            pk_number: Some(7),
            policy_num: "HN5501".to_string(),
            pol_mod: "00".to_string(),
            policy_status: Some("Active".to_string()),
            incept_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            exp_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            ..Policy::default()
        }
    }

    fn valid_form() -> PolicyForm {
        PolicyForm {
            policy_num: "HN5501".to_string(),
            pol_mod: "01".to_string(),
            action: "save".to_string(),
            is_create: true,
            ..PolicyForm::default()
        }
    }

    #[test]
    fn next_mod_target_seeds_the_renewal_draft() {
        let repo = MockRepo {
            by_pk: Some(stored_policy()),
            ..MockRepo::default()
        };

        let page = load_policy_page(
            &repo,
            &admin(),
            PolicyTarget::NextMod("pk_number=7".to_string()),
            false,
        )
        .unwrap();

        assert!(page.is_next_mod);
        assert_eq!(page.form.pol_mod, "01");
        assert_eq!(page.form.incept_date, "2025-03-01");
        assert_eq!(page.form.policy_status, "Pending Renewal");
        assert_eq!(page.form.pk_number, "");
    }

    #[test]
    fn duplicate_policy_key_blocks_the_insert() {
        let repo = MockRepo {
            by_key: Some(Policy {
                pol_mod: "01".to_string(),
                ..stored_policy()
            }),
            ..MockRepo::default()
        };

        let outcome = submit_policy(&repo, &admin(), &valid_form()).unwrap();
        assert!(matches!(outcome, SubmitOutcome::DuplicateKey { message }
            if message.contains("Policy Number and Mod")));
        assert!(repo.upserted.borrow().is_empty());
    }

    #[test]
    fn update_path_skips_the_duplicate_check() {
        let repo = MockRepo {
            by_key: Some(stored_policy()),
            ..MockRepo::default()
        };
        let form = PolicyForm {
            pk_number: "7".to_string(),
            pol_mod: "00".to_string(),
            is_create: false,
            ..valid_form()
        };

        let outcome = submit_policy(&repo, &admin(), &form).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Saved { key: 7, .. }));
    }

    #[test]
    fn validation_failure_makes_no_repository_calls() {
        let repo = MockRepo::default();
        let form = PolicyForm {
            policy_num: String::new(),
            ..valid_form()
        };

        let err = submit_policy(&repo, &admin(), &form).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.upserted.borrow().is_empty());
    }

    #[test]
    fn cancel_date_visibility_follows_status() {
        let repo = MockRepo {
            by_pk: Some(Policy {
                policy_status: Some("Cancellation Pending".to_string()),
                ..stored_policy()
            }),
            ..MockRepo::default()
        };

        let page = load_policy_page(
            &repo,
            &admin(),
            PolicyTarget::Lookup("pk_number=7".to_string()),
            false,
        )
        .unwrap();

        assert!(page.show_cancel_date);
        assert!(!page.show_completion_date);
    }
}
