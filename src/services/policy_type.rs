//! Edit-session services for the policy-type screen.

use chrono::Utc;
use validator::Validate;

use crate::domain::permissions::{locked_for_director, policy_type_field_access};
use crate::domain::policy_type::PolicyType;
use crate::domain::types::ProgramName;
use crate::dto::policy_type::PolicyTypePageData;
use crate::forms::first_validation_message;
use crate::forms::policy_type::PolicyTypeForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{PolicyTypeReader, PolicyTypeWriter};
use crate::services::session::{
    EditContext, RecordLookup, SubmitAction, SubmitOutcome, screen_role,
    submit_confirmation_text, workflow_stamp,
};
use crate::services::{ServiceError, ServiceResult};

/// Filter columns accepted by the policy-type view route.
const LOOKUP_COLUMNS: [&str; 1] = ["pk_number"];

/// What the policy-type screen should open on.
#[derive(Clone, Debug)]
pub enum PolicyTypeTarget {
    /// Blank defaults under the given program.
    New { program_name: String },
    /// A `pk_number=value` segment from the view route.
    Lookup(String),
    /// Seed an additional type cloned from the identified record.
    NextType(String),
    /// A caller-supplied surrogate key (wizard embedding).
    SeedPk(i32),
}

fn parse_pk(segment: &str) -> ServiceResult<i32> {
    let lookup = RecordLookup::parse(segment, &LOOKUP_COLUMNS)?;
    lookup.value.parse::<i32>().map_err(|_| {
        ServiceError::Validation(format!("Invalid policy type key: {}", lookup.value))
    })
}

fn fetch_policy_type<R>(repo: &R, pk: i32) -> ServiceResult<PolicyType>
where
    R: PolicyTypeReader + ?Sized,
{
    repo.get_policy_type_by_pk(pk)?.ok_or(ServiceError::NotFound)
}

/// Loads the policy-type edit screen.
pub fn load_policy_type_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    target: PolicyTypeTarget,
    from_pending: bool,
) -> ServiceResult<PolicyTypePageData>
where
    R: PolicyTypeReader + ?Sized,
{
    let role = screen_role(user)?;
    let enablement = policy_type_field_access(role).into();
    let confirm_text = submit_confirmation_text(role);
    let today = Utc::now().date_naive();

    let (form, locked, is_create) = match target {
        PolicyTypeTarget::New { program_name } => {
            let mut form = PolicyTypeForm::defaults(today, &program_name);
            form.is_create = true;
            (form, false, true)
        }
        PolicyTypeTarget::Lookup(segment) => {
            let record = fetch_policy_type(repo, parse_pk(&segment)?)?;
            let locked = locked_for_director(role, record.stage.as_deref(), record.is_submitted);
            let mut form = PolicyTypeForm::from_record(&record);
            form.from_pending = from_pending;
            (form, locked, false)
        }
        PolicyTypeTarget::NextType(segment) => {
            let source = fetch_policy_type(repo, parse_pk(&segment)?)?;
            let draft = source.next_type(today);
            let mut form = PolicyTypeForm::from_record(&draft);
            form.is_create = true;
            (form, false, true)
        }
        PolicyTypeTarget::SeedPk(pk) => {
            let record = fetch_policy_type(repo, pk)?;
            let locked = locked_for_director(role, record.stage.as_deref(), record.is_submitted);
            (PolicyTypeForm::from_record(&record), locked, false)
        }
    };

    Ok(PolicyTypePageData {
        form,
        enablement,
        locked,
        is_create,
        confirm_text,
    })
}

/// Runs the submit lifecycle for the policy-type screen.
pub fn submit_policy_type<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &PolicyTypeForm,
) -> ServiceResult<SubmitOutcome<i32>>
where
    R: PolicyTypeReader + PolicyTypeWriter + ?Sized,
{
    let role = screen_role(user)?;
    let action: SubmitAction = form.action.parse()?;
    let ctx = EditContext::standalone(form.is_create, form.from_pending);

    // Step 1: field-level rules, before any repository call.
    form.validate()
        .map_err(|errors| ServiceError::Validation(first_validation_message(&errors)))?;
    form.validate_phones()?;

    // Step 4: transform; blank handling fields get their save-time defaults.
    let mut record = form.to_record()?;
    let (stage, is_submitted) = workflow_stamp(role, action, &ctx);
    record.stage = Some(stage);
    record.is_submitted = is_submitted;

    // Step 5: duplicate check on the insert path.
    if record.pk_number.is_none() {
        let program_name = ProgramName::new(record.program_name.as_str())?;
        if repo
            .get_policy_type_by_key(&program_name, record.policy_type.as_str())?
            .is_some()
        {
            return Ok(SubmitOutcome::DuplicateKey {
                message: "This Policy Type already exists under the program, duplicate records \
                          are not permitted"
                    .to_string(),
            });
        }
    }

    // Step 6: single upsert returning the surrogate key.
    let created = record.pk_number.is_none();
    let pk = repo.upsert_policy_type(&record)?;

    Ok(SubmitOutcome::Saved { key: pk, created })
}

/// Policy types configured under one program, for the browser modal.
pub fn list_program_policy_types<R>(
    repo: &R,
    user: &AuthenticatedUser,
    program_name: &str,
) -> ServiceResult<Vec<PolicyType>>
where
    R: PolicyTypeReader + ?Sized,
{
    screen_role(user)?;
    let program_name = ProgramName::new(program_name)?;
    repo.list_policy_types(&program_name).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::repository::errors::RepositoryResult;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct MockRepo {
        by_pk: Option<PolicyType>,
        by_key: Option<PolicyType>,
        upserted: RefCell<Vec<PolicyType>>,
    }

    impl PolicyTypeReader for MockRepo {
        fn get_policy_type_by_pk(&self, pk_number: i32) -> RepositoryResult<Option<PolicyType>> {
            Ok(self
                .by_pk
                .clone()
                .filter(|r| r.pk_number == Some(pk_number)))
        }

        fn get_policy_type_by_key(
            &self,
            program_name: &ProgramName,
            policy_type: &str,
        ) -> RepositoryResult<Option<PolicyType>> {
            Ok(self.by_key.clone().filter(|r| {
                r.program_name == program_name.as_str() && r.policy_type == policy_type
            }))
        }

        fn list_policy_types(
            &self,
            _program_name: &ProgramName,
        ) -> RepositoryResult<Vec<PolicyType>> {
            Ok(vec![])
        }
    }

    impl PolicyTypeWriter for MockRepo {
        fn upsert_policy_type(&self, record: &PolicyType) -> RepositoryResult<i32> {
            self.upserted.borrow_mut().push(record.clone());
            Ok(record.pk_number.unwrap_or(55))
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

    fn stored_record() -> PolicyType {
        PolicyType {
            pk_number: Some(12),
            program_name: "Summit Fleet Program".to_string(),
            policy_type: "Workers Comp".to_string(),
            underwriter_name: Some("D. Marsh".to_string()),
            date_created: NaiveDate::from_ymd_opt(2023, 5, 2),
            ..PolicyType::default()
        }
    }

    fn valid_form() -> PolicyTypeForm {
        PolicyTypeForm {
            program_name: "Summit Fleet Program".to_string(),
            policy_type: "Auto".to_string(),
            action: "submit".to_string(),
            is_create: true,
            ..PolicyTypeForm::default()
        }
    }

    #[test]
    fn next_type_seeds_a_fresh_name_under_the_program() {
        let repo = MockRepo {
            by_pk: Some(stored_record()),
            ..MockRepo::default()
        };

        let page = load_policy_type_page(
            &repo,
            &underwriter(),
            PolicyTypeTarget::NextType("pk_number=12".to_string()),
            false,
        )
        .unwrap();

        assert!(page.is_create);
        assert_eq!(page.form.policy_type, "");
        assert_eq!(page.form.program_name, "Summit Fleet Program");
        assert_eq!(page.form.underwriter_name, "D. Marsh");
        assert_eq!(page.form.pk_number, "");
    }

    #[test]
    fn duplicate_type_under_the_program_blocks_the_insert() {
        let repo = MockRepo {
            by_key: Some(PolicyType {
                policy_type: "Auto".to_string(),
                ..stored_record()
            }),
            ..MockRepo::default()
        };

        let outcome = submit_policy_type(&repo, &underwriter(), &valid_form()).unwrap();
        assert!(matches!(outcome, SubmitOutcome::DuplicateKey { .. }));
        assert!(repo.upserted.borrow().is_empty());
    }

    #[test]
    fn submit_stamps_workflow_and_returns_the_key() {
        let repo = MockRepo::default();
        let outcome = submit_policy_type(&repo, &underwriter(), &valid_form()).unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Saved {
                key: 55,
                created: true
            }
        );
        let upserted = repo.upserted.borrow();
        assert_eq!(upserted[0].stage.as_deref(), Some("Underwriter"));
        assert_eq!(upserted[0].is_submitted, 1);
        assert_eq!(upserted[0].add_l_docs.as_deref(), Some("No"));
    }
}
