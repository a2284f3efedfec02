//! Edit-session services for the affinity program screen.

use chrono::Utc;
use validator::Validate;

use crate::domain::permissions::{Role, locked_for_director, program_field_access};
use crate::domain::schedule::{ScheduleGrid, ScheduleKind};
use crate::domain::types::ProgramName;
use crate::dto::program::ProgramPageData;
use crate::forms::first_validation_message;
use crate::forms::program::ProgramForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ProgramReader, ProgramWriter, ScheduleReader, ScheduleWriter};
use crate::services::session::{
    EditContext, RecordLookup, SubmitAction, SubmitOutcome, screen_role,
    submit_confirmation_text, workflow_stamp,
};
use crate::services::{ServiceError, ServiceResult};

/// Filter columns accepted by the program view route.
const LOOKUP_COLUMNS: [&str; 1] = ["program_name"];

/// What the program screen should open on.
#[derive(Clone, Debug)]
pub enum ProgramTarget {
    /// Blank defaults for a brand-new program.
    New,
    /// A `column=value` segment from the view route.
    Lookup(String),
    /// A caller-supplied key (wizard embedding).
    Seed(String),
}

/// Loads the program edit screen.
///
/// The record and both schedule collections are fetched before any page
/// state is assembled, so a failed fetch never leaves a half-loaded form.
pub fn load_program_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    target: ProgramTarget,
    from_pending: bool,
) -> ServiceResult<ProgramPageData>
where
    R: ProgramReader + ScheduleReader + ?Sized,
{
    let role = screen_role(user)?;
    let enablement = program_field_access(role).into();
    let confirm_text = submit_confirmation_text(role);

    let key = match target {
        ProgramTarget::New => {
            let mut form = ProgramForm::defaults(Utc::now().date_naive());
            form.is_create = true;
            return Ok(ProgramPageData {
                form,
                loss_run: ScheduleGrid::empty(ScheduleKind::LossRun),
                claim_review: ScheduleGrid::empty(ScheduleKind::ClaimReview),
                enablement,
                locked: false,
                is_create: true,
                confirm_text,
            });
        }
        ProgramTarget::Lookup(segment) => {
            RecordLookup::parse(&segment, &LOOKUP_COLUMNS)?.value
        }
        ProgramTarget::Seed(key) => key,
    };

    let name = ProgramName::new(key)?;
    let record = repo.get_program(&name)?.ok_or(ServiceError::NotFound)?;
    let loss_run_rows = repo.list_schedule(name.as_str(), ScheduleKind::LossRun)?;
    let claim_review_rows = repo.list_schedule(name.as_str(), ScheduleKind::ClaimReview)?;

    let loss_run = ScheduleGrid::from_rows(ScheduleKind::LossRun, &loss_run_rows)?;
    let claim_review = ScheduleGrid::from_rows(ScheduleKind::ClaimReview, &claim_review_rows)?;

    let mut form = ProgramForm::from_record(&record);
    form.from_pending = from_pending;

    Ok(ProgramPageData {
        form,
        loss_run,
        claim_review,
        enablement,
        locked: locked_for_director(role, record.stage.as_deref(), record.is_submitted),
        is_create: false,
        confirm_text,
    })
}

/// Runs the submit lifecycle for the program screen: validate, transform,
/// duplicate-check, then persist the record and both schedule collections.
pub fn submit_program<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &ProgramForm,
) -> ServiceResult<SubmitOutcome<String>>
where
    R: ProgramReader + ProgramWriter + ScheduleWriter + ?Sized,
{
    let role = screen_role(user)?;
    let action: SubmitAction = form.action.parse()?;
    let ctx = EditContext::standalone(form.is_create, form.from_pending);

    // Step 1: field-level rules, before any repository call.
    form.validate()
        .map_err(|errors| ServiceError::Validation(first_validation_message(&errors)))?;
    form.validate_status_rules()?;

    // Step 4: transform into the persisted shape.
    let mut record = form.to_record()?;
    let (loss_run, claim_review) = form.grids()?;
    let (stage, is_submitted) = workflow_stamp(role, action, &ctx);
    record.stage = Some(stage);
    record.is_submitted = is_submitted;

    let name = ProgramName::new(record.program_name.as_str())?;

    // Step 5: duplicate check, insert path only.
    if ctx.is_create && role == Role::Underwriter && repo.get_program(&name)?.is_some() {
        return Ok(SubmitOutcome::DuplicateKey {
            message: "This Program Name already exists, duplicate records are not permitted"
                .to_string(),
        });
    }

    // Step 6: the record plus both schedule collections; any failure fails
    // the whole save (earlier writes stay, there is no rollback).
    repo.upsert_program(&record)?;
    repo.replace_schedule(
        name.as_str(),
        ScheduleKind::LossRun,
        &loss_run.to_rows(name.as_str()),
    )?;
    repo.replace_schedule(
        name.as_str(),
        ScheduleKind::ClaimReview,
        &claim_review.to_rows(name.as_str()),
    )?;

    Ok(SubmitOutcome::Saved {
        key: record.program_name,
        created: ctx.is_create,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::program::AffinityProgram;
    use crate::domain::reference::AffinityAgent;
    use crate::domain::schedule::ScheduleRow;
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    #[derive(Default)]
    struct MockRepo {
        existing: Option<AffinityProgram>,
        schedule_rows: Vec<ScheduleRow>,
        upserted: RefCell<Vec<AffinityProgram>>,
        replaced: RefCell<Vec<(String, ScheduleKind, usize)>>,
        fail_schedule_writes: bool,
    }

    impl ProgramReader for MockRepo {
        fn get_program(&self, name: &ProgramName) -> RepositoryResult<Option<AffinityProgram>> {
            Ok(self
                .existing
                .clone()
                .filter(|p| p.program_name == name.as_str()))
        }

        fn list_programs(&self) -> RepositoryResult<Vec<AffinityProgram>> {
            Ok(self.existing.clone().into_iter().collect())
        }

        fn list_programs_with_agents(
            &self,
        ) -> RepositoryResult<Vec<(AffinityAgent, AffinityProgram)>> {
            Ok(vec![])
        }

        fn list_submitted_programs(&self) -> RepositoryResult<Vec<AffinityProgram>> {
            Ok(vec![])
        }
    }

    impl ProgramWriter for MockRepo {
        fn upsert_program(&self, program: &AffinityProgram) -> RepositoryResult<()> {
            self.upserted.borrow_mut().push(program.clone());
            Ok(())
        }
    }

    impl ScheduleReader for MockRepo {
        fn list_schedule(
            &self,
            owner: &str,
            kind: ScheduleKind,
        ) -> RepositoryResult<Vec<ScheduleRow>> {
            Ok(self
                .schedule_rows
                .iter()
                .filter(|row| row.owner == owner && row.kind == kind)
                .cloned()
                .collect())
        }
    }

    impl ScheduleWriter for MockRepo {
        fn replace_schedule(
            &self,
            owner: &str,
            kind: ScheduleKind,
            rows: &[ScheduleRow],
        ) -> RepositoryResult<usize> {
            if self.fail_schedule_writes {
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

    fn valid_form() -> ProgramForm {
        ProgramForm {
            program_name: "Summit Fleet Program".to_string(),
            branch_val: "Worcester".to_string(),
            onboard_dt: "2024-05-01".to_string(),
            acct_status: "Active".to_string(),
            action: "submit".to_string(),
            is_create: true,
            ..ProgramForm::default()
        }
    }

    #[test]
    fn validation_failure_makes_no_repository_calls() {
        let repo = MockRepo::default();
        let form = ProgramForm {
            program_name: String::new(),
            ..valid_form()
        };

        let err = submit_program(&repo, &underwriter(), &form).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(message)
            if message == "Program Name is mandatory and cannot be empty"));
        assert!(repo.upserted.borrow().is_empty());
        assert!(repo.replaced.borrow().is_empty());
    }

    #[test]
    fn duplicate_program_name_blocks_the_insert() {
        let repo = MockRepo {
            existing: Some(AffinityProgram {
                program_name: "Summit Fleet Program".to_string(),
                ..AffinityProgram::default()
            }),
            ..MockRepo::default()
        };

        let outcome = submit_program(&repo, &underwriter(), &valid_form()).unwrap();
        assert!(matches!(outcome, SubmitOutcome::DuplicateKey { message }
            if message.contains("already exists")));
        assert!(repo.upserted.borrow().is_empty());
        assert!(repo.replaced.borrow().is_empty());
    }

    #[test]
    fn submit_persists_record_and_both_schedules() {
        let repo = MockRepo::default();
        let outcome = submit_program(&repo, &underwriter(), &valid_form()).unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Saved {
                key: "Summit Fleet Program".to_string(),
                created: true
            }
        );

        let upserted = repo.upserted.borrow();
        assert_eq!(upserted.len(), 1);
        assert_eq!(upserted[0].stage.as_deref(), Some("Underwriter"));
        assert_eq!(upserted[0].is_submitted, 1);

        let replaced = repo.replaced.borrow();
        assert_eq!(replaced.len(), 2);
        assert!(replaced.iter().all(|(owner, _, count)| {
            owner == "Summit Fleet Program" && *count == 12
        }));
    }

    #[test]
    fn schedule_write_failure_fails_the_whole_submit() {
        let repo = MockRepo {
            fail_schedule_writes: true,
            ..MockRepo::default()
        };

        let err = submit_program(&repo, &underwriter(), &valid_form()).unwrap_err();
        assert!(matches!(err, ServiceError::Repository(_)));
        // The primary upsert had already gone out; it is not rolled back.
        assert_eq!(repo.upserted.borrow().len(), 1);
    }

    #[test]
    fn plain_save_on_create_stays_unsubmitted() {
        let repo = MockRepo::default();
        let form = ProgramForm {
            action: "save".to_string(),
            ..valid_form()
        };

        submit_program(&repo, &underwriter(), &form).unwrap();
        assert_eq!(repo.upserted.borrow()[0].is_submitted, 0);
    }

    #[test]
    fn user_without_service_role_is_rejected() {
        let repo = MockRepo::default();
        let mut user = underwriter();
        user.roles = vec!["Underwriter".to_string()];

        let err = submit_program(&repo, &user, &valid_form()).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }

    #[test]
    fn load_new_program_seeds_defaults() {
        let repo = MockRepo::default();
        let page =
            load_program_page(&repo, &underwriter(), ProgramTarget::New, false).unwrap();

        assert!(page.is_create);
        assert_eq!(page.form.acct_status, "Active");
        assert_eq!(page.form.bus_type, "Affinity");
        assert_eq!(page.loss_run.slots().len(), 12);
        assert!(page.enablement.all_fields);
    }

    #[test]
    fn load_unknown_program_is_not_found() {
        let repo = MockRepo::default();
        let err = load_program_page(
            &repo,
            &underwriter(),
            ProgramTarget::Lookup("program_name=Nobody".to_string()),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn load_rejects_unsupported_lookup_columns() {
        let repo = MockRepo::default();
        let err = load_program_page(
            &repo,
            &underwriter(),
            ProgramTarget::Lookup("stage=Admin".to_string()),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
