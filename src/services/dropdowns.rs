//! Named reference lists served to the dropdown controls.
//!
//! Each name maps to one reference source, mirroring the dropdown registry
//! the screens request by name; anything unrecognized is treated as a
//! `dd_type` filter on the generic option table.

use serde_json::Value;

use crate::SERVICE_ACCESS_ROLE;
use crate::models::auth::AuthenticatedUser;
use crate::repository::ReferenceReader;
use crate::services::{ServiceError, ServiceResult};

fn to_json<T: serde::Serialize>(value: &T) -> ServiceResult<Value> {
    serde_json::to_value(value)
        .map_err(|err| ServiceError::Internal(format!("Failed to encode dropdown data: {err}")))
}

/// Loads the named reference list as JSON.
pub fn dropdown_options<R>(
    repo: &R,
    user: &AuthenticatedUser,
    name: &str,
) -> ServiceResult<Value>
where
    R: ReferenceReader + ?Sized,
{
    if !user.has_role(SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    match name {
        // Staff directory backs the SAC contact and account-owner pickers.
        "sac_contact" | "acct_owner" => to_json(&repo.list_staff()?),
        "loss_ctl_rep1" | "risk_sol_mgr" => to_json(&repo.list_loss_control_reps(false)?),
        // Secondary rep assignments only offer the active roster.
        "loss_ctl_rep2" => to_json(&repo.list_loss_control_reps(true)?),
        "branch_name" => to_json(&repo.list_branches()?),
        "serv_level" => to_json(&repo.list_service_levels()?),
        dd_type => {
            let options = repo.list_dropdown_options(dd_type)?;
            if options.is_empty() {
                return Err(ServiceError::Validation(format!(
                    "Unknown dropdown: {name}"
                )));
            }
            to_json(&options)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference::{
        Branch, DropdownOption, LossControlRep, ServiceLevel, StaffContact,
    };
    use crate::repository::errors::RepositoryResult;

    struct MockRepo;

    impl ReferenceReader for MockRepo {
        fn list_staff(&self) -> RepositoryResult<Vec<StaffContact>> {
            Ok(vec![StaffContact {
                id: 1,
                name: "R. Calloway".to_string(),
                ..StaffContact::default()
            }])
        }

        fn find_staff_by_name(&self, _name: &str) -> RepositoryResult<Option<StaffContact>> {
            Ok(None)
        }

        fn list_loss_control_reps(
            &self,
            active_only: bool,
        ) -> RepositoryResult<Vec<LossControlRep>> {
            let mut reps = vec![LossControlRep {
                id: 1,
                rep_name: "T. Okafor".to_string(),
                active: "Yes".to_string(),
                ..LossControlRep::default()
            }];
            if !active_only {
                reps.push(LossControlRep {
                    id: 2,
                    rep_name: "Retired Rep".to_string(),
                    active: "No".to_string(),
                    ..LossControlRep::default()
                });
            }
            Ok(reps)
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

        fn list_dropdown_options(&self, dd_type: &str) -> RepositoryResult<Vec<DropdownOption>> {
            if dd_type == "DNRStatus" {
                Ok(vec![DropdownOption {
                    id: 1,
                    dd_type: "DNRStatus".to_string(),
                    dd_value: "Non-payment".to_string(),
                    label: None,
                }])
            } else {
                Ok(vec![])
            }
        }
    }

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "uw@example.com".to_string(),
            name: "U. Writer".to_string(),
            roles: vec!["sac".to_string(), "Underwriter".to_string()],
            exp: 0,
        }
    }

    #[test]
    fn secondary_rep_list_is_active_only() {
        let value = dropdown_options(&MockRepo, &user(), "loss_ctl_rep2").unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);

        let value = dropdown_options(&MockRepo, &user(), "loss_ctl_rep1").unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn unknown_names_fall_through_to_dd_type() {
        let value = dropdown_options(&MockRepo, &user(), "DNRStatus").unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);

        let err = dropdown_options(&MockRepo, &user(), "NoSuchList").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn access_role_is_required() {
        let mut user = user();
        user.roles = vec!["Underwriter".to_string()];
        let err = dropdown_options(&MockRepo, &user, "acct_owner").unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }
}
