//! Landing page service: the pending-items queue.

use crate::dto::main::{IndexPageData, PendingItem};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{AccountReader, PolicyReader, ProgramReader};
use crate::services::ServiceResult;
use crate::services::session::screen_role;

/// Loads the records awaiting review across all entity types.
pub fn load_index_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<IndexPageData>
where
    R: ProgramReader + AccountReader + PolicyReader + ?Sized,
{
    screen_role(user)?;

    let mut pending = Vec::new();

    for program in repo.list_submitted_programs()? {
        pending.push(PendingItem {
            kind: "Affinity Program",
            key: program.program_name.clone(),
            title: program.program_name.clone(),
            url: format!("/program/program_name={}", program.program_name),
            stage: program.stage.unwrap_or_default(),
        });
    }

    for account in repo.list_submitted_accounts()? {
        pending.push(PendingItem {
            kind: "Special Account",
            key: account.customer_num.clone(),
            title: account.customer_name.clone(),
            url: format!("/account/customer_num={}", account.customer_num),
            stage: account.stage.unwrap_or_default(),
        });
    }

    for policy in repo.list_submitted_policies()? {
        let Some(pk) = policy.pk_number else { continue };
        let title = policy
            .account_name
            .clone()
            .unwrap_or_else(|| policy.policy_num.clone());
        pending.push(PendingItem {
            kind: "Policy",
            key: format!("{} / {}", policy.policy_num, policy.pol_mod),
            title,
            url: format!("/policy/pk_number={pk}"),
            stage: policy.stage.unwrap_or_default(),
        });
    }

    Ok(IndexPageData { pending })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::SacAccount;
    use crate::domain::policy::Policy;
    use crate::domain::program::AffinityProgram;
    use crate::domain::reference::AffinityAgent;
    use crate::domain::types::{CustomerNum, PolicyMod, PolicyNumber, ProgramName};
    use crate::repository::errors::RepositoryResult;

    struct MockRepo;

    impl ProgramReader for MockRepo {
        fn get_program(&self, _name: &ProgramName) -> RepositoryResult<Option<AffinityProgram>> {
            Ok(None)
        }

        fn list_programs(&self) -> RepositoryResult<Vec<AffinityProgram>> {
            Ok(vec![])
        }

        fn list_programs_with_agents(
            &self,
        ) -> RepositoryResult<Vec<(AffinityAgent, AffinityProgram)>> {
            Ok(vec![])
        }

        fn list_submitted_programs(&self) -> RepositoryResult<Vec<AffinityProgram>> {
            Ok(vec![AffinityProgram {
                program_name: "Summit Fleet Program".to_string(),
                stage: Some("Underwriter".to_string()),
                is_submitted: 1,
                ..AffinityProgram::default()
            }])
        }
    }

    impl AccountReader for MockRepo {
        fn get_account(&self, _num: &CustomerNum) -> RepositoryResult<Option<SacAccount>> {
            Ok(None)
        }

        fn search_accounts(&self, _term: &str) -> RepositoryResult<Vec<SacAccount>> {
            Ok(vec![])
        }

        fn list_submitted_accounts(&self) -> RepositoryResult<Vec<SacAccount>> {
            Ok(vec![SacAccount {
                customer_num: "C104233".to_string(),
                customer_name: "Granite Mutual Holdings".to_string(),
                stage: Some("Admin".to_string()),
                is_submitted: 1,
                ..SacAccount::default()
            }])
        }
    }

    impl PolicyReader for MockRepo {
        fn get_policy_by_pk(&self, _pk: i32) -> RepositoryResult<Option<Policy>> {
            Ok(None)
        }

        fn get_policy_by_key(
            &self,
            _num: &PolicyNumber,
            _mod: &PolicyMod,
        ) -> RepositoryResult<Option<Policy>> {
            Ok(None)
        }

        fn list_policies_by_customer(
            &self,
            _num: &CustomerNum,
        ) -> RepositoryResult<Vec<Policy>> {
            Ok(vec![])
        }

        fn list_submitted_policies(&self) -> RepositoryResult<Vec<Policy>> {
            Ok(vec![Policy {
                pk_number: Some(7),
                policy_num: "HN5501".to_string(),
                pol_mod: "01".to_string(),
                account_name: Some("Granite Mutual Holdings".to_string()),
                stage: Some("Underwriter".to_string()),
                is_submitted: 1,
                ..Policy::default()
            }])
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

    #[test]
    fn queue_collects_all_entity_types() {
        let page = load_index_page(&MockRepo, &admin()).unwrap();
        assert_eq!(page.pending.len(), 3);

        let kinds: Vec<&str> = page.pending.iter().map(|item| item.kind).collect();
        assert_eq!(kinds, vec!["Affinity Program", "Special Account", "Policy"]);

        let policy = &page.pending[2];
        assert_eq!(policy.url, "/policy/pk_number=7");
        assert_eq!(policy.key, "HN5501 / 01");
    }
}
