//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::account::SacAccount;
use crate::domain::distribution::{DistributionEntry, DistributionList};
use crate::domain::policy::Policy;
use crate::domain::policy_type::PolicyType;
use crate::domain::program::AffinityProgram;
use crate::domain::reference::{
    AffinityAgent, Branch, DropdownOption, LossControlRep, ServiceLevel, StaffContact,
};
use crate::domain::schedule::{ScheduleKind, ScheduleRow};
use crate::domain::types::{CustomerNum, PolicyMod, PolicyNumber, ProgramName};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AccountReader, AccountWriter, DistributionReader, DistributionWriter, PolicyReader,
    PolicyTypeReader, PolicyTypeWriter, PolicyWriter, ProgramReader, ProgramWriter,
    ReferenceReader, ScheduleReader, ScheduleWriter,
};

mock! {
    pub Repository {}

    impl ProgramReader for Repository {
        fn get_program(&self, name: &ProgramName) -> RepositoryResult<Option<AffinityProgram>>;
        fn list_programs(&self) -> RepositoryResult<Vec<AffinityProgram>>;
        fn list_programs_with_agents(
            &self,
        ) -> RepositoryResult<Vec<(AffinityAgent, AffinityProgram)>>;
        fn list_submitted_programs(&self) -> RepositoryResult<Vec<AffinityProgram>>;
    }

    impl ProgramWriter for Repository {
        fn upsert_program(&self, program: &AffinityProgram) -> RepositoryResult<()>;
    }

    impl AccountReader for Repository {
        fn get_account(&self, customer_num: &CustomerNum) -> RepositoryResult<Option<SacAccount>>;
        fn search_accounts(&self, term: &str) -> RepositoryResult<Vec<SacAccount>>;
        fn list_submitted_accounts(&self) -> RepositoryResult<Vec<SacAccount>>;
    }

    impl AccountWriter for Repository {
        fn upsert_account(&self, account: &SacAccount) -> RepositoryResult<()>;
    }

    impl PolicyReader for Repository {
        fn get_policy_by_pk(&self, pk_number: i32) -> RepositoryResult<Option<Policy>>;
        fn get_policy_by_key(
            &self,
            policy_num: &PolicyNumber,
            pol_mod: &PolicyMod,
        ) -> RepositoryResult<Option<Policy>>;
        fn list_policies_by_customer(
            &self,
            customer_num: &CustomerNum,
        ) -> RepositoryResult<Vec<Policy>>;
        fn list_submitted_policies(&self) -> RepositoryResult<Vec<Policy>>;
    }

    impl PolicyWriter for Repository {
        fn upsert_policy(&self, policy: &Policy) -> RepositoryResult<i32>;
    }

    impl PolicyTypeReader for Repository {
        fn get_policy_type_by_pk(&self, pk_number: i32) -> RepositoryResult<Option<PolicyType>>;
        fn get_policy_type_by_key(
            &self,
            program_name: &ProgramName,
            policy_type: &str,
        ) -> RepositoryResult<Option<PolicyType>>;
        fn list_policy_types(
            &self,
            program_name: &ProgramName,
        ) -> RepositoryResult<Vec<PolicyType>>;
    }

    impl PolicyTypeWriter for Repository {
        fn upsert_policy_type(&self, record: &PolicyType) -> RepositoryResult<i32>;
    }

    impl ScheduleReader for Repository {
        fn list_schedule(
            &self,
            owner: &str,
            kind: ScheduleKind,
        ) -> RepositoryResult<Vec<ScheduleRow>>;
    }

    impl ScheduleWriter for Repository {
        fn replace_schedule(
            &self,
            owner: &str,
            kind: ScheduleKind,
            rows: &[ScheduleRow],
        ) -> RepositoryResult<usize>;
    }

    impl DistributionReader for Repository {
        fn list_distribution(
            &self,
            owner: &str,
            list: DistributionList,
        ) -> RepositoryResult<Vec<DistributionEntry>>;
    }

    impl DistributionWriter for Repository {
        fn delete_distribution_entry(
            &self,
            owner: &str,
            list: DistributionList,
            attn_to: &str,
        ) -> RepositoryResult<usize>;
        fn upsert_distribution_entry(&self, entry: &DistributionEntry) -> RepositoryResult<()>;
    }

    impl ReferenceReader for Repository {
        fn list_staff(&self) -> RepositoryResult<Vec<StaffContact>>;
        fn find_staff_by_name(&self, name: &str) -> RepositoryResult<Option<StaffContact>>;
        fn list_loss_control_reps(
            &self,
            active_only: bool,
        ) -> RepositoryResult<Vec<LossControlRep>>;
        fn find_rep_by_name(&self, name: &str) -> RepositoryResult<Option<LossControlRep>>;
        fn list_branches(&self) -> RepositoryResult<Vec<Branch>>;
        fn list_service_levels(&self) -> RepositoryResult<Vec<ServiceLevel>>;
        fn list_dropdown_options(&self, dd_type: &str) -> RepositoryResult<Vec<DropdownOption>>;
    }
}
