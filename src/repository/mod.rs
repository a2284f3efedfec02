use crate::db::{DbConnection, DbPool};
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

pub mod account;
pub mod distribution;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod policy;
pub mod policy_type;
pub mod program;
pub mod reference;
pub mod schedule;

/// Diesel-backed implementation of every repository trait, shared across
/// handlers as application data.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, errors::RepositoryError> {
        Ok(self.pool.get()?)
    }
}

pub trait ProgramReader {
    fn get_program(&self, name: &ProgramName) -> RepositoryResult<Option<AffinityProgram>>;
    /// All programs ordered by name, for the search view.
    fn list_programs(&self) -> RepositoryResult<Vec<AffinityProgram>>;
    /// Programs joined with their appointed agents, producer-code search.
    fn list_programs_with_agents(&self)
    -> RepositoryResult<Vec<(AffinityAgent, AffinityProgram)>>;
    /// Programs sitting in the pending-review queue.
    fn list_submitted_programs(&self) -> RepositoryResult<Vec<AffinityProgram>>;
}

pub trait ProgramWriter {
    /// Insert-or-update keyed on the program name.
    fn upsert_program(&self, program: &AffinityProgram) -> RepositoryResult<()>;
}

pub trait AccountReader {
    fn get_account(&self, customer_num: &CustomerNum) -> RepositoryResult<Option<SacAccount>>;
    /// Case-insensitive match on customer name or number, for the search view.
    fn search_accounts(&self, term: &str) -> RepositoryResult<Vec<SacAccount>>;
    fn list_submitted_accounts(&self) -> RepositoryResult<Vec<SacAccount>>;
}

pub trait AccountWriter {
    /// Insert-or-update keyed on the customer number.
    fn upsert_account(&self, account: &SacAccount) -> RepositoryResult<()>;
}

pub trait PolicyReader {
    fn get_policy_by_pk(&self, pk_number: i32) -> RepositoryResult<Option<Policy>>;
    fn get_policy_by_key(
        &self,
        policy_num: &PolicyNumber,
        pol_mod: &PolicyMod,
    ) -> RepositoryResult<Option<Policy>>;
    fn list_policies_by_customer(&self, customer_num: &CustomerNum)
    -> RepositoryResult<Vec<Policy>>;
    fn list_submitted_policies(&self) -> RepositoryResult<Vec<Policy>>;
}

pub trait PolicyWriter {
    /// Updates by surrogate key when present, inserts otherwise.
    /// Returns the surrogate key of the persisted row.
    fn upsert_policy(&self, policy: &Policy) -> RepositoryResult<i32>;
}

pub trait PolicyTypeReader {
    fn get_policy_type_by_pk(&self, pk_number: i32) -> RepositoryResult<Option<PolicyType>>;
    fn get_policy_type_by_key(
        &self,
        program_name: &ProgramName,
        policy_type: &str,
    ) -> RepositoryResult<Option<PolicyType>>;
    fn list_policy_types(&self, program_name: &ProgramName) -> RepositoryResult<Vec<PolicyType>>;
}

pub trait PolicyTypeWriter {
    /// Updates by surrogate key when present, inserts otherwise.
    /// Returns the surrogate key of the persisted row.
    fn upsert_policy_type(&self, record: &PolicyType) -> RepositoryResult<i32>;
}

pub trait ScheduleReader {
    fn list_schedule(&self, owner: &str, kind: ScheduleKind) -> RepositoryResult<Vec<ScheduleRow>>;
}

pub trait ScheduleWriter {
    /// Upserts the given rows under `(owner, kind, month)`. Returns the
    /// number of rows written.
    fn replace_schedule(
        &self,
        owner: &str,
        kind: ScheduleKind,
        rows: &[ScheduleRow],
    ) -> RepositoryResult<usize>;
}

pub trait DistributionReader {
    fn list_distribution(
        &self,
        owner: &str,
        list: DistributionList,
    ) -> RepositoryResult<Vec<DistributionEntry>>;
}

pub trait DistributionWriter {
    /// Removes the entry addressed to the given attention-to name.
    fn delete_distribution_entry(
        &self,
        owner: &str,
        list: DistributionList,
        attn_to: &str,
    ) -> RepositoryResult<usize>;
    /// Insert-or-update keyed on `(owner, list, attn_to)`.
    fn upsert_distribution_entry(&self, entry: &DistributionEntry) -> RepositoryResult<()>;
}

pub trait ReferenceReader {
    fn list_staff(&self) -> RepositoryResult<Vec<StaffContact>>;
    fn find_staff_by_name(&self, name: &str) -> RepositoryResult<Option<StaffContact>>;
    fn list_loss_control_reps(&self, active_only: bool) -> RepositoryResult<Vec<LossControlRep>>;
    fn find_rep_by_name(&self, name: &str) -> RepositoryResult<Option<LossControlRep>>;
    fn list_branches(&self) -> RepositoryResult<Vec<Branch>>;
    fn list_service_levels(&self) -> RepositoryResult<Vec<ServiceLevel>>;
    fn list_dropdown_options(&self, dd_type: &str) -> RepositoryResult<Vec<DropdownOption>>;
}
