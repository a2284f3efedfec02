use diesel::prelude::*;

use crate::domain::policy_type::PolicyType;
use crate::domain::types::ProgramName;
use crate::repository::{
    DieselRepository, PolicyTypeReader, PolicyTypeWriter, errors::RepositoryResult,
};

impl PolicyTypeReader for DieselRepository {
    fn get_policy_type_by_pk(&self, pk_number: i32) -> RepositoryResult<Option<PolicyType>> {
        use crate::models::policy_type::PolicyType as DbPolicyType;
        use crate::schema::policy_types;

        let mut conn = self.conn()?;
        let record = policy_types::table
            .find(pk_number)
            .first::<DbPolicyType>(&mut conn)
            .optional()?;

        Ok(record.map(Into::into))
    }

    fn get_policy_type_by_key(
        &self,
        program_name: &ProgramName,
        policy_type: &str,
    ) -> RepositoryResult<Option<PolicyType>> {
        use crate::models::policy_type::PolicyType as DbPolicyType;
        use crate::schema::policy_types;

        let mut conn = self.conn()?;
        let record = policy_types::table
            .filter(policy_types::program_name.eq(program_name.as_str()))
            .filter(policy_types::policy_type.eq(policy_type))
            .first::<DbPolicyType>(&mut conn)
            .optional()?;

        Ok(record.map(Into::into))
    }

    fn list_policy_types(&self, program_name: &ProgramName) -> RepositoryResult<Vec<PolicyType>> {
        use crate::models::policy_type::PolicyType as DbPolicyType;
        use crate::schema::policy_types;

        let mut conn = self.conn()?;
        let records = policy_types::table
            .filter(policy_types::program_name.eq(program_name.as_str()))
            .order(policy_types::policy_type.asc())
            .load::<DbPolicyType>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(records)
    }
}

impl PolicyTypeWriter for DieselRepository {
    fn upsert_policy_type(&self, record: &PolicyType) -> RepositoryResult<i32> {
        use crate::models::policy_type::PolicyTypeChanges;
        use crate::schema::policy_types;

        let mut conn = self.conn()?;
        let changes: PolicyTypeChanges = record.into();

        match record.pk_number {
            Some(pk) => {
                let affected = diesel::update(policy_types::table.find(pk))
                    .set(&changes)
                    .execute(&mut conn)?;
                if affected == 0 {
                    return Err(crate::repository::errors::RepositoryError::NotFound);
                }
                Ok(pk)
            }
            None => {
                let pk = diesel::insert_into(policy_types::table)
                    .values(&changes)
                    .returning(policy_types::pk_number)
                    .get_result::<i32>(&mut conn)?;
                Ok(pk)
            }
        }
    }
}
