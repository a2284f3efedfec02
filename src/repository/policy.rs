use diesel::prelude::*;

use crate::domain::policy::Policy;
use crate::domain::types::{CustomerNum, PolicyMod, PolicyNumber};
use crate::repository::{DieselRepository, PolicyReader, PolicyWriter, errors::RepositoryResult};

impl PolicyReader for DieselRepository {
    fn get_policy_by_pk(&self, pk_number: i32) -> RepositoryResult<Option<Policy>> {
        use crate::models::policy::Policy as DbPolicy;
        use crate::schema::policies;

        let mut conn = self.conn()?;
        let policy = policies::table
            .find(pk_number)
            .first::<DbPolicy>(&mut conn)
            .optional()?;

        Ok(policy.map(Into::into))
    }

    fn get_policy_by_key(
        &self,
        policy_num: &PolicyNumber,
        pol_mod: &PolicyMod,
    ) -> RepositoryResult<Option<Policy>> {
        use crate::models::policy::Policy as DbPolicy;
        use crate::schema::policies;

        let mut conn = self.conn()?;
        let policy = policies::table
            .filter(policies::policy_num.eq(policy_num.as_str()))
            .filter(policies::pol_mod.eq(pol_mod.as_str()))
            .first::<DbPolicy>(&mut conn)
            .optional()?;

        Ok(policy.map(Into::into))
    }

    fn list_policies_by_customer(
        &self,
        customer_num: &CustomerNum,
    ) -> RepositoryResult<Vec<Policy>> {
        use crate::models::policy::Policy as DbPolicy;
        use crate::schema::policies;

        let mut conn = self.conn()?;
        let policies = policies::table
            .filter(policies::customer_num.eq(customer_num.as_str()))
            .order((policies::policy_num.asc(), policies::pol_mod.desc()))
            .load::<DbPolicy>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(policies)
    }

    fn list_submitted_policies(&self) -> RepositoryResult<Vec<Policy>> {
        use crate::models::policy::Policy as DbPolicy;
        use crate::schema::policies;

        let mut conn = self.conn()?;
        let policies = policies::table
            .filter(policies::is_submitted.eq(1))
            .order((policies::policy_num.asc(), policies::pol_mod.desc()))
            .load::<DbPolicy>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(policies)
    }
}

impl PolicyWriter for DieselRepository {
    fn upsert_policy(&self, policy: &Policy) -> RepositoryResult<i32> {
        use crate::models::policy::PolicyChanges;
        use crate::schema::policies;

        let mut conn = self.conn()?;
        let changes: PolicyChanges = policy.into();

        match policy.pk_number {
            Some(pk) => {
                let affected = diesel::update(policies::table.find(pk))
                    .set(&changes)
                    .execute(&mut conn)?;
                if affected == 0 {
                    return Err(crate::repository::errors::RepositoryError::NotFound);
                }
                Ok(pk)
            }
            None => {
                let pk = diesel::insert_into(policies::table)
                    .values(&changes)
                    .returning(policies::pk_number)
                    .get_result::<i32>(&mut conn)?;
                Ok(pk)
            }
        }
    }
}
