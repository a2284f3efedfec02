use diesel::prelude::*;

use crate::domain::account::SacAccount;
use crate::domain::types::CustomerNum;
use crate::repository::{
    AccountReader, AccountWriter, DieselRepository, errors::RepositoryResult,
};

impl AccountReader for DieselRepository {
    fn get_account(&self, customer_num: &CustomerNum) -> RepositoryResult<Option<SacAccount>> {
        use crate::models::account::SacAccount as DbAccount;
        use crate::schema::sac_accounts;

        let mut conn = self.conn()?;
        let account = sac_accounts::table
            .find(customer_num.as_str())
            .first::<DbAccount>(&mut conn)
            .optional()?;

        Ok(account.map(Into::into))
    }

    fn search_accounts(&self, term: &str) -> RepositoryResult<Vec<SacAccount>> {
        use crate::models::account::SacAccount as DbAccount;
        use crate::schema::sac_accounts;

        let mut conn = self.conn()?;
        let pattern = format!("%{term}%");
        let accounts = sac_accounts::table
            .filter(
                sac_accounts::customer_name
                    .like(&pattern)
                    .or(sac_accounts::customer_num.like(&pattern)),
            )
            .order(sac_accounts::customer_name.asc())
            .load::<DbAccount>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(accounts)
    }

    fn list_submitted_accounts(&self) -> RepositoryResult<Vec<SacAccount>> {
        use crate::models::account::SacAccount as DbAccount;
        use crate::schema::sac_accounts;

        let mut conn = self.conn()?;
        let accounts = sac_accounts::table
            .filter(sac_accounts::is_submitted.eq(1))
            .order(sac_accounts::customer_name.asc())
            .load::<DbAccount>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(accounts)
    }
}

impl AccountWriter for DieselRepository {
    fn upsert_account(&self, account: &SacAccount) -> RepositoryResult<()> {
        use crate::models::account::SacAccount as DbAccount;
        use crate::schema::sac_accounts;

        let mut conn = self.conn()?;
        let record: DbAccount = account.into();

        diesel::insert_into(sac_accounts::table)
            .values(&record)
            .on_conflict(sac_accounts::customer_num)
            .do_update()
            .set(&record)
            .execute(&mut conn)?;

        Ok(())
    }
}
