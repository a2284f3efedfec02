use diesel::prelude::*;

use crate::domain::distribution::{DistributionEntry, DistributionList};
use crate::repository::{
    DieselRepository, DistributionReader, DistributionWriter, errors::RepositoryResult,
};

impl DistributionReader for DieselRepository {
    fn list_distribution(
        &self,
        owner: &str,
        list: DistributionList,
    ) -> RepositoryResult<Vec<DistributionEntry>> {
        use crate::models::distribution::DistributionEntry as DbEntry;
        use crate::schema::distribution_entries;

        let mut conn = self.conn()?;
        let records = distribution_entries::table
            .filter(distribution_entries::owner.eq(owner))
            .filter(distribution_entries::kind.eq(list.as_str()))
            .order(distribution_entries::attn_to.asc())
            .load::<DbEntry>(&mut conn)?;

        records
            .into_iter()
            .map(|record| DistributionEntry::try_from(record).map_err(Into::into))
            .collect()
    }
}

impl DistributionWriter for DieselRepository {
    fn delete_distribution_entry(
        &self,
        owner: &str,
        list: DistributionList,
        attn_to: &str,
    ) -> RepositoryResult<usize> {
        use crate::schema::distribution_entries;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            distribution_entries::table
                .filter(distribution_entries::owner.eq(owner))
                .filter(distribution_entries::kind.eq(list.as_str()))
                .filter(distribution_entries::attn_to.eq(attn_to)),
        )
        .execute(&mut conn)?;

        Ok(deleted)
    }

    fn upsert_distribution_entry(&self, entry: &DistributionEntry) -> RepositoryResult<()> {
        use crate::models::distribution::NewDistributionEntry;
        use crate::schema::distribution_entries;

        let mut conn = self.conn()?;
        let record: NewDistributionEntry = entry.into();

        diesel::insert_into(distribution_entries::table)
            .values(&record)
            .on_conflict((
                distribution_entries::owner,
                distribution_entries::kind,
                distribution_entries::attn_to,
            ))
            .do_update()
            .set(&record)
            .execute(&mut conn)?;

        Ok(())
    }
}
