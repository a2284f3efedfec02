use diesel::prelude::*;

use crate::domain::schedule::{ScheduleKind, ScheduleRow};
use crate::repository::{
    DieselRepository, ScheduleReader, ScheduleWriter, errors::RepositoryResult,
};

impl ScheduleReader for DieselRepository {
    fn list_schedule(&self, owner: &str, kind: ScheduleKind) -> RepositoryResult<Vec<ScheduleRow>> {
        use crate::models::schedule::ScheduleMonth;
        use crate::schema::schedule_months;

        let mut conn = self.conn()?;
        let records = schedule_months::table
            .filter(schedule_months::owner.eq(owner))
            .filter(schedule_months::kind.eq(kind.as_str()))
            .order(schedule_months::month_num.asc())
            .load::<ScheduleMonth>(&mut conn)?;

        records
            .into_iter()
            .map(|record| ScheduleRow::try_from(record).map_err(Into::into))
            .collect()
    }
}

impl ScheduleWriter for DieselRepository {
    fn replace_schedule(
        &self,
        owner: &str,
        kind: ScheduleKind,
        rows: &[ScheduleRow],
    ) -> RepositoryResult<usize> {
        use crate::models::schedule::NewScheduleMonth;
        use crate::schema::schedule_months;

        let mut conn = self.conn()?;
        let mut written = 0;

        for row in rows {
            debug_assert_eq!(row.kind, kind);
            debug_assert_eq!(row.owner, owner);

            let record: NewScheduleMonth = row.into();
            written += diesel::insert_into(schedule_months::table)
                .values(&record)
                .on_conflict((
                    schedule_months::owner,
                    schedule_months::kind,
                    schedule_months::month_num,
                ))
                .do_update()
                .set(&record)
                .execute(&mut conn)?;
        }

        Ok(written)
    }
}
