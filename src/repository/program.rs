use diesel::prelude::*;

use crate::domain::program::AffinityProgram;
use crate::domain::reference::AffinityAgent;
use crate::domain::types::ProgramName;
use crate::repository::{
    DieselRepository, ProgramReader, ProgramWriter, errors::RepositoryResult,
};

impl ProgramReader for DieselRepository {
    fn get_program(&self, name: &ProgramName) -> RepositoryResult<Option<AffinityProgram>> {
        use crate::models::program::AffinityProgram as DbProgram;
        use crate::schema::affinity_programs;

        let mut conn = self.conn()?;
        let program = affinity_programs::table
            .find(name.as_str())
            .first::<DbProgram>(&mut conn)
            .optional()?;

        Ok(program.map(Into::into))
    }

    fn list_programs(&self) -> RepositoryResult<Vec<AffinityProgram>> {
        use crate::models::program::AffinityProgram as DbProgram;
        use crate::schema::affinity_programs;

        let mut conn = self.conn()?;
        let programs = affinity_programs::table
            .order(affinity_programs::program_name.asc())
            .load::<DbProgram>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(programs)
    }

    fn list_programs_with_agents(
        &self,
    ) -> RepositoryResult<Vec<(AffinityAgent, AffinityProgram)>> {
        use crate::models::program::AffinityProgram as DbProgram;
        use crate::models::reference::AffinityAgent as DbAgent;
        use crate::schema::{affinity_agents, affinity_programs};

        let mut conn = self.conn()?;
        let rows = affinity_agents::table
            .inner_join(affinity_programs::table)
            .filter(affinity_agents::agent_code.is_not_null())
            .order(affinity_programs::program_name.asc())
            .load::<(DbAgent, DbProgram)>(&mut conn)?
            .into_iter()
            .map(|(agent, program)| (agent.into(), program.into()))
            .collect();

        Ok(rows)
    }

    fn list_submitted_programs(&self) -> RepositoryResult<Vec<AffinityProgram>> {
        use crate::models::program::AffinityProgram as DbProgram;
        use crate::schema::affinity_programs;

        let mut conn = self.conn()?;
        let programs = affinity_programs::table
            .filter(affinity_programs::is_submitted.eq(1))
            .order(affinity_programs::program_name.asc())
            .load::<DbProgram>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(programs)
    }
}

impl ProgramWriter for DieselRepository {
    fn upsert_program(&self, program: &AffinityProgram) -> RepositoryResult<()> {
        use crate::models::program::AffinityProgram as DbProgram;
        use crate::schema::affinity_programs;

        let mut conn = self.conn()?;
        let record: DbProgram = program.into();

        diesel::insert_into(affinity_programs::table)
            .values(&record)
            .on_conflict(affinity_programs::program_name)
            .do_update()
            .set(&record)
            .execute(&mut conn)?;

        Ok(())
    }
}
