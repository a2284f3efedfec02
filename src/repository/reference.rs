use diesel::prelude::*;

use crate::domain::reference::{
    Branch, DropdownOption, LossControlRep, ServiceLevel, StaffContact,
};
use crate::repository::{DieselRepository, ReferenceReader, errors::RepositoryResult};

impl ReferenceReader for DieselRepository {
    fn list_staff(&self) -> RepositoryResult<Vec<StaffContact>> {
        use crate::models::reference::StaffContact as DbStaff;
        use crate::schema::staff;

        let mut conn = self.conn()?;
        let records = staff::table
            .order(staff::name.asc())
            .load::<DbStaff>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(records)
    }

    fn find_staff_by_name(&self, name: &str) -> RepositoryResult<Option<StaffContact>> {
        use crate::models::reference::StaffContact as DbStaff;
        use crate::schema::staff;

        let mut conn = self.conn()?;
        let record = staff::table
            .filter(staff::name.eq(name))
            .first::<DbStaff>(&mut conn)
            .optional()?;

        Ok(record.map(Into::into))
    }

    fn list_loss_control_reps(&self, active_only: bool) -> RepositoryResult<Vec<LossControlRep>> {
        use crate::models::reference::LossControlRep as DbRep;
        use crate::schema::loss_control_reps;

        let mut conn = self.conn()?;
        let mut query = loss_control_reps::table
            .order(loss_control_reps::rep_name.asc())
            .into_boxed();
        if active_only {
            query = query.filter(loss_control_reps::active.eq("Yes"));
        }

        let records = query
            .load::<DbRep>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(records)
    }

    fn find_rep_by_name(&self, name: &str) -> RepositoryResult<Option<LossControlRep>> {
        use crate::models::reference::LossControlRep as DbRep;
        use crate::schema::loss_control_reps;

        let mut conn = self.conn()?;
        let record = loss_control_reps::table
            .filter(loss_control_reps::rep_name.eq(name))
            .first::<DbRep>(&mut conn)
            .optional()?;

        Ok(record.map(Into::into))
    }

    fn list_branches(&self) -> RepositoryResult<Vec<Branch>> {
        use crate::models::reference::Branch as DbBranch;
        use crate::schema::branches;

        let mut conn = self.conn()?;
        let records = branches::table
            .order(branches::branch_name.asc())
            .load::<DbBranch>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(records)
    }

    fn list_service_levels(&self) -> RepositoryResult<Vec<ServiceLevel>> {
        use crate::models::reference::ServiceLevel as DbServiceLevel;
        use crate::schema::service_levels;

        let mut conn = self.conn()?;
        let records = service_levels::table
            .order(service_levels::sort_num.asc())
            .load::<DbServiceLevel>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(records)
    }

    fn list_dropdown_options(&self, dd_type: &str) -> RepositoryResult<Vec<DropdownOption>> {
        use crate::models::reference::DropdownOption as DbOption;
        use crate::schema::dropdown_options;

        let mut conn = self.conn()?;
        let records = dropdown_options::table
            .filter(dropdown_options::dd_type.eq(dd_type))
            .order(dropdown_options::dd_value.asc())
            .load::<DbOption>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(records)
    }
}
