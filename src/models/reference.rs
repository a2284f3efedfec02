use diesel::prelude::*;

use crate::domain::reference as domain;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::staff)]
pub struct StaffContact {
    pub id: i32,
    pub lan_id: Option<String>,
    pub name: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::loss_control_reps)]
pub struct LossControlRep {
    pub id: i32,
    pub rep_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: String,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::branches)]
pub struct Branch {
    pub id: i32,
    pub branch_num: Option<String>,
    pub branch_name: String,
    pub reporting_branch: Option<String>,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::service_levels)]
pub struct ServiceLevel {
    pub id: i32,
    pub name: String,
    pub dollar_threshold: Option<String>,
    pub sort_num: i32,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::dropdown_options)]
pub struct DropdownOption {
    pub id: i32,
    pub dd_type: String,
    pub dd_value: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::affinity_agents)]
pub struct AffinityAgent {
    pub id: i32,
    pub program_name: String,
    pub agent_code: Option<String>,
    pub agent_name: Option<String>,
    pub agent_seg: Option<String>,
}

impl From<StaffContact> for domain::StaffContact {
    fn from(record: StaffContact) -> Self {
        Self {
            id: record.id,
            lan_id: record.lan_id,
            name: record.name,
            title: record.title,
            email: record.email,
            phone: record.phone,
        }
    }
}

impl From<LossControlRep> for domain::LossControlRep {
    fn from(record: LossControlRep) -> Self {
        Self {
            id: record.id,
            rep_name: record.rep_name,
            email: record.email,
            phone: record.phone,
            active: record.active,
        }
    }
}

impl From<Branch> for domain::Branch {
    fn from(record: Branch) -> Self {
        Self {
            id: record.id,
            branch_num: record.branch_num,
            branch_name: record.branch_name,
            reporting_branch: record.reporting_branch,
        }
    }
}

impl From<ServiceLevel> for domain::ServiceLevel {
    fn from(record: ServiceLevel) -> Self {
        Self {
            id: record.id,
            name: record.name,
            dollar_threshold: record.dollar_threshold,
            sort_num: record.sort_num,
        }
    }
}

impl From<DropdownOption> for domain::DropdownOption {
    fn from(record: DropdownOption) -> Self {
        Self {
            id: record.id,
            dd_type: record.dd_type,
            dd_value: record.dd_value,
            label: record.label,
        }
    }
}

impl From<AffinityAgent> for domain::AffinityAgent {
    fn from(record: AffinityAgent) -> Self {
        Self {
            id: record.id,
            program_name: record.program_name,
            agent_code: record.agent_code,
            agent_name: record.agent_name,
            agent_seg: record.agent_seg,
        }
    }
}
