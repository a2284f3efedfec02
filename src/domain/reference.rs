//! Reference lists backing the dropdowns on the edit screens.

use serde::{Deserialize, Serialize};

/// Staff directory entry (account owners and SAC contacts).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffContact {
    pub id: i32,
    pub lan_id: Option<String>,
    pub name: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Loss-control representative roster entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LossControlRep {
    pub id: i32,
    pub rep_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: String,
}

/// Branch office.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i32,
    pub branch_num: Option<String>,
    pub branch_name: String,
    pub reporting_branch: Option<String>,
}

/// Service-level tier with its premium threshold label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceLevel {
    pub id: i32,
    pub name: String,
    pub dollar_threshold: Option<String>,
    pub sort_num: i32,
}

/// Producing agent appointed to an affinity program.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AffinityAgent {
    pub id: i32,
    pub program_name: String,
    pub agent_code: Option<String>,
    pub agent_name: Option<String>,
    pub agent_seg: Option<String>,
}

/// Generic dropdown option keyed by its `dd_type` group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub id: i32,
    pub dd_type: String,
    pub dd_value: String,
    pub label: Option<String>,
}
