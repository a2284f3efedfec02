use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::schedule::{MonthSlot, ScheduleKind, ScheduleRow};
use crate::domain::types::{MonthNumber, TypeConstraintError};

/// Diesel row model for one month of one schedule.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::schedule_months)]
pub struct ScheduleMonth {
    pub id: i32,
    pub owner: String,
    pub kind: String,
    pub month_num: i32,
    pub scheduled: bool,
    pub completed_date: Option<NaiveDate>,
    pub report_type: Option<String>,
    pub delivery_method: Option<String>,
    pub narrative_count: Option<i32>,
    pub no_claims: bool,
    pub ad_hoc: bool,
}

/// Insertable form of [`ScheduleMonth`], also used for the per-month upsert.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::schedule_months)]
#[diesel(treat_none_as_null = true)]
pub struct NewScheduleMonth {
    pub owner: String,
    pub kind: String,
    pub month_num: i32,
    pub scheduled: bool,
    pub completed_date: Option<NaiveDate>,
    pub report_type: Option<String>,
    pub delivery_method: Option<String>,
    pub narrative_count: Option<i32>,
    pub no_claims: bool,
    pub ad_hoc: bool,
}

impl TryFrom<ScheduleMonth> for ScheduleRow {
    type Error = TypeConstraintError;

    /// Stored rows with a month outside 1..=12 or an unknown kind are a
    /// data-integrity violation and fail the conversion; they are never used
    /// as a slot index.
    fn try_from(record: ScheduleMonth) -> Result<Self, Self::Error> {
        let kind: ScheduleKind = record.kind.parse()?;
        let month = MonthNumber::new(record.month_num)?;
        Ok(ScheduleRow {
            owner: record.owner,
            kind,
            month,
            slot: MonthSlot {
                scheduled: record.scheduled,
                last_send_date: record.completed_date,
                report_type: record.report_type,
                delivery_method: record.delivery_method,
                narrative_count: record.narrative_count,
                no_claims: record.no_claims,
                ad_hoc: record.ad_hoc,
            },
        })
    }
}

impl From<&ScheduleRow> for NewScheduleMonth {
    fn from(row: &ScheduleRow) -> Self {
        Self {
            owner: row.owner.clone(),
            kind: row.kind.as_str().to_string(),
            month_num: row.month.get(),
            scheduled: row.slot.scheduled,
            completed_date: row.slot.last_send_date,
            report_type: row.slot.report_type.clone(),
            delivery_method: row.slot.delivery_method.clone(),
            narrative_count: row.slot.narrative_count,
            no_claims: row.slot.no_claims,
            ad_hoc: row.slot.ad_hoc,
        }
    }
}
