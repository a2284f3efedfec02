//! Month-by-month report scheduling grids.
//!
//! Loss-run, claim-review and deductible-bill schedules are stored as up to
//! twelve child rows per parent record, one per calendar month. The edit
//! screens always show all twelve months, so loading expands the stored rows
//! into a fixed-size grid and saving flattens the grid back into rows tagged
//! with the parent natural key.
//!
//! Invariant: grid slot `i` always corresponds to calendar month `i + 1`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::domain::types::{MonthNumber, TypeConstraintError};

/// Number of slots in every schedule grid.
pub const MONTHS_PER_YEAR: usize = 12;

/// Which schedule a row belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleKind {
    LossRun,
    ClaimReview,
    DeductibleBill,
}

impl ScheduleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleKind::LossRun => "loss_run",
            ScheduleKind::ClaimReview => "claim_review",
            ScheduleKind::DeductibleBill => "deductible_bill",
        }
    }
}

impl Display for ScheduleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScheduleKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loss_run" => Ok(ScheduleKind::LossRun),
            "claim_review" => Ok(ScheduleKind::ClaimReview),
            "deductible_bill" => Ok(ScheduleKind::DeductibleBill),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// One month's scheduling state.
///
/// The claim-review extras (`report_type`, `delivery_method`,
/// `narrative_count`) and the loss-run extras (`no_claims`, `ad_hoc`) are
/// carried on every slot; kinds that do not use them leave the defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSlot {
    pub scheduled: bool,
    pub last_send_date: Option<NaiveDate>,
    pub report_type: Option<String>,
    pub delivery_method: Option<String>,
    pub narrative_count: Option<i32>,
    pub no_claims: bool,
    pub ad_hoc: bool,
}

impl MonthSlot {
    /// The "unscheduled" default shown for months with no stored row.
    pub fn unscheduled() -> Self {
        Self::default()
    }
}

/// A stored schedule row: one month of one schedule for one parent record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Natural key of the owning record (program name or customer number).
    pub owner: String,
    pub kind: ScheduleKind,
    pub month: MonthNumber,
    pub slot: MonthSlot,
}

/// Fixed twelve-slot grid bound to the edit screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    kind: ScheduleKind,
    slots: Vec<MonthSlot>,
}

impl ScheduleGrid {
    /// A grid with all twelve months unscheduled.
    pub fn empty(kind: ScheduleKind) -> Self {
        Self {
            kind,
            slots: vec![MonthSlot::unscheduled(); MONTHS_PER_YEAR],
        }
    }

    /// Expands stored rows into the grid.
    ///
    /// Months with no row keep their unscheduled defaults; a later duplicate
    /// for the same month overwrites the earlier one. Rows of a different
    /// schedule kind are rejected: they indicate a mis-filtered query.
    pub fn from_rows(kind: ScheduleKind, rows: &[ScheduleRow]) -> Result<Self, TypeConstraintError> {
        let mut grid = Self::empty(kind);
        for row in rows {
            if row.kind != kind {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "expected {kind} row, got {}",
                    row.kind
                )));
            }
            grid.slots[row.month.index()] = row.slot.clone();
        }
        Ok(grid)
    }

    pub fn kind(&self) -> ScheduleKind {
        self.kind
    }

    pub fn slots(&self) -> &[MonthSlot] {
        &self.slots
    }

    pub fn slot(&self, month: MonthNumber) -> &MonthSlot {
        &self.slots[month.index()]
    }

    pub fn slot_mut(&mut self, month: MonthNumber) -> &mut MonthSlot {
        &mut self.slots[month.index()]
    }

    /// Flattens the grid back into twelve rows tagged with the parent key.
    pub fn to_rows(&self, owner: &str) -> Vec<ScheduleRow> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                MonthNumber::from_index(index).ok().map(|month| ScheduleRow {
                    owner: owner.to_string(),
                    kind: self.kind,
                    month,
                    slot: slot.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slot(date: Option<NaiveDate>) -> MonthSlot {
        MonthSlot {
            scheduled: true,
            last_send_date: date,
            report_type: Some("Summary".to_string()),
            delivery_method: Some("Email".to_string()),
            narrative_count: Some(3),
            no_claims: false,
            ad_hoc: false,
        }
    }

    #[test]
    fn empty_grid_has_twelve_unscheduled_slots() {
        let grid = ScheduleGrid::empty(ScheduleKind::LossRun);
        assert_eq!(grid.slots().len(), MONTHS_PER_YEAR);
        assert!(grid.slots().iter().all(|s| !s.scheduled));
        assert!(grid.slots().iter().all(|s| s.last_send_date.is_none()));
    }

    #[test]
    fn rows_land_in_their_month_slot_only() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15);
        let rows = vec![
            ScheduleRow {
                owner: "C1001".to_string(),
                kind: ScheduleKind::ClaimReview,
                month: MonthNumber::new(6).unwrap(),
                slot: sample_slot(date),
            },
            ScheduleRow {
                owner: "C1001".to_string(),
                kind: ScheduleKind::ClaimReview,
                month: MonthNumber::new(12).unwrap(),
                slot: sample_slot(None),
            },
        ];

        let grid = ScheduleGrid::from_rows(ScheduleKind::ClaimReview, &rows).unwrap();

        assert!(grid.slot(MonthNumber::new(6).unwrap()).scheduled);
        assert_eq!(grid.slot(MonthNumber::new(6).unwrap()).last_send_date, date);
        assert!(grid.slot(MonthNumber::new(12).unwrap()).scheduled);
        for month in 1..=12 {
            if month == 6 || month == 12 {
                continue;
            }
            let slot = grid.slot(MonthNumber::new(month).unwrap());
            assert_eq!(*slot, MonthSlot::unscheduled(), "month {month}");
        }
    }

    #[test]
    fn mismatched_kind_is_rejected() {
        let rows = vec![ScheduleRow {
            owner: "C1001".to_string(),
            kind: ScheduleKind::LossRun,
            month: MonthNumber::new(1).unwrap(),
            slot: MonthSlot::unscheduled(),
        }];

        assert!(ScheduleGrid::from_rows(ScheduleKind::ClaimReview, &rows).is_err());
    }

    #[test]
    fn grid_round_trips_through_rows() {
        let mut grid = ScheduleGrid::empty(ScheduleKind::LossRun);
        grid.slot_mut(MonthNumber::new(3).unwrap()).scheduled = true;
        grid.slot_mut(MonthNumber::new(3).unwrap()).no_claims = true;
        grid.slot_mut(MonthNumber::new(9).unwrap()).scheduled = true;
        grid.slot_mut(MonthNumber::new(9).unwrap()).last_send_date =
            NaiveDate::from_ymd_opt(2025, 9, 30);

        let rows = grid.to_rows("Summit Fleet Program");
        assert_eq!(rows.len(), MONTHS_PER_YEAR);
        assert!(rows.iter().all(|r| r.owner == "Summit Fleet Program"));
        assert_eq!(rows[2].month.get(), 3);

        let rebuilt = ScheduleGrid::from_rows(ScheduleKind::LossRun, &rows).unwrap();
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn later_duplicate_month_wins() {
        let month = MonthNumber::new(5).unwrap();
        let rows = vec![
            ScheduleRow {
                owner: "C1".to_string(),
                kind: ScheduleKind::DeductibleBill,
                month,
                slot: MonthSlot {
                    scheduled: true,
                    ..MonthSlot::unscheduled()
                },
            },
            ScheduleRow {
                owner: "C1".to_string(),
                kind: ScheduleKind::DeductibleBill,
                month,
                slot: MonthSlot::unscheduled(),
            },
        ];

        let grid = ScheduleGrid::from_rows(ScheduleKind::DeductibleBill, &rows).unwrap();
        assert!(!grid.slot(month).scheduled);
    }
}
