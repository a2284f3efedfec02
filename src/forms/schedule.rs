//! Decoding the schedule grids out of posted form fields.
//!
//! The grids post as parallel repeated fields: `*_months` carries the checked
//! month numbers, the remaining vectors carry one entry per month in slot
//! order (index 0 is January). Unchecked checkbox groups simply post fewer
//! `*_months` values.

use crate::domain::schedule::{MONTHS_PER_YEAR, ScheduleGrid, ScheduleKind};
use crate::domain::types::MonthNumber;
use crate::forms::{FormError, opt_date, opt_text};

fn checked_months(months: &[i32]) -> Result<Vec<MonthNumber>, FormError> {
    months
        .iter()
        .map(|&m| MonthNumber::new(m).map_err(|_| FormError::InvalidMonth(m)))
        .collect()
}

fn month_field(values: &[String], index: usize) -> &str {
    values.get(index).map(String::as_str).unwrap_or_default()
}

/// Builds the loss-run grid from its posted fields.
pub fn loss_run_grid(
    months: &[i32],
    sent: &[String],
    no_claims: &[i32],
    ad_hoc: &[i32],
) -> Result<ScheduleGrid, FormError> {
    let checked = checked_months(months)?;
    let no_claims = checked_months(no_claims)?;
    let ad_hoc = checked_months(ad_hoc)?;

    let mut grid = ScheduleGrid::empty(ScheduleKind::LossRun);
    for index in 0..MONTHS_PER_YEAR {
        let month = MonthNumber::from_index(index).map_err(|_| FormError::InvalidMonth(index as i32))?;
        let slot = grid.slot_mut(month);
        slot.scheduled = checked.contains(&month);
        slot.last_send_date = opt_date(month_field(sent, index), "Last Send Date")?;
        slot.no_claims = no_claims.contains(&month);
        slot.ad_hoc = ad_hoc.contains(&month);
    }
    Ok(grid)
}

/// Builds the claim-review grid from its posted fields.
pub fn claim_review_grid(
    months: &[i32],
    sent: &[String],
    report_types: &[String],
    delivery_methods: &[String],
    narratives: &[String],
) -> Result<ScheduleGrid, FormError> {
    let checked = checked_months(months)?;

    let mut grid = ScheduleGrid::empty(ScheduleKind::ClaimReview);
    for index in 0..MONTHS_PER_YEAR {
        let month = MonthNumber::from_index(index).map_err(|_| FormError::InvalidMonth(index as i32))?;
        let slot = grid.slot_mut(month);
        slot.scheduled = checked.contains(&month);
        slot.last_send_date = opt_date(month_field(sent, index), "Last Send Date")?;
        slot.report_type = opt_text(month_field(report_types, index));
        slot.delivery_method = opt_text(month_field(delivery_methods, index));
        slot.narrative_count = month_field(narratives, index).trim().parse::<i32>().ok();
    }
    Ok(grid)
}

/// Builds the deductible-bill grid from its posted fields.
pub fn deductible_grid(months: &[i32], sent: &[String]) -> Result<ScheduleGrid, FormError> {
    let checked = checked_months(months)?;

    let mut grid = ScheduleGrid::empty(ScheduleKind::DeductibleBill);
    for index in 0..MONTHS_PER_YEAR {
        let month = MonthNumber::from_index(index).map_err(|_| FormError::InvalidMonth(index as i32))?;
        let slot = grid.slot_mut(month);
        slot.scheduled = checked.contains(&month);
        slot.last_send_date = opt_date(month_field(sent, index), "Last Send Date")?;
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn twelve(values: &[(usize, &str)]) -> Vec<String> {
        let mut v = vec![String::new(); MONTHS_PER_YEAR];
        for (index, value) in values {
            v[*index] = value.to_string();
        }
        v
    }

    #[test]
    fn checked_months_set_their_slots() {
        let grid = loss_run_grid(
            &[3, 9],
            &twelve(&[(2, "2025-03-31")]),
            &[3],
            &[],
        )
        .unwrap();

        let march = grid.slot(MonthNumber::new(3).unwrap());
        assert!(march.scheduled);
        assert!(march.no_claims);
        assert_eq!(march.last_send_date, NaiveDate::from_ymd_opt(2025, 3, 31));

        let april = grid.slot(MonthNumber::new(4).unwrap());
        assert!(!april.scheduled);
        assert_eq!(april.last_send_date, None);
    }

    #[test]
    fn out_of_calendar_month_is_rejected() {
        let err = loss_run_grid(&[13], &[], &[], &[]).unwrap_err();
        assert_eq!(err.message(), "month number 13 is outside the calendar");
    }

    #[test]
    fn claim_review_extras_follow_slot_order() {
        let grid = claim_review_grid(
            &[1],
            &twelve(&[]),
            &twelve(&[(0, "Summary")]),
            &twelve(&[(0, "Email")]),
            &twelve(&[(0, "4")]),
        )
        .unwrap();

        let january = grid.slot(MonthNumber::new(1).unwrap());
        assert_eq!(january.report_type.as_deref(), Some("Summary"));
        assert_eq!(january.delivery_method.as_deref(), Some("Email"));
        assert_eq!(january.narrative_count, Some(4));
    }

    #[test]
    fn short_vectors_mean_empty_fields() {
        let grid = deductible_grid(&[12], &[]).unwrap();
        assert!(grid.slot(MonthNumber::new(12).unwrap()).scheduled);
        assert_eq!(
            grid.slot(MonthNumber::new(12).unwrap()).last_send_date,
            None
        );
    }

    #[test]
    fn bad_slot_date_names_the_field() {
        let err = deductible_grid(&[1], &twelve(&[(0, "31/31/2025")])).unwrap_err();
        assert_eq!(err.message(), "Last Send Date is not a valid date");
    }
}
