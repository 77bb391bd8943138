use chrono::{Days, NaiveDate};

use crate::error::{Result, TrackerError};
use crate::models::{FoodEntry, Projection};
use crate::tracker::units::from_grams;

/// Project remaining supply and depletion date for an active entry.
///
/// Pure and deterministic given the entry's source fields and `today`;
/// safe to call on every render. The depletion date is derived from the
/// original total rather than the live remainder, so it does not drift
/// across repeated queries while the entry stays active.
pub fn project(entry: &FoodEntry, today: NaiveDate) -> Result<Projection> {
    let daily_grams = entry.daily_amount_grams();
    if !daily_grams.is_finite() || daily_grams <= 0.0 {
        return Err(TrackerError::InvalidRate(entry.daily_amount));
    }

    let total_grams = entry.total_supply_grams();
    if !total_grams.is_finite() || total_grams <= 0.0 {
        return Err(TrackerError::InvalidQuantity(entry.total_supply()));
    }

    let days_since_start = (today - entry.date_started).num_days().max(0);
    let remaining_grams = (total_grams - daily_grams * days_since_start as f64).max(0.0);

    // Ceiling: a partial day of food left still counts as one more day.
    let remaining_days = (remaining_grams / daily_grams).ceil() as i64;

    let total_days = (total_grams / daily_grams).ceil() as u64;
    let depletion_date = entry
        .date_started
        .checked_add_days(Days::new(total_days))
        .ok_or_else(|| {
            TrackerError::InvalidInput(format!("depletion date overflows calendar: {} days", total_days))
        })?;

    Ok(Projection {
        remaining_weight: from_grams(remaining_grams, entry.supply_unit()),
        remaining_unit: entry.supply_unit(),
        remaining_grams,
        remaining_days,
        depletion_date,
    })
}
