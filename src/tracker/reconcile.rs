use chrono::NaiveDate;

use crate::error::{Result, TrackerError};
use crate::models::{FeedingStatus, FoodEntry, Reconciliation};
use crate::tracker::constants::{
    round2, OVERFEEDING_THRESHOLD, SLIGHTLY_OVER_THRESHOLD, SLIGHTLY_UNDER_THRESHOLD,
    UNDERFEEDING_THRESHOLD,
};

/// Classify a raw (unrounded) variance percentage.
///
/// Boundaries are strict, checked in order: exactly +10% is still
/// slightly over, exactly +5% is still normal, and symmetrically for
/// the negative side.
pub fn classify_variance(variance_percentage: f64) -> FeedingStatus {
    if variance_percentage > OVERFEEDING_THRESHOLD {
        FeedingStatus::Overfeeding
    } else if variance_percentage > SLIGHTLY_OVER_THRESHOLD {
        FeedingStatus::SlightlyOver
    } else if variance_percentage < UNDERFEEDING_THRESHOLD {
        FeedingStatus::Underfeeding
    } else if variance_percentage < SLIGHTLY_UNDER_THRESHOLD {
        FeedingStatus::SlightlyUnder
    } else {
        FeedingStatus::Normal
    }
}

/// Days between start and finish, floored at 1.
///
/// A package started and finished on the same calendar day still counts
/// as one day of feeding, which keeps the division below well-defined.
pub fn actual_days_elapsed(started: NaiveDate, finished: NaiveDate) -> Result<i64> {
    if finished < started {
        return Err(TrackerError::InvalidDateRange { started, finished });
    }
    Ok((finished - started).num_days().max(1))
}

/// Reconcile a finished entry against its declared daily rate.
///
/// All five output fields are functions of the same inputs, so a
/// corrected finish date replaces the whole record. The entry itself is
/// never mutated; this is a view model recomputed on every read.
pub fn reconcile(entry: &FoodEntry) -> Result<Reconciliation> {
    let finished = entry.date_finished.ok_or_else(|| {
        TrackerError::InvalidInput(format!("entry {} is still active", entry.id))
    })?;

    let expected_daily = entry.daily_amount_grams();
    if !expected_daily.is_finite() || expected_daily <= 0.0 {
        return Err(TrackerError::InvalidRate(entry.daily_amount));
    }

    let total_grams = entry.total_supply_grams();
    if !total_grams.is_finite() || total_grams <= 0.0 {
        return Err(TrackerError::InvalidQuantity(entry.total_supply()));
    }

    let days = actual_days_elapsed(entry.date_started, finished)?;
    let actual_daily = total_grams / days as f64;

    // Classification sees the raw variance; rounding is output-only.
    // Multiply before dividing so a mathematically exact boundary (say a
    // 10% overshoot on round numbers) lands exactly on 10.0.
    let variance = (actual_daily - expected_daily) * 100.0 / expected_daily;
    let feeding_status = classify_variance(variance);

    Ok(Reconciliation {
        actual_days_elapsed: days,
        actual_daily_consumption: round2(actual_daily),
        expected_daily_consumption: round2(expected_daily),
        variance_percentage: round2(variance),
        feeding_status,
    })
}
