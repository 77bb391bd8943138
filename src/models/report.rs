use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tracker::units::MassUnit;

/// Feeding classification derived from the variance between declared and
/// actual daily consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedingStatus {
    #[serde(rename = "overfeeding")]
    Overfeeding,
    #[serde(rename = "slightly-over")]
    SlightlyOver,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "slightly-under")]
    SlightlyUnder,
    #[serde(rename = "underfeeding")]
    Underfeeding,
}

/// Supply projection for an active entry.
///
/// A view model recomputed on every read, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Remaining supply in the entry's source unit.
    pub remaining_weight: f64,

    /// Unit of `remaining_weight`.
    pub remaining_unit: MassUnit,

    /// Remaining supply in grams (clamped at 0).
    pub remaining_grams: f64,

    /// Full days of supply left, rounded up (a partial day counts as one).
    pub remaining_days: i64,

    /// Projected date the supply runs out, computed from the original
    /// total so it stays stable across repeated queries.
    pub depletion_date: NaiveDate,
}

/// Reconciliation of a finished entry against its declared daily rate.
///
/// All five fields derive from the same inputs; a corrected finish date
/// replaces the whole record, never a subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// Days between start and finish, floored at 1.
    pub actual_days_elapsed: i64,

    /// Grams per day actually consumed (rounded to 2 decimals).
    pub actual_daily_consumption: f64,

    /// Grams per day declared (rounded to 2 decimals).
    pub expected_daily_consumption: f64,

    /// Signed percentage variance, actual vs expected (rounded to 2
    /// decimals; classification uses the unrounded value).
    pub variance_percentage: f64,

    pub feeding_status: FeedingStatus,
}
