/// Grams per kilogram.
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Grams per pound.
pub const GRAMS_PER_POUND: f64 = 453.592;

/// Grams per ounce.
pub const GRAMS_PER_OUNCE: f64 = 28.3495;

// ─────────────────────────────────────────────────────────────────────────────
// Feeding-status variance boundaries (strict inequalities; exactly 10% is
// still "slightly over", exactly 5% is still "normal")
// ─────────────────────────────────────────────────────────────────────────────

/// Variance above this percentage is classified as overfeeding.
pub const OVERFEEDING_THRESHOLD: f64 = 10.0;

/// Variance above this percentage is classified as slightly overfeeding.
pub const SLIGHTLY_OVER_THRESHOLD: f64 = 5.0;

/// Variance below this percentage is classified as underfeeding.
pub const UNDERFEEDING_THRESHOLD: f64 = -10.0;

/// Variance below this percentage is classified as slightly underfeeding.
pub const SLIGHTLY_UNDER_THRESHOLD: f64 = -5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Display thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Entries with this many remaining days or fewer get a low-stock tag.
pub const LOW_STOCK_DAYS: i64 = 7;

/// Round a value to 2 decimal places (output boundary only).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
