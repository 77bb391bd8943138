use crate::models::{FoodEntry, Projection, Reconciliation};
use crate::tracker::constants::LOW_STOCK_DAYS;
use crate::tracker::status::{days_difference_message, expected_days_to_deplete, status_label};

/// Display supply projections for active entries in a formatted table.
pub fn display_projections(rows: &[(&FoodEntry, Projection)]) {
    if rows.is_empty() {
        println!("No active entries to project.");
        return;
    }

    println!();
    println!("=== Active Supplies ===");
    println!();

    // Find max id length for alignment
    let max_id_len = rows.iter().map(|(e, _)| e.id.len()).max().unwrap_or(8);

    for (entry, projection) in rows {
        let low_stock = if projection.remaining_days <= LOW_STOCK_DAYS {
            "  [LOW STOCK]"
        } else {
            ""
        };

        println!(
            "{:<id_width$}  {:<10} {:>7.1} {:<6} left | {:>3} days | runs out {}{}",
            entry.id,
            entry.pet_id,
            projection.remaining_weight,
            projection.remaining_unit.label(),
            projection.remaining_days,
            projection.depletion_date,
            low_stock,
            id_width = max_id_len
        );
    }

    println!();
}

/// Display the reconciliation report for a finished entry.
pub fn display_reconciliation(entry: &FoodEntry, report: &Reconciliation) {
    let expected_days = expected_days_to_deplete(
        entry.total_supply_grams(),
        report.expected_daily_consumption,
    );

    println!();
    println!("=== Feeding Report: {} {} ===", entry.id, entry.describe());
    println!();
    println!("Pet:                  {}", entry.pet_id);
    println!(
        "Period:               {} to {} ({} days)",
        entry.date_started,
        entry.date_finished.map(|d| d.to_string()).unwrap_or_default(),
        report.actual_days_elapsed
    );
    println!(
        "Expected daily:       {:.1} g",
        report.expected_daily_consumption
    );
    println!(
        "Actual daily:         {:.1} g",
        report.actual_daily_consumption
    );
    println!("Variance:             {:+.1}%", report.variance_percentage);
    println!("Status:               {}", status_label(report.feeding_status));
    println!(
        "{}",
        days_difference_message(report.actual_days_elapsed, expected_days)
    );
    println!();
}

/// Display a simple list of entries with their details.
pub fn display_entry_list(entries: &[&FoodEntry], title: &str) {
    if entries.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, entries.len());
    println!();

    for entry in entries {
        let state = match entry.date_finished {
            Some(date) => format!("finished {}", date),
            None => "active".to_string(),
        };
        println!(
            "  {} {} - pet {}, {:.1} {} total, {:.0} {} daily, started {}, {}",
            entry.id,
            entry.describe(),
            entry.pet_id,
            entry.total_supply(),
            entry.supply_unit().label(),
            entry.daily_amount,
            entry.daily_unit.label(),
            entry.date_started,
            state
        );
    }

    println!();
}
