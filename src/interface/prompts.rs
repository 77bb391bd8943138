use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, TrackerError};
use crate::models::{FoodEntry, FoodPackage};
use crate::tracker::units::MassUnit;

/// Prompt for a positive decimal amount.
pub fn prompt_positive_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("Invalid number: {}", input)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(TrackerError::InvalidInput(
            "Amount must be a positive number".to_string(),
        ));
    }

    Ok(value)
}

/// Prompt for a positive whole count (wet-food units).
pub fn prompt_positive_count(prompt: &str, default: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let count: u32 = input
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("Invalid count: {}", input)))?;

    if count == 0 {
        return Err(TrackerError::InvalidInput(
            "Count must be at least 1".to_string(),
        ));
    }

    Ok(count)
}

/// Prompt for a calendar date (YYYY-MM-DD).
pub fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.format("%Y-%m-%d").to_string())
        .interact_text()?;

    Ok(NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")?)
}

/// Prompt for one of a fixed set of mass units.
pub fn prompt_unit(prompt: &str, allowed: &[MassUnit]) -> Result<MassUnit> {
    let options: Vec<&str> = allowed.iter().map(|u| u.label()).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(allowed[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a new food entry interactively.
pub fn prompt_new_entry(today: NaiveDate) -> Result<FoodEntry> {
    let id: String = Input::new()
        .with_prompt("Entry id (e.g. bag-3)")
        .interact_text()?;

    let pet_id: String = Input::new().with_prompt("Pet id").interact_text()?;

    let brand: String = Input::new()
        .with_prompt("Brand/product name (optional)")
        .allow_empty(true)
        .interact_text()?;
    let brand = if brand.trim().is_empty() {
        None
    } else {
        Some(brand.trim().to_string())
    };

    let kind = Select::new()
        .with_prompt("Food category")
        .items(&["dry (bag)", "wet (cans/pouches)"])
        .default(0)
        .interact()?;

    let (package, daily_amount, daily_unit) = if kind == 0 {
        let bag_weight = prompt_positive_number("Bag weight", "2.0")?;
        let bag_unit = prompt_unit("Bag unit", &[MassUnit::Kilograms, MassUnit::Pounds])?;
        // Dry daily doses are always in grams.
        let daily_amount = prompt_positive_number("Daily amount (grams)", "100")?;
        (
            FoodPackage::Dry {
                bag_weight,
                bag_unit,
            },
            daily_amount,
            MassUnit::Grams,
        )
    } else {
        let number_of_units = prompt_positive_count("Number of units", "12")?;
        let unit = prompt_unit("Per-unit weight unit", &[MassUnit::Grams, MassUnit::Ounces])?;
        let weight_per_unit = prompt_positive_number("Weight per unit", "85")?;
        let daily_unit = prompt_unit("Daily amount unit", &[MassUnit::Grams, MassUnit::Ounces])?;
        let daily_amount = prompt_positive_number("Daily amount", "100")?;
        (
            FoodPackage::Wet {
                number_of_units,
                weight_per_unit,
                unit,
            },
            daily_amount,
            daily_unit,
        )
    };

    let date_started = prompt_date("Date started", today)?;

    let entry = FoodEntry {
        id: id.trim().to_string(),
        pet_id: pet_id.trim().to_string(),
        brand,
        daily_amount,
        daily_unit,
        date_started,
        date_finished: None,
        package,
    };

    entry.validate(today)?;
    Ok(entry)
}

/// Resolve a user-supplied entry id against the known entries.
///
/// Tries an exact match first, then fuzzy matching over ids and brand
/// names. Returns `None` when the user rejects every candidate.
pub fn resolve_entry_id(entries: &[&FoodEntry], input: &str) -> Result<Option<String>> {
    let needle = input.trim().to_lowercase();

    if let Some(entry) = entries.iter().find(|e| e.key() == needle) {
        return Ok(Some(entry.id.clone()));
    }

    let mut candidates: Vec<(&FoodEntry, f64)> = entries
        .iter()
        .map(|e| {
            let id_score = jaro_winkler(&e.key(), &needle);
            let brand_score = e
                .brand
                .as_deref()
                .map(|b| jaro_winkler(&b.to_lowercase(), &needle))
                .unwrap_or(0.0);
            (*e, id_score.max(brand_score))
        })
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let entry = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}' {}?", entry.id, entry.describe()))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| entry.id.clone()));
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(e, _)| format!("{} {}", e.id, e.describe()))
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which entry did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < candidates.len().min(5) {
        Ok(Some(candidates[selection].0.id.clone()))
    } else {
        Ok(None)
    }
}
