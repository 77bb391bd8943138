use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodEntry;

/// Load entries from a JSON file.
///
/// Deduplicates by lowercase id (last occurrence wins).
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<FoodEntry>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<FoodEntry> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, FoodEntry> = HashMap::new();
    for entry in entries {
        seen.insert(entry.key(), entry);
    }

    Ok(seen.into_values().collect())
}

/// Save entries to a JSON file.
///
/// Deduplicates by lowercase id before saving.
pub fn save_entries<P: AsRef<Path>>(path: P, entries: &[FoodEntry]) -> Result<()> {
    let mut seen: HashMap<String, &FoodEntry> = HashMap::new();
    for entry in entries {
        seen.insert(entry.key(), entry);
    }

    let deduped: Vec<&FoodEntry> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"id": "bag-1", "petId": "rex", "brand": "Kibble Co",
             "dailyAmount": 100.0, "dailyUnit": "grams",
             "dateStarted": "2024-01-01",
             "foodType": "dry", "bagWeight": 2.0, "bagUnit": "kg"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "bag-1");
        assert!(entries[0].is_active());

        // Save and reload
        let out_file = NamedTempFile::new().unwrap();
        save_entries(out_file.path(), &entries).unwrap();

        let reloaded = load_entries(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0], entries[0]);
    }

    #[test]
    fn test_wet_entry_with_finish_date_roundtrip() {
        let json = r#"[
            {"id": "pouch-1", "petId": "milo",
             "dailyAmount": 3.0, "dailyUnit": "oz",
             "dateStarted": "2024-01-01", "dateFinished": "2024-01-20",
             "foodType": "wet", "numberOfUnits": 12,
             "weightPerUnit": 3.0, "unit": "oz"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_active());
        assert_eq!(entries[0].total_supply(), 36.0);
    }

    #[test]
    fn test_deduplication() {
        let json = r#"[
            {"id": "bag-1", "petId": "rex",
             "dailyAmount": 100.0, "dailyUnit": "grams",
             "dateStarted": "2024-01-01",
             "foodType": "dry", "bagWeight": 2.0, "bagUnit": "kg"},
            {"id": "BAG-1", "petId": "rex",
             "dailyAmount": 120.0, "dailyUnit": "grams",
             "dateStarted": "2024-01-01",
             "foodType": "dry", "bagWeight": 3.0, "bagUnit": "kg"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        // Last occurrence wins
        assert_eq!(entries[0].daily_amount, 120.0);
        assert_eq!(entries[0].total_supply(), 3.0);
    }
}
