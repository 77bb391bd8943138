use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{Result, TrackerError};
use crate::models::FoodEntry;

/// Manages the set of food entries for all pets.
pub struct EntryStore {
    /// All entries keyed by lowercase id.
    entries: HashMap<String, FoodEntry>,
}

impl EntryStore {
    /// Create a new store from a list of entries.
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            map.insert(entry.key(), entry);
        }
        Self { entries: map }
    }

    /// Get an entry by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&FoodEntry> {
        self.entries.get(&id.to_lowercase())
    }

    /// Get an entry by id, failing if absent.
    pub fn get_required(&self, id: &str) -> Result<&FoodEntry> {
        self.get(id)
            .ok_or_else(|| TrackerError::EntryNotFound(id.to_string()))
    }

    /// Add a validated entry; rejects duplicate ids.
    pub fn add(&mut self, entry: FoodEntry, today: NaiveDate) -> Result<()> {
        entry.validate(today)?;
        if self.entries.contains_key(&entry.key()) {
            return Err(TrackerError::InvalidInput(format!(
                "entry id {} already exists",
                entry.id
            )));
        }
        self.entries.insert(entry.key(), entry);
        Ok(())
    }

    /// Mark an active entry finished on the given date.
    pub fn mark_finished(&mut self, id: &str, date: NaiveDate) -> Result<()> {
        let entry = self
            .entries
            .get_mut(&id.to_lowercase())
            .ok_or_else(|| TrackerError::EntryNotFound(id.to_string()))?;

        if !entry.is_active() {
            return Err(TrackerError::InvalidInput(format!(
                "entry {} is already finished",
                id
            )));
        }
        if date < entry.date_started {
            return Err(TrackerError::InvalidDateRange {
                started: entry.date_started,
                finished: date,
            });
        }

        entry.date_finished = Some(date);
        Ok(())
    }

    /// Correct the finish date of an already-finished entry.
    ///
    /// Reconciliation is never stored, so the corrected record is picked
    /// up in full on the next read.
    pub fn set_finish_date(&mut self, id: &str, date: NaiveDate) -> Result<()> {
        let entry = self
            .entries
            .get_mut(&id.to_lowercase())
            .ok_or_else(|| TrackerError::EntryNotFound(id.to_string()))?;

        if entry.is_active() {
            return Err(TrackerError::InvalidInput(format!(
                "entry {} is still active; use mark-finished first",
                id
            )));
        }
        if date < entry.date_started {
            return Err(TrackerError::InvalidDateRange {
                started: entry.date_started,
                finished: date,
            });
        }

        entry.date_finished = Some(date);
        Ok(())
    }

    /// Delete an entry, returning it.
    pub fn remove(&mut self, id: &str) -> Result<FoodEntry> {
        self.entries
            .remove(&id.to_lowercase())
            .ok_or_else(|| TrackerError::EntryNotFound(id.to_string()))
    }

    /// All active entries (no finish date).
    pub fn active_entries(&self) -> Vec<&FoodEntry> {
        self.entries.values().filter(|e| e.is_active()).collect()
    }

    /// All finished entries.
    pub fn finished_entries(&self) -> Vec<&FoodEntry> {
        self.entries.values().filter(|e| !e.is_active()).collect()
    }

    /// All entries for one pet (case-insensitive).
    pub fn entries_for_pet(&self, pet_id: &str) -> Vec<&FoodEntry> {
        let pet_key = pet_id.to_lowercase();
        self.entries
            .values()
            .filter(|e| e.pet_id.to_lowercase() == pet_key)
            .collect()
    }

    /// All entries.
    pub fn all_entries(&self) -> Vec<&FoodEntry> {
        self.entries.values().collect()
    }

    /// Convert state to a list of entries for JSON serialization.
    pub fn to_entries(&self) -> Vec<FoodEntry> {
        self.entries.values().cloned().collect()
    }

    /// Count of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodPackage;
    use crate::tracker::units::MassUnit;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_entries() -> Vec<FoodEntry> {
        vec![
            FoodEntry {
                id: "Bag-1".to_string(),
                pet_id: "Rex".to_string(),
                brand: Some("Kibble Co".to_string()),
                daily_amount: 100.0,
                daily_unit: MassUnit::Grams,
                date_started: date("2024-01-01"),
                date_finished: None,
                package: FoodPackage::Dry {
                    bag_weight: 2.0,
                    bag_unit: MassUnit::Kilograms,
                },
            },
            FoodEntry {
                id: "pouch-1".to_string(),
                pet_id: "Milo".to_string(),
                brand: None,
                daily_amount: 100.0,
                daily_unit: MassUnit::Grams,
                date_started: date("2024-01-01"),
                date_finished: Some(date("2024-01-20")),
                package: FoodPackage::Wet {
                    number_of_units: 10,
                    weight_per_unit: 85.0,
                    unit: MassUnit::Grams,
                },
            },
        ]
    }

    #[test]
    fn test_get_case_insensitive() {
        let store = EntryStore::new(sample_entries());
        assert!(store.get("bag-1").is_some());
        assert!(store.get("BAG-1").is_some());
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_active_and_finished_partitions() {
        let store = EntryStore::new(sample_entries());
        assert_eq!(store.active_entries().len(), 1);
        assert_eq!(store.finished_entries().len(), 1);
    }

    #[test]
    fn test_entries_for_pet() {
        let store = EntryStore::new(sample_entries());
        assert_eq!(store.entries_for_pet("rex").len(), 1);
        assert_eq!(store.entries_for_pet("MILO").len(), 1);
        assert!(store.entries_for_pet("luna").is_empty());
    }

    #[test]
    fn test_mark_finished() {
        let mut store = EntryStore::new(sample_entries());
        store.mark_finished("bag-1", date("2024-01-18")).unwrap();

        let entry = store.get("bag-1").unwrap();
        assert_eq!(entry.date_finished, Some(date("2024-01-18")));
        assert!(!entry.is_active());
    }

    #[test]
    fn test_mark_finished_rejects_already_finished() {
        let mut store = EntryStore::new(sample_entries());
        assert!(store.mark_finished("pouch-1", date("2024-01-25")).is_err());
    }

    #[test]
    fn test_mark_finished_rejects_date_before_start() {
        let mut store = EntryStore::new(sample_entries());
        assert!(matches!(
            store.mark_finished("bag-1", date("2023-12-25")),
            Err(TrackerError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_set_finish_date_requires_finished_entry() {
        let mut store = EntryStore::new(sample_entries());
        assert!(store.set_finish_date("bag-1", date("2024-01-18")).is_err());

        store.set_finish_date("pouch-1", date("2024-01-22")).unwrap();
        assert_eq!(
            store.get("pouch-1").unwrap().date_finished,
            Some(date("2024-01-22"))
        );
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = EntryStore::new(sample_entries());
        let dup = store.get("bag-1").unwrap().clone();
        assert!(store.add(dup, date("2024-06-01")).is_err());
    }

    #[test]
    fn test_remove() {
        let mut store = EntryStore::new(sample_entries());
        let removed = store.remove("bag-1").unwrap();
        assert_eq!(removed.id, "Bag-1");
        assert!(store.get("bag-1").is_none());
        assert!(store.remove("bag-1").is_err());
    }
}
