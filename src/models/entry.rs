use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::tracker::units::{to_grams, MassUnit};

/// The package variant of a food entry.
///
/// Dry food is sold by bag weight (kg/pounds); wet food as discrete units
/// (cans/pouches) with a shared per-unit weight (grams/oz).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "foodType")]
pub enum FoodPackage {
    #[serde(rename = "dry", rename_all = "camelCase")]
    Dry { bag_weight: f64, bag_unit: MassUnit },

    #[serde(rename = "wet", rename_all = "camelCase")]
    Wet {
        number_of_units: u32,
        weight_per_unit: f64,
        unit: MassUnit,
    },
}

/// A food package tracked for one pet.
///
/// Derived quantities (remaining weight, depletion date, feeding status) are
/// never stored here; they are recomputed from the source fields on every
/// read, so edits can never leave them stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: String,

    pub pet_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    pub daily_amount: f64,

    pub daily_unit: MassUnit,

    pub date_started: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_finished: Option<NaiveDate>,

    #[serde(flatten)]
    pub package: FoodPackage,
}

impl FoodEntry {
    /// An entry is active until a finish date is set.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.date_finished.is_none()
    }

    /// The unit the package's supply is declared in (used for display).
    pub fn supply_unit(&self) -> MassUnit {
        match &self.package {
            FoodPackage::Dry { bag_unit, .. } => *bag_unit,
            FoodPackage::Wet { unit, .. } => *unit,
        }
    }

    /// Total supply in the package's source unit.
    pub fn total_supply(&self) -> f64 {
        match &self.package {
            FoodPackage::Dry { bag_weight, .. } => *bag_weight,
            FoodPackage::Wet {
                number_of_units,
                weight_per_unit,
                ..
            } => *number_of_units as f64 * *weight_per_unit,
        }
    }

    /// Total supply normalized to grams.
    ///
    /// Recomputed on every call since the source fields are editable.
    pub fn total_supply_grams(&self) -> f64 {
        to_grams(self.total_supply(), self.supply_unit())
    }

    /// Declared daily consumption in grams.
    pub fn daily_amount_grams(&self) -> f64 {
        to_grams(self.daily_amount, self.daily_unit)
    }

    /// Validate the source-field invariants.
    ///
    /// Rejects non-finite or non-positive quantities, per-variant unit
    /// restrictions, start dates in the future, and finish dates that
    /// precede the start date. Entries must pass here before they reach
    /// the projection or reconciliation calculators.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if !self.daily_amount.is_finite() || self.daily_amount <= 0.0 {
            return Err(TrackerError::InvalidRate(self.daily_amount));
        }

        match &self.package {
            FoodPackage::Dry {
                bag_weight,
                bag_unit,
            } => {
                if !bag_weight.is_finite() || *bag_weight <= 0.0 {
                    return Err(TrackerError::InvalidQuantity(*bag_weight));
                }
                if !matches!(bag_unit, MassUnit::Kilograms | MassUnit::Pounds) {
                    return Err(TrackerError::InvalidInput(format!(
                        "dry bag unit must be kg or pounds, got {}",
                        bag_unit
                    )));
                }
                // Dry daily doses are always measured in grams.
                if self.daily_unit != MassUnit::Grams {
                    return Err(TrackerError::InvalidInput(format!(
                        "dry daily unit must be grams, got {}",
                        self.daily_unit
                    )));
                }
            }
            FoodPackage::Wet {
                number_of_units,
                weight_per_unit,
                unit,
            } => {
                if *number_of_units == 0 {
                    return Err(TrackerError::InvalidQuantity(0.0));
                }
                if !weight_per_unit.is_finite() || *weight_per_unit <= 0.0 {
                    return Err(TrackerError::InvalidQuantity(*weight_per_unit));
                }
                if !matches!(unit, MassUnit::Grams | MassUnit::Ounces) {
                    return Err(TrackerError::InvalidInput(format!(
                        "wet unit weight must be grams or oz, got {}",
                        unit
                    )));
                }
                if !matches!(self.daily_unit, MassUnit::Grams | MassUnit::Ounces) {
                    return Err(TrackerError::InvalidInput(format!(
                        "wet daily unit must be grams or oz, got {}",
                        self.daily_unit
                    )));
                }
            }
        }

        if self.date_started > today {
            return Err(TrackerError::InvalidInput(format!(
                "start date {} is in the future",
                self.date_started
            )));
        }

        if let Some(finished) = self.date_finished {
            if finished < self.date_started {
                return Err(TrackerError::InvalidDateRange {
                    started: self.date_started,
                    finished,
                });
            }
        }

        Ok(())
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }

    /// Short description for list rendering.
    pub fn describe(&self) -> String {
        let kind = match &self.package {
            FoodPackage::Dry { .. } => "dry",
            FoodPackage::Wet { .. } => "wet",
        };
        match &self.brand {
            Some(brand) => format!("{} ({})", brand, kind),
            None => format!("({})", kind),
        }
    }
}
