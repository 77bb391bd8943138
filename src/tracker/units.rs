use serde::{Deserialize, Serialize};

use crate::tracker::constants::{GRAMS_PER_KG, GRAMS_PER_OUNCE, GRAMS_PER_POUND};

/// A mass unit supported by food entries.
///
/// The set is closed: dry bags are sold in kg/pounds, wet units and daily
/// doses in grams/oz. Unit validation happens at the model boundary, so
/// conversion is total over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "pounds")]
    Pounds,
    #[serde(rename = "grams")]
    Grams,
    #[serde(rename = "oz")]
    Ounces,
}

impl MassUnit {
    /// Grams per one unit of this mass unit.
    pub fn grams_factor(self) -> f64 {
        match self {
            MassUnit::Kilograms => GRAMS_PER_KG,
            MassUnit::Pounds => GRAMS_PER_POUND,
            MassUnit::Grams => 1.0,
            MassUnit::Ounces => GRAMS_PER_OUNCE,
        }
    }

    /// Short display label matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            MassUnit::Kilograms => "kg",
            MassUnit::Pounds => "pounds",
            MassUnit::Grams => "grams",
            MassUnit::Ounces => "oz",
        }
    }

    /// Parse a unit label (case-insensitive, accepts a few common aliases).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "kg" | "kilograms" => Some(MassUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Some(MassUnit::Pounds),
            "g" | "gram" | "grams" => Some(MassUnit::Grams),
            "oz" | "ounce" | "ounces" => Some(MassUnit::Ounces),
            _ => None,
        }
    }
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Convert a quantity in any supported unit to grams.
///
/// Linear in `quantity`; no rounding here, rounding happens only at
/// output boundaries.
#[inline]
pub fn to_grams(quantity: f64, unit: MassUnit) -> f64 {
    quantity * unit.grams_factor()
}

/// Convert a quantity in grams back to the given display unit.
#[inline]
pub fn from_grams(grams: f64, unit: MassUnit) -> f64 {
    grams / unit.grams_factor()
}
