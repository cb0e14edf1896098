//! Application-type dispatch.

use pc_core::ApplicationTypeId;
use serde::{Deserialize, Serialize};

/// Named application variant carrying the calibrated adjustments.
///
/// Only the four pump applications carry adjustments; every other id,
/// including the application types of the other categories, is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationKind {
    WaterTreatment,
    ChemicalProcessing,
    OilGas,
    FoodBeverage,
    Unknown,
}

impl ApplicationKind {
    pub fn from_id(id: ApplicationTypeId) -> Self {
        match id.get() {
            1 => Self::WaterTreatment,
            2 => Self::ChemicalProcessing,
            3 => Self::OilGas,
            4 => Self::FoodBeverage,
            _ => Self::Unknown,
        }
    }

    /// Efficiency offset in percentage points.
    pub fn efficiency_adjustment(self) -> f64 {
        match self {
            Self::WaterTreatment => 3.0,
            Self::ChemicalProcessing => -2.0,
            Self::OilGas => 0.0,
            Self::FoodBeverage => 1.0,
            Self::Unknown => 0.0,
        }
    }

    /// Noise offset in dB.
    pub fn noise_adjustment(self) -> f64 {
        match self {
            Self::WaterTreatment => -2.0,
            Self::ChemicalProcessing => 3.0,
            Self::OilGas => 5.0,
            Self::FoodBeverage => 0.0,
            Self::Unknown => 0.0,
        }
    }

    /// Multiplier applied to load performance at the given load percentage.
    pub fn load_factor(self, load: f64) -> f64 {
        match self {
            Self::ChemicalProcessing if load > 100.0 => 0.9,
            Self::OilGas if load < 40.0 => 0.92,
            _ => 1.0,
        }
    }

    /// Maintenance interval offset in months.
    pub fn maintenance_adjustment(self) -> i32 {
        match self {
            Self::ChemicalProcessing => -1,
            Self::FoodBeverage => 1,
            _ => 0,
        }
    }
}

impl From<ApplicationTypeId> for ApplicationKind {
    fn from(id: ApplicationTypeId) -> Self {
        Self::from_id(id)
    }
}
