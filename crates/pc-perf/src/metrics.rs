//! Output records.

use pc_core::{ProductId, Real};
use serde::{Deserialize, Serialize};

/// One point of the load-performance curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadPoint {
    /// Percent of rated capacity
    pub load: u32,
    /// Percent
    pub performance: u32,
}

/// Annotated catalog product offered as an alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeProduct {
    pub id: ProductId,
    pub name: String,
    pub series: String,
    /// Percent
    pub efficiency: u32,
    /// kW
    pub power_consumption: Real,
    /// Working flow rate, m³/h
    pub flow_rate: Real,
    pub price: Real,
    pub is_selected: bool,
}

/// Performance estimate for one configuration.
///
/// Built fresh per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub efficiency: u32,
    pub power_consumption: Real,
    pub noise_level: u32,
    pub maintenance_interval: u32,
    pub estimated_lifetime: u32,
    pub performance_by_load: Vec<LoadPoint>,
    pub alternative_products: Vec<AlternativeProduct>,
    pub is_within_target_power: bool,
    pub is_exceeds_lifetime: bool,
    pub is_above_target_noise: bool,
    pub is_extended_maintenance: bool,
    pub compared_to_average: i32,
}

impl PerformanceMetrics {
    /// The alternative currently chosen, if any.
    pub fn selected_product(&self) -> Option<&AlternativeProduct> {
        self.alternative_products.iter().find(|p| p.is_selected)
    }
}
