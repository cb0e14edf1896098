//! Catalog record definitions.

use pc_core::{ApplicationTypeId, CategoryId, ProductId, Real};
use serde::{Deserialize, Serialize};

/// Free-form technical attributes; the schema varies by category.
pub type Specifications = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCategory {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationType {
    pub id: ApplicationTypeId,
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Closed interval `[min, max]` of an operating parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingEnvelope {
    pub min: Real,
    pub max: Real,
}

impl OperatingEnvelope {
    pub fn contains(&self, value: Real) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// m³/h
    pub min_flow_rate: Real,
    pub max_flow_rate: Real,
    /// bar
    pub min_pressure: Real,
    pub max_pressure: Real,
    /// °C
    pub min_temperature: Real,
    pub max_temperature: Real,
    /// Rated efficiency, percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<Real>,
    /// Rated power draw, kW
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_consumption: Option<Real>,
    /// dB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_level: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Real>,
    /// Months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_interval: Option<u32>,
    /// Years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_lifetime: Option<u32>,
    #[serde(default, skip_serializing_if = "Specifications::is_empty")]
    pub specifications: Specifications,
}

impl ProductRecord {
    pub fn flow_envelope(&self) -> OperatingEnvelope {
        OperatingEnvelope {
            min: self.min_flow_rate,
            max: self.max_flow_rate,
        }
    }

    pub fn pressure_envelope(&self) -> OperatingEnvelope {
        OperatingEnvelope {
            min: self.min_pressure,
            max: self.max_pressure,
        }
    }

    pub fn temperature_envelope(&self) -> OperatingEnvelope {
        OperatingEnvelope {
            min: self.min_temperature,
            max: self.max_temperature,
        }
    }

    /// Rated efficiency, treating a zero rating as unrated.
    pub fn rated_efficiency(&self) -> Option<Real> {
        self.efficiency.filter(|v| *v != 0.0)
    }

    /// Rated power draw, treating a zero rating as unrated.
    pub fn rated_power(&self) -> Option<Real> {
        self.power_consumption.filter(|v| *v != 0.0)
    }

    pub fn series_or_empty(&self) -> &str {
        self.series.as_deref().unwrap_or("")
    }

    /// Case-insensitive substring match on name, series and description.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self
                .series
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&query))
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}
