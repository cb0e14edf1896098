//! Requested product configuration.

use pc_core::units::{FlowRate, Pressure, Temperature, as_bar, as_degc, as_m3ph};
use pc_core::{ApplicationTypeId, CategoryId, PcResult, Real, ensure_finite, ensure_non_negative};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationKind;

/// User-chosen parameters submitted for evaluation, in catalog units.
///
/// Invariants (checked by [`ProductConfiguration::validate`] at the service
/// boundary, never by the calculators): `flow_rate >= 0`, `pressure >= 0`,
/// all values finite. Temperature may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConfiguration {
    pub category_id: CategoryId,
    pub application_type: ApplicationTypeId,
    /// m³/h
    pub flow_rate: Real,
    /// bar
    pub pressure: Real,
    /// °C
    pub temperature: Real,
}

impl ProductConfiguration {
    pub fn from_quantities(
        category_id: CategoryId,
        application_type: ApplicationTypeId,
        flow_rate: FlowRate,
        pressure: Pressure,
        temperature: Temperature,
    ) -> Self {
        Self {
            category_id,
            application_type,
            flow_rate: as_m3ph(flow_rate),
            pressure: as_bar(pressure),
            temperature: as_degc(temperature),
        }
    }

    pub fn application_kind(&self) -> ApplicationKind {
        ApplicationKind::from_id(self.application_type)
    }

    /// Same configuration evaluated at another flow rate.
    pub fn with_flow_rate(&self, flow_rate: Real) -> Self {
        Self { flow_rate, ..*self }
    }

    pub fn with_pressure(&self, pressure: Real) -> Self {
        Self { pressure, ..*self }
    }

    pub fn with_temperature(&self, temperature: Real) -> Self {
        Self {
            temperature,
            ..*self
        }
    }

    pub fn validate(&self) -> PcResult<()> {
        ensure_non_negative(self.flow_rate, "flow rate")?;
        ensure_non_negative(self.pressure, "pressure")?;
        ensure_finite(self.temperature, "temperature")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::PcError;
    use pc_core::units::{bar, degc, m3ph};

    fn config() -> ProductConfiguration {
        ProductConfiguration {
            category_id: CategoryId::new(1),
            application_type: ApplicationTypeId::new(2),
            flow_rate: 200.0,
            pressure: 5.0,
            temperature: -20.0,
        }
    }

    #[test]
    fn negative_temperature_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn negative_flow_is_rejected() {
        let err = config().with_flow_rate(-1.0).validate().unwrap_err();
        assert!(matches!(err, PcError::Negative { what: "flow rate", .. }));
    }

    #[test]
    fn non_finite_temperature_is_rejected() {
        let err = config().with_temperature(f64::NAN).validate().unwrap_err();
        assert!(matches!(err, PcError::NonFinite { what: "temperature", .. }));
    }

    #[test]
    fn substitution_keeps_other_fields() {
        let base = config();
        let moved = base.with_flow_rate(160.0);
        assert_eq!(moved.flow_rate, 160.0);
        assert_eq!(moved.pressure, base.pressure);
        assert_eq!(moved.application_type, base.application_type);
    }

    #[test]
    fn from_quantities_uses_catalog_units() {
        let c = ProductConfiguration::from_quantities(
            CategoryId::new(1),
            ApplicationTypeId::new(1),
            m3ph(200.0),
            bar(5.0),
            degc(45.0),
        );
        assert!((c.flow_rate - 200.0).abs() < 1e-9);
        assert!((c.pressure - 5.0).abs() < 1e-9);
        assert!((c.temperature - 45.0).abs() < 1e-9);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json: ProductConfiguration = serde_json::from_str(
            r#"{"categoryId":1,"applicationType":2,"flowRate":200,"pressure":5,"temperature":-20}"#,
        )
        .unwrap();
        assert_eq!(json, config());
    }
}
