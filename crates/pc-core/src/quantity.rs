//! Unit-aware numeric input.
//!
//! Frontends accept values such as `"50 l/s"`, `"72.5 psi"` or `"68F"` and
//! convert them to the canonical catalog units used by the calculators:
//!
//! - flow rate: m³/h
//! - pressure: bar
//! - temperature: °C
//!
//! A bare number is taken to already be in the canonical unit.

use std::fmt;

use thiserror::Error;
use uom::si::f64::{Pressure, ThermodynamicTemperature, VolumeRate};

use crate::units::{as_bar, as_degc, as_m3ph};

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Volumetric flow (canonical: m³/h)
    FlowRate,
    /// Pressure (canonical: bar)
    Pressure,
    /// Temperature (canonical: °C)
    Temperature,
}

impl Quantity {
    pub fn canonical_unit(self) -> &'static str {
        match self {
            Self::FlowRate => "m³/h",
            Self::Pressure => "bar",
            Self::Temperature => "°C",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlowRate => write!(f, "Flow Rate"),
            Self::Pressure => write!(f, "Pressure"),
            Self::Temperature => write!(f, "Temperature"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },

    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: String },
}

/// Parse a quantity value from user input text into its canonical unit.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::FlowRate => parse_flow_rate(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Temperature => parse_temperature(trimmed),
    }
}

/// Parse volumetric flow, return m³/h.
fn parse_flow_rate(input: &str) -> Result<f64, UnitError> {
    use uom::si::volume_rate::{cubic_meter_per_second, liter_per_minute, liter_per_second};

    let (value, unit) = split_value_and_unit(input)?;

    let m3h = match unit.to_lowercase().as_str() {
        "" | "m3/h" | "m³/h" | "m3h" => value,
        "m3/s" | "m³/s" => as_m3ph(VolumeRate::new::<cubic_meter_per_second>(value)),
        "l/s" | "lps" => as_m3ph(VolumeRate::new::<liter_per_second>(value)),
        "l/min" | "lpm" => as_m3ph(VolumeRate::new::<liter_per_minute>(value)),
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::FlowRate,
            });
        }
    };

    if m3h < 0.0 {
        return Err(UnitError::OutOfRange {
            value: m3h,
            reason: "Flow rate cannot be negative".to_string(),
        });
    }

    Ok(m3h)
}

/// Parse pressure, return bar.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    use uom::si::pressure::{kilopascal, megapascal, pascal, pound_force_per_square_inch};

    let (value, unit) = split_value_and_unit(input)?;

    let bar = match unit.to_lowercase().as_str() {
        "" | "bar" => value,
        "pa" => as_bar(Pressure::new::<pascal>(value)),
        "kpa" => as_bar(Pressure::new::<kilopascal>(value)),
        "mpa" => as_bar(Pressure::new::<megapascal>(value)),
        "psi" => as_bar(Pressure::new::<pound_force_per_square_inch>(value)),
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure,
            });
        }
    };

    if bar < 0.0 {
        return Err(UnitError::OutOfRange {
            value: bar,
            reason: "Pressure cannot be negative".to_string(),
        });
    }

    Ok(bar)
}

/// Parse temperature, return °C. Negative Celsius is valid.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin};

    let (value, unit) = split_value_and_unit(input)?;

    let celsius = match unit.to_lowercase().as_str() {
        "" | "c" | "°c" | "celsius" => {
            as_degc(ThermodynamicTemperature::new::<degree_celsius>(value))
        }
        "f" | "°f" | "fahrenheit" => {
            as_degc(ThermodynamicTemperature::new::<degree_fahrenheit>(value))
        }
        "k" | "kelvin" => {
            if value <= 0.0 {
                return Err(UnitError::OutOfRange {
                    value,
                    reason: "Absolute temperature must be > 0 K".to_string(),
                });
            }
            as_degc(ThermodynamicTemperature::new::<kelvin>(value))
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature,
            });
        }
    };

    Ok(celsius)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "68F" -> (68.0, "F")
/// - "50 l/s" -> (50.0, "l/s")
/// - "200" -> (200.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Exponents are not accepted: 'e' would swallow unit prefixes.
    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    if !value.is_finite() {
        return Err(UnitError::ParseError(format!(
            "Non-finite value in '{}'",
            input
        )));
    }

    Ok((value, unit_part.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances { abs: 1e-6, rel: 1e-9 })
    }

    #[test]
    fn bare_numbers_are_canonical() {
        assert_eq!(parse_quantity("200", Quantity::FlowRate).unwrap(), 200.0);
        assert_eq!(parse_quantity(" 5 ", Quantity::Pressure).unwrap(), 5.0);
        assert_eq!(parse_quantity("-20", Quantity::Temperature).unwrap(), -20.0);
    }

    #[test]
    fn parse_flow_units() {
        assert!(close(parse_flow_rate("1 l/s").unwrap(), 3.6));
        assert!(close(parse_flow_rate("1000 l/min").unwrap(), 60.0));
        assert!(close(parse_flow_rate("200 m3/h").unwrap(), 200.0));
    }

    #[test]
    fn parse_pressure_units() {
        assert!(close(parse_pressure("500 kPa").unwrap(), 5.0));
        assert!(close(parse_pressure("1 MPa").unwrap(), 10.0));
        let psi = parse_pressure("14.5038 psi").unwrap();
        assert!((psi - 1.0).abs() < 1e-4);
    }

    #[test]
    fn parse_temperature_units() {
        assert!(close(parse_temperature("32F").unwrap(), 0.0));
        assert!(close(parse_temperature("273.15 K").unwrap(), 0.0));
        assert!(close(parse_temperature("45 °C").unwrap(), 45.0));
    }

    #[test]
    fn reject_negative_flow_and_pressure() {
        assert!(matches!(
            parse_flow_rate("-1 m3/h"),
            Err(UnitError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_pressure("-2 bar"),
            Err(UnitError::OutOfRange { .. })
        ));
    }

    #[test]
    fn reject_unknown_unit() {
        assert!(matches!(
            parse_quantity("5 furlongs", Quantity::Pressure),
            Err(UnitError::UnknownUnit { quantity: Quantity::Pressure, .. })
        ));
    }

    #[test]
    fn reject_garbage() {
        assert!(matches!(
            parse_quantity("fast", Quantity::FlowRate),
            Err(UnitError::ParseError(_))
        ));
    }
}
