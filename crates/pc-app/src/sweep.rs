//! Parameter sweeps over a base configuration.

use std::fmt;

use pc_core::{Quantity, Real, parse_quantity};
use pc_perf::ProductConfiguration;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Configuration parameter varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepParameter {
    FlowRate,
    Pressure,
    Temperature,
}

impl SweepParameter {
    /// Physical quantity of the parameter, for unit-tagged input.
    pub fn quantity(self) -> Quantity {
        match self {
            Self::FlowRate => Quantity::FlowRate,
            Self::Pressure => Quantity::Pressure,
            Self::Temperature => Quantity::Temperature,
        }
    }

    /// `config` with this parameter replaced by `value`.
    pub fn apply(self, config: &ProductConfiguration, value: Real) -> ProductConfiguration {
        match self {
            Self::FlowRate => config.with_flow_rate(value),
            Self::Pressure => config.with_pressure(value),
            Self::Temperature => config.with_temperature(value),
        }
    }

    fn may_be_negative(self) -> bool {
        matches!(self, Self::Temperature)
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlowRate => write!(f, "flow rate"),
            Self::Pressure => write!(f, "pressure"),
            Self::Temperature => write!(f, "temperature"),
        }
    }
}

/// Linearly spaced sweep from `start` to `end`, both included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepDefinition {
    parameter: SweepParameter,
    start: Real,
    end: Real,
    num_points: usize,
}

impl SweepDefinition {
    pub fn new(
        parameter: SweepParameter,
        start: Real,
        end: Real,
        num_points: usize,
    ) -> AppResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(invalid(format!("{parameter} bounds must be finite")));
        }
        if start == end {
            return Err(invalid("start and end must differ".to_string()));
        }
        if num_points < 2 {
            return Err(invalid(format!(
                "need at least 2 points, got {num_points}"
            )));
        }
        if !parameter.may_be_negative() && (start < 0.0 || end < 0.0) {
            return Err(invalid(format!("{parameter} must be non-negative")));
        }

        Ok(Self {
            parameter,
            start,
            end,
            num_points,
        })
    }

    /// Build a sweep from unit-tagged text such as `"50 l/s"`.
    pub fn from_text(
        parameter: SweepParameter,
        start_raw: &str,
        end_raw: &str,
        num_points: usize,
    ) -> AppResult<Self> {
        let start = parse_quantity(start_raw, parameter.quantity())?;
        let end = parse_quantity(end_raw, parameter.quantity())?;
        Self::new(parameter, start, end, num_points)
    }

    pub fn parameter(&self) -> SweepParameter {
        self.parameter
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Sample values, evenly spaced.
    pub fn generate_points(&self) -> Vec<Real> {
        let mut points = Vec::with_capacity(self.num_points);
        let delta = (self.end - self.start) / (self.num_points - 1) as Real;

        for i in 0..self.num_points {
            points.push(self.start + i as Real * delta);
        }

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

fn invalid(reason: String) -> AppError {
    AppError::InvalidSweep { reason }
}

/// Headline metrics at one sweep value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub value: Real,
    pub efficiency: u32,
    pub power_consumption: Real,
    pub noise_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub parameter: SweepParameter,
    /// In sweep order
    pub points: Vec<SweepPoint>,
}
