//! Metric calculators.
//!
//! Four independent, deterministic functions of a [`ProductConfiguration`]:
//!
//! ```text
//! efficiency = clamp(round(75 + flow_adj + pressure_adj + temp_adj + app_adj), 60, 90)
//! power      = 0.00272 * Q * p / (efficiency / 100)  [* 1.15 outside 0..80 °C]
//! noise      = clamp(round(65 + 2 * Q / 50 + 1.5 * p + app_adj), 50, 95)
//! load perf  = clamp(round(efficiency * band_factor(load) * app_factor), 30, 95)
//! ```
//!
//! The flow adjustment is discontinuous at the edges of the 100..300 m³/h
//! band: below 100 and above 300 it is a penalty, inside it is a bonus
//! peaking at 200. This is the calibrated curve and is reproduced as is.
//!
//! Power is the only metric without a clamp; pathological inputs give
//! large but well-defined values.

use pc_core::{Real, round_clamped, round_half_up, round_to_tenth};

use crate::config::ProductConfiguration;

pub const BASE_EFFICIENCY: Real = 75.0;
pub const MIN_EFFICIENCY: u32 = 60;
pub const MAX_EFFICIENCY: u32 = 90;

/// kW per (m³/h · bar)
pub const POWER_COEFFICIENT: Real = 0.00272;
pub const EXTREME_TEMPERATURE_POWER_FACTOR: Real = 1.15;

pub const BASE_NOISE: Real = 65.0;
pub const MIN_NOISE: u32 = 50;
pub const MAX_NOISE: u32 = 95;

pub const MIN_LOAD_PERFORMANCE: u32 = 30;
pub const MAX_LOAD_PERFORMANCE: u32 = 95;

/// Efficiency in integer percent, within [60, 90].
pub fn calculate_efficiency(config: &ProductConfiguration) -> u32 {
    let efficiency = BASE_EFFICIENCY
        + flow_adjustment(config.flow_rate)
        + pressure_adjustment(config.pressure)
        + temperature_adjustment(config.temperature)
        + config.application_kind().efficiency_adjustment();

    round_clamped(efficiency, MIN_EFFICIENCY, MAX_EFFICIENCY)
}

/// Power draw in kW, one decimal place.
pub fn calculate_power(config: &ProductConfiguration) -> Real {
    // Efficiency is clamped to [60, 90], so the fraction is never zero.
    let efficiency_fraction = Real::from(calculate_efficiency(config)) / 100.0;

    let mut power = POWER_COEFFICIENT * config.flow_rate * config.pressure / efficiency_fraction;

    if config.temperature < 0.0 || config.temperature > 80.0 {
        power *= EXTREME_TEMPERATURE_POWER_FACTOR;
    }

    round_to_tenth(power)
}

/// Noise level in integer dB, within [50, 95].
pub fn calculate_noise(config: &ProductConfiguration) -> u32 {
    let noise = BASE_NOISE
        + (config.flow_rate / 50.0) * 2.0
        + config.pressure * 1.5
        + config.application_kind().noise_adjustment();

    round_clamped(noise, MIN_NOISE, MAX_NOISE)
}

/// Performance in integer percent at `load` percent of rated capacity,
/// within [30, 95].
pub fn load_performance(config: &ProductConfiguration, load: Real) -> u32 {
    let base_efficiency = Real::from(calculate_efficiency(config));

    let performance = base_efficiency
        * load_band_factor(load)
        * config.application_kind().load_factor(load);

    round_clamped(performance, MIN_LOAD_PERFORMANCE, MAX_LOAD_PERFORMANCE)
}

/// Flow-rate term of the efficiency curve (m³/h).
pub fn flow_adjustment(flow_rate: Real) -> Real {
    if flow_rate < 100.0 {
        -5.0 * (1.0 - flow_rate / 100.0)
    } else if flow_rate > 300.0 {
        -5.0 * ((flow_rate - 300.0) / 200.0)
    } else {
        5.0 * (1.0 - (flow_rate - 200.0).abs() / 100.0)
    }
}

/// Pressure term of the efficiency curve (bar).
pub fn pressure_adjustment(pressure: Real) -> Real {
    if pressure < 3.0 {
        -3.0
    } else if pressure > 7.0 {
        -(pressure - 7.0) * 2.0
    } else {
        3.0 * (1.0 - (pressure - 5.0).abs() / 2.0)
    }
}

/// Temperature term of the efficiency curve (°C).
pub fn temperature_adjustment(temperature: Real) -> Real {
    if !(0.0..=90.0).contains(&temperature) {
        -5.0
    } else if !(15.0..=60.0).contains(&temperature) {
        -2.0
    } else {
        0.0
    }
}

/// Fraction of base efficiency delivered at `load` percent.
pub fn load_band_factor(load: Real) -> Real {
    if load < 50.0 {
        0.7 + (load / 50.0) * 0.3
    } else if load <= 90.0 {
        1.0
    } else {
        1.0 - ((load - 90.0) / 35.0) * 0.2
    }
}

/// Round a rated or computed efficiency for reporting.
pub(crate) fn report_efficiency(efficiency: Real) -> u32 {
    round_half_up(efficiency).max(0.0) as u32
}


#[cfg(test)]
mod proptests {
    use super::*;
    use pc_core::{ApplicationTypeId, CategoryId};
    use proptest::prelude::*;

    fn any_config() -> impl Strategy<Value = ProductConfiguration> {
        (0_u32..20, 0.0_f64..2_000.0, 0.0_f64..400.0, -100.0_f64..300.0).prop_map(
            |(application, flow_rate, pressure, temperature)| ProductConfiguration {
                category_id: CategoryId::new(1),
                application_type: ApplicationTypeId::new(application),
                flow_rate,
                pressure,
                temperature,
            },
        )
    }

    proptest! {
        #[test]
        fn efficiency_within_band(c in any_config()) {
            let e = calculate_efficiency(&c);
            prop_assert!((MIN_EFFICIENCY..=MAX_EFFICIENCY).contains(&e));
        }

        #[test]
        fn noise_within_band(c in any_config()) {
            let n = calculate_noise(&c);
            prop_assert!((MIN_NOISE..=MAX_NOISE).contains(&n));
        }

        #[test]
        fn load_performance_within_band(c in any_config(), load in 0.0_f64..=200.0) {
            let p = load_performance(&c, load);
            prop_assert!((MIN_LOAD_PERFORMANCE..=MAX_LOAD_PERFORMANCE).contains(&p));
        }

        #[test]
        fn power_is_finite_and_non_negative(c in any_config()) {
            let p = calculate_power(&c);
            prop_assert!(p.is_finite());
            prop_assert!(p >= 0.0);
        }

        #[test]
        fn power_grows_with_flow_in_normal_band(
            application in 0_u32..6,
            pressure in 3.0_f64..7.0,
            temperature in 15.0_f64..60.0,
            q1 in 100.0_f64..=300.0,
            q2 in 100.0_f64..=300.0,
        ) {
            let (lo, hi) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
            let base = ProductConfiguration {
                category_id: CategoryId::new(1),
                application_type: ApplicationTypeId::new(application),
                flow_rate: lo,
                pressure,
                temperature,
            };
            // Efficiency varies by at most 5 points inside the band, far less
            // than the flow ratio once the flow gap exceeds ~15%.
            prop_assume!(hi > lo * 1.2);
            prop_assert!(calculate_power(&base.with_flow_rate(hi)) >= calculate_power(&base));
        }
    }
}
