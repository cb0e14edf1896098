//! Metrics aggregation.

use pc_catalog::ProductRecord;
use pc_core::Real;

use crate::alternatives::select_alternatives;
use crate::application::ApplicationKind;
use crate::calculator::{calculate_efficiency, calculate_noise, calculate_power, load_performance};
use crate::config::ProductConfiguration;
use crate::metrics::{LoadPoint, PerformanceMetrics};

/// Reference efficiency for `compared_to_average`, percent.
pub const BASELINE_EFFICIENCY: i32 = 73;

/// Load percentages sampled for the performance curve.
pub const LOAD_POINTS: [u32; 5] = [25, 50, 75, 100, 125];

pub const TARGET_POWER_KW: Real = 8.5;
pub const LIFETIME_TARGET_YEARS: u32 = 15;
pub const NOISE_TARGET_DB: u32 = 75;
pub const EXTENDED_MAINTENANCE_MONTHS: u32 = 8;

const MIN_MAINTENANCE_MONTHS: i32 = 3;
const MAX_MAINTENANCE_MONTHS: i32 = 12;
const MIN_LIFETIME_YEARS: i32 = 5;

/// Evaluate `config` against the catalog `products`.
///
/// Total for any finite input; the caller validates beforehand.
pub fn calculate_performance_metrics(
    config: &ProductConfiguration,
    products: &[ProductRecord],
) -> PerformanceMetrics {
    let efficiency = calculate_efficiency(config);
    let power_consumption = calculate_power(config);
    let noise_level = calculate_noise(config);

    let maintenance_interval = maintenance_interval(config.application_kind(), efficiency);
    let estimated_lifetime = estimated_lifetime(efficiency);
    let compared_to_average = efficiency as i32 - BASELINE_EFFICIENCY;

    let performance_by_load = performance_by_load(config);
    let alternative_products = select_alternatives(config, products);

    tracing::debug!(
        efficiency,
        power_consumption,
        noise_level,
        maintenance_interval,
        estimated_lifetime,
        alternatives = alternative_products.len(),
        "performance metrics computed"
    );

    PerformanceMetrics {
        efficiency,
        power_consumption,
        noise_level,
        maintenance_interval,
        estimated_lifetime,
        performance_by_load,
        alternative_products,
        is_within_target_power: power_consumption < TARGET_POWER_KW,
        is_exceeds_lifetime: estimated_lifetime >= LIFETIME_TARGET_YEARS,
        is_above_target_noise: noise_level > NOISE_TARGET_DB,
        is_extended_maintenance: maintenance_interval >= EXTENDED_MAINTENANCE_MONTHS,
        compared_to_average,
    }
}

/// Service interval in months, within [3, 12].
pub fn maintenance_interval(application: ApplicationKind, efficiency: u32) -> u32 {
    let mut interval: i32 = 6;

    if efficiency > 80 {
        interval += 2;
    } else if efficiency < 70 {
        interval -= 1;
    }

    interval += application.maintenance_adjustment();

    interval.clamp(MIN_MAINTENANCE_MONTHS, MAX_MAINTENANCE_MONTHS) as u32
}

/// Expected service life in years, at least 5.
pub fn estimated_lifetime(efficiency: u32) -> u32 {
    let mut lifetime: i32 = 10;

    if efficiency >= 85 {
        lifetime += 8;
    } else if efficiency >= 75 {
        lifetime += 5;
    } else if efficiency < 70 {
        lifetime -= 2;
    }

    lifetime.max(MIN_LIFETIME_YEARS) as u32
}

pub fn performance_by_load(config: &ProductConfiguration) -> Vec<LoadPoint> {
    LOAD_POINTS
        .iter()
        .map(|&load| LoadPoint {
            load,
            performance: load_performance(config, Real::from(load)),
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use pc_catalog::sample_catalog;
    use pc_core::{ApplicationTypeId, CategoryId};
    use proptest::prelude::*;

    fn any_config() -> impl Strategy<Value = ProductConfiguration> {
        (0_u32..6, 0_u32..20, 0.0_f64..1_000.0, 0.0_f64..300.0, -60.0_f64..200.0).prop_map(
            |(category, application, flow_rate, pressure, temperature)| ProductConfiguration {
                category_id: CategoryId::new(category),
                application_type: ApplicationTypeId::new(application),
                flow_rate,
                pressure,
                temperature,
            },
        )
    }

    proptest! {
        #[test]
        fn aggregate_invariants(c in any_config()) {
            let catalog = sample_catalog().unwrap();
            let m = calculate_performance_metrics(&c, catalog.products());

            prop_assert_eq!(m.compared_to_average, m.efficiency as i32 - 73);
            prop_assert!((3..=12).contains(&m.maintenance_interval));
            prop_assert!(m.estimated_lifetime >= 5);
            prop_assert_eq!(m.performance_by_load.len(), 5);

            prop_assert_eq!(m.alternative_products.len(), 3);
            prop_assert!(m.alternative_products[0].is_selected);
            prop_assert_eq!(m.alternative_products.iter().filter(|a| a.is_selected).count(), 1);

            prop_assert_eq!(m.is_within_target_power, m.power_consumption < 8.5);
            prop_assert_eq!(m.is_exceeds_lifetime, m.estimated_lifetime >= 15);
            prop_assert_eq!(m.is_above_target_noise, m.noise_level > 75);
            prop_assert_eq!(m.is_extended_maintenance, m.maintenance_interval >= 8);
        }

        #[test]
        fn aggregate_is_idempotent(c in any_config()) {
            let catalog = sample_catalog().unwrap();
            let first = calculate_performance_metrics(&c, catalog.products());
            let second = calculate_performance_metrics(&c, catalog.products());
            prop_assert_eq!(first, second);
        }
    }
}
