//! Side-by-side comparison scores for the alternatives.

use pc_core::{ProductId, Real};
use serde::{Deserialize, Serialize};

use crate::metrics::PerformanceMetrics;

/// Flow rate that maps to a full flow score, m³/h.
pub const FLOW_SCORE_REFERENCE: Real = 500.0;
/// Power draw that maps to a zero power score, kW.
pub const POWER_SCORE_REFERENCE: Real = 10.0;
pub const MIN_POWER_SCORE: Real = 10.0;

/// Scores on a 0..100 scale, higher is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonScores {
    pub id: ProductId,
    pub name: String,
    pub is_selected: bool,
    pub efficiency: Real,
    pub flow_rate_score: Real,
    pub power_efficiency: Real,
    pub cost_efficiency: Real,
    pub maintenance_score: Real,
    pub noise_efficiency: Real,
}

/// Score every alternative in `metrics`.
///
/// Maintenance and noise scores come from the configuration-level metrics,
/// so they are identical across alternatives.
pub fn compare_alternatives(metrics: &PerformanceMetrics) -> Vec<ComparisonScores> {
    let max_price = metrics
        .alternative_products
        .iter()
        .map(|p| p.price)
        .fold(0.0, Real::max);

    let maintenance_score = if metrics.maintenance_interval <= 6 {
        60.0
    } else {
        90.0
    };
    let noise_efficiency = 100.0 - Real::from(metrics.noise_level);

    metrics
        .alternative_products
        .iter()
        .map(|product| {
            let cost_efficiency = if max_price > 0.0 {
                100.0 - (product.price / max_price) * 100.0
            } else {
                0.0
            };

            ComparisonScores {
                id: product.id,
                name: product.name.clone(),
                is_selected: product.is_selected,
                efficiency: Real::from(product.efficiency),
                flow_rate_score: (product.flow_rate / FLOW_SCORE_REFERENCE * 100.0).min(100.0),
                power_efficiency: (100.0
                    - product.power_consumption / POWER_SCORE_REFERENCE * 100.0)
                    .max(MIN_POWER_SCORE),
                cost_efficiency,
                maintenance_score,
                noise_efficiency,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::AlternativeProduct;

    fn alternative(id: u32, power: Real, flow_rate: Real, price: Real) -> AlternativeProduct {
        AlternativeProduct {
            id: ProductId::new(id),
            name: format!("P-{id}"),
            series: String::new(),
            efficiency: 80,
            power_consumption: power,
            flow_rate,
            price,
            is_selected: id == 1,
        }
    }

    fn metrics(
        alternatives: Vec<AlternativeProduct>,
        maintenance_interval: u32,
    ) -> PerformanceMetrics {
        PerformanceMetrics {
            efficiency: 80,
            power_consumption: 5.0,
            noise_level: 72,
            maintenance_interval,
            estimated_lifetime: 15,
            performance_by_load: vec![],
            alternative_products: alternatives,
            is_within_target_power: true,
            is_exceeds_lifetime: true,
            is_above_target_noise: false,
            is_extended_maintenance: false,
            compared_to_average: 7,
        }
    }

    #[test]
    fn scores_follow_reference_formulas() {
        let m = metrics(
            vec![
                alternative(1, 7.2, 160.0, 12_450.0),
                alternative(2, 9.6, 600.0, 24_900.0),
            ],
            6,
        );
        let scores = compare_alternatives(&m);

        assert_eq!(scores.len(), 2);
        assert!((scores[0].flow_rate_score - 32.0).abs() < 1e-9);
        assert_eq!(scores[1].flow_rate_score, 100.0);
        assert!((scores[0].power_efficiency - 28.0).abs() < 1e-9);
        assert_eq!(scores[1].power_efficiency, 10.0);
        assert!((scores[0].cost_efficiency - 50.0).abs() < 1e-9);
        assert_eq!(scores[1].cost_efficiency, 0.0);
        assert_eq!(scores[0].maintenance_score, 60.0);
        assert_eq!(scores[0].noise_efficiency, 28.0);
        assert!(scores[0].is_selected);
    }

    #[test]
    fn long_maintenance_scores_higher() {
        let m = metrics(vec![alternative(1, 5.0, 100.0, 1_000.0)], 8);
        assert_eq!(compare_alternatives(&m)[0].maintenance_score, 90.0);
    }

    #[test]
    fn unpriced_alternatives_do_not_divide_by_zero() {
        let m = metrics(vec![alternative(1, 5.0, 100.0, 0.0)], 8);
        assert_eq!(compare_alternatives(&m)[0].cost_efficiency, 0.0);
    }
}
