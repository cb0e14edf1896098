//! End-to-end evaluation scenarios against the sample catalog.

use pc_catalog::sample_catalog;
use pc_core::{ApplicationTypeId, CategoryId, ProductId};
use pc_perf::{
    LoadPoint, ProductConfiguration, Recommendation, calculate_performance_metrics,
    compare_alternatives,
};

fn config(
    category: u32,
    application: u32,
    flow_rate: f64,
    pressure: f64,
    temperature: f64,
) -> ProductConfiguration {
    ProductConfiguration {
        category_id: CategoryId::new(category),
        application_type: ApplicationTypeId::new(application),
        flow_rate,
        pressure,
        temperature,
    }
}

#[test]
fn optimal_water_treatment_pump() {
    let catalog = sample_catalog().unwrap();
    let metrics = calculate_performance_metrics(&config(1, 1, 200.0, 5.0, 45.0), catalog.products());

    assert_eq!(metrics.efficiency, 86);
    assert_eq!(metrics.power_consumption, 3.2);
    assert_eq!(metrics.noise_level, 79);
    assert_eq!(metrics.maintenance_interval, 8);
    assert_eq!(metrics.estimated_lifetime, 18);
    assert_eq!(metrics.compared_to_average, 13);

    assert_eq!(
        metrics.performance_by_load,
        vec![
            LoadPoint { load: 25, performance: 73 },
            LoadPoint { load: 50, performance: 86 },
            LoadPoint { load: 75, performance: 86 },
            LoadPoint { load: 100, performance: 81 },
            LoadPoint { load: 125, performance: 69 },
        ]
    );

    assert!(metrics.is_within_target_power);
    assert!(metrics.is_exceeds_lifetime);
    assert!(metrics.is_above_target_noise);
    assert!(metrics.is_extended_maintenance);

    let selected = metrics.selected_product().unwrap();
    assert_eq!(selected.id, ProductId::new(1));
    assert_eq!(selected.name, "IP-X240");
    assert_eq!(Recommendation::from_efficiency(metrics.efficiency), Recommendation::Excellent);
}

#[test]
fn stacked_penalties_chemical_processing() {
    let catalog = sample_catalog().unwrap();
    let metrics = calculate_performance_metrics(&config(1, 2, 50.0, 1.0, -20.0), catalog.products());

    // 75 - 2.5 (low flow) - 3 (low pressure) - 5 (freezing) - 2 (chemical) = 62.5
    assert_eq!(metrics.efficiency, 63);
    assert_eq!(metrics.compared_to_average, -10);
    // 0.00272 * 50 * 1 / 0.63 * 1.15 = 0.248
    assert_eq!(metrics.power_consumption, 0.2);
    // 65 + 2 + 1.5 + 3 = 71.5
    assert_eq!(metrics.noise_level, 72);
    // 6 - 1 (low efficiency) - 1 (chemical)
    assert_eq!(metrics.maintenance_interval, 4);
    assert_eq!(metrics.estimated_lifetime, 8);

    assert!(!metrics.is_exceeds_lifetime);
    assert!(!metrics.is_above_target_noise);
    assert!(!metrics.is_extended_maintenance);

    // Only the compact pump covers 50 m³/h; the list is padded from the head.
    let ids: Vec<u32> = metrics.alternative_products.iter().map(|a| a.id.get()).collect();
    assert_eq!(ids, vec![5, 1, 2]);
    assert_eq!(Recommendation::from_efficiency(metrics.efficiency), Recommendation::Basic);
}

#[test]
fn json_wire_format_matches_reference_shape() {
    let catalog = sample_catalog().unwrap();
    let metrics = calculate_performance_metrics(&config(1, 1, 200.0, 5.0, 45.0), catalog.products());
    let json = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json["efficiency"], 86);
    assert_eq!(json["powerConsumption"], 3.2);
    assert_eq!(json["comparedToAverage"], 13);
    assert_eq!(json["performanceByLoad"][0]["load"], 25);
    assert_eq!(json["alternativeProducts"][0]["isSelected"], true);
    assert_eq!(json["alternativeProducts"][1]["flowRate"], 240.0);
    assert_eq!(json["isExtendedMaintenance"], true);
}

#[test]
fn comparison_covers_every_alternative() {
    let catalog = sample_catalog().unwrap();
    let metrics = calculate_performance_metrics(&config(1, 1, 200.0, 5.0, 45.0), catalog.products());
    let scores = compare_alternatives(&metrics);

    assert_eq!(scores.len(), 3);
    // IP-X450 Ultra is the most expensive alternative.
    assert_eq!(scores[2].cost_efficiency, 0.0);
    assert!(scores.iter().all(|s| s.maintenance_score == 90.0));
}

#[test]
fn hydraulic_configuration_uses_neutral_application_adjustments() {
    let catalog = sample_catalog().unwrap();
    // Application 5 (manufacturing) carries no calibrated offsets.
    let metrics = calculate_performance_metrics(&config(2, 5, 120.0, 200.0, 40.0), catalog.products());

    // Flow 120: +5 * (1 - 80/100) = +1; pressure 200: -(193 * 2); clamps to floor.
    assert_eq!(metrics.efficiency, 60);
    assert_eq!(metrics.alternative_products[0].id, ProductId::new(7));
    assert_eq!(metrics.noise_level, 95);
    assert!(!metrics.is_within_target_power);
}

#[test]
fn power_just_below_target_keeps_flag() {
    let catalog = sample_catalog().unwrap();
    // Raw power 8.4499999999999993 kW rounds down to 8.4
    let metrics = calculate_performance_metrics(&config(1, 4, 169.0, 12.5, 45.0), catalog.products());

    assert_eq!(metrics.efficiency, 68);
    assert_eq!(metrics.power_consumption, 8.4);
    assert!(metrics.is_within_target_power);
}
