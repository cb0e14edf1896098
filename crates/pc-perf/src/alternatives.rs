//! Alternative-product selection.

use pc_catalog::ProductRecord;
use pc_core::{Real, round_to_tenth};

use crate::calculator::{calculate_efficiency, calculate_power, report_efficiency};
use crate::config::ProductConfiguration;
use crate::metrics::AlternativeProduct;

pub const ALTERNATIVE_COUNT: usize = 3;

/// Products are evaluated at this fraction of their rated maximum flow.
pub const WORKING_FLOW_FRACTION: Real = 0.8;

/// Pick up to three products for `config` from `products` (catalog order).
///
/// Matches are products of the requested category whose flow envelope covers
/// the requested flow rate. When fewer than three match, the list is padded
/// from the head of the unfiltered catalog, which may repeat a match or add
/// products from another category. The first entry is the selected one.
pub fn select_alternatives(
    config: &ProductConfiguration,
    products: &[ProductRecord],
) -> Vec<AlternativeProduct> {
    let mut picked: Vec<&ProductRecord> = products
        .iter()
        .filter(|p| {
            p.category_id == config.category_id && p.flow_envelope().contains(config.flow_rate)
        })
        .take(ALTERNATIVE_COUNT)
        .collect();

    let shortfall = ALTERNATIVE_COUNT - picked.len();
    if shortfall > 0 {
        tracing::debug!(
            matched = picked.len(),
            shortfall,
            category = %config.category_id,
            "padding alternatives from catalog head"
        );
        picked.extend(products.iter().take(shortfall));
    }

    picked
        .into_iter()
        .enumerate()
        .map(|(index, product)| annotate(config, product, index == 0))
        .collect()
}

fn annotate(
    config: &ProductConfiguration,
    product: &ProductRecord,
    is_selected: bool,
) -> AlternativeProduct {
    let flow_rate = product.max_flow_rate * WORKING_FLOW_FRACTION;
    let working = config.with_flow_rate(flow_rate);

    let efficiency = product
        .rated_efficiency()
        .unwrap_or_else(|| Real::from(calculate_efficiency(&working)));
    let power = product
        .rated_power()
        .unwrap_or_else(|| calculate_power(&working));

    AlternativeProduct {
        id: product.id,
        name: product.name.clone(),
        series: product.series_or_empty().to_string(),
        efficiency: report_efficiency(efficiency),
        power_consumption: round_to_tenth(power),
        flow_rate,
        price: product.price.unwrap_or(0.0),
        is_selected,
    }
}
