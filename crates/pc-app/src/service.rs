//! Catalog queries and configuration evaluation.

use std::path::Path;
use std::sync::Arc;

use pc_catalog::{ApplicationType, Catalog, ProductCategory, ProductRecord, sample_catalog};
use pc_core::{CategoryId, ProductId, Real};
use pc_perf::{
    AlternativeProduct, ComparisonScores, PerformanceMetrics, ProductConfiguration, Recommendation,
    calculate_performance_metrics, compare_alternatives,
};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::sweep::{SweepDefinition, SweepPoint, SweepResult};

pub const UNKNOWN_CATEGORY: &str = "Unknown Category";
pub const UNKNOWN_APPLICATION_TYPE: &str = "Unknown Application Type";

/// Everything the final wizard step shows for a configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSummary {
    pub category_name: String,
    pub application_type_name: String,
    pub configuration: ProductConfiguration,
    pub selected_product: Option<AlternativeProduct>,
    pub efficiency: u32,
    pub power_consumption: Real,
    pub maintenance_interval: u32,
    pub estimated_lifetime: u32,
    pub recommendation: Recommendation,
    pub recommendation_text: &'static str,
}

/// Entry point for frontends.
///
/// Cheap to clone; clones share the same catalog.
#[derive(Debug, Clone)]
pub struct ProductService {
    catalog: Arc<Catalog>,
}

impl ProductService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn from_shared(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn with_sample_catalog() -> AppResult<Self> {
        Ok(Self::new(sample_catalog()?))
    }

    /// Load a YAML or JSON catalog file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        Ok(Self::new(pc_catalog::load_path(path)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn export_catalog(&self, path: &Path) -> AppResult<()> {
        pc_catalog::save_path(path, &self.catalog)?;
        tracing::info!(path = %path.display(), "catalog exported");
        Ok(())
    }

    pub fn categories(&self) -> &[ProductCategory] {
        self.catalog.categories()
    }

    pub fn application_types(&self, category: Option<CategoryId>) -> Vec<&ApplicationType> {
        self.catalog.application_types(category)
    }

    /// Products in catalog order, optionally restricted to one category.
    pub fn products(&self, category: Option<CategoryId>) -> Vec<&ProductRecord> {
        match category {
            Some(category) => self.catalog.products_in(category).collect(),
            None => self.catalog.products().iter().collect(),
        }
    }

    pub fn search(&self, query: &str) -> Vec<&ProductRecord> {
        self.catalog.search_products(query)
    }

    pub fn product(&self, id: ProductId) -> AppResult<&ProductRecord> {
        self.catalog.product(id).ok_or(AppError::UnknownProduct(id))
    }

    /// Validate `config` and estimate its performance.
    pub fn calculate(&self, config: &ProductConfiguration) -> AppResult<PerformanceMetrics> {
        check(config)?;
        Ok(calculate_performance_metrics(config, self.catalog.products()))
    }

    /// Comparison scores for the selected alternative and for every other
    /// alternative listed in `with`.
    ///
    /// Cost scores are relative to the most expensive alternative, listed
    /// or not.
    pub fn compare(
        &self,
        config: &ProductConfiguration,
        with: &[ProductId],
    ) -> AppResult<Vec<ComparisonScores>> {
        for &id in with {
            self.product(id)?;
        }

        let metrics = self.calculate(config)?;
        Ok(compare_alternatives(&metrics)
            .into_iter()
            .filter(|scores| scores.is_selected || with.contains(&scores.id))
            .collect())
    }

    pub fn summary(&self, config: &ProductConfiguration) -> AppResult<ConfigurationSummary> {
        let metrics = self.calculate(config)?;

        let category_name = self
            .catalog
            .category(config.category_id)
            .map_or(UNKNOWN_CATEGORY, |c| c.name.as_str())
            .to_string();
        let application_type_name = self
            .catalog
            .application_type(config.application_type)
            .map_or(UNKNOWN_APPLICATION_TYPE, |a| a.name.as_str())
            .to_string();

        let recommendation = Recommendation::from_efficiency(metrics.efficiency);

        Ok(ConfigurationSummary {
            category_name,
            application_type_name,
            configuration: *config,
            selected_product: metrics.selected_product().cloned(),
            efficiency: metrics.efficiency,
            power_consumption: metrics.power_consumption,
            maintenance_interval: metrics.maintenance_interval,
            estimated_lifetime: metrics.estimated_lifetime,
            recommendation,
            recommendation_text: recommendation.message(),
        })
    }

    /// Evaluate `config` at every point of `sweep`, in parallel.
    pub fn sweep(
        &self,
        config: &ProductConfiguration,
        sweep: &SweepDefinition,
    ) -> AppResult<SweepResult> {
        check(config)?;

        let parameter = sweep.parameter();
        let products = self.catalog.products();

        let points = sweep
            .generate_points()
            .into_par_iter()
            .map(|value| {
                let point_config = parameter.apply(config, value);
                let metrics = calculate_performance_metrics(&point_config, products);
                SweepPoint {
                    value,
                    efficiency: metrics.efficiency,
                    power_consumption: metrics.power_consumption,
                    noise_level: metrics.noise_level,
                }
            })
            .collect();

        tracing::debug!(%parameter, points = sweep.num_points(), "sweep evaluated");

        Ok(SweepResult { parameter, points })
    }
}

fn check(config: &ProductConfiguration) -> AppResult<()> {
    config.validate().map_err(|err| {
        tracing::warn!(error = %err, "configuration rejected");
        AppError::from(err)
    })
}
