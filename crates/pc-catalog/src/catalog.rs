//! Validated, immutable catalog.

use std::collections::HashSet;

use pc_core::{ApplicationTypeId, CategoryId, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::model::{ApplicationType, ProductCategory, ProductRecord};

/// On-disk catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: Vec<ProductCategory>,
    #[serde(default)]
    pub application_types: Vec<ApplicationType>,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// Reference tables shared read-only by every calculation.
///
/// Foreign keys and envelopes are checked once in [`Catalog::new`]; the
/// tables cannot be mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<ProductCategory>,
    application_types: Vec<ApplicationType>,
    products: Vec<ProductRecord>,
}

impl Catalog {
    pub fn new(
        categories: Vec<ProductCategory>,
        application_types: Vec<ApplicationType>,
        products: Vec<ProductRecord>,
    ) -> CatalogResult<Self> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id) {
                return Err(CatalogError::DuplicateId {
                    id: category.id.get(),
                    context: "categories",
                });
            }
        }

        let mut application_ids = HashSet::new();
        for app in &application_types {
            if !application_ids.insert(app.id) {
                return Err(CatalogError::DuplicateId {
                    id: app.id.get(),
                    context: "application types",
                });
            }
            if !category_ids.contains(&app.category_id) {
                return Err(CatalogError::MissingCategory {
                    category_id: app.category_id,
                    context: "application type",
                    id: app.id.get(),
                });
            }
        }

        let mut product_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(product.id) {
                return Err(CatalogError::DuplicateId {
                    id: product.id.get(),
                    context: "products",
                });
            }
            if !category_ids.contains(&product.category_id) {
                return Err(CatalogError::MissingCategory {
                    category_id: product.category_id,
                    context: "product",
                    id: product.id.get(),
                });
            }
            validate_envelopes(product)?;
            validate_ratings(product)?;
        }

        tracing::debug!(
            categories = categories.len(),
            application_types = application_types.len(),
            products = products.len(),
            "catalog constructed"
        );

        Ok(Self {
            categories,
            application_types,
            products,
        })
    }

    pub fn from_file(file: CatalogFile) -> CatalogResult<Self> {
        Self::new(file.categories, file.application_types, file.products)
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            categories: self.categories.clone(),
            application_types: self.application_types.clone(),
            products: self.products.clone(),
        }
    }

    pub fn categories(&self) -> &[ProductCategory] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&ProductCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All application types, or only those of `category` when given.
    pub fn application_types(&self, category: Option<CategoryId>) -> Vec<&ApplicationType> {
        self.application_types
            .iter()
            .filter(|app| category.is_none_or(|id| app.category_id == id))
            .collect()
    }

    pub fn application_type(&self, id: ApplicationTypeId) -> Option<&ApplicationType> {
        self.application_types.iter().find(|app| app.id == id)
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn products_in(&self, category: CategoryId) -> impl Iterator<Item = &ProductRecord> {
        self.products
            .iter()
            .filter(move |p| p.category_id == category)
    }

    pub fn product(&self, id: ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn search_products(&self, query: &str) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|p| p.matches_query(query))
            .collect()
    }
}

fn validate_envelopes(product: &ProductRecord) -> CatalogResult<()> {
    let id = product.id.get();
    let checks = [
        ("flow rate", product.flow_envelope()),
        ("pressure", product.pressure_envelope()),
        ("temperature", product.temperature_envelope()),
    ];

    for (field, envelope) in checks {
        if !envelope.min.is_finite() || !envelope.max.is_finite() {
            return Err(CatalogError::InvalidEnvelope {
                id,
                field,
                reason: "bounds must be finite",
            });
        }
        if envelope.min > envelope.max {
            return Err(CatalogError::InvalidEnvelope {
                id,
                field,
                reason: "min exceeds max",
            });
        }
    }

    if product.min_flow_rate < 0.0 || product.min_pressure < 0.0 {
        return Err(CatalogError::InvalidEnvelope {
            id,
            field: "flow rate/pressure",
            reason: "bounds cannot be negative",
        });
    }

    Ok(())
}

fn validate_ratings(product: &ProductRecord) -> CatalogResult<()> {
    let id = product.id.get();
    let ratings = [
        ("efficiency", product.efficiency),
        ("power consumption", product.power_consumption),
        ("noise level", product.noise_level),
        ("price", product.price),
    ];

    for (field, rating) in ratings {
        let Some(value) = rating else { continue };
        if !value.is_finite() {
            return Err(CatalogError::InvalidRating {
                id,
                field,
                value,
                reason: "must be finite",
            });
        }
        if value < 0.0 {
            return Err(CatalogError::InvalidRating {
                id,
                field,
                value,
                reason: "cannot be negative",
            });
        }
    }

    Ok(())
}
