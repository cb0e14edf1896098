//! Catalog construction and file errors.

use pc_core::CategoryId;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: u32, context: &'static str },

    #[error("Missing category {category_id} referenced by {context} {id}")]
    MissingCategory {
        category_id: CategoryId,
        context: &'static str,
        id: u32,
    },

    #[error("Invalid envelope for product {id}: {field} ({reason})")]
    InvalidEnvelope {
        id: u32,
        field: &'static str,
        reason: &'static str,
    },

    #[error("Invalid rating for product {id}: {field} = {value} ({reason})")]
    InvalidRating {
        id: u32,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
