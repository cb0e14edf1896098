//! Error types for the pc-app service layer.

use pc_core::{PcError, ProductId, UnitError};

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for every frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] pc_catalog::CatalogError),

    #[error("Invalid configuration: {0}")]
    Configuration(#[from] PcError),

    #[error("Invalid quantity: {0}")]
    Unit(#[from] UnitError),

    #[error("Product not found: {0}")]
    UnknownProduct(ProductId),

    #[error("Invalid sweep: {reason}")]
    InvalidSweep { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for pc-app operations.
pub type AppResult<T> = Result<T, AppError>;
