//! pc-catalog: static reference data for the product configurator.
//!
//! Provides:
//! - Product categories and the application types scoped to them
//! - Product records with operating envelopes and rated performance
//! - A validated, immutable [`Catalog`] built once at startup
//! - The built-in sample data set
//! - YAML/JSON catalog files
//!
//! # Example
//!
//! ```no_run
//! use pc_catalog::sample_catalog;
//! use pc_core::CategoryId;
//!
//! let catalog = sample_catalog().unwrap();
//! for product in catalog.products_in(CategoryId::new(1)) {
//!     println!("{} ({} m³/h max)", product.name, product.max_flow_rate);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod io;
pub mod model;
pub mod sample;

pub use catalog::{Catalog, CatalogFile};
pub use error::{CatalogError, CatalogResult};
pub use io::{load_json, load_path, load_yaml, save_json, save_path, save_yaml};
pub use model::{ApplicationType, OperatingEnvelope, ProductCategory, ProductRecord, Specifications};
pub use sample::sample_catalog;
