//! Shared application service layer for the product configurator.
//!
//! Frontends talk to a [`ProductService`], which owns the validated catalog,
//! rejects malformed configurations before they reach the calculators, and
//! exposes catalog queries, metric calculation, comparison, summary and
//! parameter sweeps.

pub mod error;
pub mod service;
pub mod sweep;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use service::{ConfigurationSummary, ProductService};
pub use sweep::{SweepDefinition, SweepParameter, SweepPoint, SweepResult};
