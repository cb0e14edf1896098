//! pc-core: stable foundation for the product configurator.
//!
//! Contains:
//! - units (uom SI types + constructors in catalog units)
//! - quantity (unit-tagged text parsing into canonical catalog units)
//! - numeric (Real + tolerances + clamping/rounding helpers)
//! - ids (typed catalog identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod quantity;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PcError, PcResult};
pub use ids::*;
pub use numeric::*;
pub use quantity::{Quantity, UnitError, parse_quantity};
pub use units::*;
