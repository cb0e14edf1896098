//! pc-perf: performance estimation for configured industrial equipment.
//!
//! Maps a [`ProductConfiguration`] (category, application, flow rate,
//! pressure, temperature) to [`PerformanceMetrics`]:
//! - Metric calculators: efficiency, power draw, noise, load-performance curve
//! - Alternatives selector over the injected catalog
//! - Aggregator deriving maintenance interval, lifetime and threshold flags
//! - Comparison scores and summary recommendation
//!
//! The formulas are heuristic, bounded calibration curves rather than
//! first-principles fluid dynamics. Every function here is pure: no state is
//! kept between calls, so evaluations can run concurrently without
//! coordination.
//!
//! # Example
//!
//! ```no_run
//! use pc_catalog::sample_catalog;
//! use pc_core::{ApplicationTypeId, CategoryId};
//! use pc_perf::{ProductConfiguration, calculate_performance_metrics};
//!
//! let catalog = sample_catalog().unwrap();
//! let config = ProductConfiguration {
//!     category_id: CategoryId::new(1),
//!     application_type: ApplicationTypeId::new(1),
//!     flow_rate: 200.0,
//!     pressure: 5.0,
//!     temperature: 45.0,
//! };
//!
//! let metrics = calculate_performance_metrics(&config, catalog.products());
//! println!("Efficiency: {}%", metrics.efficiency);
//! ```

pub mod aggregator;
pub mod alternatives;
pub mod application;
pub mod calculator;
pub mod compare;
pub mod config;
pub mod metrics;
pub mod summary;

// Re-exports for ergonomics
pub use aggregator::{
    BASELINE_EFFICIENCY, LOAD_POINTS, calculate_performance_metrics, estimated_lifetime,
    maintenance_interval, performance_by_load,
};
pub use alternatives::{ALTERNATIVE_COUNT, WORKING_FLOW_FRACTION, select_alternatives};
pub use application::ApplicationKind;
pub use calculator::{calculate_efficiency, calculate_noise, calculate_power, load_performance};
pub use compare::{ComparisonScores, compare_alternatives};
pub use config::ProductConfiguration;
pub use metrics::{AlternativeProduct, LoadPoint, PerformanceMetrics};
pub use summary::Recommendation;
