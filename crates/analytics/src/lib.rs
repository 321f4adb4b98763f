//! # Financial Metrics Transform
//!
//! This crate derives growth, margin, liquidity, leverage and efficiency ratios
//! from a company's per-year financial statements.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O and no knowledge of how the numbers are displayed.
//!   It depends only on `core-types`.
//! - **Stateless Calculation:** [`calculate_metrics`] maps an ordered slice of
//!   `RawYearRecord`s to a freshly allocated `Vec<EnrichedYearRecord>`. Calling it
//!   twice on the same input yields identical output.
//! - **Non-finite propagation:** A zero denominator yields `inf` or `NaN` rather
//!   than an error. [`AnalyticsEngine`] in [`MetricsMode::Strict`] is the opt-in
//!   path that reports such inputs as an [`AnalyticsError`] instead.
//!
//! ## Public API
//!
//! - `calculate_metrics`: The lenient transform.
//! - `AnalyticsEngine` / `MetricsMode`: Lenient or strict calculation.
//! - `EnrichedYearRecord`: A raw record plus its derived ratios.
//! - `Metric`: Names and units of the derived fields.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod metric;
pub mod record;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, MetricsMode, calculate_metrics};
pub use error::AnalyticsError;
pub use metric::{Metric, MetricUnit};
pub use record::{EnrichedYearRecord, latest, prior};
