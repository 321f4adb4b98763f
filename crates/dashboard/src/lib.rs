//! # Dashboard
//!
//! The presentation layer. It reads the enriched rows produced by `analytics`
//! and turns them into KPI cards, per-chart series tables and short insights,
//! rendered for the terminal with `comfy-table`. Nothing here feeds back into
//! the calculation; all rounding and unit switching happens in [`format`].

pub mod error;
pub mod format;
pub mod insights;
pub mod kpi;
pub mod render;
pub mod sections;
pub mod view;

pub use error::DashboardError;
pub use format::FormatOptions;
pub use kpi::{KpiCard, Trend};
pub use render::{render_dashboard, render_metrics_json, render_metrics_table};
pub use view::{DashboardView, calculate};
