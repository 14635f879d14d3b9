//! risk-chart: headless "Risk Distribution Delta" bar chart.
//!
//! Maps shock-scenario sector risk results into baseline-vs-shocked chart rows
//! and lays them out as a backend-agnostic render frame.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RiskChart, RiskChartConfig, RiskChartStyle};
pub use error::{RiskChartError, RiskChartResult};
