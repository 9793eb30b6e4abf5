//! # Canopy Analytics Engine
//!
//! This crate turns a validated emissions `Dataset` into descriptive
//! statistics, a trend, a tree-offset estimate, the analysis insight set and
//! the chart series shown by the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O and no knowledge of how the dataset was obtained.
//!   It depends only on `core-types`.
//! - **Stateless calculation:** `MetricsEngine` holds no state. Every
//!   operation is a pure function of its input, so results can be recomputed
//!   at any time and replace earlier ones.
//! - **Total operations:** nothing here fails on a validated dataset. The rich
//!   analysis path can fail internally, but `build_analysis` downgrades that
//!   to the fallback path.
//!
//! ## Public API
//!
//! - `MetricsEngine`: summary, trend, tree impact and analysis construction.
//! - `grouping`: per-country and per-year totals shared by engine and charts.
//! - `series`: the four chart series.
//! - `report`: the serializable result structs.

pub mod engine;
pub mod error;
pub mod grouping;
pub mod report;
pub mod series;

pub use engine::MetricsEngine;
pub use error::AnalyticsError;
pub use report::{
    AnalysisResult, CountryTotal, SectorPriorities, Summary, TreeImpact, TrendResult, YearSpan,
    YearTotal,
};
pub use series::{ChartSeries, ChartSet, SeriesPoint};
