// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Data model for benchmark dashboards.
//!
//! A [`BenchmarkDataset`] is loaded once, validated, and never mutated.
//!
//! ```compile_fail
//! use adbench_model::InsightStatus;
//!
//! fn exhaustive_match(s: InsightStatus) -> &'static str {
//!     match s {
//!         InsightStatus::Excellent => "e",
//!         InsightStatus::Good => "g",
//!         InsightStatus::Warning => "w",
//!         InsightStatus::Critical => "c",
//!     }
//! }
//! ```

mod chart;
mod dataset;
mod ids;
mod metric;
mod narrative;
mod platform;

pub use chart::{ChartPoint, ScorePoint};
pub use dataset::{
    BenchmarkDataset, DatasetFormat, FooterData, InsightData, LoadError, OverviewData,
    Projection, RecommendationData, ALLOCATION_TOLERANCE,
};
pub use ids::{Identifier, ValidationError, IDENTIFIER_MAX_LEN};
pub use metric::{BetterDirection, ConversionError, Currency, CurrencyRate, MetricSample, Money, Unit};
pub use narrative::{
    ActionItem, ActionPhase, AllocationTarget, Highlight, Insight, InsightStatus, SourceNote,
    Urgency,
};
pub use platform::{PlatformBenchmark, PlatformProfile, PlatformRecord};

pub const CRATE_NAME: &str = "adbench-model";
