// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Turns a [`adbench_model::BenchmarkDataset`] into the data each dashboard
//! tab displays, and picks the section for the active tab.
//!
//! ```
//! use adbench_model::BenchmarkDataset;
//! use adbench_view::{assemble, render, Tab, TabSelector};
//!
//! let dataset = BenchmarkDataset::builtin().unwrap();
//! let view_model = assemble(&dataset).unwrap();
//! let mut selector = TabSelector::new();
//! selector.select(Tab::Platforms);
//! assert_eq!(render(&view_model, &selector).section.tab(), Tab::Platforms);
//! ```

mod assemble;
mod error;
mod model;
mod render;
mod tabs;

pub use assemble::{assemble, metric_card};
pub use error::ViewError;
pub use model::{
    BlendedFigure, DashboardViewModel, InsightsView, MetricCard, OverviewView, PlatformBlock,
    PlatformMetricEntry, PlatformsView, ProjectionCard, RecommendationsView,
};
pub use render::{render, ActiveSection, RenderedView, TabEntry};
pub use tabs::{Tab, TabSelector, UnknownTabError};

pub const CRATE_NAME: &str = "adbench-view";
