// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod aggregate;
mod engine;
mod rules;

pub use aggregate::{blended_roas, budget_shares, converted_spend, AggregateError};
pub use engine::{
    compare, compare_sample, Badge, ComparisonResult, InvalidBenchmarkError, Tone,
};
pub use rules::{MetricRule, PlatformMetric, PLATFORM_METRIC_RULES};

pub const CRATE_NAME: &str = "adbench-compare";
