// SPDX-License-Identifier: Apache-2.0

use adbench_model::{BetterDirection, MetricSample};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidBenchmarkError {
    pub benchmark: f64,
}

impl Display for InvalidBenchmarkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "benchmark value {} cannot be compared against; it must be finite and non-zero",
            self.benchmark
        )
    }
}

impl std::error::Error for InvalidBenchmarkError {}

/// Outcome of comparing one measured value with its benchmark.
///
/// `percent_delta` is kept at full precision; only [`Self::display_percent`]
/// rounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonResult {
    pub percent_delta: f64,
    pub favorable: bool,
}

impl ComparisonResult {
    /// Integer percentage for display, rounded half away from zero.
    #[must_use]
    pub fn display_percent(&self) -> i64 {
        self.percent_delta.round() as i64
    }

    #[must_use]
    pub fn magnitude_percent(&self) -> i64 {
        self.display_percent().abs()
    }

    #[must_use]
    pub const fn tone(&self) -> Tone {
        if self.favorable {
            Tone::Positive
        } else {
            Tone::Caution
        }
    }

    /// Caption shown under a metric card, e.g. `492% above benchmark`.
    #[must_use]
    pub fn badge(&self, direction: BetterDirection) -> Badge {
        let word = match (self.favorable, direction) {
            (true, BetterDirection::Higher) | (false, BetterDirection::Lower) => "above",
            _ => "below",
        };
        Badge {
            tone: self.tone(),
            text: format!("{}% {word} benchmark", self.magnitude_percent()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Caution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Badge {
    pub tone: Tone,
    pub text: String,
}

/// Compares `measured` with `benchmark` under the given direction.
///
/// A zero `measured` is ordinary input: with a lower-is-better direction it
/// reads as favorable even when it means "not tracked".
pub fn compare(
    measured: f64,
    benchmark: f64,
    direction: BetterDirection,
) -> Result<ComparisonResult, InvalidBenchmarkError> {
    if benchmark == 0.0 || !benchmark.is_finite() {
        return Err(InvalidBenchmarkError { benchmark });
    }
    let percent_delta = (measured - benchmark) / benchmark * 100.0;
    let favorable = match direction {
        BetterDirection::Higher => measured > benchmark,
        BetterDirection::Lower => measured < benchmark,
    };
    Ok(ComparisonResult {
        percent_delta,
        favorable,
    })
}

pub fn compare_sample(sample: &MetricSample) -> Result<ComparisonResult, InvalidBenchmarkError> {
    compare(
        sample.measured_value,
        sample.benchmark_value,
        sample.better_direction,
    )
}
