// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Row consumed by bar charts. Field names are part of the charting contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartPoint {
    pub metric: String,
    pub benchmark: f64,
    pub yours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ChartPoint {
    #[must_use]
    pub fn new(metric: &str, benchmark: f64, yours: f64) -> Self {
        Self {
            metric: metric.to_string(),
            benchmark,
            yours,
            platform: None,
            currency: None,
        }
    }
}

/// Row consumed by the radar chart, scores on a 0..=100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScorePoint {
    pub category: String,
    pub yours: f64,
    pub benchmark: f64,
}
