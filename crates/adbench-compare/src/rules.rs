// SPDX-License-Identifier: Apache-2.0

use adbench_model::{BetterDirection, PlatformProfile, Unit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformMetric {
    Roas,
    Ctr,
    Cpa,
    BudgetShare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRule {
    pub metric: PlatformMetric,
    pub label: &'static str,
    pub unit: Unit,
    pub direction: BetterDirection,
}

/// Metrics shown for every platform, in display order.
pub const PLATFORM_METRIC_RULES: &[MetricRule] = &[
    MetricRule {
        metric: PlatformMetric::Roas,
        label: "ROAS",
        unit: Unit::Ratio,
        direction: BetterDirection::Higher,
    },
    MetricRule {
        metric: PlatformMetric::Ctr,
        label: "CTR",
        unit: Unit::Percent,
        direction: BetterDirection::Higher,
    },
    MetricRule {
        metric: PlatformMetric::Cpa,
        label: "CPA",
        unit: Unit::Currency,
        direction: BetterDirection::Lower,
    },
    MetricRule {
        metric: PlatformMetric::BudgetShare,
        label: "Budget Share",
        unit: Unit::Percent,
        direction: BetterDirection::Lower,
    },
];

impl PlatformMetric {
    /// Measured and reference values for this metric. Budget share is not
    /// stored on the profile, so the caller supplies it with the cap.
    #[must_use]
    pub fn values(
        self,
        profile: &PlatformProfile,
        budget_share: f64,
        concentration_cap: f64,
    ) -> (f64, f64) {
        match self {
            Self::Roas => (profile.record.roas, profile.benchmark.roas),
            Self::Ctr => (profile.record.ctr, profile.benchmark.ctr),
            Self::Cpa => (profile.record.cpa, profile.benchmark.cpa),
            Self::BudgetShare => (budget_share, concentration_cap),
        }
    }
}
