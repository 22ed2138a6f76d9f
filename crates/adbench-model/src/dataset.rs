// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::chart::{ChartPoint, ScorePoint};
use crate::ids::ValidationError;
use crate::metric::{CurrencyRate, MetricSample};
use crate::narrative::{ActionPhase, AllocationTarget, Highlight, Insight, SourceNote};
use crate::platform::PlatformProfile;

const BUILTIN_DATASET_JSON: &str = include_str!("../data/ksa_charity.json");

/// Tolerance for the target allocation summing to 100 percent.
pub const ALLOCATION_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverviewData {
    pub headline: MetricSample,
    pub cards: Vec<MetricSample>,
    pub highlights: Vec<Highlight>,
    pub roas_comparison: Vec<ChartPoint>,
    pub ctr_comparison: Vec<ChartPoint>,
    pub cpa_comparison: Vec<ChartPoint>,
    pub performance_scores: Vec<ScorePoint>,
    pub market_notes: Vec<String>,
    #[serde(default)]
    pub market_commentary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsightData {
    pub strengths: Vec<Insight>,
    pub weaknesses: Vec<Insight>,
    pub competitive_position: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Projection {
    pub current_roas: f64,
    pub target_roas: f64,
    pub tiles: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationData {
    pub title: String,
    pub phases: Vec<ActionPhase>,
    pub target_allocation: Vec<AllocationTarget>,
    pub projection: Projection,
    pub assumptions: Vec<String>,
    pub best_in_class: Vec<SourceNote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterData {
    pub summary: String,
    pub tiles: Vec<Highlight>,
}

/// Everything a dashboard shows, fixed at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkDataset {
    pub title: String,
    pub subtitle: String,
    pub currency_rate: CurrencyRate,
    pub concentration_cap_percent: f64,
    pub overview: OverviewData,
    pub platforms: Vec<PlatformProfile>,
    pub sources: Vec<SourceNote>,
    pub insights: InsightData,
    pub recommendations: RecommendationData,
    pub footer: FooterData,
}

impl BenchmarkDataset {
    /// The KSA charity dataset shipped with the crate.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json_str(BUILTIN_DATASET_JSON)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        let dataset: Self = serde_json::from_str(raw).map_err(|e| LoadError::Parse {
            format: DatasetFormat::Json,
            message: e.to_string(),
        })?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, LoadError> {
        let dataset: Self = serde_yaml::from_str(raw).map_err(|e| LoadError::Parse {
            format: DatasetFormat::Yaml,
            message: e.to_string(),
        })?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let format = DatasetFormat::from_path(path)?;
        let raw = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        match format {
            DatasetFormat::Json => Self::from_json_str(&raw),
            DatasetFormat::Yaml => Self::from_yaml_str(&raw),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.currency_rate.validate()?;
        if !self.concentration_cap_percent.is_finite()
            || self.concentration_cap_percent <= 0.0
            || self.concentration_cap_percent > 100.0
        {
            return Err(ValidationError(
                "concentration_cap_percent must be in (0, 100]".to_string(),
            ));
        }

        self.overview.headline.validate()?;
        for card in &self.overview.cards {
            card.validate()?;
        }
        for point in self
            .overview
            .roas_comparison
            .iter()
            .chain(&self.overview.ctr_comparison)
            .chain(&self.overview.cpa_comparison)
        {
            validate_chart_point(point)?;
        }
        for score in &self.overview.performance_scores {
            for value in [score.yours, score.benchmark] {
                if !(0.0..=100.0).contains(&value) {
                    return Err(ValidationError(format!(
                        "performance score `{}` must be within 0..=100",
                        score.category
                    )));
                }
            }
        }

        if self.platforms.is_empty() {
            return Err(ValidationError(
                "dataset must contain at least one platform".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for profile in &self.platforms {
            profile.validate()?;
            if !seen.insert(profile.record.name.as_str()) {
                return Err(ValidationError(format!(
                    "duplicate platform `{}`",
                    profile.record.name
                )));
            }
            let currency = profile.record.currency;
            if currency != self.currency_rate.from && currency != self.currency_rate.to {
                return Err(ValidationError(format!(
                    "platform `{}` reports in {currency}, which currency_rate {} -> {} does not cover",
                    profile.record.name, self.currency_rate.from, self.currency_rate.to
                )));
            }
        }
        // Budget shares divide by total spend.
        if self.platforms.iter().all(|p| p.record.spend.amount == 0.0) {
            return Err(ValidationError(
                "total platform spend must be > 0".to_string(),
            ));
        }

        let projection = &self.recommendations.projection;
        for (field, value) in [
            ("current_roas", projection.current_roas),
            ("target_roas", projection.target_roas),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError(format!(
                    "projection {field} must be finite and > 0"
                )));
            }
        }

        let allocation = &self.recommendations.target_allocation;
        if !allocation.is_empty() {
            if allocation.iter().any(|t| !t.percent.is_finite() || t.percent < 0.0) {
                return Err(ValidationError(
                    "target allocation percentages must be non-negative".to_string(),
                ));
            }
            let total: f64 = allocation.iter().map(|t| t.percent).sum();
            if (total - 100.0).abs() > ALLOCATION_TOLERANCE {
                return Err(ValidationError(format!(
                    "target allocation must sum to 100, got {total}"
                )));
            }
        }
        Ok(())
    }
}

fn validate_chart_point(point: &ChartPoint) -> Result<(), ValidationError> {
    for value in [point.benchmark, point.yours] {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError(format!(
                "chart point `{}` values must be finite and non-negative",
                point.metric
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    Io { path: String, message: String },
    UnsupportedFormat(String),
    Parse { format: DatasetFormat, message: String },
    Validation(ValidationError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "read dataset {path} failed: {message}"),
            Self::UnsupportedFormat(path) => {
                write!(f, "dataset {path} must end in .json, .yaml or .yml")
            }
            Self::Parse { format, message } => {
                write!(f, "dataset {} decode failed: {message}", format.as_str())
            }
            Self::Validation(err) => write!(f, "dataset rejected: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for LoadError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
