// SPDX-License-Identifier: Apache-2.0

use adbench_compare::{Badge, ComparisonResult, PlatformMetric};
use adbench_model::{
    ActionPhase, AllocationTarget, BetterDirection, ChartPoint, Currency, FooterData, Highlight,
    Insight, ScorePoint, SourceNote, Unit,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub your_value: f64,
    pub benchmark: f64,
    pub unit: Unit,
    pub suffix: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    pub better: BetterDirection,
    pub comparison: ComparisonResult,
    pub display_percent: i64,
    pub badge: Badge,
    pub untracked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformMetricEntry {
    pub metric: PlatformMetric,
    pub label: &'static str,
    pub measured: f64,
    pub benchmark: f64,
    pub unit: Unit,
    pub suffix: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    pub better: BetterDirection,
    pub comparison: ComparisonResult,
    pub display_percent: i64,
    pub badge: Badge,
    pub untracked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformBlock {
    pub name: String,
    pub title: String,
    pub currency: Currency,
    pub headline_roas: f64,
    pub revenue_tracked: bool,
    pub budget_share: f64,
    /// ROAS, CTR, CPA, budget share; always in that order.
    pub metrics: Vec<PlatformMetricEntry>,
    pub benchmark_source: String,
    pub assessment: Insight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendedFigure {
    pub value: f64,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub title: String,
    pub subtitle: String,
    pub headline: MetricCard,
    pub highlights: Vec<Highlight>,
    pub cards: Vec<MetricCard>,
    pub roas_comparison: Vec<ChartPoint>,
    pub ctr_comparison: Vec<ChartPoint>,
    pub cpa_comparison: Vec<ChartPoint>,
    pub performance_scores: Vec<ScorePoint>,
    pub market_notes: Vec<String>,
    pub market_commentary: String,
    pub blended_roas: BlendedFigure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformsView {
    pub platforms: Vec<PlatformBlock>,
    pub sources: Vec<SourceNote>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsView {
    pub strengths: Vec<Insight>,
    pub weaknesses: Vec<Insight>,
    pub competitive_position: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionCard {
    pub current_roas: f64,
    pub target_roas: f64,
    pub comparison: ComparisonResult,
    pub display_percent: i64,
    pub tiles: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationsView {
    pub title: String,
    pub phases: Vec<ActionPhase>,
    pub target_allocation: Vec<AllocationTarget>,
    pub projection: ProjectionCard,
    pub assumptions: Vec<String>,
    pub best_in_class: Vec<SourceNote>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    pub overview: OverviewView,
    pub platforms: PlatformsView,
    pub insights: InsightsView,
    pub recommendations: RecommendationsView,
    pub footer: FooterData,
}
