// SPDX-License-Identifier: Apache-2.0

use adbench_compare::{
    blended_roas, budget_shares, compare, compare_sample, PlatformMetric, PLATFORM_METRIC_RULES,
};
use adbench_model::{BenchmarkDataset, BetterDirection, MetricSample, PlatformProfile, PlatformRecord};

use crate::error::ViewError;
use crate::model::{
    BlendedFigure, DashboardViewModel, InsightsView, MetricCard, OverviewView, PlatformBlock,
    PlatformMetricEntry, PlatformsView, ProjectionCard, RecommendationsView,
};

/// Builds every tab's data from `dataset`.
///
/// Output order mirrors the dataset; nothing is ranked or filtered by value.
/// Status labels are copied from the dataset as authored.
pub fn assemble(dataset: &BenchmarkDataset) -> Result<DashboardViewModel, ViewError> {
    let span = tracing::info_span!("assemble_dashboard", title = %dataset.title);
    let _guard = span.enter();

    let overview = assemble_overview(dataset)?;
    let platforms = assemble_platforms(dataset)?;
    let insights = InsightsView {
        strengths: dataset.insights.strengths.clone(),
        weaknesses: dataset.insights.weaknesses.clone(),
        competitive_position: dataset.insights.competitive_position.clone(),
    };
    let recommendations = assemble_recommendations(dataset)?;

    tracing::debug!(
        cards = overview.cards.len(),
        platforms = platforms.platforms.len(),
        strengths = insights.strengths.len(),
        weaknesses = insights.weaknesses.len(),
        phases = recommendations.phases.len(),
        "dashboard assembled"
    );

    Ok(DashboardViewModel {
        overview,
        platforms,
        insights,
        recommendations,
        footer: dataset.footer.clone(),
    })
}

pub fn metric_card(sample: &MetricSample) -> Result<MetricCard, ViewError> {
    let comparison =
        compare_sample(sample).map_err(|e| ViewError::comparison(sample.metric.as_str(), e))?;
    Ok(MetricCard {
        title: sample.metric.as_str().to_string(),
        your_value: sample.measured_value,
        benchmark: sample.benchmark_value,
        unit: sample.unit,
        suffix: sample.unit.suffix(),
        currency: sample.currency,
        better: sample.better_direction,
        comparison,
        display_percent: comparison.display_percent(),
        badge: comparison.badge(sample.better_direction),
        untracked: sample.is_untracked(),
    })
}

fn assemble_overview(dataset: &BenchmarkDataset) -> Result<OverviewView, ViewError> {
    let overview = &dataset.overview;
    let cards = overview
        .cards
        .iter()
        .map(metric_card)
        .collect::<Result<Vec<_>, _>>()?;
    let target = dataset.currency_rate.to;
    let blended = blended_roas(&platform_records(dataset), &dataset.currency_rate, target)?;

    Ok(OverviewView {
        title: dataset.title.clone(),
        subtitle: dataset.subtitle.clone(),
        headline: metric_card(&overview.headline)?,
        highlights: overview.highlights.clone(),
        cards,
        roas_comparison: overview.roas_comparison.clone(),
        ctr_comparison: overview.ctr_comparison.clone(),
        cpa_comparison: overview.cpa_comparison.clone(),
        performance_scores: overview.performance_scores.clone(),
        market_notes: overview.market_notes.clone(),
        market_commentary: overview.market_commentary.clone(),
        blended_roas: BlendedFigure {
            value: blended,
            currency: target,
        },
    })
}

fn platform_records(dataset: &BenchmarkDataset) -> Vec<PlatformRecord> {
    dataset
        .platforms
        .iter()
        .map(|p| p.record.clone())
        .collect()
}

fn assemble_platforms(dataset: &BenchmarkDataset) -> Result<PlatformsView, ViewError> {
    let shares = budget_shares(
        &platform_records(dataset),
        &dataset.currency_rate,
        dataset.currency_rate.to,
    )?;
    let platforms = dataset
        .platforms
        .iter()
        .zip(shares)
        .map(|(profile, share)| {
            platform_block(profile, share, dataset.concentration_cap_percent)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PlatformsView {
        platforms,
        sources: dataset.sources.clone(),
    })
}

fn platform_block(
    profile: &PlatformProfile,
    budget_share: f64,
    concentration_cap: f64,
) -> Result<PlatformBlock, ViewError> {
    let record = &profile.record;
    let metrics = PLATFORM_METRIC_RULES
        .iter()
        .map(|rule| -> Result<PlatformMetricEntry, ViewError> {
            let (measured, benchmark) =
                rule.metric.values(profile, budget_share, concentration_cap);
            let comparison = compare(measured, benchmark, rule.direction).map_err(|e| {
                ViewError::comparison(format!("{} {}", record.name, rule.label), e)
            })?;
            let (currency, note) = match rule.metric {
                PlatformMetric::Cpa => (Some(record.currency), None),
                PlatformMetric::BudgetShare => (None, profile.budget_note.clone()),
                PlatformMetric::Roas | PlatformMetric::Ctr => (None, None),
            };
            Ok(PlatformMetricEntry {
                metric: rule.metric,
                label: rule.label,
                measured,
                benchmark,
                unit: rule.unit,
                suffix: rule.unit.suffix(),
                currency,
                better: rule.direction,
                comparison,
                display_percent: comparison.display_percent(),
                badge: comparison.badge(rule.direction),
                untracked: measured == 0.0,
                note,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlatformBlock {
        name: record.name.as_str().to_string(),
        title: profile.title().to_string(),
        currency: record.currency,
        headline_roas: record.roas,
        revenue_tracked: !record.is_revenue_untracked(),
        budget_share,
        metrics,
        benchmark_source: profile.benchmark.source.clone(),
        assessment: profile.assessment.clone(),
    })
}

fn assemble_recommendations(dataset: &BenchmarkDataset) -> Result<RecommendationsView, ViewError> {
    let recs = &dataset.recommendations;
    let projection = &recs.projection;
    let comparison = compare(
        projection.target_roas,
        projection.current_roas,
        BetterDirection::Higher,
    )
    .map_err(|e| ViewError::comparison("ROAS projection", e))?;

    Ok(RecommendationsView {
        title: recs.title.clone(),
        phases: recs.phases.clone(),
        target_allocation: recs.target_allocation.clone(),
        projection: ProjectionCard {
            current_roas: projection.current_roas,
            target_roas: projection.target_roas,
            comparison,
            display_percent: comparison.display_percent(),
            tiles: projection.tiles.clone(),
        },
        assumptions: recs.assumptions.clone(),
        best_in_class: recs.best_in_class.clone(),
    })
}
