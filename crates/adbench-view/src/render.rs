// SPDX-License-Identifier: Apache-2.0

use adbench_model::FooterData;
use serde::Serialize;

use crate::model::{
    DashboardViewModel, InsightsView, OverviewView, PlatformsView, RecommendationsView,
};
use crate::tabs::{Tab, TabSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum ActiveSection<'a> {
    Overview(&'a OverviewView),
    Platforms(&'a PlatformsView),
    Insights(&'a InsightsView),
    Recommendations(&'a RecommendationsView),
}

impl ActiveSection<'_> {
    #[must_use]
    pub const fn tab(&self) -> Tab {
        match self {
            Self::Overview(_) => Tab::Overview,
            Self::Platforms(_) => Tab::Platforms,
            Self::Insights(_) => Tab::Insights,
            Self::Recommendations(_) => Tab::Recommendations,
        }
    }
}

/// One frame of the dashboard: the tab strip, the selected section and the footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedView<'a> {
    pub active: Tab,
    pub tabs: Vec<TabEntry>,
    pub section: ActiveSection<'a>,
    pub footer: &'a FooterData,
}

#[must_use]
pub fn render<'a>(view_model: &'a DashboardViewModel, selector: &TabSelector) -> RenderedView<'a> {
    let active = selector.active();
    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| TabEntry {
            tab,
            label: tab.label(),
            active: selector.is_active(tab),
        })
        .collect();
    let section = match active {
        Tab::Overview => ActiveSection::Overview(&view_model.overview),
        Tab::Platforms => ActiveSection::Platforms(&view_model.platforms),
        Tab::Insights => ActiveSection::Insights(&view_model.insights),
        Tab::Recommendations => ActiveSection::Recommendations(&view_model.recommendations),
    };
    RenderedView {
        active,
        tabs,
        section,
        footer: &view_model.footer,
    }
}
