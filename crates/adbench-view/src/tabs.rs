// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Overview,
    Platforms,
    Insights,
    Recommendations,
}

impl Tab {
    /// Display order of the tab strip.
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::Platforms,
        Self::Insights,
        Self::Recommendations,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Platforms => "platforms",
            Self::Insights => "insights",
            Self::Recommendations => "recommendations",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Platforms => "Platforms",
            Self::Insights => "Insights",
            Self::Recommendations => "Recommendations",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, UnknownTabError> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == raw)
            .ok_or_else(|| UnknownTabError(raw.to_string()))
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = UnknownTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTabError(pub String);

impl Display for UnknownTabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown tab `{}`; expected one of overview, platforms, insights, recommendations",
            self.0
        )
    }
}

impl std::error::Error for UnknownTabError {}

/// Which tab a display session is showing. Owned by the caller and handed
/// to [`crate::render`]; a fresh session starts on the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabSelector {
    active: Tab,
}

impl TabSelector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Tab::Overview,
        }
    }

    #[must_use]
    pub const fn starting_at(tab: Tab) -> Self {
        Self { active: tab }
    }

    #[must_use]
    pub const fn active(&self) -> Tab {
        self.active
    }

    /// Any tab can be selected from any other.
    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    #[must_use]
    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}
