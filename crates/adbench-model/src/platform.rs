// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::ids::{Identifier, ValidationError};
use crate::metric::{Currency, Money};
use crate::narrative::Insight;

/// Measured performance of one ad channel, in the channel's reporting currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformRecord {
    pub name: Identifier,
    pub roas: f64,
    pub ctr: f64,
    pub cpa: f64,
    pub spend: Money,
    pub currency: Currency,
}

impl PlatformRecord {
    pub fn new(
        name: &str,
        roas: f64,
        ctr: f64,
        cpa: f64,
        spend: Money,
    ) -> Result<Self, ValidationError> {
        let record = Self {
            name: Identifier::parse(name)?,
            roas,
            ctr,
            cpa,
            currency: spend.currency,
            spend,
        };
        record.validate()?;
        Ok(record)
    }

    /// Zero ROAS means revenue is not tracked on this channel.
    #[must_use]
    pub fn is_revenue_untracked(&self) -> bool {
        self.roas == 0.0
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("roas", self.roas),
            ("ctr", self.ctr),
            ("cpa", self.cpa),
            ("spend", self.spend.amount),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError(format!(
                    "platform `{}` {field} must be finite and non-negative",
                    self.name
                )));
            }
        }
        if self.spend.currency != self.currency {
            return Err(ValidationError(format!(
                "platform `{}` spend is in {} but the record reports in {}",
                self.name, self.spend.currency, self.currency
            )));
        }
        Ok(())
    }
}

/// Industry reference values for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformBenchmark {
    pub roas: f64,
    pub ctr: f64,
    pub cpa: f64,
    pub source: String,
}

impl PlatformBenchmark {
    pub fn validate(&self, platform: &Identifier) -> Result<(), ValidationError> {
        for (field, value) in [("roas", self.roas), ("ctr", self.ctr), ("cpa", self.cpa)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError(format!(
                    "platform `{platform}` benchmark {field} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformProfile {
    pub record: PlatformRecord,
    pub benchmark: PlatformBenchmark,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_note: Option<String>,
    pub assessment: Insight,
}

impl PlatformProfile {
    #[must_use]
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.record.name.as_str())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.record.validate()?;
        self.benchmark.validate(&self.record.name)
    }
}
