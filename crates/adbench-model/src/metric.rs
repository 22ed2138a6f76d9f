// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::ids::{Identifier, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Currency {
    Usd,
    Sar,
}

impl Currency {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Sar => "SAR",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Unit {
    Percent,
    Currency,
    Ratio,
}

impl Unit {
    /// Suffix appended to a rendered value; currency amounts carry their code instead.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Currency => "",
            Self::Ratio => "x",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetterDirection {
    Higher,
    Lower,
}

impl BetterDirection {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim() {
            "higher" => Ok(Self::Higher),
            "lower" => Ok(Self::Lower),
            other => Err(ValidationError(format!(
                "better direction must be `higher` or `lower`, got `{other}`"
            ))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Higher => "higher",
            Self::Lower => "lower",
        }
    }
}

/// One measured value next to its industry reference.
///
/// A zero `measured_value` means the metric is not tracked. It stays a
/// plain number: comparisons treat it like any other value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricSample {
    pub metric: Identifier,
    pub measured_value: f64,
    pub benchmark_value: f64,
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    pub better_direction: BetterDirection,
}

impl MetricSample {
    pub fn new(
        metric: &str,
        measured_value: f64,
        benchmark_value: f64,
        unit: Unit,
        better_direction: BetterDirection,
    ) -> Result<Self, ValidationError> {
        let sample = Self {
            metric: Identifier::parse(metric)?,
            measured_value,
            benchmark_value,
            unit,
            currency: None,
            better_direction,
        };
        sample.validate()?;
        Ok(sample)
    }

    #[must_use]
    pub fn is_untracked(&self) -> bool {
        self.measured_value == 0.0
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.measured_value.is_finite() || self.measured_value < 0.0 {
            return Err(ValidationError(format!(
                "metric `{}` measured value must be finite and non-negative",
                self.metric
            )));
        }
        if !self.benchmark_value.is_finite() || self.benchmark_value <= 0.0 {
            return Err(ValidationError(format!(
                "metric `{}` benchmark must be finite and > 0",
                self.metric
            )));
        }
        if self.unit == Unit::Currency && self.currency.is_none() {
            return Err(ValidationError(format!(
                "metric `{}` is a currency amount and needs a currency",
                self.metric
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Money {
    pub amount: f64,
    pub currency: Currency,
}

impl Money {
    #[must_use]
    pub const fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn convert(self, rate: &CurrencyRate, target: Currency) -> Result<Self, ConversionError> {
        Ok(Self::new(rate.convert(self.amount, self.currency, target)?, target))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionError {
    pub from: Currency,
    pub to: Currency,
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "no conversion rate from {} to {}", self.from, self.to)
    }
}

impl std::error::Error for ConversionError {}

/// Fixed rate: one unit of `from` is worth `rate` units of `to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyRate {
    pub from: Currency,
    pub to: Currency,
    pub rate: f64,
}

impl CurrencyRate {
    pub fn new(from: Currency, to: Currency, rate: f64) -> Result<Self, ValidationError> {
        let out = Self { from, to, rate };
        out.validate()?;
        Ok(out)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(ValidationError(
                "currency rate must be finite and > 0".to_string(),
            ));
        }
        if self.from == self.to && self.rate != 1.0 {
            return Err(ValidationError(
                "currency rate between identical currencies must be 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn convert(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> Result<f64, ConversionError> {
        if from == to {
            Ok(amount)
        } else if from == self.from && to == self.to {
            Ok(amount * self.rate)
        } else if from == self.to && to == self.from {
            Ok(amount / self.rate)
        } else {
            Err(ConversionError { from, to })
        }
    }
}
