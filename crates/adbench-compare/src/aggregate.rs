// SPDX-License-Identifier: Apache-2.0

//! Cross-currency figures. Every spend is converted into one target
//! currency before it is summed.

use adbench_model::{ConversionError, Currency, CurrencyRate, PlatformRecord};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AggregateError {
    Conversion(ConversionError),
    ZeroSpend,
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conversion(err) => write!(f, "{err}"),
            Self::ZeroSpend => f.write_str("total spend is zero; shares are undefined"),
        }
    }
}

impl std::error::Error for AggregateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Conversion(err) => Some(err),
            Self::ZeroSpend => None,
        }
    }
}

impl From<ConversionError> for AggregateError {
    fn from(value: ConversionError) -> Self {
        Self::Conversion(value)
    }
}

pub fn converted_spend(
    records: &[PlatformRecord],
    rate: &CurrencyRate,
    target: Currency,
) -> Result<Vec<f64>, AggregateError> {
    records
        .iter()
        .map(|r| {
            r.spend
                .convert(rate, target)
                .map(|money| money.amount)
                .map_err(AggregateError::from)
        })
        .collect()
}

/// Percentage of total spend per record, in input order.
pub fn budget_shares(
    records: &[PlatformRecord],
    rate: &CurrencyRate,
    target: Currency,
) -> Result<Vec<f64>, AggregateError> {
    let spend = converted_spend(records, rate, target)?;
    let total: f64 = spend.iter().sum();
    if total <= 0.0 {
        return Err(AggregateError::ZeroSpend);
    }
    Ok(spend.into_iter().map(|s| s / total * 100.0).collect())
}

/// Spend-weighted ROAS across all records.
pub fn blended_roas(
    records: &[PlatformRecord],
    rate: &CurrencyRate,
    target: Currency,
) -> Result<f64, AggregateError> {
    let spend = converted_spend(records, rate, target)?;
    let total: f64 = spend.iter().sum();
    if total <= 0.0 {
        return Err(AggregateError::ZeroSpend);
    }
    let revenue: f64 = records
        .iter()
        .zip(&spend)
        .map(|(record, spend)| record.roas * spend)
        .sum();
    Ok(revenue / total)
}
