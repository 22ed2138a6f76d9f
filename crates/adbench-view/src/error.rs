// SPDX-License-Identifier: Apache-2.0

use adbench_compare::{AggregateError, InvalidBenchmarkError};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ViewError {
    Comparison {
        entry: String,
        source: InvalidBenchmarkError,
    },
    Aggregate(AggregateError),
}

impl ViewError {
    pub(crate) fn comparison(entry: impl Into<String>, source: InvalidBenchmarkError) -> Self {
        Self::Comparison {
            entry: entry.into(),
            source,
        }
    }
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Comparison { entry, source } => write!(f, "{entry}: {source}"),
            Self::Aggregate(err) => write!(f, "aggregate spend failed: {err}"),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Comparison { source, .. } => Some(source),
            Self::Aggregate(err) => Some(err),
        }
    }
}

impl From<AggregateError> for ViewError {
    fn from(value: AggregateError) -> Self {
        Self::Aggregate(value)
    }
}
