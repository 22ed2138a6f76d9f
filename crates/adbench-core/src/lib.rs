// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Shared plumbing for the adbench crates: exit codes, structured errors,
//! canonical JSON hashing and config path resolution.

pub mod canonical;
mod config;
mod errors;

pub use config::{resolve_config_path, resolve_config_path_with, ConfigPathScope};
pub use errors::{ErrorContext, ExitCode, MachineError, ResultExt};

pub const CRATE_NAME: &str = "adbench-core";

pub const ENV_ADBENCH_LOG_LEVEL: &str = "ADBENCH_LOG_LEVEL";
pub const ENV_ADBENCH_LOG_JSON: &str = "ADBENCH_LOG_JSON";
pub const ENV_ADBENCH_DATASET: &str = "ADBENCH_DATASET";
pub const ENV_ADBENCH_CONFIG: &str = "ADBENCH_CONFIG";
