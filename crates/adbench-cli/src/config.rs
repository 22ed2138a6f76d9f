// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use adbench_core::{resolve_config_path, ConfigPathScope, ENV_ADBENCH_DATASET};
use adbench_view::Tab;
use serde::Deserialize;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CliConfig {
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    #[serde(default)]
    pub default_tab: Option<Tab>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadedConfig {
    pub config: CliConfig,
    pub path: Option<PathBuf>,
}

/// Workspace config shadows the user config; only the first existing file is read.
pub(crate) fn load_config() -> Result<LoadedConfig, String> {
    for scope in [ConfigPathScope::Workspace, ConfigPathScope::User] {
        let path = resolve_config_path(scope);
        if path.is_file() {
            let config = read_config(&path)?;
            tracing::debug!(path = %path.display(), scope = scope.as_str(), "config loaded");
            return Ok(LoadedConfig {
                config,
                path: Some(path),
            });
        }
    }
    Ok(LoadedConfig {
        config: CliConfig::default(),
        path: None,
    })
}

pub(crate) fn read_config(path: &Path) -> Result<CliConfig, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;
    toml::from_str(&raw).map_err(|e| format!("failed to parse config {}: {e}", path.display()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DatasetSource {
    Flag(PathBuf),
    Env(PathBuf),
    Config(PathBuf),
    Builtin,
}

impl DatasetSource {
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Flag(path) | Self::Env(path) | Self::Config(path) => path.display().to_string(),
            Self::Builtin => "builtin".to_string(),
        }
    }

    pub(crate) const fn origin(&self) -> &'static str {
        match self {
            Self::Flag(_) => "flag",
            Self::Env(_) => "env",
            Self::Config(_) => "config",
            Self::Builtin => "builtin",
        }
    }
}

/// `--dataset` beats `ADBENCH_DATASET`, which beats the config file.
pub(crate) fn resolve_dataset_source(flag: Option<PathBuf>, config: &CliConfig) -> DatasetSource {
    if let Some(path) = flag {
        return DatasetSource::Flag(path);
    }
    if let Some(path) = std::env::var(ENV_ADBENCH_DATASET)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        return DatasetSource::Env(PathBuf::from(path));
    }
    if let Some(path) = &config.dataset {
        return DatasetSource::Config(path.clone());
    }
    DatasetSource::Builtin
}
