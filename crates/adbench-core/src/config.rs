// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use crate::ENV_ADBENCH_CONFIG;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigPathScope {
    User,
    Workspace,
}

impl ConfigPathScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Workspace => "workspace",
        }
    }
}

#[must_use]
pub fn resolve_config_path(scope: ConfigPathScope) -> PathBuf {
    resolve_config_path_with(scope, |key| std::env::var(key).ok())
}

/// Same as [`resolve_config_path`] with an injectable environment lookup.
#[must_use]
pub fn resolve_config_path_with<F>(scope: ConfigPathScope, env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| {
        env(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    match scope {
        ConfigPathScope::User => {
            if let Some(explicit) = non_empty(ENV_ADBENCH_CONFIG) {
                return PathBuf::from(explicit);
            }
            if let Some(xdg_config_home) = non_empty("XDG_CONFIG_HOME") {
                return PathBuf::from(xdg_config_home)
                    .join("adbench")
                    .join("config.toml");
            }
            if let Some(home) = non_empty("HOME") {
                return PathBuf::from(home)
                    .join(".config")
                    .join("adbench")
                    .join("config.toml");
            }
            PathBuf::from(".adbench").join("config.toml")
        }
        ConfigPathScope::Workspace => PathBuf::from(".adbench").join("config.toml"),
    }
}
