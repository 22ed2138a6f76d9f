// SPDX-License-Identifier: Apache-2.0

use adbench_core::{ENV_ADBENCH_LOG_JSON, ENV_ADBENCH_LOG_LEVEL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug)]
pub(crate) struct LogFlags {
    pub quiet: bool,
    pub verbose: u8,
    pub trace: bool,
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

/// Flags beat `ADBENCH_LOG_LEVEL`, which beats `RUST_LOG`. Default is `warn`
/// so stdout stays clean for piping.
pub(crate) fn filter_directive(flags: LogFlags, env_level: Option<&str>) -> Option<String> {
    if flags.trace {
        Some("trace".to_string())
    } else if flags.verbose > 1 {
        Some("trace".to_string())
    } else if flags.verbose == 1 {
        Some("debug".to_string())
    } else if flags.quiet {
        Some("error".to_string())
    } else {
        env_level
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
    }
}

pub(crate) fn init_logging(flags: LogFlags) {
    let env_level = std::env::var(ENV_ADBENCH_LOG_LEVEL).ok();
    let filter = match filter_directive(flags, env_level.as_deref()) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let result = if env_bool(ENV_ADBENCH_LOG_JSON, false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
