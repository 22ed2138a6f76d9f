// SPDX-License-Identifier: Apache-2.0

use adbench_core::{ExitCode, MachineError, ResultExt};
use adbench_model::LoadError;
use serde::Serialize;

#[derive(Clone, Copy, Debug)]
pub(crate) struct OutputMode {
    pub json: bool,
}

pub(crate) fn emit_ok<T: Serialize>(output_mode: OutputMode, payload: &T) -> Result<(), CliError> {
    let text = if output_mode.json {
        serde_json::to_string(payload)
    } else {
        serde_json::to_string_pretty(payload)
    }
    .with_context("encode command output")
    .map_err(|e| CliError::internal(e.to_string()))?;
    println!("{text}");
    Ok(())
}

#[derive(Debug)]
pub(crate) struct CliError {
    pub exit_code: ExitCode,
    pub machine: MachineError,
}

impl CliError {
    pub(crate) fn usage(message: &str) -> Self {
        Self {
            exit_code: ExitCode::Usage,
            machine: MachineError::new("usage_error", message),
        }
    }

    pub(crate) fn validation(message: String) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            machine: MachineError::new("validation_error", &message),
        }
    }

    pub(crate) fn internal(message: String) -> Self {
        Self {
            exit_code: ExitCode::Internal,
            machine: MachineError::new("internal_error", &message),
        }
    }

    pub(crate) fn dependency(message: String) -> Self {
        Self {
            exit_code: ExitCode::DependencyFailure,
            machine: MachineError::new("dependency_failure", &message),
        }
    }

    pub(crate) fn from_load(err: &LoadError, source: &str) -> Self {
        let base = match err {
            LoadError::Io { .. } => Self::dependency(err.to_string()),
            LoadError::UnsupportedFormat(_) => Self {
                exit_code: ExitCode::Usage,
                machine: MachineError::new("usage_error", &err.to_string()),
            },
            _ => Self::validation(err.to_string()),
        };
        base.with_detail("dataset", source)
    }

    #[must_use]
    pub(crate) fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.machine = self.machine.with_detail(key, value);
        self
    }
}

pub(crate) fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal_error\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("{}", error.machine.message);
    }
}
