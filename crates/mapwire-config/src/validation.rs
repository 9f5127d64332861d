// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;

use mapwire_core::naming::is_module_path;

use crate::diagnostic::ConfigError;
use crate::model::MapwireConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &MapwireConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.logging.level
            ),
        });
    }

    if !is_module_path(&config.functions.namespace) {
        errors.push(ConfigError::Validation {
            message: format!(
                "functions.namespace `{}` is not a module path (expected e.g. `mapwire_functions`)",
                config.functions.namespace
            ),
        });
    }

    let extension = config.mapping.extension.trim_start_matches('.');
    if extension.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "mapping.extension must not be empty".to_string(),
        });
    } else if extension.contains(['/', '\\']) {
        errors.push(ConfigError::Validation {
            message: format!("mapping.extension `{extension}` must not contain path separators"),
        });
    }

    let weekend: HashSet<_> = config.calendar.weekend.iter().collect();
    if weekend.len() >= 7 {
        errors.push(ConfigError::Validation {
            message: "calendar.weekend must leave at least one business day".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
