// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Mapwire framework.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::path::PathBuf;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Top-level Mapwire configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MapwireConfig {
    /// Log filter settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where mapper functions are discovered.
    #[serde(default)]
    pub functions: FunctionsConfig,

    /// Mapping rule sources handed to the rule engine after wiring.
    #[serde(default)]
    pub mapping: MappingConfig,

    /// Named values that mapper functions may request by attribute name.
    #[serde(default)]
    pub attributes: AttributesConfig,

    /// Business calendar registered as a container singleton by the host.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Mapper function discovery configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionsConfig {
    /// Module path scanned for registered mapper functions. Functions
    /// registered in this module or any module beneath it are wired.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

fn default_namespace() -> String {
    "mapwire_functions".to_string()
}

/// Mapping rule source configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    /// Folder holding mapping rule files. `None` skips mapping registration.
    #[serde(default)]
    pub folder: Option<PathBuf>,

    /// File extension of mapping rule files, without the leading dot.
    #[serde(default = "default_mapping_extension")]
    pub extension: String,

    /// Whether sub-folders are searched.
    #[serde(default = "default_true")]
    pub recursive: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            folder: None,
            extension: default_mapping_extension(),
            recursive: true,
        }
    }
}

fn default_mapping_extension() -> String {
    "xlsx".to_string()
}

fn default_true() -> bool {
    true
}

/// Named attribute values injected into mapper functions.
///
/// Every value a function may request must be an explicit field here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AttributesConfig {
    /// Reporting cut-off date as `YYYY-MM-DD`.
    #[serde(default)]
    pub cut_off_date: Option<String>,
}

/// Business calendar configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Days of the week that are never business days.
    #[serde(default = "default_weekend")]
    pub weekend: Vec<Weekday>,

    /// Dates that are not business days.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            weekend: default_weekend(),
            holidays: Vec::new(),
        }
    }
}

fn default_weekend() -> Vec<Weekday> {
    vec![Weekday::Sat, Weekday::Sun]
}
