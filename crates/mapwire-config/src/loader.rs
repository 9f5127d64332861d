// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./mapwire.toml` > `~/.config/mapwire/mapwire.toml` > `/etc/mapwire/mapwire.toml`
//! with environment variable overrides via `MAPWIRE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::MapwireConfig;

/// File name looked up in each configuration directory.
pub const CONFIG_FILE_NAME: &str = "mapwire.toml";

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/mapwire/mapwire.toml";

/// Sections whose keys may be overridden through `MAPWIRE_<SECTION>_<KEY>`.
const ENV_SECTIONS: &[&str] = &["logging", "functions", "mapping", "attributes", "calendar"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/mapwire/mapwire.toml`
/// 3. `~/.config/mapwire/mapwire.toml`
/// 4. `./mapwire.toml`
/// 5. `MAPWIRE_*` environment variables
pub fn load_config() -> Result<MapwireConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env vars).
pub fn load_config_from_str(toml_content: &str) -> Result<MapwireConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MapwireConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MapwireConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MapwireConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the layered Figment before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(MapwireConfig::default()));
    for path in config_paths() {
        figment = figment.merge(Toml::file(path));
    }
    figment.merge(env_provider())
}

/// Candidate configuration files, lowest precedence first.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("mapwire").join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

/// Create the environment variable provider.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `MAPWIRE_ATTRIBUTES_CUT_OFF_DATE` must map to
/// `attributes.cut_off_date`.
fn env_provider() -> Env {
    Env::prefixed("MAPWIRE_").map(|key| map_env_key(key.as_str()).into())
}

/// Maps a lowercased, prefix-stripped env var name to a dotted config key.
fn map_env_key(key: &str) -> String {
    for section in ENV_SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
