// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named attribute values handed to mapper functions.
//!
//! Attributes come from an explicit source (the configuration), never from
//! arbitrary fields of the orchestrator.

use std::fmt;
use std::path::PathBuf;

use mapwire_config::MapwireConfig;

/// Attribute names served by [`MapwireConfig`].
pub const CONFIG_ATTRIBUTES: &[&str] = &["cut_off_date", "mapping_folder"];

/// Runtime value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Path(PathBuf),
}

impl AttributeValue {
    /// Name of the runtime type, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Text(_) => "text",
            AttributeValue::Path(_) => "path",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{s}"),
            AttributeValue::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Result of looking up one attribute by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeLookup {
    Value(AttributeValue),
    /// The attribute exists but holds no value.
    Unset,
    /// No attribute with that name exists.
    Unknown,
}

impl From<Option<AttributeValue>> for AttributeLookup {
    fn from(value: Option<AttributeValue>) -> Self {
        value.map_or(AttributeLookup::Unset, AttributeLookup::Value)
    }
}

/// Anything that can serve attribute values by name.
pub trait AttributeSource {
    fn lookup(&self, name: &str) -> AttributeLookup;
}

impl AttributeSource for MapwireConfig {
    fn lookup(&self, name: &str) -> AttributeLookup {
        match name {
            "cut_off_date" => self
                .attributes
                .cut_off_date
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(|s| AttributeValue::Text(s.to_string()))
                .into(),
            "mapping_folder" => self
                .mapping
                .folder
                .as_ref()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| AttributeValue::Path(p.clone()))
                .into(),
            _ => AttributeLookup::Unknown,
        }
    }
}

/// Conversion from an attribute value into the type a function asks for.
///
/// Returns `None` when the runtime value cannot be accepted as `Self`.
pub trait FromAttribute: Sized {
    fn from_attribute(value: &AttributeValue) -> Option<Self>;
}

impl FromAttribute for AttributeValue {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromAttribute for String {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Text(s) => Some(s.clone()),
            AttributeValue::Path(_) => None,
        }
    }
}

impl FromAttribute for PathBuf {
    fn from_attribute(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Path(p) => Some(p.clone()),
            AttributeValue::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serves_known_attributes() {
        let mut config = MapwireConfig::default();
        config.attributes.cut_off_date = Some("2024-01-01".into());
        config.mapping.folder = Some(PathBuf::from("rules"));

        assert_eq!(
            config.lookup("cut_off_date"),
            AttributeLookup::Value(AttributeValue::Text("2024-01-01".into()))
        );
        assert_eq!(
            config.lookup("mapping_folder"),
            AttributeLookup::Value(AttributeValue::Path(PathBuf::from("rules")))
        );
    }

    #[test]
    fn absent_values_are_unset_not_unknown() {
        let mut config = MapwireConfig::default();
        assert_eq!(config.lookup("cut_off_date"), AttributeLookup::Unset);
        assert_eq!(config.lookup("mapping_folder"), AttributeLookup::Unset);

        config.attributes.cut_off_date = Some("  ".into());
        assert_eq!(config.lookup("cut_off_date"), AttributeLookup::Unset);
    }

    #[test]
    fn every_listed_attribute_is_known() {
        let config = MapwireConfig::default();
        for name in CONFIG_ATTRIBUTES {
            assert_ne!(config.lookup(name), AttributeLookup::Unknown, "{name}");
        }
    }

    #[test]
    fn unknown_names_are_unknown() {
        let config = MapwireConfig::default();
        assert_eq!(config.lookup("cutOffDate"), AttributeLookup::Unknown);
        assert_eq!(config.lookup("functions"), AttributeLookup::Unknown);
    }

    #[test]
    fn conversions_follow_runtime_kind() {
        let text = AttributeValue::Text("x".into());
        assert_eq!(String::from_attribute(&text), Some("x".to_string()));
        assert_eq!(PathBuf::from_attribute(&text), None);
        assert_eq!(AttributeValue::from_attribute(&text), Some(text.clone()));
    }
}
