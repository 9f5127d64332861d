// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Naming rules shared by discovery, wiring, and configuration validation.

use heck::ToSnakeCase;

/// Returns true if `name` is usable as a formula function name:
/// an ASCII letter or underscore followed by letters, digits, or underscores.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns true if `path` is a `::`-separated module path made of identifiers.
pub fn is_module_path(path: &str) -> bool {
    !path.is_empty() && path.split("::").all(is_identifier)
}

/// Returns true if `path` is `namespace` itself or lies beneath it.
pub fn in_namespace(path: &str, namespace: &str) -> bool {
    match path.strip_prefix(namespace) {
        Some("") => true,
        Some(rest) => rest.starts_with("::"),
        None => false,
    }
}

/// Strips the module path and generic arguments from a type name.
///
/// `alloc::sync::Arc<my::Calendar>` becomes `Arc`, `my::Calendar` becomes `Calendar`.
pub fn simple_type_name(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit("::").next().unwrap_or(base)
}

/// Name of the injection target for a value, following the `set_` convention.
pub fn setter_name(name: &str) -> String {
    format!("set_{}", name.to_snake_case())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("getCutOffDate"));
        assert!(is_identifier("_private1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("has space"));
        assert!(!is_identifier("dash-ed"));
    }

    #[test]
    fn module_paths() {
        assert!(is_module_path("mapwire_functions"));
        assert!(is_module_path("a::b::c"));
        assert!(!is_module_path(""));
        assert!(!is_module_path("a::"));
        assert!(!is_module_path("a:::b"));
        assert!(!is_module_path("com.example"));
    }

    #[test]
    fn namespace_match_is_segment_aware() {
        assert!(in_namespace("a::b", "a::b"));
        assert!(in_namespace("a::b::c", "a::b"));
        assert!(!in_namespace("a::bc", "a::b"));
        assert!(!in_namespace("x::a::b", "a::b"));
    }

    #[test]
    fn simple_names_drop_paths_and_generics() {
        assert_eq!(simple_type_name("my::cal::BusinessCalendar"), "BusinessCalendar");
        assert_eq!(simple_type_name("alloc::vec::Vec<u8>"), "Vec");
        assert_eq!(simple_type_name("u32"), "u32");
    }

    #[test]
    fn setter_names_are_snake_case() {
        assert_eq!(setter_name("BusinessCalendar"), "set_business_calendar");
        assert_eq!(setter_name("cut_off_date"), "set_cut_off_date");
        assert_eq!(setter_name("cutOffDate"), "set_cut_off_date");
    }
}
