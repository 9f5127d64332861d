// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value model exchanged between mapper functions and the formula engine.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Date format used for literals and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Marker returned by side-effecting functions that produce no meaningful value.
pub const VOID_RETURN_TYPE: ValueType = ValueType::Void;

/// Declared type of a function's return value or parameter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum ValueType {
    /// Accepts every value. Used for loosely typed parameters.
    Any,
    /// No meaningful value. Only valid as a return type.
    Void,
    Bool,
    Int,
    Float,
    Text,
    Date,
}

impl ValueType {
    /// Returns true if a value of this runtime shape may be passed where
    /// `self` is declared.
    ///
    /// Integers widen to `Float`. `Null` is only accepted by `Any`.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueType::Any, _) => true,
            (ValueType::Float, Value::Int(_)) => true,
            (expected, value) => *expected == value.value_type() && *expected != ValueType::Void,
        }
    }
}

/// A single positional argument or function result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl Value {
    /// Returns the runtime type of this value. `Null` reports `Void`.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Void,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Text(_) => ValueType::Text,
            Value::Date(_) => ValueType::Date,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Infers a value from a textual literal.
    ///
    /// Recognizes `null`, booleans, integers, finite floats, and `YYYY-MM-DD`
    /// dates. A literal wrapped in double quotes is always text. Anything else
    /// is text as written.
    pub fn parse_literal(literal: &str) -> Value {
        let trimmed = literal.trim();
        if let Some(inner) = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            return Value::Text(inner.to_string());
        }
        match trimmed {
            "null" => return Value::Null,
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::Int(n);
        }
        if let Ok(f) = trimmed.parse::<f64>()
            && f.is_finite()
        {
            return Value::Float(f);
        }
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Value::Date(d);
        }
        Value::Text(literal.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}
