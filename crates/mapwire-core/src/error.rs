// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Mapwire framework.

use thiserror::Error;

use crate::types::ValueType;

/// The primary error type returned by mapper function evaluation and
/// argument checking.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapwireError {
    /// A function received the wrong number of arguments.
    #[error("{function}: expected {expected} argument(s), got {found}")]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },

    /// An argument does not match the declared parameter type.
    #[error("{function}: argument {index} must be {expected}, got {found}")]
    InvalidArgument {
        function: String,
        index: usize,
        expected: ValueType,
        found: ValueType,
    },

    /// The function ran but could not produce a value.
    #[error("{function} failed: {message}")]
    Evaluation { function: String, message: String },
}
