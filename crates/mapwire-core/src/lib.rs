// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Mapwire framework.
//!
//! This crate provides the extension contract every mapper function
//! implements, the value model exchanged with the formula engine, and the
//! error type returned by function evaluation.

pub mod error;
pub mod naming;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::MapwireError;
pub use traits::{check_arguments, MapperFunction};
pub use types::{Value, ValueType, VOID_RETURN_TYPE};
