// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension contract implemented by every pluggable mapper function.

pub mod function;

pub use function::{check_arguments, MapperFunction};
