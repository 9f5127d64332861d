// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in mapper functions.
//!
//! Every function in this crate registers itself under the
//! `mapwire_functions` namespace. Registration happens at link time, so a
//! host must reference something from this crate (usually
//! [`BusinessCalendar`], which it has to put into the container anyway) for
//! the functions to be discovered.

pub mod business_day;
pub mod calendar;
pub mod concat;
pub mod cut_off_date;
pub mod log;

pub use business_day::{AddBusinessDays, IsBusinessDay};
pub use calendar::BusinessCalendar;
pub use concat::Concat;
pub use cut_off_date::GetCutOffDate;
pub use log::Log;

/// Namespace all built-in functions are registered under.
pub const NAMESPACE: &str = module_path!();
