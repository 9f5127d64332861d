// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative descriptors and their compile-time registration table.
//!
//! Each mapper function submits one [`MapperDescriptor`] through
//! [`mapper_function!`](crate::mapper_function). The descriptor lists the
//! container types and attribute names the function needs, and the factory
//! that builds the function once those values are available.

use std::any::{Any, TypeId};
use std::fmt;

use mapwire_core::naming::{setter_name, simple_type_name};
use mapwire_core::MapperFunction;

use crate::error::WiringError;
use crate::wiring::Wiring;

/// Factory that builds a mapper function from its resolved dependencies.
pub type Configure = fn(&mut Wiring) -> Result<Box<dyn MapperFunction>, WiringError>;

/// A type to resolve from the container, captured at compile time.
#[derive(Clone, Copy)]
pub struct Dependency {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
}

impl Dependency {
    /// Describe a dependency on `T`.
    pub const fn of<T: Any + Send + Sync>() -> Self {
        Self {
            type_id: TypeId::of::<T>,
            type_name: std::any::type_name::<T>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Fully qualified type name.
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Type name without module path or generic arguments.
    pub fn simple_name(&self) -> &'static str {
        simple_type_name(self.type_name())
    }

    /// Name of the injection target, e.g. `set_business_calendar`.
    pub fn setter_name(&self) -> String {
        setter_name(self.simple_name())
    }
}

impl PartialEq for Dependency {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for Dependency {}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dependency").field(&self.type_name()).finish()
    }
}

/// Self-description of a mapper function candidate.
pub struct MapperDescriptor {
    /// Module path the candidate was registered from.
    pub namespace: &'static str,
    /// Fully qualified name of the candidate type.
    pub type_name: &'static str,
    /// Singletons to resolve from the container, by type.
    pub setter_class: &'static [Dependency],
    /// Configuration attributes to hand over, by name.
    pub setter_attribute: &'static [&'static str],
    /// Builds the wired instance.
    pub configure: Configure,
}

impl MapperDescriptor {
    /// Candidate type name without its module path.
    pub fn simple_name(&self) -> &'static str {
        simple_type_name(self.type_name)
    }
}

impl fmt::Debug for MapperDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperDescriptor")
            .field("type_name", &self.type_name)
            .field("setter_class", &self.setter_class)
            .field("setter_attribute", &self.setter_attribute)
            .finish_non_exhaustive()
    }
}

/// Registration table entry collected via `inventory`.
pub struct MapperReg(pub &'static MapperDescriptor);

inventory::collect!(MapperReg);

/// Registers a mapper function candidate.
///
/// ```ignore
/// mapper_function! {
///     IsBusinessDay {
///         setter_class: [BusinessCalendar],
///         configure: IsBusinessDay::configure,
///     }
/// }
///
/// mapper_function! {
///     CutOffDate {
///         setter_attribute: ["cut_off_date"],
///         configure: CutOffDate::configure,
///     }
/// }
/// ```
#[macro_export]
macro_rules! mapper_function {
    ($ty:ident {
        $(setter_class: [$($dep:ty),* $(,)?],)?
        $(setter_attribute: [$($attr:literal),* $(,)?],)?
        configure: $configure:expr $(,)?
    }) => {
        $crate::__private::paste::paste! {
            #[allow(non_upper_case_globals)]
            static [<MAPPER_DESCRIPTOR_ $ty:upper>]: $crate::MapperDescriptor = $crate::MapperDescriptor {
                namespace: module_path!(),
                type_name: concat!(module_path!(), "::", stringify!($ty)),
                setter_class: &[$($($crate::Dependency::of::<$dep>()),*)?],
                setter_attribute: &[$($($attr),*)?],
                configure: $configure,
            };

            $crate::__private::inventory::submit! {
                $crate::MapperReg(&[<MAPPER_DESCRIPTOR_ $ty:upper>])
            }
        }
    };
}
