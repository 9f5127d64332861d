// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapper function discovery, wiring, and registry.
//!
//! Mapper functions describe themselves with [`mapper_function!`], which
//! places a [`MapperDescriptor`] in a compile-time registration table. At
//! startup the [`Orchestrator`] scans that table for a namespace, resolves
//! each candidate's declared dependencies from a [`Container`] and its
//! declared attributes from the configuration, builds the instance through the
//! candidate's `configure` factory, checks it against the extension contract,
//! and publishes the result as an immutable [`FunctionRegistry`].
//!
//! Any failure aborts the whole initialization; no partial registry is ever
//! published.

pub mod attributes;
pub mod container;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod mapping;
pub mod orchestrator;
pub mod registry;
pub mod wiring;

pub use attributes::{AttributeLookup, AttributeSource, AttributeValue, FromAttribute};
pub use container::{Container, SingletonContainer};
pub use descriptor::{Configure, Dependency, MapperDescriptor, MapperReg};
pub use discovery::Discovery;
pub use error::{FieldFailure, InitError, WiringError, WiringStep};
pub use mapping::{MappingEngine, MappingSourceError, MappingStream};
pub use orchestrator::Orchestrator;
pub use registry::{FunctionRegistry, RegisteredFunction};
pub use wiring::Wiring;

#[doc(hidden)]
pub mod __private {
    pub use inventory;
    pub use paste;
}
