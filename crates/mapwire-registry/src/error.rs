// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for discovery, wiring, and initialization.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use std::path::PathBuf;

use miette::Diagnostic;
use strum::Display;
use thiserror::Error;

use crate::attributes::CONFIG_ATTRIBUTES;
use crate::mapping::MappingSourceError;

/// Pipeline step in which a candidate failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum WiringStep {
    Discover,
    Construct,
    Inject,
    #[strum(serialize = "contract check")]
    ContractCheck,
    Register,
}

/// Why an attribute could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldFailure {
    #[strum(serialize = "does not exist")]
    Missing,
    #[strum(serialize = "has no value")]
    Unset,
}

/// Failure wiring a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    /// The candidate type could not be resolved from the registration table.
    #[error("type `{type_name}` cannot be resolved: {reason}")]
    ClassResolution { type_name: String, reason: String },

    /// The candidate's factory could not build an instance.
    #[error("no usable constructor: {reason}")]
    Construction { reason: String },

    /// The container has no instance of a declared dependency.
    #[error("container has no instance of `{dependency}`")]
    DependencyResolution { dependency: String },

    /// A declared attribute is absent or empty.
    #[error("attribute `{field}` {failure}")]
    FieldResolution { field: String, failure: FieldFailure },

    /// No injection target matches the setter convention.
    #[error("method `{method}` does not exist: {detail}")]
    MethodResolution { method: String, detail: String },

    /// The built instance does not satisfy the extension contract.
    #[error("contract violation: {reason}")]
    ContractViolation { reason: String },

    /// Two candidates register the same function name.
    #[error("function name `{name}` is already registered by `{existing}`")]
    DuplicateName { name: String, existing: String },
}

impl WiringError {
    /// Shorthand for factories reporting their own construction failures.
    pub fn construction(reason: impl std::fmt::Display) -> Self {
        WiringError::Construction {
            reason: reason.to_string(),
        }
    }

    /// Step this error belongs to.
    pub fn step(&self) -> WiringStep {
        match self {
            WiringError::ClassResolution { .. } => WiringStep::Discover,
            WiringError::Construction { .. } => WiringStep::Construct,
            WiringError::DependencyResolution { .. }
            | WiringError::FieldResolution { .. }
            | WiringError::MethodResolution { .. } => WiringStep::Inject,
            WiringError::ContractViolation { .. } => WiringStep::ContractCheck,
            WiringError::DuplicateName { .. } => WiringStep::Register,
        }
    }
}

/// Failure of [`Orchestrator::init`](crate::Orchestrator::init).
///
/// Every variant aborts initialization; the registry stays unpublished.
#[derive(Debug, Error, Diagnostic)]
pub enum InitError {
    /// `init` was called more than once.
    #[error("mapper functions are already initialized")]
    #[diagnostic(code(mapwire::init::already_initialized))]
    AlreadyInitialized,

    /// The configured namespace cannot be scanned.
    #[error("cannot scan namespace `{namespace}`: {reason}")]
    #[diagnostic(
        code(mapwire::init::discovery),
        help("set functions.namespace to a module path such as `mapwire_functions`")
    )]
    Discovery { namespace: String, reason: String },

    /// A candidate failed to wire.
    #[error("unable to instantiate mapper function [{candidate}] during {step}: {source}")]
    #[diagnostic(code(mapwire::init::failed), help("{}", step_help(source)))]
    InitializationFailed {
        candidate: String,
        step: WiringStep,
        source: WiringError,
    },

    /// Mapping rule files could not be enumerated or opened.
    #[error("cannot read mapping sources from `{}`: {source}", .folder.display())]
    #[diagnostic(code(mapwire::init::mapping_source))]
    MappingSource {
        folder: PathBuf,
        source: MappingSourceError,
    },

    /// The rule engine refused a mapping file.
    #[error("mapping engine rejected `{}`: {source}", .path.display())]
    #[diagnostic(code(mapwire::init::mapping_rejected))]
    MappingRejected {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl InitError {
    /// Wrap a candidate failure, taking the step from the error kind.
    pub fn candidate(candidate: impl Into<String>, source: WiringError) -> Self {
        InitError::InitializationFailed {
            candidate: candidate.into(),
            step: source.step(),
            source,
        }
    }

    /// The underlying wiring failure, if a candidate failed.
    pub fn wiring_error(&self) -> Option<&WiringError> {
        match self {
            InitError::InitializationFailed { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Type name of the failing candidate, if any.
    pub fn candidate_name(&self) -> Option<&str> {
        match self {
            InitError::InitializationFailed { candidate, .. } => Some(candidate),
            _ => None,
        }
    }
}

fn step_help(error: &WiringError) -> String {
    match error {
        WiringError::ClassResolution { .. } => {
            "register each mapper function type exactly once with `mapper_function!`".into()
        }
        WiringError::Construction { .. } => {
            "check the values the function's factory reads from its wiring".into()
        }
        WiringError::DependencyResolution { dependency } => {
            format!("register a `{dependency}` singleton in the container before init")
        }
        WiringError::FieldResolution {
            field,
            failure: FieldFailure::Unset,
        } => {
            format!("set `attributes.{field}` (or the matching config key) in mapwire.toml")
        }
        WiringError::FieldResolution {
            failure: FieldFailure::Missing,
            ..
        } => format!(
            "known attributes are: {}",
            CONFIG_ATTRIBUTES.join(", ")
        ),
        WiringError::MethodResolution { .. } => {
            "setter_class / setter_attribute must match what the factory injects".into()
        }
        WiringError::ContractViolation { .. } => {
            "function names must be identifiers and parameters cannot be Void".into()
        }
        WiringError::DuplicateName { .. } => "give every mapper function a unique name".into(),
    }
}
