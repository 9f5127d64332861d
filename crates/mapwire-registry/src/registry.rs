// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name-keyed registry of wired mapper functions.
//!
//! The registry is filled once during initialization and then shared
//! read-only behind an `Arc`. It has no interior mutability, so concurrent
//! readers need no locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use mapwire_core::{MapperFunction, ValueType};

use crate::error::WiringError;

/// A registered function together with the candidate type that produced it.
#[derive(Clone)]
pub struct RegisteredFunction {
    pub function: Arc<dyn MapperFunction>,
    /// Fully qualified name of the candidate type.
    pub source: &'static str,
}

impl RegisteredFunction {
    pub fn name(&self) -> &str {
        self.function.name()
    }

    /// Human-readable signature, e.g. `addBusinessDays(Date, Int) -> Date`.
    pub fn signature(&self) -> String {
        let params = match self.function.parameter_types() {
            Some(types) => types
                .iter()
                .map(ValueType::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            None => "...".to_string(),
        };
        format!(
            "{}({}) -> {}",
            self.function.name(),
            params,
            self.function.return_type()
        )
    }
}

impl fmt::Debug for RegisteredFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredFunction")
            .field("name", &self.function.name())
            .field("source", &self.source)
            .finish()
    }
}

/// Registry of wired mapper functions, keyed by function name.
#[derive(Default)]
pub struct FunctionRegistry {
    entries: HashMap<String, RegisteredFunction>,
}

impl FunctionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `function` under its own name.
    ///
    /// Names are unique: a second function with the same name is rejected
    /// and the registry is left unchanged.
    pub fn register(
        &mut self,
        source: &'static str,
        function: Box<dyn MapperFunction>,
    ) -> Result<(), WiringError> {
        let name = function.name().to_string();
        if let Some(existing) = self.entries.get(&name) {
            return Err(WiringError::DuplicateName {
                name,
                existing: existing.source.to_string(),
            });
        }
        self.entries.insert(
            name,
            RegisteredFunction {
                function: Arc::from(function),
                source,
            },
        );
        Ok(())
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn MapperFunction>> {
        self.entries.get(name).map(|e| Arc::clone(&e.function))
    }

    /// Look up a registry entry, including its source type.
    pub fn entry(&self, name: &str) -> Option<&RegisteredFunction> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All entries, sorted by function name.
    pub fn list(&self) -> Vec<&RegisteredFunction> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        entries
    }

    /// All function names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
