// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Singleton container boundary.
//!
//! The host owns singleton lifecycles; wiring only asks for one instance
//! per declared type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::Dependency;

/// Resolves singleton instances by type.
pub trait Container: Send + Sync {
    /// Returns the singleton registered for `dependency`, if any.
    fn resolve(&self, dependency: &Dependency) -> Option<Arc<dyn Any + Send + Sync>>;
}

struct Singleton {
    type_name: &'static str,
    instance: Arc<dyn Any + Send + Sync>,
}

/// In-memory container keyed by [`TypeId`].
#[derive(Default)]
pub struct SingletonContainer {
    singletons: HashMap<TypeId, Singleton>,
}

impl SingletonContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `instance` as the singleton for `T`, replacing any previous one.
    pub fn register<T: Any + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.register_arc(Arc::new(instance))
    }

    /// Register an already shared instance as the singleton for `T`.
    pub fn register_arc<T: Any + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        let type_name = std::any::type_name::<T>();
        let previous = self.singletons.insert(
            TypeId::of::<T>(),
            Singleton {
                type_name,
                instance,
            },
        );
        if previous.is_some() {
            tracing::debug!(type_name, "replaced container singleton");
        }
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<T: Any + Send + Sync>(mut self, instance: T) -> Self {
        self.register(instance);
        self
    }

    /// Typed lookup of a registered singleton.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let singleton = self.singletons.get(&TypeId::of::<T>())?;
        Arc::clone(&singleton.instance).downcast::<T>().ok()
    }

    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.singletons.contains_key(&TypeId::of::<T>())
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.singletons.values().map(|s| s.type_name).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.singletons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.singletons.is_empty()
    }
}

impl Container for SingletonContainer {
    fn resolve(&self, dependency: &Dependency) -> Option<Arc<dyn Any + Send + Sync>> {
        self.singletons
            .get(&dependency.type_id())
            .map(|s| Arc::clone(&s.instance))
    }
}

impl std::fmt::Debug for SingletonContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingletonContainer")
            .field("types", &self.type_names())
            .finish()
    }
}
