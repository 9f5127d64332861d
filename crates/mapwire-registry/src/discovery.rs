// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespace scan over the compile-time registration table.

use std::collections::HashSet;

use mapwire_core::naming::{in_namespace, is_module_path};
use tracing::debug;

use crate::descriptor::{MapperDescriptor, MapperReg};
use crate::error::{InitError, WiringError};

/// Finds mapper function candidates registered under a module path.
#[derive(Debug, Clone)]
pub struct Discovery {
    namespace: String,
}

impl Discovery {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Every candidate registered in the namespace or below it, sorted by
    /// fully qualified type name so initialization order is stable.
    pub fn scan(&self) -> Result<Vec<&'static MapperDescriptor>, InitError> {
        if !is_module_path(&self.namespace) {
            return Err(InitError::Discovery {
                namespace: self.namespace.clone(),
                reason: "not a module path".into(),
            });
        }

        let mut candidates: Vec<&'static MapperDescriptor> = Vec::new();
        for reg in inventory::iter::<MapperReg> {
            if in_namespace(reg.0.namespace, &self.namespace) {
                candidates.push(reg.0);
            }
        }
        candidates.sort_by_key(|d| d.type_name);

        let mut seen = HashSet::new();
        for descriptor in &candidates {
            if !seen.insert(descriptor.type_name) {
                return Err(InitError::candidate(
                    descriptor.type_name,
                    WiringError::ClassResolution {
                        type_name: descriptor.type_name.to_string(),
                        reason: "registered more than once".into(),
                    },
                ));
            }
        }

        debug!(
            namespace = %self.namespace,
            count = candidates.len(),
            "scanned mapper function candidates"
        );
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use mapwire_core::{MapperFunction, MapwireError, Value, ValueType};

    use super::*;
    use crate::error::WiringStep;

    struct Named(&'static str);

    impl MapperFunction for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn return_type(&self) -> ValueType {
            ValueType::Text
        }

        fn parameter_types(&self) -> Option<&[ValueType]> {
            Some(&[])
        }

        fn evaluate(&self, _args: &[Value]) -> Result<Value, MapwireError> {
            Ok(Value::Text(self.0.into()))
        }
    }

    mod sample {
        use super::Named;

        pub struct Zeta;
        pub struct Alpha;

        crate::mapper_function! {
            Zeta { configure: |_| Ok(Box::new(Named("zeta"))) }
        }

        crate::mapper_function! {
            Alpha { configure: |_| Ok(Box::new(Named("alpha"))) }
        }

        pub mod nested {
            use super::super::Named;

            pub struct Beta;

            crate::mapper_function! {
                Beta { configure: |_| Ok(Box::new(Named("beta"))) }
            }
        }
    }

    mod sample_extra {
        use super::Named;

        pub struct Outside;

        crate::mapper_function! {
            Outside { configure: |_| Ok(Box::new(Named("outside"))) }
        }
    }

    mod twice {
        use super::Named;

        static TWICE: crate::MapperDescriptor = crate::MapperDescriptor {
            namespace: module_path!(),
            type_name: concat!(module_path!(), "::Twice"),
            setter_class: &[],
            setter_attribute: &[],
            configure: |_| Ok(Box::new(Named("twice"))),
        };

        inventory::submit! { crate::MapperReg(&TWICE) }
        inventory::submit! { crate::MapperReg(&TWICE) }
    }

    fn sample_ns() -> String {
        format!("{}::sample", module_path!())
    }

    #[test]
    fn scan_collects_namespace_and_children_sorted() {
        let found = Discovery::new(sample_ns()).scan().unwrap();
        let names: Vec<_> = found.iter().map(|d| d.simple_name()).collect();
        assert_eq!(names, ["Alpha", "Zeta", "Beta"]);
        assert!(found.windows(2).all(|w| w[0].type_name <= w[1].type_name));
    }

    #[test]
    fn scan_respects_segment_boundaries() {
        let found = Discovery::new(sample_ns()).scan().unwrap();
        assert!(found.iter().all(|d| d.simple_name() != "Outside"));
    }

    #[test]
    fn empty_namespace_yields_no_candidates() {
        let found = Discovery::new(format!("{}::nowhere", module_path!()))
            .scan()
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn invalid_namespace_is_rejected() {
        let err = Discovery::new("com.example.mappers").scan().unwrap_err();
        assert!(matches!(err, InitError::Discovery { .. }));
    }

    #[test]
    fn type_registered_twice_fails_discovery() {
        let err = Discovery::new(format!("{}::twice", module_path!()))
            .scan()
            .unwrap_err();
        assert!(matches!(
            err,
            InitError::InitializationFailed {
                step: WiringStep::Discover,
                source: WiringError::ClassResolution { .. },
                ..
            }
        ));
        assert!(err.candidate_name().unwrap().ends_with("::twice::Twice"));
    }
}
