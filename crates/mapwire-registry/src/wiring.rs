// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instantiate and inject a single candidate.
//!
//! Declared dependencies and attributes are resolved up front into a
//! [`Wiring`] bundle. The candidate's factory then takes typed values out of
//! the bundle. Every declared value must be taken exactly as declared:
//! asking for something undeclared, asking for an attribute as a type its
//! runtime value cannot become, or leaving a declared value unused all fail
//! with [`WiringError::MethodResolution`] naming the setter-convention target.

use std::any::{Any, TypeId};
use std::sync::Arc;

use mapwire_core::naming::{is_identifier, setter_name, simple_type_name};
use mapwire_core::{MapperFunction, ValueType};
use tracing::debug;

use crate::attributes::{AttributeLookup, AttributeSource, AttributeValue, FromAttribute};
use crate::container::Container;
use crate::descriptor::{Dependency, MapperDescriptor};
use crate::error::{FieldFailure, WiringError};

struct ResolvedDependency {
    dependency: Dependency,
    instance: Arc<dyn Any + Send + Sync>,
    injected: bool,
}

struct ResolvedAttribute {
    name: &'static str,
    value: AttributeValue,
    injected: bool,
}

/// Resolved values for one candidate, handed to its factory.
pub struct Wiring {
    dependencies: Vec<ResolvedDependency>,
    attributes: Vec<ResolvedAttribute>,
}

impl Wiring {
    /// Resolve everything `descriptor` declares.
    ///
    /// Dependencies are resolved before attributes, each in declaration order.
    /// A type or attribute declared more than once is resolved once.
    pub fn resolve(
        descriptor: &MapperDescriptor,
        container: &dyn Container,
        attributes: &dyn AttributeSource,
    ) -> Result<Self, WiringError> {
        let mut dependencies = Vec::with_capacity(descriptor.setter_class.len());
        for dependency in descriptor.setter_class {
            if dependencies
                .iter()
                .any(|slot: &ResolvedDependency| slot.dependency == *dependency)
            {
                continue;
            }
            let instance = container.resolve(dependency).ok_or_else(|| {
                WiringError::DependencyResolution {
                    dependency: dependency.simple_name().to_string(),
                }
            })?;
            // The container is external; make sure it answered with the right type.
            if (*instance).type_id() != dependency.type_id() {
                return Err(WiringError::DependencyResolution {
                    dependency: dependency.simple_name().to_string(),
                });
            }
            debug!(
                candidate = descriptor.type_name,
                dependency = dependency.type_name(),
                "resolved dependency"
            );
            dependencies.push(ResolvedDependency {
                dependency: *dependency,
                instance,
                injected: false,
            });
        }

        let mut resolved = Vec::with_capacity(descriptor.setter_attribute.len());
        for &name in descriptor.setter_attribute {
            if resolved.iter().any(|slot: &ResolvedAttribute| slot.name == name) {
                continue;
            }
            let value = match attributes.lookup(name) {
                AttributeLookup::Value(value) => value,
                AttributeLookup::Unset => {
                    return Err(WiringError::FieldResolution {
                        field: name.to_string(),
                        failure: FieldFailure::Unset,
                    });
                }
                AttributeLookup::Unknown => {
                    return Err(WiringError::FieldResolution {
                        field: name.to_string(),
                        failure: FieldFailure::Missing,
                    });
                }
            };
            debug!(
                candidate = descriptor.type_name,
                attribute = name,
                kind = value.kind(),
                "resolved attribute"
            );
            resolved.push(ResolvedAttribute {
                name,
                value,
                injected: false,
            });
        }

        Ok(Self {
            dependencies,
            attributes: resolved,
        })
    }

    /// Take the declared singleton of type `T`.
    pub fn dependency<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>, WiringError> {
        let wanted = TypeId::of::<T>();
        let method = setter_name(simple_type_name(std::any::type_name::<T>()));

        let slot = self
            .dependencies
            .iter_mut()
            .find(|slot| slot.dependency.type_id() == wanted)
            .ok_or_else(|| WiringError::MethodResolution {
                method: method.clone(),
                detail: format!(
                    "`{}` is not declared in setter_class",
                    simple_type_name(std::any::type_name::<T>())
                ),
            })?;

        let instance = Arc::clone(&slot.instance)
            .downcast::<T>()
            .map_err(|_| WiringError::MethodResolution {
                method,
                detail: format!(
                    "no injection target accepts `{}`",
                    slot.dependency.simple_name()
                ),
            })?;
        slot.injected = true;
        Ok(instance)
    }

    /// Take the declared attribute `name` as a `V`.
    pub fn attribute<V: FromAttribute>(&mut self, name: &str) -> Result<V, WiringError> {
        let slot = self
            .attributes
            .iter_mut()
            .find(|slot| slot.name == name)
            .ok_or_else(|| WiringError::MethodResolution {
                method: setter_name(name),
                detail: format!("attribute `{name}` is not declared in setter_attribute"),
            })?;

        let value = V::from_attribute(&slot.value).ok_or_else(|| WiringError::MethodResolution {
            method: setter_name(name),
            detail: format!(
                "no injection target accepts a {} value",
                slot.value.kind()
            ),
        })?;
        slot.injected = true;
        Ok(value)
    }

    /// Fail if any declared value was never taken by the factory.
    pub fn finish(&self) -> Result<(), WiringError> {
        if let Some(slot) = self.dependencies.iter().find(|s| !s.injected) {
            return Err(WiringError::MethodResolution {
                method: slot.dependency.setter_name(),
                detail: format!(
                    "`{}` is declared in setter_class but never injected",
                    slot.dependency.simple_name()
                ),
            });
        }
        if let Some(slot) = self.attributes.iter().find(|s| !s.injected) {
            return Err(WiringError::MethodResolution {
                method: setter_name(slot.name),
                detail: format!(
                    "attribute `{}` is declared in setter_attribute but never injected",
                    slot.name
                ),
            });
        }
        Ok(())
    }
}

/// Check a built instance against the extension contract.
pub fn check_contract(function: &dyn MapperFunction) -> Result<(), WiringError> {
    let name = function.name();
    if !is_identifier(name) {
        return Err(WiringError::ContractViolation {
            reason: format!("function name `{name}` is not an identifier"),
        });
    }
    if let Some(params) = function.parameter_types()
        && let Some(index) = params.iter().position(|t| *t == ValueType::Void)
    {
        return Err(WiringError::ContractViolation {
            reason: format!("`{name}` declares parameter {index} as Void"),
        });
    }
    Ok(())
}

/// Run every wiring step for one candidate.
pub fn wire(
    descriptor: &MapperDescriptor,
    container: &dyn Container,
    attributes: &dyn AttributeSource,
) -> Result<Box<dyn MapperFunction>, WiringError> {
    let mut wiring = Wiring::resolve(descriptor, container, attributes)?;
    let function = (descriptor.configure)(&mut wiring)?;
    wiring.finish()?;
    check_contract(function.as_ref())?;
    Ok(function)
}
