// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The mapper function contract.

use crate::error::MapwireError;
use crate::types::{Value, ValueType};

/// A function that encapsulates custom logic and makes it callable from
/// mapping formulas.
///
/// Implementations are constructed and wired once at startup and then shared
/// read-only between callers, so they must be `Send + Sync`.
///
/// `evaluate` does not validate its arguments. The caller is expected to
/// check them against [`MapperFunction::parameter_types`] first, typically
/// with [`check_arguments`].
pub trait MapperFunction: Send + Sync {
    /// Returns the name under which the function is registered and called.
    fn name(&self) -> &str;

    /// Returns the declared return type. Side-effecting functions return
    /// [`ValueType::Void`].
    fn return_type(&self) -> ValueType;

    /// Returns the declared parameter types, or `None` when the function
    /// accepts a variable or unknown number of arguments.
    fn parameter_types(&self) -> Option<&[ValueType]>;

    /// Evaluates the function against positional arguments.
    fn evaluate(&self, args: &[Value]) -> Result<Value, MapwireError>;
}

/// Checks positional arguments against a function's declared parameters.
///
/// Functions with unknown arity accept any argument list.
pub fn check_arguments(function: &dyn MapperFunction, args: &[Value]) -> Result<(), MapwireError> {
    let Some(params) = function.parameter_types() else {
        return Ok(());
    };

    if params.len() != args.len() {
        return Err(MapwireError::Arity {
            function: function.name().to_string(),
            expected: params.len(),
            found: args.len(),
        });
    }

    for (index, (expected, arg)) in params.iter().zip(args).enumerate() {
        if !expected.accepts(arg) {
            return Err(MapwireError::InvalidArgument {
                function: function.name().to_string(),
                index,
                expected: *expected,
                found: arg.value_type(),
            });
        }
    }

    Ok(())
}
