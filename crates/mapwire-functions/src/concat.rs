// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `concat(...)`: joins the text form of every argument.

use mapwire_core::{MapperFunction, MapwireError, Value, ValueType};
use mapwire_registry::mapper_function;

/// Variadic string concatenation. `null` contributes nothing.
#[derive(Debug, Default)]
pub struct Concat;

impl MapperFunction for Concat {
    fn name(&self) -> &str {
        "concat"
    }

    fn return_type(&self) -> ValueType {
        ValueType::Text
    }

    fn parameter_types(&self) -> Option<&[ValueType]> {
        None
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, MapwireError> {
        let joined = args
            .iter()
            .filter(|v| !matches!(v, Value::Null))
            .map(Value::to_string)
            .collect::<String>();
        Ok(Value::Text(joined))
    }
}

mapper_function! {
    Concat { configure: |_| Ok(Box::new(Concat)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_mixed_values() {
        let out = Concat
            .evaluate(&[
                Value::Text("INV-".into()),
                Value::Int(42),
                Value::Null,
                Value::Bool(true),
            ])
            .unwrap();
        assert_eq!(out, Value::Text("INV-42true".into()));
    }

    #[test]
    fn no_arguments_is_empty_text() {
        assert_eq!(Concat.evaluate(&[]).unwrap(), Value::Text(String::new()));
    }
}
