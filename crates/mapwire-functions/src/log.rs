// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `log(...)`: writes its arguments to the log and returns nothing.

use mapwire_core::{MapperFunction, MapwireError, Value, ValueType, VOID_RETURN_TYPE};
use mapwire_registry::mapper_function;

#[derive(Debug, Default)]
pub struct Log;

impl MapperFunction for Log {
    fn name(&self) -> &str {
        "log"
    }

    fn return_type(&self) -> ValueType {
        VOID_RETURN_TYPE
    }

    fn parameter_types(&self) -> Option<&[ValueType]> {
        None
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value, MapwireError> {
        let message = args
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(%message, "formula log");
        Ok(Value::Null)
    }
}

mapper_function! {
    Log { configure: |_| Ok(Box::new(Log)) }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn emits_event_and_returns_null() {
        let out = Log
            .evaluate(&[Value::Text("rows".into()), Value::Int(3)])
            .unwrap();
        assert_eq!(out, Value::Null);
        assert!(logs_contain("rows 3"));
    }
}
