// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mapwire call`: evaluate one registered function from the command line.

use mapwire_config::diagnostic::suggest_key;
use mapwire_core::{check_arguments, Value};
use mapwire_registry::FunctionRegistry;

use crate::error::CliError;

/// Parse `args` as literals, check them, and evaluate `name`.
pub fn call(registry: &FunctionRegistry, name: &str, args: &[String]) -> Result<Value, CliError> {
    let Some(function) = registry.get(name) else {
        let names = registry.names();
        return Err(CliError::UnknownFunction {
            name: name.to_string(),
            suggestion: suggest_key(name, &names),
        });
    };

    let values: Vec<Value> = args.iter().map(|a| Value::parse_literal(a)).collect();
    check_arguments(function.as_ref(), &values).map_err(CliError::Arguments)?;
    tracing::debug!(function = name, args = values.len(), "evaluating");
    function.evaluate(&values).map_err(CliError::Evaluation)
}

/// Run the `mapwire call` command.
pub fn run_call(registry: &FunctionRegistry, name: &str, args: &[String]) -> Result<(), CliError> {
    let value = call(registry, name, args)?;
    println!("{value}");
    Ok(())
}
