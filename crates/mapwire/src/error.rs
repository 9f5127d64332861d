// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors surfaced by CLI commands.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use mapwire_core::MapwireError;
use mapwire_registry::InitError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Init(#[from] InitError),

    #[error("no mapper function named `{name}`")]
    #[diagnostic(
        code(mapwire::cli::unknown_function),
        help("{}", unknown_function_help(suggestion))
    )]
    UnknownFunction {
        name: String,
        suggestion: Option<String>,
    },

    #[error("invalid call: {0}")]
    #[diagnostic(code(mapwire::cli::arguments))]
    Arguments(MapwireError),

    #[error("evaluation failed: {0}")]
    #[diagnostic(code(mapwire::cli::evaluation))]
    Evaluation(MapwireError),

    #[error("cannot render output: {0}")]
    #[diagnostic(code(mapwire::cli::output))]
    Output(String),
}

fn unknown_function_help(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!("did you mean `{name}`?"),
        None => "run `mapwire list` to see registered functions".to_string(),
    }
}
