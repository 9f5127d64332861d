// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mapwire list`: show registered functions and their signatures.

use std::io::IsTerminal;

use mapwire_registry::FunctionRegistry;
use serde::Serialize;

use crate::error::CliError;

/// One row of `mapwire list --json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FunctionRow {
    pub name: String,
    pub signature: String,
    pub source: String,
}

pub fn rows(registry: &FunctionRegistry) -> Vec<FunctionRow> {
    registry
        .list()
        .into_iter()
        .map(|entry| FunctionRow {
            name: entry.name().to_string(),
            signature: entry.signature(),
            source: entry.source.to_string(),
        })
        .collect()
}

pub fn render_table(rows: &[FunctionRow], use_color: bool) -> String {
    let width = rows.iter().map(|r| r.signature.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let signature = if use_color {
            use colored::Colorize;
            format!("{:<width$}", row.signature).bold().to_string()
        } else {
            format!("{:<width$}", row.signature)
        };
        out.push_str(&format!("  {signature}  {}\n", row.source));
    }
    out
}

/// Run the `mapwire list` command.
pub fn run_list(registry: &FunctionRegistry, json: bool, plain: bool) -> Result<(), CliError> {
    let rows = rows(registry);
    if json {
        let out =
            serde_json::to_string_pretty(&rows).map_err(|e| CliError::Output(e.to_string()))?;
        println!("{out}");
        return Ok(());
    }

    if rows.is_empty() {
        println!("no mapper functions registered");
        return Ok(());
    }
    let use_color = !plain && std::io::stdout().is_terminal();
    print!("{}", render_table(&rows, use_color));
    Ok(())
}
