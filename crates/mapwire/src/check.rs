// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mapwire check`: run initialization and report the outcome.

use std::io::IsTerminal;

use mapwire_config::MapwireConfig;

use crate::error::CliError;
use crate::host::{start, Started};

/// Summary of a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub namespace: String,
    pub functions: usize,
    pub mapping_files: usize,
}

impl CheckReport {
    fn from_started(started: &Started) -> Self {
        Self {
            namespace: started.orchestrator.config().functions.namespace.clone(),
            functions: started.registry.len(),
            mapping_files: started.engine.loaded().len(),
        }
    }

    pub fn render(&self, use_color: bool) -> String {
        let status = if use_color {
            use colored::Colorize;
            "✓".green().to_string()
        } else {
            "[OK]".to_string()
        };
        format!(
            "{status} {} mapper function(s) wired from `{}`, {} mapping file(s) handed off",
            self.functions, self.namespace, self.mapping_files
        )
    }
}

/// Run the `mapwire check` command.
pub fn run_check(config: MapwireConfig, plain: bool) -> Result<CheckReport, CliError> {
    let started = start(config)?;
    let report = CheckReport::from_started(&started);
    let use_color = !plain && std::io::stdout().is_terminal();
    println!("{}", report.render(use_color));
    for mapping in started.engine.loaded() {
        println!("    {} ({} bytes)", mapping.path.display(), mapping.bytes);
    }
    Ok(report)
}
