// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host side of initialization: the container, the mapping engine, and `init`.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use mapwire_config::MapwireConfig;
use mapwire_functions::BusinessCalendar;
use mapwire_registry::{
    FunctionRegistry, InitError, MappingEngine, MappingStream, Orchestrator, SingletonContainer,
};
use tracing::info;

/// A mapping file accepted by [`CollectingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedMapping {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Mapping engine stand-in that reads each stream and records what it saw.
///
/// Rule evaluation lives in a separate engine; the CLI only needs to prove
/// the files are reachable and hand-off happens after function registration.
#[derive(Debug, Clone, Default)]
pub struct CollectingEngine {
    loaded: Arc<Mutex<Vec<LoadedMapping>>>,
}

impl CollectingEngine {
    pub fn loaded(&self) -> Vec<LoadedMapping> {
        self.loaded
            .lock()
            .map(|loaded| loaded.clone())
            .unwrap_or_default()
    }
}

impl MappingEngine for CollectingEngine {
    fn register_from_reader(
        &mut self,
        functions: &Arc<FunctionRegistry>,
        mut stream: MappingStream,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bytes = std::io::copy(&mut stream.reader, &mut std::io::sink())?;
        info!(
            path = %stream.path.display(),
            bytes,
            functions = functions.len(),
            "mapping file handed to engine"
        );
        self.loaded
            .lock()
            .map_err(|_| "mapping engine state poisoned")?
            .push(LoadedMapping {
                path: stream.path,
                bytes,
            });
        Ok(())
    }
}

/// Singletons the built-in functions depend on.
pub fn build_container(config: &MapwireConfig) -> SingletonContainer {
    SingletonContainer::new().with(BusinessCalendar::from_config(&config.calendar))
}

/// Result of a successful startup.
pub struct Started {
    pub orchestrator: Orchestrator,
    pub registry: Arc<FunctionRegistry>,
    pub engine: CollectingEngine,
}

/// Wire every mapper function and hand off mapping files.
pub fn start(config: MapwireConfig) -> Result<Started, InitError> {
    let container = build_container(&config);
    let engine = CollectingEngine::default();
    let orchestrator = Orchestrator::new(config, container, engine.clone());
    let registry = orchestrator.init()?;
    Ok(Started {
        orchestrator,
        registry,
        engine,
    })
}
