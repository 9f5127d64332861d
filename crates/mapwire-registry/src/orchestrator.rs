// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup orchestration: discover, wire, register, then hand off mappings.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwapOption;
use mapwire_config::MapwireConfig;
use tracing::{debug, error, info, warn};

use crate::container::Container;
use crate::discovery::Discovery;
use crate::error::InitError;
use crate::mapping::{open_mapping_streams, MappingEngine};
use crate::registry::FunctionRegistry;
use crate::wiring::wire;

/// Owns the startup pipeline and the published registry.
///
/// [`init`](Self::init) runs once. The registry becomes visible through
/// [`registry`](Self::registry) only after every candidate is registered and
/// every mapping file is accepted.
pub struct Orchestrator {
    config: MapwireConfig,
    container: Box<dyn Container>,
    engine: Mutex<Box<dyn MappingEngine>>,
    started: AtomicBool,
    published: ArcSwapOption<FunctionRegistry>,
}

impl Orchestrator {
    pub fn new(
        config: MapwireConfig,
        container: impl Container + 'static,
        engine: impl MappingEngine + 'static,
    ) -> Self {
        Self {
            config,
            container: Box::new(container),
            engine: Mutex::new(Box::new(engine)),
            started: AtomicBool::new(false),
            published: ArcSwapOption::empty(),
        }
    }

    pub fn config(&self) -> &MapwireConfig {
        &self.config
    }

    /// The published registry, or `None` before a successful [`init`](Self::init).
    pub fn registry(&self) -> Option<Arc<FunctionRegistry>> {
        self.published.load_full()
    }

    /// Build and publish the registry.
    ///
    /// A second call fails with [`InitError::AlreadyInitialized`], whether or
    /// not the first call succeeded.
    pub fn init(&self) -> Result<Arc<FunctionRegistry>, InitError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(InitError::AlreadyInitialized);
        }

        let result = self
            .register_mapper_functions()
            .map(Arc::new)
            .and_then(|registry| {
                self.register_mappings(&registry)?;
                Ok(registry)
            });

        match result {
            Ok(registry) => {
                self.published.store(Some(Arc::clone(&registry)));
                info!(functions = registry.len(), "mapper functions initialized");
                Ok(registry)
            }
            Err(err) => {
                match &err {
                    InitError::InitializationFailed {
                        candidate,
                        step,
                        source,
                    } => error!(%candidate, %step, error = %source, "mapper function initialization failed"),
                    other => error!(error = %other, "mapper function initialization failed"),
                }
                Err(err)
            }
        }
    }

    /// Discover and wire every candidate in the configured namespace.
    fn register_mapper_functions(&self) -> Result<FunctionRegistry, InitError> {
        let namespace = &self.config.functions.namespace;
        let candidates = Discovery::new(namespace.as_str()).scan()?;
        info!(%namespace, candidates = candidates.len(), "registering mapper functions");

        let mut registry = FunctionRegistry::new();
        for descriptor in candidates {
            debug!(candidate = descriptor.type_name, "wiring mapper function");
            let function = wire(descriptor, self.container.as_ref(), &self.config)
                .map_err(|err| InitError::candidate(descriptor.type_name, err))?;

            let name = function.name().to_string();
            registry
                .register(descriptor.type_name, function)
                .map_err(|err| InitError::candidate(descriptor.type_name, err))?;
            info!(
                function = %name,
                candidate = descriptor.type_name,
                "registered mapper function"
            );
        }
        Ok(registry)
    }

    /// Hand every mapping file under the configured folder to the engine.
    fn register_mappings(&self, registry: &Arc<FunctionRegistry>) -> Result<(), InitError> {
        let mapping = &self.config.mapping;
        let Some(folder) = mapping
            .folder
            .as_deref()
            .filter(|f| !f.as_os_str().is_empty())
        else {
            warn!("mapping.folder is not set; skipping mapping registration");
            return Ok(());
        };

        let streams = open_mapping_streams(folder, &mapping.extension, mapping.recursive)
            .map_err(|source| InitError::MappingSource {
                folder: folder.to_path_buf(),
                source,
            })?;
        if streams.is_empty() {
            warn!(folder = %folder.display(), extension = %mapping.extension, "no mapping files found");
        }

        let mut engine = self.engine.lock().unwrap_or_else(PoisonError::into_inner);
        for stream in streams {
            let path = stream.path.clone();
            engine
                .register_from_reader(registry, stream)
                .map_err(|source| InitError::MappingRejected {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), "registered mapping file");
        }
        Ok(())
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("namespace", &self.config.functions.namespace)
            .field("started", &self.started.load(Ordering::SeqCst))
            .field("published", &self.published.load().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Read as _;
    use std::path::PathBuf;

    use mapwire_core::{MapperFunction, MapwireError, Value, ValueType};
    use tracing_test::traced_test;

    use super::*;
    use crate::container::SingletonContainer;
    use crate::error::{WiringError, WiringStep};
    use crate::mapping::MappingStream;

    struct Fixed(&'static str);

    impl MapperFunction for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        fn return_type(&self) -> ValueType {
            ValueType::Int
        }

        fn parameter_types(&self) -> Option<&[ValueType]> {
            Some(&[])
        }

        fn evaluate(&self, _args: &[Value]) -> Result<Value, MapwireError> {
            Ok(Value::Int(1))
        }
    }

    mod healthy {
        use super::Fixed;

        pub struct One;
        pub struct Two;

        crate::mapper_function! {
            One { configure: |_| Ok(Box::new(Fixed("one"))) }
        }

        crate::mapper_function! {
            Two { configure: |_| Ok(Box::new(Fixed("two"))) }
        }
    }

    mod broken {
        use super::Fixed;

        pub struct Good;
        pub struct Needy;

        pub struct Missing;

        crate::mapper_function! {
            Good { configure: |_| Ok(Box::new(Fixed("good"))) }
        }

        crate::mapper_function! {
            Needy {
                setter_class: [Missing],
                configure: |w| {
                    w.dependency::<Missing>()?;
                    Ok(Box::new(Fixed("needy")))
                },
            }
        }
    }

    #[derive(Default)]
    struct Recorder {
        seen: Arc<Mutex<Vec<(PathBuf, usize, String)>>>,
    }

    impl MappingEngine for Recorder {
        fn register_from_reader(
            &mut self,
            functions: &Arc<FunctionRegistry>,
            mut stream: MappingStream,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            let mut body = String::new();
            stream.reader.read_to_string(&mut body)?;
            self.seen
                .lock()
                .unwrap()
                .push((stream.path, functions.len(), body));
            Ok(())
        }
    }

    struct Rejecting;

    impl MappingEngine for Rejecting {
        fn register_from_reader(
            &mut self,
            _functions: &Arc<FunctionRegistry>,
            _stream: MappingStream,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err("sheet `rules` is missing".into())
        }
    }

    fn config_for(module: &str) -> MapwireConfig {
        let mut config = MapwireConfig::default();
        config.functions.namespace = format!("{}::{module}", module_path!());
        config
    }

    #[test]
    #[traced_test]
    fn init_publishes_all_candidates() {
        let orchestrator =
            Orchestrator::new(config_for("healthy"), SingletonContainer::new(), Recorder::default());
        assert!(orchestrator.registry().is_none());

        let registry = orchestrator.init().unwrap();
        assert_eq!(registry.names(), ["one", "two"]);
        assert!(Arc::ptr_eq(&registry, &orchestrator.registry().unwrap()));
        assert!(logs_contain("registered mapper function"));
        assert!(logs_contain("mapping.folder is not set"));
    }

    #[test]
    fn second_init_is_rejected() {
        let orchestrator =
            Orchestrator::new(config_for("healthy"), SingletonContainer::new(), Recorder::default());
        orchestrator.init().unwrap();
        assert!(matches!(
            orchestrator.init(),
            Err(InitError::AlreadyInitialized)
        ));
        assert_eq!(orchestrator.registry().unwrap().len(), 2);
    }

    #[test]
    #[traced_test]
    fn failure_publishes_nothing() {
        let orchestrator =
            Orchestrator::new(config_for("broken"), SingletonContainer::new(), Recorder::default());
        let err = orchestrator.init().unwrap_err();

        assert!(err.candidate_name().unwrap().ends_with("::broken::Needy"));
        assert!(matches!(
            err,
            InitError::InitializationFailed {
                step: WiringStep::Inject,
                source: WiringError::DependencyResolution { .. },
                ..
            }
        ));
        assert!(orchestrator.registry().is_none());
        assert!(logs_contain("mapper function initialization failed"));

        // A failed init still counts as the one allowed attempt.
        assert!(matches!(
            orchestrator.init(),
            Err(InitError::AlreadyInitialized)
        ));
    }

    #[test]
    fn mapping_files_are_handed_off_after_registration() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.xlsx"), "second").unwrap();
        fs::write(dir.path().join("a.xlsx"), "first").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut config = config_for("healthy");
        config.mapping.folder = Some(dir.path().to_path_buf());
        let recorder = Recorder::default();
        let seen = Arc::clone(&recorder.seen);

        let orchestrator = Orchestrator::new(config, SingletonContainer::new(), recorder);
        orchestrator.init().unwrap();

        let seen = seen.lock().unwrap();
        let bodies: Vec<_> = seen.iter().map(|(_, _, b)| b.as_str()).collect();
        assert_eq!(bodies, ["first", "second"]);
        assert!(seen.iter().all(|(_, functions, _)| *functions == 2));
    }

    #[test]
    fn missing_mapping_folder_fails_init() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for("healthy");
        config.mapping.folder = Some(dir.path().join("absent"));

        let orchestrator = Orchestrator::new(config, SingletonContainer::new(), Recorder::default());
        let err = orchestrator.init().unwrap_err();
        assert!(matches!(err, InitError::MappingSource { .. }));
        assert!(orchestrator.registry().is_none());
    }

    #[test]
    fn rejected_mapping_fails_init() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("rules.xlsx"), "x").unwrap();
        let mut config = config_for("healthy");
        config.mapping.folder = Some(dir.path().to_path_buf());

        let orchestrator = Orchestrator::new(config, SingletonContainer::new(), Rejecting);
        let err = orchestrator.init().unwrap_err();
        assert!(err.to_string().contains("sheet `rules` is missing"));
        assert!(orchestrator.registry().is_none());
    }

    #[test]
    fn empty_namespace_publishes_empty_registry() {
        let orchestrator =
            Orchestrator::new(config_for("vacant"), SingletonContainer::new(), Recorder::default());
        assert!(orchestrator.init().unwrap().is_empty());
    }
}
