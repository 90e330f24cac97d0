//! Caller-facing entry point.

use crate::{ProjectorRegistry, RunRecord, StepChainExecutor};
use libretto_core::{ExecutionConfig, RunContext};
use libretto_error::{ConfigError, ConfigErrorKind, LibrettoResult};
use libretto_interface::{CompletionPort, OutputProjector};
use libretto_template::TemplateStore;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Runs named pipelines from a template store and projects their output.
///
/// # Example
///
/// ```rust,ignore
/// use libretto_core::RunContext;
/// use libretto_pipeline::{PromptManager, SingleStepText};
/// use libretto_template::TemplateStore;
///
/// let store = TemplateStore::from_file("prompts.toml")?;
/// let manager = PromptManager::new(store, my_port);
///
/// let ctx = RunContext::new().set("shopType", "bakery").set("country", "Peru");
/// let tagline = manager.complete("tagline", &ctx, &SingleStepText).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PromptManager<P> {
    store: Arc<TemplateStore>,
    executor: StepChainExecutor<P>,
}

impl<P: CompletionPort> PromptManager<P> {
    /// Manager with the default execution configuration.
    pub fn new(store: impl Into<Arc<TemplateStore>>, port: P) -> Self {
        Self::with_config(store, port, ExecutionConfig::default())
    }

    /// Manager honoring `config`. `config.templates_path` is ignored.
    pub fn with_config(
        store: impl Into<Arc<TemplateStore>>,
        port: P,
        config: ExecutionConfig,
    ) -> Self {
        Self {
            store: store.into(),
            executor: StepChainExecutor::with_config(port, config),
        }
    }

    /// Manager whose templates are loaded from `config.templates_path`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no templates path is set, or a
    /// template validation error if the document cannot be loaded.
    #[instrument(skip(port, config), fields(templates_path = ?config.templates_path()))]
    pub fn from_config(port: P, config: ExecutionConfig) -> LibrettoResult<Self> {
        config.validate()?;

        let path = config.templates_path().as_ref().ok_or_else(|| {
            ConfigError::new(ConfigErrorKind::InvalidValue(
                "templates_path must be set to load templates".to_string(),
            ))
        })?;
        let store = TemplateStore::from_file(path)?;

        Ok(Self::with_config(store, port, config))
    }

    /// The loaded templates.
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// The executor running the pipelines.
    pub fn executor(&self) -> &StepChainExecutor<P> {
        &self.executor
    }

    /// Run the pipeline `key` and return the raw run record.
    pub async fn run(&self, key: &str, ctx: &RunContext) -> LibrettoResult<RunRecord> {
        let template = self.store.require(key)?;
        self.executor.run(&template, ctx).await
    }

    /// Run the pipeline `key` and project its steps with `projector`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no template is registered under `key`
    /// - the run fails (see [`StepChainExecutor::run`])
    /// - the projector rejects the executed steps
    #[instrument(skip(self, ctx, projector), fields(vars = ctx.len()))]
    pub async fn complete<O>(
        &self,
        key: &str,
        ctx: &RunContext,
        projector: &O,
    ) -> LibrettoResult<O::Output>
    where
        O: OutputProjector,
    {
        let record = self.run(key, ctx).await?;
        let output = projector.project(record.executed_steps())?;
        debug!(pipeline = key, "Projected pipeline output");
        Ok(output)
    }

    /// [`complete`](Self::complete) with no variables; template text is sent
    /// as written.
    pub async fn complete_without_variables<O>(
        &self,
        key: &str,
        projector: &O,
    ) -> LibrettoResult<O::Output>
    where
        O: OutputProjector,
    {
        self.complete(key, &RunContext::new(), projector).await
    }

    /// Run the pipeline `key` with the projector registered for it.
    ///
    /// The projector is looked up before anything is sent to the port.
    pub async fn complete_registered<T>(
        &self,
        key: &str,
        ctx: &RunContext,
        registry: &ProjectorRegistry<T>,
    ) -> LibrettoResult<T> {
        let projector = registry.require(key)?;
        self.complete(key, ctx, &projector).await
    }
}
