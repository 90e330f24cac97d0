//! Step-chain execution.
//!
//! A run renders each step of a template in order, appends it to a growing
//! transcript, and sends the whole transcript to the completion port, so
//! every step sees all earlier prompts and responses.

use crate::{RetryPolicy, retry_completion};
use libretto_core::{
    ExecutedStep, ExecutedSteps, ExecutionConfig, Params, PromptTemplate, RunContext, Step,
    Transcript, wrap_prompt,
};
use libretto_error::LibrettoResult;
use libretto_interface::CompletionPort;
use libretto_template::{TemplateEngine, merge};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    /// Nothing has executed yet
    Idle,
    /// Executing the step at `step_index`
    Running {
        /// 0-based index of the current step
        step_index: usize,
    },
    /// Every step succeeded
    Completed,
    /// The step at `step_index` failed and the run was abandoned
    Failed {
        /// 0-based index of the failing step
        step_index: usize,
    },
}

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RunRecord {
    /// Key of the template that ran
    pipeline: String,
    /// Executed steps, in order
    executed_steps: ExecutedSteps,
    /// Final transcript
    transcript: Transcript,
    /// Terminal state of the run
    state: RunState,
}

impl RunRecord {
    /// Take the executed steps, dropping the rest of the record.
    pub fn into_steps(self) -> ExecutedSteps {
        self.executed_steps
    }
}

/// Runs prompt templates against a completion port.
///
/// The executor owns no per-run state, so one instance can drive any number
/// of concurrent runs.
#[derive(Debug, Clone)]
pub struct StepChainExecutor<P> {
    port: P,
    engine: TemplateEngine,
    config: ExecutionConfig,
}

impl<P: CompletionPort> StepChainExecutor<P> {
    /// Executor with the default configuration.
    pub fn new(port: P) -> Self {
        Self::with_config(port, ExecutionConfig::default())
    }

    /// Executor honoring `config`.
    pub fn with_config(port: P, config: ExecutionConfig) -> Self {
        Self {
            port,
            engine: TemplateEngine::with_strict(*config.strict_variables()),
            config,
        }
    }

    /// The completion port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// The template engine used to render steps.
    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// The execution configuration.
    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Execute every step of `template` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - strict rendering finds a placeholder without a value
    /// - the completion port fails fatally
    /// - the port keeps failing transiently until the retry policy runs out
    ///
    /// A failed run returns no partial result.
    #[instrument(
        skip(self, template, ctx),
        fields(pipeline = %template.key(), steps = template.len(), port = self.port.port_name())
    )]
    pub async fn run(
        &self,
        template: &PromptTemplate,
        ctx: &RunContext,
    ) -> LibrettoResult<RunRecord> {
        let pipeline = template.key().as_str();
        let total = template.len();
        let policy = RetryPolicy::from_port(&self.port);
        let defaults = self.port.default_params();

        let mut state = RunState::Idle;
        let mut transcript = Transcript::new();
        let mut executed_steps = ExecutedSteps::new();

        for (index, step) in template.steps().iter().enumerate() {
            state = transition(pipeline, state, RunState::Running { step_index: index });

            let result = self
                .run_step(pipeline, index, total, step, ctx, &defaults, &policy, &mut transcript)
                .await;

            match result {
                Ok(executed) => executed_steps.push(executed),
                Err(e) => {
                    warn!(pipeline, step = %step.name(), error = %e, "Pipeline step failed");
                    transition(pipeline, state, RunState::Failed { step_index: index });
                    return Err(e);
                }
            }
        }

        let state = transition(pipeline, state, RunState::Completed);
        info!(pipeline, steps = executed_steps.len(), "Pipeline completed");

        Ok(RunRecord {
            pipeline: pipeline.to_string(),
            executed_steps,
            transcript,
            state,
        })
    }

    #[allow(clippy::too_many_arguments)]
    async fn run_step(
        &self,
        pipeline: &str,
        index: usize,
        total: usize,
        step: &Step,
        ctx: &RunContext,
        defaults: &Params,
        policy: &RetryPolicy,
        transcript: &mut Transcript,
    ) -> LibrettoResult<ExecutedStep> {
        let rendered = self.engine.render(step.template_text(), ctx)?;
        let wrapped = wrap_prompt(rendered.trim());
        transcript.push_prompt(&wrapped);

        let params = merge(defaults, step.parameters());

        info!(
            pipeline,
            step = index + 1,
            of = total,
            step_name = %step.name(),
            approx_tokens = transcript.approximate_tokens(*self.config.token_estimate_divisor()),
            params = ?params,
            "Processing prompt step"
        );

        if *self.config.log_prompts() {
            info!(pipeline, step_name = %step.name(), transcript = %transcript, "Sending transcript");
        }

        let prompt = transcript.as_str();
        let port = &self.port;
        let request_params = &params;
        let response =
            retry_completion(policy, move || port.complete(prompt, request_params)).await?;

        transcript.push_response(&response);

        Ok(ExecutedStep::new(
            step.name(),
            index,
            wrapped,
            response,
            params,
            transcript.len(),
        ))
    }
}

fn transition(pipeline: &str, from: RunState, to: RunState) -> RunState {
    debug!(pipeline, ?from, ?to, "Run state transition");
    to
}
