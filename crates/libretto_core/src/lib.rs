//! Core data types for the Libretto prompt pipeline library.
//!
//! This crate provides the data model shared by every Libretto crate:
//! templates and steps, run variables, the transcript, and execution records.

mod config;
mod context;
mod execution;
mod message;
mod observability;
mod role;
mod step;
mod transcript;

pub use config::{ExecutionConfig, ExecutionConfigBuilder, ExecutionConfigBuilderError};
pub use context::RunContext;
pub use execution::{ExecutedStep, ExecutedSteps};
pub use message::{Message, MessageBuilder, MessageBuilderError};
pub use observability::{init_json_tracing, init_tracing};
pub use role::Role;
pub use step::{PromptTemplate, Step, StepBuilder, StepBuilderError};
pub use transcript::{
    COMPLETION_BOUNDARY, DEFAULT_TOKEN_ESTIMATE_DIVISOR, PROMPT_BOUNDARY, Transcript, wrap_prompt,
};

/// Request parameters: literal string key/value pairs.
///
/// Ordered so that logged parameter sets read the same on every run.
pub type Params = std::collections::BTreeMap<String, String>;
