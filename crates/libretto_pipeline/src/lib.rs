//! Pipeline execution for Libretto.
//!
//! [`StepChainExecutor`] runs a template's steps in order against a
//! [`CompletionPort`](libretto_interface::CompletionPort), feeding each call
//! the whole transcript so far. [`PromptManager`] ties a template store, an
//! executor, and an output projector together behind a single call.

mod executor;
mod manager;
mod projector;
mod registry;
mod retry;

pub use executor::{RunRecord, RunState, StepChainExecutor};
pub use manager::PromptManager;
pub use projector::{FnProjector, JsonProjector, MultiStepMap, SingleStepText, StepSelector};
pub use registry::{ProjectorRegistry, SharedProjector};
pub use retry::{RetryPolicy, retry_completion};
