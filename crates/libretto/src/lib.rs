//! Declarative multi-step LLM prompt pipelines.
//!
//! Libretto runs named chains of prompt templates against a text-completion
//! backend. Each step's template is filled from caller variables, appended
//! to a transcript that already holds every earlier prompt and response,
//! and sent whole to the backend. When the chain finishes, an output
//! projector turns the executed steps into the value the caller asked for.
//!
//! # Architecture
//!
//! - `libretto_error`: location-tracked error types gathered into [`LibrettoError`]
//! - `libretto_core`: templates, run variables, transcript, execution records, config
//! - `libretto_interface`: the [`CompletionPort`], [`OutputProjector`] and [`DocumentNode`] seams
//! - `libretto_template`: `${var}` substitution and the validating [`TemplateStore`]
//! - `libretto_pipeline`: the [`StepChainExecutor`], retry, projectors and [`PromptManager`]
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use libretto::{
//!     CompletionError, CompletionPort, MultiStepMap, Params, PromptManager, RunContext,
//!     TemplateStore,
//! };
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl CompletionPort for Echo {
//!     async fn complete(&self, prompt: &str, _params: &Params) -> Result<String, CompletionError> {
//!         Ok(format!("{} chars seen", prompt.len()))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> libretto::LibrettoResult<()> {
//! let store = TemplateStore::from_toml_str(r#"
//! [[prompt]]
//! type = "shop"
//!
//!   [[prompt.step]]
//!   name = "name"
//!   text = "Name a ${shopType} in ${country}."
//!
//!   [[prompt.step]]
//!   name = "slogan"
//!   temperature = 0.7
//!   text = "Write a slogan for it."
//! "#)?;
//!
//! let manager = PromptManager::new(store, Echo);
//! let ctx = RunContext::new().set("shopType", "bakery").set("country", "Peru");
//!
//! let outputs = manager.complete("shop", &ctx, &MultiStepMap).await?;
//! assert_eq!(outputs.len(), 2);
//! # Ok(())
//! # }
//! ```

pub use libretto_core::*;
pub use libretto_error::*;
pub use libretto_interface::*;
pub use libretto_pipeline::*;
pub use libretto_template::*;
