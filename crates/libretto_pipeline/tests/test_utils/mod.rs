//! Test utilities for Libretto pipeline tests.
//!
//! This module provides a scriptable completion port and template fixtures.

#![allow(dead_code)]

use libretto_core::{Params, PromptTemplate, Step};
use libretto_template::TemplateStore;

pub mod mock_port;

#[allow(unused_imports)]
pub use mock_port::{MockOutcome, MockPort, RecordedCall};

/// Three-step template used across executor tests.
pub const SHOP_PROMPTS: &str = r#"
[[prompt]]
type = "shop"

  [[prompt.step]]
  name = "name"
  temperature = 0.7
  text = "Name a ${shopType} in ${country}."

  [[prompt.step]]
  name = "history"
  text = "Write the history of the shop."

  [[prompt.step]]
  name = "slogan"
  max_tokens = 64
  text = "Write a slogan for it."

[[prompt]]
type = "tagline"

  [[prompt.step]]
  name = "create"
  text = "Write a tagline for a ${shopType}."

[[prompt]]
type = "empty"
"#;

/// Store loaded from [`SHOP_PROMPTS`].
pub fn shop_store() -> TemplateStore {
    TemplateStore::from_toml_str(SHOP_PROMPTS).expect("fixture templates are valid")
}

/// Template built in code from `(name, text)` pairs.
pub fn template(key: &str, steps: &[(&str, &str)]) -> PromptTemplate {
    PromptTemplate::new(
        key,
        steps
            .iter()
            .map(|(name, text)| Step::new(*name, *text, Params::new()))
            .collect(),
    )
    .expect("fixture step names are unique")
}

/// Params from literal pairs.
pub fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
