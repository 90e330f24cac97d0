//! Template engine and template store for Libretto.
//!
//! - [`TemplateEngine`] substitutes `${var}` placeholders.
//! - [`TemplateStore`] validates template documents into [`PromptTemplate`](libretto_core::PromptTemplate)s.
//! - [`TreeNode`] is an owned document tree, with a TOML adapter.
//! - [`merge`] resolves per-step request parameters against port defaults.

mod document;
mod engine;
mod params;
mod store;

pub use document::{ROOT_NODE, TEXT_KEY, TreeNode};
pub use engine::{TemplateEngine, placeholders};
pub use params::merge;
pub use store::{
    PROMPT_ELEMENT, STEP_ELEMENT, STEP_NAME_ATTRIBUTE, TEMPLATE_KEY_ATTRIBUTE, TemplateStore,
    normalize_body,
};
