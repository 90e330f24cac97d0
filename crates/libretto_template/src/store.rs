//! Loading and validating prompt templates.

use crate::TreeNode;
use libretto_core::{Params, PromptTemplate, Step};
use libretto_error::{
    TemplateNotFoundError, TemplateValidationError, TemplateValidationErrorKind,
};
use libretto_interface::DocumentNode;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Element name of a prompt definition.
pub const PROMPT_ELEMENT: &str = "prompt";

/// Element name of a step definition.
pub const STEP_ELEMENT: &str = "step";

/// Prompt attribute holding the template key.
pub const TEMPLATE_KEY_ATTRIBUTE: &str = "type";

/// Step attribute holding the step name.
pub const STEP_NAME_ATTRIBUTE: &str = "name";

/// Validated templates, keyed by pipeline key.
///
/// A store is loaded once and never modified afterwards, so it can be shared
/// between concurrent runs behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, Arc<PromptTemplate>>,
}

impl TemplateStore {
    /// Load every `prompt` child of `root`.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateValidationError`] if:
    /// - a prompt has no `type` attribute
    /// - a step has no `name` attribute
    /// - two steps of one prompt share a name
    #[instrument(skip_all, fields(root = root.name()))]
    pub fn load<N: DocumentNode>(root: &N) -> Result<Self, TemplateValidationError> {
        let mut templates = HashMap::new();

        for (index, prompt) in root.children_named(PROMPT_ELEMENT).into_iter().enumerate() {
            let template = load_prompt(index, prompt)?;
            let key = template.key().clone();

            if template.is_empty() {
                warn!(template = %key, "Prompt template has no steps");
            }
            debug!(template = %key, steps = template.len(), "Loaded prompt template");

            if templates.insert(key.clone(), Arc::new(template)).is_some() {
                warn!(template = %key, "Prompt template defined twice, keeping the later definition");
            }
        }

        info!(count = templates.len(), "Loaded prompt templates");
        Ok(Self { templates })
    }

    /// Parse a TOML template document and load it.
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateValidationError> {
        Self::load(&TreeNode::from_toml_str(content)?)
    }

    /// Read a TOML template document from disk and load it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateValidationError> {
        Self::load(&TreeNode::from_toml_file(path)?)
    }

    /// Template registered under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Arc<PromptTemplate>> {
        self.templates.get(key).cloned()
    }

    /// Template registered under `key`, or a not-found error.
    #[track_caller]
    pub fn require(&self, key: &str) -> Result<Arc<PromptTemplate>, TemplateNotFoundError> {
        self.get(key).ok_or_else(|| TemplateNotFoundError::new(key))
    }

    /// True if a template is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// All template keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True if no templates were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn load_prompt<N: DocumentNode>(
    index: usize,
    prompt: &N,
) -> Result<PromptTemplate, TemplateValidationError> {
    let key = prompt
        .attribute(TEMPLATE_KEY_ATTRIBUTE)
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            TemplateValidationError::new(TemplateValidationErrorKind::MissingTemplateKey(
                index + 1,
            ))
        })?;

    let mut steps = Vec::new();

    for (position, step) in prompt.children_named(STEP_ELEMENT).into_iter().enumerate() {
        let name = step
            .attribute(STEP_NAME_ATTRIBUTE)
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| {
                TemplateValidationError::new(TemplateValidationErrorKind::MissingStepName {
                    template: key.to_string(),
                    position: position + 1,
                })
            })?;

        let parameters: Params = step
            .attributes()
            .into_iter()
            .filter(|(k, _)| *k != STEP_NAME_ATTRIBUTE)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        steps.push(Step::new(name, normalize_body(step.text()), parameters));
    }

    PromptTemplate::new(key, steps)
}

/// Strip document indentation from a step body.
///
/// Each line is trimmed, blank lines at the start and end are dropped, and
/// the remaining lines are joined with `\n`, so blank lines between content
/// lines survive.
///
/// # Examples
///
/// ```
/// use libretto_template::normalize_body;
///
/// let body = "\n    First line\n\n      Second line\n  ";
/// assert_eq!(normalize_body(body), "First line\n\nSecond line");
/// ```
pub fn normalize_body(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());

    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
