//! Prompt templates and their steps.

use crate::Params;
use libretto_error::{TemplateValidationError, TemplateValidationErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One unit of a pipeline: template text, a name, and literal parameter overrides.
///
/// Steps are immutable once loaded.
///
/// # Examples
///
/// ```
/// use libretto_core::{Params, Step};
///
/// let mut params = Params::new();
/// params.insert("temperature".to_string(), "0.7".to_string());
///
/// let step = Step::new("create", "Write a tagline for a ${shopType}.", params);
/// assert_eq!(step.name(), "create");
/// assert_eq!(step.parameters().get("temperature").map(String::as_str), Some("0.7"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Step {
    /// Name, unique within the owning template
    name: String,
    /// Raw text containing `${var}` placeholders
    template_text: String,
    /// Per-step request parameters that override the port defaults
    #[builder(default)]
    parameters: Params,
}

impl Step {
    /// Creates a new step.
    pub fn new(name: impl Into<String>, template_text: impl Into<String>, parameters: Params) -> Self {
        Self {
            name: name.into(),
            template_text: template_text.into(),
            parameters,
        }
    }

    /// Returns a builder for constructing a Step.
    pub fn builder() -> StepBuilder {
        StepBuilder::default()
    }
}

/// A named, ordered sequence of steps.
///
/// Step names are pairwise distinct. [`PromptTemplate::new`] is the only way
/// to build one and rejects duplicates, so no template can lose a step's
/// response to a name collision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct PromptTemplate {
    /// Key the pipeline is requested by
    key: String,
    /// Steps in execution order
    steps: Vec<Step>,
}

impl PromptTemplate {
    /// Creates a template, checking that step names are unique.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateValidationErrorKind::DuplicateStepName`] naming the
    /// first repeated step.
    ///
    /// # Examples
    ///
    /// ```
    /// use libretto_core::{Params, PromptTemplate, Step};
    ///
    /// let ok = PromptTemplate::new("shop", vec![Step::new("a", "one", Params::new())]);
    /// assert!(ok.is_ok());
    ///
    /// let dup = PromptTemplate::new(
    ///     "shop",
    ///     vec![Step::new("a", "one", Params::new()), Step::new("a", "two", Params::new())],
    /// );
    /// assert!(dup.is_err());
    /// ```
    #[track_caller]
    pub fn new(
        key: impl Into<String>,
        steps: Vec<Step>,
    ) -> Result<Self, TemplateValidationError> {
        let key = key.into();

        let mut seen = HashSet::new();
        if let Some(repeated) = steps.iter().find(|step| !seen.insert(step.name().as_str())) {
            return Err(TemplateValidationError::new(
                TemplateValidationErrorKind::DuplicateStepName {
                    template: key,
                    step: repeated.name().clone(),
                },
            ));
        }

        Ok(Self { key, steps })
    }

    /// Look up a step by name.
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name() == name)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the template has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
