//! `${var}` substitution.

use libretto_core::RunContext;
use libretto_error::{RenderError, RenderErrorKind};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(.+?)\}").expect("placeholder pattern is valid"));

/// Stateless text substitution engine.
///
/// Placeholders are written `${name}`. In the default lenient mode a
/// placeholder with no value becomes an empty string; a strict engine
/// rejects it instead.
///
/// # Examples
///
/// ```
/// use libretto_core::RunContext;
/// use libretto_template::TemplateEngine;
///
/// let engine = TemplateEngine::new();
/// let ctx = RunContext::new().set("x", "Z");
/// assert_eq!(engine.process("a${x}b${x}c", &ctx), "aZbZc");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateEngine {
    strict: bool,
}

impl TemplateEngine {
    /// Lenient engine: unresolved placeholders become empty strings.
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Strict engine: [`render`](Self::render) fails on unresolved placeholders.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Engine with the given strictness.
    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    /// True if unresolved placeholders are rejected by `render`.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Substitute every placeholder with its value from `vars`.
    ///
    /// With no variables at all the text is returned untouched, placeholders
    /// included. Otherwise a placeholder whose name is missing from `vars`
    /// is replaced with an empty string. Substitution is a single pass, so
    /// values that themselves look like placeholders are left as written.
    pub fn process(&self, text: &str, vars: &RunContext) -> String {
        if vars.is_empty() {
            return text.to_string();
        }

        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                vars.get(&caps[1]).unwrap_or_default().to_string()
            })
            .into_owned()
    }

    /// Substitute placeholders, honoring this engine's strictness.
    ///
    /// A lenient engine behaves exactly like [`process`](Self::process). A
    /// strict engine first checks every placeholder, even when `vars` is
    /// empty, and fails on the first one without a value.
    pub fn render(&self, text: &str, vars: &RunContext) -> Result<String, RenderError> {
        if self.strict
            && let Some(missing) = placeholders(text)
                .into_iter()
                .find(|name| vars.get(name).is_none())
        {
            return Err(RenderError::new(RenderErrorKind::UnresolvedVariable(
                missing,
            )));
        }

        Ok(self.process(text, vars))
    }
}

/// Distinct placeholder names in `text`, in order of first appearance.
///
/// # Examples
///
/// ```
/// use libretto_template::placeholders;
///
/// assert_eq!(placeholders("${b} ${a} ${b}"), vec!["b", "a"]);
/// ```
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
