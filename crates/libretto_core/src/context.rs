//! Run variables used for template substitution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-supplied variables for one run.
///
/// The executor only ever borrows a context, so it stays read-only for the
/// duration of a run and can be reused for several runs.
///
/// # Examples
///
/// ```
/// use libretto_core::RunContext;
///
/// let ctx = RunContext::new()
///     .set("shopType", "car repair")
///     .set("country", "France");
///
/// assert_eq!(ctx.get("country"), Some("France"));
/// assert_eq!(ctx.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunContext {
    vars: HashMap<String, String>,
}

impl RunContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, consuming and returning the context for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.vars.insert(key.into(), value.to_string());
        self
    }

    /// Set a variable in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.vars.insert(key.into(), value.to_string());
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// The underlying variable map.
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

impl From<HashMap<String, String>> for RunContext {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for RunContext
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        }
    }
}
