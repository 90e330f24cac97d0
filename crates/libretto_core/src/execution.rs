//! Records produced while a pipeline runs.

use crate::Params;
use serde::{Deserialize, Serialize};

/// Execution record for a single step of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ExecutedStep {
    /// Name of the step this record came from
    step_name: String,
    /// Position in the execution sequence (0-indexed)
    sequence_number: usize,
    /// Rendered prompt, wrapped in the boundary markers
    resolved_prompt: String,
    /// Raw text returned by the completion port
    response: String,
    /// Parameters sent with the completion request
    params: Params,
    /// Transcript length after the response was appended
    transcript_len: usize,
}

impl ExecutedStep {
    /// Create a new step record.
    pub fn new(
        step_name: impl Into<String>,
        sequence_number: usize,
        resolved_prompt: impl Into<String>,
        response: impl Into<String>,
        params: Params,
        transcript_len: usize,
    ) -> Self {
        Self {
            step_name: step_name.into(),
            sequence_number,
            resolved_prompt: resolved_prompt.into(),
            response: response.into(),
            params,
            transcript_len,
        }
    }
}

/// Ordered, append-only list of the steps executed in one run.
///
/// Records can be pushed but never modified or removed once appended.
///
/// # Examples
///
/// ```
/// use libretto_core::{ExecutedStep, ExecutedSteps, Params};
///
/// let mut steps = ExecutedSteps::new();
/// steps.push(ExecutedStep::new("a", 0, "prompt a", "X", Params::new(), 10));
/// steps.push(ExecutedStep::new("b", 1, "prompt b", "Y", Params::new(), 20));
///
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps.by_name("b").map(|s| s.response().as_str()), Some("Y"));
/// assert_eq!(steps.get(0).map(|s| s.step_name().as_str()), Some("a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutedSteps {
    steps: Vec<ExecutedStep>,
}

impl ExecutedSteps {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step record.
    pub fn push(&mut self, step: ExecutedStep) {
        self.steps.push(step);
    }

    /// Step at `index`, in execution order.
    pub fn get(&self, index: usize) -> Option<&ExecutedStep> {
        self.steps.get(index)
    }

    /// Step with the given name.
    pub fn by_name(&self, name: &str) -> Option<&ExecutedStep> {
        self.steps.iter().find(|s| s.step_name() == name)
    }

    /// First executed step.
    pub fn first(&self) -> Option<&ExecutedStep> {
        self.steps.first()
    }

    /// Last executed step.
    pub fn last(&self) -> Option<&ExecutedStep> {
        self.steps.last()
    }

    /// Iterate in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutedStep> {
        self.steps.iter()
    }

    /// Number of executed steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no step has executed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[ExecutedStep] {
        &self.steps
    }
}

impl<'a> IntoIterator for &'a ExecutedSteps {
    type Item = &'a ExecutedStep;
    type IntoIter = std::slice::Iter<'a, ExecutedStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for ExecutedSteps {
    type Item = ExecutedStep;
    type IntoIter = std::vec::IntoIter<ExecutedStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl FromIterator<ExecutedStep> for ExecutedSteps {
    fn from_iter<I: IntoIterator<Item = ExecutedStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
