//! Built-in output projectors.

use libretto_core::{ExecutedStep, ExecutedSteps};
use libretto_error::{OutputProjectionError, OutputProjectionErrorKind};
use libretto_interface::OutputProjector;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Response text of the first step.
///
/// # Examples
///
/// ```
/// use libretto_core::{ExecutedStep, ExecutedSteps, Params};
/// use libretto_interface::OutputProjector;
/// use libretto_pipeline::SingleStepText;
///
/// let steps: ExecutedSteps = vec![ExecutedStep::new("create", 0, "p", "Fresh daily", Params::new(), 20)]
///     .into_iter()
///     .collect();
/// assert_eq!(SingleStepText.project(&steps).unwrap(), "Fresh daily");
/// assert!(SingleStepText.project(&ExecutedSteps::new()).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleStepText;

impl OutputProjector for SingleStepText {
    type Output = String;

    fn project(&self, steps: &ExecutedSteps) -> Result<String, OutputProjectionError> {
        steps
            .first()
            .map(|step| step.response().clone())
            .ok_or_else(|| OutputProjectionError::new(OutputProjectionErrorKind::NoSteps))
    }
}

/// Every step's response, keyed by step name.
///
/// A run without steps projects to an empty map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiStepMap;

impl OutputProjector for MultiStepMap {
    type Output = HashMap<String, String>;

    fn project(&self, steps: &ExecutedSteps) -> Result<Self::Output, OutputProjectionError> {
        Ok(steps
            .iter()
            .map(|step| (step.step_name().clone(), step.response().clone()))
            .collect())
    }
}

/// Projector backed by a caller-supplied closure.
///
/// The closure sees every executed step and must report shape mismatches as
/// an [`OutputProjectionError`] rather than inventing a value.
///
/// # Examples
///
/// ```
/// use libretto_core::{ExecutedStep, ExecutedSteps, Params};
/// use libretto_error::OutputProjectionError;
/// use libretto_interface::OutputProjector;
/// use libretto_pipeline::FnProjector;
///
/// let word_count = FnProjector::new(|steps: &ExecutedSteps| {
///     steps
///         .by_name("story")
///         .map(|s| s.response().split_whitespace().count())
///         .ok_or_else(|| OutputProjectionError::custom("no story step"))
/// });
///
/// let steps: ExecutedSteps = vec![ExecutedStep::new("story", 0, "p", "Once upon a time", Params::new(), 30)]
///     .into_iter()
///     .collect();
/// assert_eq!(word_count.project(&steps).unwrap(), 4);
/// ```
#[derive(Clone)]
pub struct FnProjector<F> {
    f: F,
}

impl<F> FnProjector<F> {
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> std::fmt::Debug for FnProjector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProjector").finish_non_exhaustive()
    }
}

impl<F, T> OutputProjector for FnProjector<F>
where
    F: Fn(&ExecutedSteps) -> Result<T, OutputProjectionError> + Send + Sync,
{
    type Output = T;

    fn project(&self, steps: &ExecutedSteps) -> Result<T, OutputProjectionError> {
        (self.f)(steps)
    }
}

/// Which executed step a projector reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StepSelector {
    /// The first step
    First,
    /// The last step
    Last,
    /// The step at a 0-based position
    Index(usize),
    /// The step with a given name
    Name(String),
}

impl StepSelector {
    /// Pick the selected step out of `steps`.
    #[track_caller]
    pub fn select<'a>(
        &self,
        steps: &'a ExecutedSteps,
    ) -> Result<&'a ExecutedStep, OutputProjectionError> {
        let selected = match self {
            StepSelector::First => steps.first(),
            StepSelector::Last => steps.last(),
            StepSelector::Index(index) => {
                if steps.is_empty() {
                    None
                } else {
                    Some(steps.get(*index).ok_or_else(|| {
                        OutputProjectionError::new(OutputProjectionErrorKind::StepOutOfRange {
                            index: *index,
                            len: steps.len(),
                        })
                    })?)
                }
            }
            StepSelector::Name(name) => {
                if steps.is_empty() {
                    None
                } else {
                    Some(steps.by_name(name).ok_or_else(|| {
                        OutputProjectionError::new(OutputProjectionErrorKind::MissingStep(
                            name.clone(),
                        ))
                    })?)
                }
            }
        };

        selected.ok_or_else(|| OutputProjectionError::new(OutputProjectionErrorKind::NoSteps))
    }
}

/// Deserializes one step's response as JSON.
///
/// Surrounding whitespace is trimmed and a fenced code block (` ```json ... ``` `)
/// is unwrapped before parsing.
///
/// # Examples
///
/// ```
/// use libretto_core::{ExecutedStep, ExecutedSteps, Params};
/// use libretto_interface::OutputProjector;
/// use libretto_pipeline::JsonProjector;
///
/// let steps: ExecutedSteps = vec![ExecutedStep::new(
///     "names",
///     0,
///     "p",
///     "```json\n[\"Ada\", \"Grace\"]\n```",
///     Params::new(),
///     40,
/// )]
/// .into_iter()
/// .collect();
///
/// let names: Vec<String> = JsonProjector::last().project(&steps).unwrap();
/// assert_eq!(names, vec!["Ada", "Grace"]);
/// ```
pub struct JsonProjector<T> {
    selector: StepSelector,
    _output: PhantomData<fn() -> T>,
}

impl<T> JsonProjector<T> {
    /// Parse the step chosen by `selector`.
    pub fn new(selector: StepSelector) -> Self {
        Self {
            selector,
            _output: PhantomData,
        }
    }

    /// Parse the first step.
    pub fn first() -> Self {
        Self::new(StepSelector::First)
    }

    /// Parse the last step.
    pub fn last() -> Self {
        Self::new(StepSelector::Last)
    }

    /// Parse the step at `index`.
    pub fn index(index: usize) -> Self {
        Self::new(StepSelector::Index(index))
    }

    /// Parse the step named `name`.
    pub fn step(name: impl Into<String>) -> Self {
        Self::new(StepSelector::Name(name.into()))
    }

    /// The step this projector reads.
    pub fn selector(&self) -> &StepSelector {
        &self.selector
    }
}

impl<T> Clone for JsonProjector<T> {
    fn clone(&self) -> Self {
        Self::new(self.selector.clone())
    }
}

impl<T> std::fmt::Debug for JsonProjector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonProjector")
            .field("selector", &self.selector)
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> OutputProjector for JsonProjector<T> {
    type Output = T;

    fn project(&self, steps: &ExecutedSteps) -> Result<T, OutputProjectionError> {
        let step = self.selector.select(steps)?;
        let json = strip_code_fence(step.response());

        serde_json::from_str(json).map_err(|e| {
            OutputProjectionError::new(OutputProjectionErrorKind::Deserialize {
                step: step.step_name().clone(),
                message: e.to_string(),
                response: step.response().clone(),
            })
        })
    }
}

fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the info string (`json`, `JSON`, ...) on the opening fence line.
    // A single-line fence has no info string.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}
