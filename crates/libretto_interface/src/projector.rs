//! Turning a finished run into an application-level value.

use libretto_core::ExecutedSteps;
use libretto_error::OutputProjectionError;
use std::sync::Arc;

/// Strategy converting the ordered steps of a completed run into `Output`.
///
/// Projectors run only after every step succeeded. A projector that cannot
/// build its output must return an [`OutputProjectionError`]; it must never
/// fall back to a default value, so callers can tell "the completion call
/// failed" from "the completion didn't match the expected shape".
pub trait OutputProjector: Send + Sync {
    /// The value produced from a run.
    type Output;

    /// Build the output from the executed steps.
    fn project(&self, steps: &ExecutedSteps) -> Result<Self::Output, OutputProjectionError>;
}

impl<P: OutputProjector + ?Sized> OutputProjector for &P {
    type Output = P::Output;

    fn project(&self, steps: &ExecutedSteps) -> Result<Self::Output, OutputProjectionError> {
        (**self).project(steps)
    }
}

impl<P: OutputProjector + ?Sized> OutputProjector for Box<P> {
    type Output = P::Output;

    fn project(&self, steps: &ExecutedSteps) -> Result<Self::Output, OutputProjectionError> {
        (**self).project(steps)
    }
}

impl<P: OutputProjector + ?Sized> OutputProjector for Arc<P> {
    type Output = P::Output;

    fn project(&self, steps: &ExecutedSteps) -> Result<Self::Output, OutputProjectionError> {
        (**self).project(steps)
    }
}
