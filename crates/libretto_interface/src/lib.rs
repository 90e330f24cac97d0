//! Trait definitions for the Libretto prompt pipeline library.
//!
//! These traits mark the seams between the execution engine and the
//! collaborators it does not own: the completion backend, the output shape
//! a caller wants, and the document format templates are written in.

mod completion;
mod document;
mod projector;

pub use completion::{CompletionPort, DEFAULT_RETRY_DELAY};
pub use document::DocumentNode;
pub use projector::OutputProjector;
