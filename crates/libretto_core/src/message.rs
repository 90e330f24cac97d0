//! Message types for conversation reconstruction.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One turn of a conversation rebuilt from a transcript.
///
/// Completion adapters for chat-style services turn a [`Transcript`](crate::Transcript)
/// into a list of these instead of sending the flat text.
///
/// # Examples
///
/// ```
/// use libretto_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Write a tagline.");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Write a tagline.");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Message {
    /// Who produced this turn
    role: Role,
    /// The text of the turn
    content: String,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}
