//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Speaker of one turn in a reconstructed conversation.
///
/// [`Transcript::turns`](crate::Transcript::turns) only yields `User` and
/// `Assistant` turns. `System` is for chat-style completion adapters that
/// put their own instructions in front of the turns before sending them.
///
/// # Examples
///
/// ```
/// use libretto_core::{Message, Role, Transcript, wrap_prompt};
///
/// let mut transcript = Transcript::new();
/// transcript.push_prompt(&wrap_prompt("Name a fruit."));
///
/// let mut messages = vec![Message::new(Role::System, "You are a helpful assistant.")];
/// messages.extend(transcript.turns());
/// assert_eq!(*messages[1].role(), Role::User);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Adapter-supplied instructions; never produced from a transcript
    System,
    /// A rendered prompt
    User,
    /// A completion response
    Assistant,
}
