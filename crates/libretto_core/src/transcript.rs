//! The growing prompt/response text of a run.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// Sentinel placed before each resolved prompt in a transcript.
pub const PROMPT_BOUNDARY: &str = "\n\n__#PROMPT#__\n\n";

/// Sentinel placed after each resolved prompt, before the completion.
pub const COMPLETION_BOUNDARY: &str = "\n\n__#COMPLETION#__\n\n";

/// Default divisor for the characters-per-token heuristic.
pub const DEFAULT_TOKEN_ESTIMATE_DIVISOR: usize = 3;

/// Wrap rendered prompt text in the boundary marker pair.
///
/// # Examples
///
/// ```
/// use libretto_core::{COMPLETION_BOUNDARY, PROMPT_BOUNDARY, wrap_prompt};
///
/// let wrapped = wrap_prompt("Hello");
/// assert_eq!(wrapped, format!("{}Hello{}", PROMPT_BOUNDARY, COMPLETION_BOUNDARY));
/// ```
pub fn wrap_prompt(text: &str) -> String {
    let mut wrapped =
        String::with_capacity(PROMPT_BOUNDARY.len() + text.len() + COMPLETION_BOUNDARY.len());
    wrapped.push_str(PROMPT_BOUNDARY);
    wrapped.push_str(text);
    wrapped.push_str(COMPLETION_BOUNDARY);
    wrapped
}

/// Concatenation of every wrapped prompt and raw response of a run so far.
///
/// Append-only: the transcript only grows, and each completion call sees
/// the whole of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prompt that has already been wrapped with [`wrap_prompt`].
    pub fn push_prompt(&mut self, wrapped_prompt: &str) {
        self.text.push_str(wrapped_prompt);
    }

    /// Append a raw completion response.
    pub fn push_response(&mut self, response: &str) {
        self.text.push_str(response);
    }

    /// The full transcript text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Rough token count: transcript length divided by `divisor`.
    ///
    /// A divisor of zero is treated as one.
    pub fn approximate_tokens(&self, divisor: usize) -> usize {
        self.text.len() / divisor.max(1)
    }

    /// Split the transcript back into alternating user/assistant turns.
    ///
    /// Text following a prompt boundary becomes a `User` turn; text following
    /// a completion boundary becomes an `Assistant` turn. Segments are trimmed
    /// and blank segments are dropped. Text before the first boundary, if
    /// any, is treated as a user turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use libretto_core::{Role, Transcript, wrap_prompt};
    ///
    /// let mut transcript = Transcript::new();
    /// transcript.push_prompt(&wrap_prompt("Name a fruit."));
    /// transcript.push_response("Mango");
    /// transcript.push_prompt(&wrap_prompt("Now a color."));
    ///
    /// let turns = transcript.turns();
    /// assert_eq!(turns.len(), 3);
    /// assert_eq!(*turns[1].role(), Role::Assistant);
    /// assert_eq!(turns[1].content(), "Mango");
    /// ```
    pub fn turns(&self) -> Vec<Message> {
        let mut turns = Vec::new();
        let mut chunks = self.text.split(PROMPT_BOUNDARY);

        if let Some(preamble) = chunks.next() {
            push_turn(&mut turns, Role::User, preamble);
        }

        for chunk in chunks {
            match chunk.split_once(COMPLETION_BOUNDARY) {
                Some((prompt, completion)) => {
                    push_turn(&mut turns, Role::User, prompt);
                    push_turn(&mut turns, Role::Assistant, completion);
                }
                None => push_turn(&mut turns, Role::User, chunk),
            }
        }

        turns
    }
}

fn push_turn(turns: &mut Vec<Message>, role: Role, segment: &str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        turns.push(Message::new(role, segment));
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Transcript {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
