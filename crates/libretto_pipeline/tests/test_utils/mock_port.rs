//! Scriptable completion port.

use async_trait::async_trait;
use libretto_core::Params;
use libretto_error::CompletionError;
use libretto_interface::CompletionPort;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// What the mock port does on one call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return this response text
    Reply(String),
    /// Fail with a retryable error
    Transient,
    /// Fail with a permanent error
    Fatal,
}

impl MockOutcome {
    pub fn reply(text: &str) -> Self {
        MockOutcome::Reply(text.to_string())
    }

    fn resolve(&self) -> Result<String, CompletionError> {
        match self {
            MockOutcome::Reply(text) => Ok(text.clone()),
            MockOutcome::Transient => Err(CompletionError::transient("HTTP 503: overloaded")),
            MockOutcome::Fatal => Err(CompletionError::fatal("HTTP 401: unauthorized")),
        }
    }
}

/// One request received by the mock port.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub params: Params,
}

/// Completion port that plays back a script of outcomes.
///
/// Once the script runs out, every further call gets `fallback`.
#[derive(Debug)]
pub struct MockPort {
    script: Mutex<VecDeque<MockOutcome>>,
    fallback: MockOutcome,
    calls: Mutex<Vec<RecordedCall>>,
    defaults: Params,
    max_attempts: usize,
}

impl MockPort {
    /// Port returning `responses` in order, then failing fatally.
    pub fn replies(responses: &[&str]) -> Self {
        Self::scripted(
            responses.iter().map(|r| MockOutcome::reply(r)).collect(),
            MockOutcome::Fatal,
        )
    }

    /// Port playing `script`, then `fallback` forever.
    pub fn scripted(script: Vec<MockOutcome>, fallback: MockOutcome) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: Mutex::new(Vec::new()),
            defaults: Params::new(),
            max_attempts: 1,
        }
    }

    /// Port that always behaves the same way.
    pub fn always(outcome: MockOutcome) -> Self {
        Self::scripted(Vec::new(), outcome)
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_defaults(mut self, defaults: Params) -> Self {
        self.defaults = defaults;
        self
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }
}

#[async_trait]
impl CompletionPort for MockPort {
    async fn complete(&self, prompt: &str, params: &Params) -> Result<String, CompletionError> {
        self.calls.lock().expect("calls lock").push(RecordedCall {
            prompt: prompt.to_string(),
            params: params.clone(),
        });

        let next = self.script.lock().expect("script lock").pop_front();
        next.unwrap_or_else(|| self.fallback.clone()).resolve()
    }

    fn default_params(&self) -> Params {
        self.defaults.clone()
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(5)
    }

    fn port_name(&self) -> &str {
        "mock"
    }
}
