//! Output projectors registered by pipeline key.

use libretto_error::{OutputProjectionError, OutputProjectionErrorKind};
use libretto_interface::OutputProjector;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Shared, type-erased projector producing `T`.
pub type SharedProjector<T> = Arc<dyn OutputProjector<Output = T>>;

/// Explicit map from pipeline key to the projector for its output.
///
/// Every projector in one registry produces the same output type `T`, so
/// callers can run any registered pipeline and get a `T` back.
///
/// # Example
///
/// ```
/// use libretto_pipeline::{ProjectorRegistry, SingleStepText};
///
/// let mut registry = ProjectorRegistry::new();
/// registry.register("tagline", SingleStepText);
/// registry.register("slogan", SingleStepText);
///
/// assert!(registry.contains("tagline"));
/// assert_eq!(registry.len(), 2);
/// ```
pub struct ProjectorRegistry<T> {
    projectors: HashMap<String, SharedProjector<T>>,
}

impl<T> ProjectorRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            projectors: HashMap::new(),
        }
    }

    /// Register `projector` for `key`, replacing any earlier registration.
    pub fn register<P>(&mut self, key: impl Into<String>, projector: P) -> &mut Self
    where
        P: OutputProjector<Output = T> + 'static,
    {
        let key = key.into();
        debug!(pipeline = %key, "Registering output projector");
        self.projectors.insert(key, Arc::new(projector));
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<P>(mut self, key: impl Into<String>, projector: P) -> Self
    where
        P: OutputProjector<Output = T> + 'static,
    {
        self.register(key, projector);
        self
    }

    /// Projector registered for `key`, if any.
    pub fn get(&self, key: &str) -> Option<SharedProjector<T>> {
        self.projectors.get(key).cloned()
    }

    /// Projector registered for `key`, or a projection error.
    #[track_caller]
    pub fn require(&self, key: &str) -> Result<SharedProjector<T>, OutputProjectionError> {
        self.get(key).ok_or_else(|| {
            OutputProjectionError::new(OutputProjectionErrorKind::NoProjector(key.to_string()))
        })
    }

    /// True if a projector is registered for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.projectors.contains_key(key)
    }

    /// Registered pipeline keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.projectors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered projectors.
    pub fn len(&self) -> usize {
        self.projectors.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projectors.is_empty()
    }
}

impl<T> Default for ProjectorRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ProjectorRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectorRegistry")
            .field("pipelines", &self.keys())
            .finish()
    }
}
