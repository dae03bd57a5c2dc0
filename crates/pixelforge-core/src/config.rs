//! Workflow configuration.
//!
//! Limits and timings are explicit values handed to the workflow at
//! construction rather than module-level constants.

use std::time::Duration;

/// Default payload ceiling: 20 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Default minimum width and height in pixels.
pub const DEFAULT_MIN_DIMENSION: u32 = 50;

/// Default notification lifetime.
pub const DEFAULT_NOTIFICATION_LIFETIME: Duration = Duration::from_secs(5);

/// What to do with a response that arrives after its file was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResultPolicy {
    /// Drop successful payloads issued for a superseded selection.
    #[default]
    Discard,
    /// Store late payloads in the current result slot regardless.
    Apply,
}

/// Configuration for an [`UpscaleWorkflow`](crate::UpscaleWorkflow).
///
/// # Example
///
/// ```
/// use pixelforge_core::{StaleResultPolicy, WorkflowConfig};
/// use std::time::Duration;
///
/// let config = WorkflowConfig::new()
///     .with_notification_lifetime(Duration::from_secs(3))
///     .with_stale_results(StaleResultPolicy::Apply);
/// assert_eq!(config.min_dimension(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    max_file_size: u64,
    min_dimension: u32,
    notification_lifetime: Duration,
    stale_results: StaleResultPolicy,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            min_dimension: DEFAULT_MIN_DIMENSION,
            notification_lifetime: DEFAULT_NOTIFICATION_LIFETIME,
            stale_results: StaleResultPolicy::default(),
        }
    }
}

impl WorkflowConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payload ceiling in bytes.
    ///
    /// Defaults to 20 MiB.
    #[must_use]
    pub const fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Set the minimum accepted width and height.
    ///
    /// Defaults to 50 px.
    #[must_use]
    pub const fn with_min_dimension(mut self, pixels: u32) -> Self {
        self.min_dimension = pixels;
        self
    }

    /// Set how long a notification stays visible.
    ///
    /// Defaults to 5 seconds.
    #[must_use]
    pub const fn with_notification_lifetime(mut self, lifetime: Duration) -> Self {
        self.notification_lifetime = lifetime;
        self
    }

    /// Set the policy for responses to superseded selections.
    #[must_use]
    pub const fn with_stale_results(mut self, policy: StaleResultPolicy) -> Self {
        self.stale_results = policy;
        self
    }

    pub const fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    pub const fn min_dimension(&self) -> u32 {
        self.min_dimension
    }

    pub const fn notification_lifetime(&self) -> Duration {
        self.notification_lifetime
    }

    pub const fn stale_results(&self) -> StaleResultPolicy {
        self.stale_results
    }
}
