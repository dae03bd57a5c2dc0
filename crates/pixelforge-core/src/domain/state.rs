//! Submission lifecycle.

use serde::{Deserialize, Serialize};

/// Lifecycle of one remote submission attempt.
///
/// ```text
///   Idle → Processing → Succeeded ─┐
///            │                     ├→ Idle (next selection)
///            └────────→ Failed ────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A request is in flight; new submissions are ignored.
    Processing,
    /// The last submission produced a result.
    Succeeded,
    /// The last submission failed. Re-submittable.
    Failed,
}

impl ProcessingState {
    /// Whether a submission is in flight.
    pub const fn is_processing(self) -> bool {
        matches!(self, Self::Processing)
    }

    /// Whether the last attempt has finished, either way.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}
