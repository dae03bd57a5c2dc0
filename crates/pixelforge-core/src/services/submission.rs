//! Submission controller: the request lifecycle against the remote upscaler.
//!
//! ```text
//!   Idle → Processing → Succeeded | Failed
//! ```
//!
//! The Processing guard is checked and set synchronously before the first
//! suspension point, so at most one request is in flight. The remote call
//! runs on its own task and always completes the state machine, even if the
//! caller stops awaiting it.

use std::sync::Arc;

use bytes::Bytes;

use crate::config::StaleResultPolicy;
use crate::domain::{ProcessingState, SelectionId};
use crate::events::WorkflowEvent;
use crate::ports::{UpscalePortError, UpscalePortResult, UpscaleRequest};

use super::context::WorkflowContext;

/// Notification text after a successful upscale.
pub const SUCCESS_MESSAGE: &str = "Image upscaled successfully!";

/// Fallback when the service rejects a request without a usable detail.
pub const FALLBACK_REJECTED_MESSAGE: &str = "Failed to upscale image";

/// Fallback when the request fails below the HTTP layer.
pub const FALLBACK_TRANSPORT_MESSAGE: &str = "An error occurred while processing your image";

/// Why a `submit()` call did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// No file is selected.
    NoSelection,
    /// A submission is already in flight.
    AlreadyProcessing,
}

/// Result of one `submit()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No request was issued.
    Ignored(IgnoredReason),
    /// The processed image is stored under `uri`.
    Succeeded {
        /// Local URI of the processed image.
        uri: String,
    },
    /// The request failed; `message` was pushed as a notification.
    Failed {
        /// User-facing failure text.
        message: String,
    },
    /// The response was dropped without a notification.
    ///
    /// Either a success arrived for a replaced file, or any response
    /// arrived after teardown. The state returns to Idle, not to a
    /// terminal state.
    Discarded,
}

/// Route a port error to the single user-facing message for it.
pub fn failure_message(error: &UpscalePortError) -> String {
    match error {
        UpscalePortError::Rejected { .. } => error
            .detail()
            .unwrap_or(FALLBACK_REJECTED_MESSAGE)
            .to_string(),
        UpscalePortError::Transport { .. } => FALLBACK_TRANSPORT_MESSAGE.to_string(),
    }
}

/// A submission that has passed the guard and is ready to send.
struct PendingSubmission {
    selection_id: SelectionId,
    request: UpscaleRequest,
}

/// Drives requests to the remote upscaler.
#[derive(Clone)]
pub struct SubmissionController {
    ctx: Arc<WorkflowContext>,
}

impl SubmissionController {
    pub(crate) const fn new(ctx: Arc<WorkflowContext>) -> Self {
        Self { ctx }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ProcessingState {
        self.ctx.lock().processing
    }

    /// Submit the current file at the current resolution.
    ///
    /// Calling this while a request is in flight, or with no file selected,
    /// is a no-op that returns [`SubmitOutcome::Ignored`].
    pub async fn submit(&self) -> SubmitOutcome {
        let pending = match self.begin() {
            Ok(pending) => pending,
            Err(reason) => return SubmitOutcome::Ignored(reason),
        };
        let selection_id = pending.selection_id;

        let port = Arc::clone(&self.ctx.port);
        let this = self.clone();
        let task = tokio::spawn(async move {
            let result = port.upscale(pending.request).await;
            this.complete(selection_id, result)
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(selection = %selection_id, error = %e, "Upscale task aborted");
                self.complete(
                    selection_id,
                    Err(UpscalePortError::Transport {
                        message: e.to_string(),
                    }),
                )
            }
        }
    }

    /// Check the guard, enter Processing and package the request.
    fn begin(&self) -> Result<PendingSubmission, IgnoredReason> {
        let (pending, event) = {
            let mut state = self.ctx.lock();
            if state.processing.is_processing() {
                tracing::debug!("Submission ignored, request already in flight");
                return Err(IgnoredReason::AlreadyProcessing);
            }
            let Some(selection) = state.selection.as_ref() else {
                tracing::debug!("Submission ignored, no file selected");
                return Err(IgnoredReason::NoSelection);
            };
            let pending = PendingSubmission {
                selection_id: selection.id,
                request: UpscaleRequest::new(&selection.file, state.resolution),
            };
            (pending, state.transition(ProcessingState::Processing))
        };
        self.ctx.publish(event);

        tracing::info!(
            selection = %pending.selection_id,
            file = %pending.request.file_name,
            resolution = %pending.request.resolution,
            "Submitting upscale request"
        );
        Ok(pending)
    }

    /// Apply a response and leave Processing.
    fn complete(&self, selection_id: SelectionId, result: UpscalePortResult<Bytes>) -> SubmitOutcome {
        match result {
            Ok(bytes) => self.complete_success(selection_id, bytes),
            Err(e) => self.complete_failure(selection_id, &e),
        }
    }

    fn complete_success(&self, selection_id: SelectionId, bytes: Bytes) -> SubmitOutcome {
        let mut events = Vec::with_capacity(2);
        let stored = {
            let mut state = self.ctx.lock();
            let current = state.current_selection_id();
            let stale = current != Some(selection_id);
            let discard = current.is_none()
                || (stale && self.ctx.config.stale_results() == StaleResultPolicy::Discard);

            if discard {
                events.extend(state.transition(ProcessingState::Idle));
                None
            } else {
                let handle = self.ctx.handles.create(bytes, "image/png");
                let previous = state.processed.replace(handle.clone());
                events.extend(state.transition(ProcessingState::Succeeded));
                Some((handle, previous))
            }
        };

        let Some((handle, previous)) = stored else {
            self.ctx.publish(events);
            tracing::warn!(selection = %selection_id, "Discarding result for a replaced file");
            return SubmitOutcome::Discarded;
        };

        self.ctx.release(previous);
        events.push(WorkflowEvent::ResultReady {
            uri: handle.uri().to_string(),
        });
        self.ctx.publish(events);
        self.ctx.notifications.success(SUCCESS_MESSAGE);

        tracing::info!(selection = %selection_id, bytes = handle.bytes().len(), "Upscale succeeded");
        SubmitOutcome::Succeeded {
            uri: handle.uri().to_string(),
        }
    }

    fn complete_failure(&self, selection_id: SelectionId, error: &UpscalePortError) -> SubmitOutcome {
        let (event, torn_down) = {
            let mut state = self.ctx.lock();
            if state.current_selection_id().is_none() {
                (state.transition(ProcessingState::Idle), true)
            } else {
                (state.transition(ProcessingState::Failed), false)
            }
        };
        self.ctx.publish(event);

        if torn_down {
            tracing::warn!(selection = %selection_id, error = %error, "Discarding failure after teardown");
            return SubmitOutcome::Discarded;
        }

        let message = failure_message(error);
        tracing::warn!(selection = %selection_id, error = %error, "Upscale failed");
        self.ctx.notifications.error(message.clone());
        SubmitOutcome::Failed { message }
    }
}
