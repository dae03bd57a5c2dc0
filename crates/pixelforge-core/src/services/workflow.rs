//! `UpscaleWorkflow` - the facade adapters talk to.
//!
//! Constructed once per session at the adapter's composition root. All
//! operations are delegated to the specialized controllers.

use std::sync::Arc;

use crate::config::WorkflowConfig;
use crate::domain::{CandidateFile, ObjectUrlStore, ProcessingState, ResolutionChoice, SelectionId};
use crate::events::WorkflowEvent;
use crate::notifications::NotificationQueue;
use crate::ports::{NoopEmitter, UpscalePort, WorkflowEventEmitter};
use crate::validation::ValidationError;

use super::context::{WorkflowContext, WorkflowSnapshot};
use super::export::{DownloadArtifact, ResultExporter};
use super::selection::SelectionController;
use super::submission::{SubmissionController, SubmitOutcome};

/// Single-image upload → validate → upscale → download session.
///
/// Cloning yields another handle to the same session.
///
/// # Example
///
/// ```ignore
/// let workflow = UpscaleWorkflow::new(Arc::new(client), WorkflowConfig::default());
/// workflow.select_file(file).await?;
/// workflow.set_resolution(ResolutionChoice::High4K);
/// workflow.submit().await;
/// let artifact = workflow.export_download();
/// ```
#[derive(Clone)]
pub struct UpscaleWorkflow {
    ctx: Arc<WorkflowContext>,
    selection: SelectionController,
    submission: SubmissionController,
    exporter: ResultExporter,
}

impl UpscaleWorkflow {
    /// Create a session without an event observer.
    pub fn new(port: Arc<dyn UpscalePort>, config: WorkflowConfig) -> Self {
        Self::with_emitter(port, config, Arc::new(NoopEmitter::new()))
    }

    /// Create a session that publishes [`WorkflowEvent`]s to `emitter`.
    pub fn with_emitter(
        port: Arc<dyn UpscalePort>,
        config: WorkflowConfig,
        emitter: Arc<dyn WorkflowEventEmitter>,
    ) -> Self {
        let ctx = Arc::new(WorkflowContext::new(port, config, emitter));
        Self {
            selection: SelectionController::new(Arc::clone(&ctx)),
            submission: SubmissionController::new(Arc::clone(&ctx)),
            exporter: ResultExporter::new(Arc::clone(&ctx)),
            ctx,
        }
    }

    /// Access the selection controller.
    pub const fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Access the submission controller.
    pub const fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    /// Access the result exporter.
    pub const fn exporter(&self) -> &ResultExporter {
        &self.exporter
    }

    /// Access the notification queue.
    pub fn notifications(&self) -> &NotificationQueue {
        &self.ctx.notifications
    }

    /// Access the object URI table backing every handle.
    pub fn handles(&self) -> &ObjectUrlStore {
        &self.ctx.handles
    }

    // =========================================================================
    // Delegated operations
    // =========================================================================

    /// See [`SelectionController::select_file`].
    pub async fn select_file(&self, file: CandidateFile) -> Result<SelectionId, ValidationError> {
        self.selection.select_file(file).await
    }

    /// See [`SelectionController::select_first`].
    pub async fn select_first(
        &self,
        files: impl IntoIterator<Item = CandidateFile>,
    ) -> Option<Result<SelectionId, ValidationError>> {
        self.selection.select_first(files).await
    }

    /// See [`SelectionController::set_resolution`].
    pub fn set_resolution(&self, resolution: ResolutionChoice) {
        self.selection.set_resolution(resolution);
    }

    /// See [`SubmissionController::submit`].
    pub async fn submit(&self) -> SubmitOutcome {
        self.submission.submit().await
    }

    /// See [`ResultExporter::export_download`].
    pub fn export_download(&self) -> Option<DownloadArtifact> {
        self.exporter.export_download()
    }

    /// Current read-only view.
    pub fn snapshot(&self) -> WorkflowSnapshot {
        self.ctx.snapshot()
    }

    /// Release every handle and clear notifications.
    ///
    /// Safe to call more than once. A response still in flight is discarded
    /// when it arrives.
    pub fn teardown(&self) {
        let (preview, processed, event) = {
            let mut state = self.ctx.lock();
            let preview = state.selection.take().map(|s| s.preview);
            let processed = state.processed.take();
            let event = if state.processing.is_processing() {
                None
            } else {
                state.transition(ProcessingState::Idle)
            };
            (preview, processed, event)
        };

        let had_result = processed.is_some();
        self.ctx.release(preview);
        self.ctx.release(processed);
        self.ctx.notifications.clear();

        self.ctx.publish(event);
        if had_result {
            self.ctx.publish([WorkflowEvent::ResultCleared]);
        }
        tracing::debug!(live_handles = self.ctx.handles.live_count(), "Workflow torn down");
    }
}
