//! Selection controller: which file is current, its preview, and the target
//! resolution.

use std::sync::Arc;

use crate::domain::{CandidateFile, ImageHandle, ProcessingState, ResolutionChoice, SelectionId};
use crate::events::WorkflowEvent;
use crate::validation::{ValidationError, validate_dimensions, validate_format, validate_size};

use super::context::{Selection, WorkflowContext};

/// Owns the current candidate and orchestrates validation.
#[derive(Clone)]
pub struct SelectionController {
    ctx: Arc<WorkflowContext>,
}

impl SelectionController {
    pub(crate) const fn new(ctx: Arc<WorkflowContext>) -> Self {
        Self { ctx }
    }

    /// Validate a raw file and, if it passes, make it current.
    ///
    /// Checks run format → size → dimensions and stop at the first failure.
    /// A rejected file pushes one error notification and leaves any prior
    /// selection untouched. An accepted file replaces the preview and clears
    /// the processed result, releasing both old URIs.
    pub async fn select_file(&self, file: CandidateFile) -> Result<SelectionId, ValidationError> {
        if let Err(e) = self.validate(&file).await {
            tracing::warn!(file = %file.name(), mime = %file.mime_type(), error = %e, "File rejected");
            self.ctx.notifications.error(e.to_string());
            return Err(e);
        }

        let preview = self.ctx.handles.create(file.bytes().clone(), file.mime_type());
        let mut events = Vec::with_capacity(3);

        let (id, old_preview, old_processed) = {
            let mut state = self.ctx.lock();
            let id = state.mint_selection_id();
            let old = state.selection.replace(Selection {
                id,
                file: file.clone(),
                preview: preview.clone(),
            });
            let old_processed = state.processed.take();
            if state.processing.is_terminal() {
                events.extend(state.transition(ProcessingState::Idle));
            }
            (id, old.map(|s| s.preview), old_processed)
        };

        if old_processed.is_some() {
            events.push(WorkflowEvent::ResultCleared);
        }
        self.ctx.release(old_preview);
        self.ctx.release(old_processed);

        events.push(WorkflowEvent::SelectionChanged {
            selection_id: id,
            file_name: file.name().to_string(),
            preview_uri: preview.uri().to_string(),
        });
        self.ctx.publish(events);

        tracing::info!(selection = %id, file = %file.name(), size = file.size(), "File selected");
        Ok(id)
    }

    /// Normalized entry point for pickers and drop targets.
    ///
    /// Only the first file is considered. Returns `None` for an empty list.
    pub async fn select_first(
        &self,
        files: impl IntoIterator<Item = CandidateFile>,
    ) -> Option<Result<SelectionId, ValidationError>> {
        let file = CandidateFile::first_of(files)?;
        Some(self.select_file(file).await)
    }

    async fn validate(&self, file: &CandidateFile) -> Result<(), ValidationError> {
        validate_format(file)?;
        validate_size(file, self.ctx.config.max_file_size())?;
        let (width, height) = validate_dimensions(file, self.ctx.config.min_dimension()).await?;
        tracing::debug!(file = %file.name(), width, height, "File passed validation");
        Ok(())
    }

    /// Set the target resolution. Always valid; survives file changes.
    pub fn set_resolution(&self, resolution: ResolutionChoice) {
        let changed = {
            let mut state = self.ctx.lock();
            let changed = state.resolution != resolution;
            state.resolution = resolution;
            changed
        };
        if changed {
            tracing::debug!(resolution = %resolution, "Resolution changed");
            self.ctx.publish([WorkflowEvent::ResolutionChanged { resolution }]);
        }
    }

    /// Current target resolution.
    pub fn resolution(&self) -> ResolutionChoice {
        self.ctx.lock().resolution
    }

    /// The current candidate, if any.
    pub fn current_file(&self) -> Option<CandidateFile> {
        self.ctx.lock().selection.as_ref().map(|s| s.file.clone())
    }

    /// Id of the current selection, if any.
    pub fn current_id(&self) -> Option<SelectionId> {
        self.ctx.lock().current_selection_id()
    }

    /// Preview handle of the current candidate.
    pub fn preview(&self) -> Option<ImageHandle> {
        self.ctx.lock().selection.as_ref().map(|s| s.preview.clone())
    }
}
