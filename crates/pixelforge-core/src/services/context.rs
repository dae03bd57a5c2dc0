//! Shared state behind the controllers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::config::WorkflowConfig;
use crate::domain::{
    CandidateFile, ImageHandle, ObjectUrlStore, ProcessingState, ResolutionChoice, SelectionId,
};
use crate::events::WorkflowEvent;
use crate::notifications::{Notification, NotificationQueue};
use crate::ports::{UpscalePort, WorkflowEventEmitter};

/// The accepted file together with its preview.
#[derive(Debug, Clone)]
pub(crate) struct Selection {
    pub(crate) id: SelectionId,
    pub(crate) file: CandidateFile,
    pub(crate) preview: ImageHandle,
}

/// Mutable workflow state. Never held across an `.await`.
#[derive(Debug, Default)]
pub(crate) struct WorkflowState {
    pub(crate) selection: Option<Selection>,
    pub(crate) resolution: ResolutionChoice,
    pub(crate) processed: Option<ImageHandle>,
    pub(crate) processing: ProcessingState,
    next_selection: u64,
}

impl WorkflowState {
    pub(crate) fn mint_selection_id(&mut self) -> SelectionId {
        self.next_selection += 1;
        SelectionId(self.next_selection)
    }

    pub(crate) fn current_selection_id(&self) -> Option<SelectionId> {
        self.selection.as_ref().map(|s| s.id)
    }

    /// Move to `next`, returning the event to publish if anything changed.
    pub(crate) fn transition(&mut self, next: ProcessingState) -> Option<WorkflowEvent> {
        if self.processing == next {
            return None;
        }
        tracing::debug!(from = ?self.processing, to = ?next, "Processing state transition");
        self.processing = next;
        Some(WorkflowEvent::state_changed(next))
    }
}

/// Everything the controllers share.
pub(crate) struct WorkflowContext {
    state: Mutex<WorkflowState>,
    pub(crate) handles: ObjectUrlStore,
    pub(crate) notifications: NotificationQueue,
    pub(crate) emitter: Arc<dyn WorkflowEventEmitter>,
    pub(crate) port: Arc<dyn UpscalePort>,
    pub(crate) config: WorkflowConfig,
}

impl WorkflowContext {
    pub(crate) fn new(
        port: Arc<dyn UpscalePort>,
        config: WorkflowConfig,
        emitter: Arc<dyn WorkflowEventEmitter>,
    ) -> Self {
        let notifications =
            NotificationQueue::new(config.notification_lifetime(), Arc::clone(&emitter));
        Self {
            state: Mutex::new(WorkflowState::default()),
            handles: ObjectUrlStore::new(),
            notifications,
            emitter,
            port,
            config,
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, WorkflowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish events collected while the state lock was held.
    pub(crate) fn publish(&self, events: impl IntoIterator<Item = WorkflowEvent>) {
        for event in events {
            self.emitter.emit(event);
        }
    }

    /// Revoke a handle's URI, if there is one.
    pub(crate) fn release(&self, handle: Option<ImageHandle>) {
        if let Some(handle) = handle {
            self.handles.revoke(&handle);
        }
    }

    pub(crate) fn snapshot(&self) -> WorkflowSnapshot {
        let state = self.lock();
        let selection = state.selection.as_ref();
        WorkflowSnapshot {
            selection_id: selection.map(|s| s.id),
            file_name: selection.map(|s| s.file.name().to_string()),
            file_size: selection.map(|s| s.file.size()),
            preview_uri: selection.map(|s| s.preview.uri().to_string()),
            processed_uri: state.processed.as_ref().map(|h| h.uri().to_string()),
            resolution: state.resolution,
            state: state.processing,
            can_submit: selection.is_some() && !state.processing.is_processing(),
            notifications: self.notifications.snapshot(),
        }
    }
}

/// Read-only view of the workflow for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSnapshot {
    pub selection_id: Option<SelectionId>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub preview_uri: Option<String>,
    pub processed_uri: Option<String>,
    pub resolution: ResolutionChoice,
    pub state: ProcessingState,
    /// Whether the upscale trigger should be enabled.
    pub can_submit: bool,
    pub notifications: Vec<Notification>,
}
