//! Events published to observers of the workflow.
//!
//! Renderers subscribe through a [`WorkflowEventEmitter`](crate::ports::WorkflowEventEmitter)
//! and treat these as read-only signals; the workflow never reads them back.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "state_changed", "state": "processing" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{ProcessingState, ResolutionChoice, SelectionId};
use crate::notifications::{Notification, NotificationId};

/// Everything an observer may want to redraw on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowEvent {
    /// The submission state machine moved.
    StateChanged {
        /// New state.
        state: ProcessingState,
    },

    /// A file passed validation and became current.
    SelectionChanged {
        /// Id minted for the new selection.
        #[serde(rename = "selectionId")]
        selection_id: SelectionId,
        /// Original file name.
        #[serde(rename = "fileName")]
        file_name: String,
        /// Local URI of the preview.
        #[serde(rename = "previewUri")]
        preview_uri: String,
    },

    /// The target resolution changed.
    ResolutionChanged {
        resolution: ResolutionChoice,
    },

    /// A processed result is available for comparison and download.
    ResultReady {
        /// Local URI of the processed image.
        uri: String,
    },

    /// The processed result slot was emptied.
    ResultCleared,

    /// A notification was pushed.
    NotificationAdded {
        notification: Notification,
    },

    /// A notification expired or was dismissed.
    NotificationExpired {
        id: NotificationId,
    },
}

impl WorkflowEvent {
    /// Shorthand for [`WorkflowEvent::StateChanged`].
    pub const fn state_changed(state: ProcessingState) -> Self {
        Self::StateChanged { state }
    }
}
