//! Client-side workflow for the PixelForge upscaler.
//!
//! One image at a time moves through this crate:
//!
//! ```text
//! raw file → Validator → SelectionController → SubmissionController → ResultExporter
//!                 │               │                     │                    │
//!                 └───────────────┴──── NotificationQueue ───────────────────┘
//! ```
//!
//! Infrastructure (the remote upscaler, event transport) is injected through
//! the traits in [`ports`]. Adapters construct an [`UpscaleWorkflow`] at their
//! composition root and treat [`WorkflowSnapshot`] as read-only view state.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod events;
pub mod notifications;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{StaleResultPolicy, WorkflowConfig};
pub use domain::{
    CandidateFile, ImageHandle, ObjectUrlStore, ProcessingState, ResolutionChoice, SelectionId,
};
pub use events::WorkflowEvent;
pub use notifications::{Notification, NotificationId, NotificationQueue, Severity};
pub use ports::{
    ChannelEmitter, NoopEmitter, UpscalePort, UpscalePortError, UpscalePortResult,
    UpscaleRequest, WorkflowEventEmitter,
};
pub use services::{
    DownloadArtifact, ResultExporter, SelectionController, SubmissionController, SubmitOutcome,
    UpscaleWorkflow, WorkflowSnapshot, download_file_name,
};
pub use validation::{
    ALLOWED_MIME_TYPES, ValidationError, validate_dimensions, validate_format, validate_size,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;
