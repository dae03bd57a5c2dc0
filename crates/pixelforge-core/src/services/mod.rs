//! Workflow controllers.
//!
//! Every controller shares one workflow context:
//! a single state object mutated only through the operations below, plus the
//! notification queue and handle store. Observers read [`WorkflowSnapshot`].

mod context;
mod export;
mod selection;
mod submission;
mod workflow;

pub use context::WorkflowSnapshot;
pub use export::{
    DOWNLOAD_MESSAGE, DownloadArtifact, ResultExporter, download_file_name, export_download,
};
pub use selection::SelectionController;
pub use submission::{
    FALLBACK_REJECTED_MESSAGE, FALLBACK_TRANSPORT_MESSAGE, IgnoredReason, SUCCESS_MESSAGE,
    SubmissionController, SubmitOutcome, failure_message,
};
pub use workflow::UpscaleWorkflow;
