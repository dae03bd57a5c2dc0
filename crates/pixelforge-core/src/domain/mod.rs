//! Core domain types.
//!
//! These types describe the single image moving through the workflow,
//! independent of any transport or rendering concerns.
//!
//! # Structure
//!
//! - `file` - The user-supplied candidate (`CandidateFile`, `SelectionId`)
//! - `handle` - Revocable display handles (`ImageHandle`, `ObjectUrlStore`)
//! - `resolution` - Target output size (`ResolutionChoice`)
//! - `state` - Submission lifecycle (`ProcessingState`)

mod file;
mod handle;
mod resolution;
mod state;

pub use file::{CandidateFile, SelectionId};
pub use handle::{ImageHandle, ObjectUrlStore};
pub use resolution::{ParseResolutionError, ResolutionChoice};
pub use state::ProcessingState;
