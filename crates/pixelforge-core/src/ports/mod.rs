//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the workflow expects from infrastructure.
//! They contain no transport details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or HTTP types in any signature
//! - The remote upscaler is opaque: bytes and a resolution in, bytes out
//! - Event emission never blocks

pub mod event_emitter;
pub mod upscaler;

pub use event_emitter::{ChannelEmitter, NoopEmitter, WorkflowEventEmitter};
pub use upscaler::{UpscalePort, UpscalePortError, UpscalePortResult, UpscaleRequest};
