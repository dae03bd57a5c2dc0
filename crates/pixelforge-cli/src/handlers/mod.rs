//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Turn CLI input into workflow calls
//! 2. Render workflow events for the terminal
//! 3. Map failures to [`CliError`](crate::CliError) categories

pub mod upscale;
pub mod validate;
