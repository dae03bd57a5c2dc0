#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultUpscaleClient is meant to be used through the UpscalePort trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod parsing;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultUpscaleClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, ENDPOINT_PATH, UpscaleClientConfig};

// Errors raised while building a client
pub use error::HttpError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
