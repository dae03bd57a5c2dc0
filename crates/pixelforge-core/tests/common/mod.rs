//! Common test utilities.
//!
//! This module provides in-memory image fixtures and scripted upscaler
//! ports shared by the integration tests.

#![allow(dead_code)]

pub mod fixtures;
pub mod ports;
