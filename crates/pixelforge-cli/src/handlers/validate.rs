//! Validate command handler.
//!
//! Applies the local upload rules without contacting the service.

use std::path::Path;

use anyhow::Result;
use pixelforge_core::{
    ValidationError, WorkflowConfig, validate_dimensions, validate_format, validate_size,
};

use crate::error::CliError;
use crate::files::load_candidate;

/// Facts about a file that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub width: u32,
    pub height: u32,
}

/// Execute the validate command.
///
/// Rules run in the same order as an upload: format, size, dimensions.
///
/// # Errors
///
/// [`CliError::Validation`] carrying the message the first failing rule
/// would show, or [`CliError::Io`] if the file cannot be read.
pub async fn execute(path: &Path, config: &WorkflowConfig) -> Result<ValidationReport> {
    let file = load_candidate(path).await?;

    let checked: Result<(u32, u32), ValidationError> = async {
        validate_format(&file)?;
        validate_size(&file, config.max_file_size())?;
        validate_dimensions(&file, config.min_dimension()).await
    }
    .await;
    let (width, height) = checked.map_err(|e| CliError::Validation(e.to_string()))?;

    let report = ValidationReport {
        name: file.name().to_string(),
        mime_type: file.mime_type().to_string(),
        size: file.size(),
        width,
        height,
    };
    tracing::info!(file = %report.name, width, height, "File passes upload rules");
    Ok(report)
}
