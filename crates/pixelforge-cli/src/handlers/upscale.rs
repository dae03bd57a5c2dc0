//! Upscale command handler.
//!
//! Runs one full session: select → set resolution → submit → export → save.

use std::path::{Path, PathBuf};

use anyhow::Result;
use pixelforge_core::{ResolutionChoice, Severity, SubmitOutcome, WorkflowEvent};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::files::load_candidate;
use crate::presentation::print_events;

/// Execute the upscale command.
///
/// Only the first of `files` is read; it enters the workflow through the
/// same first-entry selection a multi-file drop uses. Returns the path the
/// upscaled PNG was written to.
///
/// # Errors
///
/// - [`CliError::Validation`] if the file breaks an upload rule
/// - [`CliError::Upscale`] if the service does not return a result
/// - [`CliError::Io`] if the input cannot be read or the output written
///
/// Any of these is wrapped in [`CliError::Notified`] when the workflow
/// already printed it as an error notification.
pub async fn execute(
    ctx: &mut CliContext,
    files: &[PathBuf],
    resolution: ResolutionChoice,
    output_dir: &Path,
) -> Result<PathBuf> {
    let result = run(ctx, files, resolution, output_dir).await;
    let events = ctx.drain_events();
    print_events(&events);
    ctx.workflow().teardown();

    match result {
        Ok(path) => Ok(path),
        Err(e) if shows_error(&events) => Err(CliError::Notified(Box::new(e)).into()),
        Err(e) => Err(e.into()),
    }
}

fn shows_error(events: &[WorkflowEvent]) -> bool {
    events.iter().any(|event| {
        matches!(
            event,
            WorkflowEvent::NotificationAdded { notification }
                if notification.severity == Severity::Error
        )
    })
}

async fn run(
    ctx: &mut CliContext,
    files: &[PathBuf],
    resolution: ResolutionChoice,
    output_dir: &Path,
) -> Result<PathBuf, CliError> {
    let Some(first) = files.first() else {
        return Err(CliError::Validation("No input file given".to_string()));
    };
    if files.len() > 1 {
        tracing::warn!(ignored = files.len() - 1, "Only the first file is processed");
    }

    let candidate = load_candidate(first).await?;
    let workflow = ctx.workflow().clone();

    workflow
        .select_first(std::iter::once(candidate))
        .await
        .ok_or_else(|| CliError::Validation("No input file given".to_string()))?
        .map_err(|e| CliError::Validation(e.to_string()))?;
    workflow.set_resolution(resolution);
    print_events(&ctx.drain_events());

    match workflow.submit().await {
        SubmitOutcome::Succeeded { .. } => {}
        SubmitOutcome::Failed { message } => return Err(CliError::Upscale(message)),
        other => {
            return Err(CliError::Upscale(format!("No result produced ({other:?})")));
        }
    }
    print_events(&ctx.drain_events());

    let artifact = workflow
        .export_download()
        .ok_or_else(|| CliError::Upscale("No processed image to download".to_string()))?;

    tokio::fs::create_dir_all(output_dir).await?;
    let path = artifact.save_to(output_dir).await?;
    Ok(path)
}
