//! Turning paths on disk into upload candidates.

use std::path::Path;

use image::ImageFormat;
use pixelforge_core::CandidateFile;

use crate::error::CliError;

/// Content type for `path`, guessed from its extension.
///
/// Unknown extensions yield an empty string, which the validator rejects
/// as an unsupported format.
pub fn mime_type_for(path: &Path) -> &'static str {
    ImageFormat::from_path(path).map_or("", |format| format.to_mime_type())
}

/// Read `path` into a [`CandidateFile`] named after its final component.
pub async fn load_candidate(path: &Path) -> Result<CandidateFile, CliError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let mime_type = mime_type_for(path);

    tracing::debug!(path = %path.display(), mime = mime_type, bytes = bytes.len(), "Loaded input file");
    Ok(CandidateFile::new(name, mime_type, bytes))
}
