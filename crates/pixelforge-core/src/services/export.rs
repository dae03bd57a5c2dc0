//! Result exporter: turns the processed image into a named download.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;

use crate::domain::{ImageHandle, ResolutionChoice};

use super::context::WorkflowContext;

/// Notification text after a download is produced.
pub const DOWNLOAD_MESSAGE: &str = "Image downloaded successfully!";

/// A download-ready processed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    /// Synthesized name, always ending in `.png`.
    pub file_name: String,
    /// Local URI of the processed image.
    pub uri: String,
    /// Processed image bytes.
    pub bytes: Bytes,
}

impl DownloadArtifact {
    /// Write the artifact into `dir` under its synthesized name.
    pub async fn save_to(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "Download saved");
        Ok(path)
    }
}

/// `<base>_<resolution>.png`, where `<base>` drops the final extension.
///
/// Only a trailing `.` followed by one or more characters other than `.`
/// and `/` counts as an extension.
pub fn download_file_name(original_name: &str, resolution: ResolutionChoice) -> String {
    let base = match original_name.rfind('.') {
        Some(dot) if dot + 1 < original_name.len() && !original_name[dot + 1..].contains('/') => {
            &original_name[..dot]
        }
        _ => original_name,
    };
    format!("{base}_{resolution}.png")
}

/// Build the artifact, or nothing if no processed image exists yet.
pub fn export_download(
    processed: Option<&ImageHandle>,
    original_name: &str,
    resolution: ResolutionChoice,
) -> Option<DownloadArtifact> {
    let processed = processed?;
    Some(DownloadArtifact {
        file_name: download_file_name(original_name, resolution),
        uri: processed.uri().to_string(),
        bytes: processed.bytes().clone(),
    })
}

/// Exposes the processed result for download.
#[derive(Clone)]
pub struct ResultExporter {
    ctx: Arc<WorkflowContext>,
}

impl ResultExporter {
    pub(crate) const fn new(ctx: Arc<WorkflowContext>) -> Self {
        Self { ctx }
    }

    /// Produce the download for the current result.
    ///
    /// Returns `None` without notifying when there is no processed image.
    pub fn export_download(&self) -> Option<DownloadArtifact> {
        let artifact = {
            let state = self.ctx.lock();
            let selection = state.selection.as_ref()?;
            export_download(state.processed.as_ref(), selection.file.name(), state.resolution)?
        };
        tracing::info!(file = %artifact.file_name, "Download exported");
        self.ctx.notifications.success(DOWNLOAD_MESSAGE);
        Some(artifact)
    }

    /// The processed image handle, if a result exists.
    pub fn processed(&self) -> Option<ImageHandle> {
        self.ctx.lock().processed.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ObjectUrlStore;

    #[test]
    fn test_download_file_name() {
        let high = ResolutionChoice::High4K;
        assert_eq!(download_file_name("photo.jpg", high), "photo_4k.png");
        assert_eq!(download_file_name("photo", high), "photo_4k.png");
        assert_eq!(download_file_name("archive.tar.gz", high), "archive.tar_4k.png");
        assert_eq!(download_file_name(".env", high), "_4k.png");
        assert_eq!(download_file_name("photo.", high), "photo._4k.png");
        assert_eq!(download_file_name("scan.BMP", ResolutionChoice::Low2K), "scan_2k.png");
    }

    #[test]
    fn test_export_without_result_is_none() {
        assert!(export_download(None, "photo.jpg", ResolutionChoice::High4K).is_none());
    }

    #[test]
    fn test_export_with_result() {
        let store = ObjectUrlStore::new();
        let handle = store.create(Bytes::from_static(b"png"), "image/png");
        let artifact = export_download(Some(&handle), "photo.jpg", ResolutionChoice::Low2K).unwrap();

        assert_eq!(artifact.file_name, "photo_2k.png");
        assert_eq!(artifact.uri, handle.uri());
        assert_eq!(artifact.bytes.as_ref(), b"png");
    }

    #[tokio::test]
    async fn test_save_to_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = DownloadArtifact {
            file_name: "photo_4k.png".to_string(),
            uri: "blob:pixelforge/x".to_string(),
            bytes: Bytes::from_static(b"data"),
        };

        let path = artifact.save_to(dir.path()).await.unwrap();
        assert_eq!(path, dir.path().join("photo_4k.png"));
        assert_eq!(std::fs::read(path).unwrap(), b"data");
    }
}
