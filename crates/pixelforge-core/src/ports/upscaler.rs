//! Port for the remote upscaling service.
//!
//! The service is opaque: it receives one image plus a target resolution
//! and answers with processed bytes or a failure. Transport adapters map
//! their own errors onto [`UpscalePortError`] at this boundary.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::domain::{CandidateFile, ResolutionChoice};

/// A single outbound upscale request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpscaleRequest {
    /// Original file name, sent as the multipart file name.
    pub file_name: String,
    /// Declared content type of the original, preserved on the wire.
    pub mime_type: String,
    /// Raw image bytes.
    pub bytes: Bytes,
    /// Requested output size.
    pub resolution: ResolutionChoice,
}

impl UpscaleRequest {
    /// Package a candidate and a resolution into one request.
    pub fn new(file: &CandidateFile, resolution: ResolutionChoice) -> Self {
        Self {
            file_name: file.name().to_string(),
            mime_type: file.mime_type().to_string(),
            bytes: file.bytes().clone(),
            resolution,
        }
    }
}

/// Errors from the remote upscaler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpscalePortError {
    /// The request never produced a response (connection, DNS, body read).
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("Upscale rejected with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Human-readable `detail` from the error payload, if any
        detail: Option<String>,
    },
}

impl UpscalePortError {
    /// Server-supplied detail, if present and non-blank.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}

/// Result type alias for upscale port operations.
pub type UpscalePortResult<T> = Result<T, UpscalePortError>;

/// Remote upscaling service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpscalePort: Send + Sync {
    /// Submit one image. Returns the processed image bytes (PNG).
    async fn upscale(&self, request: UpscaleRequest) -> UpscalePortResult<Bytes>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_packages_candidate() {
        let file = CandidateFile::new("photo.jpg", "image/jpeg", vec![9u8, 9]);
        let request = UpscaleRequest::new(&file, ResolutionChoice::Low2K);

        assert_eq!(request.file_name, "photo.jpg");
        assert_eq!(request.mime_type, "image/jpeg");
        assert_eq!(request.bytes.as_ref(), &[9, 9]);
        assert_eq!(request.resolution, ResolutionChoice::Low2K);
    }

    #[test]
    fn test_detail_only_for_non_blank_rejections() {
        let with_detail = UpscalePortError::Rejected {
            status: 429,
            detail: Some("quota exceeded".to_string()),
        };
        assert_eq!(with_detail.detail(), Some("quota exceeded"));

        let blank = UpscalePortError::Rejected {
            status: 500,
            detail: Some("  ".to_string()),
        };
        assert_eq!(blank.detail(), None);

        let transport = UpscalePortError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(transport.detail(), None);
        assert!(transport.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_mock_port() {
        let mut port = MockUpscalePort::new();
        port.expect_upscale()
            .times(1)
            .returning(|_| Ok(Bytes::from_static(b"png")));

        let file = CandidateFile::new("a.png", "image/png", vec![1u8]);
        let out = port
            .upscale(UpscaleRequest::new(&file, ResolutionChoice::High4K))
            .await
            .unwrap();
        assert_eq!(out.as_ref(), b"png");
    }
}
