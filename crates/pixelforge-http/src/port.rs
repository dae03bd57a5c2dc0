//! Port trait implementation for `UpscaleClient`.
//!
//! Implements the core-owned `UpscalePort` trait, converting between the
//! core request type and the multipart upload.

use async_trait::async_trait;
use bytes::Bytes;
use pixelforge_core::{UpscalePort, UpscalePortError, UpscalePortResult, UpscaleRequest};

use crate::client::UpscaleClient;
use crate::error::HttpError;
use crate::http::{HttpBackend, UploadForm};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HttpError` to core `UpscalePortError`.
fn map_error(err: HttpError) -> UpscalePortError {
    match err {
        HttpError::ApiRequestFailed { status, detail } => {
            UpscalePortError::Rejected { status, detail }
        }
        HttpError::Network(e) => UpscalePortError::Transport {
            message: e.to_string(),
        },
        HttpError::InvalidUrl(e) => UpscalePortError::Transport {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_upload_form(request: UpscaleRequest) -> UploadForm {
    UploadForm {
        file_name: request.file_name,
        mime_type: request.mime_type,
        bytes: request.bytes,
        resolution: request.resolution.as_str().to_string(),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> UpscalePort for UpscaleClient<B> {
    async fn upscale(&self, request: UpscaleRequest) -> UpscalePortResult<Bytes> {
        self.upload(to_upload_form(request)).await.map_err(map_error)
    }
}
