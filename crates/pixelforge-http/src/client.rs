//! Client for the upscaling service.

use bytes::Bytes;
use url::Url;

use crate::config::{ENDPOINT_PATH, UpscaleClientConfig};
use crate::error::{HttpError, HttpResult};
use crate::http::{HttpBackend, ReqwestBackend, UploadForm};
use crate::parsing::parse_detail;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultUpscaleClient = UpscaleClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the upscaling service.
///
/// Generic over the HTTP backend so it can be tested without a server.
/// Use `DefaultUpscaleClient` in production and talk to it through
/// `pixelforge_core::UpscalePort`.
pub struct UpscaleClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) endpoint: Url,
}

impl DefaultUpscaleClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &UpscaleClientConfig) -> HttpResult<Self> {
        let endpoint = endpoint_url(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, endpoint })
    }
}

impl<B: HttpBackend> UpscaleClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, backend: B) -> HttpResult<Self> {
        Ok(Self {
            backend,
            endpoint: endpoint_url(base_url)?,
        })
    }

    /// Full URL uploads are sent to.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload `form` and return the processed image bytes.
    pub(crate) async fn upload(&self, form: UploadForm) -> HttpResult<Bytes> {
        tracing::debug!(
            endpoint = %self.endpoint,
            file = %form.file_name,
            bytes = form.bytes.len(),
            resolution = %form.resolution,
            "Posting upscale request"
        );
        let response = self.backend.post_multipart(&self.endpoint, form).await?;

        if response.is_success() {
            tracing::debug!(status = response.status, bytes = response.body.len(), "Upscale response received");
            return Ok(response.body);
        }

        let detail = parse_detail(&response.body);
        tracing::debug!(status = response.status, detail = ?detail, "Upscale request rejected");
        Err(HttpError::ApiRequestFailed {
            status: response.status,
            detail,
        })
    }
}

/// `<base_url>/api/upscale`, ignoring any trailing slash on the base.
fn endpoint_url(base_url: &str) -> HttpResult<Url> {
    let base = base_url.trim_end_matches('/');
    Ok(Url::parse(&format!("{base}{ENDPOINT_PATH}"))?)
}
