//! HTTP backend abstraction for the upscaling service.
//!
//! The client is generic over [`HttpBackend`] so request building and
//! response handling can be tested without a server. The production
//! implementation uses reqwest.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::config::UpscaleClientConfig;
use crate::error::HttpResult;

// ============================================================================
// Wire types
// ============================================================================

/// Contents of the multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    /// Sent as the `file` part's file name.
    pub file_name: String,
    /// Sent as the `file` part's content type.
    pub mime_type: String,
    /// Sent as the `file` part's body.
    pub bytes: Bytes,
    /// Sent as the `resolution` text part.
    pub resolution: String,
}

/// Status and body of a completed exchange, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can send a multipart upload.
///
/// Non-success statuses are returned as a [`RawResponse`], not an error.
/// Errors are reserved for failures below HTTP.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `form` to `url` as `multipart/form-data`.
    async fn post_multipart(&self, url: &Url, form: UploadForm) -> HttpResult<RawResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &UpscaleClientConfig) -> HttpResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

fn build_form(form: UploadForm) -> HttpResult<Form> {
    let file = Part::bytes(form.bytes.to_vec())
        .file_name(form.file_name)
        .mime_str(&form.mime_type)?;
    Ok(Form::new()
        .part("file", file)
        .text("resolution", form.resolution))
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_multipart(&self, url: &Url, form: UploadForm) -> HttpResult<RawResponse> {
        let response = self
            .client
            .post(url.as_str())
            .multipart(build_form(form)?)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(RawResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A fake HTTP backend that records uploads and returns one canned response.
    #[derive(Clone)]
    pub struct FakeBackend {
        response: RawResponse,
        uploads: Arc<Mutex<Vec<(Url, UploadForm)>>>,
    }

    impl FakeBackend {
        /// Answer every upload with `status` and `body`.
        pub fn responding(status: u16, body: impl Into<Bytes>) -> Self {
            Self {
                response: RawResponse {
                    status,
                    body: body.into(),
                },
                uploads: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Every upload received so far.
        pub fn uploads(&self) -> Vec<(Url, UploadForm)> {
            self.uploads.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_multipart(&self, url: &Url, form: UploadForm) -> HttpResult<RawResponse> {
            self.uploads.lock().unwrap().push((url.clone(), form));
            Ok(self.response.clone())
        }
    }
}
