//! Revocable display handles for image bytes.
//!
//! A handle pairs image bytes with a local `blob:` URI that a renderer can
//! load. URIs live in an [`ObjectUrlStore`] until revoked; holding a handle
//! past the point it is superseded leaks its entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use uuid::Uuid;

const URI_SCHEME_PREFIX: &str = "blob:pixelforge/";

/// Displayable image bytes plus their local URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    uri: String,
    mime_type: String,
    bytes: Bytes,
}

impl ImageHandle {
    /// Local URI the renderer loads this image from.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// MIME type the bytes are labelled with.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The image bytes.
    pub const fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

/// Table of live object URIs.
///
/// Cloning shares the table. Revocation is idempotent: revoking a URI that
/// is already gone returns `false` and changes nothing.
#[derive(Debug, Clone, Default)]
pub struct ObjectUrlStore {
    entries: Arc<Mutex<HashMap<String, Bytes>>>,
}

impl ObjectUrlStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Bytes>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register bytes under a fresh URI.
    pub fn create(&self, bytes: Bytes, mime_type: impl Into<String>) -> ImageHandle {
        let uri = format!("{URI_SCHEME_PREFIX}{}", Uuid::new_v4());
        self.lock().insert(uri.clone(), bytes.clone());
        tracing::trace!(uri = %uri, "Object URI created");
        ImageHandle {
            uri,
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Release a handle's URI. Returns `true` only on the first call.
    pub fn revoke(&self, handle: &ImageHandle) -> bool {
        let removed = self.lock().remove(&handle.uri).is_some();
        if removed {
            tracing::trace!(uri = %handle.uri, "Object URI revoked");
        }
        removed
    }

    /// Look up the bytes behind a live URI.
    pub fn resolve(&self, uri: &str) -> Option<Bytes> {
        self.lock().get(uri).cloned()
    }

    /// Whether a URI is still registered.
    pub fn is_live(&self, uri: &str) -> bool {
        self.lock().contains_key(uri)
    }

    /// Number of URIs not yet revoked.
    pub fn live_count(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registers_unique_uris() {
        let store = ObjectUrlStore::new();
        let a = store.create(Bytes::from_static(b"a"), "image/png");
        let b = store.create(Bytes::from_static(b"a"), "image/png");

        assert_ne!(a.uri(), b.uri());
        assert!(a.uri().starts_with("blob:pixelforge/"));
        assert_eq!(store.live_count(), 2);
        assert_eq!(store.resolve(a.uri()).unwrap().as_ref(), b"a");
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let store = ObjectUrlStore::new();
        let handle = store.create(Bytes::from_static(b"x"), "image/jpeg");

        assert!(store.revoke(&handle));
        assert!(!store.revoke(&handle));
        assert!(!store.is_live(handle.uri()));
        assert!(store.resolve(handle.uri()).is_none());
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_clones_share_table() {
        let store = ObjectUrlStore::new();
        let other = store.clone();
        let handle = other.create(Bytes::from_static(b"x"), "image/png");

        assert!(store.is_live(handle.uri()));
        assert_eq!(handle.mime_type(), "image/png");
    }
}
