//! The user-supplied image payload.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A raw file handed over by a picker or a drop target.
///
/// Immutable once constructed. Cloning is cheap: the payload is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    name: String,
    mime_type: String,
    bytes: Bytes,
}

impl CandidateFile {
    /// Create a candidate from its name, declared MIME type and payload.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Original file name, including its extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type declared by the source. May be empty.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Payload size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// The raw payload.
    pub const fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Pick the first entry of a multi-file drop; the rest are ignored.
    pub fn first_of(files: impl IntoIterator<Item = Self>) -> Option<Self> {
        files.into_iter().next()
    }
}

/// Generation counter for accepted selections.
///
/// Each accepted file gets a fresh id. Submissions remember the id they were
/// issued for so late responses can be matched against the current file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SelectionId(pub(crate) u64);

impl SelectionId {
    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "selection-{}", self.0)
    }
}
