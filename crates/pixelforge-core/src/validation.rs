//! Local checks a candidate must pass before it can be selected.
//!
//! The three checks are independent. Callers run them in the order
//! format → size → dimensions and stop at the first failure, so an
//! oversized or wrong-format payload is never decoded.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;

use crate::domain::CandidateFile;

/// Declared MIME types accepted for upload.
pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/bmp",
];

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Reasons a candidate is rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Declared MIME type is missing or not in [`ALLOWED_MIME_TYPES`].
    #[error("Unsupported format. Please upload JPG, PNG, WebP, or BMP.")]
    UnsupportedFormat,

    /// Payload exceeds the size ceiling.
    #[error("File too large. Maximum size is {}MB.", .limit_bytes / BYTES_PER_MB)]
    FileTooLarge {
        /// The ceiling that was exceeded, in bytes.
        limit_bytes: u64,
    },

    /// Width or height is below the floor.
    #[error("Image too small. Minimum dimensions: {min_dimension}x{min_dimension}px")]
    ImageTooSmall {
        /// The floor, in pixels.
        min_dimension: u32,
    },

    /// The payload could not be decoded as an image.
    #[error("Invalid image file")]
    InvalidImage,
}

/// Reject any declared MIME type outside the allow-list.
pub fn validate_format(file: &CandidateFile) -> Result<(), ValidationError> {
    if ALLOWED_MIME_TYPES.contains(&file.mime_type()) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFormat)
    }
}

/// Reject payloads larger than `max_file_size` bytes.
pub fn validate_size(file: &CandidateFile, max_file_size: u64) -> Result<(), ValidationError> {
    if file.size() > max_file_size {
        return Err(ValidationError::FileTooLarge {
            limit_bytes: max_file_size,
        });
    }
    Ok(())
}

/// Decode the whole image off the async executor and check its size.
///
/// A readable header is not enough: a truncated or corrupt body is
/// reported as [`ValidationError::InvalidImage`]. Returns the decoded
/// `(width, height)` on success.
pub async fn validate_dimensions(
    file: &CandidateFile,
    min_dimension: u32,
) -> Result<(u32, u32), ValidationError> {
    let bytes = file.bytes().clone();
    let decoded = tokio::task::spawn_blocking(move || {
        ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .ok()?
            .decode()
            .ok()
            .map(|image| (image.width(), image.height()))
    })
    .await;

    let (width, height) = match decoded {
        Ok(Some(dimensions)) => dimensions,
        Ok(None) => return Err(ValidationError::InvalidImage),
        Err(e) => {
            tracing::warn!(file = %file.name(), error = %e, "Decode task failed");
            return Err(ValidationError::InvalidImage);
        }
    };

    if width < min_dimension || height < min_dimension {
        return Err(ValidationError::ImageTooSmall { min_dimension });
    }
    Ok((width, height))
}
