//! Target output resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output size requested from the upscaler.
///
/// Serialized as the wire literals `"2k"` / `"4k"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResolutionChoice {
    /// 2560×1440.
    #[serde(rename = "2k")]
    Low2K,
    /// 3840×2160.
    #[default]
    #[serde(rename = "4k")]
    High4K,
}

impl ResolutionChoice {
    /// All choices, lowest first.
    pub const ALL: [Self; 2] = [Self::Low2K, Self::High4K];

    /// Wire literal sent in the `resolution` form field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low2K => "2k",
            Self::High4K => "4k",
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low2K => "2K",
            Self::High4K => "4K",
        }
    }

    /// Target bounding box as `(width, height)`.
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Low2K => (2560, 1440),
            Self::High4K => (3840, 2160),
        }
    }
}

impl fmt::Display for ResolutionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not `2k` or `4k`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid resolution '{0}', expected 2k or 4k")]
pub struct ParseResolutionError(String);

impl FromStr for ResolutionChoice {
    type Err = ParseResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2k" => Ok(Self::Low2K),
            "4k" => Ok(Self::High4K),
            _ => Err(ParseResolutionError(s.to_string())),
        }
    }
}
