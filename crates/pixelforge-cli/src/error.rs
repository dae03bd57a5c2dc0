//! CLI-specific error types and exit codes.

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The file failed a local upload rule.
    #[error("{0}")]
    Validation(String),

    /// The service did not produce a result.
    #[error("{0}")]
    Upscale(String),

    /// Reading the input or writing the download failed.
    #[error("IO error: {0}")]
    Io(String),

    /// The client could not be configured.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error already printed to the user as a notification.
    #[error("{0}")]
    Notified(Box<CliError>),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Categories follow sysexits.h.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 65, // EX_DATAERR
            Self::Upscale(_) => 69,    // EX_UNAVAILABLE
            Self::Io(_) => 74,         // EX_IOERR
            Self::Config(_) => 78,     // EX_CONFIG
            Self::Notified(inner) => inner.exit_code(),
        }
    }

    /// Exit code for an error surfaced from a handler.
    pub fn exit_code_for(err: &anyhow::Error) -> i32 {
        err.downcast_ref::<Self>().map_or(1, Self::exit_code)
    }

    /// Whether the user has already seen this error on stderr.
    pub fn is_notified(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<Self>(), Some(Self::Notified(_)))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
