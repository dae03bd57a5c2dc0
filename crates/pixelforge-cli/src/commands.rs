//! Available subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use pixelforge_core::ResolutionChoice;
use pixelforge_http::DEFAULT_BASE_URL;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Upscale an image and save the result as PNG
    Upscale(UpscaleArgs),

    /// Check an image against the upload rules without sending it
    Validate {
        /// Image to check
        file: PathBuf,
    },
}

/// Arguments for `pixelforge upscale`.
#[derive(Args, Debug, Clone)]
pub struct UpscaleArgs {
    /// Images to upscale. Only the first one is processed.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Target resolution (2k or 4k)
    #[arg(short, long, default_value = "4k")]
    pub resolution: ResolutionChoice,

    /// Base URL of the upscaling service
    #[arg(long, env = "PIXELFORGE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Directory the upscaled PNG is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Give up on the service after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}
