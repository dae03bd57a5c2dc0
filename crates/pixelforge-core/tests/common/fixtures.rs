//! Synthesized image payloads.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use pixelforge_core::CandidateFile;

/// Encode a black `width`×`height` image.
pub fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut out, format)
        .expect("encode fixture image");
    out.into_inner()
}

/// A valid PNG candidate.
pub fn png_file(name: &str, width: u32, height: u32) -> CandidateFile {
    CandidateFile::new(name, "image/png", encode(width, height, ImageFormat::Png))
}

/// A valid JPEG candidate padded with trailing bytes up to `total_size`.
pub fn padded_jpeg_file(name: &str, width: u32, height: u32, total_size: usize) -> CandidateFile {
    let mut bytes = encode(width, height, ImageFormat::Jpeg);
    if bytes.len() < total_size {
        bytes.resize(total_size, 0);
    }
    CandidateFile::new(name, "image/jpeg", bytes)
}
