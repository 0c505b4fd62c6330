//! Error taxonomy for the extraction pipeline
//!
//! None of these escape [`crate::ColorCache::get`]; they are logged and
//! collapsed into [`crate::DominantColors::FALLBACK`] so the caller always
//! receives a usable color pair.

use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong between receiving an image URL and producing
/// a color pair.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to fetch image: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("color quantization failed: {0}")]
    Quantize(String),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("image processing timed out after {0:?}")]
    Timeout(Duration),
}
