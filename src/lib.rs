//! coverhue - dominant color extraction from album artwork
//!
//! Given an artwork URL (or local file path), this crate resolves a pair of
//! colors for dynamic UI theming: a `primary` foreground/text color and a
//! `secondary` background overlay color, plus a brightness estimate of the
//! image's border region. Results are deterministic per image and memoized,
//! so the expensive fetch/decode/quantize work runs at most once per distinct
//! URL even under concurrent requests.
//!
//! The main entry point is [`ColorCache::get`], which never fails observably:
//! any fetch, decode, or quantization error is logged and replaced by
//! [`DominantColors::FALLBACK`].

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod quantize;
pub mod source;

pub use crate::config::Tuning;
pub use crate::core::cache::ColorCache;
pub use crate::core::pipeline::resolve_colors;
pub use crate::error::ExtractError;
pub use crate::models::{ColorCluster, DominantColors, PixelGrid, Rgb};
pub use crate::quantize::{MmcqQuantizer, Quantizer};
pub use crate::source::{HttpImageSource, ImageSource};
