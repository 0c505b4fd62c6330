//! Data models for the dominant color engine

mod dominant;
mod pixels;
mod rgb;

pub use dominant::{ColorCluster, DominantColors};
pub use pixels::PixelGrid;
pub use rgb::Rgb;
