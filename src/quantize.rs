//! Color quantization
//!
//! The engine consumes clusters through the [`Quantizer`] trait;
//! [`MmcqQuantizer`] is the production implementation, built on the
//! `color_thief` crate's modified median-cut quantization.

use crate::error::ExtractError;
use crate::models::{ColorCluster, PixelGrid, Rgb};

/// Collaborator that reduces decoded pixels to a set of color clusters.
///
/// `max_colors` bounds the palette size; `quality` is the pixel sampling
/// stride (1 = every pixel). Must be deterministic for identical input.
pub trait Quantizer: Send + Sync {
    fn quantize(
        &self,
        pixels: &PixelGrid,
        max_colors: u8,
        quality: u8,
    ) -> Result<Vec<ColorCluster>, ExtractError>;
}

/// Modified median-cut quantizer.
///
/// `color_thief` only returns the palette colors, so populations are derived
/// by assigning every `quality`-th pixel to its nearest palette entry.
/// Populations are therefore counts in sampled-pixel space, which is the
/// space the engine's population thresholds were tuned in.
#[derive(Debug, Clone, Copy, Default)]
pub struct MmcqQuantizer;

impl Quantizer for MmcqQuantizer {
    fn quantize(
        &self,
        pixels: &PixelGrid,
        max_colors: u8,
        quality: u8,
    ) -> Result<Vec<ColorCluster>, ExtractError> {
        let buf: Vec<u8> = pixels
            .pixels()
            .iter()
            .flat_map(|p| [p.r, p.g, p.b])
            .collect();

        let palette =
            color_thief::get_palette(&buf, color_thief::ColorFormat::Rgb, quality, max_colors)
                .map_err(|e| ExtractError::Quantize(format!("{e:?}")))?;

        let palette: Vec<Rgb> = palette.iter().map(|c| Rgb::new(c.r, c.g, c.b)).collect();

        let stride = (quality as usize).max(1);
        let mut populations = vec![0u32; palette.len()];
        for pixel in pixels.pixels().iter().step_by(stride) {
            if let Some(idx) = nearest(&palette, *pixel) {
                populations[idx] += 1;
            }
        }

        Ok(palette
            .into_iter()
            .zip(populations)
            .map(|(avg, population)| ColorCluster::new(avg, population))
            .collect())
    }
}

fn nearest(palette: &[Rgb], pixel: Rgb) -> Option<usize> {
    palette
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| distance_sq(**c, pixel))
        .map(|(idx, _)| idx)
}

fn distance_sq(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left half red, right half blue.
    fn two_tone_grid(width: u32, height: u32) -> PixelGrid {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for _ in 0..height {
            for x in 0..width {
                if x < width / 2 {
                    pixels.push(Rgb::new(210, 30, 30));
                } else {
                    pixels.push(Rgb::new(30, 30, 210));
                }
            }
        }
        PixelGrid::new(width, height, pixels)
    }

    #[test]
    fn test_populations_cover_sampled_pixels() {
        let grid = two_tone_grid(100, 60);
        let clusters = MmcqQuantizer.quantize(&grid, 10, 5).unwrap();
        assert!(!clusters.is_empty());

        let sampled = grid.pixels().iter().step_by(5).count() as u32;
        let total: u32 = clusters.iter().map(|c| c.population).sum();
        assert_eq!(total, sampled);
    }

    #[test]
    fn test_finds_both_tones() {
        let grid = two_tone_grid(100, 60);
        let clusters = MmcqQuantizer.quantize(&grid, 10, 1).unwrap();

        let near = |target: Rgb| {
            clusters
                .iter()
                .filter(|c| c.population > 0)
                .any(|c| distance_sq(c.avg, target) < 40 * 40)
        };
        assert!(near(Rgb::new(210, 30, 30)));
        assert!(near(Rgb::new(30, 30, 210)));
    }

    #[test]
    fn test_deterministic() {
        let grid = two_tone_grid(50, 50);
        let a = MmcqQuantizer.quantize(&grid, 10, 5).unwrap();
        let b = MmcqQuantizer.quantize(&grid, 10, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_nearest_assignment() {
        let palette = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
        assert_eq!(nearest(&palette, Rgb::new(200, 10, 10)), Some(0));
        assert_eq!(nearest(&palette, Rgb::new(10, 10, 200)), Some(1));
        assert_eq!(nearest(&[], Rgb::BLACK), None);
    }
}
