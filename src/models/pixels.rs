//! Decoded image pixel grid

use image::GenericImageView;

use super::Rgb;

/// A decoded image as a row-major grid of RGB pixels.
///
/// Alpha is dropped at construction; the engine only cares about color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Build a grid from raw pixels. `pixels` must hold exactly
    /// `width * height` entries, row-major.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer does not match {width}x{height}"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Flatten a decoded image into a grid.
    pub fn from_image(img: &image::DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        let rgb = img.to_rgb8();
        let pixels = rgb
            .pixels()
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y); panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}
