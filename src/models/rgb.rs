//! RGB color type and perceptual measures

use serde::{Deserialize, Serialize};

/// An immutable RGB triple, channels in 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in [0, 1] using the HSP color model:
    /// `sqrt(0.299 r^2 + 0.587 g^2 + 0.114 b^2) / 255`.
    ///
    /// Unlike a plain channel average this tracks how bright a color actually
    /// looks (green reads much brighter than blue at equal channel values).
    pub fn perceived_brightness(&self) -> f64 {
        let r = self.r as f64;
        let g = self.g as f64;
        let b = self.b as f64;
        (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt() / 255.0
    }

    /// Colorfulness in [0, 1]: the normalized spread between the largest and
    /// smallest channel. Grays score 0, fully saturated hues score 1.
    pub fn colorfulness(&self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        (max - min) as f64 / 255.0
    }

    /// Multiply every channel by `factor`, clamping to 0-255.
    pub fn scaled(&self, factor: f64) -> Rgb {
        let scale = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Rgb::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Format as a `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as a CSS `rgb(r, g, b)` string, the form the display layer
    /// feeds into its style properties.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Rgb::new(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_endpoints() {
        assert_eq!(Rgb::BLACK.perceived_brightness(), 0.0);
        assert!((Rgb::WHITE.perceived_brightness() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_brightness_channel_weighting() {
        // Green carries the largest luma weight, blue the smallest
        let green = Rgb::new(0, 200, 0).perceived_brightness();
        let blue = Rgb::new(0, 0, 200).perceived_brightness();
        assert!(green > blue);
    }

    #[test]
    fn test_colorfulness() {
        assert_eq!(Rgb::new(128, 128, 128).colorfulness(), 0.0);
        assert_eq!(Rgb::new(255, 0, 0).colorfulness(), 1.0);
        let muted = Rgb::new(120, 100, 110).colorfulness();
        assert!(muted > 0.0 && muted < 0.1);
    }

    #[test]
    fn test_scaled_clamps() {
        assert_eq!(Rgb::new(200, 100, 0).scaled(2.0), Rgb::new(255, 200, 0));
        assert_eq!(Rgb::WHITE.scaled(0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = Rgb::new(18, 52, 86);
        assert_eq!(color.to_hex(), "#123456");
        assert_eq!(Rgb::from_hex("#123456"), Some(color));
        assert_eq!(Rgb::from_hex("12345"), None);
    }

    #[test]
    fn test_css_format() {
        assert_eq!(Rgb::new(1, 2, 3).to_css(), "rgb(1, 2, 3)");
    }
}
