//! RGBA colors with components in `[0, 1]`

use crate::math::lerp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Luminance weights (ITU-R BT.601) used by [`Color::grayscale`].
const LUMA_RED: f32 = 0.299;
const LUMA_GREEN: f32 = 0.587;
const LUMA_BLUE: f32 = 0.114;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn from_rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::from_rgba(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
            f32::from(alpha) / 255.0,
        )
    }

    /// Parses `#RRGGBBAA`.
    ///
    /// Anything else (missing `#`, `#RRGGBB`, stray characters) yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolbelt::color::Color;
    ///
    /// let c = Color::from_hex("#FFE700FF").unwrap();
    /// assert_eq!(c.green, 231.0 / 255.0);
    /// assert!(Color::from_hex("#FFE700").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        let [red, green, blue, alpha] = value.to_be_bytes();
        Some(Self::from_rgba8(red, green, blue, alpha))
    }

    /// Formats as uppercase `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            channel(self.alpha),
        ]
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Componentwise interpolation toward `other`; `amount` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Color, amount: f32) -> Color {
        Color::from_rgba(
            lerp(self.red, other.red, amount),
            lerp(self.green, other.green, amount),
            lerp(self.blue, other.blue, amount),
            lerp(self.alpha, other.alpha, amount),
        )
    }

    /// Perceived luminance replicated across R, G and B. Alpha is kept.
    pub fn grayscale(&self) -> Color {
        let luma = LUMA_RED * self.red + LUMA_GREEN * self.green + LUMA_BLUE * self.blue;
        Color::from_rgba(luma, luma, luma, self.alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_hex_round_trip_bytes(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
            let color = Color::from_rgba8(r, g, b, a);
            let parsed = Color::from_hex(&color.to_hex()).unwrap();
            prop_assert_eq!(parsed.to_rgba8(), [r, g, b, a]);
        }

        #[test]
        fn test_grayscale_in_unit_range(r in 0.0f32..=1.0, g in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let gray = Color::from_rgba(r, g, b, 1.0).grayscale();
            prop_assert!(gray.red >= 0.0 && gray.red <= 1.0 + 1e-6);
        }
    }
}
