//! Model a color in the sRGB color space, gamma encoded or in linear light.

use std::{fmt::Write, str::FromStr};

use crate::{
    color::{Component, Components},
    error::ParseColorError,
    math::clamp,
};

tincture_macros::gen_model! {
    /// A color in the sRGB color space with 8-bit gamma encoded channels.
    pub struct Srgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

/// Convert a channel in the range `0..=1` to 8 bits, clamping anything out of
/// range.
fn to_byte(value: Component) -> u8 {
    (clamp(value, 0.0, 1.0) * 255.0).round() as u8
}

impl Srgb {
    /// Create an opaque color.
    pub fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color from gamma encoded channels in the range `0..=1`.
    /// Channels outside of the range are clamped.
    pub fn from_unit(components: Components, alpha: Component) -> Self {
        let Components(red, green, blue) = components;
        Self::new(to_byte(red), to_byte(green), to_byte(blue), alpha)
    }

    /// Return the channels scaled to the range `0..=1`.
    pub fn to_unit(&self) -> Components {
        self.to_components().map(|v| v / 255.0)
    }

    /// Parse a hex color with 3, 4, 6 or 8 digits. The leading `#` is
    /// optional. Short forms duplicate each digit.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let short = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|v| v * 17);
        let long = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let alpha = |byte: u8| byte as Component / 255.0;

        match digits.len() {
            3 => Some(Self::new(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Some(Self::new(short(0)?, short(1)?, short(2)?, alpha(short(3)?))),
            6 => Some(Self::new(long(0)?, long(2)?, long(4)?, 1.0)),
            8 => Some(Self::new(long(0)?, long(2)?, long(4)?, alpha(long(6)?))),
            _ => None,
        }
    }

    /// Format as lowercase `#rrggbb`. Alpha is ignored.
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(7);
        hex.push('#');
        for channel in [self.red, self.green, self.blue] {
            let _ = write!(hex, "{channel:02x}");
        }
        hex
    }

    /// Format as lowercase `#rrggbbaa`.
    pub fn to_hex8(&self) -> String {
        let mut hex = self.to_hex();
        let _ = write!(hex, "{:02x}", to_byte(self.alpha));
        hex
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        let components = self.to_unit().map(|value| {
            if value <= 0.04045 {
                value / 12.92
            } else {
                ((value + 0.055) / 1.055).powf(2.4)
            }
        });
        SrgbLinear::from_components(components, self.alpha)
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_color(s).ok_or_else(|| ParseColorError::new(s))
    }
}

tincture_macros::gen_model! {
    /// A color in the sRGB color space with no gamma encoding.
    pub struct SrgbLinear {
        /// The red channel of the color.
        red: Component,
        /// The green channel of the color.
        green: Component,
        /// The blue channel of the color.
        blue: Component,
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded 8-bit channels.
    /// Values outside of the sRGB gamut are clamped.
    pub fn to_gamma_encoded(&self) -> Srgb {
        let components = self.to_components().map(|value| {
            if value <= 0.0031308 {
                12.92 * value
            } else {
                1.055 * value.powf(1.0 / 2.4) - 0.055
            }
        });
        Srgb::from_unit(components, self.alpha)
    }
}
