//! A [`ColorValue`] holds one color projected into every supported model.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    error::ParseColorError,
    format::{format_color, Format},
    math::{clamp, round_to},
    models::{Hsl, Hsv, Model, Oklab, Oklch, Srgb},
};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// A snapshot of a single RGBA color in every representation the crate
/// knows about.
///
/// All fields are projections of the same RGBA value and are computed
/// together in [`ColorValue::from_srgb`]. A value is never updated in place;
/// a new color produces a new [`ColorValue`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorValue {
    /// Lowercase `#rrggbb`.
    pub hex: String,
    /// Lowercase `#rrggbbaa`.
    pub hex8: String,
    /// 8-bit sRGB channels.
    pub rgb: Srgb,
    /// HSL with saturation and lightness in percent.
    pub hsl: Hsl,
    /// HSV with saturation and value in percent.
    pub hsv: Hsv,
    /// OKLab.
    pub oklab: Oklab,
    /// OKLCH.
    pub oklch: Oklch,
}

impl ColorValue {
    /// Project an sRGB color into every supported model. Alpha is clamped
    /// and rounded to 3 decimals.
    pub fn from_srgb(srgb: Srgb) -> Self {
        let srgb = srgb.with_alpha(round_to(clamp(srgb.alpha, 0.0, 1.0), 3));

        Self {
            hex: srgb.to_hex(),
            hex8: srgb.to_hex8(),
            rgb: srgb,
            hsl: Hsl::from_srgb(&srgb),
            hsv: Hsv::from_srgb(&srgb),
            oklab: Oklab::from_srgb(&srgb),
            oklch: Oklch::from_srgb(&srgb),
        }
    }

    /// The shared alpha channel of every projection.
    pub fn alpha(&self) -> Component {
        self.rgb.alpha
    }

    /// Render this color in the given textual format.
    pub fn format(&self, format: Format) -> String {
        format_color(self, format)
    }
}

impl From<Srgb> for ColorValue {
    fn from(value: Srgb) -> Self {
        Self::from_srgb(value)
    }
}

impl FromStr for ColorValue {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Srgb>().map(Self::from_srgb)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() < 1.0 {
            f.write_str(&self.hex8)
        } else {
            f.write_str(&self.hex)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn every_projection_shares_one_rgba_source() {
        let value = ColorValue::from_srgb(Srgb::new(210, 105, 30, 0.5));

        assert_eq!(value.hex, "#d2691e");
        assert_eq!(value.hex8, "#d2691e80");
        assert_eq!(value.hsl.alpha, 0.5);
        assert_eq!(value.hsv.alpha, 0.5);
        assert_eq!(value.oklab.alpha, 0.5);
        assert_eq!(value.oklch.alpha, 0.5);

        assert_component_eq!(value.hsl.hue, 25.0);
        assert_component_eq!(value.hsv.value, 82.35);
        assert_eq!(value.oklch.lightness, value.oklab.lightness);
        assert_component_eq!(value.oklch.hue, value.oklab.to_polar().hue, 0.01);
    }

    #[test]
    fn alpha_is_clamped_and_rounded() {
        let value = ColorValue::from_srgb(Srgb::new(0, 0, 0, 0.123456));
        assert_eq!(value.alpha(), 0.123);

        let value = ColorValue::from_srgb(Srgb::new(0, 0, 0, 4.0));
        assert_eq!(value.alpha(), 1.0);
        assert_eq!(value.hex8, "#000000ff");
    }

    #[test]
    fn display_prefers_short_hex_for_opaque_colors() {
        let opaque = ColorValue::from_srgb(Srgb::new(255, 255, 255, 1.0));
        assert_eq!(opaque.to_string(), "#ffffff");

        let translucent = ColorValue::from_srgb(Srgb::new(255, 255, 255, 0.0));
        assert_eq!(translucent.to_string(), "#ffffff00");
    }

    #[test]
    fn components_map_each_channel() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 10.0);
        assert_component_eq!(c.0, 1.0);
        assert_component_eq!(c.1, 2.0);
        assert_component_eq!(c.2, 3.0);
    }
}
