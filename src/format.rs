//! Render a [`ColorValue`] as text.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{color::ColorValue, error::ParseFormatError};

/// The textual formats a color can be rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `#rrggbbaa`
    Hex8,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, a)`
    Hsla,
    /// `hsv(h, s%, v%)`
    Hsv,
    /// `hsva(h, s%, v%, a)`
    Hsva,
    /// `oklab(L a b)`
    Oklab,
    /// `oklch(L% C h)`
    Oklch,
    /// `oklch(L% C h / a)`
    Oklcha,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 11] = [
        Format::Hex,
        Format::Hex8,
        Format::Rgb,
        Format::Rgba,
        Format::Hsl,
        Format::Hsla,
        Format::Hsv,
        Format::Hsva,
        Format::Oklab,
        Format::Oklch,
        Format::Oklcha,
    ];

    /// The lowercase name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Hex8 => "hex8",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::Hsl => "hsl",
            Format::Hsla => "hsla",
            Format::Hsv => "hsv",
            Format::Hsva => "hsva",
            Format::Oklab => "oklab",
            Format::Oklch => "oklch",
            Format::Oklcha => "oklcha",
        }
    }

    /// Returns true if the format carries the alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(
            self,
            Format::Hex8 | Format::Rgba | Format::Hsla | Format::Hsva | Format::Oklcha
        )
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| ParseFormatError(s.to_owned()))
    }
}

/// Render `color` in the given format.
///
/// Numbers print in their shortest form, so `25.0` renders as `25`. OKLCH is
/// the exception: lightness prints as a percentage with one decimal, chroma
/// with three and hue with one.
pub fn format_color(color: &ColorValue, format: Format) -> String {
    let ColorValue {
        rgb,
        hsl,
        hsv,
        oklab,
        oklch,
        ..
    } = color;

    match format {
        Format::Hex => color.hex.clone(),
        Format::Hex8 => color.hex8.clone(),
        Format::Rgb => format!("rgb({}, {}, {})", rgb.red, rgb.green, rgb.blue),
        Format::Rgba => format!(
            "rgba({}, {}, {}, {})",
            rgb.red, rgb.green, rgb.blue, rgb.alpha
        ),
        Format::Hsl => format!("hsl({}, {}%, {}%)", hsl.hue, hsl.saturation, hsl.lightness),
        Format::Hsla => format!(
            "hsla({}, {}%, {}%, {})",
            hsl.hue, hsl.saturation, hsl.lightness, hsl.alpha
        ),
        Format::Hsv => format!("hsv({}, {}%, {}%)", hsv.hue, hsv.saturation, hsv.value),
        Format::Hsva => format!(
            "hsva({}, {}%, {}%, {})",
            hsv.hue, hsv.saturation, hsv.value, hsv.alpha
        ),
        Format::Oklab => format!("oklab({} {} {})", oklab.lightness, oklab.a, oklab.b),
        Format::Oklch => format!(
            "oklch({:.1}% {:.3} {:.1})",
            oklch.lightness * 100.0,
            oklch.chroma,
            oklch.hue
        ),
        Format::Oklcha => format!(
            "oklch({:.1}% {:.3} {:.1} / {})",
            oklch.lightness * 100.0,
            oklch.chroma,
            oklch.hue,
            oklch.alpha
        ),
    }
}
