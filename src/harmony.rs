//! Color harmonies built by rotating the HSV hue of a base color.

use std::{fmt, str::FromStr};

use crate::{
    color::Component,
    error::ParseSchemeError,
    math::normalize_hue,
    models::{Hsv, Srgb},
};

/// A color harmony scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// The color opposite on the hue wheel.
    Complementary,
    /// The neighbors 30 degrees either side, with the base in the middle.
    Analogous,
    /// Three colors 120 degrees apart.
    Triadic,
    /// The base and the two neighbors of its complement.
    SplitComplementary,
    /// Two complementary pairs 60 degrees apart.
    Tetradic,
    /// The base hue and saturation at five levels of value.
    Monochromatic,
}

impl Scheme {
    /// Every scheme.
    pub const ALL: [Scheme; 6] = [
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::SplitComplementary,
        Scheme::Tetradic,
        Scheme::Monochromatic,
    ];

    /// The kebab-case name of the scheme.
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::SplitComplementary => "split-complementary",
            Scheme::Tetradic => "tetradic",
            Scheme::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Scheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == name)
            .ok_or_else(|| ParseSchemeError(s.to_owned()))
    }
}

/// Rotate the hue of `base` by `degrees`, keeping saturation, value and alpha.
fn rotate(base: &Hsv, degrees: Component) -> Srgb {
    Hsv::new(normalize_hue(base.hue + degrees), base.saturation, base.value, base.alpha).to_srgb()
}

/// The color opposite `color` on the hue wheel.
pub fn complementary(color: &Srgb) -> Srgb {
    rotate(&color.to_hsv(), 180.0)
}

/// `[hue - angle, color, hue + angle]`.
pub fn analogous(color: &Srgb, angle: Component) -> Vec<Srgb> {
    let hsv = color.to_hsv();
    vec![rotate(&hsv, -angle), *color, rotate(&hsv, angle)]
}

/// `[color, hue + 120, hue + 240]`.
pub fn triadic(color: &Srgb) -> Vec<Srgb> {
    let hsv = color.to_hsv();
    vec![*color, rotate(&hsv, 120.0), rotate(&hsv, 240.0)]
}

/// `[color, complement - angle, complement + angle]`.
pub fn split_complementary(color: &Srgb, angle: Component) -> Vec<Srgb> {
    let hsv = color.to_hsv();
    vec![*color, rotate(&hsv, 180.0 - angle), rotate(&hsv, 180.0 + angle)]
}

/// `[color, hue + angle, hue + 180, hue + 180 + angle]`.
pub fn tetradic(color: &Srgb, angle: Component) -> Vec<Srgb> {
    let hsv = color.to_hsv();
    vec![
        *color,
        rotate(&hsv, angle),
        rotate(&hsv, 180.0),
        rotate(&hsv, 180.0 + angle),
    ]
}

/// The hue and saturation of `color` at 20%, 40%, 60%, 80% and 100% value.
pub fn monochromatic(color: &Srgb) -> Vec<Srgb> {
    let hsv = color.to_hsv();
    [20.0, 40.0, 60.0, 80.0, 100.0]
        .into_iter()
        .map(|value| Hsv::new(hsv.hue, hsv.saturation, value, hsv.alpha).to_srgb())
        .collect()
}

/// Build `scheme` around `color` with the default angles.
pub fn harmony(color: &Srgb, scheme: Scheme) -> Vec<Srgb> {
    match scheme {
        Scheme::Complementary => vec![*color, complementary(color)],
        Scheme::Analogous => analogous(color, 30.0),
        Scheme::Triadic => triadic(color),
        Scheme::SplitComplementary => split_complementary(color, 30.0),
        Scheme::Tetradic => tetradic(color, 60.0),
        Scheme::Monochromatic => monochromatic(color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(c: &Srgb) -> (u8, u8, u8) {
        (c.red, c.green, c.blue)
    }

    #[test]
    fn complement_of_red_is_cyan() {
        assert_eq!(rgb(&complementary(&Srgb::opaque(255, 0, 0))), (0, 255, 255));
    }

    #[test]
    fn analogous_keeps_the_base_in_the_middle() {
        let base = Srgb::opaque(255, 0, 0);
        let colors = analogous(&base, 30.0);

        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], base);
        assert_eq!(rgb(&colors[0]), (255, 0, 128));
        assert_eq!(rgb(&colors[2]), (255, 128, 0));
    }

    #[test]
    fn triadic_is_evenly_spaced() {
        let colors = triadic(&Srgb::opaque(255, 0, 0));
        assert_eq!(
            colors.iter().map(rgb).collect::<Vec<_>>(),
            vec![(255, 0, 0), (0, 255, 0), (0, 0, 255)]
        );
    }

    #[test]
    fn split_complementary_and_tetradic_start_with_the_base() {
        let base = Srgb::new(12, 200, 99, 0.5);

        let split = split_complementary(&base, 30.0);
        assert_eq!(split.len(), 3);
        assert_eq!(split[0], base);

        let tetradic = tetradic(&base, 60.0);
        assert_eq!(tetradic.len(), 4);
        assert_eq!(tetradic[0], base);
        assert!(tetradic.iter().all(|c| c.alpha == 0.5));
    }

    #[test]
    fn monochromatic_steps_value() {
        let colors = monochromatic(&Srgb::opaque(255, 0, 0));
        assert_eq!(colors.len(), 5);
        assert_eq!(rgb(&colors[0]), (51, 0, 0));
        assert_eq!(rgb(&colors[4]), (255, 0, 0));
    }

    #[test]
    fn scheme_names() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.to_string().parse::<Scheme>(), Ok(scheme));
        }
        assert_eq!("split_complementary".parse::<Scheme>(), Ok(Scheme::SplitComplementary));
        assert!("rainbow".parse::<Scheme>().is_err());
    }

    #[test]
    fn harmony_dispatches_on_scheme() {
        let base = Srgb::opaque(255, 0, 0);
        assert_eq!(harmony(&base, Scheme::Complementary).len(), 2);
        assert_eq!(harmony(&base, Scheme::Tetradic), tetradic(&base, 60.0));
    }
}
