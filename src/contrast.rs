//! WCAG 2 contrast checks.

use crate::{
    color::{Component, Components},
    models::Srgb,
};

/// WCAG conformance levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Level AA.
    Aa,
    /// Level AAA.
    Aaa,
}

impl Level {
    /// The minimum contrast ratio for this level.
    pub fn minimum_ratio(&self, large_text: bool) -> Component {
        match (self, large_text) {
            (Level::Aa, false) => 4.5,
            (Level::Aa, true) => 3.0,
            (Level::Aaa, false) => 7.0,
            (Level::Aaa, true) => 4.5,
        }
    }
}

/// The relative luminance of a color, `0` for black and `1` for white.
/// Alpha is ignored.
pub fn relative_luminance(color: &Srgb) -> Component {
    let Components(red, green, blue) = color.to_unit().map(|c| {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    });

    0.2126 * red + 0.7152 * green + 0.0722 * blue
}

/// The contrast ratio between two colors, from `1` (identical luminance) to
/// `21` (black on white). The order of the arguments does not matter.
pub fn contrast_ratio(a: &Srgb, b: &Srgb) -> Component {
    let (l1, l2) = (relative_luminance(a), relative_luminance(b));
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Returns true if `ratio` satisfies `level` for normal or large text.
pub fn meets_contrast_ratio(ratio: Component, level: Level, large_text: bool) -> bool {
    ratio >= level.minimum_ratio(large_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn luminance_of_extremes() {
        assert_eq!(relative_luminance(&Srgb::opaque(0, 0, 0)), 0.0);
        assert_component_eq!(relative_luminance(&Srgb::opaque(255, 255, 255)), 1.0, 1e-9);

        let gray = relative_luminance(&Srgb::opaque(128, 128, 128));
        assert!(gray > 0.0 && gray < 1.0);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(&Srgb::opaque(0, 0, 0), &Srgb::opaque(255, 255, 255));
        assert_component_eq!(ratio, 21.0, 1e-9);
    }

    #[test]
    fn ratio_is_symmetric_and_at_least_one() {
        let a = Srgb::opaque(200, 30, 90);
        let b = Srgb::opaque(20, 140, 240);

        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
        assert_eq!(contrast_ratio(&a, &a), 1.0);
    }

    #[test]
    fn thresholds() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Level, bool, bool)] = &[
            (4.5, Level::Aa,  false, true),
            (4.4, Level::Aa,  false, false),
            (3.0, Level::Aa,  true,  true),
            (2.9, Level::Aa,  true,  false),
            (7.0, Level::Aaa, false, true),
            (6.9, Level::Aaa, false, false),
            (4.5, Level::Aaa, true,  true),
            (4.4, Level::Aaa, true,  false),
        ];

        for &(ratio, level, large_text, expected) in TESTS {
            assert_eq!(
                meets_contrast_ratio(ratio, level, large_text),
                expected,
                "{ratio} {level:?}"
            );
        }
    }
}
