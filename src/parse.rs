//! A permissive parser for the textual color grammars the formatter emits.
//!
//! Input is trimmed and lowercased, then offered to each grammar in order:
//! hex, `rgb()`, `hsl()`, `oklch()`, `hsv()` and `oklab()`. Every grammar is
//! anchored on its own prefix, so at most one can match. Out of range
//! numbers are clamped (hues wrap) instead of rejected; input that matches
//! no grammar yields `None`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{
    color::Component,
    math::{clamp, normalize_hue},
    models::{Hsl, Hsv, Oklab, Oklch, Srgb},
};

/// A signed integer or decimal number.
const NUMBER: &str = r"([+-]?(?:\d+(?:\.\d*)?|\.\d+))";
/// Channel separator: a comma or plain whitespace.
const SEP: &str = r"(?:\s*,\s*|\s+)";
/// Alpha separator: a comma or a slash.
const ALPHA_SEP: &str = r"\s*[,/]\s*";

fn grammar(pattern: String) -> Regex {
    Regex::new(&pattern).expect("valid color grammar")
}

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    grammar(format!(
        r"^rgba?\s*\(\s*{NUMBER}{SEP}{NUMBER}{SEP}{NUMBER}(?:{ALPHA_SEP}{NUMBER})?\s*\)$"
    ))
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| cylindrical_grammar("hsl"));

static HSV_RE: LazyLock<Regex> = LazyLock::new(|| cylindrical_grammar("hsv"));

/// `name(h, s%, x%)` with an optional alpha and `a` suffix.
fn cylindrical_grammar(name: &str) -> Regex {
    let channels = format!(r"{NUMBER}(?:deg)?{SEP}{NUMBER}%?{SEP}{NUMBER}%?");
    grammar(format!(r"^{name}a?\s*\(\s*{channels}(?:{ALPHA_SEP}{NUMBER})?\s*\)$"))
}

static OKLCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    grammar(format!(
        r"^oklch\s*\(\s*{NUMBER}%?\s+{NUMBER}\s+{NUMBER}(?:deg)?(?:\s*/\s*{NUMBER})?\s*\)$"
    ))
});

static OKLAB_RE: LazyLock<Regex> = LazyLock::new(|| {
    grammar(format!(
        r"^oklab\s*\(\s*{NUMBER}%?\s+{NUMBER}\s+{NUMBER}(?:\s*/\s*{NUMBER})?\s*\)$"
    ))
});

type Matcher = fn(&str) -> Option<Srgb>;

/// Grammars in the order they are tried.
const MATCHERS: &[(&str, Matcher)] = &[
    ("hex", match_hex),
    ("rgb", match_rgb),
    ("hsl", match_hsl),
    ("oklch", match_oklch),
    ("hsv", match_hsv),
    ("oklab", match_oklab),
];

/// Parse a color string into 8-bit sRGB. Returns `None` when the text does
/// not match any supported grammar.
///
/// ```rust
/// use tincture::parse_color;
///
/// let c = parse_color("rgb(300, -10, 500)").unwrap();
/// assert_eq!((c.red, c.green, c.blue), (255, 0, 255));
/// assert!(parse_color("not-a-color").is_none());
/// ```
pub fn parse_color(input: &str) -> Option<Srgb> {
    let input = input.trim().to_lowercase();
    MATCHERS.iter().find_map(|(name, matcher)| {
        let srgb = matcher(&input)?;
        tracing::trace!(grammar = *name, input = %input, "matched color grammar");
        Some(srgb)
    })
}

fn number(caps: &Captures, index: usize) -> Option<Component> {
    caps.get(index)?.as_str().parse().ok()
}

/// An optional alpha channel, clamped to `0..=1`. Missing means opaque.
fn alpha(caps: &Captures, index: usize) -> Option<Component> {
    match caps.get(index) {
        Some(m) => m.as_str().parse().ok().map(|a| clamp(a, 0.0, 1.0)),
        None => Some(1.0),
    }
}

/// Lightness may be given as a fraction or a percentage; anything above 1 is
/// taken to be a percentage.
fn lightness(value: Component) -> Component {
    if value > 1.0 {
        value / 100.0
    } else {
        value
    }
}

fn match_hex(input: &str) -> Option<Srgb> {
    if !input.starts_with('#') {
        return None;
    }
    Srgb::from_hex(input)
}

fn match_rgb(input: &str) -> Option<Srgb> {
    let caps = RGB_RE.captures(input)?;
    let channel = |index| number(&caps, index).map(|v| clamp(v.round(), 0.0, 255.0) as u8);

    Some(Srgb::new(channel(1)?, channel(2)?, channel(3)?, alpha(&caps, 4)?))
}

pub(crate) fn hsl_channels(input: &str) -> Option<Hsl> {
    let caps = HSL_RE.captures(input)?;

    Some(Hsl::new(
        normalize_hue(number(&caps, 1)?),
        clamp(number(&caps, 2)?, 0.0, 100.0),
        clamp(number(&caps, 3)?, 0.0, 100.0),
        alpha(&caps, 4)?,
    ))
}

fn match_hsl(input: &str) -> Option<Srgb> {
    hsl_channels(input).map(|hsl| hsl.to_srgb())
}

fn match_hsv(input: &str) -> Option<Srgb> {
    let caps = HSV_RE.captures(input)?;
    let hsv = Hsv::new(
        number(&caps, 1)?,
        number(&caps, 2)?,
        number(&caps, 3)?,
        alpha(&caps, 4)?,
    );

    Some(hsv.normalized().to_srgb())
}

fn match_oklch(input: &str) -> Option<Srgb> {
    let caps = OKLCH_RE.captures(input)?;
    let oklch = Oklch::new(
        lightness(number(&caps, 1)?),
        number(&caps, 2)?.max(0.0),
        normalize_hue(number(&caps, 3)?),
        alpha(&caps, 4)?,
    );

    Some(oklch.to_srgb())
}

fn match_oklab(input: &str) -> Option<Srgb> {
    let caps = OKLAB_RE.captures(input)?;
    let oklab = Oklab::new(
        lightness(number(&caps, 1)?),
        number(&caps, 2)?,
        number(&caps, 3)?,
        alpha(&caps, 4)?,
    );

    Some(oklab.to_srgb())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_channels_near, assert_component_eq};

    fn rgba(input: &str) -> (u8, u8, u8, Component) {
        let c = parse_color(input).unwrap_or_else(|| panic!("{input:?} should parse"));
        (c.red, c.green, c.blue, c.alpha)
    }

    #[test]
    fn hex_requires_a_leading_hash() {
        assert_eq!(rgba("#ff8000"), (255, 128, 0, 1.0));
        assert_eq!(rgba("  #FFF  "), (255, 255, 255, 1.0));
        assert_eq!(rgba("#00000000"), (0, 0, 0, 0.0));
        assert!(parse_color("ff8000").is_none());
        assert!(parse_color("#ff80").is_some());
        assert!(parse_color("#ff800").is_none());
    }

    #[test]
    fn rgb_channels_clamp_instead_of_rejecting() {
        assert_eq!(rgba("rgb(300, -10, 500)"), (255, 0, 255, 1.0));
        assert_eq!(rgba("rgba(1, 2, 3, 0.5)"), (1, 2, 3, 0.5));
        assert_eq!(rgba("rgba(1, 2, 3, 7)"), (1, 2, 3, 1.0));
        assert_eq!(rgba("RGB(10 20 30 / .25)"), (10, 20, 30, 0.25));
        assert_eq!(rgba("rgb(999,0,0)"), (255, 0, 0, 1.0));
        assert_eq!(rgba("rgb(12.6, 0, 0)"), (13, 0, 0, 1.0));
    }

    #[test]
    fn hue_wraps_while_saturation_and_lightness_clamp() {
        let hsl = hsl_channels("hsl(370, 150%, 50%)").unwrap();
        assert_component_eq!(hsl.hue, 10.0);
        assert_component_eq!(hsl.saturation, 100.0);
        assert_component_eq!(hsl.lightness, 50.0);

        assert_eq!(rgba("hsl(370, 150%, 50%)"), (255, 43, 0, 1.0));
        assert_eq!(rgba("hsla(120deg, 100%, 25%, 0.3)"), (0, 128, 0, 0.3));
        assert_eq!(rgba("hsl(-120, 100, 50)"), (0, 0, 255, 1.0));
    }

    #[test]
    fn oklch_lightness_as_fraction_or_percentage() {
        let fraction = parse_color("oklch(0.628 0.2577 29.22)").unwrap();
        let percent = parse_color("oklch(62.8% 0.2577 29.22)").unwrap();
        assert_channels_near!(fraction, percent, 0);
        assert_channels_near!(fraction, Srgb::opaque(255, 0, 0), 1);

        assert_eq!(rgba("oklch(100% 0 0 / 0.5)"), (255, 255, 255, 0.5));
        assert_eq!(rgba("oklch(0 0 0)"), (0, 0, 0, 1.0));
    }

    #[test]
    fn hsv_and_oklab_grammars() {
        assert_eq!(rgba("hsv(240, 100%, 100%)"), (0, 0, 255, 1.0));
        assert_eq!(rgba("hsva(0, 0%, 100%, 0.75)"), (255, 255, 255, 0.75));
        assert_eq!(rgba("oklab(1 0 0)"), (255, 255, 255, 1.0));
        assert_channels_near!(
            parse_color("oklab(0.452 -0.0325 -0.3115)").unwrap(),
            Srgb::opaque(0, 0, 255),
            1
        );
    }

    #[test]
    fn anything_else_is_not_a_match() {
        for input in [
            "",
            "not-a-color",
            "invalid",
            "rgb(1, 2)",
            "rgb(a, b, c)",
            "hsl(10, 20%)",
            "oklch(50%, 0.1, 20)",
            "lab(50 10 10)",
            "#",
            "rgb(1, 2, 3) trailing",
        ] {
            assert!(parse_color(input).is_none(), "{input:?} should not parse");
        }
    }
}
