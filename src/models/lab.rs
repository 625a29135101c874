//! Models for the rectangular and polar forms of the OKLab color space.

use crate::{
    color::Component,
    math::{normalize_hue, round_to, transform, transform_3x3},
    models::rgb::SrgbLinear,
};

tincture_macros::gen_model! {
    /// A color in the OKLab color space, in its rectangular orthogonal form.
    pub struct Oklab {
        /// The perceived lightness, `0..=1`.
        lightness: Component,
        /// The green/red axis, roughly `-0.4..=0.4`.
        a: Component,
        /// The blue/yellow axis, roughly `-0.4..=0.4`.
        b: Component,
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_LMS: [[Component; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: [[Component; 3]; 3] = [
    [0.2104542553,  0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050,  0.4505937099],
    [0.0259040371,  0.7827717662, -0.8086757660],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: [[Component; 3]; 3] = [
    [1.0,  0.3963377774,  0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_LINEAR_SRGB: [[Component; 3]; 3] = [
    [ 4.0767416621, -3.3077115913,  0.2309699292],
    [-1.2684380046,  2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147,  1.7076147010],
];

impl From<SrgbLinear> for Oklab {
    fn from(value: SrgbLinear) -> Self {
        let lms = transform(&transform_3x3(&LINEAR_SRGB_TO_LMS), value.to_components());
        let lms = lms.map(|v| v.cbrt());
        Oklab::from_components(transform(&transform_3x3(&LMS_TO_OKLAB), lms), value.alpha)
    }
}

impl From<Oklab> for SrgbLinear {
    fn from(value: Oklab) -> Self {
        let lms = transform(&transform_3x3(&OKLAB_TO_LMS), value.to_components());
        let lms = lms.map(|v| v * v * v);
        let linear = transform(&transform_3x3(&LMS_TO_LINEAR_SRGB), lms);
        SrgbLinear::from_components(linear, value.alpha)
    }
}

impl Oklab {
    /// Round every channel to 4 decimal places.
    pub fn rounded(&self) -> Self {
        Self::from_components(self.to_components().map(|v| round_to(v, 4)), self.alpha)
    }

    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. Every channel rounds to 4 decimals. A color with no chroma has a
    /// hue of 0.
    pub fn to_polar(&self) -> Oklch {
        let chroma = round_to((self.a * self.a + self.b * self.b).sqrt(), 4);
        let hue = if chroma == 0.0 {
            0.0
        } else {
            normalize_hue(round_to(normalize_hue(self.b.atan2(self.a).to_degrees()), 4))
        };

        Oklch::new(round_to(self.lightness, 4), chroma, hue, self.alpha)
    }
}

tincture_macros::gen_model! {
    /// A color in the OKLab color space, in its cylindrical polar form.
    pub struct Oklch {
        /// The perceived lightness, `0..=1`.
        lightness: Component,
        /// The chroma, roughly `0..=0.4`.
        chroma: Component,
        /// The hue in degrees, `0..360`.
        hue: Component,
    }
}

impl Oklch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Oklab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Oklab::new(self.lightness, a, b, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::Srgb};

    #[test]
    fn white_and_black_sit_on_the_lightness_axis() {
        let white = Oklab::from(Srgb::opaque(255, 255, 255).to_linear_light()).rounded();
        assert_component_eq!(white.lightness, 1.0);
        assert_component_eq!(white.a, 0.0);
        assert_component_eq!(white.b, 0.0);

        let black = Oklab::from(Srgb::opaque(0, 0, 0).to_linear_light()).rounded();
        assert_component_eq!(black.lightness, 0.0);
        assert_component_eq!(black.a, 0.0);
        assert_component_eq!(black.b, 0.0);
    }

    #[test]
    fn achromatic_colors_have_zero_hue() {
        let gray = Oklab::new(0.5999, 0.0, -0.0, 1.0).to_polar();
        assert_eq!(gray.chroma, 0.0);
        assert_eq!(gray.hue, 0.0);
    }

    #[test]
    fn negative_angles_wrap_into_range() {
        let blue = Oklab::new(0.452, -0.0325, -0.3115, 1.0).to_polar();
        assert!(blue.hue > 180.0 && blue.hue < 360.0, "{}", blue.hue);
        assert_component_eq!(blue.chroma, 0.3132);
    }

    #[test]
    fn polar_form_round_trips() {
        let lab = Oklab::new(0.6279, 0.2249, 0.1258, 1.0);
        let back = lab.to_polar().to_rectangular();
        assert_component_eq!(back.lightness, lab.lightness);
        assert_component_eq!(back.a, lab.a, 1e-4);
        assert_component_eq!(back.b, lab.b, 1e-4);
    }

    #[test]
    fn linear_light_round_trips_through_oklab() {
        let linear = SrgbLinear::new(0.25, 0.5, 0.75, 1.0);
        let back = SrgbLinear::from(Oklab::from(linear));
        assert_component_eq!(back.red, linear.red, 1e-5);
        assert_component_eq!(back.green, linear.green, 1e-5);
        assert_component_eq!(back.blue, linear.blue, 1e-5);
    }
}
