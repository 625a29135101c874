//! Conversions between 8-bit sRGB and every other model.
//!
//! Values projected from sRGB are rounded to suppress floating point noise:
//! HSL and HSV channels to 2 decimals, every OKLab and OKLCH channel to 4
//! decimals. Converting back to sRGB never fails; anything outside of the sRGB
//! gamut is clamped.
//!
//! ```rust
//! use tincture::models::Srgb;
//! let chocolate = Srgb::opaque(210, 105, 30);
//! let hsl = chocolate.to_hsl();
//! assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (25.0, 75.0, 47.06));
//! assert_eq!(hsl.to_srgb(), chocolate);
//! ```

use crate::{
    color::Components,
    math::{clamp, normalize_hue, round_to},
    models::{Hsl, Hsv, Model, Oklab, Oklch, Srgb, SrgbLinear},
};

impl Srgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_unit());
        Hsl::new(
            normalize_hue(round_to(hue, 2)),
            round_to(saturation * 100.0, 2),
            round_to(lightness * 100.0, 2),
            self.alpha,
        )
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let Components(hue, saturation, value) = util::rgb_to_hsv(&self.to_unit());
        Hsv::new(
            normalize_hue(round_to(hue, 2)),
            round_to(saturation * 100.0, 2),
            round_to(value * 100.0, 2),
            self.alpha,
        )
    }

    /// Convert this color to OKLab.
    pub fn to_oklab(&self) -> Oklab {
        Oklab::from(self.to_linear_light()).rounded()
    }

    /// Convert this color to OKLCH. The polar form is taken from the
    /// unrounded OKLab value so that each channel is rounded only once.
    pub fn to_oklch(&self) -> Oklch {
        Oklab::from(self.to_linear_light()).to_polar()
    }
}

impl Hsl {
    /// Convert this color to 8-bit sRGB.
    pub fn to_srgb(&self) -> Srgb {
        let unit = Components(
            self.hue,
            clamp(self.saturation, 0.0, 100.0) / 100.0,
            clamp(self.lightness, 0.0, 100.0) / 100.0,
        );
        Srgb::from_unit(util::hsl_to_rgb(&unit), self.alpha)
    }
}

impl Hsv {
    /// Convert this color to 8-bit sRGB.
    pub fn to_srgb(&self) -> Srgb {
        let unit = Components(
            self.hue,
            clamp(self.saturation, 0.0, 100.0) / 100.0,
            clamp(self.value, 0.0, 100.0) / 100.0,
        );
        Srgb::from_unit(util::hsv_to_rgb(&unit), self.alpha)
    }
}

impl Oklab {
    /// Convert this color to 8-bit sRGB, clamping out of gamut values.
    pub fn to_srgb(&self) -> Srgb {
        SrgbLinear::from(*self).to_gamma_encoded()
    }
}

impl Oklch {
    /// Convert this color to 8-bit sRGB, clamping out of gamut values.
    pub fn to_srgb(&self) -> Srgb {
        self.to_rectangular().to_srgb()
    }
}

impl Model for Srgb {
    fn from_srgb(srgb: &Srgb) -> Self {
        *srgb
    }

    fn to_srgb(&self) -> Srgb {
        *self
    }
}

macro_rules! impl_model {
    ($model:ty, $from:ident) => {
        impl Model for $model {
            fn from_srgb(srgb: &Srgb) -> Self {
                srgb.$from()
            }

            fn to_srgb(&self) -> Srgb {
                <$model>::to_srgb(self)
            }
        }
    };
}

impl_model!(Hsl, to_hsl);
impl_model!(Hsv, to_hsv);
impl_model!(Oklab, to_oklab);
impl_model!(Oklch, to_oklch);

mod util {
    use crate::{
        color::{Component, Components},
        math::{clamp, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values. Achromatic colors get a hue of 0.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation. All channels except the hue
    /// are in the range `0..=1`.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * clamp((k - 3.0).min(9.0 - k), -1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB notation to HSV notation. All channels except the hue
    /// are in the range `0..=1`.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        Components(hue, saturation, max)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                value - value * saturation * clamp(k.min(4.0 - k), 0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_channels_near, assert_component_eq, color::Component};

    #[derive(Clone, Copy, Debug)]
    enum To {
        Hsl,
        Hsv,
        Oklab,
        Oklch,
    }

    impl To {
        fn project(self, srgb: &Srgb) -> Components {
            match self {
                To::Hsl => srgb.to_hsl().to_components(),
                To::Hsv => srgb.to_hsv().to_components(),
                To::Oklab => srgb.to_oklab().to_components(),
                To::Oklch => srgb.to_oklch().to_components(),
            }
        }
    }

    #[test]
    fn test_conversions() {
        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(u8, u8, u8, To, Component, Component, Component, Component)] = &[
            (210, 105,  30, To::Hsl,   25.0,    75.0,     47.06,   0.005),
            (210, 105,  30, To::Hsv,   25.0,    85.71,    82.35,   0.005),
            (210, 105,  30, To::Oklab,  0.6344,  0.0991,   0.1192, 0.0001),
            (210, 105,  30, To::Oklch,  0.6344,  0.155,   50.2665, 0.0001),
            (255,   0,   0, To::Hsl,    0.0,   100.0,     50.0,    0.005),
            (255,   0,   0, To::Hsv,    0.0,   100.0,    100.0,    0.005),
            (255,   0,   0, To::Oklab,  0.628,   0.2249,   0.1258, 0.0001),
            (255,   0,   0, To::Oklch,  0.628,   0.2577,  29.2339, 0.0001),
            (  0, 255,   0, To::Hsl,  120.0,   100.0,     50.0,    0.005),
            (  0, 255,   0, To::Oklab,  0.8664, -0.2339,   0.1795, 0.0001),
            (  0, 255,   0, To::Oklch,  0.8664,  0.2948, 142.4953, 0.0001),
            (  0,   0, 255, To::Hsv,  240.0,   100.0,    100.0,    0.005),
            (  0,   0, 255, To::Oklab,  0.452,  -0.0325,  -0.3115, 0.0001),
            (  0,   0, 255, To::Oklch,  0.452,   0.3132, 264.052,  0.0001),
            (255, 255, 255, To::Oklab,  1.0,     0.0,      0.0,    0.0001),
            (  0,   0,   0, To::Oklch,  0.0,     0.0,      0.0,    0.0001),
        ];

        for &(red, green, blue, to, c0, c1, c2, epsilon) in TESTS {
            println!("rgb({red}, {green}, {blue}) -> {to:?}");
            let Components(a0, a1, a2) = to.project(&Srgb::opaque(red, green, blue));
            assert_component_eq!(a0, c0, epsilon);
            assert_component_eq!(a1, c1, epsilon);
            assert_component_eq!(a2, c2, epsilon);
        }
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        for v in [0, 1, 128, 254, 255] {
            let gray = Srgb::opaque(v, v, v);
            assert_eq!(gray.to_hsl().hue, 0.0);
            assert_eq!(gray.to_hsl().saturation, 0.0);
            assert_eq!(gray.to_hsv().hue, 0.0);
            assert_eq!(gray.to_oklch().hue, 0.0);
        }
        assert_component_eq!(Srgb::opaque(128, 128, 128).to_hsl().lightness, 50.2);
    }

    #[test]
    fn hsl_to_rgb() {
        // hsl(120, 40%, 40%) is rgb(61, 143, 61)
        let srgb = Hsl::new(120.0, 40.0, 40.0, 1.0).to_srgb();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (61, 143, 61));

        // hsl(10, 100%, 50%) is rgb(255, 43, 0)
        let srgb = Hsl::new(10.0, 100.0, 50.0, 1.0).to_srgb();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (255, 43, 0));
    }

    #[test]
    fn hsv_to_rgb() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, u8, u8, u8)] = &[
            (  0.0, 100.0, 100.0, 255,   0,   0),
            ( 60.0, 100.0, 100.0, 255, 255,   0),
            (120.0, 100.0,  50.0,   0, 128,   0),
            (180.0,  50.0, 100.0, 128, 255, 255),
            (300.0, 100.0, 100.0, 255,   0, 255),
            (360.0, 100.0, 100.0, 255,   0,   0),
            ( 42.0,   0.0,  50.0, 128, 128, 128),
        ];

        for &(hue, saturation, value, red, green, blue) in TESTS {
            let srgb = Hsv::new(hue, saturation, value, 1.0).to_srgb();
            assert_eq!(
                (srgb.red, srgb.green, srgb.blue),
                (red, green, blue),
                "hsv({hue}, {saturation}, {value})"
            );
        }
    }

    #[test]
    fn out_of_gamut_oklch_is_clamped() {
        let srgb = Oklch::new(0.9, 0.4, 30.0, 1.0).to_srgb();
        assert_eq!(srgb.red, 255);

        let srgb = Oklch::new(2.0, 0.0, 0.0, 1.0).to_srgb();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (255, 255, 255));

        let srgb = Oklch::new(-1.0, 0.0, 0.0, 1.0).to_srgb();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (0, 0, 0));
    }

    #[test]
    fn conversions_carry_alpha() {
        let srgb = Srgb::new(10, 20, 30, 0.25);
        assert_eq!(srgb.to_hsl().alpha, 0.25);
        assert_eq!(srgb.to_hsv().to_srgb().alpha, 0.25);
        assert_eq!(srgb.to_oklch().to_srgb().alpha, 0.25);
    }

    fn assert_round_trips<M: Model>() {
        for red in 0..=255u8 {
            for green in 0..=255u8 {
                for blue in 0..=255u8 {
                    let srgb = Srgb::opaque(red, green, blue);
                    assert_channels_near!(M::from_srgb(&srgb).to_srgb(), srgb, 1);
                }
            }
        }
    }

    #[test]
    fn hsl_round_trips_within_one_unit() {
        assert_round_trips::<Hsl>();
    }

    #[test]
    fn hsv_round_trips_within_one_unit() {
        assert_round_trips::<Hsv>();
    }

    #[test]
    fn oklab_round_trips_within_one_unit() {
        assert_round_trips::<Oklab>();
    }

    #[test]
    fn oklch_round_trips_within_one_unit() {
        assert_round_trips::<Oklch>();
    }

    #[test]
    fn oklch_is_rounded_once_at_full_precision() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component, Component, Component)] = &[
            (1, 246, 201, 0.8676, 0.1665, 173.0106),
            (2, 254, 255, 0.9031, 0.1539, 195.2836),
            (0, 166, 210, 0.6749, 0.1283, 225.3434),
        ];

        for &(red, green, blue, lightness, chroma, hue) in TESTS {
            let srgb = Srgb::opaque(red, green, blue);
            let oklch = srgb.to_oklch();
            assert_component_eq!(oklch.lightness, lightness, 1e-9);
            assert_component_eq!(oklch.chroma, chroma, 1e-9);
            assert_component_eq!(oklch.hue, hue, 1e-9);
            assert_eq!(oklch.to_srgb(), srgb);
        }
    }

    #[test]
    fn primaries_round_trip_exactly() {
        for (red, green, blue) in [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 255),
            (0, 0, 0),
        ] {
            let srgb = Srgb::opaque(red, green, blue);
            assert_eq!(srgb.to_hsl().to_srgb(), srgb);
            assert_eq!(srgb.to_hsv().to_srgb(), srgb);
        }
    }
}
