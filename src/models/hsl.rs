//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue of the color in degrees, `0..360`.
        hue: Component,
        /// The saturation of the color in percent.
        saturation: Component,
        /// The lightness of the color in percent.
        lightness: Component,
    }
}
