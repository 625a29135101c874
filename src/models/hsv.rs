//! Model a color with the HSV notation, the canonical form used by
//! interactive pickers.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    math::{clamp, normalize_hue},
};

tincture_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue of the color in degrees, `0..360`.
        hue: Component,
        /// The saturation of the color in percent.
        saturation: Component,
        /// The value (brightness) of the color in percent.
        value: Component,
    }
}

impl Hsv {
    /// Fully saturated, fully bright, opaque red.
    pub fn red() -> Self {
        Self::new(0.0, 100.0, 100.0, 1.0)
    }

    /// Bring every channel into range: hue wraps into `0..360`, saturation
    /// and value clamp to `0..=100` and alpha clamps to `0..=1`. No rounding
    /// is applied.
    pub fn normalized(&self) -> Self {
        Self::new(
            normalize_hue(self.hue),
            clamp(self.saturation, 0.0, 100.0),
            clamp(self.value, 0.0, 100.0),
            clamp(self.alpha, 0.0, 1.0),
        )
    }
}

bitflags! {
    /// The HSVA axes touched by an [`HsvPatch`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Axes : u8 {
        /// The hue axis.
        const HUE = 1 << 0;
        /// The saturation axis.
        const SATURATION = 1 << 1;
        /// The value axis.
        const VALUE = 1 << 2;
        /// The alpha axis.
        const ALPHA = 1 << 3;
    }
}

/// A partial update to an [`Hsv`] color. Axes set to `None` are left alone
/// when the patch is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HsvPatch {
    /// New hue in degrees.
    pub hue: Option<Component>,
    /// New saturation in percent.
    pub saturation: Option<Component>,
    /// New value in percent.
    pub value: Option<Component>,
    /// New alpha.
    pub alpha: Option<Component>,
}

impl HsvPatch {
    /// A patch that only changes the hue.
    pub fn hue(hue: Component) -> Self {
        Self {
            hue: Some(hue),
            ..Default::default()
        }
    }

    /// A patch that only changes the saturation.
    pub fn saturation(saturation: Component) -> Self {
        Self {
            saturation: Some(saturation),
            ..Default::default()
        }
    }

    /// A patch that only changes the value.
    pub fn value(value: Component) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }

    /// A patch that changes saturation and value together, as produced by a
    /// single sample on a 2D saturation/value area.
    pub fn saturation_value(saturation: Component, value: Component) -> Self {
        Self {
            saturation: Some(saturation),
            value: Some(value),
            ..Default::default()
        }
    }

    /// A patch that only changes the alpha.
    pub fn alpha(alpha: Component) -> Self {
        Self {
            alpha: Some(alpha),
            ..Default::default()
        }
    }

    /// The axes this patch touches.
    pub fn axes(&self) -> Axes {
        let mut axes = Axes::empty();
        axes.set(Axes::HUE, self.hue.is_some());
        axes.set(Axes::SATURATION, self.saturation.is_some());
        axes.set(Axes::VALUE, self.value.is_some());
        axes.set(Axes::ALPHA, self.alpha.is_some());
        axes
    }

    /// Returns true if the patch does not touch any axis.
    pub fn is_empty(&self) -> bool {
        self.axes().is_empty()
    }

    /// Merge this patch into `hsv` and normalize the result.
    pub fn apply_to(&self, hsv: &Hsv) -> Hsv {
        Hsv::new(
            self.hue.unwrap_or(hsv.hue),
            self.saturation.unwrap_or(hsv.saturation),
            self.value.unwrap_or(hsv.value),
            self.alpha.unwrap_or(hsv.alpha),
        )
        .normalized()
    }
}

impl From<Hsv> for HsvPatch {
    fn from(value: Hsv) -> Self {
        Self {
            hue: Some(value.hue),
            saturation: Some(value.saturation),
            value: Some(value.value),
            alpha: Some(value.alpha),
        }
    }
}
