//! Each color representation is modeled with its own type. Every model can
//! be projected from, and converted back to, 8-bit sRGB.
//!
//! ```rust
//! use tincture::models::{Model, Oklch, Srgb};
//!
//! let orange = Srgb::new(255, 128, 0, 1.0);
//! let oklch = Oklch::from_srgb(&orange);
//! let back = oklch.to_srgb();
//! assert!(back.red.abs_diff(255) <= 1);
//! assert!(back.green.abs_diff(128) <= 1);
//! assert!(back.blue <= 1);
//! ```

pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod rgb;

pub use hsl::Hsl;
pub use hsv::{Axes, Hsv, HsvPatch};
pub use lab::{Oklab, Oklch};
pub use rgb::{Srgb, SrgbLinear};

/// A trait implemented for color models that can be converted to and from
/// 8-bit sRGB.
pub trait Model: Sized {
    /// Project an sRGB color into this model.
    fn from_srgb(srgb: &Srgb) -> Self;

    /// Convert this model back to 8-bit sRGB. Out of gamut values are
    /// clamped.
    fn to_srgb(&self) -> Srgb;
}
