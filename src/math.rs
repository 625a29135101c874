//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix stored in the upper left corner of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix given in row-major order, the way
/// conversion matrices are usually published.
#[rustfmt::skip]
pub fn transform_3x3(m: &[[Component; 3]; 3]) -> Transform {
    // euclid multiplies row vectors, so the published matrix is transposed.
    Transform::new(
        m[0][0], m[1][0], m[2][0], 0.0,
        m[0][1], m[1][1], m[2][1], 0.0,
        m[0][2], m[1][2], m[2][2], 0.0,
        0.0,     0.0,     0.0,     1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Clamp `value` into `min..=max`. A NaN value is treated as `min`.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    if value.is_nan() {
        min
    } else {
        value.max(min).min(max)
    }
}

/// Round `value` to the given number of decimal places, half away from zero.
pub fn round_to<T: Float>(value: T, places: i32) -> T {
    let Some(factor) = T::from(10.0).map(|ten| ten.powi(places)) else {
        return value;
    };
    // Adding zero folds -0.0 into 0.0.
    (value * factor).round() / factor + T::zero()
}

/// Wrap a hue angle in degrees into `0..360`.
pub fn normalize_hue(hue: Component) -> Component {
    if !hue.is_finite() {
        return 0.0;
    }
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can land exactly on the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}
