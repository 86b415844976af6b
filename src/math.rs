//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 color matrix, stored in the upper left corner of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Chroma below this value is treated as achromatic.
pub const ACHROMATIC_THRESHOLD: Component = 1.0e-3;

/// Build a [`Transform`] from 9 values. Each row holds the contribution of
/// one input component to the three outputs (the transpose of the usual
/// textbook layout).
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Returns true if the value is too small to carry a meaningful hue.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < ACHROMATIC_THRESHOLD
}

/// Fold a hue angle in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // `rem_euclid` rounds tiny negative angles up to exactly 360.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Linear interpolation from `a` to `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// The shortest distance between two hues in degrees, in `[0, 180]`.
pub fn angular_distance(h1: Component, h2: Component) -> Component {
    let diff = (h1 - h2).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Interpolate between two angles along the shorter arc. The result is not
/// normalized.
pub fn lerp_angle(a1: Component, a2: Component, t: Component) -> Component {
    let mut diff = a2 - a1;
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }
    a1 + diff * t
}
