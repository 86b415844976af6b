//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::rgb::SrgbLinear,
};

/// Reference white of the D65 illuminant, on the same 0..100 scale as
/// [`Xyz`].
pub const D65_WHITE_POINT: Components = Components(95.047, 100.0, 108.883);

chromascale_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point, scaled so
    /// that the reference white has a Y of 100.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl From<SrgbLinear> for Xyz {
    fn from(value: SrgbLinear) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.1191920,
            0.1804375, 0.0721750, 0.9503041,
        );

        transform(&TO_XYZ, value.to_components())
            .map(|v| v * 100.0)
            .into()
    }
}

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404542, -0.9692660,  0.0556434,
            -1.5371385,  1.8760108, -0.2040259,
            -0.4985314,  0.0415560,  1.0572252,
        );

        transform(&FROM_XYZ, value.to_components().map(|v| v / 100.0)).into()
    }
}
