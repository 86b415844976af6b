//! Lab style perceptual colors in rectangular (L, a, b) and polar (L, C, h)
//! form, generic over the perceptual space they are measured in.

use crate::{
    color::{Component, Components},
    color_space::{self, ColorSpace, PerceptualSpace},
    math::{almost_zero, normalize_hue, transform, transform_3x3, Transform},
    models::{
        rgb::SrgbLinear,
        xyz::{Xyz, D65_WHITE_POINT},
    },
};

chromascale_macros::gen_model! {
    /// Lightness plus two opponent color axes.
    pub struct Rectangular<S: ColorSpace> {
        /// The lightness component.
        lightness: Component,
        /// The a component.
        a: Component,
        /// The b component.
        b: Component,
    }
}

impl<S: ColorSpace> Rectangular<S> {
    /// The polar form of this color. Achromatic colors get a hue of 0.
    pub fn to_polar(&self) -> Polar<S> {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Polar::new(self.lightness, chroma, hue)
    }
}

impl<S: PerceptualSpace> Rectangular<S> {
    /// Convert linear light sRGB into this space.
    pub fn from_linear_light(rgb: &SrgbLinear) -> Self {
        S::from_linear_light(rgb)
    }

    /// Convert this color into linear light sRGB without any clamping.
    pub fn to_linear_light(&self) -> SrgbLinear {
        S::to_linear_light(self)
    }
}

chromascale_macros::gen_model! {
    /// Lightness, chroma and hue in degrees.
    pub struct Polar<S: ColorSpace> {
        /// The lightness component.
        lightness: Component,
        /// The chroma component.
        chroma: Component,
        /// The hue component in degrees.
        hue: Component,
    }
}

impl<S: ColorSpace> Polar<S> {
    /// The rectangular form of this color.
    pub fn to_rectangular(&self) -> Rectangular<S> {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Rectangular::new(self.lightness, a, b)
    }

    /// Return a copy of this color with a different chroma.
    pub fn with_chroma(&self, chroma: Component) -> Self {
        Self::new(self.lightness, chroma, self.hue)
    }

    /// Return a copy of this color with its hue rotated by `degrees`.
    pub fn rotate_hue(&self, degrees: Component) -> Self {
        Self::new(self.lightness, self.chroma, normalize_hue(self.hue + degrees))
    }
}

impl<S: PerceptualSpace> Polar<S> {
    /// Convert this color into linear light sRGB without any clamping.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_rectangular().to_linear_light()
    }
}

/// The model for a color specified in the CIE-Lab color space with the
/// rectangular orthogonal form.
pub type Lab = Rectangular<color_space::Lab>;

/// The model for a color specified in the CIE-Lab color space with the
/// cylindrical polar form.
pub type Lch = Polar<color_space::Lab>;

impl PerceptualSpace for color_space::Lab {
    const NAME: &'static str = "lab";

    fn from_linear_light(rgb: &SrgbLinear) -> Lab {
        const DELTA: Component = 6.0 / 29.0;
        const DELTA_CUBED: Component = DELTA * DELTA * DELTA;

        let xyz = Xyz::from(*rgb);
        let adapted = Components(
            xyz.x / D65_WHITE_POINT.0,
            xyz.y / D65_WHITE_POINT.1,
            xyz.z / D65_WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|t| {
            if t > DELTA_CUBED {
                t.powf(1.0 / 3.0)
            } else {
                (t / (3.0 * DELTA * DELTA)) + (4.0 / 29.0)
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }

    fn to_linear_light(color: &Lab) -> SrgbLinear {
        const DELTA: Component = 6.0 / 29.0;

        let f1 = (color.lightness + 16.0) / 116.0;
        let f0 = color.a / 500.0 + f1;
        let f2 = f1 - color.b / 200.0;

        let Components(x, y, z) = Components(f0, f1, f2).map(|t| {
            if t > DELTA {
                t.powf(3.0)
            } else {
                3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
            }
        });

        Xyz::new(
            D65_WHITE_POINT.0 * x,
            D65_WHITE_POINT.1 * y,
            D65_WHITE_POINT.2 * z,
        )
        .into()
    }
}

/// Oklab lightness is stored multiplied by this factor, putting it on the
/// same 0..100 scale as CIE-Lab.
pub const OKLAB_LIGHTNESS_SCALE: Component = 100.0;

/// Oklab a and b are stored multiplied by this factor so chroma lands in the
/// same range as CIE-Lch chroma.
pub const OKLAB_CHROMA_SCALE: Component = 130.0;

/// The model for a color specified in the Oklab color space with the
/// rectangular orthogonal form, in scaled units: see
/// [`OKLAB_LIGHTNESS_SCALE`] and [`OKLAB_CHROMA_SCALE`].
pub type Oklab = Rectangular<color_space::Oklab>;

/// The model for a color specified in the Oklab color space with the
/// cylindrical polar form, in scaled units.
pub type Oklch = Polar<color_space::Oklab>;

impl PerceptualSpace for color_space::Oklab {
    const NAME: &'static str = "oklab";

    fn from_linear_light(rgb: &SrgbLinear) -> Oklab {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LINEAR_TO_LMS: Transform = transform_3x3(
            0.4122214708, 0.2119034982, 0.0883024619,
            0.5363325363, 0.6806995451, 0.2817188376,
            0.0514459929, 0.1073969566, 0.6299787005,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(&LINEAR_TO_LMS, rgb.to_components());
        let lms = lms.map(|v| v.cbrt());
        let Components(lightness, a, b) = transform(&LMS_TO_OKLAB, lms);

        Oklab::new(
            lightness * OKLAB_LIGHTNESS_SCALE,
            a * OKLAB_CHROMA_SCALE,
            b * OKLAB_CHROMA_SCALE,
        )
    }

    fn to_linear_light(color: &Oklab) -> SrgbLinear {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            1.0,           1.0,           1.0,
            0.3963377774, -0.1055613458, -0.0894841775,
            0.2158037573, -0.0638541728, -1.2914855480,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_LINEAR: Transform = transform_3x3(
             4.0767416621, -1.2684380046, -0.0041960863,
            -3.3077115913,  2.6097574011, -0.7034186147,
             0.2309699292, -0.3413193965,  1.7076147010,
        );

        let unscaled = Components(
            color.lightness / OKLAB_LIGHTNESS_SCALE,
            color.a / OKLAB_CHROMA_SCALE,
            color.b / OKLAB_CHROMA_SCALE,
        );

        let lms = transform(&OKLAB_TO_LMS, unscaled);
        let lms = lms.map(|v| v * v * v);
        transform(&LMS_TO_LINEAR, lms).into()
    }
}
