//! Tags for color spaces.

use std::fmt::Debug;

use crate::models::{Rectangular, SrgbLinear};

/// Represents a color space.
pub trait ColorSpace: Clone + Copy + Debug + Default + PartialEq {}

/// The CIE-Lab color space relative to a D65 white point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lab;

impl ColorSpace for Lab {}

/// The Oklab color space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Oklab;

impl ColorSpace for Oklab {}

/// A perceptual color space with an exact, invertible mapping to and from
/// linear sRGB.
///
/// Lightness is always on a 0..100 scale and chroma magnitudes are in the
/// same ballpark for every implementation, so gamut searches can share one
/// chroma range.
pub trait PerceptualSpace: ColorSpace {
    /// Name used when logging.
    const NAME: &'static str;

    /// Convert linear light sRGB into this space.
    fn from_linear_light(rgb: &SrgbLinear) -> Rectangular<Self>;

    /// Convert a color in this space into linear light sRGB. The result is
    /// not clamped and may fall outside of `[0, 1]`.
    fn to_linear_light(color: &Rectangular<Self>) -> SrgbLinear;
}
