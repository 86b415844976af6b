//! The codec boundary between hex strings and perceptual colors.
//!
//! Decoding runs hex -> [`Rgb8`] -> linear light -> rectangular -> polar.
//! Encoding runs the same path in reverse, with the gamut mapper inserted
//! just before the final step back to 8-bit channels, so an encoded color is
//! always displayable.
//!
//! ```rust
//! use chromascale::{decode, encode};
//!
//! let lch = decode("#3b82f6").unwrap();
//! assert_eq!(encode(&lch), "#3B82F6");
//!
//! assert!(decode("not-a-color").is_none());
//! ```

use crate::{
    color_space::{self, PerceptualSpace},
    models::{Cmyk, Hsl, Lch, Oklch, Polar, Rectangular, Rgb8},
    DefaultSpace,
};

impl<S: PerceptualSpace> Polar<S> {
    /// Convert an 8-bit sRGB color into this polar form.
    pub fn from_rgb8(rgb: &Rgb8) -> Self {
        Rectangular::<S>::from_linear_light(&rgb.to_linear_light()).to_polar()
    }

    /// Parse a hex color into this polar form. Returns `None` for malformed
    /// input.
    pub fn from_hex(hex: &str) -> Option<Self> {
        Rgb8::from_hex(hex).map(|rgb| Self::from_rgb8(&rgb))
    }

    /// Convert to 8-bit sRGB without gamut mapping. Out of range channels are
    /// clamped independently, which can shift the hue of colors far outside
    /// the gamut.
    pub fn to_rgb8_unmapped(&self) -> Rgb8 {
        self.to_linear_light().to_gamma_encoded()
    }

    /// Convert to 8-bit sRGB, reducing chroma first if this color is out of
    /// gamut.
    pub fn to_rgb8(&self) -> Rgb8 {
        self.map_into_gamut_limit().to_rgb8_unmapped()
    }

    /// Format as an uppercase `#RRGGBB`, reducing chroma first if this color
    /// is out of gamut.
    pub fn to_hex(&self) -> String {
        self.to_rgb8().to_hex()
    }
}

/// Decode a hex color into the polar form of the perceptual space `S`.
pub fn decode_in<S: PerceptualSpace>(hex: &str) -> Option<Polar<S>> {
    Polar::from_hex(hex)
}

/// Encode a polar color in the perceptual space `S` as `#RRGGBB`. Never
/// fails.
pub fn encode_in<S: PerceptualSpace>(color: &Polar<S>) -> String {
    color.to_hex()
}

/// Decode a hex color in the default perceptual space.
pub fn decode(hex: &str) -> Option<Polar<DefaultSpace>> {
    decode_in(hex)
}

/// Encode a color from the default perceptual space as `#RRGGBB`.
pub fn encode(color: &Polar<DefaultSpace>) -> String {
    encode_in(color)
}

/// Parse a hex color into CIE-Lch.
pub fn hex_to_lch(hex: &str) -> Option<Lch> {
    decode_in::<color_space::Lab>(hex)
}

/// Encode a CIE-Lch color as hex, mapping it into gamut first.
pub fn lch_to_hex(lch: &Lch) -> String {
    encode_in(lch)
}

/// Parse a hex color into Oklch, in scaled units.
pub fn hex_to_oklch(hex: &str) -> Option<Oklch> {
    decode_in::<color_space::Oklab>(hex)
}

/// Encode an Oklch color (scaled units) as hex, mapping it into gamut first.
pub fn oklch_to_hex(oklch: &Oklch) -> String {
    encode_in(oklch)
}

/// Parse a hex color and read it out in HSL notation.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    Rgb8::from_hex(hex).map(|rgb| rgb.to_hsl())
}

/// Parse a hex color and read it out in CMYK notation.
pub fn hex_to_cmyk(hex: &str) -> Option<Cmyk> {
    Rgb8::from_hex(hex).map(|rgb| rgb.to_cmyk())
}
