//! chromascale is a perceptual color engine. It converts between hex
//! strings, sRGB and the CIE-Lab and Oklab perceptual spaces, maps colors
//! into the sRGB gamut, and synthesizes 11 shade Tailwind style palettes from
//! a single input color.
//!
//! ```rust
//! use chromascale::{generate_palette, PaletteOptions, Shade};
//!
//! let palette = generate_palette("#3B82F6", &PaletteOptions::default()).unwrap();
//! assert_eq!(palette[Shade::S500].to_hex(), "#3B82F6");
//! assert_eq!(palette[Shade::S50].to_hex(), "#EFF6FF");
//! ```

#![deny(missing_docs)]

pub mod anchors;
mod color;
pub mod color_space;
mod convert;
pub mod gamut;
mod hex;
mod math;
pub mod models;
pub mod palette;

#[cfg(test)]
mod test;

pub use anchors::{
    shade_labels, AdjacentAnchors, AnchorCurve, AnchorError, AnchorTable, AnchoredSpace, Shade,
    UnknownShade,
};
pub use color::{Component, Components};
pub use color_space::{ColorSpace, PerceptualSpace};
pub use convert::{
    decode, decode_in, encode, encode_in, hex_to_cmyk, hex_to_hsl, hex_to_lch, hex_to_oklch,
    lch_to_hex, oklch_to_hex,
};
pub use hex::ParseHexError;
pub use math::{angular_distance, lerp_angle, normalize_hue};
pub use models::{Cmyk, Hsl, Lab, Lch, Oklab, Oklch, Polar, Rectangular, Rgb8, SrgbLinear};
pub use palette::{
    adjust_palette_hue, adjust_palette_hue_in, generate_palette, generate_palette_from,
    generate_palette_in, ChromaPolicy, Palette, PaletteOptions,
};

/// The perceptual space used by the non-generic entry points. It is the only
/// space with an anchor table.
pub type DefaultSpace = color_space::Lab;
