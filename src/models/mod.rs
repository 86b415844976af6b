//! Color models. Each color space or notation is modeled with its own type
//! and conversions are only implemented where they are meaningful.

pub mod cmyk;
pub mod hsl;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use lab::{Lab, Lch, Oklab, Oklch, Polar, Rectangular};
pub use rgb::{Rgb8, SrgbLinear};
pub use xyz::Xyz;
