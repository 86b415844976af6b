//! Model a color with the HSL notation in the sRGB color space.

use serde::{Deserialize, Serialize};

use crate::{
    color::{Component, Components},
    models::rgb::Rgb8,
};

/// A color specified with the HSL notation in the sRGB color space, rounded
/// to whole degrees and percentages for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// The hue in degrees, `0..360`.
    pub hue: u16,
    /// The saturation as a percentage.
    pub saturation: u8,
    /// The lightness as a percentage.
    pub lightness: u8,
}

impl Hsl {
    /// Create a new HSL readout.
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Returns the hue in degrees along with the smallest and largest channel.
/// Gray colors have a hue of 0.
fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    } else {
        0.0
    };

    (hue, min, max)
}

impl Rgb8 {
    /// Read this color out in HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let rgb = Components(
            self.red as Component,
            self.green as Component,
            self.blue as Component,
        )
        .map(|v| v / 255.0);

        let (hue, min, max) = rgb_to_hue_with_min_max(&rgb);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Hues just under 360 round up to a full turn.
        let hue = hue.round() as u16 % 360;

        Hsl::new(
            hue,
            (saturation * 100.0).round() as u8,
            (lightness * 100.0).round() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        assert_eq!(Rgb8::new(255, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
        assert_eq!(Rgb8::new(0, 255, 0).to_hsl(), Hsl::new(120, 100, 50));
        assert_eq!(Rgb8::new(0, 0, 255).to_hsl(), Hsl::new(240, 100, 50));
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        assert_eq!(Rgb8::new(0, 0, 0).to_hsl(), Hsl::new(0, 0, 0));
        assert_eq!(Rgb8::new(128, 128, 128).to_hsl(), Hsl::new(0, 0, 50));
        assert_eq!(Rgb8::new(255, 255, 255).to_hsl(), Hsl::new(0, 0, 100));
    }

    #[test]
    fn tailwind_blue() {
        // #3B82F6
        assert_eq!(Rgb8::new(59, 130, 246).to_hsl(), Hsl::new(217, 91, 60));
    }

    #[test]
    fn hue_never_reaches_a_full_turn() {
        assert_eq!(Rgb8::new(255, 0, 1).to_hsl().hue, 0);
    }
}
