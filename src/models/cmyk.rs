//! Model a color with the CMYK notation.

use serde::{Deserialize, Serialize};

use crate::{color::Component, models::rgb::Rgb8};

/// A naive CMYK readout of an sRGB color, in whole percentages. No ink or
/// paper profile is involved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cmyk {
    /// The cyan component.
    pub cyan: u8,
    /// The magenta component.
    pub magenta: u8,
    /// The yellow component.
    pub yellow: u8,
    /// The key (black) component.
    pub key: u8,
}

impl Cmyk {
    /// Create a new CMYK readout.
    pub const fn new(cyan: u8, magenta: u8, yellow: u8, key: u8) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }
}

impl Rgb8 {
    /// Read this color out in CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        let red = self.red as Component / 255.0;
        let green = self.green as Component / 255.0;
        let blue = self.blue as Component / 255.0;

        let key = 1.0 - red.max(green).max(blue);
        if key == 1.0 {
            return Cmyk::new(0, 0, 0, 100);
        }

        let percent = |v: Component| (v * 100.0).round() as u8;

        Cmyk::new(
            percent((1.0 - red - key) / (1.0 - key)),
            percent((1.0 - green - key) / (1.0 - key)),
            percent((1.0 - blue - key) / (1.0 - key)),
            percent(key),
        )
    }
}
