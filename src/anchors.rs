//! Anchor curves: per-shade lightness, chroma and hue shift for six reference
//! hues, and the lookup that blends the two anchors around an arbitrary hue.

use std::{fmt, sync::OnceLock};

use crate::{
    color::Component,
    color_space::{self, PerceptualSpace},
    math::{angular_distance, lerp, lerp_angle, normalize_hue},
};

/// Number of shades in a palette.
pub const SHADE_COUNT: usize = 11;

/// One of the fixed lightness tiers of a palette. The set and its order
/// follow the Tailwind CSS convention and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Shade {
    /// Shade 50, the lightest.
    S50 = 0,
    /// Shade 100.
    S100,
    /// Shade 200.
    S200,
    /// Shade 300.
    S300,
    /// Shade 400.
    S400,
    /// Shade 500, the base of the palette.
    S500,
    /// Shade 600.
    S600,
    /// Shade 700.
    S700,
    /// Shade 800.
    S800,
    /// Shade 900.
    S900,
    /// Shade 950, the darkest.
    S950,
}

impl Shade {
    /// Every shade from lightest to darkest.
    pub const ALL: [Shade; SHADE_COUNT] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// The numeric level, e.g. `500`.
    pub const fn value(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    /// The numeric level as a string, as used for keys in CSS configs.
    pub const fn label(self) -> &'static str {
        match self {
            Shade::S50 => "50",
            Shade::S100 => "100",
            Shade::S200 => "200",
            Shade::S300 => "300",
            Shade::S400 => "400",
            Shade::S500 => "500",
            Shade::S600 => "600",
            Shade::S700 => "700",
            Shade::S800 => "800",
            Shade::S900 => "900",
            Shade::S950 => "950",
        }
    }

    /// Position of this shade in [`Shade::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when converting a number that is not one of the shade levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownShade(pub u16);

impl fmt::Display for UnknownShade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a shade level", self.0)
    }
}

impl std::error::Error for UnknownShade {}

impl TryFrom<u16> for Shade {
    type Error = UnknownShade;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Shade::ALL
            .into_iter()
            .find(|shade| shade.value() == value)
            .ok_or(UnknownShade(value))
    }
}

/// The shade levels as strings, lightest first.
pub fn shade_labels() -> [&'static str; SHADE_COUNT] {
    Shade::ALL.map(Shade::label)
}

/// Per-shade curves for one reference hue. Values are indexed by
/// [`Shade::index`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorCurve {
    /// Name of the reference hue.
    pub name: &'static str,
    /// Hue of the reference color at shade 500.
    pub center_hue: Component,
    /// Target lightness per shade.
    pub lightness: [Component; SHADE_COUNT],
    /// Target chroma per shade.
    pub chroma: [Component; SHADE_COUNT],
    /// Hue offset per shade, relative to shade 500.
    pub hue_shift: [Component; SHADE_COUNT],
}

/// A problem found while validating an [`AnchorTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorError {
    /// The table has no curves.
    Empty,
    /// A center hue is outside of `[0, 360)`.
    HueOutOfRange(&'static str),
    /// A curve contains a NaN or infinite value.
    NonFinite(&'static str),
    /// The hue shift at shade 500 is not zero.
    NonZeroBaseShift(&'static str),
    /// Lightness increases going from the given shade to the next.
    LightnessNotMonotonic(&'static str, Shade),
}

impl fmt::Display for AnchorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorError::Empty => write!(f, "anchor table has no curves"),
            AnchorError::HueOutOfRange(name) => {
                write!(f, "anchor {name}: center hue is outside of [0, 360)")
            }
            AnchorError::NonFinite(name) => write!(f, "anchor {name}: non-finite value"),
            AnchorError::NonZeroBaseShift(name) => {
                write!(f, "anchor {name}: hue shift at shade 500 is not zero")
            }
            AnchorError::LightnessNotMonotonic(name, shade) => {
                write!(f, "anchor {name}: lightness increases after shade {shade}")
            }
        }
    }
}

impl std::error::Error for AnchorError {}

impl AnchorCurve {
    fn validate(&self) -> Result<(), AnchorError> {
        let mut values = self
            .lightness
            .iter()
            .chain(self.chroma.iter())
            .chain(self.hue_shift.iter());
        if !self.center_hue.is_finite() || values.any(|v| !v.is_finite()) {
            return Err(AnchorError::NonFinite(self.name));
        }

        if !(0.0..360.0).contains(&self.center_hue) {
            return Err(AnchorError::HueOutOfRange(self.name));
        }

        if self.hue_shift[Shade::S500.index()] != 0.0 {
            return Err(AnchorError::NonZeroBaseShift(self.name));
        }

        if let Some(i) = self.lightness.windows(2).position(|w| w[1] > w[0]) {
            return Err(AnchorError::LightnessNotMonotonic(self.name, Shade::ALL[i]));
        }

        Ok(())
    }
}

/// A validated set of anchor curves, sorted by center hue.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorTable {
    curves: Vec<AnchorCurve>,
}

impl AnchorTable {
    /// Validate `curves` and build a table from them.
    pub fn new(curves: impl Into<Vec<AnchorCurve>>) -> Result<Self, AnchorError> {
        let mut curves = curves.into();
        if curves.is_empty() {
            return Err(AnchorError::Empty);
        }

        for curve in &curves {
            curve.validate()?;
        }

        curves.sort_by(|a, b| a.center_hue.total_cmp(&b.center_hue));

        Ok(Self { curves })
    }

    /// The curves, sorted by center hue.
    pub fn curves(&self) -> &[AnchorCurve] {
        &self.curves
    }

    /// Look up a curve by name.
    pub fn get(&self, name: &str) -> Option<&AnchorCurve> {
        self.curves.iter().find(|curve| curve.name == name)
    }

    /// Find the pair of anchors that bracket `hue` going around the circle,
    /// and how far `hue` lies from the first towards the second.
    pub fn find_adjacent_anchors(&self, hue: Component) -> AdjacentAnchors<'_> {
        let hue = normalize_hue(hue);
        let count = self.curves.len();

        let mut pair = (&self.curves[count - 1], &self.curves[0]);
        for i in 0..count {
            let current = &self.curves[i];
            let next = &self.curves[(i + 1) % count];

            let inside = current.center_hue <= hue && hue < next.center_hue;
            let across_seam = current.center_hue > next.center_hue
                && (hue >= current.center_hue || hue < next.center_hue);
            if inside || across_seam {
                pair = (current, next);
                break;
            }
        }

        let (from, to) = pair;
        let d1 = angular_distance(hue, from.center_hue);
        let d2 = angular_distance(hue, to.center_hue);
        let ratio = if d1 + d2 > 0.0 { d1 / (d1 + d2) } else { 0.0 };

        AdjacentAnchors { from, to, ratio }
    }
}

/// Two neighboring anchors and the position of a hue between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjacentAnchors<'a> {
    /// The anchor at or before the hue.
    pub from: &'a AnchorCurve,
    /// The anchor after the hue.
    pub to: &'a AnchorCurve,
    /// 0 at `from`, 1 at `to`.
    pub ratio: Component,
}

/// Curve values blended between two anchors for one shade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeTarget {
    /// Target lightness.
    pub lightness: Component,
    /// Standard chroma before any scaling or gamut limits.
    pub chroma: Component,
    /// Hue offset to add to the base hue.
    pub hue_shift: Component,
}

impl AdjacentAnchors<'_> {
    /// Blend the curves of both anchors at `shade`. Hue shifts are blended
    /// along the shorter arc.
    pub fn blend(&self, shade: Shade) -> ShadeTarget {
        let i = shade.index();
        ShadeTarget {
            lightness: lerp(self.from.lightness[i], self.to.lightness[i], self.ratio),
            chroma: lerp(self.from.chroma[i], self.to.chroma[i], self.ratio),
            hue_shift: lerp_angle(self.from.hue_shift[i], self.to.hue_shift[i], self.ratio),
        }
    }
}

/// A perceptual space that has an anchor table measured in its own units.
pub trait AnchoredSpace: PerceptualSpace {
    /// The process wide anchor table for this space.
    fn anchor_table() -> &'static AnchorTable;
}

impl AnchoredSpace for color_space::Lab {
    fn anchor_table() -> &'static AnchorTable {
        static TABLE: OnceLock<AnchorTable> = OnceLock::new();
        TABLE.get_or_init(|| AnchorTable::new(LAB_ANCHOR_CURVES).expect("built-in anchor table"))
    }
}

/// Anchor curves measured in CIE-Lch from the Tailwind CSS palettes.
#[rustfmt::skip]
pub const LAB_ANCHOR_CURVES: [AnchorCurve; 6] = [
    AnchorCurve {
        name: "red",
        center_hue: 31.2,
        lightness: [96.4, 92.1, 85.8, 76.3, 64.1, 55.0, 47.9, 40.0, 33.2, 28.1, 12.6],
        chroma:    [4.3, 10.2, 19.7, 34.8, 57.6, 75.6, 81.7, 72.7, 60.6, 48.8, 31.6],
        hue_shift: [-11.5, -11.0, -10.2, -8.6, -4.9, 0.0, 3.9, 4.3, 3.0, 0.7, -1.8],
    },
    AnchorCurve {
        name: "yellow",
        center_hue: 84.3,
        lightness: [98.6, 97.1, 94.0, 89.2, 83.7, 75.9, 62.3, 47.4, 38.4, 32.1, 16.5],
        chroma:    [10.2, 27.4, 51.5, 74.4, 82.5, 78.0, 68.7, 57.1, 47.3, 39.5, 26.2],
        hue_shift: [21.0, 19.7, 15.4, 10.1, 4.5, 0.0, -7.5, -14.4, -18.1, -21.7, -27.0],
    },
    AnchorCurve {
        name: "green",
        center_hue: 146.9,
        lightness: [98.2, 96.2, 92.4, 86.9, 79.2, 70.2, 58.8, 46.9, 37.3, 30.7, 15.7],
        chroma:    [6.5, 15.7, 29.4, 50.5, 68.9, 73.7, 65.4, 52.5, 41.2, 33.9, 23.8],
        hue_shift: [7.4, 8.3, 7.5, 5.9, 2.7, 0.0, -0.5, 0.6, 2.2, 3.6, 4.1],
    },
    AnchorCurve {
        name: "cyan",
        center_hue: 223.2,
        lightness: [98.4, 95.5, 91.3, 85.7, 77.9, 68.2, 55.6, 45.1, 36.8, 30.7, 19.4],
        chroma:    [6.2, 14.4, 24.7, 36.1, 40.8, 37.8, 33.1, 28.0, 23.2, 20.2, 16.4],
        hue_shift: [-19.5, -16.5, -14.4, -11.5, -5.2, 0.0, 9.4, 11.3, 12.5, 16.6, 20.3],
    },
    AnchorCurve {
        name: "blue",
        center_hue: 285.2,
        lightness: [96.6, 92.2, 86.5, 78.0, 66.7, 55.6, 46.1, 39.0, 31.9, 27.1, 16.2],
        chroma:    [5.2, 11.4, 20.2, 32.8, 48.9, 66.8, 80.1, 83.1, 69.3, 51.6, 32.7],
        hue_shift: [-22.5, -20.6, -20.2, -19.3, -11.1, 0.0, 7.5, 11.0, 10.8, 7.6, 6.3],
    },
    AnchorCurve {
        name: "purple",
        center_hue: 312.7,
        lightness: [97.2, 93.4, 88.0, 78.7, 65.5, 53.5, 45.0, 37.9, 31.9, 25.7, 15.5],
        chroma:    [5.4, 12.5, 23.1, 41.5, 68.6, 92.4, 102.5, 96.9, 80.2, 66.6, 58.6],
        hue_shift: [-3.4, -4.0, -3.7, -2.6, -1.2, 0.0, 0.5, 0.8, 1.2, 1.5, 1.3],
    },
];
