//! Gamut tests and chroma reduction for colors that fall outside of sRGB.
//!
//! Every component of the engine uses the same test: a color is in gamut when
//! each of its linear light sRGB components lies within `[-ε, 1 + ε]` with
//! [`GAMUT_EPSILON`] as `ε`.

use bitflags::bitflags;

use crate::{
    color::Component,
    color_space::PerceptualSpace,
    models::{Polar, SrgbLinear},
};

/// Tolerance applied to both ends of the `[0, 1]` linear light range.
pub const GAMUT_EPSILON: Component = 0.001;

/// Upper bound of the chroma range searched by [`max_in_gamut_chroma`].
pub const MAX_SEARCH_CHROMA: Component = 150.0;

/// Search resolution of [`max_in_gamut_chroma`].
pub const MAX_CHROMA_TOLERANCE: Component = 0.1;

/// Search resolution used when mapping a single color into gamut.
pub const MAPPING_TOLERANCE: Component = 0.01;

bitflags! {
    /// The linear light channels of a color that are out of range.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Channels : u8 {
        /// The red channel is out of range.
        const RED = 1 << 0;
        /// The green channel is out of range.
        const GREEN = 1 << 1;
        /// The blue channel is out of range.
        const BLUE = 1 << 2;
    }
}

#[allow(clippy::manual_range_contains)]
fn in_range(value: Component) -> bool {
    value >= -GAMUT_EPSILON && value <= 1.0 + GAMUT_EPSILON
}

/// Returns the channels of `rgb` that fall outside of the tolerated range.
/// NaN components are always reported.
pub fn out_of_gamut_channels(rgb: &SrgbLinear) -> Channels {
    let mut channels = Channels::empty();
    channels.set(Channels::RED, !in_range(rgb.red));
    channels.set(Channels::GREEN, !in_range(rgb.green));
    channels.set(Channels::BLUE, !in_range(rgb.blue));
    channels
}

/// Returns true if every channel of `rgb` is within the tolerated range.
pub fn in_gamut(rgb: &SrgbLinear) -> bool {
    out_of_gamut_channels(rgb).is_empty()
}

/// Binary search for the largest chroma in `[0, high]` that is in gamut at the
/// given lightness and hue. Stops once the bracket is narrower than
/// `tolerance` and returns its lower end, which is always in gamut (or 0).
pub fn search_chroma<S: PerceptualSpace>(
    lightness: Component,
    hue: Component,
    high: Component,
    tolerance: Component,
) -> Component {
    let mut low = 0.0;
    let mut high = high;

    while high - low > tolerance {
        let mid = (low + high) / 2.0;
        if in_gamut(&Polar::<S>::new(lightness, mid, hue).to_linear_light()) {
            low = mid;
        } else {
            high = mid;
        }
    }

    low
}

/// The largest chroma that is still displayable in sRGB at the given
/// lightness and hue, to within [`MAX_CHROMA_TOLERANCE`].
pub fn max_in_gamut_chroma<S: PerceptualSpace>(lightness: Component, hue: Component) -> Component {
    search_chroma::<S>(lightness, hue, MAX_SEARCH_CHROMA, MAX_CHROMA_TOLERANCE)
}

impl<S: PerceptualSpace> Polar<S> {
    /// Returns true if this color converts to linear light sRGB within the
    /// tolerated range.
    pub fn in_gamut(&self) -> bool {
        in_gamut(&self.to_linear_light())
    }

    /// If this color is outside of the sRGB gamut, reduce its chroma until it
    /// fits. Lightness and hue are preserved and chroma never increases.
    pub fn map_into_gamut_limit(&self) -> Self {
        let linear = self.to_linear_light();
        let out_of_gamut = out_of_gamut_channels(&linear);
        if out_of_gamut.is_empty() {
            return *self;
        }

        let chroma = search_chroma::<S>(self.lightness, self.hue, self.chroma, MAPPING_TOLERANCE);

        tracing::trace!(
            space = S::NAME,
            lightness = self.lightness,
            hue = self.hue,
            from = self.chroma,
            to = chroma,
            channels = ?out_of_gamut,
            "reduced chroma into gamut"
        );

        self.with_chroma(chroma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::models::{Lch, Oklch};

    #[test]
    fn channels_outside_tolerance_are_reported() {
        let rgb = SrgbLinear::new(-0.0011, 0.5, 1.0011);
        assert_eq!(out_of_gamut_channels(&rgb), Channels::RED | Channels::BLUE);
        assert!(!in_gamut(&rgb));
    }

    #[test]
    fn tolerance_is_inclusive() {
        assert!(in_gamut(&SrgbLinear::new(-0.001, 0.0, 1.001)));
        assert!(in_gamut(&SrgbLinear::new(0.0, 0.5, 1.0)));
    }

    #[test]
    fn nan_is_out_of_gamut() {
        let rgb = SrgbLinear::new(0.5, Component::NAN, 0.5);
        assert_eq!(out_of_gamut_channels(&rgb), Channels::GREEN);
    }

    #[test]
    fn max_chroma_is_in_gamut_and_tight() {
        for hue in [0.0, 40.0, 120.0, 200.0, 285.0, 330.0] {
            for lightness in [10.0, 30.0, 50.0, 70.0, 90.0] {
                let max = max_in_gamut_chroma::<crate::color_space::Lab>(lightness, hue);
                assert!(Lch::new(lightness, max, hue).in_gamut());
                assert!(!Lch::new(lightness, max + 2.0 * MAX_CHROMA_TOLERANCE, hue).in_gamut());
            }
        }
    }

    #[test]
    fn max_chroma_collapses_near_black() {
        // Only the tolerance leaves any room at zero lightness.
        let black = max_in_gamut_chroma::<crate::color_space::Lab>(0.0, 40.0);
        let mid = max_in_gamut_chroma::<crate::color_space::Lab>(50.0, 40.0);
        assert!(black < 3.0);
        assert!(mid > 50.0);
    }

    #[test]
    fn in_gamut_colors_are_untouched() {
        let lch = Lch::new(55.0, 20.0, 200.0);
        assert_eq!(lch.map_into_gamut_limit(), lch);
    }

    #[test]
    fn out_of_gamut_colors_lose_only_chroma() {
        let lch = Lch::new(50.0, 140.0, 150.0);
        assert!(!lch.in_gamut());

        let mapped = lch.map_into_gamut_limit();
        assert!(mapped.in_gamut());
        assert_eq!(mapped.lightness, lch.lightness);
        assert_eq!(mapped.hue, lch.hue);
        assert!(mapped.chroma < lch.chroma);

        let max = max_in_gamut_chroma::<crate::color_space::Lab>(50.0, 150.0);
        assert_component_eq!(mapped.chroma, max, epsilon = MAX_CHROMA_TOLERANCE);
    }

    #[test]
    fn mapping_works_in_oklab_too() {
        let oklch = Oklch::new(60.0, 60.0, 30.0);
        assert!(!oklch.in_gamut());
        let mapped = oklch.map_into_gamut_limit();
        assert!(mapped.in_gamut());
        assert!(mapped.chroma < 60.0);
    }
}
