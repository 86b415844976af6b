//! Model a color in the sRGB color space, both as 8-bit gamma encoded
//! channels and as linear light.

use crate::color::{Component, Components};

/// A color in the sRGB color space with 8-bit gamma encoded channels. This is
/// the form colors take on the way in and out of the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb8 {
    /// Create a new color from its 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from channels on a 0..255 scale that may be fractional
    /// or out of range. Each channel is rounded to the nearest integer and
    /// then clamped.
    pub fn saturating_from(channels: Components) -> Self {
        let Components(red, green, blue) = channels.map(|v| v.round().clamp(0.0, 255.0));
        Self::new(red as u8, green as u8, blue as u8)
    }

    /// Convert this color from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        SrgbLinear::new(
            channel_to_linear_light(self.red),
            channel_to_linear_light(self.green),
            channel_to_linear_light(self.blue),
        )
    }
}

chromascale_macros::gen_model! {
    /// A color specified in the sRGB color space without gamma encoding.
    /// Components are nominally in `[0, 1]`, but values produced by inverse
    /// perceptual transforms may fall slightly outside.
    pub struct SrgbLinear {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to 8-bit gamma encoded channels.
    /// Out of range components are clamped.
    pub fn to_gamma_encoded(&self) -> Rgb8 {
        Rgb8::new(
            channel_to_gamma_encoded(self.red),
            channel_to_gamma_encoded(self.green),
            channel_to_gamma_encoded(self.blue),
        )
    }
}

/// Inverse sRGB transfer function for a single 8-bit channel.
pub fn channel_to_linear_light(channel: u8) -> Component {
    let value = channel as Component / 255.0;

    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer function for a single linear light component, rounded and
/// clamped into an 8-bit channel.
pub fn channel_to_gamma_encoded(value: Component) -> u8 {
    let encoded = if value <= 0.0031308 {
        (value * 12.92 * 255.0).round()
    } else {
        ((1.055 * value.powf(1.0 / 2.4) - 0.055) * 255.0).round()
    };

    encoded.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn linear_light_endpoints() {
        assert_eq!(channel_to_linear_light(0), 0.0);
        assert_eq!(channel_to_linear_light(255), 1.0);
        assert_component_eq!(channel_to_linear_light(128), 0.21586050011389926, epsilon = 1.0e-12);
    }

    #[test]
    fn linear_segment_below_breakpoint() {
        assert_eq!(channel_to_linear_light(10), 10.0 / 255.0 / 12.92);
        assert!(channel_to_linear_light(11) > 11.0 / 255.0 / 12.92);
    }

    #[test]
    fn every_channel_value_round_trips() {
        for channel in 0..=255u8 {
            let linear = channel_to_linear_light(channel);
            assert_eq!(channel_to_gamma_encoded(linear), channel);
        }
    }

    #[test]
    fn gamma_encoding_clamps_out_of_range_values() {
        assert_eq!(channel_to_gamma_encoded(-0.2), 0);
        assert_eq!(channel_to_gamma_encoded(1.3), 255);
        assert_eq!(channel_to_gamma_encoded(Component::NAN), 0);
    }

    #[test]
    fn saturating_from_rounds_then_clamps() {
        let rgb = Rgb8::saturating_from(Components(254.6, -3.0, 300.2));
        assert_eq!(rgb, Rgb8::new(255, 0, 255));

        let rgb = Rgb8::saturating_from(Components(12.49, 12.5, 0.4));
        assert_eq!(rgb, Rgb8::new(12, 13, 0));
    }

    #[test]
    fn linear_model_round_trips() {
        let rgb = Rgb8::new(59, 130, 246);
        let linear = rgb.to_linear_light();
        assert_eq!(linear.to_components().0, channel_to_linear_light(59));
        assert_eq!(linear.to_gamma_encoded(), rgb);
    }
}
