//! Palette synthesis.
//!
//! A palette is derived from a single input color by blending the anchor
//! curves on either side of its hue, shade by shade, and limiting each
//! shade's chroma to what sRGB can display at its lightness and hue.

use std::{collections::BTreeMap, collections::HashMap, ops::Index};

use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    anchors::{AdjacentAnchors, AnchoredSpace, Shade, SHADE_COUNT},
    color::Component,
    color_space::PerceptualSpace,
    convert::decode_in,
    gamut::max_in_gamut_chroma,
    math::normalize_hue,
    models::{Polar, Rgb8},
    DefaultSpace,
};

/// Fraction of the maximum in-gamut chroma a shade may use.
pub const MAX_CHROMA_HEADROOM: Component = 0.99;

/// Lower bound of the chroma scale under [`ChromaPolicy::InputRelative`].
pub const MIN_RELATIVE_CHROMA_SCALE: Component = 0.85;

/// Upper bound of the chroma scale under [`ChromaPolicy::InputRelative`].
pub const MAX_RELATIVE_CHROMA_SCALE: Component = 1.2;

/// How the chroma of the input color affects the chroma of the palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChromaPolicy {
    /// Every input of the same hue gets equally vivid shades.
    #[default]
    Uniform,
    /// Scale chroma by how saturated the input is compared to the anchor
    /// curves at its closest shade, within
    /// [`MIN_RELATIVE_CHROMA_SCALE`]..=[`MAX_RELATIVE_CHROMA_SCALE`].
    InputRelative,
}

impl ChromaPolicy {
    /// The factor applied to every shade's standard chroma.
    pub fn chroma_scale(
        &self,
        lightness: Component,
        chroma: Component,
        adjacent: &AdjacentAnchors<'_>,
    ) -> Component {
        match self {
            ChromaPolicy::Uniform => 1.0,
            ChromaPolicy::InputRelative => {
                let mut closest = adjacent.blend(Shade::S50);
                for shade in &Shade::ALL[1..] {
                    let target = adjacent.blend(*shade);
                    if (target.lightness - lightness).abs() < (closest.lightness - lightness).abs()
                    {
                        closest = target;
                    }
                }

                if closest.chroma > 0.0 {
                    (chroma / closest.chroma)
                        .clamp(MIN_RELATIVE_CHROMA_SCALE, MAX_RELATIVE_CHROMA_SCALE)
                } else {
                    1.0
                }
            }
        }
    }
}

/// Options for [`generate_palette`]. Every field has a default, so hosts can
/// deserialize a partial object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaletteOptions {
    /// Degrees added to the input hue before building shades.
    pub hue_shift: Component,
    /// See [`ChromaPolicy`].
    pub chroma_policy: ChromaPolicy,
}

/// An 8-bit sRGB color for every [`Shade`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    shades: [Rgb8; SHADE_COUNT],
}

impl Palette {
    /// Create a palette from colors ordered as [`Shade::ALL`].
    pub const fn new(shades: [Rgb8; SHADE_COUNT]) -> Self {
        Self { shades }
    }

    /// The color at `shade`.
    pub fn get(&self, shade: Shade) -> Rgb8 {
        self.shades[shade.index()]
    }

    /// Iterate over the shades from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, Rgb8)> + '_ {
        Shade::ALL.into_iter().zip(self.shades.iter().copied())
    }

    /// The colors as `#RRGGBB`, ordered as [`Shade::ALL`].
    pub fn to_hex(&self) -> [String; SHADE_COUNT] {
        self.shades.map(|rgb| rgb.to_hex())
    }

    /// Render this palette as a pretty printed Tailwind CSS color config
    /// fragment, `{ "<name>": { "50": "#...", ... } }`.
    pub fn to_tailwind_config(&self, name: &str) -> serde_json::Result<String> {
        let config: BTreeMap<&str, &Palette> = BTreeMap::from([(name, self)]);
        serde_json::to_string_pretty(&config)
    }
}

impl Index<Shade> for Palette {
    type Output = Rgb8;

    fn index(&self, shade: Shade) -> &Self::Output {
        &self.shades[shade.index()]
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SHADE_COUNT))?;
        for (shade, rgb) in self.iter() {
            map.serialize_entry(shade.label(), &rgb)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = HashMap::<String, Rgb8>::deserialize(deserializer)?;

        let mut shades = [Rgb8::default(); SHADE_COUNT];
        for shade in Shade::ALL {
            shades[shade.index()] = entries
                .remove(shade.label())
                .ok_or_else(|| de::Error::custom(format!("missing shade {shade}")))?;
        }

        if let Some(key) = entries.keys().next() {
            return Err(de::Error::custom(format!("unknown shade {key}")));
        }

        Ok(Palette::new(shades))
    }
}

/// Build a palette around `input` in the anchored space `S`.
pub fn generate_palette_from<S: AnchoredSpace>(
    input: &Polar<S>,
    options: &PaletteOptions,
) -> Palette {
    let adjacent = S::anchor_table().find_adjacent_anchors(input.hue);
    let chroma_scale =
        options
            .chroma_policy
            .chroma_scale(input.lightness, input.chroma, &adjacent);
    let base_hue = normalize_hue(input.hue + options.hue_shift);

    tracing::debug!(
        space = S::NAME,
        lightness = input.lightness,
        chroma = input.chroma,
        hue = input.hue,
        from = adjacent.from.name,
        to = adjacent.to.name,
        ratio = adjacent.ratio,
        chroma_scale,
        "generating palette"
    );

    let shades = Shade::ALL.map(|shade| {
        let target = adjacent.blend(shade);
        let hue = normalize_hue(base_hue + target.hue_shift);
        let max_chroma = max_in_gamut_chroma::<S>(target.lightness, hue);
        let chroma = (target.chroma * chroma_scale).min(max_chroma * MAX_CHROMA_HEADROOM);

        let rgb = Polar::<S>::new(target.lightness, chroma, hue).to_rgb8();
        tracing::trace!(%shade, lightness = target.lightness, chroma, hue, %rgb, "shade");
        rgb
    });

    Palette::new(shades)
}

/// Decode `hex` in the anchored space `S` and build a palette around it.
/// Returns `None` if `hex` is malformed.
pub fn generate_palette_in<S: AnchoredSpace>(
    hex: &str,
    options: &PaletteOptions,
) -> Option<Palette> {
    decode_in::<S>(hex).map(|input| generate_palette_from(&input, options))
}

/// Build a palette around `hex` in the default space. Returns `None` if
/// `hex` is malformed.
pub fn generate_palette(hex: &str, options: &PaletteOptions) -> Option<Palette> {
    generate_palette_in::<DefaultSpace>(hex, options)
}

/// Rotate the hue of every shade by `degrees` in the space `S`. Shades that
/// leave the gamut lose chroma.
pub fn adjust_palette_hue_in<S: PerceptualSpace>(palette: &Palette, degrees: Component) -> Palette {
    Palette::new(
        palette
            .shades
            .map(|rgb| Polar::<S>::from_rgb8(&rgb).rotate_hue(degrees).to_rgb8()),
    )
}

/// Rotate the hue of every shade by `degrees` in the default space.
pub fn adjust_palette_hue(palette: &Palette, degrees: Component) -> Palette {
    adjust_palette_hue_in::<DefaultSpace>(palette, degrees)
}
