use chromascale::{
    adjust_palette_hue, decode, generate_palette, AnchoredSpace, Lab, Palette, PaletteOptions,
    Polar, Rgb8, Shade,
};
use pretty_assertions::assert_eq;

fn palette(hexes: [&str; 11]) -> Palette {
    Palette::new(hexes.map(|hex| hex.parse::<Rgb8>().unwrap()))
}

fn generate(hex: &str) -> Palette {
    generate_palette(hex, &PaletteOptions::default()).unwrap()
}

fn delta_e(a: Rgb8, b: Rgb8) -> f64 {
    let a = Lab::from_linear_light(&a.to_linear_light());
    let b = Lab::from_linear_light(&b.to_linear_light());
    ((a.lightness - b.lightness).powi(2) + (a.a - b.a).powi(2) + (a.b - b.b).powi(2)).sqrt()
}

#[test]
fn reproduces_tailwind_blue() {
    assert_eq!(
        generate("#3B82F6"),
        palette([
            "#EFF6FF", "#DBEAFE", "#BFDBFE", "#93C5FD", "#60A5FA", "#3B82F6", "#2563EB",
            "#1D4ED8", "#1E40AF", "#1E3A8A", "#172554",
        ])
    );
}

#[test]
fn reproduces_tailwind_red() {
    assert_eq!(
        generate("#EF4444"),
        palette([
            "#FEF2F2", "#FEE2E2", "#FECACA", "#FCA5A5", "#F87171", "#EF4444", "#DC2626",
            "#B91C1C", "#991B1B", "#7F1D1D", "#450A0A",
        ])
    );
}

#[test]
fn reproduces_tailwind_yellow() {
    assert_eq!(
        generate("#EAB308"),
        palette([
            "#FEFCE8", "#FEF9C3", "#FEF08A", "#FDE047", "#FACC15", "#EAB308", "#CA8A04",
            "#A16207", "#854D0E", "#713F12", "#422006",
        ])
    );
}

#[test]
fn reproduces_tailwind_green() {
    assert_eq!(
        generate("#22C55E"),
        palette([
            "#F0FDF4", "#DCFCE7", "#BBF7D0", "#86EFAC", "#4ADE80", "#22C55E", "#16A34A",
            "#15803D", "#166534", "#14532D", "#052E16",
        ])
    );
}

#[test]
fn reproduces_tailwind_purple() {
    assert_eq!(
        generate("#A855F7"),
        palette([
            "#FAF5FF", "#F3E8FF", "#E9D5FF", "#D8B4FE", "#C084FC", "#A855F7", "#9333EA",
            "#7E22CE", "#6B21A8", "#581C87", "#3B0764",
        ])
    );
}

#[test]
fn anchor_centers_reproduce_their_own_base_shade() {
    for curve in chromascale::color_space::Lab::anchor_table().curves() {
        let i = Shade::S500.index();
        let center = Polar::<chromascale::color_space::Lab>::new(
            curve.lightness[i],
            curve.chroma[i],
            curve.center_hue,
        );
        let hex = center.to_hex();

        let generated = generate(&hex)[Shade::S500];
        let expected: Rgb8 = hex.parse().unwrap();
        assert!(
            delta_e(generated, expected) < 1.0,
            "{}: {hex} -> {generated}",
            curve.name
        );
    }
}

#[test]
fn cyan_base_stays_close() {
    let generated = generate("#06B6D4")[Shade::S500];
    assert!(delta_e(generated, Rgb8::new(0x06, 0xB6, 0xD4)) < 1.0);
}

#[test]
fn every_shade_is_in_gamut() {
    let inputs = [
        "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF", "#808080", "#000000",
        "#FFFFFF", "#3B82F6", "#F97316", "#14B8A6", "#EC4899", "#6366F1", "#84CC16", "#123",
    ];
    for input in inputs {
        for (shade, rgb) in generate(input).iter() {
            let lch = Polar::<chromascale::color_space::Lab>::from_rgb8(&rgb);
            assert!(lch.in_gamut(), "{input} {shade} {rgb}");
        }
    }
}

#[test]
fn shades_get_darker() {
    for input in ["#3B82F6", "#FF0000", "#22C55E", "#A855F7", "#808080"] {
        let lightness: Vec<f64> = generate(input)
            .iter()
            .map(|(_, rgb)| decode(&rgb.to_hex()).unwrap().lightness)
            .collect();
        for pair in lightness.windows(2) {
            assert!(pair[1] < pair[0], "{input}: {lightness:?}");
        }
    }
}

#[test]
fn pure_red() {
    let red = generate("#FF0000");

    let base = red[Shade::S500];
    assert!(delta_e(base, Rgb8::new(0xEF, 0x44, 0x44)) < 15.0, "{base}");

    let lightest = decode(&red[Shade::S50].to_hex()).unwrap();
    assert!(lightest.lightness > 95.0);
    assert!(lightest.chroma > 1.0);

    let darkest = decode(&red[Shade::S950].to_hex()).unwrap();
    assert!(darkest.lightness < 20.0);
    assert!((20.0..50.0).contains(&darkest.hue), "{}", darkest.hue);
}

#[test]
fn short_form_input_matches_long_form() {
    assert_eq!(generate("#0f0"), generate("#00FF00"));
}

#[test]
fn malformed_input_is_rejected() {
    for input in ["not-a-color", "", "#12345", "#12345g", "#ffff"] {
        assert_eq!(generate_palette(input, &PaletteOptions::default()), None);
    }
}

#[test]
fn hue_shift_round_trips_when_shades_stay_in_gamut() {
    let blue = generate("#3B82F6");
    let back = adjust_palette_hue(&adjust_palette_hue(&blue, 30.0), -30.0);

    for ((shade, a), (_, b)) in blue.iter().zip(back.iter()) {
        assert!(delta_e(a, b) < 1.0, "{shade}: {a} vs {b}");
    }
}

#[test]
fn hue_shift_never_leaves_the_gamut() {
    for input in ["#FF0000", "#22C55E", "#A855F7"] {
        let shifted = adjust_palette_hue(&generate(input), 120.0);
        for (shade, rgb) in shifted.iter() {
            let lch = Polar::<chromascale::color_space::Lab>::from_rgb8(&rgb);
            assert!(lch.in_gamut(), "{input} {shade}");
        }
    }
}

#[test]
fn gray_input_still_produces_a_palette() {
    let gray = generate("#808080");
    assert_eq!(gray.iter().count(), 11);
    assert!(decode(&gray[Shade::S50].to_hex()).unwrap().lightness > 90.0);
}
