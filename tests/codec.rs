use chromascale::{
    decode, encode, hex_to_cmyk, hex_to_hsl, hex_to_lch, hex_to_oklch, lch_to_hex, normalize_hue,
    oklch_to_hex, Cmyk, Hsl, Lch, ParseHexError, Rgb8,
};

#[test]
fn grid_round_trips_in_both_spaces() {
    let levels = [0_u8, 64, 128, 192, 255];
    for r in levels {
        for g in levels {
            for b in levels {
                let hex = Rgb8::new(r, g, b).to_hex();
                let lower = hex.to_lowercase();

                assert_eq!(lch_to_hex(&hex_to_lch(&lower).unwrap()), hex);
                assert_eq!(oklch_to_hex(&hex_to_oklch(&lower).unwrap()), hex);
            }
        }
    }
}

#[test]
fn short_form_expands_before_decoding() {
    assert_eq!(encode(&decode("#0f0").unwrap()), "#00FF00");
    assert_eq!(encode(&decode("f0a").unwrap()), "#FF00AA");
}

#[test]
fn malformed_hex_is_reported() {
    assert_eq!(decode("not-a-color"), None);
    assert_eq!("#ffff".parse::<Rgb8>(), Err(ParseHexError::InvalidLength(4)));
    assert_eq!("#00ff0z".parse::<Rgb8>(), Err(ParseHexError::InvalidDigit('z')));
}

#[test]
fn encoding_is_always_displayable() {
    let vivid = Lch::new(60.0, 149.0, 140.0);
    let hex = encode(&vivid);
    let back = decode(&hex).unwrap();

    assert!(back.in_gamut());
    assert!((back.lightness - 60.0).abs() < 1.0);
    assert!(back.chroma < vivid.chroma);
}

#[test]
fn hue_normalization() {
    for hue in [-720.0, -90.0, -1.0e-12, 0.0, 45.0, 359.999, 360.0, 1234.5] {
        let normalized = normalize_hue(hue);
        assert!((0.0..360.0).contains(&normalized), "{hue}");
        assert!((normalize_hue(hue + 720.0) - normalized).abs() < 1.0e-9);
    }
}

#[test]
fn supplementary_notations() {
    assert_eq!(hex_to_hsl("#EF4444"), Some(Hsl::new(0, 84, 60)));
    assert_eq!(hex_to_cmyk("#EF4444"), Some(Cmyk::new(0, 72, 72, 6)));
    assert_eq!(hex_to_hsl("#12"), None);
}
