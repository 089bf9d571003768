// tests/contrast_focus.rs
use unifhorce::audit::contrast::{
    contrast_ratio, contrast_ratio_hex, meets_contrast_requirements, relative_luminance, Rgb,
};
use unifhorce::audit::focus::{next_focus, NavKey};

#[test]
fn black_on_white_is_21() {
    let r = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
    assert!((r - 21.0).abs() < 1e-9, "{r}");
    // order doesn't matter
    assert!((contrast_ratio(Rgb::WHITE, Rgb::BLACK) - r).abs() < 1e-12);
}

#[test]
fn same_colour_is_1() {
    let c = Rgb::new(0x00, 0x7A, 0xCC);
    assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-12);
}

#[test]
fn luminance_endpoints() {
    assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
    assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
}

#[test]
fn hex_parsing() {
    assert_eq!(Rgb::from_hex("#007acc"), Some(Rgb::new(0, 0x7A, 0xCC)));
    assert_eq!(Rgb::from_hex("007ACC"), Some(Rgb::new(0, 0x7A, 0xCC)));
    assert_eq!(Rgb::from_hex("#fff"), None);
    assert_eq!(Rgb::from_hex("zzzzzz"), None);
    assert!(contrast_ratio_hex("#000000", "nope").is_none());

    let r = contrast_ratio_hex("#767676", "#ffffff").unwrap();
    assert!(r > 4.5 && r < 4.6, "{r}");
}

#[test]
fn aa_thresholds() {
    assert!(meets_contrast_requirements(4.5, false));
    assert!(!meets_contrast_requirements(4.49, false));
    assert!(meets_contrast_requirements(3.0, true));
    assert!(!meets_contrast_requirements(2.99, true));
}

#[test]
fn focus_cycles_through_a_list() {
    let mut cur = None;
    let mut seen = Vec::new();
    for _ in 0..4 {
        cur = next_focus(cur, 3, NavKey::Next);
        seen.push(cur);
    }
    assert_eq!(seen, [Some(0), Some(1), Some(2), Some(0)]);

    assert_eq!(next_focus(Some(1), 3, NavKey::Home), Some(0));
    assert_eq!(next_focus(Some(1), 3, NavKey::End), Some(2));
    assert_eq!(next_focus(Some(7), 3, NavKey::Prev), Some(2));
    assert_eq!(next_focus(Some(0), 0, NavKey::Next), None);
}

