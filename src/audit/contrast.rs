// src/audit/contrast.rs
//
// WCAG relative luminance and contrast ratio. Building blocks only; the
// "Color Contrast" check does not compute against rendered styles.

pub const AA_NORMAL_TEXT: f64 = 4.5;
pub const AA_LARGE_TEXT: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` or `rrggbb`, any case.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.trim();
        let h = h.strip_prefix('#').unwrap_or(h);
        if h.len() != 6 || !h.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
        Some(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }
}

/// sRGB channel (0..=255) → linear light.
fn linearize(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Order-independent: the lighter colour always goes on top.
pub fn contrast_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

/// `None` if either colour isn't valid hex.
pub fn contrast_ratio_hex(fg: &str, bg: &str) -> Option<f64> {
    Some(contrast_ratio(Rgb::from_hex(fg)?, Rgb::from_hex(bg)?))
}

pub fn meets_contrast_requirements(ratio: f64, large_text: bool) -> bool {
    if large_text { ratio >= AA_LARGE_TEXT } else { ratio >= AA_NORMAL_TEXT }
}
