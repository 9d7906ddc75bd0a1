//! 8-bit RGB to HSV conversion.
//!
//! Uses the common 8-bit layout: hue is halved into `0..180`, saturation and
//! value span `0..=255`.

/// Convert one RGB pixel into `[h, s, v]`.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = (max - min) as f32;

    let s = if max == 0 {
        0
    } else {
        ((255.0 * diff) / max as f32).round() as u8
    };

    let (r, g, b) = (r as f32, g as f32, b as f32);
    let mut hue_deg = if diff == 0.0 {
        0.0
    } else if max as f32 == r {
        60.0 * (g - b) / diff
    } else if max as f32 == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if hue_deg < 0.0 {
        hue_deg += 360.0;
    }

    let mut h = (hue_deg * 0.5).round() as u16;
    if h >= 180 {
        h -= 180;
    }

    [h as u8, s, max]
}
