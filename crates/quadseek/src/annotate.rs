//! Marker overlay for visual inspection of a detection.

use ::image::{Rgb, RgbImage};

use crate::core::Centroid;

pub const MARKER_RADIUS: u32 = 10;
pub const MARKER_COLOR: Rgb<u8> = Rgb([255, 255, 0]);

/// Draw a one-pixel ring of `radius` around `center`; off-image parts are clipped.
pub fn draw_marker(img: &mut RgbImage, center: Centroid, radius: u32, color: Rgb<u8>) {
    let cx = center.x as i64;
    let cy = center.y as i64;
    let mut x = radius as i64;
    let mut y = 0i64;
    let mut err = 1 - x;

    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            put_clipped(img, cx + dx, cy + dy, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// [`draw_marker`] with the default radius and color.
pub fn mark_centroid(img: &mut RgbImage, center: Centroid) {
    draw_marker(img, center, MARKER_RADIUS, MARKER_COLOR);
}

#[inline]
fn put_clipped(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    img.put_pixel(x as u32, y as u32, color);
}
