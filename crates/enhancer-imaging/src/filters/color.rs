// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour filters: HSV saturation scaling and the sepia colour matrix.

use image::{Rgb, RgbImage};

use super::kernel::saturate;

/// Sepia mixing matrix. Rows produce (B', G', R') from samples taken in
/// (B, G, R) order.
const SEPIA_BGR: [[f32; 3]; 3] = [
    [0.272, 0.534, 0.131],
    [0.349, 0.686, 0.168],
    [0.393, 0.769, 0.189],
];

/// RGB (0..=255) to HSV with hue in degrees `[0, 360)`, saturation in `[0, 1]`
/// and value in `[0, 255]`.
fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    (h, s, max)
}

/// Inverse of [`rgb_to_hsv`].
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

/// Multiply HSV saturation by `level / 50`, clamped to full saturation.
pub fn saturation(image: &RgbImage, level: u8) -> RgbImage {
    let factor = level as f32 / 50.0;
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        let Rgb([r, g, b]) = *pixel;
        let (h, s, v) = rgb_to_hsv(r as f32, g as f32, b as f32);
        // 0..=1 here is the 0..=255 saturation channel.
        let s = (s * factor).clamp(0.0, 1.0);
        let (r, g, b) = hsv_to_rgb(h, s, v);
        *pixel = Rgb([saturate(r), saturate(g), saturate(b)]);
    }
    output
}

/// Fixed sepia tone. `level` is ignored.
pub fn sepia(image: &RgbImage, _level: u8) -> RgbImage {
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        let Rgb([r, g, b]) = *pixel;
        let bgr = [b as f32, g as f32, r as f32];
        let mixed = SEPIA_BGR.map(|row| row[0] * bgr[0] + row[1] * bgr[1] + row[2] * bgr[2]);
        *pixel = Rgb([saturate(mixed[2]), saturate(mixed[1]), saturate(mixed[0])]);
    }
    output
}
