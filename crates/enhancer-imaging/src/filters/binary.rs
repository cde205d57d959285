// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Luma-based filters that drop colour: binary threshold and Canny edges. Both
// work on a single luma plane and replicate the result into all three
// channels so the pipeline keeps a uniform RGB8 image type.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::contrast::{ThresholdType, threshold as binary_threshold};
use imageproc::edges::canny;

use super::kernel::saturate;

/// BT.601 luma (`0.299 R + 0.587 G + 0.114 B`), rounded.
pub fn luma(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        Luma([saturate(0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32)])
    })
}

/// Copy a single-channel image into all three RGB channels.
fn replicate(gray: &GrayImage) -> RgbImage {
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let Luma([v]) = *gray.get_pixel(x, y);
        Rgb([v, v, v])
    })
}

/// Luma threshold: samples strictly above `level * 255 / 100` (rounded down)
/// become white, the rest black.
pub fn threshold(image: &RgbImage, level: u8) -> RgbImage {
    let cutoff = (level as u32 * 255 / 100) as u8;
    replicate(&binary_threshold(&luma(image), cutoff, ThresholdType::Binary))
}

/// Canny edge map with hysteresis thresholds `level` and `2 * level`.
pub fn edge_detect(image: &RgbImage, level: u8) -> RgbImage {
    let low = level as f32;
    let high = 2.0 * low;
    let edges = canny(&luma(image), low, high);
    replicate(&edges)
}
