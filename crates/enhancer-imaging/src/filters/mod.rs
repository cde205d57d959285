// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filter transforms and their dispatch table.
//
// Every transform is a pure `fn(&RgbImage, level) -> RgbImage` that preserves
// dimensions and saturates its output into 0..=255. `level` is the filter's
// 1..=100 intensity.

pub mod binary;
pub mod color;
pub mod spatial;
pub mod tone;

mod kernel;

use enhancer_core::FilterKind;
use image::RgbImage;

/// A single filter stage.
pub type Transform = fn(&RgbImage, u8) -> RgbImage;

/// Look up the transform implementing `kind`.
pub fn transform_for(kind: FilterKind) -> Transform {
    match kind {
        FilterKind::Contrast => tone::contrast,
        FilterKind::Smoothing => spatial::smoothing,
        FilterKind::Threshold => binary::threshold,
        FilterKind::EdgeDetect => binary::edge_detect,
        FilterKind::Brightness => tone::brightness,
        FilterKind::Saturation => color::saturation,
        FilterKind::Gamma => tone::gamma,
        FilterKind::Invert => tone::invert,
        FilterKind::Sepia => color::sepia,
        FilterKind::Denoise => spatial::denoise,
        FilterKind::Sharpen => spatial::sharpen,
    }
}

/// Apply one filter to `image`.
pub fn apply(kind: FilterKind, image: &RgbImage, level: u8) -> RgbImage {
    transform_for(kind)(image, level)
}
