// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Render pipeline — applies a filter stack to an original image.

use enhancer_core::FilterStack;
use image::RgbImage;
use tracing::{debug, instrument};

use crate::filters;

/// Render `stack` over `original`.
///
/// Starts from a copy of `original` and feeds each stage's output into the
/// next, in stack order. The original is never touched, and the same inputs
/// always produce byte-identical output. An empty stack returns a copy of the
/// original.
#[instrument(skip_all, fields(width = original.width(), height = original.height(), stages = stack.len()))]
pub fn render(original: &RgbImage, stack: &FilterStack) -> RgbImage {
    let mut image = original.clone();
    for (position, spec) in stack.iter().enumerate() {
        image = filters::apply(spec.kind, &image, spec.intensity);
        debug!(position, filter = %spec.kind, intensity = spec.intensity, "Stage applied");
    }
    image
}
