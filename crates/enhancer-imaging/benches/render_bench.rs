// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the render pipeline in the enhancer-imaging crate.
// Every slider tick re-renders the full stack, so these numbers bound how
// responsive the editor feels.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use enhancer_core::{FilterKind, FilterStack};
use enhancer_imaging::render;
use image::{Rgb, RgbImage};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// 256x256 synthetic gradient with some colour variation in every channel.
fn gradient() -> RgbImage {
    RgbImage::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, ((x + y) / 2) as u8]))
}

/// Each filter on its own at the default intensity.
fn bench_single_filters(c: &mut Criterion) {
    let image = gradient();
    let mut group = c.benchmark_group("single_filter (256x256)");
    for kind in FilterKind::ALL {
        let mut stack = FilterStack::new();
        stack.append(kind);
        group.bench_function(format!("{kind:?}"), |b| {
            b.iter(|| black_box(render(black_box(&image), &stack)));
        });
    }
    group.finish();
}

/// A realistic editing stack: denoise, tone, colour, sharpen.
fn bench_typical_stack(c: &mut Criterion) {
    let image = gradient();
    let mut stack = FilterStack::new();
    for kind in [
        FilterKind::Denoise,
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Saturation,
        FilterKind::Sharpen,
    ] {
        stack.append(kind);
    }

    c.bench_function("typical_stack (256x256)", |b| {
        b.iter(|| black_box(render(black_box(&image), &stack)));
    });
}

criterion_group!(benches, bench_single_filters, bench_typical_stack);
criterion_main!(benches);
