// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared filter helpers: sample saturation, reflect-101 border indexing for the
// bilateral window, and Gaussian kernel weights for `imageproc`'s separable
// filter.

/// Round and saturate a float sample into `u8`.
#[inline]
pub(crate) fn saturate(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Map a possibly out-of-range coordinate back into `0..len` by reflecting
/// about the edge pixels without repeating them.
#[inline]
pub(crate) fn reflect_101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let mut i = index;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Normalised 1D Gaussian kernel of odd length `size`.
///
/// Small sizes use the fixed binomial weights; larger sizes derive sigma from
/// the size as `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
pub(crate) fn gaussian_kernel(size: usize) -> Vec<f32> {
    match size {
        0 | 1 => vec![1.0],
        3 => vec![0.25, 0.5, 0.25],
        5 => vec![0.0625, 0.25, 0.375, 0.25, 0.0625],
        7 => vec![
            0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
        ],
        _ => {
            let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
            let half = (size / 2) as f32;
            let mut kernel: Vec<f32> = (0..size)
                .map(|i| {
                    let x = i as f32 - half;
                    (-x * x / (2.0 * sigma * sigma)).exp()
                })
                .collect();
            let sum: f32 = kernel.iter().sum();
            for weight in kernel.iter_mut() {
                *weight /= sum;
            }
            kernel
        }
    }
}
