// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Neighbourhood filters: Gaussian smoothing, bilateral denoise, sharpening.

use image::RgbImage;
use imageproc::filter::{filter3x3, separable_filter_equal};

use super::kernel::{gaussian_kernel, reflect_101, saturate};

/// Bilateral window diameter.
const DENOISE_DIAMETER: usize = 9;

/// Odd Gaussian kernel size for a smoothing level: `2 * (level / 10) + 1`.
pub fn smoothing_kernel_size(level: u8) -> usize {
    (level as usize / 10) * 2 + 1
}

/// Gaussian blur whose kernel grows with `level` (1 below level 10, 21 at 100).
pub fn smoothing(image: &RgbImage, level: u8) -> RgbImage {
    let kernel = gaussian_kernel(smoothing_kernel_size(level));
    if kernel.len() == 1 {
        return image.clone();
    }
    separable_filter_equal(image, &kernel)
}

/// Edge-preserving bilateral smoothing.
///
/// With `h = level / 10`, the colour sigma is `2h` and the spatial sigma `h / 2`
/// over a fixed 9-pixel circular window. Colour distance is the sum of absolute
/// channel differences. `imageproc::filter::bilateral_filter` only takes
/// `GrayImage`, so the colour version lives here.
pub fn denoise(image: &RgbImage, level: u8) -> RgbImage {
    let h = level as f32 / 10.0;
    let sigma_color = if h * 2.0 > 0.0 { h * 2.0 } else { 1.0 };
    let sigma_space = if h / 2.0 > 0.0 { h / 2.0 } else { 1.0 };
    bilateral(image, DENOISE_DIAMETER / 2, sigma_color, sigma_space)
}

fn bilateral(image: &RgbImage, radius: usize, sigma_color: f32, sigma_space: f32) -> RgbImage {
    let (width, height) = image.dimensions();
    let (w, h) = (width as usize, height as usize);
    let src = image.as_raw();

    let color_coeff = -0.5 / (sigma_color * sigma_color);
    let space_coeff = -0.5 / (sigma_space * sigma_space);

    // Offsets inside the circular window with their spatial weights.
    let r = radius as isize;
    let mut window: Vec<(isize, isize, f32)> = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            let dist_sq = (dx * dx + dy * dy) as f32;
            if dist_sq.sqrt() > radius as f32 {
                continue;
            }
            window.push((dx, dy, (dist_sq * space_coeff).exp()));
        }
    }

    // Colour weights indexed by L1 distance (0..=3*255).
    let color_weights: Vec<f32> = (0..=3 * 255)
        .map(|d| {
            let d = d as f32;
            (d * d * color_coeff).exp()
        })
        .collect();

    let mut output = RgbImage::new(width, height);
    let dst: &mut [u8] = &mut output;
    for y in 0..h {
        for x in 0..w {
            let center = (y * w + x) * 3;
            let mut acc = [0.0f32; 3];
            let mut weight_sum = 0.0f32;

            for &(dx, dy, space_weight) in &window {
                let sx = reflect_101(x as isize + dx, w);
                let sy = reflect_101(y as isize + dy, h);
                let base = (sy * w + sx) * 3;

                let distance: usize = (0..3)
                    .map(|c| (src[base + c] as i32 - src[center + c] as i32).unsigned_abs() as usize)
                    .sum();
                let weight = space_weight * color_weights[distance];

                for c in 0..3 {
                    acc[c] += src[base + c] as f32 * weight;
                }
                weight_sum += weight;
            }

            for c in 0..3 {
                dst[center + c] = if weight_sum > 0.0 {
                    saturate(acc[c] / weight_sum)
                } else {
                    src[center + c]
                };
            }
        }
    }

    output
}

/// Sharpen with `[[0,-1,0],[-1,5+level/10,-1],[0,-1,0]]`.
///
/// The kernel sums to `1 + level / 10`, so stronger levels also brighten.
pub fn sharpen(image: &RgbImage, level: u8) -> RgbImage {
    let centre = 5.0 + level as f32 / 10.0;
    let kernel = [0.0, -1.0, 0.0, -1.0, centre, -1.0, 0.0, -1.0, 0.0];
    filter3x3::<_, f32, u8>(image, &kernel)
}
