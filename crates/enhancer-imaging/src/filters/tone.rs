// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-sample tone filters: contrast, brightness, gamma, invert.
//
// None of these look at neighbouring pixels, so each is a pure map over the raw
// sample buffer.

use image::RgbImage;

use super::kernel::saturate;

/// Gamma used in place of zero so the exponent `1/gamma` stays finite.
const MIN_GAMMA: f64 = 0.01;

/// Apply `f` to every sample of `image`.
fn map_samples(image: &RgbImage, f: impl Fn(u8) -> u8) -> RgbImage {
    let mut output = image.clone();
    for sample in output.iter_mut() {
        *sample = f(*sample);
    }
    output
}

/// Scale every sample by `level / 50` (0.02..=2.0).
pub fn contrast(image: &RgbImage, level: u8) -> RgbImage {
    let alpha = level as f32 / 50.0;
    map_samples(image, |v| saturate((v as f32 * alpha).abs()))
}

/// Add `(level - 50) * 2` (-98..=100) to every sample.
pub fn brightness(image: &RgbImage, level: u8) -> RgbImage {
    let beta = (level as i32 - 50) * 2;
    map_samples(image, |v| (v as i32 + beta).clamp(0, 255) as u8)
}

/// Lookup table for `(i / 255) ^ (1 / gamma) * 255` with `gamma = level / 50`.
/// Entries are truncated, not rounded.
pub fn gamma_table(level: u8) -> [u8; 256] {
    let mut gamma = level as f64 / 50.0;
    if gamma == 0.0 {
        gamma = MIN_GAMMA;
    }
    let inv_gamma = 1.0 / gamma;

    let mut table = [0u8; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = ((i as f64 / 255.0).powf(inv_gamma) * 255.0) as u8;
    }
    table
}

/// Gamma correction through a 256-entry lookup table.
pub fn gamma(image: &RgbImage, level: u8) -> RgbImage {
    let table = gamma_table(level);
    map_samples(image, |v| table[v as usize])
}

/// Bitwise complement of every sample. `level` is ignored.
pub fn invert(image: &RgbImage, _level: u8) -> RgbImage {
    map_samples(image, |v| !v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn ramp() -> RgbImage {
        RgbImage::from_fn(16, 16, |x, y| {
            let v = (y * 16 + x) as u8;
            Rgb([v, 255 - v, v / 2])
        })
    }

    #[test]
    fn contrast_at_midpoint_is_identity() {
        let image = ramp();
        assert_eq!(contrast(&image, 50), image);
    }

    #[test]
    fn contrast_doubles_and_saturates() {
        let image = RgbImage::from_pixel(1, 1, Rgb([10, 100, 200]));
        assert_eq!(contrast(&image, 100).get_pixel(0, 0), &Rgb([20, 200, 255]));
    }

    #[test]
    fn brightness_saturates_instead_of_wrapping() {
        let image = RgbImage::from_pixel(1, 1, Rgb([200, 5, 128]));
        assert_eq!(brightness(&image, 100).get_pixel(0, 0), &Rgb([255, 105, 228]));
        assert_eq!(brightness(&image, 1).get_pixel(0, 0), &Rgb([102, 0, 30]));
        assert_eq!(brightness(&image, 50), image);
    }

    #[test]
    fn gamma_at_midpoint_is_identity() {
        let table = gamma_table(50);
        for (i, &v) in table.iter().enumerate() {
            assert_eq!(v as usize, i);
        }
        let image = ramp();
        assert_eq!(gamma(&image, 50), image);
    }

    #[test]
    fn gamma_table_guards_zero_level() {
        let table = gamma_table(0);
        assert_eq!(table[0], 0);
        assert_eq!(table[255], 255);
        assert!(table[128] < 5);
    }

    #[test]
    fn gamma_above_one_brightens_midtones() {
        let table = gamma_table(100);
        assert!(table[64] > 64);
        // sqrt(64 / 255) * 255 = 127.75
        assert_eq!(table[64], 127);
        assert_eq!(table[128], 180);
        assert_eq!(table[0], 0);
        assert_eq!(table[255], 255);
    }

    #[test]
    fn invert_is_self_inverse() {
        let image = ramp();
        let once = invert(&image, 50);
        assert_ne!(once, image);
        assert_eq!(invert(&once, 1), image);
    }
}
