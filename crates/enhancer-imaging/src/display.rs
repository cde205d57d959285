// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display adapter — fits an image into a preview area (keeping its aspect
// ratio) and encodes it as a PNG data URL that a webview can show directly.

use base64::{Engine as _, engine::general_purpose};
use enhancer_core::{EnhancerError, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};
use tracing::{debug, instrument};

/// Target area of a preview pane, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayArea {
    pub width: u32,
    pub height: u32,
}

impl DisplayArea {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// An encoded, display-ready image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    /// `data:image/png;base64,...`
    pub data_url: String,
}

/// Largest size with the aspect ratio of `(width, height)` that fits in `area`.
/// Neither side drops below one pixel.
pub fn fit_within((width, height): (u32, u32), area: DisplayArea) -> (u32, u32) {
    let scale = f64::min(
        area.width as f64 / width as f64,
        area.height as f64 / height as f64,
    );
    let fit = |side: u32, limit: u32| ((side as f64 * scale).round() as u32).clamp(1, limit);
    (fit(width, area.width), fit(height, area.height))
}

/// Scale `image` to fit `area` and encode it as a PNG data URL.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn prepare_preview(image: &RgbImage, area: DisplayArea) -> Result<Preview> {
    if area.width == 0 || area.height == 0 {
        return Err(EnhancerError::InvalidDisplayArea {
            width: area.width,
            height: area.height,
        });
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(EnhancerError::ImageEncode("image is empty".into()));
    }

    let (width, height) = fit_within(image.dimensions(), area);
    let scaled = if (width, height) == image.dimensions() {
        image.clone()
    } else {
        imageops::resize(image, width, height, FilterType::Lanczos3)
    };

    let mut png = Vec::new();
    scaled
        .write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|err| EnhancerError::ImageEncode(format!("PNG encoding failed: {}", err)))?;
    debug!(width, height, png_len = png.len(), "Preview encoded");

    Ok(Preview {
        width,
        height,
        data_url: format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(&png)
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn decode(preview: &Preview) -> RgbImage {
        let b64 = preview
            .data_url
            .strip_prefix("data:image/png;base64,")
            .expect("png data url");
        let bytes = general_purpose::STANDARD.decode(b64).expect("base64");
        image::load_from_memory(&bytes).expect("png").to_rgb8()
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        let area = DisplayArea::new(400, 400);
        assert_eq!(fit_within((800, 400), area), (400, 200));
        assert_eq!(fit_within((300, 600), area), (200, 400));
        assert_eq!(fit_within((100, 100), area), (400, 400));
        assert_eq!(fit_within((4000, 10), area), (400, 1));
    }

    #[test]
    fn preview_is_scaled_and_decodable() {
        let image = RgbImage::from_pixel(80, 40, Rgb([10, 200, 30]));
        let preview = prepare_preview(&image, DisplayArea::new(40, 40)).expect("preview");
        assert_eq!((preview.width, preview.height), (40, 20));

        let decoded = decode(&preview);
        assert_eq!(decoded.dimensions(), (40, 20));
        let Rgb([r, g, b]) = *decoded.get_pixel(20, 10);
        assert!(r.abs_diff(10) <= 1 && g.abs_diff(200) <= 1 && b.abs_diff(30) <= 1);
    }

    #[test]
    fn exact_fit_keeps_pixels() {
        let image = RgbImage::from_fn(4, 2, |x, y| Rgb([x as u8 * 60, y as u8 * 100, 0]));
        let preview = prepare_preview(&image, DisplayArea::new(8, 2)).expect("preview");
        assert_eq!(decode(&preview), image);
    }

    #[test]
    fn empty_area_is_rejected() {
        let image = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        let err = prepare_preview(&image, DisplayArea::new(0, 100)).unwrap_err();
        assert!(matches!(err, EnhancerError::InvalidDisplayArea { width: 0, height: 100 }));
    }
}
