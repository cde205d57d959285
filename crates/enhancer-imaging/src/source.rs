// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image source — decodes PNG, JPEG and BMP files into the RGB8 working format.
// Alpha, if present, is dropped.

use std::path::Path;

use enhancer_core::{EnhancerError, Result, SourceFormat};
use image::{ImageFormat, RgbImage};
use tracing::{debug, info, instrument};

fn image_format(format: SourceFormat) -> ImageFormat {
    match format {
        SourceFormat::Png => ImageFormat::Png,
        SourceFormat::Jpeg => ImageFormat::Jpeg,
        SourceFormat::Bmp => ImageFormat::Bmp,
    }
}

/// Load an image file. The format is taken from the file extension; files with
/// any other extension are rejected before they are read.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_path(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let format = SourceFormat::from_extension(ext).ok_or_else(|| {
        EnhancerError::UnsupportedFormat(if ext.is_empty() {
            "file has no extension".into()
        } else {
            ext.to_string()
        })
    })?;

    let data = std::fs::read(path)?;
    let image = image::load_from_memory_with_format(&data, image_format(format))
        .map_err(|err| {
            EnhancerError::ImageDecode(format!("failed to decode {}: {}", path.display(), err))
        })?
        .to_rgb8();

    info!(
        width = image.width(),
        height = image.height(),
        format = format.mime_type(),
        "Image loaded"
    );
    Ok(image)
}

/// Decode an in-memory image, guessing the format from its contents.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn load_bytes(data: &[u8]) -> Result<RgbImage> {
    let image = image::load_from_memory(data)
        .map_err(|err| EnhancerError::ImageDecode(format!("failed to decode image: {}", err)))?
        .to_rgb8();
    debug!(
        width = image.width(),
        height = image.height(),
        "Image decoded from bytes"
    );
    Ok(image)
}
