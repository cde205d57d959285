// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Enhancer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest intensity a slider can select.
pub const MIN_INTENSITY: u8 = 1;
/// Highest intensity a slider can select.
pub const MAX_INTENSITY: u8 = 100;
/// Intensity given to a freshly added filter.
pub const DEFAULT_INTENSITY: u8 = 50;

/// Clamp an arbitrary slider value into `MIN_INTENSITY..=MAX_INTENSITY`.
pub fn clamp_intensity(value: i32) -> u8 {
    value.clamp(MIN_INTENSITY as i32, MAX_INTENSITY as i32) as u8
}

/// Identity of one entry in the filter stack.
///
/// Two entries of the same kind are still distinct filters; the UI keys its
/// per-filter controls on this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterId(pub Uuid);

impl FilterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FilterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FilterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of enhancement filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    /// Linear sample scaling.
    Contrast,
    /// Gaussian blur.
    Smoothing,
    /// Binary threshold on luma (drops colour).
    Threshold,
    /// Canny edge map (drops colour).
    EdgeDetect,
    /// Additive offset.
    Brightness,
    /// HSV saturation scaling.
    Saturation,
    /// Power-law lookup table.
    Gamma,
    /// Bitwise complement. Intensity is ignored.
    Invert,
    /// Fixed colour-mixing matrix. Intensity is ignored.
    Sepia,
    /// Edge-preserving bilateral smoothing.
    Denoise,
    /// 3x3 sharpening kernel.
    Sharpen,
}

impl FilterKind {
    /// Every kind, in menu order.
    pub const ALL: [FilterKind; 11] = [
        Self::Contrast,
        Self::Smoothing,
        Self::Threshold,
        Self::EdgeDetect,
        Self::Brightness,
        Self::Saturation,
        Self::Gamma,
        Self::Invert,
        Self::Sepia,
        Self::Denoise,
        Self::Sharpen,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contrast => "Contrast Enhancement",
            Self::Smoothing => "Smoothing Filter",
            Self::Threshold => "Thresholding",
            Self::EdgeDetect => "Edge Detection",
            Self::Brightness => "Brightness Adjustment",
            Self::Saturation => "Saturation Adjustment",
            Self::Gamma => "Gamma Correction",
            Self::Invert => "Invert Colors",
            Self::Sepia => "Sepia Filter",
            Self::Denoise => "Noise Reduction",
            Self::Sharpen => "Sharpening",
        }
    }

    /// Parse a menu label back into a kind. Unknown labels (including the
    /// "no selection" placeholder) yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Whether the intensity slider has any effect on this filter.
    pub fn uses_intensity(&self) -> bool {
        !matches!(self, Self::Invert | Self::Sepia)
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the filter stack: which filter, and how strong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub id: FilterId,
    pub kind: FilterKind,
    /// Always within `MIN_INTENSITY..=MAX_INTENSITY`.
    pub intensity: u8,
}

impl FilterSpec {
    /// New entry with a fresh id; `intensity` is clamped.
    pub fn new(kind: FilterKind, intensity: i32) -> Self {
        Self {
            id: FilterId::new(),
            kind,
            intensity: clamp_intensity(intensity),
        }
    }
}

/// Raster formats accepted by the image loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Png,
    Jpeg,
    Bmp,
}

impl SourceFormat {
    /// File extensions offered by the open dialog.
    pub const EXTENSIONS: [&'static str; 4] = ["png", "jpg", "jpeg", "bmp"];

    /// Infer the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    /// MIME type string.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Bmp => "image/bmp",
        }
    }
}
