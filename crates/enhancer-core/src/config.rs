// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration. In-memory only; nothing is read from or written
// to disk.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_INTENSITY, clamp_intensity};

/// Window and layout settings for the desktop shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Main window title.
    pub window_title: String,
    /// Initial window size in logical pixels.
    pub window_width: u32,
    pub window_height: u32,
    /// Minimum size of each preview pane (original and processed).
    pub preview_width: u32,
    pub preview_height: u32,
    /// Width of the applied-filters side panel.
    pub panel_width: u32,
    /// Intensity given to a newly added filter.
    pub default_intensity: u8,
}

impl AppConfig {
    /// `default_intensity` forced into the slider range.
    pub fn effective_default_intensity(&self) -> u8 {
        clamp_intensity(self.default_intensity as i32)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Interactive Image Enhancement".into(),
            window_width: 1000,
            window_height: 700,
            preview_width: 400,
            preview_height: 400,
            panel_width: 300,
            default_intensity: DEFAULT_INTENSITY,
        }
    }
}
