// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// enhancer-imaging — Image processing for Enhancer.
//
// Provides the filter transforms, the render pipeline that applies a filter
// stack to an original image, image loading (PNG, JPEG, BMP), the editing
// session that ties them together, and preview encoding for display.

pub mod display;
pub mod filters;
pub mod pipeline;
pub mod session;
pub mod source;

// Re-export the primary entry points so callers can use `enhancer_imaging::render` etc.
pub use display::{DisplayArea, Preview, prepare_preview};
pub use pipeline::render;
pub use session::Session;
