// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Enhancer.

use thiserror::Error;

/// Top-level error type for all Enhancer operations.
#[derive(Debug, Error)]
pub enum EnhancerError {
    // -- Image source errors --
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("image decoding failed: {0}")]
    ImageDecode(String),

    // -- Display errors --
    #[error("image encoding failed: {0}")]
    ImageEncode(String),

    #[error("display area must be non-empty, got {width}x{height}")]
    InvalidDisplayArea { width: u32, height: u32 },

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, EnhancerError>;
