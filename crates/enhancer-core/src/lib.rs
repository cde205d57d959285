// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancer — Core types, the filter stack, and error definitions shared across
// all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod stack;
pub mod types;

pub use config::AppConfig;
pub use error::{EnhancerError, Result};
pub use stack::FilterStack;
pub use types::*;
