// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the status line.
//
// Every technical error maps to a short plain-English message plus a
// suggestion of what to try next.

use crate::error::EnhancerError;
use crate::types::SourceFormat;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it by picking a different file.
    ActionRequired,
    /// Something went wrong inside the application.
    Internal,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Severity level (drives colour in the UI).
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Convert an `EnhancerError` into a `HumanError`.
pub fn humanize_error(err: &EnhancerError) -> HumanError {
    match err {
        EnhancerError::UnsupportedFormat(detail) => HumanError {
            message: "This type of file can't be opened.".into(),
            suggestion: format!(
                "Choose a {} image. (Got: {detail})",
                supported_list()
            ),
            severity: Severity::ActionRequired,
        },

        EnhancerError::ImageDecode(_) => HumanError {
            message: "The image couldn't be read.".into(),
            suggestion: "The file may be damaged or incomplete. Try opening a different image."
                .into(),
            severity: Severity::ActionRequired,
        },

        EnhancerError::Io(io) => match io.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The file could not be found.".into(),
                suggestion: "It may have been moved or deleted. Pick the file again.".into(),
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "You don't have permission to open this file.".into(),
                suggestion: "Copy the image somewhere you can read it, then open the copy."
                    .into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "The file couldn't be read.".into(),
                suggestion: format!("Try again. ({io})"),
                severity: Severity::ActionRequired,
            },
        },

        EnhancerError::ImageEncode(detail) => HumanError {
            message: "The preview couldn't be drawn.".into(),
            suggestion: format!("Try resizing the window. ({detail})"),
            severity: Severity::Internal,
        },

        EnhancerError::InvalidDisplayArea { .. } => HumanError {
            message: "The preview area is too small.".into(),
            suggestion: "Make the window larger.".into(),
            severity: Severity::Internal,
        },
    }
}

fn supported_list() -> String {
    let names: Vec<String> = [SourceFormat::Png, SourceFormat::Jpeg, SourceFormat::Bmp]
        .iter()
        .map(|f| format!("{f:?}").to_uppercase())
        .collect();
    names.join(", ")
}
