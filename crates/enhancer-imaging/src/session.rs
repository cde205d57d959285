// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editing session — owns the original image, the filter stack, and the
// processed result.
//
// Every mutation re-renders the whole stack from the original, so `processed`
// always equals `render(original, stack)`. With no image loaded, mutations only
// touch the stack.

use std::path::{Path, PathBuf};

use enhancer_core::{DEFAULT_INTENSITY, FilterId, FilterKind, FilterStack, Result};
use image::RgbImage;
use tracing::{debug, info};

use crate::pipeline::render;
use crate::source;

/// State of one interactive editing session.
#[derive(Debug, Clone)]
pub struct Session {
    original: Option<RgbImage>,
    processed: Option<RgbImage>,
    stack: FilterStack,
    source: Option<PathBuf>,
    default_intensity: u8,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    // -- Construction ---------------------------------------------------------

    pub fn new() -> Self {
        Self::with_default_intensity(DEFAULT_INTENSITY)
    }

    /// Session whose newly added filters start at `intensity` (clamped).
    pub fn with_default_intensity(intensity: u8) -> Self {
        Self {
            original: None,
            processed: None,
            stack: FilterStack::new(),
            source: None,
            default_intensity: enhancer_core::clamp_intensity(intensity as i32),
        }
    }

    // -- Image source ---------------------------------------------------------

    /// Replace the original with the image at `path`.
    ///
    /// On failure the previous image, stack and result are kept.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let image = source::load_path(path)?;
        self.source = Some(path.to_path_buf());
        self.set_original(image);
        Ok(())
    }

    /// Replace the original with an encoded in-memory image.
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<()> {
        let image = source::load_bytes(data)?;
        self.source = None;
        self.set_original(image);
        Ok(())
    }

    /// Replace the original with an already-decoded image.
    pub fn set_original(&mut self, image: RgbImage) {
        info!(width = image.width(), height = image.height(), "Original image replaced");
        self.original = Some(image);
        self.refresh();
    }

    // -- Filter stack ---------------------------------------------------------

    /// Append the menu selection at the session's default intensity. `None`
    /// (nothing selected) changes nothing.
    pub fn add_filter(&mut self, selection: Option<FilterKind>) -> Option<FilterId> {
        let id = self
            .stack
            .append_selected(selection, self.default_intensity as i32)?;
        self.refresh();
        Some(id)
    }

    /// Remove a filter. Unknown ids change nothing.
    pub fn remove_filter(&mut self, id: FilterId) -> bool {
        let removed = self.stack.remove(id);
        if removed {
            self.refresh();
        }
        removed
    }

    /// Set a filter's intensity (clamped to 1..=100). Unknown ids change
    /// nothing.
    pub fn set_intensity(&mut self, id: FilterId, value: i32) -> bool {
        let found = self.stack.set_intensity(id, value);
        if found {
            self.refresh();
        }
        found
    }

    /// Recompute the processed image. Does nothing until an image is loaded.
    pub fn refresh(&mut self) {
        match &self.original {
            Some(original) => self.processed = Some(render(original, &self.stack)),
            None => debug!("No image loaded, render skipped"),
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn original(&self) -> Option<&RgbImage> {
        self.original.as_ref()
    }

    pub fn processed(&self) -> Option<&RgbImage> {
        self.processed.as_ref()
    }

    pub fn stack(&self) -> &FilterStack {
        &self.stack
    }

    /// Path of the loaded file, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn has_image(&self) -> bool {
        self.original.is_some()
    }

    pub fn default_intensity(&self) -> u8 {
        self.default_intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enhancer_core::EnhancerError;
    use image::Rgb;

    fn sample() -> RgbImage {
        RgbImage::from_fn(8, 8, |x, y| Rgb([(x * 30) as u8, (y * 30) as u8, 100]))
    }

    fn loaded() -> Session {
        let mut session = Session::new();
        session.set_original(sample());
        session
    }

    #[test]
    fn fresh_session_renders_nothing() {
        let mut session = Session::new();
        assert!(!session.has_image());
        let id = session.add_filter(Some(FilterKind::Invert)).expect("added");
        assert!(session.processed().is_none());
        assert!(session.set_intensity(id, 10));
        assert!(session.processed().is_none());
    }

    #[test]
    fn loading_renders_existing_stack() {
        let mut session = Session::new();
        session.add_filter(Some(FilterKind::Invert));
        session.set_original(sample());

        let expected = render(&sample(), session.stack());
        assert_eq!(session.processed(), Some(&expected));
        assert_eq!(session.original(), Some(&sample()));
    }

    #[test]
    fn no_selection_is_noop() {
        let mut session = loaded();
        assert_eq!(session.add_filter(None), None);
        assert!(session.stack().is_empty());
        assert_eq!(session.processed(), Some(&sample()));
    }

    #[test]
    fn processed_tracks_every_mutation() {
        let mut session = loaded();
        let original = sample();

        let blur = session.add_filter(Some(FilterKind::Smoothing)).unwrap();
        assert_eq!(session.processed(), Some(&render(&original, session.stack())));

        session.set_intensity(blur, 90);
        assert_eq!(session.stack().get(blur).unwrap().intensity, 90);
        assert_eq!(session.processed(), Some(&render(&original, session.stack())));

        session.add_filter(Some(FilterKind::Sepia));
        session.remove_filter(blur);
        assert_eq!(session.stack().len(), 1);
        assert_eq!(session.processed(), Some(&render(&original, session.stack())));
        assert_eq!(session.original(), Some(&original));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut session = loaded();
        assert!(!session.remove_filter(FilterId::new()));
        assert!(!session.set_intensity(FilterId::new(), 5));
    }

    #[test]
    fn default_intensity_applies_to_new_filters() {
        let mut session = Session::with_default_intensity(0);
        assert_eq!(session.default_intensity(), 1);
        let id = session.add_filter(Some(FilterKind::Gamma)).unwrap();
        assert_eq!(session.stack().get(id).unwrap().intensity, 1);
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut session = loaded();
        session.add_filter(Some(FilterKind::Invert));
        let before = session.processed().cloned();

        let err = session.load_path("missing/image.png").unwrap_err();
        assert!(matches!(err, EnhancerError::Io(_)));
        assert!(session.load_bytes(b"not an image").is_err());

        assert_eq!(session.original(), Some(&sample()));
        assert_eq!(session.processed().cloned(), before);
        assert_eq!(session.stack().len(), 1);
    }

    #[test]
    fn load_path_records_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("in.bmp");
        sample().save(&path).expect("save");

        let mut session = Session::new();
        session.load_path(&path).expect("load");
        assert_eq!(session.source(), Some(path.as_path()));
        assert_eq!(session.original(), Some(&sample()));
    }
}
