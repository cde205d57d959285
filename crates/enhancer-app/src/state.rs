// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application state — the editing session plus what the UI needs to show it.
//
// The session holds the filter records; the UI keys one row per record on its
// `FilterId`. Previews are re-encoded after every change so the processed pane
// always shows the current stack.

use std::path::Path;

use enhancer_core::human_errors::{HumanError, humanize_error};
use enhancer_core::{AppConfig, EnhancerError, FilterId, FilterKind, FilterSpec};
use enhancer_imaging::{DisplayArea, Preview, Session, prepare_preview};

/// Everything the editor page renders, taken in one read of the state.
#[derive(Debug, Clone)]
pub struct EditorView {
    pub original: Option<Preview>,
    pub processed: Option<Preview>,
    pub specs: Vec<FilterSpec>,
    pub status: Option<HumanError>,
    pub pane_width: u32,
    pub pane_height: u32,
    pub panel_width: u32,
}

/// Shared state accessible to the UI via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Original image, filter stack, and processed result.
    pub session: Session,
    /// Window and layout settings.
    pub config: AppConfig,
    /// Filter currently chosen in the menu (`None` = placeholder).
    pub selection: Option<FilterKind>,
    /// Encoded original for the left pane.
    pub original_preview: Option<Preview>,
    /// Encoded result for the right pane.
    pub processed_preview: Option<Preview>,
    /// Last error, shown in the status line.
    pub status: Option<HumanError>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Session::with_default_intensity(config.effective_default_intensity()),
            config,
            selection: None,
            original_preview: None,
            processed_preview: None,
            status: None,
        }
    }

    pub fn view(&self) -> EditorView {
        EditorView {
            original: self.original_preview.clone(),
            processed: self.processed_preview.clone(),
            specs: self.session.stack().entries(),
            status: self.status.clone(),
            pane_width: self.config.preview_width,
            pane_height: self.config.preview_height,
            panel_width: self.config.panel_width,
        }
    }

    fn preview_area(&self) -> DisplayArea {
        DisplayArea::new(self.config.preview_width, self.config.preview_height)
    }

    /// Load a picked file. Failures keep the previous image and stack.
    pub fn load_image(&mut self, path: &Path) {
        match self.session.load_path(path) {
            Ok(()) => {
                self.status = None;
                self.update_previews(true);
            }
            Err(err) => self.report(&err),
        }
    }

    /// Append the menu selection. Does nothing while the placeholder is selected.
    pub fn add_selected_filter(&mut self) {
        if self.session.add_filter(self.selection).is_some() {
            self.update_previews(false);
        }
    }

    pub fn remove_filter(&mut self, id: FilterId) {
        if self.session.remove_filter(id) {
            self.update_previews(false);
        }
    }

    pub fn set_intensity(&mut self, id: FilterId, value: i32) {
        if self.session.set_intensity(id, value) {
            self.update_previews(false);
        }
    }

    fn update_previews(&mut self, include_original: bool) {
        let area = self.preview_area();

        if include_original {
            match self
                .session
                .original()
                .map(|image| prepare_preview(image, area))
                .transpose()
            {
                Ok(preview) => self.original_preview = preview,
                Err(err) => return self.report(&err),
            }
        }

        match self
            .session
            .processed()
            .map(|image| prepare_preview(image, area))
            .transpose()
        {
            Ok(preview) => self.processed_preview = preview,
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, err: &EnhancerError) {
        tracing::warn!(error = %err, "operation failed");
        self.status = Some(humanize_error(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn state_with_image() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("input.png");
        RgbImage::from_pixel(20, 10, Rgb([30, 60, 90]))
            .save(&path)
            .expect("save");

        let mut state = AppState::new(AppConfig::default());
        state.load_image(&path);
        (state, dir)
    }

    #[test]
    fn loading_fills_both_previews() {
        let (state, _dir) = state_with_image();
        let original = state.original_preview.as_ref().expect("original preview");
        assert_eq!((original.width, original.height), (400, 200));
        assert!(state.processed_preview.is_some());
        assert!(state.status.is_none());
    }

    #[test]
    fn placeholder_selection_adds_nothing() {
        let (mut state, _dir) = state_with_image();
        let before = state.processed_preview.clone();
        state.add_selected_filter();
        assert!(state.session.stack().is_empty());
        assert_eq!(state.processed_preview, before);
    }

    #[test]
    fn filter_changes_update_processed_preview() {
        let (mut state, _dir) = state_with_image();
        let untouched = state.processed_preview.clone();

        state.selection = Some(FilterKind::Invert);
        state.add_selected_filter();
        assert_ne!(state.processed_preview, untouched);
        assert_eq!(state.original_preview.as_ref().map(|p| p.width), Some(400));

        let id = state.session.stack().entries()[0].id;
        state.remove_filter(id);
        assert_eq!(state.processed_preview, untouched);
    }

    #[test]
    fn view_snapshots_layout_and_stack() {
        let mut state = AppState::new(AppConfig {
            panel_width: 260,
            ..AppConfig::default()
        });
        state.selection = Some(FilterKind::Gamma);
        state.add_selected_filter();

        let view = state.view();
        assert_eq!(view.panel_width, 260);
        assert_eq!((view.pane_width, view.pane_height), (400, 400));
        assert_eq!(view.specs.len(), 1);
        assert_eq!(view.specs[0].kind, FilterKind::Gamma);
        assert!(view.original.is_none());
        assert!(view.processed.is_none());
    }

    #[test]
    fn failed_load_reports_and_keeps_image() {
        let (mut state, dir) = state_with_image();
        state.load_image(&dir.path().join("missing.png"));
        assert!(state.status.is_some());
        assert!(state.session.has_image());
        assert!(state.original_preview.is_some());
    }
}
