// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filter stack — the ordered list of enhancements applied to the original
// image.
//
// Entries compose left to right, so order matters and duplicates are allowed.
// The stack only ever grows at the end; entries leave it by explicit removal.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::types::{DEFAULT_INTENSITY, FilterId, FilterKind, FilterSpec, clamp_intensity};

/// Ordered sequence of [`FilterSpec`] records owned by one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStack {
    entries: Vec<FilterSpec>,
}

impl FilterStack {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutation -------------------------------------------------------------

    /// Append `kind` at the default intensity and return the new entry's id.
    pub fn append(&mut self, kind: FilterKind) -> FilterId {
        self.append_with_intensity(kind, DEFAULT_INTENSITY as i32)
    }

    /// Append `kind` with an explicit intensity (clamped to 1..=100).
    pub fn append_with_intensity(&mut self, kind: FilterKind, intensity: i32) -> FilterId {
        let spec = FilterSpec::new(kind, intensity);
        let id = spec.id;
        info!(filter = %kind, intensity = spec.intensity, position = self.entries.len(), "Filter added");
        self.entries.push(spec);
        id
    }

    /// Append whatever the filter menu currently has selected, at
    /// `intensity`.
    ///
    /// `None` is the menu's "no selection" placeholder and leaves the stack
    /// untouched.
    pub fn append_selected(
        &mut self,
        selection: Option<FilterKind>,
        intensity: i32,
    ) -> Option<FilterId> {
        match selection {
            Some(kind) => Some(self.append_with_intensity(kind, intensity)),
            None => {
                debug!("No filter selected, nothing appended");
                None
            }
        }
    }

    /// Remove the entry with `id`. Returns `false` if it was not in the stack.
    pub fn remove(&mut self, id: FilterId) -> bool {
        match self.entries.iter().position(|spec| spec.id == id) {
            Some(index) => {
                let spec = self.entries.remove(index);
                info!(filter = %spec.kind, position = index, "Filter removed");
                true
            }
            None => {
                debug!(%id, "Filter not in stack, nothing removed");
                false
            }
        }
    }

    /// Change the intensity of the entry with `id`, clamping `value` to
    /// 1..=100. Returns `false` if the entry is not in the stack.
    pub fn set_intensity(&mut self, id: FilterId, value: i32) -> bool {
        match self.entries.iter_mut().find(|spec| spec.id == id) {
            Some(spec) => {
                spec.intensity = clamp_intensity(value);
                debug!(filter = %spec.kind, intensity = spec.intensity, "Intensity changed");
                true
            }
            None => false,
        }
    }

    // -- Accessors ------------------------------------------------------------

    /// Owned snapshot of the entries in application order.
    pub fn entries(&self) -> Vec<FilterSpec> {
        self.entries.clone()
    }

    /// Iterate entries in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilterSpec> {
        self.entries.iter()
    }

    pub fn get(&self, id: FilterId) -> Option<&FilterSpec> {
        self.entries.iter().find(|spec| spec.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
