// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editor page — load an image, stack enhancements, compare before and after.

use dioxus::prelude::*;

use enhancer_core::human_errors::Severity;
use enhancer_core::{FilterKind, FilterSpec, MAX_INTENSITY, MIN_INTENSITY, SourceFormat};
use enhancer_imaging::Preview;

use crate::state::{AppState, EditorView};

/// Menu entry shown while no enhancement is chosen.
const NO_SELECTION: &str = "Select an enhancement";

const BUTTON_STYLE: &str = "background-color: #4CAF50; color: #FFFFFF; border: none; border-radius: 5px; padding: 8px 14px; cursor: pointer;";
const CONTROL_STYLE: &str = "background-color: #3E3E3E; color: #FFFFFF; border: 1px solid #555; border-radius: 5px; padding: 6px 8px;";

#[component]
pub fn Editor() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let EditorView {
        original,
        processed,
        specs,
        status,
        pane_width,
        pane_height,
        panel_width,
    } = state.read().view();

    rsx! {
        div { style: "display: flex; height: 100vh; margin: 0; background-color: #2E2E2E; color: #FFFFFF; font-family: system-ui, sans-serif;",
            // Main area: controls, image panes, status
            div { style: "flex: 1; display: flex; flex-direction: column; gap: 12px; padding: 16px;",
                div { style: "display: flex; gap: 8px; align-items: center;",
                    button {
                        style: BUTTON_STYLE,
                        onclick: move |_| {
                            #[cfg(not(any(target_os = "ios", target_os = "android")))]
                            {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("Images", &SourceFormat::EXTENSIONS)
                                    .pick_file()
                                {
                                    state.write().load_image(&path);
                                }
                            }
                        },
                        "Load Image"
                    }
                    select {
                        style: CONTROL_STYLE,
                        onchange: move |evt| {
                            state.write().selection = FilterKind::from_label(&evt.value());
                        },
                        option { value: "", "{NO_SELECTION}" }
                        for kind in FilterKind::ALL {
                            option { value: kind.label(), "{kind.label()}" }
                        }
                    }
                    button {
                        style: BUTTON_STYLE,
                        onclick: move |_| state.write().add_selected_filter(),
                        "Add Enhancement"
                    }
                }

                div { style: "display: flex; gap: 16px; flex: 1;",
                    PreviewPane { title: "Original Image", preview: original, width: pane_width, height: pane_height }
                    PreviewPane { title: "Processed Image", preview: processed, width: pane_width, height: pane_height }
                }

                if let Some(err) = status {
                    p {
                        style: "margin: 0; color: {severity_colour(err.severity)};",
                        "{err.message} {err.suggestion}"
                    }
                }
            }

            // Side panel: one row per applied enhancement, in stack order
            div { style: "width: {panel_width}px; background-color: #3E3E3E; padding: 16px; overflow-y: auto;",
                h3 { style: "margin-top: 0;", "Applied Enhancements" }
                if specs.is_empty() {
                    p { style: "color: #aaa;", "No enhancements applied." }
                }
                for spec in specs {
                    FilterRow { key: "{spec.id}", spec: spec.clone() }
                }
            }
        }
    }
}

/// One labelled image pane. Empty until an image has been loaded.
#[component]
fn PreviewPane(title: &'static str, preview: Option<Preview>, width: u32, height: u32) -> Element {
    rsx! {
        div { style: "flex: 1; display: flex; flex-direction: column; align-items: center; gap: 8px;",
            h4 { style: "margin: 0;", "{title}" }
            div { style: "min-width: {width}px; min-height: {height}px; display: flex; align-items: center; justify-content: center; background-color: #3E3E3E; border-radius: 5px;",
                if let Some(preview) = preview {
                    img {
                        src: "{preview.data_url}",
                        width: "{preview.width}",
                        height: "{preview.height}",
                        alt: "{title}",
                    }
                }
            }
        }
    }
}

/// Label, intensity slider, and remove button for a single stack entry.
#[component]
fn FilterRow(spec: FilterSpec) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let id = spec.id;

    rsx! {
        div { style: "display: flex; align-items: center; gap: 8px; padding: 8px 0; border-bottom: 1px solid #555;",
            span { style: "flex: 1;", "{spec.kind}" }
            if spec.kind.uses_intensity() {
                input {
                    r#type: "range",
                    style: "width: 100px;",
                    min: "{MIN_INTENSITY}",
                    max: "{MAX_INTENSITY}",
                    value: "{spec.intensity}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<i32>() {
                            state.write().set_intensity(id, value);
                        }
                    },
                }
            }
            button {
                style: "{CONTROL_STYLE} cursor: pointer;",
                onclick: move |_| state.write().remove_filter(id),
                "Remove"
            }
        }
    }
}

fn severity_colour(severity: Severity) -> &'static str {
    match severity {
        Severity::ActionRequired => "#ffb74d",
        Severity::Internal => "#ef5350",
    }
}
