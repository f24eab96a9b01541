//! Stacked overlays. Each overlay sits on its own backdrop; clicks inside the
//! body stop propagation so only the backdrop and close button dismiss.

use dioxus::prelude::*;
use shorts_core::{Drilldowns, Overlay, OverlayContent, OverlayEvent};

use super::{ChannelDrilldownView, PanelLines};
use crate::state::use_dashboard;

const BASE_Z_INDEX: usize = 100;

#[component]
pub fn OverlayHost() -> Element {
    let mut state = use_dashboard();
    let overlays = state.overlays.read();
    let drilldowns = state.drilldowns.read();

    rsx! {
        for (depth, overlay) in overlays.iter().enumerate() {
            div {
                key: "{overlay.id}",
                class: "modal-backdrop",
                style: "z-index: {BASE_Z_INDEX + depth};",
                onclick: {
                    let id = overlay.id;
                    move |_| state.overlay_event(id, OverlayEvent::Backdrop)
                },
                div {
                    class: "modal-content",
                    onclick: move |e| e.stop_propagation(),
                    div { class: "modal-header",
                        h3 { "{overlay_title(overlay, &drilldowns)}" }
                        button {
                            class: "btn btn-close",
                            onclick: {
                                let id = overlay.id;
                                move |e: MouseEvent| {
                                    e.stop_propagation();
                                    state.overlay_event(id, OverlayEvent::CloseButton);
                                }
                            },
                            "X"
                        }
                    }
                    div { class: "modal-body",
                        match &overlay.content {
                            OverlayContent::PanelOverflow(panel) => rsx! {
                                PanelLines { lines: panel.full().to_vec(), numbering: panel.numbering() }
                            },
                            OverlayContent::Channel(drilldown) => rsx! {
                                ChannelDrilldownView { id: *drilldown }
                            },
                            OverlayContent::Description { text } => rsx! {
                                p { class: "video-description", "{text}" }
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Channel overlays follow their drilldown's title, which changes on failure
fn overlay_title(overlay: &Overlay<OverlayContent>, drilldowns: &Drilldowns) -> String {
    match &overlay.content {
        OverlayContent::Channel(id) => drilldowns
            .get(*id)
            .map(|d| d.title().to_string())
            .unwrap_or_else(|| overlay.title.clone()),
        _ => overlay.title.clone(),
    }
}
