use dioxus::prelude::*;
use shorts_core::{DashboardView, VideoSource};

use crate::api::{self, Backend};
use crate::components::{AnalysisDashboard, FilterBar, OverlayHost, VideoGrid};
use crate::state::{use_dashboard, use_dashboard_provider};

static CSS: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let backend = use_hook(api::resolve_backend);

    rsx! {
        document::Stylesheet { href: CSS }
        match backend {
            Ok(backend) => rsx! { DashboardRoot { backend } },
            Err(message) => rsx! {
                div { class: "state-panel state-error",
                    h2 { "Configuration error" }
                    p { "{message}" }
                }
            },
        }
    }
}

#[component]
fn DashboardRoot(backend: Backend) -> Element {
    use_context_provider(|| backend.clone());
    let state = use_dashboard_provider(&backend.config);
    let selection = state.selection;
    let mut controller = state.controller;

    // Every selection change (and the first mount) issues a query; the
    // controller skips it when the derived query did not change.
    let source = backend.source.clone();
    use_effect(move || {
        let snapshot = selection();
        let Some(ticket) = controller.write().observe(&snapshot) else {
            return;
        };
        let source = source.clone();
        spawn(async move {
            let outcome = source.fetch_videos(ticket.query()).await;
            controller.write().complete(&ticket, outcome);
        });
    });

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                h1 { "Shorts Trend Analysis" }
            }
            FilterBar {}
            main { class: "dashboard-body", MainView {} }
        }
        OverlayHost {}
    }
}

/// Busy, error, empty or loaded content for the current query.
#[component]
fn MainView() -> Element {
    let state = use_dashboard();
    let controller = state.controller.read();

    match controller.view() {
        DashboardView::Idle => rsx! {},
        DashboardView::Loading { categories_label } => rsx! {
            div { class: "state-panel state-loading",
                div { class: "spinner" }
                p { "Analyzing {categories_label} videos..." }
            }
        },
        DashboardView::Failed { message } => rsx! {
            div { class: "state-panel state-error",
                i { class: "fa-solid fa-triangle-exclamation" }
                p { "{message}" }
            }
        },
        DashboardView::Empty { categories_label } => rsx! {
            div { class: "state-panel state-empty",
                p { "No videos found for {categories_label} with the selected countries and period." }
            }
        },
        DashboardView::Ready(result) => rsx! {
            AnalysisDashboard { analysis: result.analysis.clone() }
            VideoGrid { videos: result.videos.clone() }
        },
    }
}
