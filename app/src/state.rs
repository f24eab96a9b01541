//! Dashboard state shared through context.
//!
//! Each core state machine lives in its own signal. Only the handlers here
//! write to them, so every mutation goes through the core transitions.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use shorts_core::{
    AppConfig, Drilldowns, OverlayContent, OverlayEvent, OverlayId, OverlayStack,
    QueryController, SelectionState, VideoSource,
};
use shorts_types::{Period, Video};
use tracing::warn;

use crate::api::Backend;

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub selection: Signal<SelectionState>,
    pub controller: Signal<QueryController>,
    pub drilldowns: Signal<Drilldowns>,
    pub overlays: Signal<OverlayStack>,
    pub preview_limit: usize,
}

impl DashboardState {
    fn new(config: &AppConfig) -> Self {
        Self {
            selection: Signal::new(SelectionState::from_config(config)),
            controller: Signal::new(QueryController::new()),
            drilldowns: Signal::new(Drilldowns::new()),
            overlays: Signal::new(OverlayStack::new()),
            preview_limit: config.preview_limit,
        }
    }

    /// Apply a selection transition, writing the signal only on change
    fn update_selection(&mut self, transition: impl FnOnce(&mut SelectionState) -> bool) {
        let mut next = SelectionState::clone(&self.selection.peek());
        if transition(&mut next) {
            self.selection.set(next);
        }
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.update_selection(|s| s.toggle_category(category));
    }

    pub fn toggle_country(&mut self, country: &str) {
        self.update_selection(|s| s.toggle_country(country));
    }

    pub fn set_period_key(&mut self, key: &str) {
        match Period::from_key(key) {
            Some(period) => self.update_selection(|s| s.set_period(period)),
            None => warn!(key, "ignoring unknown period"),
        }
    }

    pub fn open_overlay(&mut self, title: impl Into<String>, content: OverlayContent) -> OverlayId {
        self.overlays.write().push(title, content)
    }

    /// Route a click on an overlay. Dismissed channel overlays drop their drilldown.
    pub fn overlay_event(&mut self, id: OverlayId, event: OverlayEvent) {
        let dismissed = self.overlays.write().handle(id, event);
        if let Some(overlay) = dismissed {
            self.drilldowns.write().on_overlay_dismissed(&overlay.content);
        }
    }

    /// Open the drilldown overlay for a video's channel and load it.
    pub fn open_channel(&mut self, video: &Video, backend: &Backend) {
        let Some(channel_id) = video.channel_key().map(str::to_string) else {
            warn!(video_id = %video.video_id, "video has no channel identifier");
            return;
        };

        let ticket = self.drilldowns.write().open(video.channel.clone(), channel_id);
        self.open_overlay(video.channel.clone(), OverlayContent::Channel(ticket.id()));

        // Owned by the root scope: the card that opened it unmounts whenever
        // the main view reloads.
        let source = backend.source.clone();
        let mut drilldowns = self.drilldowns;
        spawn_forever(async move {
            let outcome = source.fetch_channel_videos(ticket.channel_id()).await;
            drilldowns.write().resolve(&ticket, outcome);
        });
    }

    /// Open a nested overlay with one video's description.
    pub fn describe(&mut self, video: &Video) {
        let text = shorts_core::description_or_placeholder(video).to_string();
        self.open_overlay(video.title.clone(), OverlayContent::Description { text });
    }
}

/// Create the dashboard state at the app root.
pub fn use_dashboard_provider(config: &AppConfig) -> DashboardState {
    let config = config.clone();
    use_context_provider(move || DashboardState::new(&config))
}

/// Get the dashboard state from context.
pub fn use_dashboard() -> DashboardState {
    use_context::<DashboardState>()
}
