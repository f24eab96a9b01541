//! Channel drilldowns: a secondary query flow per channel, independent of the
//! main dashboard query.
//!
//! Each drilldown opens in `Loading` bound to the channel's display name and
//! is resolved exactly once. Closing a drilldown destroys its state; a
//! response arriving afterwards is dropped.

use std::collections::BTreeMap;

use shorts_types::Video;
use tracing::{debug, info, warn};

use crate::overlay::OverlayContent;
use crate::query::{FetchError, sort_by_view_count};

pub type DrilldownId = u64;

/// Overlay title shown in place of the channel name after a failed load
pub const FAILED_TITLE: &str = "Could not load channel videos";

/// Shown for videos without a description
pub const NO_DESCRIPTION: &str = "No description available.";

/// The description text to show for a video, or the placeholder.
pub fn description_or_placeholder(video: &Video) -> &str {
    video
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION)
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrilldownState {
    Loading,
    /// Channel videos, most viewed first
    Ready(Vec<Video>),
    Failed { message: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDrilldown {
    id: DrilldownId,
    channel_title: String,
    channel_id: String,
    state: DrilldownState,
}

impl ChannelDrilldown {
    pub fn id(&self) -> DrilldownId {
        self.id
    }

    pub fn channel_title(&self) -> &str {
        &self.channel_title
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn state(&self) -> &DrilldownState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DrilldownState::Loading)
    }

    /// Overlay title: the channel name, or the failure title
    pub fn title(&self) -> &str {
        match self.state {
            DrilldownState::Failed { .. } => FAILED_TITLE,
            _ => &self.channel_title,
        }
    }

    /// Loaded videos; empty while loading or after a failure
    pub fn videos(&self) -> &[Video] {
        match &self.state {
            DrilldownState::Ready(videos) => videos,
            _ => &[],
        }
    }

    /// Video at a 1-based table row
    pub fn row(&self, row: usize) -> Option<&Video> {
        row.checked_sub(1).and_then(|i| self.videos().get(i))
    }
}

/// Handle for one channel request. Hand it back to [`Drilldowns::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTicket {
    id: DrilldownId,
    channel_id: String,
}

impl ChannelTicket {
    pub fn id(&self) -> DrilldownId {
        self.id
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }
}

/// Every open drilldown, keyed by id.
#[derive(Debug, Clone)]
pub struct Drilldowns {
    open: BTreeMap<DrilldownId, ChannelDrilldown>,
    next_id: DrilldownId,
}

impl Default for Drilldowns {
    fn default() -> Self {
        Self {
            open: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Drilldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a drilldown in `Loading` before any request is made.
    pub fn open(
        &mut self,
        channel_title: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> ChannelTicket {
        let id = self.next_id;
        self.next_id += 1;
        let channel_title = channel_title.into();
        let channel_id = channel_id.into();
        debug!(id, %channel_id, channel = %channel_title, "opening channel drilldown");

        self.open.insert(
            id,
            ChannelDrilldown {
                id,
                channel_title,
                channel_id: channel_id.clone(),
                state: DrilldownState::Loading,
            },
        );
        ChannelTicket { id, channel_id }
    }

    /// Apply a channel response. Returns false when the drilldown was closed
    /// or already resolved.
    pub fn resolve(
        &mut self,
        ticket: &ChannelTicket,
        outcome: Result<Vec<Video>, FetchError>,
    ) -> bool {
        let Some(drilldown) = self.open.get_mut(&ticket.id) else {
            debug!(id = ticket.id, "discarding response for closed drilldown");
            return false;
        };
        if !drilldown.is_loading() {
            debug!(id = ticket.id, "drilldown already resolved");
            return false;
        }

        drilldown.state = match outcome {
            Ok(mut videos) => {
                sort_by_view_count(&mut videos);
                info!(id = ticket.id, videos = videos.len(), "channel videos loaded");
                DrilldownState::Ready(videos)
            }
            Err(err) => {
                warn!(
                    id = ticket.id,
                    channel_id = %ticket.channel_id,
                    error = %err,
                    "channel videos failed"
                );
                DrilldownState::Failed {
                    message: err.user_message(),
                }
            }
        };
        true
    }

    pub fn close(&mut self, id: DrilldownId) -> Option<ChannelDrilldown> {
        let closed = self.open.remove(&id);
        if closed.is_some() {
            debug!(id, "channel drilldown closed");
        }
        closed
    }

    /// Drop the drilldown backing a dismissed overlay, if any.
    pub fn on_overlay_dismissed(&mut self, content: &OverlayContent) {
        if let OverlayContent::Channel(id) = content {
            self.close(*id);
        }
    }

    pub fn get(&self, id: DrilldownId) -> Option<&ChannelDrilldown> {
        self.open.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelDrilldown> {
        self.open.values()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::VideoSource;
    use crate::overlay::OverlayStack;
    use crate::query::QueryController;
    use crate::selection::SelectionState;
    use crate::testing::{ScriptedSource, http_error, response, video};

    #[test]
    fn opens_in_loading_with_channel_title() {
        let mut drilldowns = Drilldowns::new();
        let ticket = drilldowns.open("Alpha", "UCalpha");
        let d = drilldowns.get(ticket.id()).unwrap();
        assert!(d.is_loading());
        assert_eq!(d.title(), "Alpha");
        assert!(d.videos().is_empty());
        assert_eq!(ticket.channel_id(), "UCalpha");
    }

    #[test]
    fn success_sorts_by_views() {
        let mut drilldowns = Drilldowns::new();
        let ticket = drilldowns.open("Alpha", "UCalpha");
        let videos = vec![video("a", 10), video("b", 300), video("c", 20)];
        assert!(drilldowns.resolve(&ticket, Ok(videos)));

        let d = drilldowns.get(ticket.id()).unwrap();
        let views: Vec<u64> = d.videos().iter().map(|v| v.view_count).collect();
        assert_eq!(views, vec![300, 20, 10]);
        assert_eq!(d.row(1).map(|v| v.video_id.as_str()), Some("b"));
        assert!(d.row(0).is_none());
        assert!(d.row(4).is_none());
    }

    #[test]
    fn failure_replaces_title() {
        let mut drilldowns = Drilldowns::new();
        let ticket = drilldowns.open("Alpha", "UCalpha");
        assert!(drilldowns.resolve(&ticket, Err(http_error(500))));

        let d = drilldowns.get(ticket.id()).unwrap();
        assert_eq!(d.title(), FAILED_TITLE);
        assert_eq!(
            d.state(),
            &DrilldownState::Failed {
                message: FetchError::USER_MESSAGE
            }
        );
    }

    #[test]
    fn late_responses_are_ignored() {
        let mut drilldowns = Drilldowns::new();
        let ticket = drilldowns.open("Alpha", "UCalpha");
        drilldowns.close(ticket.id());
        assert!(!drilldowns.resolve(&ticket, Ok(vec![video("a", 1)])));
        assert!(drilldowns.is_empty());

        let ticket = drilldowns.open("Beta", "UCbeta");
        assert!(drilldowns.resolve(&ticket, Err(http_error(404))));
        assert!(!drilldowns.resolve(&ticket, Ok(vec![video("b", 1)])));
        assert_eq!(drilldowns.get(ticket.id()).unwrap().title(), FAILED_TITLE);
    }

    #[test]
    fn dismissing_the_overlay_destroys_the_drilldown() {
        let mut drilldowns = Drilldowns::new();
        let mut overlays = OverlayStack::new();
        let ticket = drilldowns.open("Alpha", "UCalpha");
        let overlay = overlays.push("Alpha", OverlayContent::Channel(ticket.id()));

        let dismissed = overlays.dismiss(overlay).unwrap();
        drilldowns.on_overlay_dismissed(&dismissed.content);
        assert!(drilldowns.get(ticket.id()).is_none());
    }

    #[test]
    fn description_placeholder() {
        let mut v = video("a", 1);
        assert_eq!(description_or_placeholder(&v), NO_DESCRIPTION);
        v.description = Some("   ".into());
        assert_eq!(description_or_placeholder(&v), NO_DESCRIPTION);
        v.description = Some("Behind the scenes".into());
        assert_eq!(description_or_placeholder(&v), "Behind the scenes");
    }

    #[tokio::test]
    async fn drilldown_does_not_touch_the_main_query() {
        let source = ScriptedSource::default();
        source.push_videos(Ok(response(&[10, 20])));
        source.push_channel(Err(http_error(502)));

        let selection = SelectionState::default();
        let mut controller = QueryController::new();
        let mut drilldowns = Drilldowns::new();

        let main = controller.observe(&selection).unwrap();
        let channel = drilldowns.open("Alpha", "UCalpha");

        let (main_outcome, channel_outcome) = tokio::join!(
            source.fetch_videos(main.query()),
            source.fetch_channel_videos(channel.channel_id()),
        );
        drilldowns.resolve(&channel, channel_outcome);
        controller.complete(&main, main_outcome);

        assert_eq!(controller.result().map(|r| r.videos.len()), Some(2));
        assert_eq!(drilldowns.get(channel.id()).unwrap().title(), FAILED_TITLE);
        assert_eq!(source.channel_requests.borrow().as_slice(), ["UCalpha"]);
        assert_eq!(selection, SelectionState::default());
    }

    #[tokio::test]
    async fn drilldown_resolves_after_main_query_reloads() {
        let source = ScriptedSource::default();
        source.push_videos(Ok(response(&[10, 20])));
        source.push_channel(Ok(vec![video("a", 1), video("b", 7)]));
        source.push_videos(Ok(response(&[30])));

        let mut selection = SelectionState::default();
        let mut controller = QueryController::new();
        let mut drilldowns = Drilldowns::new();

        let first = controller.observe(&selection).unwrap();
        let outcome = source.fetch_videos(first.query()).await;
        controller.complete(&first, outcome);
        let channel = drilldowns.open("Alpha", "UCalpha");

        // A facet change while the channel request is in flight
        assert!(selection.toggle_category("news"));
        let second = controller.observe(&selection).unwrap();
        assert!(controller.is_loading());

        let channel_outcome = source.fetch_channel_videos(channel.channel_id()).await;
        assert!(drilldowns.resolve(&channel, channel_outcome));
        let outcome = source.fetch_videos(second.query()).await;
        controller.complete(&second, outcome);

        let d = drilldowns.get(channel.id()).unwrap();
        assert_eq!(d.title(), "Alpha");
        assert_eq!(d.row(1).map(|v| v.video_id.as_str()), Some("b"));
        assert_eq!(controller.result().map(|r| r.videos.len()), Some(1));
    }

    #[test]
    fn concurrent_drilldowns_resolve_independently() {
        let mut drilldowns = Drilldowns::new();
        let a = drilldowns.open("Alpha", "UCalpha");
        let b = drilldowns.open("Beta", "UCbeta");
        drilldowns.resolve(&b, Ok(vec![video("b", 5)]));

        assert!(drilldowns.get(a.id()).unwrap().is_loading());
        assert_eq!(drilldowns.get(b.id()).unwrap().videos().len(), 1);
        assert_eq!(drilldowns.len(), 2);
    }
}
