//! Stacked, independently dismissible overlays.
//!
//! An overlay only holds what it was opened with. Nothing survives dismissal:
//! reopening builds the content again from the owner's current data.

use tracing::debug;

use crate::aggregate::Panel;
use crate::drilldown::DrilldownId;

pub type OverlayId = u64;

/// What an overlay shows. Shared by the web and terminal front-ends.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayContent {
    /// Full list of an aggregate panel ("show more")
    PanelOverflow(Panel),
    /// A channel drilldown, rendered from the drilldown registry
    Channel(DrilldownId),
    /// Free-text description of a single video
    Description { text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<C> {
    pub id: OverlayId,
    pub title: String,
    pub content: C,
}

/// User interaction with an open overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    CloseButton,
    /// Click on the dimmed area around the overlay
    Backdrop,
    /// Click inside the overlay body; never dismisses
    Body,
}

/// Open overlays, bottom first.
#[derive(Debug, Clone)]
pub struct OverlayStack<C = OverlayContent> {
    entries: Vec<Overlay<C>>,
    next_id: OverlayId,
}

impl<C> Default for OverlayStack<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<C> OverlayStack<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new overlay on top of everything else
    pub fn push(&mut self, title: impl Into<String>, content: C) -> OverlayId {
        let id = self.next_id;
        self.next_id += 1;
        let title = title.into();
        debug!(id, %title, "overlay opened");
        self.entries.push(Overlay { id, title, content });
        id
    }

    /// Close one overlay, leaving the others untouched
    pub fn dismiss(&mut self, id: OverlayId) -> Option<Overlay<C>> {
        let pos = self.entries.iter().position(|o| o.id == id)?;
        debug!(id, "overlay dismissed");
        Some(self.entries.remove(pos))
    }

    /// Apply a user event. Returns the overlay if the event dismissed it.
    pub fn handle(&mut self, id: OverlayId, event: OverlayEvent) -> Option<Overlay<C>> {
        match event {
            OverlayEvent::CloseButton | OverlayEvent::Backdrop => self.dismiss(id),
            OverlayEvent::Body => None,
        }
    }

    pub fn top(&self) -> Option<&Overlay<C>> {
        self.entries.last()
    }

    pub fn get(&self, id: OverlayId) -> Option<&Overlay<C>> {
        self.entries.iter().find(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay<C>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
