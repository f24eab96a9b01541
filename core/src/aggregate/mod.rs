//! Aggregate rendering model.
//!
//! Every list-shaped aggregate (ranked pairs, records, distribution entries)
//! goes through [`BoundedPreview`]: the first `limit` items render inline and
//! the full sequence is available for an overlay when it is longer than that.
//! Scalars bypass the pattern (see [`scalar`]).

pub mod format;
mod panels;
pub mod scalar;

pub use panels::dashboard_panels;
pub use scalar::{CorrelationStrength, ScalarStat, scalar_stats};

/// Inline items per panel unless configured otherwise
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Bounded Preview
// ─────────────────────────────────────────────────────────────────────────────

/// A non-empty sequence split into an inline preview and an optional overflow.
#[derive(Debug, Clone, Copy)]
pub struct BoundedPreview<'a, T> {
    items: &'a [T],
    limit: usize,
}

impl<'a, T> BoundedPreview<'a, T> {
    /// Returns `None` for an empty sequence; empty panels are not rendered at all.
    pub fn new(items: &'a [T], limit: usize) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, limit })
    }

    /// First `min(len, limit)` items
    pub fn inline(&self) -> &'a [T] {
        &self.items[..self.items.len().min(self.limit)]
    }

    /// The whole sequence in original order
    pub fn all(&self) -> &'a [T] {
        self.items
    }

    /// True iff the sequence is longer than the limit ("show more")
    pub fn has_more(&self) -> bool {
        self.items.len() > self.limit
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render_inline<R>(&self, render: impl FnMut(&T) -> R) -> Vec<R> {
        self.inline().iter().map(render).collect()
    }

    pub fn render_all<R>(&self, render: impl FnMut(&T) -> R) -> Vec<R> {
        self.items.iter().map(render).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Panels
// ─────────────────────────────────────────────────────────────────────────────

/// How list entries are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// Ranked aggregates, numbered from 1
    Ordinal,
    /// Associative aggregates (distributions)
    Unordered,
}

/// Every list panel the dashboard knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Keywords,
    ChannelsByVideoCount,
    ChannelsByAverageViews,
    UploadDays,
    UploadHours,
    Sentiment,
    TitlePatterns,
    Breakouts,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Keywords => "Popular Keywords",
            PanelKind::ChannelsByVideoCount => "Most Active Channels",
            PanelKind::ChannelsByAverageViews => "Top Channels by Average Views",
            PanelKind::UploadDays => "Popular Upload Days",
            PanelKind::UploadHours => "Popular Upload Hours",
            PanelKind::Sentiment => "Title Sentiment",
            PanelKind::TitlePatterns => "Title Patterns",
            PanelKind::Breakouts => "Breakout Videos",
        }
    }

    pub fn numbering(&self) -> Numbering {
        match self {
            PanelKind::Keywords
            | PanelKind::ChannelsByVideoCount
            | PanelKind::ChannelsByAverageViews
            | PanelKind::Breakouts => Numbering::Ordinal,
            PanelKind::UploadDays
            | PanelKind::UploadHours
            | PanelKind::Sentiment
            | PanelKind::TitlePatterns => Numbering::Unordered,
        }
    }
}

/// One rendered entry of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLine {
    /// 1-based rank for ordinal panels
    pub rank: Option<usize>,
    pub label: String,
    pub detail: String,
}

impl PanelLine {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            rank: None,
            label: label.into(),
            detail: detail.into(),
        }
    }
}

/// A rendered list panel: inline preview plus the full list when it overflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub kind: PanelKind,
    pub inline: Vec<PanelLine>,
    /// Full list in original order, present iff the input exceeds the limit
    pub overflow: Option<Vec<PanelLine>>,
}

impl Panel {
    /// Render `items` with one per-item renderer. `None` for empty input.
    pub fn build<T>(
        kind: PanelKind,
        items: &[T],
        limit: usize,
        render: impl Fn(&T) -> PanelLine,
    ) -> Option<Panel> {
        let preview = BoundedPreview::new(items, limit)?;
        let numbering = kind.numbering();
        let numbered = |(i, item): (usize, &T)| {
            let mut line = render(item);
            line.rank = match numbering {
                Numbering::Ordinal => Some(i + 1),
                Numbering::Unordered => None,
            };
            line
        };

        let inline = preview.inline().iter().enumerate().map(numbered).collect();
        let overflow = preview
            .has_more()
            .then(|| preview.all().iter().enumerate().map(numbered).collect());

        Some(Panel {
            kind,
            inline,
            overflow,
        })
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn numbering(&self) -> Numbering {
        self.kind.numbering()
    }

    pub fn has_more(&self) -> bool {
        self.overflow.is_some()
    }

    /// Every line, for the overlay
    pub fn full(&self) -> &[PanelLine] {
        self.overflow.as_deref().unwrap_or(&self.inline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn keywords(n: usize) -> Vec<(String, u64)> {
        (0..n).map(|i| (format!("kw{i}"), (100 - i) as u64)).collect()
    }

    fn keyword_line((word, count): &(String, u64)) -> PanelLine {
        PanelLine::new(word.clone(), format!("{count} times"))
    }

    #[test]
    fn twelve_keywords_with_limit_five() {
        let items = keywords(12);
        let panel = Panel::build(PanelKind::Keywords, &items, 5, keyword_line).unwrap();

        let inline: Vec<&str> = panel.inline.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(inline, vec!["kw0", "kw1", "kw2", "kw3", "kw4"]);
        assert!(panel.has_more());

        let full = panel.full();
        assert_eq!(full.len(), 12);
        for (i, line) in full.iter().enumerate() {
            assert_eq!(line.label, format!("kw{i}"));
            assert_eq!(line.rank, Some(i + 1));
        }
    }

    #[test]
    fn short_list_has_no_overflow() {
        let items = keywords(5);
        let panel = Panel::build(PanelKind::Keywords, &items, 5, keyword_line).unwrap();
        assert_eq!(panel.inline.len(), 5);
        assert!(!panel.has_more());
        assert_eq!(panel.full(), panel.inline.as_slice());
    }

    #[test]
    fn empty_input_omits_the_panel() {
        let items: Vec<(String, u64)> = vec![];
        assert!(Panel::build(PanelKind::Keywords, &items, 5, keyword_line).is_none());
        assert!(BoundedPreview::new(&items, 5).is_none());
    }

    #[test]
    fn distributions_are_unnumbered() {
        let items = vec![("Monday".to_string(), 4u64), ("Friday".to_string(), 2)];
        let panel = Panel::build(PanelKind::UploadDays, &items, 5, |(day, n)| {
            PanelLine::new(day.clone(), format!("{n} videos"))
        })
        .unwrap();
        assert!(panel.inline.iter().all(|l| l.rank.is_none()));
        assert_eq!(panel.numbering(), Numbering::Unordered);
    }

    #[test]
    fn render_helpers_share_one_renderer() {
        let items = [3, 1, 4, 1, 5, 9, 2];
        let preview = BoundedPreview::new(&items, 3).unwrap();
        let render = |n: &i32| n * 10;
        assert_eq!(preview.render_inline(render), vec![30, 10, 40]);
        assert_eq!(preview.render_all(render), vec![30, 10, 40, 10, 50, 90, 20]);
    }

    proptest! {
        #[test]
        fn overflow_law(len in 1usize..40, limit in 1usize..12) {
            let items: Vec<usize> = (0..len).collect();
            let preview = BoundedPreview::new(&items, limit).unwrap();
            prop_assert_eq!(preview.inline().len(), len.min(limit));
            prop_assert_eq!(preview.has_more(), len > limit);
            prop_assert_eq!(preview.all(), items.as_slice());

            let panel = Panel::build(PanelKind::Breakouts, &items, limit, |n| {
                PanelLine::new(n.to_string(), "")
            }).unwrap();
            prop_assert_eq!(panel.inline.len(), len.min(limit));
            prop_assert_eq!(panel.has_more(), len > limit);
            let labels: Vec<String> = panel.full().iter().map(|l| l.label.clone()).collect();
            let expected: Vec<String> = items.iter().map(|n| n.to_string()).collect();
            prop_assert_eq!(labels, expected);
        }
    }
}
