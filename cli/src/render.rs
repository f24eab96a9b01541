//! Plain-text rendering of dashboard state

use std::fmt::Write;

use shorts_core::aggregate::format::{format_count, truncate_title};
use shorts_core::{
    DashboardView, Drilldowns, Numbering, Overlay, OverlayContent, Panel, PanelLine, ScalarStat,
    SelectionState,
};
use shorts_types::{Video, country_name};

const TITLE_CHARS: usize = 50;

pub fn selection(selection: &SelectionState) -> String {
    let countries: Vec<String> = selection
        .countries()
        .iter()
        .map(|code| format!("{code} ({})", country_name(code)))
        .collect();
    format!(
        "Categories: {}\nCountries:  {}\nPeriod:     {}\n",
        selection.categories_label(),
        countries.join(", "),
        selection.period().label()
    )
}

pub fn view(view: &DashboardView<'_>, preview_limit: usize) -> String {
    match view {
        DashboardView::Idle => "No query issued yet.\n".to_string(),
        DashboardView::Loading { categories_label } => {
            format!("Analyzing {categories_label} videos...\n")
        }
        DashboardView::Failed { message } => format!("error: {message}\n"),
        DashboardView::Empty { categories_label } => format!(
            "No videos found for {categories_label} with the selected countries and period.\n"
        ),
        DashboardView::Ready(result) => {
            let panels = shorts_core::dashboard_panels(&result.analysis, preview_limit);
            format!(
                "{} videos, {} analysis panels. Use `videos` or `panels`.\n",
                result.videos.len(),
                panels.len()
            )
        }
    }
}

/// Numbered video list, most viewed first
pub fn videos(videos: &[Video]) -> String {
    let mut out = String::new();
    for (i, video) in videos.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, truncate_title(&video.title, TITLE_CHARS));
        let _ = writeln!(
            out,
            "     {} · {} views · {} likes · {:.2}% · {}",
            video.channel,
            format_count(video.view_count),
            format_count(video.like_count),
            video.like_to_view_ratio,
            video.published_date()
        );
        let _ = writeln!(out, "     {}", video.watch_url());
    }
    out
}

pub fn stats(stats: &[ScalarStat]) -> String {
    let mut out = String::new();
    for stat in stats {
        match stat.strength {
            Some(strength) => {
                let _ = writeln!(out, "{}: {} ({})", stat.label, stat.value, strength.label());
            }
            None => {
                let _ = writeln!(out, "{}: {}", stat.label, stat.value);
            }
        }
    }
    out
}

pub fn lines(lines: &[PanelLine], numbering: Numbering) -> String {
    let mut out = String::new();
    for line in lines {
        let marker = match (numbering, line.rank) {
            (Numbering::Ordinal, Some(rank)) => format!("{rank:>2}."),
            _ => " -".to_string(),
        };
        let _ = writeln!(out, "  {marker} {}  {}", line.label, line.detail);
    }
    out
}

/// Panel with its inline preview. `number` is the 1-based index used by `more`.
pub fn panel(number: usize, panel: &Panel) -> String {
    let mut out = format!("[{number}] {}\n", panel.title());
    out.push_str(&lines(&panel.inline, panel.numbering()));
    if panel.has_more() {
        let hidden = panel.full().len() - panel.inline.len();
        let _ = writeln!(out, "  ... {hidden} more (`more {number}`)");
    }
    out
}

/// Title shown for an overlay; channel overlays follow their drilldown
pub fn overlay_title(overlay: &Overlay<OverlayContent>, drilldowns: &Drilldowns) -> String {
    match &overlay.content {
        OverlayContent::Channel(id) => drilldowns
            .get(*id)
            .map(|d| d.title().to_string())
            .unwrap_or_else(|| overlay.title.clone()),
        _ => overlay.title.clone(),
    }
}

pub fn overlay(overlay: &Overlay<OverlayContent>, drilldowns: &Drilldowns) -> String {
    let mut out = format!(
        "== [#{}] {} ==\n",
        overlay.id,
        overlay_title(overlay, drilldowns)
    );

    match &overlay.content {
        OverlayContent::PanelOverflow(panel) => {
            out.push_str(&lines(panel.full(), panel.numbering()));
        }
        OverlayContent::Description { text } => {
            out.push_str(text);
            out.push('\n');
        }
        OverlayContent::Channel(id) => match drilldowns.get(*id) {
            None => out.push_str("(closed)\n"),
            Some(d) if d.is_loading() => {
                let _ = writeln!(out, "Loading videos from {}...", d.channel_title());
            }
            Some(d) => match d.state() {
                shorts_core::DrilldownState::Failed { message } => {
                    let _ = writeln!(out, "{message}");
                }
                _ if d.videos().is_empty() => out.push_str("This channel has no videos.\n"),
                _ => {
                    for (i, video) in d.videos().iter().enumerate() {
                        let _ = writeln!(
                            out,
                            "{:>3}. {}  {} views  {} likes  {}",
                            i + 1,
                            truncate_title(&video.title, TITLE_CHARS),
                            format_count(video.view_count),
                            format_count(video.like_count),
                            video.published_date()
                        );
                    }
                    let _ = writeln!(out, "(`describe {id} <row>` shows a description)");
                }
            },
        },
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shorts_core::{OverlayStack, PanelKind};
    use shorts_types::AppConfig;

    fn video(id: &str, title: &str, views: u64) -> Video {
        Video {
            video_id: id.to_string(),
            title: title.to_string(),
            channel: "Alpha".to_string(),
            channel_id: "UCalpha".to_string(),
            channel_url: String::new(),
            view_count: views,
            like_count: views / 20,
            published_at: "2024-03-09T12:00:00Z".to_string(),
            like_to_view_ratio: 5.0,
            description: None,
        }
    }

    #[test]
    fn selection_summary_names_countries() {
        let state = SelectionState::from_config(&AppConfig::default());
        let text = selection(&state);
        assert!(text.contains("Categories: popular"));
        assert!(text.contains("KR ("));
    }

    #[test]
    fn video_rows_truncate_and_compact() {
        let long = "x".repeat(60);
        let text = videos(&[video("a", &long, 1_500_000)]);
        assert!(text.contains(&format!("  1. {}...", "x".repeat(50))));
        assert!(text.contains("1.5M views · 75K likes · 5.00% · 2024-03-09"));
        assert!(text.contains("https://www.youtube.com/shorts/a"));
    }

    #[test]
    fn panel_preview_mentions_overflow() {
        let items: Vec<(String, u64)> = (0..7).map(|i| (format!("kw{i}"), 10)).collect();
        let p = Panel::build(PanelKind::Keywords, &items, 5, |(w, n)| {
            PanelLine::new(w.clone(), format!("{n} times"))
        })
        .unwrap();
        let text = panel(2, &p);
        assert!(text.starts_with("[2] Popular Keywords\n"));
        assert!(text.contains(" 1. kw0  10 times"));
        assert!(!text.contains("kw5"));
        assert!(text.contains("... 2 more (`more 2`)"));
    }

    #[test]
    fn channel_overlay_follows_drilldown_state() {
        let mut drilldowns = Drilldowns::new();
        let mut overlays = OverlayStack::new();
        let ticket = drilldowns.open("Alpha", "UCalpha");
        let id = overlays.push("Alpha", OverlayContent::Channel(ticket.id()));

        let loading = overlay(overlays.get(id).unwrap(), &drilldowns);
        assert!(loading.contains("Loading videos from Alpha..."));

        drilldowns.resolve(&ticket, Ok(vec![video("a", "first", 10), video("b", "second", 90)]));
        let ready = overlay(overlays.get(id).unwrap(), &drilldowns);
        assert!(ready.contains("  1. second  90 views"));
        assert!(ready.contains(&format!("`describe {} <row>`", ticket.id())));
    }
}
