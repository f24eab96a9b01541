//! Analysis cards: scalar stats plus one bounded panel per list aggregate

use dioxus::prelude::*;
use shorts_core::{
    CorrelationStrength, Numbering, OverlayContent, Panel, PanelLine, dashboard_panels,
    scalar_stats,
};
use shorts_types::AnalysisAggregate;

use crate::state::use_dashboard;

#[component]
pub fn AnalysisDashboard(analysis: AnalysisAggregate) -> Element {
    let state = use_dashboard();
    let stats = scalar_stats(&analysis);
    let panels = dashboard_panels(&analysis, state.preview_limit);

    rsx! {
        section { class: "analysis",
            div { class: "stat-row",
                for stat in stats {
                    div { key: "{stat.label}", class: "stat-card",
                        span { class: "stat-label", "{stat.label}" }
                        span { class: "stat-value", "{stat.value}" }
                        if let Some(strength) = stat.strength {
                            span { class: strength_class(strength), "{strength.label()}" }
                        }
                    }
                }
            }
            div { class: "panel-grid",
                for panel in panels.iter() {
                    AnalysisCard { key: "{panel.title()}", panel: panel.clone() }
                }
            }
        }
    }
}

fn strength_class(strength: CorrelationStrength) -> &'static str {
    match strength {
        CorrelationStrength::VeryStrong => "strength strength-very-strong",
        CorrelationStrength::Strong => "strength strength-strong",
        CorrelationStrength::Weak => "strength strength-weak",
        CorrelationStrength::Negligible => "strength strength-negligible",
        CorrelationStrength::NotApplicable => "strength strength-na",
    }
}

/// One aggregate panel: inline preview and a "show more" control
#[component]
fn AnalysisCard(panel: Panel) -> Element {
    let mut state = use_dashboard();
    let overflow = panel.has_more().then(|| panel.clone());

    rsx! {
        div { class: "analysis-card",
            h3 { "{panel.title()}" }
            PanelLines { lines: panel.inline.clone(), numbering: panel.numbering() }
            if let Some(full) = overflow {
                button {
                    class: "btn btn-more",
                    onclick: move |_| {
                        state.open_overlay(full.title(), OverlayContent::PanelOverflow(full.clone()));
                    },
                    "Show more"
                }
            }
        }
    }
}

/// Panel lines with the panel's numbering. Used inline and in the overflow overlay.
#[component]
pub fn PanelLines(lines: Vec<PanelLine>, numbering: Numbering) -> Element {
    let items = rsx! {
        for (i, line) in lines.iter().enumerate() {
            li { key: "{i}", class: "panel-line",
                if let Some(rank) = line.rank {
                    span { class: "panel-rank", "{rank}." }
                }
                span { class: "panel-label", "{line.label}" }
                span { class: "panel-detail", "{line.detail}" }
            }
        }
    };

    match numbering {
        Numbering::Ordinal => rsx! { ol { class: "panel-list", {items} } },
        Numbering::Unordered => rsx! { ul { class: "panel-list", {items} } },
    }
}
