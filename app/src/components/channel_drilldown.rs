//! Channel drilldown overlay body

use dioxus::prelude::*;
use shorts_core::aggregate::format::{format_count, truncate_title};
use shorts_core::{DrilldownId, DrilldownState};

use crate::state::use_dashboard;

#[component]
pub fn ChannelDrilldownView(id: DrilldownId) -> Element {
    let mut state = use_dashboard();
    let drilldowns = state.drilldowns.read();
    let Some(drilldown) = drilldowns.get(id) else {
        return rsx! {};
    };

    match drilldown.state() {
        DrilldownState::Loading => rsx! {
            div { class: "state-panel state-loading",
                div { class: "spinner" }
                p { "Loading videos from {drilldown.channel_title()}..." }
            }
        },
        DrilldownState::Failed { message } => rsx! {
            div { class: "state-panel state-error",
                p { "{message}" }
            }
        },
        DrilldownState::Ready(videos) if videos.is_empty() => rsx! {
            p { class: "hint", "This channel has no videos." }
        },
        DrilldownState::Ready(videos) => rsx! {
            table { class: "channel-table",
                thead {
                    tr {
                        th { "#" }
                        th { "Title" }
                        th { "Views" }
                        th { "Likes" }
                        th { "Published" }
                        th {}
                    }
                }
                tbody {
                    for (i, video) in videos.iter().enumerate() {
                        tr { key: "{video.video_id}",
                            td { "{i + 1}" }
                            td {
                                a {
                                    href: video.watch_url(),
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{truncate_title(&video.title, 50)}"
                                }
                            }
                            td { "{format_count(video.view_count)}" }
                            td { "{format_count(video.like_count)}" }
                            td { "{video.published_date()}" }
                            td {
                                button {
                                    class: "btn btn-small",
                                    onclick: {
                                        let video = video.clone();
                                        move |_| state.describe(&video)
                                    },
                                    "Description"
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}
