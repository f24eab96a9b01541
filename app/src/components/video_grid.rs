//! Video cards for the current result, most viewed first

use dioxus::prelude::*;
use shorts_core::aggregate::format::{format_count, truncate_title};
use shorts_types::Video;

use crate::api::Backend;
use crate::state::use_dashboard;

const CARD_TITLE_CHARS: usize = 50;

#[component]
pub fn VideoGrid(videos: Vec<Video>) -> Element {
    rsx! {
        section { class: "video-section",
            h2 { "Videos ({videos.len()})" }
            div { class: "video-grid",
                for video in videos.iter() {
                    VideoCard { key: "{video.video_id}", video: video.clone() }
                }
            }
        }
    }
}

#[component]
fn VideoCard(video: Video) -> Element {
    let mut state = use_dashboard();
    let backend = use_context::<Backend>();
    let title = truncate_title(&video.title, CARD_TITLE_CHARS);
    let has_channel = video.channel_key().is_some();

    rsx! {
        article { class: "video-card",
            a {
                class: "video-title",
                href: video.watch_url(),
                target: "_blank",
                rel: "noopener noreferrer",
                title: "{video.title}",
                "{title}"
            }
            div { class: "video-channel",
                if video.channel_url.is_empty() {
                    span { "{video.channel}" }
                } else {
                    a {
                        href: "{video.channel_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{video.channel}"
                    }
                }
            }
            div { class: "video-stats",
                span { i { class: "fa-solid fa-eye" } " {format_count(video.view_count)}" }
                span { i { class: "fa-solid fa-thumbs-up" } " {format_count(video.like_count)}" }
                span { "{video.like_to_view_ratio:.2}%" }
                span { class: "video-date", "{video.published_date()}" }
            }
            if has_channel {
                button {
                    class: "btn btn-channel",
                    onclick: {
                        let video = video.clone();
                        move |_| state.open_channel(&video, &backend)
                    },
                    "Channel videos"
                }
            }
        }
    }
}
