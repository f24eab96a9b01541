//! Test fixtures shared by the controller test suites

use std::cell::RefCell;
use std::collections::VecDeque;

use shorts_types::{AnalysisAggregate, ApiResponse, Video};

use crate::client::VideoSource;
use crate::query::{FetchError, VideoQuery};

/// Build a video with the given id and view count
pub fn video(id: &str, views: u64) -> Video {
    Video {
        video_id: id.to_string(),
        title: format!("Video {id}"),
        channel: "Test Channel".to_string(),
        channel_id: "UCtest".to_string(),
        channel_url: "https://www.youtube.com/channel/UCtest".to_string(),
        view_count: views,
        like_count: views / 10,
        published_at: "2024-05-01T10:00:00Z".to_string(),
        like_to_view_ratio: 10.0,
        description: None,
    }
}

pub fn response(views: &[u64]) -> ApiResponse {
    ApiResponse {
        videos: views
            .iter()
            .enumerate()
            .map(|(i, v)| video(&format!("v{i}"), *v))
            .collect(),
        analysis: Some(AnalysisAggregate::default()),
        message: None,
    }
}

/// A failure that does not need a live socket to construct
pub fn http_error(status: u16) -> FetchError {
    FetchError::Status {
        url: "http://localhost:5001/api/videos".to_string(),
        status,
    }
}

pub fn malformed() -> FetchError {
    let source = serde_json::from_str::<ApiResponse>("{\"videos\": 3}").unwrap_err();
    FetchError::Decode {
        url: "http://localhost:5001/api/videos".to_string(),
        source,
    }
}

/// Replays queued outcomes in order and records every request it receives.
#[derive(Default)]
pub struct ScriptedSource {
    videos: RefCell<VecDeque<Result<ApiResponse, FetchError>>>,
    channels: RefCell<VecDeque<Result<Vec<Video>, FetchError>>>,
    pub video_requests: RefCell<Vec<VideoQuery>>,
    pub channel_requests: RefCell<Vec<String>>,
}

impl ScriptedSource {
    pub fn push_videos(&self, outcome: Result<ApiResponse, FetchError>) {
        self.videos.borrow_mut().push_back(outcome);
    }

    pub fn push_channel(&self, outcome: Result<Vec<Video>, FetchError>) {
        self.channels.borrow_mut().push_back(outcome);
    }
}

impl VideoSource for ScriptedSource {
    async fn fetch_videos(&self, query: &VideoQuery) -> Result<ApiResponse, FetchError> {
        self.video_requests.borrow_mut().push(query.clone());
        self.videos
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(http_error(503)))
    }

    async fn fetch_channel_videos(&self, channel_id: &str) -> Result<Vec<Video>, FetchError> {
        self.channel_requests.borrow_mut().push(channel_id.to_string());
        self.channels
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(http_error(503)))
    }
}
