//! Query lifecycle for the main dashboard.
//!
//! The controller derives a [`VideoQuery`] from the selection, tags each
//! issued request with a generation number and only publishes the response
//! whose generation matches the latest issued request. Older responses are
//! dropped silently.

mod error;


pub use error::FetchError;

use shorts_types::{ApiResponse, Period, QueryResult, Video};
use tracing::{debug, info, warn};
use url::Url;

use crate::selection::SelectionState;

// ─────────────────────────────────────────────────────────────────────────────
// Query Derivation
// ─────────────────────────────────────────────────────────────────────────────

/// Request parameters for `GET /api/videos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    pub categories: Vec<String>,
    pub countries: Vec<String>,
    pub period: Period,
}

impl VideoQuery {
    pub fn category_param(&self) -> String {
        self.categories.join(",")
    }

    pub fn country_param(&self) -> String {
        self.countries.join(",")
    }

    /// Full request URL under the given service base
    pub fn url(&self, base: &Url) -> Result<Url, FetchError> {
        let mut url = endpoint(base, &["api", "videos"])?;
        url.query_pairs_mut()
            .append_pair("category", &self.category_param())
            .append_pair("period", self.period.key())
            .append_pair("countries", &self.country_param());
        Ok(url)
    }
}

/// Append path segments to the service base, keeping any base path prefix.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidBaseUrl {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Order videos by view count, highest first. Equal counts keep payload order.
pub fn sort_by_view_count(videos: &mut [Video]) {
    videos.sort_by(|a, b| b.view_count.cmp(&a.view_count));
}

// ─────────────────────────────────────────────────────────────────────────────
// Controller State
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle of the main query.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Loading {
        generation: u64,
        categories_label: String,
    },
    Success {
        result: QueryResult,
        categories_label: String,
    },
    Failed {
        message: &'static str,
    },
}

/// Handle for one issued request. Hand it back to [`QueryController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    query: VideoQuery,
}

impl QueryTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &VideoQuery {
        &self.query
    }
}

/// What happened to a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Result published as the current snapshot
    Published,
    /// Request failed; the generic error is now shown
    Failed,
    /// A newer request was issued in the meantime; response discarded
    Stale,
}

/// What the dashboard should display right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardView<'a> {
    Idle,
    Loading { categories_label: &'a str },
    Failed { message: &'a str },
    /// Successful query with zero videos
    Empty { categories_label: &'a str },
    Ready(&'a QueryResult),
}

#[derive(Debug, Default)]
pub struct QueryController {
    state: QueryState,
    /// Generation of the most recently issued request (0 = none yet)
    latest: u64,
    last_query: Option<VideoQuery>,
}

impl QueryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Loading { .. })
    }

    /// The currently published snapshot, if the last request succeeded
    pub fn result(&self) -> Option<&QueryResult> {
        match &self.state {
            QueryState::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Issue a request for the selection only if it differs from the last
    /// issued query. The first call always issues.
    pub fn observe(&mut self, selection: &SelectionState) -> Option<QueryTicket> {
        let query = selection.to_query();
        if self.last_query.as_ref() == Some(&query) {
            return None;
        }
        Some(self.issue(query, selection.categories_label()))
    }

    /// Issue a request for the selection unconditionally.
    pub fn begin(&mut self, selection: &SelectionState) -> QueryTicket {
        self.issue(selection.to_query(), selection.categories_label())
    }

    fn issue(&mut self, query: VideoQuery, categories_label: String) -> QueryTicket {
        self.latest += 1;
        let generation = self.latest;
        debug!(
            generation,
            categories = %query.category_param(),
            countries = %query.country_param(),
            period = query.period.key(),
            "issuing video query"
        );
        self.state = QueryState::Loading {
            generation,
            categories_label,
        };
        self.last_query = Some(query.clone());
        QueryTicket { generation, query }
    }

    /// Apply the outcome of a request.
    ///
    /// Only the latest issued generation is applied. On success the videos
    /// are sorted by view count (descending) before the result is published.
    pub fn complete(
        &mut self,
        ticket: &QueryTicket,
        outcome: Result<ApiResponse, FetchError>,
    ) -> Completion {
        let categories_label = match &self.state {
            QueryState::Loading {
                generation,
                categories_label,
            } if *generation == ticket.generation && ticket.generation == self.latest => {
                categories_label.clone()
            }
            _ => {
                debug!(
                    generation = ticket.generation,
                    latest = self.latest,
                    "discarding stale video query response"
                );
                return Completion::Stale;
            }
        };

        match outcome {
            Ok(response) => {
                let mut result = QueryResult::from(response);
                sort_by_view_count(&mut result.videos);
                info!(
                    generation = ticket.generation,
                    videos = result.videos.len(),
                    "published video query result"
                );
                self.state = QueryState::Success {
                    result,
                    categories_label,
                };
                Completion::Published
            }
            Err(err) => {
                warn!(
                    generation = ticket.generation,
                    malformed = err.is_malformed(),
                    error = %err,
                    source = ?std::error::Error::source(&err),
                    "video query failed"
                );
                self.state = QueryState::Failed {
                    message: err.user_message(),
                };
                Completion::Failed
            }
        }
    }

    pub fn view(&self) -> DashboardView<'_> {
        match &self.state {
            QueryState::Idle => DashboardView::Idle,
            QueryState::Loading {
                categories_label, ..
            } => DashboardView::Loading { categories_label },
            QueryState::Failed { message } => DashboardView::Failed { message },
            QueryState::Success {
                result,
                categories_label,
            } if result.videos.is_empty() => DashboardView::Empty { categories_label },
            QueryState::Success { result, .. } => DashboardView::Ready(result),
        }
    }
}
