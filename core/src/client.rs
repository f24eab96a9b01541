//! HTTP client for the analysis service
//!
//! [`VideoSource`] is the seam between the controllers and the network;
//! [`HttpVideoSource`] is the production implementation on top of reqwest.
//! It works both natively and in the browser (reqwest uses `fetch` on wasm32).

use std::future::Future;

use serde::de::DeserializeOwned;
use shorts_types::{ApiResponse, Video};
use tracing::debug;
use url::Url;

use crate::query::{FetchError, VideoQuery, endpoint};

/// Source of videos and analysis results.
pub trait VideoSource {
    /// `GET /api/videos?category=..&period=..&countries=..`
    fn fetch_videos(
        &self,
        query: &VideoQuery,
    ) -> impl Future<Output = Result<ApiResponse, FetchError>>;

    /// `GET /api/channel/{channel_id}`
    fn fetch_channel_videos(
        &self,
        channel_id: &str,
    ) -> impl Future<Output = Result<Vec<Video>, FetchError>>;
}

/// reqwest-backed [`VideoSource`] bound to a configurable service address.
#[derive(Debug, Clone)]
pub struct HttpVideoSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpVideoSource {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Use a preconfigured client (timeouts, proxies)
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Read the body first so transport and decode failures stay distinct
        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl VideoSource for HttpVideoSource {
    async fn fetch_videos(&self, query: &VideoQuery) -> Result<ApiResponse, FetchError> {
        let url = query.url(&self.base_url)?;
        self.get_json(url).await
    }

    async fn fetch_channel_videos(&self, channel_id: &str) -> Result<Vec<Video>, FetchError> {
        let url = endpoint(&self.base_url, &["api", "channel", channel_id])?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shorts_types::Period;

    fn query() -> VideoQuery {
        VideoQuery {
            categories: vec!["news".into(), "real estate".into()],
            countries: vec!["KR".into(), "US".into()],
            period: Period::OneWeek,
        }
    }

    #[test]
    fn video_query_url_carries_all_facets() {
        let base = Url::parse("http://localhost:5001").unwrap();
        let url = query().url(&base).unwrap();
        assert_eq!(url.path(), "/api/videos");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("category".to_string(), "news,real estate".to_string()),
                ("period".to_string(), "1week".to_string()),
                ("countries".to_string(), "KR,US".to_string()),
            ]
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let base = Url::parse("https://example.com/trends/").unwrap();
        let url = query().url(&base).unwrap();
        assert_eq!(url.path(), "/trends/api/videos");
    }

    #[test]
    fn channel_id_is_a_single_path_segment() {
        let base = Url::parse("http://localhost:5001").unwrap();
        let url = endpoint(&base, &["api", "channel", "UC a/b"]).unwrap();
        assert_eq!(url.path(), "/api/channel/UC%20a%2Fb");
    }

    #[test]
    fn opaque_base_urls_are_rejected() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            query().url(&base),
            Err(FetchError::InvalidBaseUrl { .. })
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Response mapping against a loopback server
    // ─────────────────────────────────────────────────────────────────────────

    /// Talks to the loopback server directly, whatever the proxy environment says
    fn loopback_source(base: Url) -> HttpVideoSource {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpVideoSource::with_client(client, base)
    }

    /// Serve one canned HTTP response on an ephemeral port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    #[tokio::test]
    async fn server_errors_map_to_status() {
        let base = serve_once("500 Internal Server Error", "{}").await;
        let source = loopback_source(base);
        match source.fetch_videos(&query()).await {
            Err(FetchError::Status { status, url }) => {
                assert_eq!(status, 500);
                assert!(url.contains("/api/videos"));
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_bodies_map_to_decode() {
        let base = serve_once("200 OK", r#"{"videos":3}"#).await;
        let source = loopback_source(base);
        let err = source.fetch_videos(&query()).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
        assert!(err.is_malformed());
    }

    #[tokio::test]
    async fn refused_connections_map_to_request() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = Url::parse(&format!("http://{addr}")).unwrap();
        let source = loopback_source(base);
        let err = source.fetch_channel_videos("UCalpha").await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }

    #[tokio::test]
    async fn channel_videos_decode_from_a_json_array() {
        let base = serve_once(
            "200 OK",
            r#"[{"video_id":"a","title":"First","channel":"Alpha","view_count":12}]"#,
        )
        .await;
        let source = loopback_source(base);
        let videos = source.fetch_channel_videos("UCalpha").await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].view_count, 12);
    }

    #[tokio::test]
    async fn http_failure_leaves_the_dashboard_failed() {
        use crate::query::{Completion, QueryController, QueryState};
        use crate::selection::SelectionState;

        let base = serve_once("503 Service Unavailable", "").await;
        let source = loopback_source(base);
        let mut controller = QueryController::new();
        let ticket = controller.observe(&SelectionState::default()).unwrap();

        let outcome = source.fetch_videos(ticket.query()).await;
        assert_eq!(controller.complete(&ticket, outcome), Completion::Failed);
        assert_eq!(
            controller.state(),
            &QueryState::Failed {
                message: FetchError::USER_MESSAGE
            }
        );
    }
}
