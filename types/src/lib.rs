//! Shared wire and configuration types for the shorts trend dashboard
//!
//! This crate contains serializable types that are shared between the core
//! library, the WASM frontend (shorts-ui) and the terminal frontend (shorts-cli).
//! Behavior that needs runtime dependencies (HTTP, config files) lives in
//! shorts-core.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Facet Catalogs
// ─────────────────────────────────────────────────────────────────────────────

/// The default "all/popular" category. Mutually exclusive with every other category.
pub const SENTINEL_CATEGORY: &str = "popular";

/// Category catalog in display order. The sentinel is always first.
pub const CATEGORIES: &[&str] = &[
    SENTINEL_CATEGORY,
    "news",
    "politics",
    "economy",
    "it",
    "tech",
    "science",
    "gaming",
    "music",
    "movies",
    "animation",
    "comedy",
    "entertainment",
    "vlog",
    "daily life",
    "beauty",
    "fashion",
    "cooking",
    "food",
    "travel",
    "sports",
    "soccer",
    "baseball",
    "pets",
    "animals",
    "education",
    "knowledge",
    "how-to",
    "style",
    "kids",
    "cars",
    "real estate",
    "health",
    "fitness",
];

/// Default country (region code sent to the search backend).
pub const DEFAULT_COUNTRY: &str = "KR";

/// Country catalog as (ISO 3166 alpha-2 code, display name).
pub const COUNTRIES: &[(&str, &str)] = &[
    (DEFAULT_COUNTRY, "South Korea"),
    ("US", "United States"),
    ("JP", "Japan"),
    ("GB", "United Kingdom"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("IN", "India"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("VN", "Vietnam"),
    ("ID", "Indonesia"),
];

/// Returns true if the category is part of the catalog.
pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

/// Returns true if the country code is part of the catalog.
pub fn is_known_country(code: &str) -> bool {
    COUNTRIES.iter().any(|(c, _)| *c == code)
}

/// Display name for a country code, falling back to the code itself.
pub fn country_name(code: &str) -> &str {
    COUNTRIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Publication window for the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "3days")]
    ThreeDays,
    #[serde(rename = "1week")]
    OneWeek,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "2year")]
    TwoYears,
    #[serde(rename = "3year")]
    ThreeYears,
    #[serde(rename = "4year")]
    FourYears,
    #[serde(rename = "5year")]
    FiveYears,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl Period {
    /// Query-string key understood by the backend
    pub fn key(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::ThreeDays => "3days",
            Period::OneWeek => "1week",
            Period::OneMonth => "1month",
            Period::OneYear => "1year",
            Period::TwoYears => "2year",
            Period::ThreeYears => "3year",
            Period::FourYears => "4year",
            Period::FiveYears => "5year",
            Period::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::ThreeDays => "Last 3 days",
            Period::OneWeek => "Last week",
            Period::OneMonth => "Last month",
            Period::OneYear => "Last year",
            Period::TwoYears => "Last 2 years",
            Period::ThreeYears => "Last 3 years",
            Period::FourYears => "Last 4 years",
            Period::FiveYears => "Last 5 years",
            Period::All => "All time",
        }
    }

    pub fn all() -> &'static [Period] {
        &[
            Period::Today,
            Period::ThreeDays,
            Period::OneWeek,
            Period::OneMonth,
            Period::OneYear,
            Period::TwoYears,
            Period::ThreeYears,
            Period::FourYears,
            Period::FiveYears,
            Period::All,
        ]
    }

    /// Parse a query-string key. Unknown keys are rejected.
    pub fn from_key(key: &str) -> Option<Period> {
        Period::all().iter().copied().find(|p| p.key() == key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire Types (mirror the analysis service payload)
// ─────────────────────────────────────────────────────────────────────────────

/// A single short-form video as delivered by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_url: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    /// ISO-8601 timestamp, kept verbatim
    #[serde(default)]
    pub published_at: String,
    /// Likes per view as a percentage, computed upstream
    #[serde(default)]
    pub like_to_view_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Video {
    /// Channel identifier used for drilldown queries.
    ///
    /// Older payloads only carry `channel_url`; the identifier is its last path segment.
    pub fn channel_key(&self) -> Option<&str> {
        if !self.channel_id.is_empty() {
            return Some(&self.channel_id);
        }
        self.channel_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty() && !s.contains(':'))
    }

    /// Public watch URL for the video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/shorts/{}", self.video_id)
    }

    /// Calendar date portion of `published_at` (YYYY-MM-DD), if present
    pub fn published_date(&self) -> &str {
        self.published_at.get(..10).unwrap_or(&self.published_at)
    }
}

/// Channel ranked by number of videos in the result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelVideoCount {
    pub channel: String,
    pub video_count: u64,
}

/// Channel ranked by average views across its videos in the result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAverageViews {
    pub channel: String,
    pub average_views: u64,
    #[serde(default)]
    pub video_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleLengthAnalysis {
    #[serde(default)]
    pub average_title_length: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelAnalysis {
    #[serde(default)]
    pub top_channels_by_video_count: Vec<ChannelVideoCount>,
    #[serde(default)]
    pub top_channels_by_avg_views: Vec<ChannelAverageViews>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeAnalysis {
    #[serde(default)]
    pub upload_hour_distribution: Distribution,
    #[serde(default)]
    pub upload_day_distribution: Distribution,
}

/// A video whose views far exceed its channel's usual reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakoutVideo {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub subscriber_count: Option<u64>,
    /// Views divided by subscribers
    #[serde(default)]
    pub breakout_ratio: f64,
}

/// Precomputed statistics for a result set. Every sub-result is optional on
/// the wire and defaults to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisAggregate {
    /// Ranked (keyword, occurrences)
    #[serde(default)]
    pub keyword_analysis: Vec<(String, u64)>,
    #[serde(default)]
    pub title_length_analysis: TitleLengthAnalysis,
    #[serde(default)]
    pub channel_analysis: ChannelAnalysis,
    #[serde(default)]
    pub time_analysis: TimeAnalysis,
    /// Sentiment label -> count (e.g. positive / neutral / negative)
    #[serde(default)]
    pub sentiment_analysis: Distribution,
    /// Title pattern -> count (e.g. question, exclamation, emoji)
    #[serde(default)]
    pub title_pattern_analysis: Distribution,
    /// Named correlation coefficients
    #[serde(default)]
    pub correlation_analysis: Correlations,
    #[serde(default)]
    pub breakout_videos: Vec<BreakoutVideo>,
}

/// Top-level payload of `GET /api/videos`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub videos: Vec<Video>,
    /// `null` when the result set is empty
    #[serde(default)]
    pub analysis: Option<AnalysisAggregate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The atomic unit published by the query controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    pub videos: Vec<Video>,
    pub analysis: AnalysisAggregate,
}

impl From<ApiResponse> for QueryResult {
    fn from(response: ApiResponse) -> Self {
        Self {
            videos: response.videos,
            analysis: response.analysis.unwrap_or_default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Order-Preserving Maps
// ─────────────────────────────────────────────────────────────────────────────

/// Bucket label -> count, in payload order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution(pub Vec<(String, u64)>);

impl Distribution {
    pub fn entries(&self) -> &[(String, u64)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Distribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = Distribution;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of bucket label to count")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Distribution::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, count)) = access.next_entry::<String, u64>()? {
                    entries.push((label, count));
                }
                Ok(Distribution(entries))
            }
        }

        deserializer.deserialize_any(DistributionVisitor)
    }
}

/// Correlation name -> coefficient, in payload order.
///
/// A coefficient that is missing, `null` or not a number is kept as `None`
/// so it can render as "not applicable".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Correlations(pub Vec<(String, Option<f64>)>);

impl Correlations {
    pub fn entries(&self) -> &[(String, Option<f64>)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl Serialize for Correlations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Correlations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CorrelationsVisitor;

        impl<'de> Visitor<'de> for CorrelationsVisitor {
            type Value = Correlations;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of correlation name to coefficient")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Correlations::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, LenientNumber>()? {
                    let value = match value {
                        LenientNumber::Number(n) if n.is_finite() => Some(n),
                        _ => None,
                    };
                    entries.push((name, value));
                }
                Ok(Correlations(entries))
            }
        }

        deserializer.deserialize_any(CorrelationsVisitor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Configuration
// ─────────────────────────────────────────────────────────────────────────────

fn default_api_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_preview_limit() -> usize {
    5
}

fn default_categories() -> Vec<String> {
    vec![SENTINEL_CATEGORY.to_string()]
}

fn default_countries() -> Vec<String> {
    vec![DEFAULT_COUNTRY.to_string()]
}

/// Dashboard configuration.
///
/// Persistence and validation live in shorts-core's `AppConfigExt` trait,
/// as they require platform-specific dependencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the analysis service, e.g. `http://localhost:5001`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Number of entries shown inline by each analysis panel
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,
    #[serde(default = "default_countries")]
    pub default_countries: Vec<String>,
    #[serde(default)]
    pub default_period: Period,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            preview_limit: default_preview_limit(),
            default_categories: default_categories(),
            default_countries: default_countries(),
            default_period: Period::default(),
        }
    }
}
