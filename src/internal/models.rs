use serde::Deserialize;

/// Successful payload of `POST /api/shorten`.
///
/// The backend also returns `original_url`/`short_code`, but older
/// deployments omit them, so they stay optional.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Shortened {
    pub short_url: String,
    pub message: String,
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub short_code: Option<String>,
}

/// One entry of `GET /api/list`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UrlRecord {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub clicks: u64,
}

/// Payload of `GET /api/list`: at most ten records, newest first, plus the
/// total count of stored URLs.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UrlListing {
    pub urls: Vec<UrlRecord>,
    #[serde(default)]
    pub total: u64,
}

/// Payload of `GET /api/stats/:code`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UrlStats {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub clicks: u64,
}

/// Payload of `GET /api/health`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub total_urls: u64,
}

/// Payload of `GET /api/clear` (development-only endpoint).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClearSummary {
    pub message: String,
    #[serde(default)]
    pub total_urls: u64,
}
