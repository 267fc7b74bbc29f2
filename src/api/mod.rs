use std::fmt;

use reqwest::Method;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::internal::messages;
use crate::internal::models::{ClearSummary, HealthStatus, Shortened, UrlListing, UrlStats};

/// Error half of the normalized envelope: a user-facing message plus the
/// HTTP status it came with. Transport and parse failures use status 500
/// with the generic network message, never the raw reqwest error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.message, self.status)
    }
}

impl std::error::Error for ApiError {}

/// Normalized envelope returned by every [`ApiService`] operation: exactly
/// one of payload or error, decided by the variant.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the NEKLI shortening service.
///
/// Uses `reqwest::blocking::Client`; callers on the UI side run each
/// operation inside a spawned task so the event loop stays responsive.
#[derive(Clone)]
pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Shorten a URL. The backend normalizes the scheme itself, but the UI
    /// validates locally first so invalid input never reaches the wire.
    pub fn shorten(&self, url: &str) -> ApiResult<Shortened> {
        let body = serde_json::json!({ "url": url });
        self.request_json(Method::POST, "/api/shorten", Some(&body))
    }

    /// Fetch statistics for a single short code.
    pub fn stats(&self, code: &str) -> ApiResult<UrlStats> {
        self.request_json(Method::GET, &format!("/api/stats/{code}"), None)
    }

    /// Fetch the most recent shortened URLs.
    pub fn list(&self) -> ApiResult<UrlListing> {
        self.request_json(Method::GET, "/api/list", None)
    }

    /// Check that the service is up.
    pub fn health_check(&self) -> ApiResult<HealthStatus> {
        self.request_json(Method::GET, "/api/health", None)
    }

    /// Remove every stored URL. Development-only endpoint; the UI exposes
    /// it only behind the `enable_dev_clear` config flag.
    pub fn clear(&self) -> ApiResult<ClearSummary> {
        self.request_json(Method::GET, "/api/clear", None)
    }

    /// Shared request helper: issue the call, then map the response into
    /// the normalized envelope.
    ///
    /// Non-2xx responses are expected to carry `{"error": "..."}`; when the
    /// body is not that shape the message falls back to a status-coded one.
    fn request_json<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send() {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("request to {} failed: {}", url, err);
                return Err(ApiError {
                    message: messages::NETWORK_ERROR.to_string(),
                    status: 500,
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("Erro {}", status.as_u16()));
            tracing::debug!("{} -> {}: {}", url, status.as_u16(), message);
            return Err(ApiError {
                message,
                status: status.as_u16(),
            });
        }

        response.json::<T>().map_err(|err| {
            tracing::warn!("failed to parse response from {}: {}", url, err);
            ApiError {
                message: messages::NETWORK_ERROR.to_string(),
                status: 500,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_for(server: &mockito::Server) -> ApiService {
        ApiService::new(&ApiConfig {
            base_url: server.url(),
        })
    }

    #[test]
    fn test_shorten_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/shorten")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"url": "https://example.com"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "original_url": "https://example.com",
                    "short_url": "http://localhost:5000/abc123",
                    "short_code": "abc123",
                    "message": "URL encurtada com sucesso!"
                }"#,
            )
            .create();

        let result = service_for(&server).shorten("https://example.com");

        mock.assert();
        let shortened = result.unwrap();
        assert_eq!(shortened.short_url, "http://localhost:5000/abc123");
        assert_eq!(shortened.message, "URL encurtada com sucesso!");
        assert_eq!(shortened.short_code.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_shorten_error_body_passes_through() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/shorten")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "URL inválida"}"#)
            .create();

        let err = service_for(&server)
            .shorten("https://example.com")
            .unwrap_err();

        mock.assert();
        assert_eq!(err.message, "URL inválida");
        assert_eq!(err.status, 400);
    }

    #[test]
    fn test_shorten_unstructured_error_falls_back_to_status() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/shorten")
            .with_status(502)
            .with_body("Bad Gateway")
            .create();

        let err = service_for(&server)
            .shorten("https://example.com")
            .unwrap_err();

        mock.assert();
        assert_eq!(err.message, "Erro 502");
        assert_eq!(err.status, 502);
    }

    #[test]
    fn test_transport_failure_yields_network_error() {
        // Nothing listens on port 1, so the send itself fails.
        let service = ApiService::new(&ApiConfig {
            base_url: "http://localhost:1".to_string(),
        });

        let err = service.shorten("https://example.com").unwrap_err();
        assert_eq!(err.message, messages::NETWORK_ERROR);
        assert_eq!(err.status, 500);
    }

    #[test]
    fn test_invalid_success_body_yields_network_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/shorten")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create();

        let err = service_for(&server)
            .shorten("https://example.com")
            .unwrap_err();

        mock.assert();
        assert_eq!(err.message, messages::NETWORK_ERROR);
        assert_eq!(err.status, 500);
    }

    #[test]
    fn test_stats_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/stats/abc123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "original_url": "https://example.com",
                    "short_code": "abc123",
                    "short_url": "http://localhost:5000/abc123",
                    "created_at": "2026-08-24T14:03:27.511908",
                    "clicks": 7
                }"#,
            )
            .create();

        let stats = service_for(&server).stats("abc123").unwrap();

        mock.assert();
        assert_eq!(stats.short_code, "abc123");
        assert_eq!(stats.clicks, 7);
    }

    #[test]
    fn test_stats_not_found() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/stats/zzz")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "URL não encontrada"}"#)
            .create();

        let err = service_for(&server).stats("zzz").unwrap_err();

        mock.assert();
        assert_eq!(err.message, "URL não encontrada");
        assert_eq!(err.status, 404);
    }

    #[test]
    fn test_list_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/list")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "urls": [{
                        "original_url": "https://example.com/page",
                        "short_code": "abc123",
                        "short_url": "http://localhost:5000/abc123",
                        "created_at": "2026-08-24T14:03:27",
                        "clicks": 2
                    }],
                    "total": 1
                }"#,
            )
            .create();

        let listing = service_for(&server).list().unwrap();

        mock.assert();
        assert_eq!(listing.total, 1);
        assert_eq!(listing.urls.len(), 1);
        assert_eq!(listing.urls[0].short_code, "abc123");
    }

    #[test]
    fn test_health_check() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "status": "ok",
                    "message": "NEKLI API está funcionando!",
                    "version": "1.0.0",
                    "total_urls": 3
                }"#,
            )
            .create();

        let health = service_for(&server).health_check().unwrap();

        mock.assert();
        assert_eq!(health.status, "ok");
        assert_eq!(health.total_urls, 3);
    }

    #[test]
    fn test_clear() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/clear")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "3 URLs removidas", "total_urls": 0}"#)
            .create();

        let summary = service_for(&server).clear().unwrap();

        mock.assert();
        assert_eq!(summary.message, "3 URLs removidas");
        assert_eq!(summary.total_urls, 0);
    }
}
