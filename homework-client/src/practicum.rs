//! Review API client

use crate::error::{ClientError, Result};
use reqwest::Client;
use std::fmt;
use tracing::debug;

/// Status code and undecoded body of a review API response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as received
    pub body: Vec<u8>,
}

/// HTTP client for the homework statuses endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// Any response that arrives is returned as-is, whatever its status code.
    /// Only transport failures are errors.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, in seconds, to look back to
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<RawResponse> {
        debug!("GET {} from_date={}", self.endpoint, from_date);

        // The URL carries the cursor, so it is stripped from errors to keep
        // the text of a repeated failure stable
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?
            .to_vec();

        debug!("Review API answered {} ({} bytes)", status, body.len());

        Ok(RawResponse { status, body })
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Query,
        http::{HeaderMap, StatusCode},
        routing::get,
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn echo(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Json(json!({
            "authorization": auth,
            "from_date": params.get("from_date"),
        }))
    }

    #[tokio::test]
    async fn test_fetch_sends_token_and_cursor() {
        let base = spawn_server(Router::new().route("/statuses/", get(echo))).await;
        let client = PracticumClient::new(format!("{}/statuses/", base), "secret");

        let response = client.fetch_statuses(1_700_000_000).await.unwrap();
        assert_eq!(response.status, 200);

        let body: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(body["authorization"], "OAuth secret");
        assert_eq!(body["from_date"], "1700000000");
    }

    #[tokio::test]
    async fn test_fetch_passes_error_status_through() {
        let app = Router::new().route(
            "/statuses/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_server(app).await;
        let client = PracticumClient::new(format!("{}/statuses/", base), "secret");

        let response = client.fetch_statuses(0).await.unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(response.body, b"boom");
    }

    #[tokio::test]
    async fn test_fetch_transport_failure() {
        // Nothing listens on port 9 of the loopback interface
        let client = PracticumClient::new("http://127.0.0.1:9/statuses/", "secret");
        let err = client.fetch_statuses(1_700_000_000).await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert!(!err.to_string().contains("from_date"));
        assert!(!err.to_string().contains("1700000000"));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = PracticumClient::new("http://localhost/", "secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
        assert_eq!(client.endpoint(), "http://localhost/");
    }
}
