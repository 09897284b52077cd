//! REST client for the Praja Console backend API
//!
//! The backend owns all persistence and authorization; this crate only speaks
//! its wire contract: reference-region lookups, content entity CRUD, and the
//! staff OTP login flow.

pub mod auth;
pub mod content;
pub mod regions;
pub mod types;

use serde::{de::DeserializeOwned, Serialize};

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// REST client for making requests against the backend
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Create a client with an authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => req.header("Authorization", format!("Bearer {}", token)),
            None => req,
        }
    }

    /// Execute a GET request with query parameters
    pub(crate) async fn get_json<R>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let req = self.authorize(self.client.get(self.url(path)).query(query));
        Self::read_response(req.send().await?).await
    }

    /// Execute a POST request with a JSON body
    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let req = self.authorize(self.client.post(self.url(path)).json(body));
        Self::read_response(req.send().await?).await
    }

    /// Execute a PUT request with a JSON body
    pub(crate) async fn put_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let req = self.authorize(self.client.put(self.url(path)).json(body));
        Self::read_response(req.send().await?).await
    }

    async fn read_response<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<R, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("API error ({}): {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a local socket and return
    /// the base URL to point the client at.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await.unwrap();

            let response = format!(
                "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_list_districts_normalizes_over_the_wire() {
        let base_url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"id":5,"nameEn":"Warangal","nameTe":"వరంగల్"},{"name":"record without any id"}]"#,
        )
        .await;

        let districts = ApiClient::new(base_url).list_districts(true).await.unwrap();

        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].id, 5);
        assert_eq!(districts[0].name, "Warangal");
    }

    #[tokio::test]
    async fn test_non_success_status_becomes_status_error() {
        let base_url = serve_once("HTTP/1.1 503 Service Unavailable", r#"{"error":"down"}"#).await;

        let result = ApiClient::new(base_url).list_news().await;

        match result {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert!(body.contains("down"));
            }
            other => panic!("expected status error, got {:?}", other.map(|_| ())),
        }
    }
}
