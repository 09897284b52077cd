//! Server-side construction of the backend API client

/// Create a client for server-side requests (direct to the REST backend)
#[cfg(feature = "server")]
pub fn backend_client() -> praja_api_client::ApiClient {
    let url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    praja_api_client::ApiClient::new(url)
}
