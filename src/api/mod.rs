use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use url::Url;

use crate::api::error::ApiError;

/// Module holding the API types
pub mod types;

/// Various API Utils
pub mod utils;

/// Error type
pub mod error;

/// Request methods
pub mod query;

/// Console summaries
pub mod report;

/// Writing responses to disk
pub mod persist;

/// Predefined query suites
pub mod catalog;

/// HTTP client bound to a single API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for `base_url`
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        let client = ApiClient::build_client().build()?;
        Ok(ApiClient { client, base_url })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build_client() -> ClientBuilder {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
    }

    /// Joins `path` (including any query string) onto the base URL
    pub fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    fn get_client(&self, url: Url) -> RequestBuilder {
        self.client.get(url)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;

    #[test]
    fn joins_path_and_query() {
        let client = ApiClient::new("http://localhost:8080").unwrap();
        let url = client.url_for("/customers?page=1&page_size=10").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/customers?page=1&page_size=10");
        assert_eq!(url.query(), Some("page=1&page_size=10"));
    }

    #[test]
    fn trailing_slash_and_missing_slash() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        let url = client.url_for("health").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/health");
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let client = ApiClient::new("http://localhost:8080/api").unwrap();
        let url = client.url_for("/loans/customer_id=10").unwrap();
        assert_eq!(url.path(), "/api/loans/customer_id=10");
    }

    #[test]
    fn comparison_operators_survive() {
        let client = ApiClient::new("http://localhost:8080").unwrap();
        let url = client.url_for("/loans/debt_amount>30000?page=1").unwrap();
        assert_eq!(url.path(), "/loans/debt_amount%3E30000");
    }

    #[test]
    fn invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }
}
