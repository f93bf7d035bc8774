// src/fetch/page.rs
// =============================================================================
// Fetches a page and returns its body as text.
//
// Status codes are not treated as failures: a 403 or 404 page still has a
// body, and that body is scanned like any other. Only transport problems
// (timeout, DNS, refused connection) produce an error.
// =============================================================================

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::CrawlConfig;
use crate::error::FetchError;

/// HTTP client configured for one harvest run.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds the client with the run's timeout and User-Agent.
    pub fn new(config: &CrawlConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// GETs `url` and returns the body decoded as UTF-8.
    ///
    /// Invalid byte sequences are replaced rather than rejected; many of the
    /// sites we crawl mislabel their charset.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        // Transport errors (timeout, DNS, refused) stop here
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        // A 403/404 page is logged but its body is still returned
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "non-success status, scanning body anyway");
        }

        let bytes = response.bytes().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        debug!(%url, bytes = bytes.len(), "fetched");
        // Force UTF-8 regardless of the charset the server claims
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> CrawlConfig {
        CrawlConfig {
            timeout: Duration::from_secs(2),
            ..CrawlConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("user-agent", "sub-harvest-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .expect(1)
            .mount(&server)
            .await;

        let config = CrawlConfig {
            user_agent: "sub-harvest-test/1.0".to_string(),
            ..test_config()
        };
        let fetcher = Fetcher::new(&config).unwrap();
        let body = fetcher.fetch_text(&format!("{}/", server.uri())).await.unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn test_error_status_still_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string("see https://x.com/sub.yaml"),
            )
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&test_config()).unwrap();
        let body = fetcher
            .fetch_text(&format!("{}/missing", server.uri()))
            .await
            .unwrap();
        assert!(body.contains("sub.yaml"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![b'o', b'k', 0xff]))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&test_config()).unwrap();
        let body = fetcher.fetch_text(&server.uri()).await.unwrap();
        assert!(body.starts_with("ok"));
    }

    #[tokio::test]
    async fn test_timeout_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let config = CrawlConfig {
            timeout: Duration::from_millis(50),
            ..CrawlConfig::default()
        };
        let fetcher = Fetcher::new(&config).unwrap();
        let result = fetcher.fetch_text(&server.uri()).await;
        assert!(matches!(result, Err(FetchError::Request { .. })));
    }

    #[tokio::test]
    async fn test_unparseable_url_is_an_error() {
        let fetcher = Fetcher::new(&test_config()).unwrap();
        let result = fetcher.fetch_text("not a url").await;
        assert!(result.is_err());
    }
}
