//! Reqwest-backed `PhotoSource` speaking the proxy's paging contract
//! (`GET {base}/api/photos?page=n` returning `{ "results": [...] }`).

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::model::{RawPhoto, SourceError};
use crate::ports::source::PhotoSource;

// Matches the proxy's own upstream bound, so a stalled request cannot pin
// the feed's loading state open for longer than the proxy would.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RestPhotoSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Option<Vec<RawPhoto>>,
}

impl RestPhotoSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Other(e.to_string()))?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn classify(e: reqwest::Error) -> SourceError {
        if e.is_timeout() {
            SourceError::Timeout
        } else if e.is_connect() {
            SourceError::Connect(e.to_string())
        } else if e.is_decode() {
            SourceError::Decode(e.to_string())
        } else {
            SourceError::Other(e.to_string())
        }
    }
}

#[async_trait::async_trait]
impl PhotoSource for RestPhotoSource {
    async fn list_page(&self, page: u32) -> Result<Vec<RawPhoto>, SourceError> {
        let url = format!("{}/api/photos?page={page}", self.base_url);
        debug!(%url, "photo page request");

        let resp = self.client.get(&url).send().await.map_err(Self::classify)?;
        let status = resp.status();
        if !status.is_success() {
            warn!(page, status = status.as_u16(), "photo page request failed");
            return Err(SourceError::Http {
                status: status.as_u16(),
            });
        }

        let body: ListResponse = resp.json().await.map_err(Self::classify)?;
        match body.results {
            Some(results) => Ok(results),
            None => {
                // Indistinguishable from legitimate exhaustion at this
                // layer; report it and let the feed end.
                warn!(page, "response missing results field, treating as end of feed");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn parses_results_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/photos"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {"id": "p1", "urls": {"regular": "https://img.test/p1"}, "description": "dawn", "user": {"name": "Ada"}},
                    {"id": "p2", "urls": {"small": "https://img.test/p2"}, "description": null, "user": {"name": "Grace"}}
                ]
            })))
            .mount(&server)
            .await;

        let source = RestPhotoSource::new(server.uri()).unwrap();
        let page = source.list_page(3).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, "p1");
        assert_eq!(page[1].urls.best(), Some("https://img.test/p2"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/photos"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"error": "upstream broke"})),
            )
            .mount(&server)
            .await;

        let source = RestPhotoSource::new(server.uri()).unwrap();
        match source.list_page(1).await {
            Err(SourceError::Http { status }) => assert_eq!(status, 500),
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_results_field_reads_as_empty_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/photos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"total": 0})))
            .mount(&server)
            .await;

        let source = RestPhotoSource::new(server.uri()).unwrap();
        let page = source.list_page(1).await.unwrap();
        assert!(page.is_empty());
    }
}
