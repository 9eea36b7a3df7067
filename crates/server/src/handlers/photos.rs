use axum::extract::{Query, State};
use axum::Json;

use crate::app_state::AppState;
use crate::errors::ServerError;
use crate::models::{PhotoListQuery, PhotoListResponse};

pub async fn list_photos(
    State(state): State<AppState>,
    Query(query): Query<PhotoListQuery>,
) -> Result<Json<PhotoListResponse>, ServerError> {
    let page = parse_page(query.page.as_deref());

    let results = state
        .upstream
        .list_photos(page)
        .await
        .map_err(|e| ServerError::internal(e.to_string()))?;

    Ok(Json(PhotoListResponse { results }))
}

/// Absent, unparseable, or non-positive page numbers fall back to the
/// first page rather than rejecting the request.
fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::handlers::router;
    use crate::upstream::UpstreamClient;

    #[test]
    fn page_parsing_is_lenient() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_page(Some(" 4 ")), 4);
        assert_eq!(parse_page(Some("17")), 17);
    }

    async fn spawn_proxy(upstream_url: String) -> String {
        let upstream = UpstreamClient::new(upstream_url, "test-key".to_string()).unwrap();
        let state = AppState {
            upstream: Arc::new(upstream),
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn proxies_a_page_and_wraps_it_in_results() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "p1", "urls": {"regular": "https://img.test/p1"}, "description": "dusk", "user": {"name": "Ada"}}
            ])))
            .mount(&upstream)
            .await;

        let base = spawn_proxy(upstream.uri()).await;
        let body: serde_json::Value = reqwest::get(format!("{base}/api/photos?page=2"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["results"][0]["id"], "p1");
        assert_eq!(body["results"][0]["user"]["name"], "Ada");
    }

    #[tokio::test]
    async fn invalid_page_defaults_to_first() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&upstream)
            .await;

        let base = spawn_proxy(upstream.uri()).await;
        let resp = reqwest::get(format!("{base}/api/photos?page=notanumber"))
            .await
            .unwrap();
        assert!(resp.status().is_success());
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_500_with_error_body() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&upstream)
            .await;

        let base = spawn_proxy(upstream.uri()).await;
        let resp = reqwest::get(format!("{base}/api/photos")).await.unwrap();
        assert_eq!(resp.status().as_u16(), 500);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let upstream = MockServer::start().await;
        let base = spawn_proxy(upstream.uri()).await;
        let body: serde_json::Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
    }
}
