use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;
use tower::ServiceExt;

use naiin::api::{self, create_router};
use naiin::client::SearchClient;
use naiin::config::Config;
use naiin::results::{ResultsSource, ResultsView, placeholder_results};
use naiin::state::AppState;

mod test_helpers {
    use super::*;

    pub fn config_for(source: ResultsSource, api_base_url: String) -> Config {
        Config {
            results_source: source,
            api_base_url,
            ..Config::default()
        }
    }

    /// A backend that answers like /api/search and counts the calls it receives.
    pub async fn spawn_counting_backend() -> (String, Arc<AtomicUsize>) {
        async fn handler(State(hits): State<Arc<AtomicUsize>>) -> axum::Json<serde_json::Value> {
            hits.fetch_add(1, Ordering::SeqCst);
            axum::Json(serde_json::json!({
                "message": "You searched for counted",
                "results": [{ "title": "Counted", "link": "https://counted.test" }]
            }))
        }

        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/api/search", get(handler))
            .with_state(hits.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), hits)
    }

    /// A base URL with nothing listening behind it.
    pub async fn closed_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    pub async fn render(config: Config, uri: &str) -> (StatusCode, String) {
        let res = create_router(AppState::new(config))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_placeholder_mode_never_calls_backend() {
    let (base_url, hits) = spawn_counting_backend().await;
    let (status, html) = render(
        config_for(ResultsSource::Placeholder, base_url),
        "/search?q=rust",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("n.ai.in – The Smarter Search"));
    assert!(html.contains("You searched for &quot;rust&quot;"));
    assert!(html.contains("https://example.com?q=rust"));
    assert!(html.contains("Example results for your query."));
    assert!(!html.contains("Counted"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_backend_mode_renders_api_payload() {
    // Point the results view at a real instance of the app itself.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let config = config_for(ResultsSource::Backend, base_url);
    let state = AppState::new(config.clone());
    tokio::spawn(async move {
        api::serve(listener, state).await.unwrap();
    });

    let (status, html) = render(config, "/search?q=foo").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Result 1"));
    assert!(html.contains("https://example.com/2"));
    assert!(html.contains("About 2 results (0.4 seconds)"));
    assert!(!html.contains("The Smarter Search"));
}

#[tokio::test]
async fn test_backend_mode_falls_back_when_unreachable() {
    let (status, html) = render(
        config_for(ResultsSource::Backend, closed_base_url().await),
        "/search?q=offline",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("n.ai.in – The Smarter Search"));
    assert!(html.contains("You searched for &quot;offline&quot;"));
}

#[tokio::test]
async fn test_merged_mode_appends_backend_results() {
    let (base_url, hits) = spawn_counting_backend().await;
    let client = SearchClient::new(base_url);

    let view = ResultsView::assemble(ResultsSource::Merged, "rust", &client).await;
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(view.results.len(), 3);
    assert_eq!(view.results[..2], placeholder_results("rust")[..]);
    assert_eq!(view.results[2].title, "Counted");
    assert!(view.about < 10_000);
}

#[tokio::test]
async fn test_merged_mode_without_backend_keeps_placeholders() {
    let client = SearchClient::new(closed_base_url().await);
    let view = ResultsView::assemble(ResultsSource::Merged, "rust", &client).await;
    assert_eq!(view.results, placeholder_results("rust"));
}

#[tokio::test]
async fn test_results_page_without_query() {
    let (status, html) = render(
        config_for(ResultsSource::Placeholder, closed_base_url().await),
        "/search",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("You searched for &quot;&quot;"));
}

#[tokio::test]
async fn test_results_page_repeated_query_param() {
    let (status, html) = render(
        config_for(ResultsSource::Placeholder, closed_base_url().await),
        "/search?q=first&q=second",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("You searched for &quot;first&quot;"));
    assert!(!html.contains("second&quot;"));
}

#[tokio::test]
async fn test_search_client_against_app() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let state = AppState::new(Config::default());
    tokio::spawn(async move {
        api::serve(listener, state).await.unwrap();
    });

    let client = SearchClient::new(base_url);
    let payload = client.search("a b&c").await.unwrap();
    assert_eq!(payload.message, "You searched for a b&c");
    assert_eq!(payload.results.len(), 2);
}
