mod common;

use axum::{Router, extract::ConnectInfo, routing::get};
use axum_test::TestServer;
use shorturls::api::handlers::redirect_handler;
use shorturls::domain::repositories::LinkRepository;
use std::net::SocketAddr;
use tower::Layer;

#[derive(Clone)]
struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

fn make_server() -> (
    TestServer,
    std::sync::Arc<shorturls::infrastructure::memory::MemoryLinkRepository>,
) {
    let (state, repository) = common::create_test_state();
    let app = Router::new()
        .route("/shorturls/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    (TestServer::new(app).unwrap(), repository)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = make_server();
    common::create_test_link(&repo, "target1", "https://example.com/target").await;

    let response = server.get("/shorturls/target1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = make_server();

    let response = server.get("/shorturls/ghost1").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Short URL not found");
}

#[tokio::test]
async fn test_redirect_increments_count_and_records_click() {
    let (server, repo) = make_server();
    common::create_test_link(&repo, "clickme", "https://example.com").await;

    let response = server
        .get("/shorturls/clickme")
        .add_header("User-Agent", "Mozilla/5.0")
        .add_header("Referer", "https://google.com")
        .await;

    assert_eq!(response.status_code(), 302);

    let link = repo.find_by_code("clickme").await.unwrap().unwrap();
    assert_eq!(link.click_count, 1);

    let clicks = repo.get_clicks("clickme").await.unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].source_ip.as_deref(), Some("127.0.0.1"));
    assert_eq!(clicks[0].user_agent.as_deref(), Some("Mozilla/5.0"));
    assert_eq!(clicks[0].referer.as_deref(), Some("https://google.com"));
}

#[tokio::test]
async fn test_redirect_once_per_request() {
    let (server, repo) = make_server();
    common::create_test_link(&repo, "multi1", "https://example.com").await;

    for _ in 0..3 {
        server.get("/shorturls/multi1").await.assert_status(axum::http::StatusCode::FOUND);
    }

    let link = repo.find_by_code("multi1").await.unwrap().unwrap();
    assert_eq!(link.click_count, 3);
    assert_eq!(repo.get_clicks("multi1").await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_redirect_expired_returns_gone() {
    let (server, repo) = make_server();
    common::create_expired_link(&repo, "old123", "https://example.com").await;

    let response = server.get("/shorturls/old123").await;

    assert_eq!(response.status_code(), 410);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Short URL has expired");
}

#[tokio::test]
async fn test_redirect_expired_records_nothing() {
    let (server, repo) = make_server();
    common::create_expired_link(&repo, "old456", "https://example.com").await;

    server.get("/shorturls/old456").await;

    let link = repo.find_by_code("old456").await.unwrap().unwrap();
    assert_eq!(link.click_count, 0);
    assert!(repo.get_clicks("old456").await.unwrap().is_empty());
}
