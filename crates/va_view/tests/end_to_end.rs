use axum::{http::HeaderMap, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use va_core::{ProxyConfig, ViewConfig};
use va_view::{HeadlessWidget, HttpArticleApi, MemorySurface, SubmitOutcome, ViewController};
use va_web::{create_app, AppState};

struct Server {
    url: String,
    shutdown: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<()>,
}

impl Server {
    async fn start(app: Router) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}", listener.local_addr()?);
        let (shutdown, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
        Ok(Self { url, shutdown, handle })
    }

    async fn stop(self) -> anyhow::Result<()> {
        let _ = self.shutdown.send(());
        self.handle.await?;
        Ok(())
    }
}

// Echoes the submitted id back as an article, refusing calls without credentials.
async fn backend(headers: HeaderMap, Json(body): Json<Value>) -> (axum::http::StatusCode, Json<Value>) {
    if headers.get("cf-access-client-secret").map(|v| v.as_bytes()) != Some(&b"s3cret"[..]) {
        return (axum::http::StatusCode::FORBIDDEN, Json(json!({"detail": "forbidden"})));
    }
    let url = body["video_url"].as_str().unwrap_or_default();
    let video_id = url.rsplit('/').next().unwrap_or_default();
    (
        axum::http::StatusCode::OK,
        Json(json!({
            "video_data": {"video_id": video_id, "title": "Echo"},
            "llm_article_data": {
                "summary": format!("intent: {}", body["search_intent"].as_str().unwrap_or("none")),
                "table_of_contents": ["Only"],
                "article_sections": [{"heading": "Only", "content_block": "Body", "timestamp_seconds": 3725}]
            }
        })),
    )
}

#[tokio::test]
async fn test_submission_through_proxy() -> anyhow::Result<()> {
    let upstream = Server::start(Router::new().route("/process-video", post(backend))).await?;
    let proxy = Server::start(create_app(AppState::new(ProxyConfig {
        client_id: Some("id".to_string()),
        client_secret: Some("s3cret".to_string()),
        upstream_url: Some(upstream.url.clone()),
    })))
    .await?;

    let api = HttpArticleApi::new(ViewConfig::new(format!("{}/api", proxy.url)));
    let mut view = ViewController::new(api, MemorySurface::new(), Box::new(HeadlessWidget));
    view.on_player_ready();

    let outcome = view.submit("https://youtu.be/abc123?t=9", "pricing").await;

    assert_eq!(outcome, SubmitOutcome::Rendered { video_id: Some("abc123".to_string()) });
    let output = view.surface().output.clone().expect("rendered");
    assert_eq!(output.sections()[0].timestamp.as_ref().map(|t| t.label.as_str()), Some("01:02:05"));
    assert!(view.copy_to_clipboard()?);
    assert!(view
        .surface()
        .clipboard
        .as_deref()
        .unwrap_or_default()
        .contains("intent: pricing"));

    proxy.stop().await?;
    upstream.stop().await
}

#[tokio::test]
async fn test_proxy_misconfiguration_surfaces_as_error() -> anyhow::Result<()> {
    let proxy = Server::start(create_app(AppState::new(ProxyConfig::default()))).await?;

    let api = HttpArticleApi::new(ViewConfig::new(format!("{}/api", proxy.url)));
    let mut view = ViewController::new(api, MemorySurface::new(), Box::new(HeadlessWidget));

    let outcome = view.submit("https://www.youtube.com/watch?v=abc", "").await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(view.surface().error.as_deref(), Some("Server configuration error."));

    proxy.stop().await
}
