use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use va_core::{ProcessVideoRequest, Result, ViewConfig};

/// Raw settled response; the body is kept as text so that non-JSON bodies
/// can still be reported with their status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait ArticleApi: Send + Sync {
    /// Submit one video. `Err` only for transport failures; any HTTP status
    /// is an `Ok`.
    async fn process_video(&self, request: &ProcessVideoRequest) -> Result<ApiResponse>;
}

/// Client for the proxy's `process-video` endpoint.
#[derive(Debug, Clone)]
pub struct HttpArticleApi {
    client: Client,
    config: ViewConfig,
}

impl HttpArticleApi {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ArticleApi for HttpArticleApi {
    async fn process_video(&self, request: &ProcessVideoRequest) -> Result<ApiResponse> {
        let url = self.config.process_video_url();
        tracing::debug!("POST {} for {}", url, request.video_url);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("API response status: {}", status);

        Ok(ApiResponse { status, body })
    }
}
