use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use va_core::{Result, UpstreamTarget};

pub const CLIENT_ID_HEADER: &str = "CF-Access-Client-Id";
pub const CLIENT_SECRET_HEADER: &str = "CF-Access-Client-Secret";

/// Status and JSON body exactly as the upstream returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

/// Sends one request to the upstream backend. No retries, no timeout.
#[derive(Debug, Clone, Default)]
pub struct Forwarder {
    client: Client,
}

impl Forwarder {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn forward(&self, target: &UpstreamTarget, payload: &Value) -> Result<UpstreamReply> {
        let url = target.process_video_url();
        tracing::debug!("Forwarding request to {}", url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(CLIENT_ID_HEADER, &target.client_id)
            .header(CLIENT_SECRET_HEADER, &target.client_secret)
            .body(serde_json::to_vec(payload)?)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.json::<Value>().await?;
        tracing::debug!("Upstream answered with status {}", status);

        Ok(UpstreamReply { status, body })
    }
}
