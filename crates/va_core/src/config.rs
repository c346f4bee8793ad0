use std::env;
use std::fmt;

use crate::{Error, Result};

pub const CLIENT_ID_ENV: &str = "CF_ACCESS_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "CF_ACCESS_CLIENT_SECRET";
pub const UPSTREAM_URL_ENV: &str = "CLOUDFLARE_TUNNEL_URL";
pub const API_BASE_URL_ENV: &str = "VA_API_BASE_URL";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// Proxy settings. Every field may be absent; the proxy only checks them
/// when a request arrives.
#[derive(Clone, Default)]
pub struct ProxyConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub upstream_url: Option<String>,
}

/// Credentials and target, all present.
#[derive(Clone)]
pub struct UpstreamTarget {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        Self {
            client_id: env::var(CLIENT_ID_ENV).ok(),
            client_secret: env::var(CLIENT_SECRET_ENV).ok(),
            upstream_url: env::var(UPSTREAM_URL_ENV).ok(),
        }
    }

    /// Resolve the upstream target. Credentials are checked before the URL;
    /// empty strings count as missing.
    pub fn target(&self) -> Result<UpstreamTarget> {
        let (client_id, client_secret) = match (non_empty(&self.client_id), non_empty(&self.client_secret)) {
            (Some(id), Some(secret)) => (id, secret),
            _ => {
                return Err(Error::Config(
                    "Cloudflare Access credentials missing.".to_string(),
                ))
            }
        };
        let base_url = non_empty(&self.upstream_url)
            .ok_or_else(|| Error::Config("Target tunnel URL missing.".to_string()))?;

        Ok(UpstreamTarget {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("client_id", &self.client_id.as_deref().map(|_| "<redacted>"))
            .field("client_secret", &self.client_secret.as_deref().map(|_| "<redacted>"))
            .field("upstream_url", &self.upstream_url)
            .finish()
    }
}

impl UpstreamTarget {
    pub fn process_video_url(&self) -> String {
        format!("{}/process-video", self.base_url)
    }
}

impl fmt::Debug for UpstreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamTarget")
            .field("client_id", &"<redacted>")
            .field("client_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Settings of the view controller's API client.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub api_base_url: String,
}

impl ViewConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
    }

    pub fn process_video_url(&self) -> String {
        format!("{}/process-video", self.api_base_url)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ProxyConfig {
        ProxyConfig {
            client_id: Some("id".to_string()),
            client_secret: Some("secret".to_string()),
            upstream_url: Some("https://tunnel.example.com/".to_string()),
        }
    }

    #[test]
    fn test_target_resolves() {
        let target = full().target().unwrap();
        assert_eq!(target.process_video_url(), "https://tunnel.example.com/process-video");
        assert_eq!(target.client_id, "id");
    }

    #[test]
    fn test_missing_credentials_checked_first() {
        let config = ProxyConfig {
            client_secret: Some(String::new()),
            upstream_url: None,
            ..full()
        };
        let err = config.target().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Cloudflare Access credentials missing.");
    }

    #[test]
    fn test_missing_upstream_url() {
        let config = ProxyConfig {
            upstream_url: None,
            ..full()
        };
        match config.target() {
            Err(Error::Config(detail)) => assert_eq!(detail, "Target tunnel URL missing."),
            other => panic!("unexpected: {:?}", other.map(|t| t.base_url)),
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let printed = format!("{:?}", full());
        assert!(!printed.contains("secret\""));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_view_config_url() {
        let config = ViewConfig::new("http://localhost:3000/api/");
        assert_eq!(config.process_video_url(), "http://localhost:3000/api/process-video");
    }
}
