use va_core::ProxyConfig;

use crate::forwarder::Forwarder;

pub struct AppState {
    pub config: ProxyConfig,
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            config,
            forwarder: Forwarder::default(),
        }
    }
}
