//! Read-only settings shared by all handlers

use std::time::Duration;

use super::config::HttpServerConfig;

/// Values handlers read on every request; never mutated after boot
#[derive(Debug, Clone)]
pub struct ServiceState {
    pub beautify_delay: Duration,
    pub inpaint_delay: Duration,
    pub demo_credits: u32,
}

impl ServiceState {
    pub fn from_config(config: &HttpServerConfig) -> Self {
        Self {
            beautify_delay: config.beautify_delay(),
            inpaint_delay: config.inpaint_delay(),
            demo_credits: config.demo_credits,
        }
    }
}
