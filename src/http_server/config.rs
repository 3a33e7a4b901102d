//! HTTP Server Configuration
//!
//! Bind address, CORS origins and the simulated model latencies. Every field
//! has a default so a config file only needs the values it changes.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Simulated beautification latency in milliseconds
    #[serde(default = "default_beautify_delay_ms")]
    pub beautify_delay_ms: u64,

    /// Simulated inpainting latency in milliseconds
    #[serde(default = "default_inpaint_delay_ms")]
    pub inpaint_delay_ms: u64,

    /// Credits reported for the demo user
    #[serde(default = "default_demo_credits")]
    pub demo_credits: u32,

    /// Largest accepted request body; base64 photos are a third larger than the file
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(), // React dev server
        "http://localhost:3001".to_string(),
    ]
}

fn default_beautify_delay_ms() -> u64 {
    2000
}

fn default_inpaint_delay_ms() -> u64 {
    3000
}

fn default_demo_credits() -> u32 {
    100
}

fn default_max_body_bytes() -> usize {
    25 * 1024 * 1024
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            beautify_delay_ms: default_beautify_delay_ms(),
            inpaint_delay_ms: default_inpaint_delay_ms(),
            demo_credits: default_demo_credits(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: HttpServerConfig = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid("max_body_bytes must be > 0".to_string()));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn beautify_delay(&self) -> Duration {
        Duration::from_millis(self.beautify_delay_ms)
    }

    pub fn inpaint_delay(&self) -> Duration {
        Duration::from_millis(self.inpaint_delay_ms)
    }
}
