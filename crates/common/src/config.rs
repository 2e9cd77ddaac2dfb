use std::net::SocketAddr;

use serde::Deserialize;

/// Channels the server refuses to start without, unless overridden.
pub const DEFAULT_REQUIRED_CHANNELS: &str = "email,sms,slack";

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface the HTTP server binds to (default: 0.0.0.0)
    pub host: String,

    /// HTTP listen port (default: 8080)
    pub port: u16,

    /// Channel names that must be registered before the server accepts traffic
    pub required_channels: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            required_channels: parse_channel_list(DEFAULT_REQUIRED_CHANNELS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            host: std::env::var("HERALD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("HERALD_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("HERALD_PORT must be a valid u16"))?,
            required_channels: parse_channel_list(
                &std::env::var("HERALD_REQUIRED_CHANNELS")
                    .unwrap_or_else(|_| DEFAULT_REQUIRED_CHANNELS.to_string()),
            ),
        })
    }

    /// Socket address built from `host` and `port`.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}

/// Split a comma-separated channel list, trimming whitespace and dropping empties.
///
/// Channel names are case-sensitive, so no case folding happens here.
pub fn parse_channel_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
