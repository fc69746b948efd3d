use std::{net::SocketAddr, time::Duration};

use hkstocks_market_data::provider::{aastocks, hkex};

/// Prefix applied to every route when `ADD_APP_NAME` is truthy, for
/// deployments behind a reverse proxy that routes on the app name.
pub const APP_NAME_PREFIX: &str = "/hkstocks";

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Empty, or [`APP_NAME_PREFIX`].
    pub path_prefix: String,
    pub cors_allow: Vec<String>,
    /// Server-wide bound per request; kept above `upstream_timeout` so a slow
    /// source is reported as a provider failure.
    pub request_timeout: Duration,
    pub upstream_timeout: Duration,
    pub lot_size_url: String,
    pub dividend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            path_prefix: String::new(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(45000),
            upstream_timeout: Duration::from_millis(30000),
            lot_size_url: hkex::DEFAULT_SECURITIES_LIST_URL.to_string(),
            dividend_url: aastocks::DEFAULT_DIVIDEND_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = std::env::var("HKSTOCKS_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid HKSTOCKS_LISTEN_ADDR");
        let add_app_name = std::env::var("ADD_APP_NAME").unwrap_or_else(|_| "False".into());
        let path_prefix = if is_truthy(&add_app_name) {
            APP_NAME_PREFIX.to_string()
        } else {
            String::new()
        };
        let cors_allow = std::env::var("HKSTOCKS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = duration_ms("HKSTOCKS_REQUEST_TIMEOUT_MS", defaults.request_timeout);
        let upstream_timeout =
            duration_ms("HKSTOCKS_UPSTREAM_TIMEOUT_MS", defaults.upstream_timeout);
        let lot_size_url = std::env::var("HKSTOCKS_LOT_SIZE_URL").unwrap_or(defaults.lot_size_url);
        let dividend_url = std::env::var("HKSTOCKS_DIVIDEND_URL").unwrap_or(defaults.dividend_url);

        Self {
            listen_addr,
            path_prefix,
            cors_allow,
            request_timeout,
            upstream_timeout,
            lot_size_url,
            dividend_url,
        }
    }
}

/// Accepted truthy forms: `true`, `1`, `t` (case-insensitive).
pub fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "t")
}

fn duration_ms(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
