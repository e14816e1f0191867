use std::env;
use std::time::Duration;

pub const DEFAULT_V1_BASE_URL: &str = "https://api.paynuxpayments.com.br/v1";
pub const DEFAULT_V2_ENDPOINT: &str = "https://api.paynuxpayments.com/v1/payment-transaction/create";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub v1_base_url: String,
    pub v2_endpoint: String,
    pub upstream_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            v1_base_url: DEFAULT_V1_BASE_URL.to_string(),
            v2_endpoint: DEFAULT_V2_ENDPOINT.to_string(),
            upstream_timeout_secs: 15,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            v1_base_url: lookup("PAYNUX_V1_BASE_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.v1_base_url),
            v2_endpoint: lookup("PAYNUX_V2_ENDPOINT")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.v2_endpoint),
            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.upstream_timeout_secs),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
