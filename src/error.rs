use thiserror::Error;

use crate::models::pix::GatewayVersion;

#[derive(Debug, Error)]
pub enum PixError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("missing API keys")]
    MissingCredentials,

    #[error("unsupported paynux version: {0} (must be v1 or v2)")]
    UnsupportedVersion(String),

    #[error("paynux {version} api returned error status: {status}, detail: {body}")]
    UpstreamStatus {
        version: GatewayVersion,
        status: u16,
        body: String,
    },

    #[error("paynux {version} api returned success: false{}", detail_suffix(.message))]
    UpstreamRejected {
        version: GatewayVersion,
        message: Option<String>,
    },

    #[error("failed to execute paynux {version} request: {source}")]
    Transport {
        version: GatewayVersion,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode paynux {version} response: {source}")]
    Decode {
        version: GatewayVersion,
        #[source]
        source: serde_json::Error,
    },
}

impl PixError {
    /// Erros causados pelo payload do chamador, detectados antes de qualquer chamada externa.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PixError::InvalidAmount | PixError::MissingCredentials | PixError::UnsupportedVersion(_)
        )
    }
}

fn detail_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) if !message.is_empty() => format!(": {}", message),
        _ => String::new(),
    }
}
