use std::sync::Arc;
use tracing::{error, info, warn};

use crate::app::config::Config;
use crate::error::PixError;
use crate::models::pix::{GatewayVersion, PixRequest, PixResponse};
use crate::services::atomic_metrics::{AtomicMetrics, MetricsSnapshot};
use crate::services::http_client::build_client;
use crate::services::paynux_v1::PaynuxV1Provider;
use crate::services::paynux_v2::PaynuxV2Provider;
use crate::services::provider::PixProvider;

pub struct PixService {
    v1_provider: Arc<dyn PixProvider>,
    v2_provider: Arc<dyn PixProvider>,
    metrics: AtomicMetrics,
}

impl PixService {
    pub fn new(v1_provider: Arc<dyn PixProvider>, v2_provider: Arc<dyn PixProvider>) -> Self {
        Self {
            v1_provider,
            v2_provider,
            metrics: AtomicMetrics::new(),
        }
    }

    /// Monta os dois adapters Paynux a partir da configuração, compartilhando um único client HTTP.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = build_client(config.upstream_timeout())?;
        let v1 = PaynuxV1Provider::new(&config.v1_base_url, client.clone())?;
        let v2 = PaynuxV2Provider::new(&config.v2_endpoint, client)?;

        info!("Paynux v1 endpoint: {}", v1.endpoint());
        info!("Paynux v2 endpoint: {}", v2.endpoint());

        Ok(Self::new(Arc::new(v1), Arc::new(v2)))
    }

    pub async fn generate_pix(&self, request: &PixRequest) -> Result<PixResponse, PixError> {
        self.metrics.increment_received();

        let result = match validate(request) {
            Ok(version) => self.provider_for(version).generate_pix(request).await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(_) => self.metrics.increment_generated(),
            Err(e) if e.is_client_error() => {
                self.metrics.increment_rejected();
                warn!("Rejected PIX request: {}", e);
            }
            Err(e) => {
                self.metrics.increment_upstream_failed();
                error!("Paynux call failed: {}", e);
            }
        }

        result
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn provider_for(&self, version: GatewayVersion) -> &dyn PixProvider {
        match version {
            GatewayVersion::V1 => self.v1_provider.as_ref(),
            GatewayVersion::V2 => self.v2_provider.as_ref(),
        }
    }
}

fn validate(request: &PixRequest) -> Result<GatewayVersion, PixError> {
    // `!(x > 0)` também rejeita NaN
    if !(request.amount > 0.0) {
        return Err(PixError::InvalidAmount);
    }
    if request.public_key.is_empty() || request.secret_key.is_empty() {
        return Err(PixError::MissingCredentials);
    }
    request.version.parse()
}
