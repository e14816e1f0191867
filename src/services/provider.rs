use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::error::PixError;
use crate::models::pix::{GatewayVersion, PixRequest, PixResponse};

pub const PIX_ITEM_TITLE: &str = "PIX Payment";

/// Integração com uma versão da API do gateway Paynux.
#[async_trait]
pub trait PixProvider: Send + Sync {
    fn version(&self) -> GatewayVersion;

    async fn generate_pix(&self, request: &PixRequest) -> Result<PixResponse, PixError>;
}

/// POST JSON com basic auth usando as credenciais do chamador e decodifica a resposta.
pub(crate) async fn post_json<P, R>(
    client: &Client,
    url: &Url,
    version: GatewayVersion,
    request: &PixRequest,
    payload: &P,
) -> Result<R, PixError>
where
    P: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let transport = move |source: reqwest::Error| PixError::Transport { version, source };

    let response = client
        .post(url.clone())
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .basic_auth(&request.public_key, Some(&request.secret_key))
        .json(payload)
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if !status.is_success() {
        warn!("Paynux {} returned status {}", version, status);
        return Err(PixError::UpstreamStatus {
            version,
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|source| PixError::Decode { version, source })
}
