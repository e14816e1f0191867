use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::error::PixError;
use crate::models::pix::{DocumentType, GatewayVersion, PixRequest, PixResponse};
use crate::services::provider::{post_json, PixProvider, PIX_ITEM_TITLE};
use crate::utils::money::to_minor_units;

// Telefone é obrigatório na v2, mas não faz parte do nosso request
const PLACEHOLDER_PHONE: &str = "00000000000";

#[derive(Debug, Serialize)]
struct V2Payload<'a> {
    payment_method: &'static str,
    customer: V2Customer<'a>,
    amount: i64,
    items: [V2Item; 1],
    metadata: V2Metadata<'a>,
}

#[derive(Debug, Serialize)]
struct V2Customer<'a> {
    document: V2Document<'a>,
    name: &'a str,
    email: &'a str,
    phone: &'static str,
}

#[derive(Debug, Serialize)]
struct V2Document<'a> {
    #[serde(rename = "type")]
    doc_type: DocumentType,
    number: &'a str,
}

#[derive(Debug, Serialize)]
struct V2Item {
    title: &'static str,
    unit_price: i64,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct V2Metadata<'a> {
    provider_name: &'a str,
}

impl<'a> From<&'a PixRequest> for V2Payload<'a> {
    fn from(request: &'a PixRequest) -> Self {
        let amount = to_minor_units(request.amount);
        Self {
            payment_method: "pix",
            customer: V2Customer {
                document: V2Document {
                    doc_type: DocumentType::infer(&request.document),
                    number: &request.document,
                },
                name: &request.name,
                email: &request.email,
                phone: PLACEHOLDER_PHONE,
            },
            amount,
            items: [V2Item {
                title: PIX_ITEM_TITLE,
                unit_price: amount,
                quantity: 1,
            }],
            metadata: V2Metadata {
                provider_name: &request.name,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct V2Envelope {
    #[serde(default)]
    success: bool,
    // só interpretado depois de checar `success`
    #[serde(default)]
    data: serde_json::Value,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct V2Data {
    id: String,
    pix: V2Pix,
}

#[derive(Debug, Deserialize)]
struct V2Pix {
    qr_code: String,
    url: Option<String>,
}

impl From<V2Data> for PixResponse {
    fn from(data: V2Data) -> Self {
        Self {
            qr_code_base64: String::new(),
            qr_code_url: data.pix.url.filter(|url| !url.is_empty()),
            pix_string: data.pix.qr_code,
            transaction_id: Some(data.id),
        }
    }
}

pub struct PaynuxV2Provider {
    endpoint: Url,
    client: Client,
}

impl PaynuxV2Provider {
    pub fn new(endpoint: &str, client: Client) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PixProvider for PaynuxV2Provider {
    fn version(&self) -> GatewayVersion {
        GatewayVersion::V2
    }

    async fn generate_pix(&self, request: &PixRequest) -> Result<PixResponse, PixError> {
        let version = self.version();
        let payload = V2Payload::from(request);
        let envelope: V2Envelope =
            post_json(&self.client, &self.endpoint, version, request, &payload).await?;

        if !envelope.success {
            warn!("Paynux v2 rejected the request: {:?}", envelope.message);
            return Err(PixError::UpstreamRejected {
                version,
                message: envelope.message,
            });
        }

        let data: V2Data = serde_json::from_value(envelope.data)
            .map_err(|source| PixError::Decode { version, source })?;

        info!("Paynux v2 created transaction {}", data.id);
        Ok(data.into())
    }
}
