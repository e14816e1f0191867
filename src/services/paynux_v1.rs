use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::error::PixError;
use crate::models::pix::{DocumentType, GatewayVersion, PixRequest, PixResponse};
use crate::services::provider::{post_json, PixProvider, PIX_ITEM_TITLE};
use crate::utils::money::to_minor_units;

// Payload da API v1 (camelCase)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct V1Payload<'a> {
    amount: i64,
    payment_method: &'static str,
    items: [V1Item; 1],
    customer: V1Customer<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct V1Item {
    title: &'static str,
    unit_price: i64,
    quantity: u32,
    tangible: bool,
}

#[derive(Debug, Serialize)]
struct V1Customer<'a> {
    name: &'a str,
    email: &'a str,
    document: V1Document<'a>,
}

#[derive(Debug, Serialize)]
struct V1Document<'a> {
    number: &'a str,
    #[serde(rename = "type")]
    doc_type: DocumentType,
}

impl<'a> From<&'a PixRequest> for V1Payload<'a> {
    fn from(request: &'a PixRequest) -> Self {
        let amount = to_minor_units(request.amount);
        Self {
            amount,
            payment_method: "pix",
            items: [V1Item {
                title: PIX_ITEM_TITLE,
                unit_price: amount,
                quantity: 1,
                tangible: false,
            }],
            customer: V1Customer {
                name: &request.name,
                email: &request.email,
                document: V1Document {
                    number: &request.document,
                    doc_type: DocumentType::infer(&request.document),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct V1Response {
    id: i64,
    pix: V1Pix,
}

#[derive(Debug, Deserialize)]
struct V1Pix {
    qrcode: String,
}

impl From<V1Response> for PixResponse {
    fn from(response: V1Response) -> Self {
        Self {
            // v1 nunca devolve a imagem em base64
            qr_code_base64: String::new(),
            qr_code_url: None,
            pix_string: response.pix.qrcode,
            transaction_id: Some(response.id.to_string()),
        }
    }
}

pub struct PaynuxV1Provider {
    endpoint: Url,
    client: Client,
}

impl PaynuxV1Provider {
    pub fn new(base_url: &str, client: Client) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(&format!("{}/transactions", base_url.trim_end_matches('/')))?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PixProvider for PaynuxV1Provider {
    fn version(&self) -> GatewayVersion {
        GatewayVersion::V1
    }

    async fn generate_pix(&self, request: &PixRequest) -> Result<PixResponse, PixError> {
        let payload = V1Payload::from(request);
        let response: V1Response =
            post_json(&self.client, &self.endpoint, self.version(), request, &payload).await?;

        info!("Paynux v1 created transaction {}", response.id);
        Ok(response.into())
    }
}
