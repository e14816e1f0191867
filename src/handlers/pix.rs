use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::handlers::error::HttpError;
use crate::models::pix::{PixRequest, PixResponse};
use crate::services::PixService;
use crate::utils::money::format_currency;

pub const GENERATE_PIX_PATH: &str = "/api/pix/generate";

pub async fn generate_pix(
    State(service): State<Arc<PixService>>,
    body: Bytes,
) -> Result<Json<PixResponse>, HttpError> {
    let request: PixRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Invalid PIX request payload: {}", e);
        HttpError::new(StatusCode::BAD_REQUEST, "Invalid request payload")
    })?;

    info!(
        "Received PIX generation request for version: {}, email: {}, amount: {}",
        request.version,
        request.email,
        format_currency(request.amount)
    );

    let response = service.generate_pix(&request).await?;
    Ok(Json(response))
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> HttpError {
    HttpError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
