use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::services::{MetricsSnapshot, PixService};

pub async fn get_metrics(State(service): State<Arc<PixService>>) -> Json<MetricsSnapshot> {
    Json(service.metrics())
}
