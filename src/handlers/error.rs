use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::PixError;

/// Erro devolvido ao chamador como texto puro.
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

// Validação e falhas do gateway saem todas como 500 com a mensagem do erro
impl From<PixError> for HttpError {
    fn from(err: PixError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}
