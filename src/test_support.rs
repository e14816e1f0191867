//! Gateways falsos para os testes: servidores axum reais em 127.0.0.1:0.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use crate::models::pix::PixRequest;

/// `Basic base64("pk:sk")`
pub const PK_SK_BASIC_AUTH: &str = "Basic cGs6c2s=";

pub fn sample_request(version: &str) -> PixRequest {
    PixRequest {
        public_key: "pk".to_string(),
        secret_key: "sk".to_string(),
        name: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        document: "12345678901".to_string(),
        amount: 10.50,
        version: version.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct StubGateway {
    base_url: String,
    state: StubState,
}

impl StubGateway {
    /// Sobe um gateway que responde `status` + `body` a todo POST em `path`.
    pub async fn spawn(path: &str, status: StatusCode, body: impl Into<String>) -> Self {
        let state = StubState {
            status,
            body: body.into(),
            captured: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route(path, post(stub_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn call_count(&self) -> usize {
        self.state.captured.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().unwrap().clone()
    }
}

async fn stub_handler(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let captured = CapturedRequest {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    state.captured.lock().unwrap().push(captured);

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// URL de uma porta local que acabou de ser liberada, para simular gateway fora do ar.
pub async fn closed_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1", addr)
}
