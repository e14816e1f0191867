pub mod atomic_metrics;
pub mod http_client;
pub mod paynux_v1;
pub mod paynux_v2;
pub mod pix_service;
pub mod provider;

pub use atomic_metrics::MetricsSnapshot;
pub use pix_service::PixService;
