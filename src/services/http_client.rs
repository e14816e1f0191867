use reqwest::Client;
use std::time::Duration;

/// Cliente compartilhado pelos dois adapters: timeout fixo por chamada, sem retry.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(20) // Mantém conexões vivas
        .pool_idle_timeout(Duration::from_secs(30))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
}
