use std::net::{Ipv4Addr, SocketAddr};

pub const API_PREFIX: &str = "/api/v1";
pub const SERVICE_NAME: &str = "Cerebro API";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info,axum=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
        }
    }
}
