//! Server configuration.

use std::net::SocketAddr;

/// Filled in by the CLI from flags and environment (`FRA_ATLAS_BIND`,
/// `BLAND_API_KEY`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Bearer credential for the outbound call API. Absent means the call
    /// endpoint answers 500 until one is configured.
    pub bland_api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: ([127, 0, 0, 1], 8080).into(),
            bland_api_key: None,
        }
    }
}
