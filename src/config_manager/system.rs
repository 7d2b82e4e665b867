use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// System configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on the request body of `/analyze-image`, in bytes
    #[serde(rename = "max_upload_bytes")]
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl SystemConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid host '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}
