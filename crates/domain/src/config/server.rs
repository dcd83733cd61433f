use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Directory holding the static front-end shell.
    #[serde(default = "default_web_root")]
    pub web_root: String,
}

fn default_web_port() -> u16 {
    8888
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_web_root() -> String {
    "web".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_port: default_web_port(),
            bind_address: default_bind_address(),
            cors_allowed_origins: default_cors_origins(),
            web_root: default_web_root(),
        }
    }
}

impl ServerConfig {
    /// Listen address; `bind_address` may be IPv4 or IPv6 (`::`).
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.trim().parse().map_err(|_| {
            ConfigError::Invalid(format!(
                "server.bind_address must be an IP address, got '{}'",
                self.bind_address
            ))
        })?;
        Ok(SocketAddr::new(ip, self.web_port))
    }
}
