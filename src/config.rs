//! Server configuration parsed from environment variables.
//!
//! Leptos options (site root, default address) come from the workspace
//! `[[workspace.metadata.leptos]]` section via `get_configuration`; the
//! variables here only override them for deployment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen on all interfaces at this port instead of the Leptos site address.
    pub port: Option<u16>,
    /// Directory containing the compiled `pkg/` assets.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, binds `0.0.0.0` when set
    /// - `SITE_ROOT`: asset directory, defaults to the Leptos site root
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => Some(parse_port(&raw)?),
            Err(_) => None,
        };
        let site_root = std::env::var("SITE_ROOT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { port, site_root })
    }

    /// Address to bind, given the Leptos-configured `site_addr`.
    #[must_use]
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
            None => site_addr,
        }
    }

    /// Asset directory, given the Leptos-configured site root.
    #[must_use]
    pub fn site_root(&self, leptos_site_root: &str) -> PathBuf {
        self.site_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(leptos_site_root))
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
