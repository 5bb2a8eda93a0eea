use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::DashError;

pub const DEFAULT_DATA_PATH: &str = "data/country_data_master.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

/// Process configuration. Every field has a default; the environment can
/// override them with `DASHBOARD_DATA`, `DASHBOARD_HOST` and `DASHBOARD_PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, DashError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DashError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("DASHBOARD_DATA") {
            config.data_path = PathBuf::from(path);
        }
        if let Some(host) = get("DASHBOARD_HOST") {
            config.host = host.trim().to_string();
        }
        if let Some(port) = get("DASHBOARD_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| DashError::Config(format!("DASHBOARD_PORT is not a port: {port}")))?;
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, DashError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| DashError::Config(format!("invalid host address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
