//! Server configuration.

use std::path::PathBuf;

/// Transport binding configuration, supplied by the binary's CLI.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory of static assets served at the root path
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3500,
            public_dir: PathBuf::from("public"),
        }
    }
}
