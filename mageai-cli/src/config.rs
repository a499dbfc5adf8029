//! Configuration module
//!
//! Host and API key resolution: flags win over the MAGEAI_HOST /
//! MAGEAI_API_KEY environment variables (clap's env fallback implements the
//! precedence).

use mageai_client::ClientConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base host of the Mage AI server
    pub host: String,
    /// API key for the X-API-KEY header
    pub api_key: String,
}

impl Config {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            host: self.host.clone(),
            api_key: self.api_key.clone(),
        }
    }
}
