//! Crawler configuration loaded from environment variables.

use std::env;

use dotenvy::dotenv;
use secrecy::SecretString;

use crate::error::{CrawlerError, Result};

/// API credentials for the address-search and geocoding services.
///
/// The five portal/detail URLs are fixed constants and take no
/// configuration; only the resolver chain needs keys.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Juso address-search confirmation key (`JUSO_API_KEY`)
    pub juso_api_key: SecretString,
    /// Naver Cloud API gateway key id (`X_NCP_APIGW_API_KEY_ID`)
    pub ncp_api_key_id: SecretString,
    /// Naver Cloud API gateway key (`X_NCP_APIGW_API_KEY`)
    pub ncp_api_key: SecretString,
}

impl CrawlerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            juso_api_key: require("JUSO_API_KEY")?,
            ncp_api_key_id: require("X_NCP_APIGW_API_KEY_ID")?,
            ncp_api_key: require("X_NCP_APIGW_API_KEY")?,
        })
    }
}

fn require(name: &'static str) -> Result<SecretString> {
    env::var(name)
        .map(SecretString::from)
        .map_err(|_| CrawlerError::MissingEnv(name))
}
