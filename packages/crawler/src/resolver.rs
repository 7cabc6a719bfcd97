//! Free-text region resolution.
//!
//! Two chained lookups: the Juso address-search API turns a place name
//! into candidate jibun addresses, and the Naver Cloud geocoder turns
//! each candidate into its province/city name. The union of those names
//! is what the pipeline maps onto region tokens.

use std::collections::BTreeSet;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::CrawlerConfig;
use crate::error::{CrawlerError, Result};

pub(crate) const JUSO_BASE_URL: &str = "http://www.juso.go.kr";
const JUSO_PATH: &str = "/addrlink/addrLinkApi.do";

pub(crate) const GEOCODE_BASE_URL: &str = "https://naveropenapi.apigw.ntruss.com";
const GEOCODE_PATH: &str = "/map-geocode/v2/geocode";

/// Status string the address API reports on success.
const JUSO_STATUS_NORMAL: &str = "정상";

#[derive(Debug, Deserialize)]
struct JusoResponse {
    results: JusoResults,
}

#[derive(Debug, Deserialize)]
struct JusoResults {
    common: JusoCommon,
    #[serde(default)]
    juso: Option<Vec<JusoEntry>>,
}

#[derive(Debug, Deserialize)]
struct JusoCommon {
    #[serde(rename = "errorMessage")]
    error_message: String,
}

#[derive(Debug, Deserialize)]
struct JusoEntry {
    #[serde(rename = "jibunAddr")]
    jibun_addr: String,
}

/// Address-search client for the Juso open API.
pub struct JusoClient {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl JusoClient {
    pub fn new(api_key: SecretString) -> Result<Self> {
        Self::with_base_url(JUSO_BASE_URL, api_key)
    }

    /// Client pointed at an alternate origin. Tests only.
    pub fn with_base_url(base_url: impl Into<String>, api_key: SecretString) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Search candidate jibun addresses for a free-text keyword.
    ///
    /// An abnormal API status yields an empty set, not an error; only
    /// transport failures and malformed bodies propagate.
    pub async fn search(&self, keyword: &str) -> Result<BTreeSet<String>> {
        let url = format!("{}{}", self.base_url, JUSO_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("keyword", keyword),
                ("confmKey", self.api_key.expose_secret()),
                ("resultType", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: JusoResponse = response.json().await?;

        if body.results.common.error_message != JUSO_STATUS_NORMAL {
            tracing::warn!(
                keyword,
                status = %body.results.common.error_message,
                "Address search returned abnormal status, treating as no candidates"
            );
            return Ok(BTreeSet::new());
        }

        Ok(body
            .results
            .juso
            .unwrap_or_default()
            .into_iter()
            .map(|entry| entry.jibun_addr)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    addresses: Vec<GeocodeAddress>,
}

#[derive(Debug, Deserialize)]
struct GeocodeAddress {
    #[serde(rename = "addressElements", default)]
    address_elements: Vec<AddressElement>,
}

#[derive(Debug, Deserialize)]
struct AddressElement {
    #[serde(rename = "shortName")]
    short_name: String,
}

/// Geocoding client for the Naver Cloud map API.
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
    api_key_id: SecretString,
    api_key: SecretString,
}

impl GeocodeClient {
    pub fn new(api_key_id: SecretString, api_key: SecretString) -> Result<Self> {
        Self::with_base_url(GEOCODE_BASE_URL, api_key_id, api_key)
    }

    /// Client pointed at an alternate origin. Tests only.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key_id: SecretString,
        api_key: SecretString,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key_id,
            api_key,
        })
    }

    /// Province/city name of the first geocoding hit for an address.
    ///
    /// A response with no addresses or no address elements is a
    /// malformed-response fault.
    pub async fn region_of(&self, address: &str) -> Result<String> {
        let url = format!(
            "{}{}?query={}",
            self.base_url,
            GEOCODE_PATH,
            urlencoding::encode(address)
        );
        let response = self
            .client
            .get(&url)
            .header("X-NCP-APIGW-API-KEY-ID", self.api_key_id.expose_secret())
            .header("X-NCP-APIGW-API-KEY", self.api_key.expose_secret())
            .send()
            .await?
            .error_for_status()?;

        let body: GeocodeResponse = response.json().await?;

        body.addresses
            .first()
            .and_then(|first| first.address_elements.first())
            .map(|element| element.short_name.clone())
            .ok_or_else(|| CrawlerError::GeocodeEmpty {
                address: address.to_string(),
            })
    }
}

/// Two-step resolver from free text to canonical region names.
pub struct RegionResolver {
    juso: JusoClient,
    geocode: GeocodeClient,
}

impl RegionResolver {
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self {
            juso: JusoClient::new(config.juso_api_key.clone())?,
            geocode: GeocodeClient::new(
                config.ncp_api_key_id.clone(),
                config.ncp_api_key.clone(),
            )?,
        })
    }

    /// Resolver built from preconfigured clients. Tests only.
    pub fn with_clients(juso: JusoClient, geocode: GeocodeClient) -> Self {
        Self { juso, geocode }
    }

    /// Resolve a free-text place name to the set of canonical region
    /// names its candidate addresses geocode into.
    ///
    /// Multiple candidates can land in different regions; the caller
    /// filters against the union. An empty set means the address search
    /// found nothing usable.
    pub async fn resolve(&self, text: &str) -> Result<BTreeSet<String>> {
        let candidates = self.juso.search(text).await?;

        let mut regions = BTreeSet::new();
        for address in &candidates {
            let region = self.geocode.region_of(address).await?;
            regions.insert(region);
        }

        tracing::debug!(
            text,
            candidates = candidates.len(),
            regions = regions.len(),
            "Resolved free-text region"
        );
        Ok(regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn juso_response_parses_normal_status() {
        let json = r#"{
            "results": {
                "common": { "errorMessage": "정상", "errorCode": "0" },
                "juso": [
                    { "jibunAddr": "서울특별시 중구 태평로1가 31" },
                    { "jibunAddr": "서울특별시 중구 태평로1가 31" }
                ]
            }
        }"#;
        let response: JusoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.common.error_message, "정상");
        assert_eq!(response.results.juso.unwrap().len(), 2);
    }

    #[test]
    fn juso_response_tolerates_missing_juso_array() {
        let json = r#"{
            "results": {
                "common": { "errorMessage": "검색결과가 없습니다." }
            }
        }"#;
        let response: JusoResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.juso.is_none());
    }

    #[test]
    fn geocode_response_parses_short_name() {
        let json = r#"{
            "addresses": [
                {
                    "addressElements": [
                        { "shortName": "서울특별시", "longName": "서울특별시" },
                        { "shortName": "중구" }
                    ]
                }
            ]
        }"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        let first = &response.addresses[0].address_elements[0];
        assert_eq!(first.short_name, "서울특별시");
    }
}
