//! Subscription-calendar client for the ApplyHome portal.

use std::time::Duration;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{CrawlerError, Result};
use crate::types::ListingRecord;

/// Production portal origin shared by the calendar and detail endpoints.
pub(crate) const APPLYHOME_BASE_URL: &str = "https://www.applyhome.co.kr";

const CALENDAR_PATH: &str = "/ai/aib/selectSubscrptCalender.do";

/// Browser user-agent; the portal rejects obvious bot agents.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36";

#[derive(Debug, Serialize)]
struct CalendarRequest<'a> {
    #[serde(rename = "reqData")]
    req_data: ReqData<'a>,
}

#[derive(Debug, Serialize)]
struct ReqData<'a> {
    /// Inquiry period, YYYYMM
    #[serde(rename = "inqirePd")]
    inqire_pd: &'a str,
}

#[derive(Debug, Deserialize)]
struct CalendarResponse {
    #[serde(rename = "schdulList", default)]
    schdul_list: Vec<ListingRecord>,
}

/// Client for the monthly subscription calendar feed.
pub struct CalendarClient {
    client: reqwest::Client,
    base_url: String,
}

impl CalendarClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(APPLYHOME_BASE_URL)
    }

    /// Client pointed at an alternate origin. Tests only.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the current month's listing calendar, unmodified.
    pub async fn fetch_current_month(&self) -> Result<Vec<ListingRecord>> {
        let period = Local::now().format("%Y%m").to_string();
        self.fetch_period(&period).await
    }

    /// Fetch the listing calendar for a YYYYMM inquiry period.
    pub async fn fetch_period(&self, period: &str) -> Result<Vec<ListingRecord>> {
        let url = format!("{}{}", self.base_url, CALENDAR_PATH);
        let request = CalendarRequest {
            req_data: ReqData { inqire_pd: period },
        };

        let response = self
            .client
            .post(&url)
            .header(
                reqwest::header::ACCEPT,
                "application/json, text/javascript, */*; q=0.01",
            )
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlerError::CalendarFetch { status });
        }

        let body: CalendarResponse = response.json().await?;
        tracing::debug!(
            period,
            listings = body.schdul_list.len(),
            "Fetched subscription calendar"
        );
        Ok(body.schdul_list)
    }
}
