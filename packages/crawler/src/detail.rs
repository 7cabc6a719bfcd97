//! Detail-page expansion.
//!
//! For each retained listing: pick the detail endpoint by house-type
//! bucket, POST the announcement identifiers as a form, convert the
//! response HTML to Markdown, and extract the attachment download link.

use std::path::Path;
use std::time::Duration;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::calendar::{APPLYHOME_BASE_URL, BROWSER_USER_AGENT};
use crate::error::{CrawlerError, Result};
use crate::types::{ExpandedListing, ListingRecord, ListingSummary};

/// Program id the portal expects on detail requests.
const DETAIL_PROGRAM_ID: &str = "AIB01M01";

/// CSS selector of the attachment anchor on detail pages.
const ATTACHMENT_SELECTOR: &str = "a.radius_btn";

/// Detail endpoint path for a house-type code bucket.
///
/// Selection is total: codes 01/09 are regular subscriptions, 04/06/11
/// remainder subscriptions, and everything else private rental.
pub fn detail_path(house_secd: &str) -> &'static str {
    match house_secd {
        "01" | "09" => "/ai/aia/selectAPTLttotPblancDetail.do",
        "04" | "06" | "11" => "/ai/aia/selectAPTRemndrLttotPblancDetailView.do",
        _ => "/ai/aia/selectPRMOLttotPblancDetailView.do",
    }
}

/// Display file name for a listing's attachment, metadata only.
pub fn display_file_name(summary: &ListingSummary) -> String {
    format!("{}_{}_{}.pdf", summary.title, summary.region, summary.date)
}

#[derive(Debug, Serialize)]
struct DetailRequest<'a> {
    #[serde(rename = "houseManageNo")]
    house_manage_no: &'a str,
    #[serde(rename = "pblancNo")]
    pblanc_no: &'a str,
    #[serde(rename = "houseSecd")]
    house_secd: &'a str,
    #[serde(rename = "gvPgmId")]
    gv_pgm_id: &'a str,
}

/// Client for the announcement detail endpoints.
pub struct DetailClient {
    client: reqwest::Client,
    base_url: String,
}

impl DetailClient {
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

    /// Expand one retained listing with its detail page and attachment.
    ///
    /// A non-success status is a hard fault, and so is a detail page
    /// without the attachment anchor.
    pub async fn expand(&self, listing: &ListingRecord) -> Result<ExpandedListing> {
        let summary = ListingSummary::from(listing);
        let file_name = display_file_name(&summary);

        let url = format!("{}{}", self.base_url, detail_path(&summary.house_secd));
        let form = DetailRequest {
            house_manage_no: &summary.house_manage_no,
            pblanc_no: &summary.pblanc_no,
            house_secd: &summary.house_secd,
            gv_pgm_id: DETAIL_PROGRAM_ID,
        };

        let response = self.client.post(&url).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlerError::DetailFetchFailed {
                status,
                pblanc_no: summary.pblanc_no.clone(),
            });
        }

        let html = response.text().await?;
        let markdown =
            htmd::convert(&html).map_err(|e| CrawlerError::Markdown(e.to_string()))?;
        let attachment_url = extract_attachment_url(&html).ok_or_else(|| {
            CrawlerError::AttachmentLinkMissing {
                pblanc_no: summary.pblanc_no.clone(),
            }
        })?;

        tracing::debug!(
            pblanc_no = %summary.pblanc_no,
            %attachment_url,
            "Expanded listing detail"
        );

        Ok(ExpandedListing {
            listing: summary,
            file_name,
            markdown,
            attachment_url,
        })
    }

    /// Download the attachment behind `url` and write it to `path`.
    ///
    /// The crawl pipeline only returns the attachment URL; saving the
    /// document is left to the caller.
    pub async fn download_attachment(&self, url: &str, path: &Path) -> Result<()> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        tokio::fs::write(path, &bytes).await?;
        tracing::info!(url, path = %path.display(), bytes = bytes.len(), "Saved attachment");
        Ok(())
    }
}

/// `href` of the first attachment anchor in a detail page, if any.
fn extract_attachment_url(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(ATTACHMENT_SELECTOR).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn every_defined_code_maps_to_exactly_one_endpoint() {
        let endpoints = [
            "/ai/aia/selectAPTLttotPblancDetail.do",
            "/ai/aia/selectAPTRemndrLttotPblancDetailView.do",
            "/ai/aia/selectPRMOLttotPblancDetailView.do",
        ];
        for label in codes::CATEGORY_LABELS {
            for code in codes::codes_for(label).unwrap() {
                let path = detail_path(code);
                assert!(endpoints.contains(&path), "no endpoint for code {code}");
            }
        }
    }

    #[test]
    fn bucket_assignment_matches_house_type_codes() {
        assert_eq!(detail_path("01"), "/ai/aia/selectAPTLttotPblancDetail.do");
        assert_eq!(detail_path("09"), "/ai/aia/selectAPTLttotPblancDetail.do");
        assert_eq!(
            detail_path("04"),
            "/ai/aia/selectAPTRemndrLttotPblancDetailView.do"
        );
        assert_eq!(
            detail_path("06"),
            "/ai/aia/selectAPTRemndrLttotPblancDetailView.do"
        );
        assert_eq!(
            detail_path("11"),
            "/ai/aia/selectAPTRemndrLttotPblancDetailView.do"
        );
        assert_eq!(
            detail_path("05"),
            "/ai/aia/selectPRMOLttotPblancDetailView.do"
        );
    }

    #[test]
    fn extracts_attachment_href() {
        let html = r#"
            <html><body>
              <a class="other_btn" href="/wrong.pdf">다른 버튼</a>
              <a class="radius_btn" href="https://static.example.com/notice.pdf">공고문 다운로드</a>
            </body></html>
        "#;
        assert_eq!(
            extract_attachment_url(html).as_deref(),
            Some("https://static.example.com/notice.pdf")
        );
    }

    #[test]
    fn missing_anchor_yields_none() {
        let html = "<html><body><p>첨부파일 없음</p></body></html>";
        assert!(extract_attachment_url(html).is_none());
    }

    #[test]
    fn file_name_joins_title_region_and_date() {
        let summary = ListingSummary {
            title: "테스트 1단지".to_string(),
            region: "서울".to_string(),
            date: "2025-08-01".to_string(),
            house_manage_no: "2025000001".to_string(),
            pblanc_no: "2025000001".to_string(),
            house_secd: "01".to_string(),
        };
        assert_eq!(display_file_name(&summary), "테스트 1단지_서울_2025-08-01.pdf");
    }
}
