//! Upstream record shapes and expanded output types.

use serde::{Deserialize, Serialize};

/// One raw announcement record from the subscription calendar feed.
///
/// Field names mirror the upstream JSON; fields the pipeline does not
/// consume are ignored on deserialization. Records are immutable once
/// fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingRecord {
    /// Announcement display name
    #[serde(rename = "HOUSE_NM")]
    pub house_nm: String,
    /// Region name in the portal's short form (e.g. "서울")
    #[serde(rename = "SUBSCRPT_AREA_CODE_NM")]
    pub subscrpt_area_code_nm: String,
    /// Announcement date
    #[serde(rename = "IN_DATE")]
    pub in_date: String,
    /// House management code
    #[serde(rename = "HOUSE_MANAGE_NO")]
    pub house_manage_no: String,
    /// Announcement code
    #[serde(rename = "PBLANC_NO")]
    pub pblanc_no: String,
    /// Two-digit house-type code
    #[serde(rename = "HOUSE_SECD")]
    pub house_secd: String,
}

/// Listing fields carried into the expanded result.
#[derive(Debug, Clone, Serialize)]
pub struct ListingSummary {
    pub title: String,
    pub region: String,
    pub date: String,
    pub house_manage_no: String,
    pub pblanc_no: String,
    pub house_secd: String,
}

impl From<&ListingRecord> for ListingSummary {
    fn from(record: &ListingRecord) -> Self {
        Self {
            title: record.house_nm.clone(),
            region: record.subscrpt_area_code_nm.clone(),
            date: record.in_date.clone(),
            house_manage_no: record.house_manage_no.clone(),
            pblanc_no: record.pblanc_no.clone(),
            house_secd: record.house_secd.clone(),
        }
    }
}

/// A retained listing after detail expansion.
#[derive(Debug, Clone, Serialize)]
pub struct ExpandedListing {
    /// Extracted listing fields
    pub listing: ListingSummary,
    /// Display file name derived from title, region and date.
    /// Metadata only; nothing is written to disk by the pipeline.
    pub file_name: String,
    /// Detail page converted to Markdown
    pub markdown: String,
    /// Download URL of the attached announcement document
    pub attachment_url: String,
}
