//! Typed errors for the crawler library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! match on specific failure modes. There is no retry anywhere: every
//! upstream fault aborts the whole crawl call.

use thiserror::Error;

/// Errors that can occur while crawling the subscription portal.
#[derive(Debug, Error)]
pub enum CrawlerError {
    /// HTTP transport failure or non-success status on an upstream call
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Calendar endpoint answered with a non-success status
    #[error("calendar fetch failed with status {status}")]
    CalendarFetch { status: reqwest::StatusCode },

    /// Detail endpoint answered with a non-success status
    #[error("detail fetch failed with status {status} for announcement {pblanc_no}")]
    DetailFetchFailed {
        status: reqwest::StatusCode,
        pblanc_no: String,
    },

    /// Geocode response carried no usable address element
    #[error("geocode returned no address for '{address}'")]
    GeocodeEmpty { address: String },

    /// Detail page is missing the attachment anchor
    #[error("attachment link not found in detail page for announcement {pblanc_no}")]
    AttachmentLinkMissing { pblanc_no: String },

    /// House-type label outside the supported categories
    #[error("unknown house type: '{0}'")]
    UnknownHouseType(String),

    /// A resolved region name has no entry in the region table
    #[error("unmapped region name: '{0}'")]
    UnmappedRegion(String),

    /// Detail HTML could not be converted to Markdown
    #[error("markdown conversion failed: {0}")]
    Markdown(String),

    /// Required environment variable missing
    #[error("config error: {0} must be set")]
    MissingEnv(&'static str),

    /// IO error while writing a downloaded attachment
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crawler operations.
pub type Result<T> = std::result::Result<T, CrawlerError>;
