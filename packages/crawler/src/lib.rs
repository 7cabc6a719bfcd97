//! ApplyHome subscription-listing crawler.
//!
//! Crawls the monthly subscription calendar of the Korean government
//! housing portal (applyhome.co.kr), optionally resolves free-text region
//! names through the Juso address search chained into the Naver Cloud
//! geocoder, filters the listings by house-type category and region, and
//! expands every retained announcement with its detail page converted to
//! Markdown plus the attachment download link.
//!
//! # Modules
//!
//! - [`calendar`] - monthly listing feed client
//! - [`resolver`] - free-text region resolution chain
//! - [`filter`] - house-type / region predicates
//! - [`detail`] - detail expansion (form POST, Markdown, attachment link)
//! - [`codes`] / [`regions`] - static lookup tables
//! - [`pipeline`] - end-to-end orchestration
//!
//! Every crawl call is independent: no caching, no persistence, no
//! retries, and detail pages are fetched sequentially in listing order.

pub mod calendar;
pub mod codes;
pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod regions;
pub mod resolver;
pub mod types;

// Re-export core types at crate root
pub use config::CrawlerConfig;
pub use error::{CrawlerError, Result};
pub use pipeline::{ApplyHomeCrawler, RegionFilter};
pub use types::{ExpandedListing, ListingRecord, ListingSummary};
