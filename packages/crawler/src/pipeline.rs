//! End-to-end crawl orchestration.
//!
//! Flow: fetch the current month's calendar, turn the region input into
//! a filter constraint (resolving free text when needed), build the
//! house-type code set, filter, then expand each retained listing
//! sequentially in listing order.

use std::collections::BTreeSet;

use crate::calendar::CalendarClient;
use crate::codes;
use crate::config::CrawlerConfig;
use crate::detail::DetailClient;
use crate::error::{CrawlerError, Result};
use crate::filter;
use crate::regions;
use crate::resolver::RegionResolver;
use crate::types::ExpandedListing;

/// Region label meaning "no region constraint".
pub const ALL_REGIONS: &str = "전체";

/// Region constraint derived from the `jiyeok` input.
///
/// The last two variants are distinct on purpose: an unconstrained
/// crawl returns everything, while a resolution that found no
/// candidates can match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionFilter {
    /// "전체": every region matches
    All,
    /// Match listings whose region name is one of these short tokens
    Tokens(BTreeSet<String>),
    /// Free-text resolution produced no candidates
    ResolutionEmpty,
}

/// The crawl pipeline over the subscription portal.
pub struct ApplyHomeCrawler {
    calendar: CalendarClient,
    resolver: RegionResolver,
    detail: DetailClient,
}

impl ApplyHomeCrawler {
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self {
            calendar: CalendarClient::new()?,
            resolver: RegionResolver::new(config)?,
            detail: DetailClient::new()?,
        })
    }

    /// Pipeline built from preconfigured clients. Tests only.
    pub fn with_clients(
        calendar: CalendarClient,
        resolver: RegionResolver,
        detail: DetailClient,
    ) -> Self {
        Self {
            calendar,
            resolver,
            detail,
        }
    }

    /// Crawl the current month's announcements matching a house-type
    /// category and a region, expanding every match with its detail
    /// page.
    ///
    /// `house_type` is one of the fixed category labels or "전체".
    /// `jiyeok` is "전체", a canonical short region token, or free text
    /// that goes through address resolution. Resolution that finds no
    /// candidates yields an empty result, not an error; every other
    /// upstream fault aborts the call.
    pub async fn crawl(&self, house_type: &str, jiyeok: &str) -> Result<Vec<ExpandedListing>> {
        let listings = self.calendar.fetch_current_month().await?;
        tracing::info!(
            house_type,
            jiyeok,
            listings = listings.len(),
            "Fetched subscription calendar"
        );

        let house_type_codes = house_type_code_set(house_type)?;
        let region_tokens = match self.region_filter(jiyeok).await? {
            RegionFilter::All => BTreeSet::new(),
            RegionFilter::Tokens(tokens) => tokens,
            RegionFilter::ResolutionEmpty => {
                tracing::info!(jiyeok, "Region resolution found no candidates");
                return Ok(Vec::new());
            }
        };

        let retained = filter::apply(listings, &house_type_codes, &region_tokens);
        tracing::info!(retained = retained.len(), "Listings retained after filtering");

        let mut results = Vec::with_capacity(retained.len());
        for listing in &retained {
            results.push(self.detail.expand(listing).await?);
        }
        Ok(results)
    }

    /// Region constraint for the `jiyeok` input.
    ///
    /// A canonical short token is used as-is without touching the
    /// address services. Free text is resolved, and every resolved
    /// region name must have a table entry.
    async fn region_filter(&self, jiyeok: &str) -> Result<RegionFilter> {
        if jiyeok == ALL_REGIONS {
            return Ok(RegionFilter::All);
        }
        if regions::is_canonical_token(jiyeok) {
            return Ok(RegionFilter::Tokens(BTreeSet::from([jiyeok.to_string()])));
        }

        let resolved = self.resolver.resolve(jiyeok).await?;
        if resolved.is_empty() {
            return Ok(RegionFilter::ResolutionEmpty);
        }

        let mut tokens = BTreeSet::new();
        for name in &resolved {
            let mapped = regions::tokens_for(name)
                .ok_or_else(|| CrawlerError::UnmappedRegion(name.clone()))?;
            tokens.extend(mapped.iter().map(|token| token.to_string()));
        }
        Ok(RegionFilter::Tokens(tokens))
    }
}

/// House-type codes to filter with; "전체" means unconstrained.
fn house_type_code_set(house_type: &str) -> Result<BTreeSet<String>> {
    if house_type == codes::ALL {
        return Ok(BTreeSet::new());
    }
    let mapped = codes::codes_for(house_type)
        .ok_or_else(|| CrawlerError::UnknownHouseType(house_type.to_string()))?;
    Ok(mapped.iter().map(|code| code.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_label_means_no_house_type_constraint() {
        assert!(house_type_code_set("전체").unwrap().is_empty());
    }

    #[test]
    fn category_label_expands_to_its_codes() {
        let codes = house_type_code_set("민간사전청약아파트").unwrap();
        assert_eq!(
            codes,
            BTreeSet::from(["08".to_string(), "09".to_string(), "10".to_string()])
        );
    }

    #[test]
    fn unknown_house_type_is_an_error() {
        let err = house_type_code_set("한옥").unwrap_err();
        assert!(matches!(err, CrawlerError::UnknownHouseType(label) if label == "한옥"));
    }
}
