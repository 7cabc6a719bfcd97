//! House-type and region predicates over raw listings.

use std::collections::BTreeSet;

use crate::types::ListingRecord;

/// Retain listings satisfying every supplied constraint.
///
/// An empty set on either axis leaves that axis unconstrained. Region
/// matching is exact membership against the resolved tokens, not a
/// substring test. Input order is preserved; an empty result is valid.
pub fn apply(
    listings: Vec<ListingRecord>,
    house_type_codes: &BTreeSet<String>,
    region_tokens: &BTreeSet<String>,
) -> Vec<ListingRecord> {
    listings
        .into_iter()
        .filter(|listing| {
            (house_type_codes.is_empty() || house_type_codes.contains(&listing.house_secd))
                && (region_tokens.is_empty()
                    || region_tokens.contains(&listing.subscrpt_area_code_nm))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, region: &str, secd: &str) -> ListingRecord {
        serde_json::from_value(serde_json::json!({
            "HOUSE_NM": name,
            "SUBSCRPT_AREA_CODE_NM": region,
            "IN_DATE": "2025-08-01",
            "HOUSE_MANAGE_NO": "2025000001",
            "PBLANC_NO": "2025000001",
            "HOUSE_SECD": secd,
        }))
        .unwrap()
    }

    fn names(listings: &[ListingRecord]) -> Vec<&str> {
        listings.iter().map(|l| l.house_nm.as_str()).collect()
    }

    #[test]
    fn empty_constraints_return_input_unchanged() {
        let listings = vec![
            listing("a", "서울", "01"),
            listing("b", "부산", "05"),
            listing("c", "서울", "04"),
        ];

        let result = apply(listings, &BTreeSet::new(), &BTreeSet::new());
        assert_eq!(names(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn singleton_house_type_retains_only_members_in_order() {
        let listings = vec![
            listing("a", "서울", "01"),
            listing("b", "부산", "05"),
            listing("c", "서울", "01"),
        ];
        let codes = BTreeSet::from(["01".to_string()]);

        let result = apply(listings, &codes, &BTreeSet::new());
        assert_eq!(names(&result), vec!["a", "c"]);
    }

    #[test]
    fn region_tokens_match_exactly_not_by_substring() {
        let listings = vec![
            listing("a", "서울", "01"),
            listing("b", "서울특별시", "01"),
        ];
        let tokens = BTreeSet::from(["서울".to_string()]);

        let result = apply(listings, &BTreeSet::new(), &tokens);
        assert_eq!(names(&result), vec!["a"]);
    }

    #[test]
    fn both_constraints_must_hold() {
        let listings = vec![
            listing("a", "서울", "01"),
            listing("b", "서울", "05"),
            listing("c", "부산", "01"),
        ];
        let codes = BTreeSet::from(["01".to_string()]);
        let tokens = BTreeSet::from(["서울".to_string()]);

        let result = apply(listings, &codes, &tokens);
        assert_eq!(names(&result), vec!["a"]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let listings = vec![listing("a", "서울", "01")];
        let codes = BTreeSet::from(["99".to_string()]);

        let result = apply(listings, &codes, &BTreeSet::new());
        assert!(result.is_empty());
    }
}
