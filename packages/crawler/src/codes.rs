//! House-type category table.
//!
//! Static configuration data, not state: category labels map to the set
//! of upstream two-digit house-type codes they cover.

/// Category label meaning "no house-type constraint".
pub const ALL: &str = "전체";

const APARTMENT_CODES: &[&str] = &["01", "02", "03", "06", "07", "11"];
const PRE_SUBSCRIPTION_APARTMENT_CODES: &[&str] = &["08", "09", "10"];
const PRIVATE_RENTAL_OFFICETEL_CODES: &[&str] = &["05"];
const PUBLIC_SUPPORT_PRIVATE_RENTAL_CODES: &[&str] = &["04"];

/// The user-facing category labels, excluding [`ALL`].
pub const CATEGORY_LABELS: &[&str] = &[
    "아파트",
    "민간사전청약아파트",
    "민간임대오피스텔",
    "공공지원민간임대",
];

/// Upstream house-type codes covered by a category label.
///
/// Returns `None` for labels outside the fixed category set (including
/// [`ALL`], which the pipeline treats as an empty constraint).
pub fn codes_for(label: &str) -> Option<&'static [&'static str]> {
    match label {
        "아파트" => Some(APARTMENT_CODES),
        "민간사전청약아파트" => Some(PRE_SUBSCRIPTION_APARTMENT_CODES),
        "민간임대오피스텔" => Some(PRIVATE_RENTAL_OFFICETEL_CODES),
        "공공지원민간임대" => Some(PUBLIC_SUPPORT_PRIVATE_RENTAL_CODES),
        _ => None,
    }
}
