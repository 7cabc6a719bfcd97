//! Region name tables.
//!
//! Two static lookups: the space-joined enumeration of canonical short
//! region tokens, and the mapping from a canonical full region name to
//! its short token(s) used for matching listing records.

/// Space-joined enumeration of the canonical short region tokens.
const CANONICAL_TOKENS: &str =
    "서울 광주 대구 대전 부산 세종 울산 인천 강원 경기 경북 경남 전남 전북 제주 충남 충북";

/// Whether `region` already is a canonical short token.
///
/// Substring containment against the joined enumeration, so the check is
/// a no-op short-circuit for inputs the portal itself uses as region
/// labels.
pub fn is_canonical_token(region: &str) -> bool {
    !region.is_empty() && CANONICAL_TOKENS.contains(region)
}

/// Short matching tokens for a canonical full region name
/// (e.g. "서울특별시" -> ["서울"]).
///
/// Returns `None` for names outside the table; the pipeline surfaces
/// that as an error rather than matching nothing.
pub fn tokens_for(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "서울특별시" => Some(&["서울"]),
        "광주광역시" => Some(&["광주"]),
        "대구광역시" => Some(&["대구"]),
        "대전광역시" => Some(&["대전"]),
        "부산광역시" => Some(&["부산"]),
        "세종특별자치시" => Some(&["세종"]),
        "울산광역시" => Some(&["울산"]),
        "인천광역시" => Some(&["인천"]),
        "강원특별자치도" => Some(&["강원"]),
        "경기도" => Some(&["경기"]),
        "경상남도" => Some(&["경남"]),
        "경상북도" => Some(&["경북"]),
        "전라남도" => Some(&["전남"]),
        "전라북도" => Some(&["전북"]),
        "제주특별자치도" => Some(&["제주"]),
        "충청남도" => Some(&["충남"]),
        "충청북도" => Some(&["충북"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tokens_are_canonical() {
        for token in ["서울", "세종", "충북"] {
            assert!(is_canonical_token(token), "{token} should be canonical");
        }
    }

    #[test]
    fn full_names_are_not_canonical_tokens() {
        assert!(!is_canonical_token("서울특별시"));
        assert!(!is_canonical_token("전체"));
        assert!(!is_canonical_token(""));
    }

    #[test]
    fn full_names_map_to_canonical_short_tokens() {
        let names = [
            "서울특별시",
            "광주광역시",
            "대구광역시",
            "대전광역시",
            "부산광역시",
            "세종특별자치시",
            "울산광역시",
            "인천광역시",
            "강원특별자치도",
            "경기도",
            "경상남도",
            "경상북도",
            "전라남도",
            "전라북도",
            "제주특별자치도",
            "충청남도",
            "충청북도",
        ];
        for name in names {
            let tokens = tokens_for(name).unwrap();
            assert!(!tokens.is_empty());
            for token in tokens {
                assert!(is_canonical_token(token), "{token} is not canonical");
            }
        }
    }

    #[test]
    fn unknown_name_has_no_entry() {
        assert!(tokens_for("평양직할시").is_none());
        assert!(tokens_for("서울").is_none());
    }
}
