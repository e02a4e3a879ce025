//! Reference vocabularies shared by the filter panel and the trip planner.
//!
//! Catalog records are not restricted to these labels; they are the values a
//! front end offers for selection.

use std::ops::RangeInclusive;

/// Theme labels offered for filtering and preference selection.
pub const TRAVEL_THEMES: [&str; 10] = [
    "역사/문화",
    "쇼핑",
    "맛집",
    "자연/공원",
    "야경",
    "체험",
    "전시/박물관",
    "전통시장",
    "카페",
    "엔터테인먼트",
];

/// The 25 administrative districts of Seoul.
pub const SEOUL_DISTRICTS: [&str; 25] = [
    "종로구",
    "중구",
    "용산구",
    "성동구",
    "광진구",
    "동대문구",
    "중랑구",
    "성북구",
    "강북구",
    "도봉구",
    "노원구",
    "은평구",
    "서대문구",
    "마포구",
    "양천구",
    "강서구",
    "구로구",
    "금천구",
    "영등포구",
    "동작구",
    "관악구",
    "서초구",
    "강남구",
    "송파구",
    "강동구",
];

/// Budget slider bounds in 만원 per person.
pub const BUDGET_RANGE: RangeInclusive<u32> = 0..=15;

/// Report whether `district` names a Seoul district.
///
/// # Examples
/// ```
/// use bingoroute_core::vocabulary::is_seoul_district;
///
/// assert!(is_seoul_district("마포구"));
/// assert!(!is_seoul_district("해운대구"));
/// ```
pub fn is_seoul_district(district: &str) -> bool {
    SEOUL_DISTRICTS.contains(&district)
}

/// Report whether `theme` is one of [`TRAVEL_THEMES`].
pub fn is_travel_theme(theme: &str) -> bool {
    TRAVEL_THEMES.contains(&theme)
}
