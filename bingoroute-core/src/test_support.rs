//! Test-only destination fixtures and a deterministic `Scorer` used by unit
//! and behaviour tests.

use std::collections::HashMap;

use crate::{Assessment, Catalog, Coordinates, Destination, Preferences, Reason, ReasonKind, Scorer};

/// Build a destination with the fields the pipeline stages look at.
pub fn destination(
    id: &str,
    district: &str,
    tags: &[&str],
    rating: f64,
    estimated_cost: f64,
) -> Destination {
    Destination::new(id, id, district, Coordinates::new(37.5665, 126.9780))
        .with_tags(tags.iter().copied())
        .with_rating(rating)
        .with_estimated_cost(estimated_cost)
}

/// A small catalog of well-known Seoul destinations.
///
/// Order is fixed so tests can rely on catalog position.
pub fn seoul_destinations() -> Vec<Destination> {
    vec![
        Destination::new(
            "gyeongbokgung",
            "경복궁",
            "종로구",
            Coordinates::new(37.5796, 126.9770),
        )
        .with_description("조선 왕조의 법궁, 지하철 3호선 경복궁역 인근")
        .with_tags(["역사/문화", "전통"])
        .with_rating(4.6)
        .with_estimated_cost(0.3),
        Destination::new(
            "gwangjang-market",
            "광장시장",
            "종로구",
            Coordinates::new(37.5700, 126.9996),
        )
        .with_description("빈대떡과 육회로 유명한 전통시장")
        .with_tags(["맛집", "전통시장"])
        .with_rating(4.3)
        .with_estimated_cost(2.0),
        Destination::new(
            "n-seoul-tower",
            "N서울타워",
            "용산구",
            Coordinates::new(37.5512, 126.9882),
        )
        .with_description("서울 시내 전망을 한눈에")
        .with_tags(["야경", "전망"])
        .with_rating(4.4)
        .with_estimated_cost(2.6),
        Destination::new(
            "national-museum",
            "국립중앙박물관",
            "용산구",
            Coordinates::new(37.5240, 126.9803),
        )
        .with_description("한국 최대 규모의 박물관, 이촌역 도보 5분")
        .with_tags(["박물관/미술관", "역사/문화"])
        .with_rating(4.7)
        .with_estimated_cost(0.0),
        Destination::new(
            "hongdae",
            "홍대 거리",
            "마포구",
            Coordinates::new(37.5563, 126.9236),
        )
        .with_description("버스킹과 클럽, 쇼핑 거리")
        .with_tags(["쇼핑", "예술"])
        .with_rating(4.1)
        .with_estimated_cost(3.0),
        Destination::new(
            "seoul-forest",
            "서울숲",
            "성동구",
            Coordinates::new(37.5444, 127.0374),
        )
        .with_description("사슴 먹이 주기 체험이 있는 도심 공원")
        .with_tags(["자연/공원"])
        .with_rating(4.5)
        .with_estimated_cost(0.0),
    ]
}

/// [`seoul_destinations`] wrapped in a validated catalog.
pub fn seoul_catalog() -> Catalog {
    Catalog::new(seoul_destinations()).unwrap_or_default()
}

/// Test `Scorer` returning a preset score per destination id.
///
/// Unknown ids score zero. Every non-zero score carries a rating reason so
/// grouping logic has something to inspect.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, f64>,
}

impl FixedScorer {
    /// Construct a scorer from `(id, score)` pairs.
    pub fn new<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            scores: scores.into_iter().map(|(id, s)| (id.into(), s)).collect(),
        }
    }
}

impl Scorer for FixedScorer {
    fn assess(&self, destination: &Destination, _preferences: &Preferences) -> Assessment {
        let score = Self::sanitise(self.scores.get(&destination.id).copied().unwrap_or(0.0));
        let reasons = if score > 0.0 {
            vec![Reason::new(ReasonKind::Rating, "preset")]
        } else {
            Vec::new()
        };
        Assessment { score, reasons }
    }
}
