//! Property-based tests for the recommendation stage.
//!
//! # Invariants tested
//!
//! - **Ordering:** scores are non-increasing and ties keep catalog order.
//! - **Completeness:** a catalog no larger than the default limit is
//!   returned in full.
//! - **Determinism:** identical inputs give bit-identical scores and order.
//! - **Score validity:** scores are finite and non-negative.
//! - **Top picks:** the first bucket is the ranking prefix.

use std::collections::HashMap;

use bingoroute_core::test_support::destination;
use bingoroute_core::vocabulary::{SEOUL_DISTRICTS, TRAVEL_THEMES};
use bingoroute_core::{Destination, Preferences};
use chrono::NaiveDate;
use proptest::prelude::*;

use bingoroute_scorer::{CATEGORY_SIZE, DEFAULT_MAX_RESULTS, categorize, recommend};

fn tag_pool() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = TRAVEL_THEMES.to_vec();
    tags.extend(["박물관/미술관", "공원/자연"]);
    tags
}

#[expect(
    clippy::float_arithmetic,
    reason = "ratings are generated in tenths of a star"
)]
fn destination_strategy() -> impl Strategy<Value = (String, Vec<&'static str>, f64, f64)> {
    (
        prop::sample::select(SEOUL_DISTRICTS.to_vec()),
        prop::sample::subsequence(tag_pool(), 0..4),
        0_u8..=50,
        0_u8..=15,
    )
        .prop_map(|(district, tags, rating_tenths, cost)| {
            (
                district.to_owned(),
                tags,
                f64::from(rating_tenths) / 10.0,
                f64::from(cost),
            )
        })
}

fn catalog_strategy(max: usize) -> impl Strategy<Value = Vec<Destination>> {
    prop::collection::vec(destination_strategy(), 0..=max).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(index, (district, tags, rating, cost))| {
                destination(&index.to_string(), &district, &tags, rating, cost)
            })
            .collect()
    })
}

fn preferences_strategy() -> impl Strategy<Value = Preferences> {
    (
        prop::sample::subsequence(TRAVEL_THEMES.to_vec(), 0..3),
        prop::sample::subsequence(SEOUL_DISTRICTS.to_vec(), 0..3),
        prop::option::of(1_u32..=12),
    )
        .prop_map(|(themes, districts, month)| {
            Preferences::new()
                .with_themes(themes)
                .with_districts(districts)
                .with_dates(month.and_then(|m| NaiveDate::from_ymd_opt(2026, m, 1)), None)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: scores never increase down the ranking and ties keep
    /// catalog order.
    #[test]
    fn ranking_is_stable_descending(
        catalog in catalog_strategy(30),
        prefs in preferences_strategy(),
    ) {
        let positions: HashMap<&str, usize> = catalog
            .iter()
            .enumerate()
            .map(|(index, d)| (d.id.as_str(), index))
            .collect();
        let ranked = recommend(&catalog, &prefs, catalog.len());
        for pair in ranked.windows(2) {
            let [higher, lower] = pair else { continue };
            prop_assert!(higher.score >= lower.score);
            if higher.score.total_cmp(&lower.score).is_eq() {
                prop_assert!(
                    positions.get(higher.destination.id.as_str())
                        < positions.get(lower.destination.id.as_str())
                );
            }
        }
    }

    /// Property: catalogs within the default limit come back whole.
    #[test]
    fn small_catalogs_are_returned_in_full(
        catalog in catalog_strategy(DEFAULT_MAX_RESULTS),
        prefs in preferences_strategy(),
    ) {
        let ranked = recommend(&catalog, &prefs, DEFAULT_MAX_RESULTS);
        prop_assert_eq!(ranked.len(), catalog.len());
    }

    /// Property: repeated calls agree bit for bit.
    #[test]
    fn recommendation_is_deterministic(
        catalog in catalog_strategy(20),
        prefs in preferences_strategy(),
    ) {
        let first = recommend(&catalog, &prefs, DEFAULT_MAX_RESULTS);
        let second = recommend(&catalog, &prefs, DEFAULT_MAX_RESULTS);
        let bits = |ranked: &[bingoroute_core::ScoredDestination]| -> Vec<(String, u64)> {
            ranked
                .iter()
                .map(|s| (s.destination.id.clone(), s.score.to_bits()))
                .collect()
        };
        prop_assert_eq!(bits(&first), bits(&second));
    }

    /// Property: every score is finite and non-negative.
    #[test]
    fn scores_are_valid(
        catalog in catalog_strategy(20),
        prefs in preferences_strategy(),
    ) {
        for scored in recommend(&catalog, &prefs, DEFAULT_MAX_RESULTS) {
            prop_assert!(scored.score.is_finite());
            prop_assert!(scored.score >= 0.0);
        }
    }

    /// Property: top picks are the first entries of the ranking.
    #[test]
    fn top_picks_are_the_ranking_prefix(
        catalog in catalog_strategy(20),
        prefs in preferences_strategy(),
    ) {
        let ranked = recommend(&catalog, &prefs, DEFAULT_MAX_RESULTS);
        let categories = categorize(&ranked);
        prop_assert_eq!(categories.top_picks.len(), ranked.len().min(CATEGORY_SIZE));
        let prefix: Vec<_> = ranked.iter().take(CATEGORY_SIZE).cloned().collect();
        prop_assert_eq!(categories.top_picks, prefix);
    }
}
