//! Narrow a catalog by search text, themes, districts and budget.
//!
//! Filtering is stable and pure: the output keeps catalog order and the
//! input slice is never modified. Each empty criterion matches everything.
//!
//! # Examples
//! ```
//! use bingoroute_core::{Coordinates, Destination, filter_destinations};
//!
//! let catalog = vec![
//!     Destination::new("a", "경복궁", "종로구", Coordinates::default()).with_tags(["역사/문화"]),
//!     Destination::new("b", "홍대 거리", "마포구", Coordinates::default()).with_tags(["쇼핑"]),
//! ];
//! let hits = filter_destinations(&catalog, "", &["쇼핑"], &[] as &[&str]);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, "b");
//! ```

use crate::{Destination, Preferences};

/// Keep the destinations that match all supplied criteria.
///
/// A destination is kept when `query` is empty or occurs case-insensitively
/// in its name, district or description; when `themes` is empty or shares
/// at least one entry with its tags; and when `districts` is empty or
/// contains its district.
pub fn filter_destinations<T, D>(
    catalog: &[Destination],
    query: &str,
    themes: &[T],
    districts: &[D],
) -> Vec<Destination>
where
    T: AsRef<str>,
    D: AsRef<str>,
{
    DestinationFilter::new()
        .with_query(query)
        .with_themes(themes)
        .with_districts(districts)
        .apply(catalog)
}

/// Reusable filter criteria.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DestinationFilter {
    query: String,
    themes: Vec<String>,
    districts: Vec<String>,
    max_cost: Option<f64>,
}

impl DestinationFilter {
    /// Construct a filter that matches every destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria used by the trip planner: selected themes and districts, no
    /// search text.
    pub fn from_preferences(preferences: &Preferences) -> Self {
        Self::new()
            .with_themes(preferences.themes())
            .with_districts(preferences.districts())
    }

    /// Set the free-text query.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_lowercase();
        self
    }

    /// Add accepted themes.
    #[must_use]
    pub fn with_themes<I, T>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.themes
            .extend(themes.into_iter().map(|t| t.as_ref().to_owned()));
        self
    }

    /// Add accepted districts.
    #[must_use]
    pub fn with_districts<I, D>(mut self, districts: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        self.districts
            .extend(districts.into_iter().map(|d| d.as_ref().to_owned()));
        self
    }

    /// Reject destinations whose estimated cost exceeds `max_cost`.
    #[must_use]
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Report whether `destination` satisfies every criterion.
    pub fn matches(&self, destination: &Destination) -> bool {
        self.matches_query(destination)
            && self.matches_theme(destination)
            && self.matches_district(destination)
            && self.matches_budget(destination)
    }

    /// Return the matching destinations in catalog order.
    pub fn apply(&self, catalog: &[Destination]) -> Vec<Destination> {
        catalog
            .iter()
            .filter(|destination| self.matches(destination))
            .cloned()
            .collect()
    }

    fn matches_query(&self, destination: &Destination) -> bool {
        if self.query.is_empty() {
            return true;
        }
        [
            &destination.name,
            &destination.district,
            &destination.description,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&self.query))
    }

    fn matches_theme(&self, destination: &Destination) -> bool {
        self.themes.is_empty() || destination.has_any_tag(self.themes.iter().map(String::as_str))
    }

    fn matches_district(&self, destination: &Destination) -> bool {
        self.districts.is_empty() || self.districts.contains(&destination.district)
    }

    fn matches_budget(&self, destination: &Destination) -> bool {
        self.max_cost
            .is_none_or(|max| destination.estimated_cost <= max)
    }
}
