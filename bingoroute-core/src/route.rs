//! An ordered visiting plan assembled by the visitor.
//!
//! Aggregates chosen destinations with a rough cost and duration estimate.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

use crate::Destination;

/// Half-hours spent at each stop, travel included.
const HALF_HOURS_PER_STOP: u64 = 5;

/// Errors returned by [`RoutePlan::reorder`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutePlanError {
    /// The new order named a destination that is not in the plan.
    #[error("destination {id} is not part of the route")]
    UnknownStop {
        /// The unexpected identifier.
        id: String,
    },
    /// The new order did not name every stop exactly once.
    #[error("new order lists {given} stops but the route has {expected}")]
    IncompleteOrder {
        /// Distinct stops in the route.
        expected: usize,
        /// Distinct identifiers supplied.
        given: usize,
    },
}

/// Ordered stops without duplicates.
///
/// # Examples
/// ```
/// use bingoroute_core::{Coordinates, Destination, RoutePlan};
///
/// let mut plan = RoutePlan::new();
/// plan.add(Destination::new("a", "A", "중구", Coordinates::default()).with_estimated_cost(1.0));
/// plan.add(Destination::new("b", "B", "중구", Coordinates::default()).with_estimated_cost(2.0));
/// assert_eq!(plan.total_cost(), 3.0);
/// assert_eq!(plan.estimated_duration().as_secs(), 5 * 3600);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoutePlan {
    stops: Vec<Destination>,
}

impl RoutePlan {
    /// Construct an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `destination`. Returns `false` if it is already a stop.
    pub fn add(&mut self, destination: Destination) -> bool {
        if self.contains(&destination.id) {
            return false;
        }
        self.stops.push(destination);
        true
    }

    /// Drop the stop with `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.stops.len();
        self.stops.retain(|d| d.id != id);
        self.stops.len() != before
    }

    /// Report whether `id` is a stop.
    pub fn contains(&self, id: &str) -> bool {
        self.stops.iter().any(|d| d.id == id)
    }

    /// Rearrange the stops into the order given by `ids`.
    ///
    /// # Errors
    /// Returns [`RoutePlanError`] unless `ids` names every stop exactly once.
    /// The plan is unchanged on error.
    pub fn reorder<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(), RoutePlanError> {
        let mut seen = HashSet::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            if !self.contains(id) {
                return Err(RoutePlanError::UnknownStop { id: id.to_owned() });
            }
            seen.insert(id);
        }
        if seen.len() != self.stops.len() || ids.len() != self.stops.len() {
            return Err(RoutePlanError::IncompleteOrder {
                expected: self.stops.len(),
                given: seen.len(),
            });
        }
        self.stops.sort_by_key(|stop| {
            ids.iter()
                .position(|id| id.as_ref() == stop.id)
                .unwrap_or(usize::MAX)
        });
        Ok(())
    }

    /// Group stops by district, cheapest first within a district.
    ///
    /// The sort is stable, so equal stops keep their relative order.
    pub fn optimise(&mut self) {
        self.stops.sort_by(|a, b| {
            a.district.cmp(&b.district).then_with(|| {
                a.estimated_cost
                    .partial_cmp(&b.estimated_cost)
                    .unwrap_or(Ordering::Equal)
            })
        });
    }

    /// Drop every stop.
    pub fn clear(&mut self) {
        self.stops.clear();
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[Destination] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Report whether the plan has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sum of the stops' estimated costs, in units of 10,000 KRW.
    pub fn total_cost(&self) -> f64 {
        self.stops.iter().map(|d| d.estimated_cost).sum()
    }

    /// Two and a half hours per stop, rounded up to whole hours.
    pub fn estimated_duration(&self) -> Duration {
        let stops = u64::try_from(self.stops.len()).unwrap_or(u64::MAX);
        let hours = stops.saturating_mul(HALF_HOURS_PER_STOP).div_ceil(2);
        Duration::from_secs(hours.saturating_mul(3600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinates;
    use rstest::{fixture, rstest};

    fn stop(id: &str, district: &str, cost: f64) -> Destination {
        Destination::new(id, id, district, Coordinates::default()).with_estimated_cost(cost)
    }

    #[fixture]
    fn plan() -> RoutePlan {
        let mut plan = RoutePlan::new();
        plan.add(stop("tower", "용산구", 2.6));
        plan.add(stop("market", "종로구", 2.0));
        plan.add(stop("palace", "종로구", 0.3));
        plan.add(stop("museum", "용산구", 0.0));
        plan
    }

    fn ids(plan: &RoutePlan) -> Vec<&str> {
        plan.stops().iter().map(|d| d.id.as_str()).collect()
    }

    #[rstest]
    fn duplicate_stops_are_rejected(mut plan: RoutePlan) {
        assert!(!plan.add(stop("tower", "용산구", 2.6)));
        assert_eq!(plan.len(), 4);
    }

    #[rstest]
    fn optimise_groups_by_district_then_cost(mut plan: RoutePlan) {
        plan.optimise();
        assert_eq!(ids(&plan), vec!["museum", "tower", "palace", "market"]);
    }

    #[rstest]
    fn reorder_applies_permutation(mut plan: RoutePlan) {
        plan.reorder(&["palace", "museum", "tower", "market"])
            .expect("valid permutation");
        assert_eq!(ids(&plan), vec!["palace", "museum", "tower", "market"]);
    }

    #[rstest]
    fn reorder_rejects_unknown_ids(mut plan: RoutePlan) {
        let err = plan.reorder(&["palace", "nowhere"]).unwrap_err();
        assert_eq!(err, RoutePlanError::UnknownStop { id: "nowhere".into() });
        assert_eq!(ids(&plan), vec!["tower", "market", "palace", "museum"]);
    }

    #[rstest]
    #[case(&["palace", "museum", "tower"])]
    #[case(&["palace", "palace", "tower", "market"])]
    fn reorder_rejects_partial_orders(mut plan: RoutePlan, #[case] order: &[&str]) {
        let err = plan.reorder(order).unwrap_err();
        assert!(matches!(err, RoutePlanError::IncompleteOrder { expected: 4, .. }));
    }

    #[rstest]
    fn totals_follow_stops(mut plan: RoutePlan) {
        assert!((plan.total_cost() - 4.9).abs() < 1e-9);
        assert_eq!(plan.estimated_duration(), Duration::from_secs(10 * 3600));
        assert!(plan.remove("tower"));
        assert_eq!(plan.estimated_duration(), Duration::from_secs(8 * 3600));
        plan.clear();
        assert_eq!(plan.total_cost(), 0.0);
        assert_eq!(plan.estimated_duration(), Duration::ZERO);
    }

    #[rstest]
    #[case(1, 3)]
    #[case(2, 5)]
    #[case(3, 8)]
    fn duration_rounds_up_to_whole_hours(#[case] stops: usize, #[case] hours: u64) {
        let mut plan = RoutePlan::new();
        for n in 0..stops {
            plan.add(stop(&n.to_string(), "중구", 0.0));
        }
        assert_eq!(plan.estimated_duration(), Duration::from_secs(hours * 3600));
    }
}
