//! The validated, immutable destination catalog.
//!
//! Records are checked once when the catalog is built; the filter and
//! scoring stages then treat every [`Destination`] as well formed. The only
//! tolerated defect is a malformed `tags` field, which decodes as an empty
//! tag list.

use std::collections::HashSet;
use std::ops::Deref;

use log::debug;
use thiserror::Error;

use crate::Destination;

/// Errors returned while building a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A record had an empty identifier.
    #[error("destination at position {index} has an empty id")]
    EmptyId {
        /// Position of the record in the input.
        index: usize,
    },
    /// Two records shared an identifier.
    #[error("destination id {id} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// A rating was outside `0.0..=5.0` or not finite.
    #[error("destination {id} has rating {rating}; expected a value in 0.0..=5.0")]
    InvalidRating {
        /// Identifier of the offending record.
        id: String,
        /// Rating found in the record.
        rating: f64,
    },
    /// An estimated cost was negative or not finite.
    #[error("destination {id} has estimated cost {cost}; expected a non-negative number")]
    InvalidCost {
        /// Identifier of the offending record.
        id: String,
        /// Cost found in the record.
        cost: f64,
    },
    /// Coordinates fell outside WGS84 bounds.
    #[error("destination {id} has coordinates ({latitude}, {longitude}) outside WGS84 bounds")]
    InvalidCoordinates {
        /// Identifier of the offending record.
        id: String,
        /// Latitude found in the record.
        latitude: f64,
        /// Longitude found in the record.
        longitude: f64,
    },
    /// The catalog JSON could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to decode catalog JSON: {source}")]
    Decode {
        /// Decoder error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// An ordered, validated list of destinations.
///
/// Dereferences to `[Destination]` so it can be passed straight to the
/// filter and recommendation stages.
///
/// # Examples
/// ```
/// use bingoroute_core::{Catalog, Coordinates, Destination};
///
/// # fn main() -> Result<(), bingoroute_core::CatalogError> {
/// let catalog = Catalog::new(vec![
///     Destination::new("a", "A", "중구", Coordinates::new(37.56, 126.98)).with_rating(4.2),
/// ])?;
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.find("a").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Validate `destinations` and wrap them in a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for the first record with an empty or
    /// duplicate id, an out-of-range rating or cost, or out-of-bounds
    /// coordinates.
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(destinations.len());
        for (index, destination) in destinations.iter().enumerate() {
            validate(index, destination)?;
            if !seen.insert(destination.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: destination.id.clone(),
                });
            }
        }
        debug!("catalog validated with {} destinations", destinations.len());
        Ok(Self { destinations })
    }

    /// Decode a JSON array of destination records and validate it.
    ///
    /// # Errors
    /// Returns [`CatalogError::Decode`] for malformed JSON and the
    /// validation errors of [`Catalog::new`] otherwise.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let destinations: Vec<Destination> = serde_json::from_reader(reader)
            .map_err(|source| CatalogError::Decode { source })?;
        Self::new(destinations)
    }

    /// Decode a catalog from a JSON string.
    ///
    /// # Errors
    /// See [`Catalog::from_json_reader`].
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_json_reader(json.as_bytes())
    }

    /// Look a destination up by id.
    pub fn find(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Borrow the destinations in catalog order.
    pub fn as_slice(&self) -> &[Destination] {
        &self.destinations
    }

    /// Consume the catalog and return its destinations.
    pub fn into_inner(self) -> Vec<Destination> {
        self.destinations
    }
}

impl Deref for Catalog {
    type Target = [Destination];

    fn deref(&self) -> &Self::Target {
        &self.destinations
    }
}

impl AsRef<[Destination]> for Catalog {
    fn as_ref(&self) -> &[Destination] {
        &self.destinations
    }
}

impl TryFrom<Vec<Destination>> for Catalog {
    type Error = CatalogError;

    fn try_from(destinations: Vec<Destination>) -> Result<Self, Self::Error> {
        Self::new(destinations)
    }
}

fn validate(index: usize, destination: &Destination) -> Result<(), CatalogError> {
    let id = &destination.id;
    if id.trim().is_empty() {
        return Err(CatalogError::EmptyId { index });
    }
    if !(0.0..=5.0).contains(&destination.rating) {
        return Err(CatalogError::InvalidRating {
            id: id.clone(),
            rating: destination.rating,
        });
    }
    if !destination.estimated_cost.is_finite() || destination.estimated_cost < 0.0 {
        return Err(CatalogError::InvalidCost {
            id: id.clone(),
            cost: destination.estimated_cost,
        });
    }
    let coordinates = destination.coordinates;
    if !(-90.0..=90.0).contains(&coordinates.latitude)
        || !(-180.0..=180.0).contains(&coordinates.longitude)
    {
        return Err(CatalogError::InvalidCoordinates {
            id: id.clone(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinates;
    use rstest::rstest;

    fn destination(id: &str) -> Destination {
        Destination::new(id, "Name", "중구", Coordinates::new(37.56, 126.98)).with_rating(4.0)
    }

    #[rstest]
    fn accepts_valid_records_in_order() {
        let catalog = Catalog::new(vec![destination("a"), destination("b")]).expect("valid");
        let ids: Vec<&str> = catalog.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(catalog.find("b").map(|d| d.id.as_str()), Some("b"));
        assert!(catalog.find("c").is_none());
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![destination("a"), destination("a")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id } if id == "a"));
    }

    #[rstest]
    fn rejects_blank_ids() {
        let err = Catalog::new(vec![destination("a"), destination(" ")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId { index: 1 }));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(5.1)]
    #[case(f64::NAN)]
    fn rejects_out_of_range_ratings(#[case] rating: f64) {
        let err = Catalog::new(vec![destination("a").with_rating(rating)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRating { .. }));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_costs(#[case] cost: f64) {
        let err = Catalog::new(vec![destination("a").with_estimated_cost(cost)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCost { .. }));
    }

    #[rstest]
    #[case(91.0, 0.0)]
    #[case(0.0, -180.5)]
    fn rejects_out_of_bounds_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        let mut record = destination("a");
        record.coordinates = Coordinates::new(latitude, longitude);
        let err = Catalog::new(vec![record]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCoordinates { .. }));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_json_with_malformed_tags() {
        let json = r#"[
            {"id":"a","name":"A","district":"중구","description":"","tags":["쇼핑"],
             "rating":4.1,"estimatedCost":1,"coordinates":{"lat":37.56,"lng":126.98}},
            {"id":"b","name":"B","district":"중구","description":"","tags":"쇼핑",
             "rating":3.9,"estimatedCost":1,"coordinates":{"lat":37.56,"lng":126.98}}
        ]"#;
        let catalog = Catalog::from_json_str(json).expect("catalog decodes");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("b").is_some_and(|d| d.tags.is_empty()));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn reports_decode_failures() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }
}
