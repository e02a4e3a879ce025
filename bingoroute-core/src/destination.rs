//! Destination records read from the catalog.
//!
//! A [`Destination`] is an immutable value. Records arriving from JSON are
//! decoded through a lenient intermediate form so a malformed `tags` field
//! degrades to an empty tag list instead of rejecting the whole record.

use geo::Coord;

use crate::distance::haversine_km;

/// Theme labels attached to a destination, in catalog order.
pub type Tags = Vec<String>;

/// A WGS84 position in degrees.
///
/// Catalog records may spell the fields `lat`/`lng`; both spellings are
/// accepted when decoding.
///
/// # Examples
/// ```
/// use bingoroute_core::Coordinates;
///
/// let city_hall = Coordinates::new(37.5663, 126.9779);
/// assert_eq!(city_hall.distance_to(&city_hall), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub latitude: f64,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(alias = "lng"))]
    pub longitude: f64,
}

impl Coordinates {
    /// Construct a position from latitude and longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        haversine_km(*self, *other)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(value: Coordinates) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinates {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

/// Display-only data carried alongside a destination.
///
/// None of these fields influence filtering or scoring.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Details {
    /// Image URL.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub image: Option<String>,
    /// Typical time spent on site, free text.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub visit_duration: Option<String>,
    /// Street address.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub address: Option<String>,
    /// Building or floor information.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub detailed_address: Option<String>,
    /// Nearest subway station and exit.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub subway: Option<String>,
    /// Opening hours.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub operating_hours: Option<String>,
    /// Contact phone number.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub phone: Option<String>,
    /// Official website.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub website: Option<String>,
    /// Admission fee, free text.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub admission_fee: Option<String>,
    /// Parking availability.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub parking: Option<String>,
    /// Names of attractions within walking distance.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub nearby_attractions: Vec<String>,
    /// Recommended visiting time.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub best_visit_time: Option<String>,
    /// Accessibility notes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub accessibility: Option<String>,
}

/// A travel point of interest.
///
/// # Examples
/// ```
/// use bingoroute_core::{Coordinates, Destination};
///
/// let palace = Destination::new("gyeongbokgung", "경복궁", "종로구", Coordinates::new(37.5796, 126.977))
///     .with_tags(["역사/문화"])
///     .with_rating(4.8);
///
/// assert!(palace.has_tag("역사/문화"));
/// assert_eq!(palace.rating, 4.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", from = "record::DestinationRecord")
)]
pub struct Destination {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Administrative district (구).
    pub district: String,
    /// Free-text description, also mined for keyword bonuses.
    pub description: String,
    /// Theme labels.
    pub tags: Tags,
    /// Average rating in `0.0..=5.0`.
    pub rating: f64,
    /// Estimated cost per person (만원).
    pub estimated_cost: f64,
    /// Geographic position.
    pub coordinates: Coordinates,
    /// Pass-through display data.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub details: Details,
}

impl Destination {
    /// Construct an untagged destination with zero rating and cost.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        district: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            district: district.into(),
            description: String::new(),
            tags: Tags::new(),
            rating: 0.0,
            estimated_cost: 0.0,
            coordinates,
            details: Details::default(),
        }
    }

    /// Replace the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the tag list.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Replace the estimated cost.
    #[must_use]
    pub fn with_estimated_cost(mut self, cost: f64) -> Self {
        self.estimated_cost = cost;
        self
    }

    /// Report whether the destination carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Report whether the destination carries any of `tags`.
    pub fn has_any_tag<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().any(|tag| self.has_tag(tag))
    }
}

#[cfg(feature = "serde")]
mod record {
    //! Lenient wire form of a destination.

    use log::warn;
    use serde::Deserialize;
    use serde::de::IgnoredAny;

    use super::{Coordinates, Destination, Details, Tags};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        List(Vec<String>),
        Malformed(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct DestinationRecord {
        id: String,
        name: String,
        district: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        tags: Option<RawTags>,
        rating: f64,
        estimated_cost: f64,
        coordinates: Coordinates,
        #[serde(flatten)]
        details: Details,
    }

    impl From<DestinationRecord> for Destination {
        fn from(record: DestinationRecord) -> Self {
            let tags = match record.tags {
                Some(RawTags::List(tags)) => tags,
                Some(RawTags::Malformed(_)) => {
                    warn!(
                        "destination {} has malformed tags; treating them as empty",
                        record.id
                    );
                    Tags::new()
                }
                None => Tags::new(),
            };
            Self {
                id: record.id,
                name: record.name,
                district: record.district,
                description: record.description,
                tags,
                rating: record.rating,
                estimated_cost: record.estimated_cost,
                coordinates: record.coordinates,
                details: record.details,
            }
        }
    }
}
