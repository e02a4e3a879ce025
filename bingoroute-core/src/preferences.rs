//! Trip preferences collected by the planning wizard.
//!
//! Themes and districts are sets: selecting a value twice has no effect, and
//! an empty set means "no preference" rather than "exclude everything".

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::Season;

/// Themes, districts and travel dates chosen by the visitor.
///
/// # Examples
/// ```
/// use bingoroute_core::{Preferences, Season};
///
/// let prefs = Preferences::new()
///     .with_theme("역사/문화")
///     .with_district("종로구");
/// assert!(prefs.wants_theme("역사/문화"));
/// assert_eq!(prefs.season(), Season::Spring);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Preferences {
    themes: BTreeSet<String>,
    districts: BTreeSet<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl Preferences {
    /// Construct preferences with no selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a theme while returning `self` for chaining.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.themes.insert(theme.into());
        self
    }

    /// Add several themes.
    #[must_use]
    pub fn with_themes<I, T>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.themes.extend(themes.into_iter().map(Into::into));
        self
    }

    /// Add a district while returning `self` for chaining.
    #[must_use]
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.districts.insert(district.into());
        self
    }

    /// Add several districts.
    #[must_use]
    pub fn with_districts<I, T>(mut self, districts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.districts.extend(districts.into_iter().map(Into::into));
        self
    }

    /// Set the travel dates.
    #[must_use]
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Select `theme` if absent, deselect it otherwise.
    ///
    /// Returns `true` when the theme is selected afterwards.
    pub fn toggle_theme(&mut self, theme: &str) -> bool {
        toggle(&mut self.themes, theme)
    }

    /// Select `district` if absent, deselect it otherwise.
    ///
    /// Returns `true` when the district is selected afterwards.
    pub fn toggle_district(&mut self, district: &str) -> bool {
        toggle(&mut self.districts, district)
    }

    /// Selected themes.
    pub const fn themes(&self) -> &BTreeSet<String> {
        &self.themes
    }

    /// Selected districts.
    pub const fn districts(&self) -> &BTreeSet<String> {
        &self.districts
    }

    /// First day of travel, if chosen.
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Last day of travel, if chosen.
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Report whether `theme` is selected.
    pub fn wants_theme(&self, theme: &str) -> bool {
        self.themes.contains(theme)
    }

    /// Report whether `district` is selected.
    pub fn wants_district(&self, district: &str) -> bool {
        self.districts.contains(district)
    }

    /// Season of the start date; spring when no date is set.
    pub fn season(&self) -> Season {
        self.start_date.map(Season::of).unwrap_or_default()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_owned());
        true
    }
}
