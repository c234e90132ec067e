//! Experience catalog types.
//!
//! An experience is the top-level bookable offering (a trip, package, or
//! stay). Like locations, the long-form content lives in an optional
//! one-row detail record unwrapped at the persistence boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable event or offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Row identifier; `None` until the experience is persisted.
    pub id: Option<i64>,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// First day of the experience.
    pub start_date: NaiveDate,
    /// Last day of the experience.
    pub end_date: NaiveDate,
    /// Declared overall capacity.
    pub capacity: i64,
    /// Whether the experience is currently offered.
    pub active: bool,
    /// Optional owning location.
    pub location_id: Option<i64>,
    /// Optional long-form detail (single-row relation).
    pub detail: Option<ExperienceDetail>,
}

/// Long-form content for an experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDetail {
    /// Extended description shown on the experience page.
    pub long_description: String,
    /// Venue or base of operations.
    pub venue: String,
    /// Planned activities.
    pub activities: String,
    /// What the price includes.
    pub inclusions: String,
    /// Gallery image references.
    pub images: Vec<String>,
}

impl Experience {
    /// Creates an active experience with no location and no detail.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use posada::Experience;
    ///
    /// let exp = Experience::new(
    ///     "Lagoon Retreat",
    ///     "Three days on the water",
    ///     NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
    ///     40,
    /// );
    /// assert!(exp.active);
    /// assert!(exp.id.is_none());
    /// ```
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        capacity: i64,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            start_date,
            end_date,
            capacity,
            active: true,
            location_id: None,
            detail: None,
        }
    }

    /// Associates the experience with a location.
    #[must_use]
    pub const fn at_location(mut self, location_id: i64) -> Self {
        self.location_id = Some(location_id);
        self
    }

    /// Attaches a detail record.
    #[must_use]
    pub fn with_detail(mut self, detail: ExperienceDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}
