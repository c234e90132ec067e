//! Location catalog types.
//!
//! A location is a destination that experiences are staged at. The
//! long-form content lives in an optional one-row detail record; the
//! persistence layer unwraps that relation once, so callers always see
//! it as `Option<LocationDetail>`.

use serde::{Deserialize, Serialize};

/// A destination where experiences take place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Row identifier; `None` until the location is persisted.
    pub id: Option<i64>,
    /// Display name.
    pub name: String,
    /// State or region.
    pub state: String,
    /// Country.
    pub country: String,
    /// Whether the location is currently offered.
    pub active: bool,
    /// Cover image references.
    pub cover_images: Vec<String>,
    /// Optional long-form detail (single-row relation).
    pub detail: Option<LocationDetail>,
}

/// Long-form content for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetail {
    /// Extended description shown on the location page.
    pub long_description: String,
    /// Historical background.
    pub history: String,
    /// Gallery image references.
    pub images: Vec<String>,
}

impl Location {
    /// Creates an active location with no images and no detail.
    ///
    /// # Examples
    ///
    /// ```
    /// use posada::Location;
    ///
    /// let loc = Location::new("Valle de Bravo", "Estado de México", "México");
    /// assert!(loc.active);
    /// assert!(loc.id.is_none());
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            state: state.into(),
            country: country.into(),
            active: true,
            cover_images: Vec::new(),
            detail: None,
        }
    }

    /// Attaches a detail record.
    #[must_use]
    pub fn with_detail(mut self, detail: LocationDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}
