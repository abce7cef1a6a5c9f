//! Generation facility records.

use geo::Coord;

use crate::generation::{GenerationCategory, normalise_generation_type};

/// A generation facility with its classified scoring attributes.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// Classification happens once at construction; the record is immutable
/// afterwards.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridsite_core::{GenerationCategory, GenerationFacility};
///
/// let facility = GenerationFacility::from_label(
///     Coord { x: 147.3707, y: -35.1175 },
///     "Solar (tracking)",
/// );
/// assert_eq!(facility.category, GenerationCategory::Solar);
/// assert_eq!(facility.capacity_proxy, 100.0);
/// assert_eq!(facility.renewable_weight, 1.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationFacility {
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Free-text generation type label as supplied by the source table.
    pub raw_type: String,
    /// Canonical category resolved from the raw label.
    pub category: GenerationCategory,
    /// Capacity stand-in assigned by category; always positive.
    pub capacity_proxy: f64,
    /// `1.2` for renewable categories, `1.0` otherwise.
    pub renewable_weight: f64,
}

impl GenerationFacility {
    /// Classify a raw facility row into a scoring-ready record.
    ///
    /// Unrecognised labels fall back to [`GenerationCategory::Unknown`]
    /// (capacity proxy 100, non-renewable); classification never fails.
    #[must_use]
    pub fn from_label(location: Coord<f64>, raw_type: impl Into<String>) -> Self {
        let raw_type = raw_type.into();
        let category = normalise_generation_type(&raw_type);
        Self {
            location,
            raw_type,
            category,
            capacity_proxy: category.metadata().capacity_proxy,
            renewable_weight: category.renewable_weight(),
        }
    }
}
