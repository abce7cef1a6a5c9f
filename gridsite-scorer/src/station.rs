//! Generation capacity proximity scoring.
#![forbid(unsafe_code)]

use geo::Coord;
use gridsite_core::{GenerationFacility, distance_km};
use log::debug;

use crate::error::ScoreError;
use crate::types::StationScoreConfig;

/// Score a candidate site by distance-decayed access to generation capacity.
///
/// Every facility within `config.max_distance_km` of the candidate
/// contributes `capacity_proxy * renewable_weight / (1 + distance_km)`, and
/// the score is the sum of those contributions. Decay is strictly monotonic:
/// of two facilities with equal capacity and weight, the closer one always
/// contributes more. When no facility qualifies, the configured penalty is
/// returned instead, signalling "no coverage" distinctly from a small sum.
///
/// # Errors
/// Returns [`ScoreError::NoFacilities`] when `facilities` is empty; supplying
/// the table is the caller's contract even when it is far from the candidate.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridsite_core::GenerationFacility;
/// use gridsite_scorer::{StationScoreConfig, score_stations};
///
/// # fn main() -> Result<(), gridsite_scorer::ScoreError> {
/// let candidate = Coord { x: 147.3707, y: -35.1175 };
/// let facilities = vec![GenerationFacility::from_label(candidate, "Solar")];
///
/// let score = score_stations(candidate, &facilities, &StationScoreConfig::default())?;
/// assert_eq!(score, 120.0);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "distance decay scoring is floating point maths"
)]
pub fn score_stations(
    candidate: Coord<f64>,
    facilities: &[GenerationFacility],
    config: &StationScoreConfig,
) -> Result<f64, ScoreError> {
    if facilities.is_empty() {
        return Err(ScoreError::NoFacilities);
    }
    facilities
        .iter()
        .map(|facility| (facility, distance_km(candidate, facility.location)))
        .filter(|(_, distance)| *distance <= config.max_distance_km)
        .map(|(facility, distance)| {
            facility.capacity_proxy * facility.renewable_weight / (1.0 + distance)
        })
        .reduce(|total, contribution| total + contribution)
        .map_or_else(
            || {
                debug!(
                    "no generation facility within {} km of candidate; applying penalty",
                    config.max_distance_km
                );
                Ok(config.penalty)
            },
            Ok,
        )
}
