//! Substation voltage proximity scoring.
#![forbid(unsafe_code)]

use geo::Coord;
use gridsite_core::{Substation, distance_km};
use log::debug;

use crate::error::ScoreError;
use crate::types::SubstationScoreConfig;

/// Score a candidate site by access to nearby substation voltage.
///
/// Each substation within `config.max_distance_km` of the candidate scores
/// `voltage_kv / (1 + distance_km)`; the result sums only the top
/// `config.max_count` of those scores. The truncation caps the influence of
/// substation-dense regions and rewards a handful of strong nearby
/// substations over many weak ones. When no substation qualifies, the
/// configured penalty is returned instead.
///
/// Voltages are expected to have been normalized by
/// [`gridsite_core::fill_missing_voltages`] before scoring.
///
/// # Errors
/// Returns [`ScoreError::NoSubstations`] when `substations` is empty.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridsite_core::Substation;
/// use gridsite_scorer::{SubstationScoreConfig, score_substations};
///
/// # fn main() -> Result<(), gridsite_scorer::ScoreError> {
/// let candidate = Coord { x: 147.3707, y: -35.1175 };
/// let substations = vec![Substation::new(candidate, 330.0)];
///
/// let score = score_substations(candidate, &substations, &SubstationScoreConfig::default())?;
/// assert_eq!(score, 330.0);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "distance decay scoring is floating point maths"
)]
pub fn score_substations(
    candidate: Coord<f64>,
    substations: &[Substation],
    config: &SubstationScoreConfig,
) -> Result<f64, ScoreError> {
    if substations.is_empty() {
        return Err(ScoreError::NoSubstations);
    }
    let mut scores: Vec<f64> = substations
        .iter()
        .map(|substation| (substation, distance_km(candidate, substation.location)))
        .filter(|(_, distance)| *distance <= config.max_distance_km)
        .map(|(substation, distance)| substation.voltage_kv / (1.0 + distance))
        .collect();
    if scores.is_empty() {
        debug!(
            "no substation within {} km of candidate; applying penalty",
            config.max_distance_km
        );
        return Ok(config.penalty);
    }
    scores.sort_unstable_by(|left, right| right.total_cmp(left));
    Ok(scores.iter().take(config.max_count).sum())
}
