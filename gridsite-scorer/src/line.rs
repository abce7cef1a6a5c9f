//! Transmission line proximity scoring.
//!
//! Line records name their endpoints rather than carrying geometry, so
//! scoring first resolves both towns through a [`TownCoordinates`] lookup
//! and treats the line as the straight segment between them. The candidate
//! is projected onto that segment in flat degree space, where regional lines
//! are short enough for the planar approximation, and only the final distance
//! from the candidate to the projected point is geodesic.
#![forbid(unsafe_code)]

use geo::{Closest, ClosestPoint, Coord, Line, Point};
use gridsite_core::{TownCoordinates, TransmissionLine, distance_km, endpoint_towns};
use log::debug;

use crate::error::ScoreError;
use crate::types::LineScoreConfig;

/// Score a candidate site by proximity to transmission line capacity.
///
/// Each line whose nearest point lies within `config.max_distance_km` of the
/// candidate contributes `capacity_kv / (distance_km + 1)`, where a missing
/// capacity rating counts as zero. Records are skipped, never fatal, when
/// the name does not encode exactly two towns or when either town is unknown
/// to the lookup. When no line qualifies, the configured penalty is returned
/// instead.
///
/// # Errors
/// Returns [`ScoreError::NoLines`] when `lines` is empty.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridsite_core::{TownDirectory, TransmissionLine};
/// use gridsite_scorer::{LineScoreConfig, score_lines};
///
/// # fn main() -> Result<(), gridsite_scorer::ScoreError> {
/// let towns = TownDirectory::new()
///     .with_town("Taree", Coord { x: 152.4602, y: -31.9105 })
///     .with_town("Stroud", Coord { x: 151.9677, y: -32.4018 });
/// let lines = vec![TransmissionLine::new("Taree to Stroud", Some(132.0), None)];
/// let on_the_line = Coord { x: 152.21395, y: -32.15615 };
///
/// let score = score_lines(on_the_line, &lines, &towns, &LineScoreConfig::default())?;
/// assert!((score - 132.0).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "contributions sum to the score"
)]
pub fn score_lines(
    candidate: Coord<f64>,
    lines: &[TransmissionLine],
    towns: &impl TownCoordinates,
    config: &LineScoreConfig,
) -> Result<f64, ScoreError> {
    if lines.is_empty() {
        return Err(ScoreError::NoLines);
    }
    lines
        .iter()
        .filter_map(|line| line_contribution(candidate, line, towns, config))
        .reduce(|total, contribution| total + contribution)
        .map_or_else(
            || {
                debug!(
                    "no transmission line within {} km of candidate; applying penalty",
                    config.max_distance_km
                );
                Ok(config.penalty)
            },
            Ok,
        )
}

/// Distance-decayed contribution of one line, or `None` when the record is
/// skipped or out of range.
#[expect(
    clippy::float_arithmetic,
    reason = "distance decay scoring is floating point maths"
)]
fn line_contribution(
    candidate: Coord<f64>,
    line: &TransmissionLine,
    towns: &impl TownCoordinates,
    config: &LineScoreConfig,
) -> Option<f64> {
    let Some((origin_town, destination_town)) = endpoint_towns(&line.name) else {
        debug!(
            "skipping line '{}': name does not encode exactly two towns",
            line.name
        );
        return None;
    };
    let Some(origin) = towns.resolve(&origin_town) else {
        debug!(
            "skipping line '{}': no coordinates for '{}'",
            line.name, origin_town
        );
        return None;
    };
    let Some(destination) = towns.resolve(&destination_town) else {
        debug!(
            "skipping line '{}': no coordinates for '{}'",
            line.name, destination_town
        );
        return None;
    };
    let nearest = nearest_point_on_segment(candidate, origin, destination);
    let distance = distance_km(candidate, nearest);
    if distance > config.max_distance_km {
        return None;
    }
    Some(line.scoring_capacity_kv() / (distance + 1.0))
}

/// Closest point to the candidate on the segment between two towns, clamped
/// to the segment's endpoints.
///
/// The projection is Euclidean in degree space; the caller applies an
/// accurate geodesic distance to the returned point afterwards.
fn nearest_point_on_segment(
    candidate: Coord<f64>,
    origin: Coord<f64>,
    destination: Coord<f64>,
) -> Coord<f64> {
    let segment = Line::new(origin, destination);
    match segment.closest_point(&Point::from(candidate)) {
        Closest::Intersection(point) | Closest::SinglePoint(point) => point.into(),
        // Zero-length segments degenerate to the origin town.
        Closest::Indeterminate => origin,
    }
}
