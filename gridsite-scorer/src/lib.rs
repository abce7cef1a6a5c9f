//! Proximity scoring for candidate grid connection sites.
//!
//! The crate aggregates three independent infrastructure layers into
//! distance-decayed suitability scores for a candidate coordinate:
//!
//! - **Generation facilities** ([`score_stations`]): capacity proxies
//!   weighted towards renewables, decayed by great-circle distance within a
//!   300 km radius.
//! - **Substations** ([`score_substations`]): voltage over distance, keeping
//!   only the five strongest within 100 km.
//! - **Transmission lines** ([`score_lines`]): line capacity decayed by the
//!   distance to the nearest point on the segment between the line's two
//!   endpoint towns, within 100 km.
//!
//! Each layer returns its configured penalty sentinel when nothing
//! qualifies, so every candidate receives finite, comparable scores.
//! [`score_site`] evaluates all three layers at once and is the surface the
//! presentation layer consumes.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use gridsite_core::{GenerationFacility, Substation, TownDirectory, TransmissionLine};
//! use gridsite_scorer::{SiteScoreConfig, score_site};
//!
//! # fn main() -> Result<(), gridsite_scorer::ScoreError> {
//! let candidate = Coord { x: 147.3707, y: -35.1175 };
//! let facilities = vec![GenerationFacility::from_label(candidate, "Solar")];
//! let substations = vec![Substation::new(candidate, 330.0)];
//! let lines = vec![TransmissionLine::new("Wagga Wagga to Tumut", Some(132.0), None)];
//! let towns = TownDirectory::new()
//!     .with_town("Wagga Wagga", Coord { x: 147.3707, y: -35.1175 })
//!     .with_town("Tumut", Coord { x: 148.2233, y: -35.3036 });
//!
//! let scores = score_site(
//!     candidate,
//!     &facilities,
//!     &substations,
//!     &lines,
//!     &towns,
//!     &SiteScoreConfig::default(),
//! )?;
//! assert!(scores.stations > 0.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use geo::Coord;
use gridsite_core::{GenerationFacility, Substation, TownCoordinates, TransmissionLine};

mod error;
mod line;
mod station;
mod substation;
mod types;

pub use error::ScoreError;
pub use line::score_lines;
pub use station::score_stations;
pub use substation::score_substations;
pub use types::{
    LineScoreConfig, SiteScoreConfig, SiteScores, StationScoreConfig, SubstationScoreConfig,
};

/// Evaluate one candidate site against all three infrastructure layers.
///
/// Runs the station, substation, and line scorers with the bundled
/// configuration and returns the per-layer scores. Scoring is stateless:
/// repeated calls with the same inputs yield the same result.
///
/// # Errors
/// Propagates the first [`ScoreError`] raised by a layer whose input table
/// is empty.
pub fn score_site(
    candidate: Coord<f64>,
    facilities: &[GenerationFacility],
    substations: &[Substation],
    lines: &[TransmissionLine],
    towns: &impl TownCoordinates,
    config: &SiteScoreConfig,
) -> Result<SiteScores, ScoreError> {
    Ok(SiteScores {
        stations: score_stations(candidate, facilities, &config.stations)?,
        substations: score_substations(candidate, substations, &config.substations)?,
        lines: score_lines(candidate, lines, towns, &config.lines)?,
    })
}
