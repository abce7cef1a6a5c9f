//! Error types raised while scoring candidate sites.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a scoring precondition is violated.
///
/// Per-record problems (an unparsable line name, an unknown town, a missing
/// rating) are repaired or skipped locally by the scorers and never surface
/// here. The only fatal condition is an empty input table: callers must be
/// able to distinguish "no data supplied" from a genuine low score, so an
/// empty table is reported as an error rather than silently scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The generation facility table was empty.
    #[error("at least one generation facility is required")]
    NoFacilities,
    /// The substation table was empty.
    #[error("at least one substation is required")]
    NoSubstations,
    /// The transmission line table was empty.
    #[error("at least one transmission line is required")]
    NoLines,
}
