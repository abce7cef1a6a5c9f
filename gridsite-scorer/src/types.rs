//! Public configuration and output types for site scoring.
#![forbid(unsafe_code)]

/// Tunable parameters for generation facility scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationScoreConfig {
    /// Search radius around the candidate, in kilometres.
    pub max_distance_km: f64,
    /// Score returned when no facility lies within the radius.
    pub penalty: f64,
}

impl Default for StationScoreConfig {
    fn default() -> Self {
        Self {
            max_distance_km: 300.0,
            penalty: 1000.0,
        }
    }
}

/// Tunable parameters for substation scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstationScoreConfig {
    /// Search radius around the candidate, in kilometres.
    pub max_distance_km: f64,
    /// Number of top-scoring substations summed into the result.
    pub max_count: usize,
    /// Score returned when no substation lies within the radius.
    pub penalty: f64,
}

impl Default for SubstationScoreConfig {
    fn default() -> Self {
        Self {
            max_distance_km: 100.0,
            max_count: 5,
            penalty: 100.0,
        }
    }
}

/// Tunable parameters for transmission line scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineScoreConfig {
    /// Search radius around the candidate, in kilometres.
    pub max_distance_km: f64,
    /// Score returned when no line passes within the radius.
    pub penalty: f64,
}

impl Default for LineScoreConfig {
    fn default() -> Self {
        Self {
            max_distance_km: 100.0,
            penalty: 100.0,
        }
    }
}

/// Bundled configuration for evaluating one candidate across all layers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SiteScoreConfig {
    /// Generation facility layer parameters.
    pub stations: StationScoreConfig,
    /// Substation layer parameters.
    pub substations: SubstationScoreConfig,
    /// Transmission line layer parameters.
    pub lines: LineScoreConfig,
}

/// Per-layer scores for one candidate site.
///
/// Each field holds either a sum of distance-decayed contributions or the
/// layer's penalty sentinel when nothing qualified. Consumers must treat the
/// sentinel as a distinct "no coverage" signal rather than a genuine score.
///
/// # Examples
/// ```
/// use gridsite_scorer::SiteScores;
///
/// let scores = SiteScores {
///     stations: 120.0,
///     substations: 410.5,
///     lines: 96.2,
/// };
/// assert!(scores.stations.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteScores {
    /// Generation capacity proximity score.
    pub stations: f64,
    /// Substation voltage proximity score.
    pub substations: f64,
    /// Transmission line capacity proximity score.
    pub lines: f64,
}
