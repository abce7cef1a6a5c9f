//! Facade crate for the Gridsite scoring engine.
//!
//! This crate re-exports the core domain types and the proximity scorers so
//! consumers can depend on a single crate.

#![forbid(unsafe_code)]

pub use gridsite_core::{
    CategoryMetadata, DEFAULT_VOLTAGE_KV, GenerationCategory, GenerationFacility,
    RENEWABLE_WEIGHT, Substation, TownCoordinates, TownDirectory, TransmissionLine,
    canonicalise_town, distance_km, endpoint_towns, fill_missing_voltages,
    normalise_generation_type, parse_voltage_kv, unique_towns,
};
pub use gridsite_scorer::{
    LineScoreConfig, ScoreError, SiteScoreConfig, SiteScores, StationScoreConfig,
    SubstationScoreConfig, score_lines, score_site, score_stations, score_substations,
};
