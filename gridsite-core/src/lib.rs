//! Core domain types for the Gridsite scoring engine.
//!
//! The crate models the three grid infrastructure layers (generation
//! facilities, substations, and transmission lines) together with the
//! classification and normalization applied to raw source tables, the
//! great-circle distance used by every scorer, and the town coordinate
//! lookup seam behind which the external geocoder sits.
//!
//! Coordinates throughout are WGS84 `geo::Coord<f64>` values with
//! `x = longitude` and `y = latitude`, matching the rest of the `geo`
//! ecosystem.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod facility;
mod generation;
mod line;
mod substation;
mod towns;

pub use distance::distance_km;
pub use facility::GenerationFacility;
pub use generation::{
    CategoryMetadata, GenerationCategory, RENEWABLE_WEIGHT, normalise_generation_type,
};
pub use line::TransmissionLine;
pub use substation::{DEFAULT_VOLTAGE_KV, Substation, fill_missing_voltages, parse_voltage_kv};
pub use towns::{TownCoordinates, TownDirectory, canonicalise_town, endpoint_towns, unique_towns};
