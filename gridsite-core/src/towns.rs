//! Town name handling and the town coordinate lookup seam.
//!
//! Transmission line names encode their endpoints as
//! `"<Town A> to <Town B>"`. The helpers here parse those names into
//! canonical town tokens, and the [`TownCoordinates`] trait abstracts the
//! geocoding collaborator that resolves tokens to WGS84 coordinates.

use std::collections::{BTreeSet, HashMap};

use geo::Coord;

use crate::line::TransmissionLine;

/// Separator between the two endpoint towns of a line name.
const TOWN_SEPARATOR: &str = " to ";

/// Resolve canonical town names to WGS84 coordinates.
///
/// Implementations are typically backed by an external geocoding service.
/// Every failure mode (unknown town, transport error, service outage) is
/// reported as `None`; resolution never raises an error into scoring, it
/// only causes the affected line records to be skipped.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use gridsite_core::TownCoordinates;
///
/// struct FixedLookup;
///
/// impl TownCoordinates for FixedLookup {
///     fn resolve(&self, town: &str) -> Option<Coord<f64>> {
///         (town == "Taree").then_some(Coord { x: 152.4602, y: -31.9105 })
///     }
/// }
///
/// assert!(FixedLookup.resolve("Taree").is_some());
/// assert!(FixedLookup.resolve("Stroud").is_none());
/// ```
pub trait TownCoordinates {
    /// Return the coordinates for a canonical town name, if known.
    fn resolve(&self, town: &str) -> Option<Coord<f64>>;
}

/// In-memory town directory backed by a map.
///
/// Keys are canonicalised on insert and on lookup, so callers may use any
/// casing.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridsite_core::{TownCoordinates, TownDirectory};
///
/// let directory = TownDirectory::new()
///     .with_town("wagga wagga", Coord { x: 147.3707, y: -35.1175 });
/// assert!(directory.resolve("Wagga Wagga").is_some());
/// assert!(directory.resolve("Stroud").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TownDirectory {
    coordinates: HashMap<String, Coord<f64>>,
}

impl TownDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a town, canonicalising its name.
    pub fn insert(&mut self, town: &str, location: Coord<f64>) {
        self.coordinates.insert(canonicalise_town(town), location);
    }

    /// Add a town while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_town(mut self, town: &str, location: Coord<f64>) -> Self {
        self.insert(town, location);
        self
    }

    /// Number of towns in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Report whether the directory holds no towns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl TownCoordinates for TownDirectory {
    fn resolve(&self, town: &str) -> Option<Coord<f64>> {
        self.coordinates.get(&canonicalise_town(town)).copied()
    }
}

/// Canonical form of a town token: trimmed and title-cased.
///
/// The first letter of every alphabetic run is uppercased and the rest
/// lowercased, so hyphenated and multi-word names canonicalise consistently
/// regardless of source casing.
///
/// # Examples
/// ```
/// use gridsite_core::canonicalise_town;
///
/// assert_eq!(canonicalise_town(" wagga wagga "), "Wagga Wagga");
/// assert_eq!(canonicalise_town("TAREE"), "Taree");
/// ```
#[must_use]
pub fn canonicalise_town(token: &str) -> String {
    let mut canonical = String::with_capacity(token.len());
    let mut at_word_start = true;
    for ch in token.trim().chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                canonical.extend(ch.to_uppercase());
            } else {
                canonical.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            canonical.push(ch);
            at_word_start = true;
        }
    }
    canonical
}

/// Split a line name into its two canonical endpoint towns.
///
/// Returns `None` unless the case-insensitive `" to "` separator splits the
/// name into exactly two tokens. Line records whose names do not parse are
/// skipped by scoring, never treated as errors.
///
/// # Examples
/// ```
/// use gridsite_core::endpoint_towns;
///
/// assert_eq!(
///     endpoint_towns("Taree to Stroud"),
///     Some(("Taree".to_owned(), "Stroud".to_owned())),
/// );
/// assert_eq!(endpoint_towns("Ring Main West"), None);
/// assert_eq!(endpoint_towns("Taree to Stroud to Maitland"), None);
/// ```
#[must_use]
pub fn endpoint_towns(name: &str) -> Option<(String, String)> {
    let lowered = name.to_lowercase();
    let mut tokens = lowered.split(TOWN_SEPARATOR);
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(second), None) => {
            Some((canonicalise_town(first), canonicalise_town(second)))
        }
        _ => None,
    }
}

/// Distinct canonical endpoint towns across a line table, sorted.
///
/// This is the work-list a geocoding collaborator resolves ahead of scoring.
/// Lines whose names do not parse contribute nothing.
#[must_use]
pub fn unique_towns(lines: &[TransmissionLine]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| endpoint_towns(&line.name))
        .flat_map(|(first, second)| [first, second])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
