//! Transmission line records.

/// A transmission line between two named towns.
///
/// The name encodes both endpoints as `"<Town A> to <Town B>"` with a
/// case-insensitive separator; see
/// [`endpoint_towns`](crate::endpoint_towns) for the parsing rules. Ratings
/// arrive from the source table as numeric-or-missing fields.
///
/// # Examples
/// ```
/// use gridsite_core::TransmissionLine;
///
/// let line = TransmissionLine::new("Taree to Stroud", Some(132.0), Some(68_000.0));
/// assert_eq!(line.scoring_capacity_kv(), 132.0);
///
/// let unrated = TransmissionLine::new("Taree to Stroud", None, None);
/// assert_eq!(unrated.scoring_capacity_kv(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransmissionLine {
    /// Line name encoding the two endpoint towns.
    pub name: String,
    /// Capacity rating in kilovolts, when known.
    pub capacity_kv: Option<f64>,
    /// Physical length in metres; carried from the source table but unused
    /// by scoring.
    pub length_m: Option<f64>,
}

impl TransmissionLine {
    /// Construct a line record from source table fields.
    #[must_use]
    pub fn new(name: impl Into<String>, capacity_kv: Option<f64>, length_m: Option<f64>) -> Self {
        Self {
            name: name.into(),
            capacity_kv,
            length_m,
        }
    }

    /// Capacity rating used for scoring.
    ///
    /// Missing or non-finite ratings count as zero capacity: the line still
    /// registers as coverage when close enough, but contributes nothing.
    #[must_use]
    pub fn scoring_capacity_kv(&self) -> f64 {
        self.capacity_kv
            .filter(|capacity| capacity.is_finite())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some(330.0), 330.0)]
    #[case(Some(f64::NAN), 0.0)]
    #[case(None, 0.0)]
    #[expect(clippy::float_cmp, reason = "capacity either passes through or zeroes exactly")]
    fn missing_capacity_counts_as_zero(#[case] capacity: Option<f64>, #[case] expected: f64) {
        let line = TransmissionLine::new("Taree to Stroud", capacity, None);
        assert_eq!(line.scoring_capacity_kv(), expected);
    }
}
