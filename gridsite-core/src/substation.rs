//! Substation records and voltage normalization.

use geo::Coord;

/// Voltage assumed when a substation's rating is missing or unusable, in kV.
pub const DEFAULT_VOLTAGE_KV: f64 = 110.0;

/// A transmission substation.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridsite_core::Substation;
///
/// let substation = Substation::from_raw_voltage(
///     Coord { x: 151.2093, y: -33.8688 },
///     Some("330"),
/// );
/// assert_eq!(substation.voltage_kv, 330.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Substation {
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Voltage rating in kilovolts.
    ///
    /// Finite and positive once [`fill_missing_voltages`] has run over the
    /// table, or when the record was built via [`Substation::from_raw_voltage`].
    pub voltage_kv: f64,
}

impl Substation {
    /// Construct a substation with an already-numeric voltage rating.
    #[must_use]
    pub const fn new(location: Coord<f64>, voltage_kv: f64) -> Self {
        Self {
            location,
            voltage_kv,
        }
    }

    /// Construct a substation from a raw voltage field, applying the
    /// [`DEFAULT_VOLTAGE_KV`] fallback to missing or unparsable values.
    #[must_use]
    pub fn from_raw_voltage(location: Coord<f64>, raw_voltage: Option<&str>) -> Self {
        Self::new(location, parse_voltage_kv(raw_voltage))
    }
}

/// Coerce a raw voltage field to kilovolts.
///
/// Missing, unparsable, non-finite, and non-positive values all resolve to
/// [`DEFAULT_VOLTAGE_KV`]; coercion never fails.
///
/// # Examples
/// ```
/// use gridsite_core::parse_voltage_kv;
///
/// assert_eq!(parse_voltage_kv(Some("220")), 220.0);
/// assert_eq!(parse_voltage_kv(Some("NaN")), 110.0);
/// assert_eq!(parse_voltage_kv(None), 110.0);
/// ```
#[must_use]
pub fn parse_voltage_kv(raw: Option<&str>) -> f64 {
    raw.and_then(|field| field.trim().parse::<f64>().ok())
        .filter(|voltage| voltage.is_finite() && *voltage > 0.0)
        .unwrap_or(DEFAULT_VOLTAGE_KV)
}

/// Replace every non-finite or non-positive voltage with the default, in
/// place.
///
/// Applied once per substation table before any scoring. Reapplying is a
/// no-op: already-valid ratings pass through unchanged.
pub fn fill_missing_voltages(substations: &mut [Substation]) {
    for substation in substations {
        if !substation.voltage_kv.is_finite() || substation.voltage_kv <= 0.0 {
            substation.voltage_kv = DEFAULT_VOLTAGE_KV;
        }
    }
}
