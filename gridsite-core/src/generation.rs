//! Generation type classification.
//!
//! Source tables label facilities with free text ("Hydro (run of river)",
//! "coal / gas", "Landfill Gas"). Classification lowercases and trims the
//! label, discards any trailing annotation after a `/`, `(` or `[`, and then
//! evaluates an ordered list of substring rules. The first matching rule
//! wins, so a label naming both "gas" and "landfill" resolves to landfill
//! gas rather than gas. Unmatched labels resolve to
//! [`GenerationCategory::Unknown`]; classification never fails.
//!
//! # Examples
//! ```
//! use gridsite_core::{GenerationCategory, normalise_generation_type};
//!
//! assert_eq!(
//!     normalise_generation_type("Landfill Gas"),
//!     GenerationCategory::LandfillGas,
//! );
//! assert_eq!(
//!     normalise_generation_type("Wind / Solar"),
//!     GenerationCategory::Wind,
//! );
//! ```

/// Weight applied to renewable generation when scoring.
pub const RENEWABLE_WEIGHT: f64 = 1.2;

/// Canonical generation facility categories.
///
/// # Examples
/// ```
/// use gridsite_core::GenerationCategory;
///
/// assert_eq!(GenerationCategory::LandfillGas.as_str(), "landfill gas");
/// assert_eq!(GenerationCategory::Hydro.to_string(), "hydro");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationCategory {
    /// Hydroelectric generation.
    Hydro,
    /// Wind farms.
    Wind,
    /// Coal-fired generation.
    Coal,
    /// Gas-fired generation.
    Gas,
    /// Landfill gas recovery.
    LandfillGas,
    /// Biomass combustion.
    Biomass,
    /// Solar farms.
    Solar,
    /// Diesel generation.
    Diesel,
    /// Label did not match any known category.
    Unknown,
}

/// Fixed scoring metadata assigned to a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryMetadata {
    /// Stand-in for a facility's power output, assigned by category rather
    /// than measured directly.
    pub capacity_proxy: f64,
    /// Whether the category counts as renewable generation.
    pub renewable: bool,
}

impl GenerationCategory {
    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use gridsite_core::GenerationCategory;
    ///
    /// assert_eq!(GenerationCategory::Biomass.as_str(), "biomass");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hydro => "hydro",
            Self::Wind => "wind",
            Self::Coal => "coal",
            Self::Gas => "gas",
            Self::LandfillGas => "landfill gas",
            Self::Biomass => "biomass",
            Self::Solar => "solar",
            Self::Diesel => "diesel",
            Self::Unknown => "unknown",
        }
    }

    /// Capacity proxy and renewable flag for the category.
    ///
    /// Unknown categories carry the fallback proxy of 100 and count as
    /// non-renewable.
    #[must_use]
    pub const fn metadata(self) -> CategoryMetadata {
        match self {
            Self::Hydro => CategoryMetadata {
                capacity_proxy: 500.0,
                renewable: true,
            },
            Self::Wind => CategoryMetadata {
                capacity_proxy: 200.0,
                renewable: true,
            },
            Self::Coal => CategoryMetadata {
                capacity_proxy: 1000.0,
                renewable: false,
            },
            Self::Gas => CategoryMetadata {
                capacity_proxy: 300.0,
                renewable: false,
            },
            Self::LandfillGas => CategoryMetadata {
                capacity_proxy: 20.0,
                renewable: true,
            },
            Self::Biomass => CategoryMetadata {
                capacity_proxy: 20.0,
                renewable: true,
            },
            Self::Solar => CategoryMetadata {
                capacity_proxy: 100.0,
                renewable: true,
            },
            Self::Diesel => CategoryMetadata {
                capacity_proxy: 30.0,
                renewable: false,
            },
            Self::Unknown => CategoryMetadata {
                capacity_proxy: 100.0,
                renewable: false,
            },
        }
    }

    /// Scoring weight: [`RENEWABLE_WEIGHT`] for renewable categories, `1.0`
    /// otherwise.
    #[must_use]
    pub const fn renewable_weight(self) -> f64 {
        if self.metadata().renewable {
            RENEWABLE_WEIGHT
        } else {
            1.0
        }
    }
}

impl std::fmt::Display for GenerationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GenerationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hydro" => Ok(Self::Hydro),
            "wind" => Ok(Self::Wind),
            "coal" => Ok(Self::Coal),
            "gas" => Ok(Self::Gas),
            "landfill gas" => Ok(Self::LandfillGas),
            "biomass" => Ok(Self::Biomass),
            "solar" => Ok(Self::Solar),
            "diesel" => Ok(Self::Diesel),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("unknown generation category '{s}'")),
        }
    }
}

/// One ordered classification rule: a keyword the label stem must contain,
/// an optional term that disqualifies the match, and the resulting category.
struct ClassificationRule {
    keyword: &'static str,
    excluded: Option<&'static str>,
    category: GenerationCategory,
}

impl ClassificationRule {
    fn matches(&self, stem: &str) -> bool {
        stem.contains(self.keyword) && self.excluded.is_none_or(|term| !stem.contains(term))
    }
}

/// Rules are evaluated in declaration order and the first match wins.
/// The order is load-bearing: "gas" must not claim landfill gas labels, and
/// "hydro" takes precedence over every co-occurring keyword.
const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keyword: "hydro",
        excluded: None,
        category: GenerationCategory::Hydro,
    },
    ClassificationRule {
        keyword: "wind",
        excluded: None,
        category: GenerationCategory::Wind,
    },
    ClassificationRule {
        keyword: "coal",
        excluded: None,
        category: GenerationCategory::Coal,
    },
    ClassificationRule {
        keyword: "gas",
        excluded: Some("landfill"),
        category: GenerationCategory::Gas,
    },
    ClassificationRule {
        keyword: "landfill",
        excluded: None,
        category: GenerationCategory::LandfillGas,
    },
    ClassificationRule {
        keyword: "biomass",
        excluded: None,
        category: GenerationCategory::Biomass,
    },
    ClassificationRule {
        keyword: "solar",
        excluded: None,
        category: GenerationCategory::Solar,
    },
    ClassificationRule {
        keyword: "diesel",
        excluded: None,
        category: GenerationCategory::Diesel,
    },
];

/// Resolve a free-text generation type label to its canonical category.
///
/// The label is lowercased and trimmed, truncated at the first `/`, `(` or
/// `[` annotation, and matched against the ordered classification rules.
/// Unmatched labels resolve to [`GenerationCategory::Unknown`].
///
/// The function is pure and deterministic, and idempotent over canonical
/// category strings: feeding a category's own name back in yields the same
/// category.
///
/// # Examples
/// ```
/// use gridsite_core::{GenerationCategory, normalise_generation_type};
///
/// assert_eq!(
///     normalise_generation_type("Gas (OCGT)"),
///     GenerationCategory::Gas,
/// );
/// assert_eq!(
///     normalise_generation_type("geothermal"),
///     GenerationCategory::Unknown,
/// );
/// ```
#[must_use]
pub fn normalise_generation_type(raw: &str) -> GenerationCategory {
    let lowered = raw.trim().to_lowercase();
    let stem = lowered.split(['/', '(', '[']).next().unwrap_or("").trim();
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(stem))
        .map_or(GenerationCategory::Unknown, |rule| rule.category)
}
