//! Session time and price estimation by tattoo size category.
//!
//! Pure table lookup. Figures are the studio's published USD ranges; a
//! deployment billing in another currency edits this table.

use serde::Serialize;

/// Size category a client can pick for a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCategory {
    Tiny,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

/// Fallback category when the request omits a size or sends an unknown one.
pub const DEFAULT_SIZE: SizeCategory = SizeCategory::Medium;

impl SizeCategory {
    /// Parse a wire value (`"tiny"` .. `"extra-large"`), case-insensitive.
    ///
    /// Unknown values return `None`; callers fall back to [`DEFAULT_SIZE`].
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tiny" => Some(Self::Tiny),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "extra-large" => Some(Self::ExtraLarge),
            _ => None,
        }
    }

    /// Wire representation of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
        }
    }

    /// All categories, smallest first.
    pub fn all() -> [Self; 5] {
        [
            Self::Tiny,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::ExtraLarge,
        ]
    }
}

/// Estimated session time and price range for a size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeEstimate {
    pub time: &'static str,
    pub price: &'static str,
}

/// Look up the estimate for a category.
pub fn estimate(size: SizeCategory) -> SizeEstimate {
    match size {
        SizeCategory::Tiny => SizeEstimate {
            time: "30 min - 1 hour",
            price: "$100 - $150",
        },
        SizeCategory::Small => SizeEstimate {
            time: "1 - 2 hours",
            price: "$150 - $300",
        },
        SizeCategory::Medium => SizeEstimate {
            time: "2 - 4 hours",
            price: "$300 - $600",
        },
        SizeCategory::Large => SizeEstimate {
            time: "4 - 8 hours",
            price: "$600 - $1200",
        },
        SizeCategory::ExtraLarge => SizeEstimate {
            time: "Multiple sessions",
            price: "$1200+",
        },
    }
}

/// Estimate for an optional wire value, defaulting unknown/absent sizes to
/// [`DEFAULT_SIZE`].
pub fn estimate_for(size: Option<&str>) -> SizeEstimate {
    let category = size
        .and_then(SizeCategory::parse)
        .unwrap_or(DEFAULT_SIZE);
    estimate(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_has_its_own_estimate() {
        assert_eq!(estimate(SizeCategory::Tiny).price, "$100 - $150");
        assert_eq!(estimate(SizeCategory::Small).price, "$150 - $300");
        assert_eq!(estimate(SizeCategory::Medium).price, "$300 - $600");
        assert_eq!(estimate(SizeCategory::Large).price, "$600 - $1200");
        assert_eq!(estimate(SizeCategory::ExtraLarge).price, "$1200+");
    }

    #[test]
    fn wire_values_round_trip() {
        for category in SizeCategory::all() {
            assert_eq!(SizeCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(SizeCategory::parse("Extra-Large"), Some(SizeCategory::ExtraLarge));
        assert_eq!(SizeCategory::parse(" TINY "), Some(SizeCategory::Tiny));
    }

    #[test]
    fn unknown_size_falls_back_to_medium() {
        assert_eq!(estimate_for(Some("gigantic")), estimate(SizeCategory::Medium));
        assert_eq!(estimate_for(None), estimate(SizeCategory::Medium));
        assert_eq!(estimate_for(Some("")), estimate(SizeCategory::Medium));
    }

    #[test]
    fn large_scenario_matches_table() {
        let e = estimate_for(Some("large"));
        assert_eq!(e.time, "4 - 8 hours");
        assert_eq!(e.price, "$600 - $1200");
    }
}
