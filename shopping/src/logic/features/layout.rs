//! Feature Layout - Evidence Vector Definition
//!
//! **This file controls the evidence schema**
//!
//! Column order here is the order of every evidence vector and of every
//! column in the model matrix. Nothing else hardcodes indices.

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Column names in exact order they appear in the evidence vector
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Page counts and durations (0-5) ===
    "Administrative",          // 0
    "Administrative_Duration", // 1
    "Informational",           // 2
    "Informational_Duration",  // 3
    "ProductRelated",          // 4
    "ProductRelated_Duration", // 5

    // === Rates (6-9) ===
    "BounceRates",             // 6
    "ExitRates",               // 7
    "PageValues",              // 8
    "SpecialDay",              // 9

    // === Calendar (10) ===
    "Month",                   // 10: Jan=0 .. Dec=11

    // === Categorical codes (11-14) ===
    "OperatingSystems",        // 11
    "Browser",                 // 12
    "Region",                  // 13
    "TrafficType",             // 14

    // === Flags (15-16) ===
    "VisitorType",             // 15: 1 = Returning_Visitor
    "Weekend",                 // 16: 1 = TRUE
];

/// Total number of evidence features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 17;

/// Column holding the label. Not part of the evidence vector.
pub const LABEL_COLUMN: &str = "Revenue";

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn feature_index(name: &str) -> Option<usize> {
        FEATURE_LAYOUT.iter().position(|&n| n == name)
    }

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 17);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_label_not_in_layout() {
        assert_eq!(feature_index(LABEL_COLUMN), None);
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("Administrative"), Some(0));
        assert_eq!(feature_index("Month"), Some(10));
        assert_eq!(feature_index("Weekend"), Some(16));
        assert_eq!(feature_index("month"), None);
    }

    #[test]
    fn test_names_unique() {
        for (i, name) in FEATURE_LAYOUT.iter().enumerate() {
            assert_eq!(feature_index(name), Some(i), "{} appears twice", name);
        }
    }
}
