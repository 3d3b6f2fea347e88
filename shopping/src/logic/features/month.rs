//! Month abbreviation table.
//!
//! The input data spells June and July as "June" and "Jul". Only the twelve
//! spellings below are accepted.

/// Month spellings in calendar order; the index is the encoded value.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Encode a month abbreviation as 0 (Jan) through 11 (Dec).
pub fn month_index(abbrev: &str) -> Option<u8> {
    MONTHS.iter().position(|&m| m == abbrev).map(|i| i as u8)
}
