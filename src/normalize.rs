//! Normalization of reference numbers, counterparty names, and amounts
//!
//! Reference numbers arrive in many formatting variants ("9876 543 2103",
//! "0098765432103") that all denote the same instrument. Normalization
//! collapses spacing, zero-padding, and case so equality comparison is
//! enough afterwards.

use bigdecimal::BigDecimal;

/// Canonicalize a reference number for equality comparison
///
/// Removes all whitespace, strips leading zeros, and uppercases. Absent or
/// empty input normalizes to the empty string, which never matches anything.
pub fn normalize_reference(reference: Option<&str>) -> String {
    let Some(reference) = reference else {
        return String::new();
    };

    reference
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .trim_start_matches('0')
        .to_uppercase()
}

/// Canonicalize a counterparty name for comparison
///
/// Lowercases and collapses runs of whitespace into single spaces.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether two amounts match in magnitude
///
/// Transaction amounts are signed (direction only), candidate amounts are
/// non-negative, so both sides compare by absolute value. Equality is exact;
/// there is no tolerance.
pub fn amounts_match(a: &BigDecimal, b: &BigDecimal) -> bool {
    a.abs() == b.abs()
}
