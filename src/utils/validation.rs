//! Validation utilities

use bigdecimal::BigDecimal;

use crate::types::*;

/// Validate that a record identifier is usable
pub fn validate_record_id(id: &str) -> MatchResult<()> {
    if id.trim().is_empty() {
        return Err(MatchError::InvalidInput(
            "Record ID cannot be empty".to_string(),
        ));
    }

    if id.len() > 100 {
        return Err(MatchError::InvalidInput(
            "Record ID cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate a candidate record's mandatory fields
///
/// Candidate amounts carry no direction, so a negative amount is a caller
/// contract violation rather than a zero-contribution signal.
pub fn validate_candidate(candidate: &Candidate) -> MatchResult<()> {
    validate_record_id(&candidate.id)?;

    if candidate.amount < BigDecimal::from(0) {
        return Err(MatchError::InvalidInput(format!(
            "Candidate '{}' has a negative amount: {}",
            candidate.id, candidate.amount
        )));
    }

    Ok(())
}
