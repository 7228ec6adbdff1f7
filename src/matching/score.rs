//! Signal scorers and the combination policy
//!
//! Three independent signals feed a match decision: an amount gate, a
//! date-proximity score, and a name score. The policy constants live here as
//! one table so the combination rule stays auditable.

use chrono::NaiveDate;

use crate::matching::name::names_match;
use crate::normalize::normalize_name;
use crate::types::CandidateDates;

/// Fixed baseline awarded when the amount gate passes
pub const AMOUNT_BASELINE: u32 = 10;

/// Minimum aggregate score for a scored match to be accepted
pub const ACCEPT_THRESHOLD: u32 = 17;

/// Date score awarded for a same-day match
pub const SAME_DAY_SCORE: u32 = 7;

/// Name score for an exact (case-normalized) match
pub const NAME_EXACT_SCORE: u32 = 7;

/// Name score for a fuzzy match
pub const NAME_FUZZY_SCORE: u32 = 4;

/// Score attached to a reference-number match, which bypasses scoring
/// entirely; equals the maximum attainable scored total.
pub const REFERENCE_MATCH_SCORE: u32 = AMOUNT_BASELINE + SAME_DAY_SCORE + NAME_EXACT_SCORE;

/// Map an absolute day difference to a date-proximity score
pub fn day_difference_score(days: u32) -> u32 {
    match days {
        0 => SAME_DAY_SCORE,
        1..=2 => 6,
        3..=4 => 5,
        5..=10 => 3,
        _ => 0,
    }
}

/// Best date score across all date fields the candidate carries
///
/// Takes the minimum day difference over the present slots; absent slots are
/// skipped. No dates at all scores zero.
pub fn date_score(transaction_date: NaiveDate, dates: &CandidateDates) -> u32 {
    dates
        .iter()
        .map(|d| (transaction_date - d).num_days().unsigned_abs() as u32)
        .min()
        .map(day_difference_score)
        .unwrap_or(0)
}

/// Name score between a transaction counterparty and a candidate counterparty
///
/// Exact match after normalization scores [`NAME_EXACT_SCORE`], an accepted
/// fuzzy match scores [`NAME_FUZZY_SCORE`], anything else zero.
pub fn name_score(transaction_name: &str, candidate_name: &str) -> u32 {
    if !names_match(transaction_name, candidate_name) {
        return 0;
    }
    if normalize_name(transaction_name) == normalize_name(candidate_name) {
        NAME_EXACT_SCORE
    } else {
        NAME_FUZZY_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_difference_buckets() {
        assert_eq!(day_difference_score(0), 7);
        assert_eq!(day_difference_score(1), 6);
        assert_eq!(day_difference_score(2), 6);
        assert_eq!(day_difference_score(3), 5);
        assert_eq!(day_difference_score(4), 5);
        assert_eq!(day_difference_score(5), 3);
        assert_eq!(day_difference_score(10), 3);
        assert_eq!(day_difference_score(11), 0);
        assert_eq!(day_difference_score(365), 0);
    }

    #[test]
    fn date_score_takes_best_available_field() {
        let dates = CandidateDates {
            invoicing_date: Some(date(2024, 2, 20)),
            due_date: Some(date(2024, 3, 10)),
            receiving_date: None,
        };
        // Due date is same-day, invoicing date is 19 days out.
        assert_eq!(date_score(date(2024, 3, 10), &dates), 7);
    }

    #[test]
    fn date_score_works_in_both_directions() {
        let dates = CandidateDates {
            due_date: Some(date(2024, 3, 12)),
            ..Default::default()
        };
        assert_eq!(date_score(date(2024, 3, 10), &dates), 6);
        assert_eq!(date_score(date(2024, 3, 14), &dates), 6);
    }

    #[test]
    fn no_dates_scores_zero() {
        assert_eq!(date_score(date(2024, 3, 10), &CandidateDates::default()), 0);
    }

    #[test]
    fn name_score_exact() {
        assert_eq!(name_score("Acme Oy", "acme oy"), NAME_EXACT_SCORE);
    }

    #[test]
    fn name_score_fuzzy() {
        assert_eq!(name_score("Meikäläinen", "Meikaläinen"), NAME_FUZZY_SCORE);
        assert_eq!(name_score("Company", "Company Oy"), NAME_FUZZY_SCORE);
    }

    #[test]
    fn name_score_zero() {
        assert_eq!(name_score("Acme Oy", "Globex Corp"), 0);
        assert_eq!(name_score("", "Globex Corp"), 0);
    }

    #[test]
    fn reference_score_is_maximum_attainable() {
        assert_eq!(REFERENCE_MATCH_SCORE, 24);
    }
}
