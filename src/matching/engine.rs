//! Match decision engine
//!
//! Evaluates one transaction against a set of candidate records (or the
//! reverse) and applies the acceptance policy. Each call is a pure function
//! over its inputs: no state survives between invocations, and identical
//! inputs always produce identical results.

use crate::matching::score::{
    date_score, name_score, ACCEPT_THRESHOLD, AMOUNT_BASELINE, REFERENCE_MATCH_SCORE,
    SAME_DAY_SCORE,
};
use crate::normalize::{amounts_match, normalize_reference};
use crate::types::{Candidate, Match, MatchBasis, MatchError, MatchResult, MatchedSignals, Transaction};
use crate::utils::validation::validate_candidate;

/// One candidate's scored evaluation, before policy is applied
struct Scored {
    total: u32,
    date: u32,
    name: u32,
}

impl Scored {
    fn signals(&self) -> MatchedSignals {
        MatchedSignals {
            amount: true,
            date: self.date > 0,
            name: self.name > 0,
        }
    }

    /// The acceptance policy for scored matches
    ///
    /// Requires the confidence threshold, at least two of the three signals,
    /// and when the name contributed nothing, a same-day date match rather
    /// than merely a close one.
    fn accepted(&self) -> bool {
        if self.total < ACCEPT_THRESHOLD {
            return false;
        }
        if self.signals().count() < 2 {
            return false;
        }
        if self.name == 0 && self.date != SAME_DAY_SCORE {
            return false;
        }
        true
    }
}

/// Score a transaction/candidate pair, or `None` when the amount gate fails
fn score_pair(transaction: &Transaction, candidate: &Candidate) -> Option<Scored> {
    if !amounts_match(&transaction.amount, &candidate.amount) {
        return None;
    }

    let date = date_score(transaction.date, &candidate.dates);
    let name = name_score(&transaction.counterparty, &candidate.counterparty);

    Some(Scored {
        total: AMOUNT_BASELINE + date + name,
        date,
        name,
    })
}

/// Whether both references are present and equal after normalization
fn references_equal(transaction: &Transaction, candidate: &Candidate) -> bool {
    let tx_ref = normalize_reference(transaction.reference.as_deref());
    let cand_ref = normalize_reference(candidate.reference.as_deref());
    !tx_ref.is_empty() && !cand_ref.is_empty() && tx_ref == cand_ref
}

fn reference_match(record_id: &str) -> Match {
    Match {
        record_id: record_id.to_string(),
        score: REFERENCE_MATCH_SCORE,
        signals: MatchedSignals::default(),
        basis: MatchBasis::Reference,
    }
}

fn scored_match(record_id: &str, scored: &Scored) -> Match {
    Match {
        record_id: record_id.to_string(),
        score: scored.total,
        signals: scored.signals(),
        basis: MatchBasis::Signals,
    }
}

fn validate_transaction(transaction: &Transaction) -> MatchResult<()> {
    if transaction.id.trim().is_empty() {
        return Err(MatchError::InvalidInput(
            "Transaction ID cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Find the best-matching candidate for a transaction
///
/// A reference-number hit short-circuits everything: equal normalized
/// references are an instant match regardless of score. Otherwise candidates
/// are gated on amount magnitude, scored on date proximity and name
/// similarity, and the best candidate clearing the policy wins. Ties go to
/// the candidate seen first. No qualifying candidate yields `Ok(None)`,
/// never an error.
pub fn find_match(
    transaction: &Transaction,
    candidates: &[Candidate],
) -> MatchResult<Option<Match>> {
    validate_transaction(transaction)?;

    let mut best: Option<(u32, Match)> = None;

    for candidate in candidates {
        validate_candidate(candidate)?;

        if references_equal(transaction, candidate) {
            return Ok(Some(reference_match(&candidate.id)));
        }

        let Some(scored) = score_pair(transaction, candidate) else {
            continue;
        };
        if !scored.accepted() {
            continue;
        }

        // Strict greater-than keeps the first-seen candidate on ties.
        if best.as_ref().map_or(true, |(s, _)| scored.total > *s) {
            best = Some((scored.total, scored_match(&candidate.id, &scored)));
        }
    }

    Ok(best.map(|(_, m)| m))
}

/// Find the best-matching transaction for a candidate record
///
/// The reverse lookup direction: same gate, scoring, and policy as
/// [`find_match`], evaluated over a set of transactions.
pub fn find_transaction(
    candidate: &Candidate,
    transactions: &[Transaction],
) -> MatchResult<Option<Match>> {
    validate_candidate(candidate)?;

    let mut best: Option<(u32, Match)> = None;

    for transaction in transactions {
        validate_transaction(transaction)?;

        if references_equal(transaction, candidate) {
            return Ok(Some(reference_match(&transaction.id)));
        }

        let Some(scored) = score_pair(transaction, candidate) else {
            continue;
        };
        if !scored.accepted() {
            continue;
        }

        if best.as_ref().map_or(true, |(s, _)| scored.total > *s) {
            best = Some((scored.total, scored_match(&transaction.id, &scored)));
        }
    }

    Ok(best.map(|(_, m)| m))
}
