//! Batch reconciliation over a record source
//!
//! Pulls transactions and candidates from a [`RecordSource`] collaborator
//! and runs the decision engine over every transaction. Each evaluation
//! reads the candidate set without mutating it, so callers may fan
//! transactions out across workers against a shared, read-only pool.

use serde::{Deserialize, Serialize};

use crate::matching::engine::{find_match, find_transaction};
use crate::traits::RecordSource;
use crate::types::*;

/// Outcome of reconciling one transaction against the candidate pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    /// The transaction that was evaluated
    pub transaction_id: String,
    /// The match decision, or `None` when no candidate qualified
    pub result: Option<Match>,
}

/// Reconciler that pairs transactions with invoice/receipt records
pub struct Reconciler<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> Reconciler<S> {
    /// Create a new reconciler over the given record source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Match a single transaction against the source's candidate pool
    pub async fn match_transaction(&self, transaction: &Transaction) -> MatchResult<Option<Match>> {
        let candidates = self.source.list_candidates().await?;
        find_match(transaction, &candidates)
    }

    /// Match a single candidate record against the source's transactions
    pub async fn match_candidate(&self, candidate: &Candidate) -> MatchResult<Option<Match>> {
        let transactions = self.source.list_transactions().await?;
        find_transaction(candidate, &transactions)
    }

    /// Reconcile every transaction in the source, producing one [`Pairing`]
    /// per transaction in source order
    ///
    /// Evaluations are independent: a candidate matched by one transaction
    /// is not withheld from the next. Flagging double-assignments is left to
    /// the reporting collaborator.
    pub async fn match_all(&self) -> MatchResult<Vec<Pairing>> {
        let transactions = self.source.list_transactions().await?;
        let candidates = self.source.list_candidates().await?;

        transactions
            .iter()
            .map(|transaction| {
                Ok(Pairing {
                    transaction_id: transaction.id.clone(),
                    result: find_match(transaction, &candidates)?,
                })
            })
            .collect()
    }
}
