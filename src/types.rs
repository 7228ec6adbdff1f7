//! Core types and data structures for the matching engine

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of candidate record a transaction can be matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateKind {
    /// An invoice (sales or purchase), carrying invoicing and due dates
    Invoice,
    /// A receipt, carrying a receiving date
    Receipt,
}

/// A bank transaction to be reconciled
///
/// The amount is signed: negative for outgoing payments, positive for
/// incoming ones. The sign is purely directional and never participates in
/// matching, which compares magnitudes only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: String,
    /// Signed amount; only `abs(amount)` matters for matching
    pub amount: BigDecimal,
    /// Booking date of the transaction
    pub date: NaiveDate,
    /// Counterparty name as reported by the bank
    pub counterparty: String,
    /// Optional payment reference number
    pub reference: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: String,
        amount: BigDecimal,
        date: NaiveDate,
        counterparty: String,
        reference: Option<String>,
    ) -> Self {
        Self {
            id,
            amount,
            date,
            counterparty,
            reference,
        }
    }
}

/// The date fields a candidate record may carry
///
/// Invoices typically populate `invoicing_date` and `due_date`; receipts
/// populate `receiving_date`. Absent slots simply contribute nothing to
/// date-proximity scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateDates {
    /// Date the invoice was issued
    pub invoicing_date: Option<NaiveDate>,
    /// Date payment is due
    pub due_date: Option<NaiveDate>,
    /// Date goods or services were received
    pub receiving_date: Option<NaiveDate>,
}

impl CandidateDates {
    /// Iterate over the date slots that are present, in a fixed order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        [self.invoicing_date, self.due_date, self.receiving_date]
            .into_iter()
            .flatten()
    }

    /// Whether no date field is populated
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// An invoice or receipt a transaction can be matched against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique identifier for the candidate record
    pub id: String,
    /// Whether this record is an invoice or a receipt
    pub kind: CandidateKind,
    /// Total amount; non-negative by contract (invoices carry no direction)
    pub amount: BigDecimal,
    /// Whatever date fields the record carries
    pub dates: CandidateDates,
    /// Counterparty name on the record
    pub counterparty: String,
    /// Optional reference number printed on the record
    pub reference: Option<String>,
}

impl Candidate {
    /// Create a new candidate record
    pub fn new(
        id: String,
        kind: CandidateKind,
        amount: BigDecimal,
        dates: CandidateDates,
        counterparty: String,
        reference: Option<String>,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            dates,
            counterparty,
            reference,
        }
    }
}

/// Which of the three evidence signals contributed to a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchedSignals {
    /// Amount magnitudes were equal (always true for scored matches)
    pub amount: bool,
    /// At least one candidate date was within scoring range
    pub date: bool,
    /// Counterparty names matched exactly or fuzzily
    pub name: bool,
}

impl MatchedSignals {
    /// Number of signals that fired
    pub fn count(&self) -> usize {
        [self.amount, self.date, self.name]
            .iter()
            .filter(|s| **s)
            .count()
    }
}

/// How a match was established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBasis {
    /// Normalized reference numbers were equal; scoring was bypassed
    Reference,
    /// The match cleared the combined signal-score policy
    Signals,
}

/// A successful match decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Identifier of the matched record (candidate or transaction,
    /// depending on lookup direction)
    pub record_id: String,
    /// Aggregate confidence score
    pub score: u32,
    /// Signals that contributed to the decision
    pub signals: MatchedSignals,
    /// Whether the match came from a reference hit or from scoring
    pub basis: MatchBasis,
}

/// Errors that can occur in the matching engine
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Source error: {0}")]
    Source(String),
}

/// Result type for matching operations
pub type MatchResult<T> = Result<T, MatchError>;
