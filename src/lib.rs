//! # Reconcile Core
//!
//! A matching engine for reconciling bank transactions against invoice and
//! receipt records when no single unambiguous key is guaranteed to be
//! present or correctly formatted.
//!
//! ## Features
//!
//! - **Reference normalization**: spacing, zero-padding, and case variants
//!   of the same reference number compare equal
//! - **Fuzzy name comparison**: edit-distance matching with a
//!   length-dependent per-word threshold
//! - **Date-proximity scoring**: graduated score over whichever date fields
//!   a record carries
//! - **Amount gate**: exact magnitude equality as a mandatory precondition
//! - **Combination policy**: fixed confidence threshold over the combined
//!   signals, with a reference-number short-circuit
//! - **Source abstraction**: trait-based record supply, so any backing
//!   collaborator can feed the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use reconcile_core::{find_match, Candidate, CandidateDates, CandidateKind, Transaction};
//! use chrono::NaiveDate;
//!
//! let transaction = Transaction::new(
//!     "tx-1".to_string(),
//!     "-150.00".parse().unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
//!     "Acme Oy".to_string(),
//!     None,
//! );
//! let invoice = Candidate::new(
//!     "inv-1".to_string(),
//!     CandidateKind::Invoice,
//!     "150.00".parse().unwrap(),
//!     CandidateDates {
//!         due_date: NaiveDate::from_ymd_opt(2024, 3, 10),
//!         ..Default::default()
//!     },
//!     "Acme Oy".to_string(),
//!     None,
//! );
//!
//! let decision = find_match(&transaction, &[invoice]).unwrap();
//! assert_eq!(decision.unwrap().score, 24);
//! ```

pub mod matching;
pub mod normalize;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use matching::*;
pub use normalize::*;
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
