//! Traits for record-source abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Source of the records the engine matches against
///
/// This trait lets the matching core work with any backing collaborator
/// (database, API client, file loader, in-memory, etc.). The engine only
/// ever reads: implementations are free to share one instance across
/// concurrent matching calls without locking around the match itself.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// List all bank transactions awaiting reconciliation
    async fn list_transactions(&self) -> MatchResult<Vec<Transaction>>;

    /// List all candidate invoice/receipt records
    async fn list_candidates(&self) -> MatchResult<Vec<Candidate>>;
}
