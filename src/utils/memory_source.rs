//! In-memory record source for testing and development

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory [`RecordSource`] implementation for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    transactions: Arc<RwLock<Vec<Transaction>>>,
    candidates: Arc<RwLock<Vec<Candidate>>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction to the store
    pub fn add_transaction(&self, transaction: Transaction) {
        self.transactions.write().unwrap().push(transaction);
    }

    /// Add a candidate record to the store
    pub fn add_candidate(&self, candidate: Candidate) {
        self.candidates.write().unwrap().push(candidate);
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.transactions.write().unwrap().clear();
        self.candidates.write().unwrap().clear();
    }
}

#[async_trait]
impl RecordSource for MemoryStore {
    async fn list_transactions(&self) -> MatchResult<Vec<Transaction>> {
        Ok(self.transactions.read().unwrap().clone())
    }

    async fn list_candidates(&self) -> MatchResult<Vec<Candidate>> {
        Ok(self.candidates.read().unwrap().clone())
    }
}
