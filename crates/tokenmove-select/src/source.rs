//! Record sources - where unspent records come from
//!
//! The selection engine only ever asks one question of a store: "which
//! unspent records of this token type exist?". Putting that question behind
//! a trait lets the engine run against a real store in production and an
//! in-memory list in tests.

use std::sync::Arc;

use tokenmove_types::{RecordRef, TokenRecord, TokenType, TransactionId, UnspentRecord};

use crate::Result;

/// Supplies the currently unspent records of a token type, across all holders.
///
/// Results are unordered. Implementations that page their results must fail
/// with [`SelectionError::ResultSetTooLarge`](crate::SelectionError::ResultSetTooLarge)
/// rather than return a truncated set.
pub trait RecordSource: Send + Sync {
    fn query_by_type(&self, token_type: &TokenType) -> Result<Vec<UnspentRecord>>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn query_by_type(&self, token_type: &TokenType) -> Result<Vec<UnspentRecord>> {
        (**self).query_by_type(token_type)
    }
}

impl<S: RecordSource + ?Sized> RecordSource for Arc<S> {
    fn query_by_type(&self, token_type: &TokenType) -> Result<Vec<UnspentRecord>> {
        (**self).query_by_type(token_type)
    }
}

/// A fixed list of unspent records held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordSource {
    records: Vec<UnspentRecord>,
}

impl MemoryRecordSource {
    pub fn new(records: Vec<UnspentRecord>) -> Self {
        Self { records }
    }

    /// Wrap plain records, giving each a fresh reference
    pub fn from_records(records: impl IntoIterator<Item = TokenRecord>) -> Self {
        let tx_id = TransactionId::new();
        let records = records
            .into_iter()
            .zip(0u32..)
            .map(|(record, index)| UnspentRecord::new(RecordRef::new(tx_id, index), record))
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[UnspentRecord] {
        &self.records
    }
}

impl RecordSource for MemoryRecordSource {
    fn query_by_type(&self, token_type: &TokenType) -> Result<Vec<UnspentRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.token_type() == token_type)
            .cloned()
            .collect())
    }
}
