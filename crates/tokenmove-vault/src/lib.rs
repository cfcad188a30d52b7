//! tokenmove Vault - in-memory store of unspent token records
//!
//! The vault is:
//! - Keyed by record reference (transaction id + output index)
//! - Queried by exact token type, across all holders
//! - Bounded: a query matching more records than the page limit fails
//!   rather than returning a partial set
//!
//! It backs the default [`RecordSource`](tokenmove_select::RecordSource) used by
//! [`Vault::generate_move`]. Selection never mutates the vault.

pub mod config;
pub mod source;

pub use config::*;
pub use source::VaultRecordSource;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use tokenmove_select::{generate_move, MovePlan, SelectionError};
use tokenmove_types::{
    Amount, Party, RecordRef, TokenRecord, TokenType, TransactionId, UnspentRecord,
};
use tracing::{info, warn};

/// The tokenmove vault
///
/// Cloning gives another handle to the same records.
#[derive(Clone, Default)]
pub struct Vault {
    records: Arc<RwLock<BTreeMap<RecordRef, TokenRecord>>>,
    config: VaultConfig,
}

impl Vault {
    /// Create an empty vault with the default page limit
    pub fn new() -> Self {
        Self::with_config(VaultConfig::default())
    }

    pub fn with_config(config: VaultConfig) -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            config,
        }
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Store one new unspent record
    pub fn issue(&self, record: TokenRecord) -> RecordRef {
        let record_ref = RecordRef::new(TransactionId::new(), 0);
        info!(
            record = %record_ref,
            holder = %record.holder,
            amount = %record.amount,
            "Issued record"
        );
        self.records.write().insert(record_ref, record);
        record_ref
    }

    /// Store records as the outputs of a single new transaction
    pub fn issue_all(&self, records: impl IntoIterator<Item = TokenRecord>) -> Vec<RecordRef> {
        let tx_id = TransactionId::new();
        let mut store = self.records.write();

        let refs: Vec<RecordRef> = records
            .into_iter()
            .zip(0u32..)
            .map(|(record, index)| {
                let record_ref = RecordRef::new(tx_id, index);
                store.insert(record_ref, record);
                record_ref
            })
            .collect();

        info!(tx = %tx_id, count = refs.len(), "Issued records");
        refs
    }

    pub fn get(&self, record_ref: &RecordRef) -> Option<TokenRecord> {
        self.records.read().get(record_ref).cloned()
    }

    /// All unspent records of exactly `token_type`, ordered by reference
    pub fn unspent_by_type(&self, token_type: &TokenType) -> Vec<UnspentRecord> {
        let records = self.records.read();
        matching(&records, token_type).collect()
    }

    pub fn count_by_type(&self, token_type: &TokenType) -> usize {
        let records = self.records.read();
        matching(&records, token_type).count()
    }

    /// Unspent records of `token_type`, failing if there are more than `limit`
    pub fn query_page(
        &self,
        token_type: &TokenType,
        limit: usize,
    ) -> tokenmove_select::Result<Vec<UnspentRecord>> {
        let records = self.records.read();

        let found = matching(&records, token_type).count();
        if found > limit {
            warn!(token_type = %token_type, found, limit, "Record query exceeds page limit");
            return Err(SelectionError::ResultSetTooLarge { found, limit });
        }

        Ok(matching(&records, token_type).collect())
    }

    /// Total unspent quantity of `token_type` held by `holder`
    pub fn balance(&self, holder: &Party, token_type: &TokenType) -> u128 {
        let records = self.records.read();
        matching(&records, token_type)
            .filter(|r| r.holder() == holder)
            .map(|r| u128::from(r.quantity()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Record source over this vault, bounded by the configured page limit
    pub fn record_source(&self) -> VaultRecordSource {
        VaultRecordSource::new(self.clone(), self.config.page_limit)
    }

    /// Select a move from `source_owner`'s records in this vault
    pub fn generate_move(
        &self,
        recipients: &HashMap<Party, Amount>,
        change_holder: &Party,
        source_owner: &Party,
    ) -> tokenmove_select::Result<MovePlan> {
        generate_move(recipients, change_holder, source_owner, &self.record_source())
    }
}

fn matching<'a>(
    records: &'a BTreeMap<RecordRef, TokenRecord>,
    token_type: &'a TokenType,
) -> impl Iterator<Item = UnspentRecord> + 'a {
    records
        .iter()
        .filter(move |(_, record)| record.token_type() == token_type)
        .map(|(record_ref, record)| UnspentRecord::new(*record_ref, record.clone()))
}
