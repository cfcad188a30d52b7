//! Record source backed by the vault

use tokenmove_select::{RecordSource, Result};
use tokenmove_types::{TokenType, UnspentRecord};

use crate::Vault;

/// Returns the unspent records of a token type held in a [`Vault`].
///
/// Paging is not supported: a query matching more than `page_limit`
/// records fails with `ResultSetTooLarge`.
#[derive(Clone)]
pub struct VaultRecordSource {
    vault: Vault,
    page_limit: usize,
}

impl VaultRecordSource {
    pub fn new(vault: Vault, page_limit: usize) -> Self {
        Self { vault, page_limit }
    }

    pub fn page_limit(&self) -> usize {
        self.page_limit
    }
}

impl RecordSource for VaultRecordSource {
    fn query_by_type(&self, token_type: &TokenType) -> Result<Vec<UnspentRecord>> {
        self.vault.query_page(token_type, self.page_limit)
    }
}
