//! Token records - units of value held by one party at a time

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Amount, Party, RecordRef, TokenType};

/// An immutable quantity of a token type held by a party
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRecord {
    pub amount: Amount,
    /// Current holder
    pub holder: Party,
}

impl TokenRecord {
    pub fn new(amount: Amount, holder: Party) -> Self {
        Self { amount, holder }
    }

    /// Create a record of `quantity` units of `token_type`
    pub fn of(quantity: u64, token_type: TokenType, holder: Party) -> Self {
        Self::new(Amount::new(quantity, token_type), holder)
    }

    pub fn quantity(&self) -> u64 {
        self.amount.quantity
    }

    pub fn token_type(&self) -> &TokenType {
        &self.amount.token_type
    }

    /// The same amount, held by someone else
    pub fn with_new_holder(&self, holder: Party) -> Self {
        Self::new(self.amount.clone(), holder)
    }
}

impl fmt::Display for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} held by {}", self.amount, self.holder)
    }
}

/// A record together with its address in the store that holds it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnspentRecord {
    pub record_ref: RecordRef,
    pub record: TokenRecord,
}

impl UnspentRecord {
    pub fn new(record_ref: RecordRef, record: TokenRecord) -> Self {
        Self { record_ref, record }
    }

    pub fn quantity(&self) -> u64 {
        self.record.quantity()
    }

    pub fn token_type(&self) -> &TokenType {
        self.record.token_type()
    }

    pub fn holder(&self) -> &Party {
        &self.record.holder
    }
}
