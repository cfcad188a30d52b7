//! Token types - the denominations a record can be held in
//!
//! A token type is a closed set of variants. Each variant is bound to the
//! party that issued it, so two types sharing an identifier but issued by
//! different parties are different denominations and never interchangeable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{FiatCurrency, Party};

/// A fungible denomination.
///
/// Equality and hashing are structural over the variant and all of its
/// fields, which makes two types equal exactly when variant, identifier,
/// fraction digits and issuer all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenType {
    /// Cash issued against a fiat currency; precision comes from the currency
    Cash {
        currency: FiatCurrency,
        issuer: Party,
    },
    /// A security identified by a free-form identifier; always whole units
    Security {
        identifier: String,
        issuer: Party,
    },
}

impl TokenType {
    /// Create a cash token type
    pub fn cash(currency: FiatCurrency, issuer: Party) -> Self {
        Self::Cash { currency, issuer }
    }

    /// Create a security token type
    pub fn security(identifier: impl Into<String>, issuer: Party) -> Self {
        Self::Security {
            identifier: identifier.into(),
            issuer,
        }
    }

    /// The currency code for cash, the security identifier otherwise
    pub fn identifier(&self) -> &str {
        match self {
            Self::Cash { currency, .. } => currency.code(),
            Self::Security { identifier, .. } => identifier,
        }
    }

    /// Number of fraction digits a quantity of this type carries
    pub fn fraction_digits(&self) -> u8 {
        match self {
            Self::Cash { currency, .. } => currency.fraction_digits(),
            Self::Security { .. } => 0,
        }
    }

    pub fn issuer(&self) -> &Party {
        match self {
            Self::Cash { issuer, .. } | Self::Security { issuer, .. } => issuer,
        }
    }

    pub fn is_cash(&self) -> bool {
        matches!(self, Self::Cash { .. })
    }

    pub fn is_security(&self) -> bool {
        matches!(self, Self::Security { .. })
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} issued by {}", self.identifier(), self.issuer())
    }
}
