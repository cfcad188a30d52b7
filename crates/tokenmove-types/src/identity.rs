//! Identity types for tokenmove
//!
//! Parties are opaque named identities. Records in a store are addressed by the
//! transaction that created them plus an output index.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{Result, TypesError};

/// Macro to generate UUID-backed ID types with common implementations
macro_rules! define_id_type {
    ($name:ident, $prefix:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse from a string (with or without prefix)
            pub fn parse(s: &str) -> Result<Self> {
                let s = s.strip_prefix(concat!($prefix, "_")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s).map_err(TypesError::InvalidId)?))
            }

            /// Get the inner UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", $prefix, self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_id_type!(TransactionId, "tx", "Identifier of the transaction that produced a record");

/// An opaque identity: a holder, recipient, change-holder or issuer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Party(pub String);

impl Party {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Party {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Address of a record in a record store.
///
/// Opaque to the selection engine, which passes it through from the record
/// source to the selected inputs unchanged. Ordered so that records of equal
/// quantity still sort deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    pub tx_id: TransactionId,
    pub index: u32,
}

impl RecordRef {
    pub fn new(tx_id: TransactionId, index: u32) -> Self {
        Self { tx_id, index }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.tx_id, self.index)
    }
}
