//! tokenmove Types - fungible token records and their denominations
//!
//! This crate contains the foundational types shared by the selection engine
//! and the record stores, with zero dependencies on other tokenmove crates:
//!
//! - Identity types (Party, TransactionId, RecordRef)
//! - Fiat currencies with their inherent fraction digits
//! - Token types (cash and security denominations, each bound to an issuer)
//! - Amounts and token records
//!
//! # Invariants
//!
//! 1. Two token types are equal only if variant, identifier, fraction digits
//!    and issuer all match
//! 2. Amount arithmetic is only defined between amounts of the same token type
//! 3. Records are immutable values; moving one produces a new record

pub mod identity;
pub mod currency;
pub mod token;
pub mod amount;
pub mod record;
pub mod error;

pub use identity::*;
pub use currency::*;
pub use token::*;
pub use amount::*;
pub use record::*;
pub use error::*;
