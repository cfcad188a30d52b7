//! Amounts: a non-negative quantity of a single token type
//!
//! Quantities are integers in the smallest unit of the type (pence for GBP
//! cash, whole shares for a security). There is no conversion between types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Result, TokenType, TypesError};

/// A quantity of one token type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// Quantity in the smallest unit of the token type
    pub quantity: u64,
    pub token_type: TokenType,
}

impl Amount {
    pub fn new(quantity: u64, token_type: TokenType) -> Self {
        Self {
            quantity,
            token_type,
        }
    }

    pub fn zero(token_type: TokenType) -> Self {
        Self::new(0, token_type)
    }

    pub fn is_zero(&self) -> bool {
        self.quantity == 0
    }

    /// Same token type, different quantity
    pub fn with_quantity(&self, quantity: u64) -> Self {
        Self::new(quantity, self.token_type.clone())
    }

    /// Checked addition (token types must match)
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_type(other)?;
        let quantity = self
            .quantity
            .checked_add(other.quantity)
            .ok_or(TypesError::AmountOverflow)?;
        Ok(self.with_quantity(quantity))
    }

    /// Checked subtraction (token types must match)
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_type(other)?;
        let quantity = self
            .quantity
            .checked_sub(other.quantity)
            .ok_or(TypesError::AmountUnderflow)?;
        Ok(self.with_quantity(quantity))
    }

    fn ensure_same_type(&self, other: &Self) -> Result<()> {
        if self.token_type != other.token_type {
            return Err(TypesError::TokenTypeMismatch {
                expected: self.token_type.to_string(),
                actual: other.token_type.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.token_type.identifier())
    }
}
