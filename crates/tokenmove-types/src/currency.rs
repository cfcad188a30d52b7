//! Fiat currencies backing cash token types
//!
//! Only the precision of a currency matters to token movement: a cash token's
//! fraction digits come from its currency, never from the issuer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FiatCurrency {
    USD,
    EUR,
    GBP,
    CHF,
    JPY,
    KRW,
}

/// Code and minor-unit digits, one row per variant
const CURRENCIES: [(FiatCurrency, &str, u8); 6] = [
    (FiatCurrency::USD, "USD", 2),
    (FiatCurrency::EUR, "EUR", 2),
    (FiatCurrency::GBP, "GBP", 2),
    (FiatCurrency::CHF, "CHF", 2),
    (FiatCurrency::JPY, "JPY", 0),
    (FiatCurrency::KRW, "KRW", 0),
];

impl FiatCurrency {
    pub fn all() -> impl Iterator<Item = FiatCurrency> {
        CURRENCIES.iter().map(|(currency, _, _)| *currency)
    }

    fn row(self) -> &'static (FiatCurrency, &'static str, u8) {
        // Variants and rows are declared in the same order
        &CURRENCIES[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.row().1
    }

    /// Digits after the decimal point in the smallest unit a token can hold
    pub fn fraction_digits(self) -> u8 {
        self.row().2
    }
}

impl fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FiatCurrency {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        CURRENCIES
            .iter()
            .find(|(_, known, _)| known.eq_ignore_ascii_case(code))
            .map(|(currency, _, _)| *currency)
            .ok_or_else(|| TypesError::UnknownCurrency {
                code: code.to_ascii_uppercase(),
            })
    }
}
