//! Money types with precise decimal arithmetic
//!
//! Claim amounts are carried as `Money` (rust_decimal under the hood) and
//! rendered as compact currency strings such as `"$137.00"` at the
//! serialization boundary.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Looks up a currency by its leading symbol
    pub fn from_symbol_prefix(s: &str) -> Option<(Currency, &str)> {
        [Currency::USD, Currency::EUR, Currency::GBP, Currency::JPY]
            .into_iter()
            .find_map(|c| s.strip_prefix(c.symbol()).map(|rest| (c, rest)))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates Money from a whole number of major units (e.g. dollars)
    pub fn from_major(units: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(units, 0), currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Formats as a compact currency string, e.g. `$137.00`
    pub fn to_currency_string(&self) -> String {
        let dp = self.currency.decimal_places();
        format!(
            "{}{:.dp$}",
            self.currency.symbol(),
            self.amount.round_dp(dp),
            dp = dp as usize
        )
    }

    /// Parses a compact currency string produced by [`Money::to_currency_string`]
    pub fn parse_currency_string(s: &str) -> Result<Money, MoneyError> {
        let (currency, digits) = Currency::from_symbol_prefix(s.trim())
            .ok_or_else(|| MoneyError::InvalidAmount(format!("unknown currency symbol in '{}'", s)))?;
        let amount = Decimal::from_str(digits)
            .map_err(|e| MoneyError::InvalidAmount(format!("'{}': {}", s, e)))?;
        Ok(Money::new(amount, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_currency_string())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_currency_string(s)
    }
}

/// Serde adapter that writes `Money` as its compact currency string
///
/// ```rust,ignore
/// #[serde(with = "core_kernel::money::currency_string")]
/// pub claim_amount: Money,
/// ```
pub mod currency_string {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&money.to_currency_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::parse_currency_string(&s).map_err(serde::de::Error::custom)
    }
}
