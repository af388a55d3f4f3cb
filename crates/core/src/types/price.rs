//! Price representation and display formatting.
//!
//! Amounts are `rust_decimal::Decimal` so that `10` and `12.5` format exactly
//! as entered. In persisted JSON an amount is a plain JSON number, see
//! [`amount_number`].

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An error parsing a [`Currency`] code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct CurrencyError(pub String);

/// Currencies the storefront can label prices with.
///
/// Only the display symbol differs; no conversion is ever performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Symbol prefixed to displayed amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::INR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(CurrencyError(s.to_string())),
        }
    }
}

/// An amount paired with the currency used to label it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// Currency used for the display symbol.
    pub currency: Currency,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

/// Formats as `<symbol><amount>` with trailing zeros dropped, e.g. `₹10`
/// or `₹12.5`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.amount.normalize())
    }
}

/// Serde adapter storing a non-negative `Decimal` as a JSON number.
///
/// Whole amounts that fit an `i64` are written as integers (`10`), others as
/// floats (`12.5`, `1e20`). On read, an amount is accepted only if it is
/// finite, non-negative, and converts back to the same `f64`, so anything
/// read can be written again unchanged.
pub mod amount_number {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use serde::{Deserialize, Deserializer, Serializer, de, ser};

    /// Serialize an amount as a JSON number.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount has no `f64` representation.
    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = amount.normalize();
        if amount.scale() == 0 {
            if let Some(whole) = amount.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        let float = amount
            .to_f64()
            .ok_or_else(|| <S::Error as ser::Error>::custom("amount out of range"))?;
        serializer.serialize_f64(float)
    }

    /// Deserialize a JSON number into a non-negative amount.
    ///
    /// # Errors
    ///
    /// Returns an error for non-numbers, negative or non-finite values, and
    /// values a `Decimal` cannot hold exactly as the given `f64` (e.g. `1e-30`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(de::Error::custom(format!(
                "price must be a non-negative number, got {value}"
            )));
        }
        let amount = Decimal::from_f64(value)
            .map(|d| d.normalize())
            .ok_or_else(|| de::Error::custom("price out of range"))?;
        if amount.to_f64() != Some(value) {
            return Err(de::Error::custom(format!(
                "price {value} cannot be stored without loss"
            )));
        }
        Ok(amount)
    }
}
