use crate::types::AmountError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::error;

/// A non-negative transaction amount.
///
/// Backed by `Decimal` so that summing values such as `150.2` and `250.4` stays exact.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value));
        }

        Ok(Amount(value))
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount AddAssign error: Overflow")
        }
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        let mut total = Amount::ZERO;

        for amount in iter {
            total += amount;
        }

        total
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str(value).map_err(|error| {
            AmountError::InvalidFormat(format!("Value '{value}' is not a decimal: {error}"))
        })?;

        Amount::new(decimal)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Amount::new(value).map_err(de::Error::custom)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        //NOTE: Decimals beyond f64 range fall back to their exact text form
        match self.0.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_str(&self.0.to_string())
        }
    }
}
