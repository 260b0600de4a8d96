// src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::domain::core::Errors;

pub type AmountValue = i64;

/// A price in the smallest currency unit (Rupiah). Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "AmountValue", into = "AmountValue")]
pub struct Price(AmountValue);

impl Price {
    pub fn value(&self) -> AmountValue {
        self.0
    }
}

impl TryFrom<AmountValue> for Price {
    type Error = Errors;

    fn try_from(value: AmountValue) -> Result<Self, Self::Error> {
        if value < 0 {
            Err(Errors::InvalidPrice(value.to_string()))
        } else {
            Ok(Price(value))
        }
    }
}

impl From<Price> for AmountValue {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = Errors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<AmountValue>()
            .map_err(|_| Errors::InvalidPrice(s.to_string()))?;
        Price::try_from(value)
    }
}

/// Renders as `Rp 20,000`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rp {}", group_thousands(self.0))
    }
}

fn group_thousands(value: AmountValue) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
