// src/domain/bids.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::money::Price;
use super::core::SellerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    seller: SellerId,
    description: String,
    price: Price,
}

impl Bid {
    pub fn new(seller: impl Into<SellerId>, description: impl Into<String>, price: Price) -> Self {
        Bid {
            seller: seller.into(),
            description: description.into(),
            price,
        }
    }

    pub fn seller(&self) -> &SellerId {
        &self.seller
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// Renders as the buyer's offer list shows it: `[Rp 15,000]  Seller  -  Menu`.
impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]  {}  -  {}", self.price, self.seller, self.description)
    }
}
