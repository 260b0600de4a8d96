// src/domain/core.rs
use thiserror::Error;
use uuid::Uuid;

pub type SellerId = String;
pub type RoundId = Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Round closed")]
    RoundClosed,

    #[error("No tender has been opened")]
    NoTender,

    #[error("Round already closed, winner: {0}")]
    AlreadyClosed(SellerId),

    #[error("No offers received")]
    NoOffers,
}
