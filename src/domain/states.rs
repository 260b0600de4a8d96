// src/domain/states.rs
use uuid::Uuid;
use super::bids::Bid;
use super::core::{Errors, RoundId, SellerId};
use super::selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStatus {
    Open,
    Closed { winner: SellerId },
}

/// One request-for-bids cycle, from broadcast to winner announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenderRound {
    id: RoundId,
    item: String,
    /// Submission order.
    bids: Vec<Bid>,
    status: RoundStatus,
}

impl TenderRound {
    pub fn new(item: impl Into<String>) -> Self {
        TenderRound {
            id: Uuid::new_v4(),
            item: item.into(),
            bids: Vec::new(),
            status: RoundStatus::Open,
        }
    }

    /// Starts over with a new request. Bids of the previous round are dropped.
    pub fn reset(&mut self, item: impl Into<String>) {
        *self = TenderRound::new(item);
    }

    pub fn add_bid(&mut self, bid: Bid) -> Result<(), Errors> {
        match self.status {
            RoundStatus::Open => {
                self.bids.push(bid);
                Ok(())
            }
            RoundStatus::Closed { .. } => Err(Errors::RoundClosed),
        }
    }

    /// Open -> Closed, once. A second close keeps the first winner.
    pub fn close(&mut self, winner: impl Into<SellerId>) -> Result<(), Errors> {
        match &self.status {
            RoundStatus::Open => {
                self.status = RoundStatus::Closed { winner: winner.into() };
                Ok(())
            }
            RoundStatus::Closed { winner } => Err(Errors::AlreadyClosed(winner.clone())),
        }
    }

    /// Cheapest first.
    pub fn current_bids(&self) -> Vec<Bid> {
        selection::rank(&self.bids)
    }

    pub fn best_offer(&self) -> Option<Bid> {
        selection::best_of(&self.bids)
    }

    pub fn submitted_bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn status(&self) -> &RoundStatus {
        &self.status
    }

    pub fn is_open(&self) -> bool {
        matches!(self.status, RoundStatus::Open)
    }

    pub fn winner(&self) -> Option<&SellerId> {
        match &self.status {
            RoundStatus::Open => None,
            RoundStatus::Closed { winner } => Some(winner),
        }
    }
}
