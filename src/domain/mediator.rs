// src/domain/mediator.rs
use log::{debug, info, warn};
use std::str::FromStr;
use crate::money::Price;
use super::bids::Bid;
use super::core::{Errors, RoundId, SellerId};
use super::states::TenderRound;

/// A seller taking part in tenders. Receives every broadcast and the outcome of every round.
pub trait SellerListener {
    fn seller_id(&self) -> &str;
    fn on_tender_opened(&mut self, item: &str);
    /// `won` is true only for the announced winner.
    fn on_round_closed(&mut self, winner: &str, won: bool);
}

/// The buyer's view of a round.
pub trait BuyerListener {
    fn on_tender_opened(&mut self, item: &str);
    /// Called with the bids ranked cheapest first after every accepted bid.
    fn on_bids_updated(&mut self, ranked: &[Bid]);
    fn on_round_closed(&mut self, winner: &str);
}

/// Owns the active round and fans out notifications to the registered buyer and sellers.
#[derive(Default)]
pub struct Mediator {
    round: Option<TenderRound>,
    buyer: Option<Box<dyn BuyerListener>>,
    sellers: Vec<Box<dyn SellerListener>>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_buyer(&mut self, buyer: Box<dyn BuyerListener>) {
        self.buyer = Some(buyer);
    }

    pub fn add_seller(&mut self, seller: Box<dyn SellerListener>) {
        debug!("Seller registered: {}", seller.seller_id());
        self.sellers.push(seller);
    }

    pub fn seller_ids(&self) -> Vec<SellerId> {
        self.sellers.iter().map(|s| s.seller_id().to_string()).collect()
    }

    pub fn round(&self) -> Option<&TenderRound> {
        self.round.as_ref()
    }

    /// Always starts a fresh round, abandoning whatever round was in progress.
    pub fn open_tender(&mut self, item: impl Into<String>) -> RoundId {
        let item = item.into();
        let round_id = match self.round.as_mut() {
            Some(round) => {
                if round.is_open() {
                    warn!("Abandoning open round {} for \"{}\"", round.id(), round.item());
                }
                round.reset(item.clone());
                round.id()
            }
            None => {
                let round = TenderRound::new(item.clone());
                let round_id = round.id();
                self.round = Some(round);
                round_id
            }
        };
        info!("Tender {} opened for \"{}\"", round_id, item);

        if let Some(buyer) = self.buyer.as_mut() {
            buyer.on_tender_opened(&item);
        }
        for seller in self.sellers.iter_mut() {
            seller.on_tender_opened(&item);
        }
        round_id
    }

    /// Accepts the bid into the open round. A closed round is left untouched.
    pub fn submit_bid(&mut self, bid: Bid) -> Result<(), Errors> {
        let round = self.round.as_mut().ok_or(Errors::NoTender)?;
        if let Err(err) = round.add_bid(bid.clone()) {
            warn!("Rejected bid from {} for round {}: {}", bid.seller(), round.id(), err);
            return Err(err);
        }
        info!("Bid accepted: {}", bid);

        let ranked = round.current_bids();
        if let Some(buyer) = self.buyer.as_mut() {
            buyer.on_bids_updated(&ranked);
        }
        Ok(())
    }

    /// Parses the price text and submits the resulting bid.
    pub fn place_bid(&mut self, seller: &str, description: &str, price: &str) -> Result<Bid, Errors> {
        let price = Price::from_str(price)?;
        let bid = Bid::new(seller, description, price);
        self.submit_bid(bid.clone())?;
        Ok(bid)
    }

    /// Closes the round with the given winner. The winner does not have to have bid.
    pub fn announce_winner(&mut self, winner: &str) -> Result<(), Errors> {
        let round = self.round.as_mut().ok_or(Errors::NoTender)?;
        round.close(winner)?;
        if !round.submitted_bids().iter().any(|b| b.seller() == winner) {
            warn!("Winner {} has no bid in round {}", winner, round.id());
        }
        info!("Round {} closed, winner: {}", round.id(), winner);

        for seller in self.sellers.iter_mut() {
            let won = seller.seller_id() == winner;
            seller.on_round_closed(winner, won);
        }
        if let Some(buyer) = self.buyer.as_mut() {
            buyer.on_round_closed(winner);
        }
        Ok(())
    }

    /// Manual pick by the buyer.
    pub fn select_winner(&mut self, seller: &str) -> Result<(), Errors> {
        self.announce_winner(seller)
    }

    pub fn best_offer(&self) -> Option<Bid> {
        self.round.as_ref().and_then(|r| r.best_offer())
    }

    /// One-click deal with the cheapest offer of the open round.
    pub fn request_best_offer(&mut self) -> Result<Bid, Errors> {
        let round = self.round.as_ref().ok_or(Errors::NoTender)?;
        if let Some(winner) = round.winner() {
            return Err(Errors::AlreadyClosed(winner.clone()));
        }
        let best = round.best_offer().ok_or(Errors::NoOffers)?;
        self.announce_winner(best.seller())?;
        Ok(best)
    }
}
