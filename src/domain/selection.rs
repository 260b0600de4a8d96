// src/domain/selection.rs
use super::bids::Bid;

/// Cheapest first. Equal prices keep their submission order.
pub fn rank(bids: &[Bid]) -> Vec<Bid> {
    let mut ranked = bids.to_vec();
    // sort_by_key is stable
    ranked.sort_by_key(|bid| bid.price());
    ranked
}

/// The best offer is the head of the ranking.
pub fn best_of(bids: &[Bid]) -> Option<Bid> {
    rank(bids).into_iter().next()
}
