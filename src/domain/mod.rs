// src/domain/mod.rs
pub mod bids;
pub mod commands;
pub mod core;
pub mod mediator;
pub mod selection;
pub mod states;

use thiserror::Error;

pub use self::bids::*;
pub use self::commands::*;
pub use self::core::*;
pub use self::mediator::*;
pub use self::selection::{best_of, rank};
pub use self::states::*;

use crate::money::Price;

#[derive(Debug, Error)]
pub enum HandleError {
    #[error("Tender error: {0}")]
    TenderError(#[from] Errors),
}

pub fn handle(command: Command, mediator: &mut Mediator) -> Result<CommandSuccess, HandleError> {
    match command {
        Command::OpenTender { timestamp, item } => {
            let round_id = mediator.open_tender(item.clone());
            Ok(CommandSuccess::TenderOpened { timestamp, round_id, item })
        }

        Command::SubmitBid { timestamp, seller, description, price } => {
            let bid = Bid::new(seller, description, Price::try_from(price)?);
            mediator.submit_bid(bid.clone())?;
            Ok(CommandSuccess::BidAccepted { timestamp, bid })
        }

        Command::SelectWinner { timestamp, seller } => {
            mediator.select_winner(&seller)?;
            Ok(CommandSuccess::WinnerAnnounced { timestamp, round_id: current_round_id(mediator)?, winner: seller })
        }

        Command::RequestBestOffer { timestamp } => {
            let best = mediator.request_best_offer()?;
            Ok(CommandSuccess::WinnerAnnounced {
                timestamp,
                round_id: current_round_id(mediator)?,
                winner: best.seller().clone(),
            })
        }
    }
}

fn current_round_id(mediator: &Mediator) -> Result<RoundId, Errors> {
    mediator.round().map(|r| r.id()).ok_or(Errors::NoTender)
}
