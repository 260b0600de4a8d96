use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::money::AmountValue;
use super::bids::Bid;
use super::core::{RoundId, SellerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Command {
    #[serde(rename = "OpenTender")]
    OpenTender {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        item: String,
    },

    #[serde(rename = "SubmitBid")]
    SubmitBid {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        seller: SellerId,
        #[serde(default)]
        description: String,
        price: AmountValue,
    },

    #[serde(rename = "SelectWinner")]
    SelectWinner {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        seller: SellerId,
    },

    #[serde(rename = "RequestBestOffer")]
    RequestBestOffer {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum CommandSuccess {
    #[serde(rename = "TenderOpened")]
    TenderOpened {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        #[serde(rename = "roundId")]
        round_id: RoundId,
        item: String,
    },

    #[serde(rename = "BidAccepted")]
    BidAccepted {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        bid: Bid,
    },

    #[serde(rename = "WinnerAnnounced")]
    WinnerAnnounced {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        #[serde(rename = "roundId")]
        round_id: RoundId,
        winner: SellerId,
    },
}
