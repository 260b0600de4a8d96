#![allow(dead_code)]
use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use tender_food::domain::{Bid, BuyerListener, Mediator, SellerListener};
use tender_food::money::Price;
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn sample_item() -> String {
    "Fried Rice".to_string()
}

pub fn sample_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
}

pub fn seller_a() -> String {
    "SellerA".to_string()
}

pub fn seller_b() -> String {
    "SellerB".to_string()
}

pub fn seller_c() -> String {
    "SellerC".to_string()
}

pub fn rp(value: i64) -> Price {
    Price::try_from(value).unwrap()
}

pub fn bid_a() -> Bid {
    Bid::new(seller_a(), "Nasi Goreng", rp(20000))
}

pub fn bid_b() -> Bid {
    Bid::new(seller_b(), "Nasi Goreng Kampung", rp(15000))
}

pub fn bid_c() -> Bid {
    Bid::new(seller_c(), "Nasi Goreng Seafood", rp(18000))
}

pub type Log = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct RecordingSeller {
    pub id: String,
    pub log: Log,
}

impl SellerListener for RecordingSeller {
    fn seller_id(&self) -> &str {
        &self.id
    }

    fn on_tender_opened(&mut self, item: &str) {
        self.log.borrow_mut().push(format!("{} opened {}", self.id, item));
    }

    fn on_round_closed(&mut self, winner: &str, won: bool) {
        let outcome = if won { "won" } else { "lost" };
        self.log.borrow_mut().push(format!("{} {} to {}", self.id, outcome, winner));
    }
}

pub struct RecordingBuyer {
    pub log: Log,
}

impl BuyerListener for RecordingBuyer {
    fn on_tender_opened(&mut self, item: &str) {
        self.log.borrow_mut().push(format!("buyer opened {}", item));
    }

    fn on_bids_updated(&mut self, ranked: &[Bid]) {
        let prices: Vec<String> = ranked.iter().map(|b| b.price().value().to_string()).collect();
        self.log.borrow_mut().push(format!("buyer bids {}", prices.join(",")));
    }

    fn on_round_closed(&mut self, winner: &str) {
        self.log.borrow_mut().push(format!("buyer closed {}", winner));
    }
}

/// A mediator with a recording buyer and sellers A, B and C sharing one log.
pub fn sample_mediator() -> (Mediator, Log) {
    let log = new_log();
    let mut mediator = Mediator::new();
    mediator.register_buyer(Box::new(RecordingBuyer { log: log.clone() }));
    for id in [seller_a(), seller_b(), seller_c()] {
        mediator.add_seller(Box::new(RecordingSeller { id, log: log.clone() }));
    }
    (mediator, log)
}
