use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use crate::domain::{Bid, BuyerListener, SellerListener, TenderRound};

/// Lines written by the panels, drained by the console loop after every command.
pub type Outbox = Rc<RefCell<Vec<String>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Want(String),
    Tag(usize),
    Start,
    Bid {
        seller: usize,
        price: String,
        menu: Option<String>,
    },
    List,
    Select(usize),
    Best,
    Help,
    Quit,
}

fn parse_index(text: Option<&str>, what: &str) -> Result<usize, String> {
    let text = text.ok_or_else(|| format!("Missing {}", what))?;
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Invalid {}: {}", what, text)),
    }
}

/// First word of `text` and whatever follows it, ignoring runs of whitespace.
fn next_token(text: &str) -> (Option<&str>, &str) {
    let text = text.trim_start();
    if text.is_empty() {
        return (None, "");
    }
    match text.split_once(char::is_whitespace) {
        Some((token, rest)) => (Some(token), rest),
        None => (Some(text), ""),
    }
}

impl FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "want" => Ok(ConsoleCommand::Want(rest.to_string())),
            "tag" => parse_index(Some(rest).filter(|r| !r.is_empty()), "tag number").map(ConsoleCommand::Tag),
            "start" => Ok(ConsoleCommand::Start),
            "bid" => {
                let (seller, rest) = next_token(rest);
                let seller = parse_index(seller, "seller number")?;
                let (price, rest) = next_token(rest);
                let price = price.ok_or("Missing price")?.to_string();
                let menu = Some(rest.trim()).filter(|m| !m.is_empty()).map(String::from);
                Ok(ConsoleCommand::Bid { seller, price, menu })
            }
            "list" => Ok(ConsoleCommand::List),
            "select" => parse_index(Some(rest).filter(|r| !r.is_empty()), "offer number").map(ConsoleCommand::Select),
            "best" => Ok(ConsoleCommand::Best),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            _ => Err(format!("Unknown command: {}", word)),
        }
    }
}

/// The buyer's request text, built by typing or by clicking quick tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDraft {
    text: String,
}

impl RequestDraft {
    pub fn set(&mut self, text: &str) {
        self.text = text.trim().to_string();
    }

    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim_start_matches("+ ");
        if self.text.is_empty() {
            self.text = tag.to_string();
        } else {
            self.text = format!("{}, {}", self.text, tag);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The buyer's offer list for `round`, cheapest first, followed by the deal if one was made.
pub fn offer_lines(round: &TenderRound) -> Vec<String> {
    let offers = round.current_bids();
    let mut lines = Vec::with_capacity(offers.len() + 1);
    if offers.is_empty() && round.winner().is_none() {
        lines.push("Waiting for offers...".to_string());
    }
    for (i, bid) in offers.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, bid));
    }
    if let Some(winner) = round.winner() {
        lines.push(format!("DEAL CLOSED! Winner: {}", winner));
    }
    lines
}

pub struct ConsoleSeller {
    name: String,
    outbox: Outbox,
}

impl ConsoleSeller {
    pub fn new(name: impl Into<String>, outbox: Outbox) -> Self {
        ConsoleSeller { name: name.into(), outbox }
    }

    fn say(&self, text: &str) {
        self.outbox.borrow_mut().push(format!("[{}] {}", self.name, text));
    }
}

impl SellerListener for ConsoleSeller {
    fn seller_id(&self) -> &str {
        &self.name
    }

    fn on_tender_opened(&mut self, item: &str) {
        self.say(&format!("Order: {}", item));
    }

    fn on_round_closed(&mut self, _winner: &str, won: bool) {
        if won {
            self.say("WINNER!");
        } else {
            self.say("Closed.");
        }
    }
}

pub struct ConsoleBuyer {
    outbox: Outbox,
}

impl ConsoleBuyer {
    pub fn new(outbox: Outbox) -> Self {
        ConsoleBuyer { outbox }
    }

    fn say(&self, text: &str) {
        self.outbox.borrow_mut().push(format!("[Buyer] {}", text));
    }
}

impl BuyerListener for ConsoleBuyer {
    fn on_tender_opened(&mut self, _item: &str) {
        self.say("Waiting for offers...");
    }

    fn on_bids_updated(&mut self, ranked: &[Bid]) {
        for (i, bid) in ranked.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, bid));
        }
        self.say(&format!("{} offers received.", ranked.len()));
    }

    fn on_round_closed(&mut self, winner: &str) {
        self.say(&format!("DEAL CLOSED! Winner: {}", winner));
        self.say(&format!("Order Finalized! Winner: {}", winner));
    }
}
