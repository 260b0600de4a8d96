use log::{debug, info};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::config::AppConfig;
use crate::domain::{Bid, Errors, Mediator};
use super::types::{offer_lines, ConsoleBuyer, ConsoleCommand, ConsoleSeller, Outbox, RequestDraft};

const HELP: &str = "\
Commands:
  want <text>              set the request text
  tag <n>                  add quick tag n to the request
  start                    broadcast the request to all sellers
  bid <seller#> <price> [menu]
                           submit a bid as seller n
  list                     show offers, cheapest first
  select <n>               accept offer n
  best                     accept the cheapest offer
  help                     show this text
  quit                     leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Manual(Bid),
    Best(Bid),
}

/// Buyer and seller panels on one console, wired through a single mediator.
pub struct ConsoleApp {
    mediator: Mediator,
    config: AppConfig,
    draft: RequestDraft,
    outbox: Outbox,
    pending: Option<Pending>,
}

impl ConsoleApp {
    pub fn new(config: AppConfig) -> Self {
        let outbox: Outbox = Rc::new(RefCell::new(Vec::new()));
        let mut mediator = Mediator::new();
        mediator.register_buyer(Box::new(ConsoleBuyer::new(outbox.clone())));
        for name in &config.sellers {
            mediator.add_seller(Box::new(ConsoleSeller::new(name.clone(), outbox.clone())));
        }

        ConsoleApp {
            mediator,
            config,
            draft: RequestDraft::default(),
            outbox,
            pending: None,
        }
    }

    pub fn mediator(&self) -> &Mediator {
        &self.mediator
    }

    pub fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    fn say(&self, text: impl Into<String>) {
        self.outbox.borrow_mut().push(text.into());
    }

    /// Lines produced since the last drain.
    pub fn drain(&self) -> Vec<String> {
        self.outbox.borrow_mut().drain(..).collect()
    }

    pub fn banner(&self) {
        self.say("Tender Food - Real-time Auction");
        for (i, seller) in self.config.sellers.iter().enumerate() {
            self.say(format!("  seller {}: {}", i + 1, seller));
        }
        let tags: Vec<String> = self.config.quick_tags.iter()
            .enumerate()
            .map(|(i, tag)| format!("{}:+ {}", i + 1, tag))
            .collect();
        self.say(format!("Quick Add: {}", tags.join("  ")));
        self.say("Type 'help' for commands.");
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        if let Some(pending) = self.pending.take() {
            self.confirm(pending, line);
            return Flow::Continue;
        }
        if line.trim().is_empty() {
            return Flow::Continue;
        }

        match line.parse::<ConsoleCommand>() {
            Ok(command) => self.execute(command),
            Err(message) => {
                self.say(message);
                Flow::Continue
            }
        }
    }

    fn execute(&mut self, command: ConsoleCommand) -> Flow {
        debug!("Console command: {:?}", command);
        match command {
            ConsoleCommand::Want(text) => {
                self.draft.set(&text);
                self.say(format!("I want: {}", self.draft.text()));
            }
            ConsoleCommand::Tag(n) => match self.config.quick_tags.get(n - 1) {
                Some(tag) => {
                    let tag = tag.clone();
                    self.draft.add_tag(&tag);
                    self.say(format!("I want: {}", self.draft.text()));
                }
                None => self.say(format!("No quick tag {}", n)),
            },
            ConsoleCommand::Start => self.start_tender(),
            ConsoleCommand::Bid { seller, price, menu } => self.submit_bid(seller, &price, menu),
            ConsoleCommand::List => self.list_offers(),
            ConsoleCommand::Select(n) => self.select_offer(n),
            ConsoleCommand::Best => self.best_offer(),
            ConsoleCommand::Help => self.say(HELP),
            ConsoleCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn start_tender(&mut self) {
        if self.draft.is_empty() {
            self.say("Tell the sellers what you want first.");
            return;
        }
        self.say("[Buyer] Broadcasting... Waiting for sellers...");
        let item = self.draft.text().to_string();
        self.mediator.open_tender(item);
    }

    fn submit_bid(&mut self, seller: usize, price: &str, menu: Option<String>) {
        let Some(name) = self.config.sellers.get(seller - 1).cloned() else {
            self.say(format!("No seller {}", seller));
            return;
        };
        // The menu field starts out filled with the buyer's request.
        let menu = menu
            .or_else(|| self.mediator.round().map(|r| r.item().to_string()))
            .unwrap_or_default();

        match self.mediator.place_bid(&name, &menu, price) {
            Ok(_) => self.say(format!("[{}] Bid Sent!", name)),
            Err(Errors::InvalidPrice(_)) => self.say(format!("[{}] Invalid Price!", name)),
            Err(Errors::NoTender) => self.say(format!("[{}] Waiting...", name)),
            Err(err) => self.say(format!("[{}] {}", name, err)),
        }
    }

    fn list_offers(&self) {
        let Some(round) = self.mediator.round() else {
            self.say("No tender yet.");
            return;
        };
        for line in offer_lines(round) {
            self.say(line);
        }
    }

    fn open_offers(&self) -> Option<Vec<Bid>> {
        match self.mediator.round() {
            None => {
                self.say("No tender yet.");
                None
            }
            Some(round) if !round.is_open() => {
                self.say("Tender closed.");
                None
            }
            Some(round) => Some(round.current_bids()),
        }
    }

    fn select_offer(&mut self, n: usize) {
        let Some(offers) = self.open_offers() else { return };
        match offers.get(n - 1) {
            Some(bid) => self.ask(Pending::Manual(bid.clone())),
            None => self.say(format!("No offer {}", n)),
        }
    }

    fn best_offer(&mut self) {
        if self.open_offers().is_none() {
            return;
        }
        match self.mediator.best_offer() {
            Some(bid) => self.ask(Pending::Best(bid)),
            None => self.say(Errors::NoOffers.to_string()),
        }
    }

    fn ask(&mut self, pending: Pending) {
        let bid = match &pending {
            Pending::Manual(bid) | Pending::Best(bid) => bid,
        };
        self.say("Confirm Transaction");
        self.say(format!("Accept Best Offer from: {}", bid.seller()));
        self.say(format!("Price: Rp {}", bid.price().value()));
        self.say("(y/n)");
        self.pending = Some(pending);
    }

    fn confirm(&mut self, pending: Pending, answer: &str) {
        let answer = answer.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            self.say("Cancelled.");
            return;
        }
        let result = match pending {
            Pending::Manual(bid) => self.mediator.select_winner(bid.seller()),
            Pending::Best(_) => self.mediator.request_best_offer().map(|_| ()),
        };
        if let Err(err) = result {
            self.say(err.to_string());
        }
    }
}

/// Reads commands line by line until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(config: AppConfig, input: R, mut output: W) -> io::Result<()> {
    let mut app = ConsoleApp::new(config);
    app.banner();
    for line in app.drain() {
        writeln!(output, "{}", line)?;
    }

    for line in input.lines() {
        let line = line?;
        let flow = app.handle_line(&line);
        for out in app.drain() {
            writeln!(output, "{}", out)?;
        }
        output.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }

    info!("Console closed");
    Ok(())
}
