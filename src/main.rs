use clap::Parser;
use log::info;
use std::io;
use tender_food::config::{AppConfig, Cli};
use tender_food::console::app::run;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    info!("Starting tender with {} sellers", config.sellers.len());

    let stdin = io::stdin();
    run(config, stdin.lock(), io::stdout())
}
