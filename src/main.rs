#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use stratus_cli::commands::handle_command;
use stratus_cli::state::{State, StateOptions};
use stratus_cli::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = match State::new(StateOptions {
        override_token: std::env::var("STRATUS_TOKEN").ok(),
    })
    .await
    {
        Ok(state) => state,
        Err(error) => {
            log::error!("{error}");
            std::process::exit(1);
        }
    };

    if let Err(error) = handle_command(cli.commands, state).await {
        log::error!("{error}");
        std::process::exit(1);
    }

    Ok(())
}
