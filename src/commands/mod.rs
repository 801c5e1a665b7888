pub mod projects;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell as CompletionShell};

use crate::config::EXEC_NAME;
use crate::state::State;
use crate::CLI;

#[derive(Debug, Parser)]
#[clap(about = "Generate completion scripts for the specified shell")]
pub struct CompletionsOptions {
    #[clap(name = "shell", help = "The shell to print the completion script for")]
    shell: CompletionShell,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Projects(projects::Options),
    Completions(CompletionsOptions),
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    match command {
        Commands::Completions(options) => {
            generate(
                options.shell,
                &mut CLI::command(),
                EXEC_NAME,
                &mut io::stdout().lock(),
            );

            Ok(())
        }

        connected_command => {
            // everything else talks to the cluster
            state.ensure_connected()?;

            match connected_command {
                Commands::Completions(_) => unreachable!(),
                Commands::Projects(options) => projects::handle(&options, state).await,
            }
        }
    }
}
