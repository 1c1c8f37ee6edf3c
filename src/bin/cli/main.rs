mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use taxis::deck::OrderKey;

#[derive(Parser)]
#[command(
    name = "taxis-cli",
    about = "Prerequisite-aware study ordering for flashcard decks",
    version
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OrderBy {
    /// Ascending card id (creation order)
    Id,
    /// Ascending current due position
    Due,
}

impl From<OrderBy> for OrderKey {
    fn from(by: OrderBy) -> Self {
        match by {
            OrderBy::Id => OrderKey::Id,
            OrderBy::Due => OrderKey::Due,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show cards with their resolved prerequisite cards
    Show {
        /// Deck JSON file
        deck: PathBuf,
    },

    /// Print the computed study order
    Order {
        /// Deck JSON file
        deck: PathBuf,
        /// Natural order used when prerequisites allow a choice
        #[arg(long, value_enum, default_value = "id")]
        by: OrderBy,
    },

    /// Rewrite due positions of new cards to the computed order
    Apply {
        /// Deck JSON file
        deck: PathBuf,
        /// Write here instead of overwriting the deck file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Natural order used when prerequisites allow a choice
        #[arg(long, value_enum, default_value = "id")]
        by: OrderBy,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Show { deck } => commands::show::run(&deck, &cli.format),
        Command::Order { deck, by } => commands::order::run(&deck, by.into(), &cli.format),
        Command::Apply { deck, output, by } => {
            commands::apply::run(&deck, output.as_deref(), by.into())
        }
    }
}
