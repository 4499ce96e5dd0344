use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::games::number::Rules;

#[derive(Parser, Debug)]
#[command(name = "numterm")]
#[command(about = "Guess the secret number in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed for the target generator, for reproducible sessions
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "numterm=debug")
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Write logs to this file. The full-screen UI logs nowhere without it.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Print the session summary as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Full-screen terminal UI (default)
    Play,
    /// Plain line-by-line prompts
    Console,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEnd {
    Tui,
    Console,
}

/// Settings resolved from the command line
#[derive(Debug, Clone)]
pub struct Config {
    pub front_end: FrontEnd,
    pub rules: Rules,
    pub seed: Option<u64>,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub json: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let front_end = match cli.command {
            Some(Commands::Console) => FrontEnd::Console,
            Some(Commands::Play) | None => FrontEnd::Tui,
        };
        Self {
            front_end,
            rules: Rules::default(),
            seed: cli.seed,
            log_level: cli.log_level,
            log_file: cli.log_file,
            json: cli.json,
        }
    }
}
