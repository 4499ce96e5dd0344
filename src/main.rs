use anyhow::{Context, Result};
use clap::Parser;
use numterm::cli::{Cli, Config, FrontEnd};
use numterm::core::engine::Engine;
use numterm::core::rng;
use numterm::games::number::{console, NumberApp, Session, SessionSummary};
use numterm::logging;
use tracing::info;

fn main() -> Result<()> {
    let config: Config = Cli::parse().into();
    logging::init(&config)?;

    // Only the seed is configurable, the rules are fixed
    let session = Session::new(config.rules, rng::seeded(config.seed));
    info!(front_end = ?config.front_end, seed = ?config.seed, "starting session");

    let summary = match config.front_end {
        FrontEnd::Tui => {
            let mut terminal = ratatui::init();
            let result = Engine::new(NumberApp::new(session)).run(&mut terminal);
            ratatui::restore();
            result?
        }
        FrontEnd::Console => {
            console::run(session, &mut console::DialoguerPrompter::new())?
        }
    };

    report(&summary, config.json)
}

fn report(summary: &SessionSummary, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(summary).context("failed to encode summary")?;
        println!("{}", out);
    } else {
        println!("Final Score: {}", summary.final_score);
    }
    Ok(())
}
