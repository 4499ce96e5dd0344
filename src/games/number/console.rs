/// Line-based front end, for terminals where the full-screen UI is unwanted
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing::debug;

use crate::core::rng::TargetSource;
use crate::games::number::session::{Continue, Phase, Session, SessionSummary};

/// The three interactions the console loop needs from a user.
pub trait Prompter {
    fn read_guess(&mut self, prompt: &str) -> Result<String>;
    fn confirm(&mut self, question: &str) -> Result<bool>;
    fn say(&mut self, line: &str);
}

/// Prompter backed by dialoguer on the controlling terminal
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn read_guess(&mut self, prompt: &str) -> Result<String> {
        let raw = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(raw)
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let yes = Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(true)
            .interact()?;
        Ok(yes)
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Drive a session until the player declines another round.
pub fn run<S: TargetSource, P: Prompter>(
    mut session: Session<S>,
    prompter: &mut P,
) -> Result<SessionSummary> {
    prompter.say(&session.message().to_string());

    loop {
        match session.phase() {
            Phase::InProgress => {
                let prompt = format!(
                    "Guess (attempts left: {}, score: {})",
                    session.attempts_remaining(),
                    session.score()
                );
                let raw = prompter.read_guess(&prompt)?;
                // Rejections are reported through the session message.
                if let Err(e) = session.evaluate_guess(&raw) {
                    debug!(error = %e, "guess rejected");
                }
                prompter.say(&session.message().to_string());
            }
            Phase::RoundOver => {
                let choice = if prompter.confirm("Play another round?")? {
                    Continue::Yes
                } else {
                    Continue::No
                };
                if session.resolve(choice) == Phase::InProgress {
                    prompter.say(&session.message().to_string());
                }
            }
            Phase::Ended => break,
        }
    }

    Ok(session.end_session())
}
