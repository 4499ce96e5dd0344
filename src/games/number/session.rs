//! Game state for the number game: one session, many rounds.
//!
//! A [`Session`] owns the current round (target and remaining attempts) and
//! the running score. Front ends feed it raw text through
//! [`Session::evaluate_guess`] and answer the "play again?" question through
//! [`Session::resolve`]. Nothing in here blocks or touches the terminal.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::rng::TargetSource;
use crate::games::number::rules::Rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    RoundOver,
    Ended,
}

/// Result of a guess that consumed an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    TooLow,
    TooHigh,
    OutOfAttempts { target: u32 },
}

impl Outcome {
    pub fn ends_round(&self) -> bool {
        matches!(self, Outcome::Correct | Outcome::OutOfAttempts { .. })
    }
}

/// Rejected guesses. None of these consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("'{input}' is not a whole number")]
    InvalidFormat { input: String },
    #[error("{value} is outside {low}..={high}")]
    OutOfRange {
        value: i32,
        low: u32,
        high: u32,
    },
    #[error("the round is over")]
    RoundOver,
}

/// Answer to the "play another round?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continue {
    Yes,
    No,
}

/// What the front end should currently show as the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Prompt { low: u32, high: u32 },
    TooLow,
    TooHigh,
    Correct { reward: u32 },
    InvalidInput,
    OutOfRange { low: u32, high: u32 },
    OutOfAttempts { target: u32 },
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Prompt { low, high } => {
                write!(f, "Guess a number between {low} and {high}:")
            }
            Message::TooLow => f.write_str("Too low! Try again."),
            Message::TooHigh => f.write_str("Too high! Try again."),
            Message::Correct { reward } => write!(f, "Correct! You earned {reward} points."),
            Message::InvalidInput => f.write_str("Please enter a valid number."),
            Message::OutOfRange { low, high } => {
                write!(f, "Enter a number between {low} and {high}.")
            }
            Message::OutOfAttempts { target } => {
                write!(f, "Out of attempts! The number was {target}")
            }
        }
    }
}

/// Totals handed back when the player quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub final_score: u32,
    pub rounds_played: u32,
    pub rounds_won: u32,
}

pub struct Session<S: TargetSource> {
    rules: Rules,
    source: S,
    target: u32,
    attempts_remaining: u32,
    score: u32,
    phase: Phase,
    message: Message,
    rounds_played: u32,
    rounds_won: u32,
}

impl<S: TargetSource> Session<S> {
    /// Create a session with its first round already started.
    pub fn new(rules: Rules, source: S) -> Self {
        let mut session = Self {
            rules,
            source,
            target: rules.low(),
            attempts_remaining: 0,
            score: 0,
            phase: Phase::Ended,
            message: Message::Prompt {
                low: rules.low(),
                high: rules.high(),
            },
            rounds_played: 0,
            rounds_won: 0,
        };
        session.start_round();
        session
    }

    /// Pick a fresh target and refill attempts. Score carries over.
    pub fn start_round(&mut self) {
        self.target = self.source.next_target(self.rules.range());
        self.attempts_remaining = self.rules.max_attempts();
        self.phase = Phase::InProgress;
        self.message = Message::Prompt {
            low: self.rules.low(),
            high: self.rules.high(),
        };
        self.rounds_played += 1;
        info!(round = self.rounds_played, score = self.score, "round started");
        debug!(secret = self.target, "target drawn");
    }

    pub fn evaluate_guess(&mut self, input: &str) -> Result<Outcome, GuessError> {
        if self.phase != Phase::InProgress {
            return Err(GuessError::RoundOver);
        }

        let value: i32 = match input.parse() {
            Ok(v) => v,
            Err(_) => {
                debug!(input, "rejected non-numeric guess");
                self.message = Message::InvalidInput;
                return Err(GuessError::InvalidFormat {
                    input: input.to_string(),
                });
            }
        };

        if !self.rules.contains(i64::from(value)) {
            debug!(value, "rejected out-of-range guess");
            self.message = Message::OutOfRange {
                low: self.rules.low(),
                high: self.rules.high(),
            };
            return Err(GuessError::OutOfRange {
                value,
                low: self.rules.low(),
                high: self.rules.high(),
            });
        }

        // In range, so non-negative.
        let guess = value as u32;
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);

        let mut outcome = match guess.cmp(&self.target) {
            std::cmp::Ordering::Equal => Outcome::Correct,
            std::cmp::Ordering::Less => Outcome::TooLow,
            std::cmp::Ordering::Greater => Outcome::TooHigh,
        };

        if outcome == Outcome::Correct {
            self.score += self.rules.reward();
            self.rounds_won += 1;
        } else if self.attempts_remaining == 0 {
            outcome = Outcome::OutOfAttempts {
                target: self.target,
            };
        }

        self.message = match outcome {
            Outcome::Correct => Message::Correct {
                reward: self.rules.reward(),
            },
            Outcome::TooLow => Message::TooLow,
            Outcome::TooHigh => Message::TooHigh,
            Outcome::OutOfAttempts { target } => Message::OutOfAttempts { target },
        };

        debug!(
            guess,
            ?outcome,
            attempts_remaining = self.attempts_remaining,
            "guess evaluated"
        );

        if outcome.ends_round() {
            self.phase = Phase::RoundOver;
            info!(
                round = self.rounds_played,
                ?outcome,
                score = self.score,
                "round over"
            );
        }

        Ok(outcome)
    }

    /// Feed the player's answer to "play another round?".
    ///
    /// Only meaningful while the round is over; otherwise the phase is
    /// returned untouched.
    pub fn resolve(&mut self, choice: Continue) -> Phase {
        if self.phase == Phase::RoundOver {
            match choice {
                Continue::Yes => self.start_round(),
                Continue::No => self.phase = Phase::Ended,
            }
        }
        self.phase
    }

    pub fn end_session(self) -> SessionSummary {
        let summary = self.summary();
        info!(
            final_score = summary.final_score,
            rounds = summary.rounds_played,
            "session ended"
        );
        summary
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            final_score: self.score,
            rounds_played: self.rounds_played,
            rounds_won: self.rounds_won,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn message(&self) -> Message {
        self.message
    }

    #[cfg(test)]
    pub(crate) fn set_attempts_remaining(&mut self, attempts: u32) {
        self.attempts_remaining = attempts;
    }
}
