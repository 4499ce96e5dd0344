use std::ops::RangeInclusive;

use thiserror::Error;

pub const LOWEST_GUESS: u32 = 1;
pub const HIGHEST_GUESS: u32 = 100;
pub const MAX_ATTEMPTS: u32 = 5;
pub const CORRECT_REWARD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("empty guess range {low}..={high}")]
    EmptyRange { low: u32, high: u32 },
    #[error("a round needs at least one attempt")]
    NoAttempts,
}

/// Fixed parameters of a round. Always a non-empty range and at least one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    low: u32,
    high: u32,
    max_attempts: u32,
    reward: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            low: LOWEST_GUESS,
            high: HIGHEST_GUESS,
            max_attempts: MAX_ATTEMPTS,
            reward: CORRECT_REWARD,
        }
    }
}

impl Rules {
    pub fn new(low: u32, high: u32, max_attempts: u32, reward: u32) -> Result<Self, RulesError> {
        if low > high {
            return Err(RulesError::EmptyRange { low, high });
        }
        if max_attempts == 0 {
            return Err(RulesError::NoAttempts);
        }
        Ok(Self {
            low,
            high,
            max_attempts,
            reward,
        })
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn reward(&self) -> u32 {
        self.reward
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        self.low..=self.high
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.low) && value <= i64::from(self.high)
    }
}
