/// Injectable source of round targets
use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can pick the secret number for a new round.
pub trait TargetSource {
    /// Return a value inside `range` (inclusive on both ends).
    fn next_target(&mut self, range: RangeInclusive<u32>) -> u32;
}

impl<R: Rng> TargetSource for R {
    fn next_target(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.random_range(range)
    }
}

/// Seeded generator when a seed is given, OS entropy otherwise.
pub fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Scripted targets, mostly for tests and demos.
///
/// Values are clamped into the requested range. Once the queue runs dry the
/// last handed-out value repeats.
#[derive(Debug, Clone, Default)]
pub struct FixedTargets {
    queue: VecDeque<u32>,
    last: Option<u32>,
}

impl FixedTargets {
    pub fn new(targets: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: targets.into_iter().collect(),
            last: None,
        }
    }
}

impl TargetSource for FixedTargets {
    fn next_target(&mut self, range: RangeInclusive<u32>) -> u32 {
        let raw = self
            .queue
            .pop_front()
            .or(self.last)
            .unwrap_or(*range.start());
        let value = raw.clamp(*range.start(), *range.end());
        self.last = Some(value);
        value
    }
}
