pub mod cli;
pub mod core;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::rng::{FixedTargets, TargetSource};
pub use crate::games::number::{GuessError, Outcome, Rules, Session};
