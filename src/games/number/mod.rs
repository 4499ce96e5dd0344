/// Number guessing game
pub mod app;
pub mod console;
pub mod renderer;
pub mod rules;
pub mod session;

pub use app::NumberApp;
pub use renderer::{NumberRenderer, NumberView};
pub use rules::Rules;
pub use session::{Continue, GuessError, Message, Outcome, Phase, Session, SessionSummary};
