/// Core game interface for terminal front ends
use crossterm::event::KeyEvent;

/// What the engine should do after a game handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Main game trait that every terminal game implements
pub trait Game {
    /// Value handed back to the caller once the loop stops
    type Output;

    /// Handle one key press
    fn handle_input(&mut self, event: KeyEvent) -> Flow;

    /// Draw the current state into the Ratatui frame
    fn render(&self, frame: &mut ratatui::Frame);

    /// Consume the game once the loop has stopped
    fn finish(self) -> Self::Output;
}
