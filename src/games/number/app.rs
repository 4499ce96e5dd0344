use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::core::game::{Flow, Game};
use crate::core::renderer::Renderer;
use crate::core::rng::TargetSource;
use crate::games::number::renderer::{NumberRenderer, NumberView};
use crate::games::number::session::{Continue, Phase, Session, SessionSummary};

/// Long enough for any `i32`, sign included.
const MAX_INPUT_LEN: usize = 11;

/// Terminal front end for a [`Session`]: a text field plus the play-again prompt.
pub struct NumberApp<S: TargetSource> {
    session: Session<S>,
    input: String,
}

impl<S: TargetSource> NumberApp<S> {
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            input: String::new(),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn view(&self) -> NumberView<'_> {
        NumberView {
            message: self.session.message(),
            input: &self.input,
            attempts_remaining: self.session.attempts_remaining(),
            score: self.session.score(),
            phase: self.session.phase(),
        }
    }

    fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input);
        // Rejections are reported through the session message.
        if let Err(e) = self.session.evaluate_guess(&raw) {
            debug!(error = %e, "guess rejected");
        }
    }

    fn answer(&mut self, choice: Continue) -> Flow {
        match self.session.resolve(choice) {
            Phase::Ended => Flow::Exit,
            _ => Flow::Continue,
        }
    }
}

impl<S: TargetSource> Game for NumberApp<S> {
    type Output = SessionSummary;

    fn handle_input(&mut self, event: KeyEvent) -> Flow {
        match self.session.phase() {
            Phase::InProgress => {
                match event.code {
                    KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '+' => {
                        if self.input.len() < MAX_INPUT_LEN {
                            self.input.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        self.input.pop();
                    }
                    KeyCode::Enter => self.submit(),
                    _ => {}
                }
                Flow::Continue
            }
            Phase::RoundOver => match event.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.answer(Continue::Yes)
                }
                KeyCode::Char('n') | KeyCode::Char('N') => self.answer(Continue::No),
                _ => Flow::Continue,
            },
            Phase::Ended => Flow::Exit,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        NumberRenderer::render(frame, &self.view());
    }

    fn finish(self) -> SessionSummary {
        self.session.end_session()
    }
}
