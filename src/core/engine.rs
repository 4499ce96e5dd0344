use crate::core::game::{Flow, Game};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Draw, wait for a key, dispatch it, until the game or Esc stops the loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<G::Output>
    where
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        debug!("engine loop started");
        loop {
            terminal
                .draw(|f| self.game.render(f))
                .context("failed to draw frame")?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if self.dispatch(key) == Flow::Exit {
                    break;
                }
            }
        }
        debug!("engine loop stopped");
        Ok(self.finish())
    }

    /// Route one key event. Esc always exits; releases and repeats are ignored.
    pub fn dispatch(&mut self, key: KeyEvent) -> Flow {
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        if key.code == KeyCode::Esc {
            return Flow::Exit;
        }
        self.game.handle_input(key)
    }

    pub fn finish(self) -> G::Output {
        self.game.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::FixedTargets;
    use crate::games::number::{NumberApp, Phase, Rules, Session, SessionSummary};
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn engine(targets: &[u32]) -> Engine<NumberApp<FixedTargets>> {
        let session = Session::new(Rules::default(), FixedTargets::new(targets.iter().copied()));
        Engine::new(NumberApp::new(session))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn enter_guess(engine: &mut Engine<NumberApp<FixedTargets>>, guess: &str) {
        for c in guess.chars() {
            assert_eq!(engine.dispatch(press(KeyCode::Char(c))), Flow::Continue);
        }
        engine.dispatch(press(KeyCode::Enter));
    }

    #[test]
    fn esc_mid_round_ends_with_current_summary() {
        let mut engine = engine(&[42]);
        enter_guess(&mut engine, "10");
        assert_eq!(engine.dispatch(press(KeyCode::Esc)), Flow::Exit);
        assert_eq!(
            engine.finish(),
            SessionSummary {
                final_score: 0,
                rounds_played: 1,
                rounds_won: 0
            }
        );
    }

    #[test]
    fn esc_at_play_again_prompt_ends_session() {
        let mut engine = engine(&[42, 7]);
        enter_guess(&mut engine, "42");
        assert_eq!(engine.game.session().phase(), Phase::RoundOver);
        assert_eq!(engine.dispatch(press(KeyCode::Esc)), Flow::Exit);
        assert_eq!(
            engine.finish(),
            SessionSummary {
                final_score: 10,
                rounds_played: 1,
                rounds_won: 1
            }
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut engine = engine(&[42]);
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(engine.dispatch(release), Flow::Continue);
        assert_eq!(engine.game.input(), "");

        let esc_release = KeyEvent::new_with_kind(
            KeyCode::Esc,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(engine.dispatch(esc_release), Flow::Continue);
    }

    #[test]
    fn declining_another_round_exits() {
        let mut engine = engine(&[42]);
        enter_guess(&mut engine, "42");
        assert_eq!(engine.dispatch(press(KeyCode::Char('n'))), Flow::Exit);
        assert_eq!(engine.finish().final_score, 10);
    }
}
