use crate::core::renderer::Renderer;
use crate::games::number::session::{Message, Phase};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Everything the screen shows, and nothing else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberView<'a> {
    pub message: Message,
    pub input: &'a str,
    pub attempts_remaining: u32,
    pub score: u32,
    pub phase: Phase,
}

#[derive(Debug)]
pub struct NumberRenderer;

impl<'a> Renderer<NumberView<'a>> for NumberRenderer {
    fn render(frame: &mut Frame, view: &NumberView<'a>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Message
                Constraint::Length(3), // Input
                Constraint::Length(3), // Attempts / score
                Constraint::Min(0),
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new("NUMBER GAME")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let message = Paragraph::new(view.message.to_string())
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(message_color(view.message)))
            .alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);

        let (input_title, input_text) = match view.phase {
            Phase::InProgress => ("Your guess", view.input.to_string()),
            Phase::RoundOver => ("Play another round?", "[y] yes   [n] no".to_string()),
            Phase::Ended => ("Session over", String::new()),
        };
        let input = Paragraph::new(input_text)
            .block(Block::default().borders(Borders::ALL).title(input_title))
            .alignment(Alignment::Center);
        frame.render_widget(input, chunks[2]);

        let stats = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        frame.render_widget(
            Paragraph::new(format!("Attempts left: {}", view.attempts_remaining))
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::LightRed))
                .alignment(Alignment::Center),
            stats[0],
        );
        frame.render_widget(
            Paragraph::new(format!("Score: {}", view.score))
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Green))
                .alignment(Alignment::Center),
            stats[1],
        );

        frame.render_widget(
            Paragraph::new("Enter to submit, Backspace to erase, Esc to quit")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            chunks[5],
        );
    }
}

fn message_color(message: Message) -> Color {
    match message {
        Message::Prompt { .. } => Color::Blue,
        Message::Correct { .. } => Color::Green,
        Message::TooLow | Message::TooHigh | Message::OutOfAttempts { .. } => Color::LightRed,
        Message::InvalidInput | Message::OutOfRange { .. } => Color::Red,
    }
}
