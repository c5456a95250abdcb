//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::BoardView;
use crate::output::formatters::{gallows, letter_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let board_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Gallows
            Constraint::Min(20),    // Word and attempts
        ])
        .split(chunks[1]);

    render_gallows(f, app, board_chunks[0]);
    render_board(f, app, board_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let art = app
        .board
        .as_ref()
        .map_or_else(|| gallows(0, 1), |b| gallows(b.stage, b.attempt_budget));

    let lines: Vec<Line> = art.lines().map(Line::from).collect();
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Missed letters
        ])
        .split(area);

    let Some(board) = app.board.as_ref() else {
        let waiting = Paragraph::new("Waiting for the game to start").block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(waiting, area);
        return;
    };

    render_word(f, app, board, chunks[0]);
    render_attempts(f, board, chunks[1]);

    let missed = Paragraph::new(letter_list(&board.missed_letters))
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title(" Missed ").borders(Borders::ALL));
    f.render_widget(missed, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, board: &BoardView, area: Rect) {
    // Once the game is lost, reveal the remaining letters in gray
    let target: Vec<char> = app
        .result
        .as_ref()
        .filter(|r| !r.solved)
        .map(|r| r.target.chars().collect())
        .unwrap_or_default();

    let spans: Vec<Span> = board
        .slots
        .iter()
        .enumerate()
        .map(|(i, slot)| match (slot, target.get(i)) {
            (Some(letter), _) => Span::styled(
                format!("{letter} "),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            (None, Some(letter)) => {
                Span::styled(format!("{letter} "), Style::default().fg(Color::DarkGray))
            }
            (None, None) => Span::styled(
                format!("{} ", BoardView::PLACEHOLDER),
                Style::default().fg(Color::Red),
            ),
        })
        .collect();

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(word, area);
}

fn render_attempts(f: &mut Frame, board: &BoardView, area: Rect) {
    let percent = if board.attempt_budget == 0 {
        0
    } else {
        (u64::from(board.remaining_attempts) * 100 / u64::from(board.attempt_budget)).min(100)
            as u16
    };

    let color = match percent {
        0..=33 => Color::Red,
        34..=66 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!(
            "Remaining attempts: {}/{}",
            board.remaining_attempts, board.attempt_budget
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Guess a letter ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver => match app.result.as_ref() {
            Some(result) if result.solved => (" Solved! ", "", Color::Green),
            _ => (" Game Over ", "", Color::Red),
        },
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Guessing => "Enter: Submit | Backspace: Delete | Esc: Quit",
        InputMode::GameOver => "Press any key to exit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, TargetWord};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_revealed_word_and_attempts() {
        let mut game = GameSession::new(TargetWord::new("cat").unwrap(), 6).unwrap();
        game.submit_guess("c").unwrap();
        game.submit_guess("q").unwrap();

        let mut app = App::new();
        app.board = Some(game.render());
        let text = screen_text(&app);

        assert!(text.contains("HANGMAN"));
        assert!(text.contains("C _ _"));
        assert!(text.contains("Remaining attempts: 5/6"));
        assert!(text.contains('Q'));
    }

    #[test]
    fn renders_without_board() {
        let text = screen_text(&App::new());
        assert!(text.contains("Waiting for the game to start"));
        assert!(text.contains("Welcome to the Hangman game!"));
    }

    #[test]
    fn reveals_word_after_loss() {
        let mut game = GameSession::new(TargetWord::new("go").unwrap(), 1).unwrap();
        game.submit_guess("x").unwrap();

        let mut app = App::new();
        app.board = Some(game.render());
        app.finish(false, game.target());
        let text = screen_text(&app);

        assert!(text.contains("G O"));
        assert!(text.contains("Game Over"));
    }

    #[test]
    fn solved_result_does_not_gray_reveal() {
        let mut game = GameSession::new(TargetWord::new("go").unwrap(), 3).unwrap();
        game.submit_guess("g").unwrap();

        // Board from before the winning guess: only the gray reveal could show the O
        let mut app = App::new();
        app.board = Some(game.render());
        app.finish(true, game.target());
        let text = screen_text(&app);

        assert!(text.contains("G _"));
        assert!(text.contains("Solved!"));
    }
}
