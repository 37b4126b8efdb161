use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::game::{DropOutcome, GameEngine, MoveError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: GameConfig,
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let engine = GameEngine::from_config(&config)?;
        Ok(App {
            selected_column: engine.board().width() / 2, // Start in middle
            engine,
            config,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = (c as u8 - b'1') as usize;
                if column < self.engine.board().width() {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    /// Start a new game with the same players and board size
    fn restart(&mut self) {
        match GameEngine::from_config(&self.config) {
            Ok(engine) => {
                self.selected_column = engine.board().width() / 2;
                self.engine = engine;
                self.message = Some("New game started!".to_string());
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Drop the current player's piece and report the result
    fn drop_piece(&mut self, column: usize) {
        self.message = match self.engine.drop_piece(column) {
            Ok(DropOutcome::Placed { .. }) => None,
            Ok(DropOutcome::Win(player)) => Some(format!(
                "The {} player WON! Press 'r' to restart.",
                player
            )),
            Ok(DropOutcome::Tie) => Some("Tie! Game Over. Press 'r' to restart.".to_string()),
            Err(MoveError::ColumnFull) => Some("Column is full!".to_string()),
            Err(MoveError::InvalidColumn) => Some("Invalid column!".to_string()),
            Err(MoveError::GameAlreadyOver) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Seat};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(GameConfig::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = app();
        assert_eq!(app.selected_column, 3);
        assert!(app.message.is_none());
    }

    #[test]
    fn test_arrow_keys_stay_on_board() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_enter_drops_into_selected_column() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.board().get(5, 3), Cell::Occupied(Seat::First));
        assert_eq!(app.engine.current_seat(), Seat::Second);
    }

    #[test]
    fn test_digit_drops_and_selects() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected_column, 0);
        assert_eq!(app.engine.board().get(5, 0), Cell::Occupied(Seat::First));

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message.as_deref(), Some("Invalid column!"));
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = app();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('1'));
        }
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }

    #[test]
    fn test_win_message_then_restart() {
        let mut app = app();
        for key in ['4', '7', '4', '7', '4', '7', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(
            app.message.as_deref(),
            Some("The red player WON! Press 'r' to restart.")
        );

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.engine.is_over());
        assert_eq!(app.engine.move_count(), 0);
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_current_player() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Current Player: red"));
        assert!(text.contains("Connect Four"));
    }
}
