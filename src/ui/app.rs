//! Main TUI application state and logic

use crate::config::Config;
use crate::cursor::{CursorError, Session, Step};
use crate::render;
use crate::ui::input::InputField;
use crate::ui::panes::{self, StatusRenderData};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Array,
}

impl FocusedPane {
    /// Toggle between the two panes
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Array,
            FocusedPane::Array => FocusedPane::Input,
        }
    }
}

/// The main application state
pub struct App {
    /// The current run and cursor
    pub session: Session,

    /// Text typed into the numbers field
    pub input: InputField,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub is_error: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between auto-play steps
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app, pre-filling the input from the config
    pub fn new(config: &Config) -> Self {
        App {
            session: Session::new(),
            input: InputField::new(config.initial_input.clone().unwrap_or_default()),
            focused_pane: FocusedPane::Input,
            should_quit: false,
            status_message: String::from("Enter numbers and press Enter to sort"),
            is_error: false,
            is_playing: false,
            play_interval: config.play_interval,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                self.play_tick();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let header = Line::from(vec![
            Span::styled(
                " Bubble Sort Visualizer ",
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " enter numbers, sort, then step one comparison at a time",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        panes::render_input_pane(
            frame,
            chunks[1],
            &self.input,
            self.focused_pane == FocusedPane::Input,
        );

        let current = self.session.current();
        panes::render_array_pane(
            frame,
            chunks[2],
            current.map(|step| step.snapshot),
            self.focused_pane == FocusedPane::Array,
        );

        let position = current
            .zip(self.session.snapshots())
            .map(|(step, seq)| (step.index, seq.len()));
        panes::render_status_bar(
            frame,
            chunks[3],
            &StatusRenderData {
                message: &self.status_message,
                position,
                is_error: self.is_error,
                is_playing: self.is_playing,
                can_advance: self.session.can_advance(),
                input_focused: self.focused_pane == FocusedPane::Input,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
                return;
            }
            _ => {}
        }

        match self.focused_pane {
            FocusedPane::Input => self.handle_input_key(key),
            FocusedPane::Array => self.handle_array_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.sort(),
            KeyCode::Esc => self.focused_pane = FocusedPane::Array,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear()
            }
            KeyCode::Char(c) => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }

    fn handle_array_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if !self.session.can_advance() {
                        break;
                    }
                    if self.session.next_step().is_ok() {
                        stepped += 1;
                    }
                }
                self.set_status(format!("Stepped forward {} step(s)", stepped));
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.is_playing = false;
                self.next_step();
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.is_playing = false;
                let result = self.session.previous_step().map(describe_step);
                self.show_step(result);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                // Jump to end of the run
                self.is_playing = false;
                if self.session.jump_to_end().is_ok() {
                    self.set_status("Jumped to end".to_string());
                } else {
                    self.set_error(CursorError::NotInitialized.to_string());
                }
            }
            KeyCode::Backspace => {
                // Jump to start of the run
                self.is_playing = false;
                if self.session.rewind().is_ok() {
                    self.set_status("Jumped to start".to_string());
                } else {
                    self.set_error(CursorError::NotInitialized.to_string());
                }
            }
            _ => {}
        }
    }

    /// The "Sort" action: parse the input and start a new run
    pub fn sort(&mut self) {
        self.is_playing = false;
        let outcome = self
            .session
            .submit(self.input.text())
            .map(|step| step.can_advance);

        match outcome {
            Ok(can_advance) => {
                let total = self.session.snapshots().map_or(0, |seq| seq.len());
                info!(snapshots = total, "sorted input");
                self.focused_pane = FocusedPane::Array;
                if can_advance {
                    self.set_status(format!(
                        "Sorted into {} steps, press → for the next one",
                        total
                    ));
                } else {
                    self.set_status("Nothing to sort: the list is already final".to_string());
                }
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// The "Next Step" action
    pub fn next_step(&mut self) {
        let result = self.session.next_step().map(describe_step);
        self.show_step(result);
    }

    fn play_tick(&mut self) {
        if self.session.can_advance() {
            self.next_step();
            self.last_play_time = Instant::now();
        } else {
            self.is_playing = false;
            self.set_status("Playback complete".to_string());
        }
    }

    fn toggle_play(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.set_status("Paused".to_string());
        } else if self.session.can_advance() {
            self.is_playing = true;
            self.last_play_time = Instant::now()
                .checked_sub(self.play_interval)
                .unwrap_or(Instant::now());
            self.set_status("Playing...".to_string());
        } else if self.session.current().is_none() {
            self.set_error(CursorError::NotInitialized.to_string());
        } else {
            self.set_status("Already at the end".to_string());
        }
    }

    fn show_step(&mut self, result: Result<(String, bool), CursorError>) {
        match result {
            Ok((description, can_advance)) => {
                debug!(%description, "stepped");
                if can_advance {
                    self.set_status(description);
                } else {
                    self.is_playing = false;
                    self.set_status(format!("{} (sorting complete)", description));
                }
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.is_error = false;
    }

    fn set_error(&mut self, message: String) {
        self.is_playing = false;
        self.status_message = format!("Error: {}", message);
        self.is_error = true;
    }
}

fn describe_step(step: Step<'_>) -> (String, bool) {
    (render::describe(step.snapshot), step.can_advance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SessionState;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(200, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_sort_then_step() {
        let mut app = App::new(&Config::default());
        type_text(&mut app, "5, 3, 8, 1");
        press(&mut app, KeyCode::Enter);

        assert!(!app.is_error);
        assert_eq!(app.focused_pane, FocusedPane::Array);
        assert_eq!(app.session.state(), SessionState::Ready { index: 0 });

        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.state(), SessionState::Ready { index: 1 });
        assert_eq!(app.status_message, "Comparing a[1]=5 and a[2]=8");
    }

    #[test]
    fn test_invalid_input_shows_error() {
        let mut app = App::new(&Config::default());
        type_text(&mut app, "1.5, 2");
        press(&mut app, KeyCode::Enter);

        assert!(app.is_error);
        assert_eq!(app.status_message, "Error: invalid integer: '1.5'");
        assert_eq!(app.focused_pane, FocusedPane::Input);
        assert!(!app.session.can_advance());
    }

    #[test]
    fn test_ctrl_u_clears_input() {
        let mut app = App::new(&Config::default());
        type_text(&mut app, "1.5, 2");
        app.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));

        assert!(app.input.is_empty());
        assert_eq!(app.input.cursor(), 0);

        type_text(&mut app, "2, 1");
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_error);
    }

    #[test]
    fn test_next_step_before_sort() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);

        assert!(app.is_error);
        assert_eq!(app.status_message, "Error: Initialize first.");
        assert_eq!(app.session.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_failed_sort_disables_stepping() {
        let config = Config {
            initial_input: Some("3, 2, 1".to_string()),
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.sort();
        assert!(app.session.can_advance());

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, ",");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message, "Error: empty element");
        assert!(!app.session.can_advance());
    }

    #[test]
    fn test_digits_step_many_and_stop_at_end() {
        let config = Config {
            initial_input: Some("2, 1".to_string()),
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.sort();
        press(&mut app, KeyCode::Char('9'));

        let total = app.session.snapshots().unwrap().len();
        assert_eq!(app.session.state(), SessionState::Exhausted { index: total - 1 });
        assert_eq!(app.status_message, format!("Stepped forward {} step(s)", total - 1));
    }

    #[test]
    fn test_jump_and_rewind() {
        let config = Config {
            initial_input: Some("4, 3, 2, 1".to_string()),
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.sort();

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.session.state(), SessionState::Exhausted { .. }));
        assert_eq!(app.session.current().unwrap().snapshot.state, vec![1, 2, 3, 4]);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.state(), SessionState::Ready { index: 0 });
    }

    #[test]
    fn test_play_runs_to_completion() {
        let config = Config {
            initial_input: Some("2, 1".to_string()),
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.sort();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_playing);

        for _ in 0..10 {
            app.play_tick();
        }
        assert!(!app.is_playing);
        assert!(!app.session.can_advance());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&Config::default());
        // 'q' is just text while typing
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input.text(), "q");

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_run() {
        let config = Config {
            initial_input: Some("5, 3, 8, 1".to_string()),
            ..Config::default()
        };
        let mut app = App::new(&config);

        let before = screen(&mut app);
        assert!(before.contains("Visualization appears here."));
        assert!(before.contains("Step -/-"));

        app.sort();
        let after = screen(&mut app);
        assert!(after.contains("Step 1/10"));
        assert!(after.contains("Comparing a[0]=5 and a[1]=3"));
        assert!(after.contains("START"));
    }
}
