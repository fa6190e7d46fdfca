//! Main TUI application state and logic

use crate::algorithms::{Order, SearchAlgorithm, SearchOutcome};
use crate::shell::input::{parse_elements, parse_integer, parse_length, InputError};
use crate::shell::{MenuItem, Operation, OperationResult, Report, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{
    render_array_pane, render_menu_pane, render_status_bar, render_trace_pane, settled_positions,
    ArrayRenderData, MenuRenderData, StatusRenderData,
};

/// Delay between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(400);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Array,
    Trace,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Array => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Array,
        }
    }
}

/// What the input line is currently asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Length,
    Elements { length: usize },
    SearchValue(SearchAlgorithm),
}

impl InputMode {
    pub fn prompt(self) -> String {
        match self {
            InputMode::Length => "Enter a positive array size".to_string(),
            InputMode::Elements { length } => {
                format!("Enter {} integers separated by spaces", length)
            }
            InputMode::SearchValue(algorithm) => format!("{}: enter an integer", algorithm),
        }
    }
}

/// The main application state
pub struct App {
    /// The array being worked on, once entered
    pub session: Option<Session>,

    /// Settings applied to every new session
    pub presort: bool,
    pub trace_limit: usize,

    /// Direction used by the next sort
    pub order: Order,

    /// Result of the last operation, with its step history
    pub report: Option<Report>,

    /// Index of the displayed step in the report's trace
    pub position: usize,

    /// Active prompt, if any, and what has been typed so far
    pub input_mode: Option<InputMode>,
    pub input_buffer: String,
    pub input_error: Option<String>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub array_scroll: usize,
    pub trace_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app. With `values` set the menu is ready immediately,
    /// otherwise the user is prompted for an array first.
    pub fn new(values: Option<Vec<i32>>, presort: bool, trace_limit: usize) -> Self {
        let mut app = App {
            session: None,
            presort,
            trace_limit,
            order: Order::Ascending,
            report: None,
            position: 0,
            input_mode: None,
            input_buffer: String::new(),
            input_error: None,
            focused_pane: FocusedPane::Array,
            array_scroll: 0,
            trace_scroll: 0,
            should_quit: false,
            status_message: String::new(),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };

        match values {
            Some(values) => app.load_array(values),
            None => app.begin_input(InputMode::Length),
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.step_forward() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
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

    /// Number of recorded steps in the current report
    pub fn total_steps(&self) -> usize {
        self.report.as_ref().map_or(0, |report| report.trace.len())
    }

    /// Render the UI
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Right column: Menu (top) | Trace (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let report = self.report.as_ref();
        let steps = report.map(|r| r.trace.steps()).unwrap_or(&[]);
        let step = steps.get(self.position);
        let at_end = !steps.is_empty() && self.position + 1 == steps.len();
        let settled = settled_positions(steps, self.position);

        let values: &[i32] = match (step, &self.session) {
            (Some(step), _) => &step.state,
            (None, Some(session)) => session.values(),
            (None, None) => &[],
        };
        let found = match report.map(|r| &r.result) {
            Some(OperationResult::Search(Ok(SearchOutcome::Found(index)))) if at_end => {
                Some(*index)
            }
            _ => None,
        };

        render_array_pane(
            frame,
            columns[0],
            &ArrayRenderData {
                values,
                step,
                settled: &settled,
                found,
            },
            self.focused_pane == FocusedPane::Array,
            &mut self.array_scroll,
        );

        render_menu_pane(
            frame,
            right_rows[0],
            &MenuRenderData {
                values: self.session.as_ref().map(|s| s.values()),
                order: self.order,
                presort: self.presort,
                report,
                input_mode: self.input_mode,
                input_buffer: &self.input_buffer,
                input_error: self.input_error.as_deref(),
            },
        );

        render_trace_pane(
            frame,
            right_rows[1],
            steps,
            self.position,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        render_status_bar(
            frame,
            status_area,
            &StatusRenderData {
                message: &self.status_message,
                current_step: self.position,
                total_steps: steps.len(),
                is_error: report.is_some_and(|r| r.is_error()) || self.input_error.is_some(),
                is_playing: self.is_playing,
                is_input: self.input_mode.is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input_mode.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys pick menu entries directly
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(choice) = c.to_digit(10) {
                    self.select_menu(choice);
                }
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.toggle_order();
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.is_playing = false;
                self.begin_input(InputMode::Length);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = if self.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Cannot step backward: already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.status_message = if self.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Cannot step forward: already at the last step".to_string()
                };
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Array => self.array_scroll = self.array_scroll.saturating_sub(1),
                FocusedPane::Trace => self.trace_scroll = self.trace_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Array => self.array_scroll = self.array_scroll.saturating_add(1),
                FocusedPane::Trace => self.trace_scroll = self.trace_scroll.saturating_add(1),
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                // Jump to end of the trace
                self.is_playing = false;
                self.position = self.total_steps().saturating_sub(1);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Jump to start of the trace
                self.is_playing = false;
                self.position = 0;
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                if self.session.is_some() {
                    self.input_mode = None;
                    self.input_buffer.clear();
                    self.input_error = None;
                    self.status_message = "Input cancelled".to_string();
                } else {
                    // Nothing to fall back to without an array
                    self.should_quit = true;
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == ' ' => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        let Some(mode) = self.input_mode else {
            return;
        };
        let line = std::mem::take(&mut self.input_buffer);

        match mode {
            InputMode::Length => match parse_length(&line) {
                Ok(length) => self.begin_input(InputMode::Elements { length }),
                Err(e) => self.reject_input(e),
            },
            InputMode::Elements { length } => match parse_elements(&line, length) {
                Ok(values) => self.load_array(values),
                Err(e) => self.reject_input(e),
            },
            InputMode::SearchValue(algorithm) => match parse_integer(&line) {
                Ok(value) => {
                    self.input_mode = None;
                    self.input_error = None;
                    self.run_operation(Operation::Search { algorithm, value });
                }
                Err(e) => self.reject_input(e),
            },
        }
    }

    fn begin_input(&mut self, mode: InputMode) {
        self.input_mode = Some(mode);
        self.input_buffer.clear();
        self.input_error = None;
        self.status_message = mode.prompt();
    }

    fn reject_input(&mut self, error: InputError) {
        self.status_message = error.to_string();
        self.input_error = Some(error.to_string());
    }

    fn load_array(&mut self, values: Vec<i32>) {
        self.session = Some(
            Session::new(values)
                .with_presort(self.presort)
                .with_trace_limit(self.trace_limit),
        );
        self.report = None;
        self.position = 0;
        self.array_scroll = 0;
        self.trace_scroll = 0;
        self.input_mode = None;
        self.input_error = None;
        self.status_message = "Ready! Pick an operation (1-5)".to_string();
    }

    fn select_menu(&mut self, choice: u32) {
        match MenuItem::from_choice(choice) {
            Some(MenuItem::Sort(algorithm)) => self.run_operation(Operation::Sort {
                algorithm,
                order: self.order,
            }),
            Some(MenuItem::Search(algorithm)) => {
                if self.session.is_some() {
                    self.begin_input(InputMode::SearchValue(algorithm));
                }
            }
            Some(MenuItem::ToggleOrder) => self.toggle_order(),
            Some(MenuItem::Exit) => self.should_quit = true,
            None => {}
        }
    }

    fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        self.status_message = format!("Sort order is now {}", self.order);
    }

    fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        if self.is_playing {
            self.last_play_time = Instant::now()
                .checked_sub(PLAY_INTERVAL)
                .unwrap_or(Instant::now());
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    fn run_operation(&mut self, operation: Operation) {
        let Some(session) = &self.session else {
            self.status_message = "No array loaded. Press n to enter one".to_string();
            return;
        };

        let report = session.run(operation);
        self.status_message = match report.trace.truncation() {
            Some(e) => format!("{} ({})", report.summary(), e),
            None => report.summary(),
        };
        self.report = Some(report);
        self.position = 0;
        self.array_scroll = 0;
        self.trace_scroll = 0;
        self.is_playing = false;
    }

    /// Advance one step; false when already at the end
    fn step_forward(&mut self) -> bool {
        if self.position + 1 < self.total_steps() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step; false when already at the start
    fn step_backward(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }
}
