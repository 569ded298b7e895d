//! Main TUI application state and logic

use crate::algorithms::traversal::Discipline;
use crate::algorithms::{AlgorithmKind, Family, Outcome};
use crate::engine::{RunState, Session, SpeedLevel, StartOutcome};
use crate::model::sequence::format_value;
use crate::model::{Graph, NodeId};
use crate::snapshot::{Published, Role, SearchStatus, Snapshot};
use crate::ui::panes::{
    render_array_pane, render_graph_pane, render_history_pane, render_merge_pane,
    render_status_bar, ArrayRenderData, GraphRenderData, StatusRenderData,
};
use crate::ui::sink::SinkEvent;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

/// A message that disappears on its own
#[derive(Debug, Clone)]
pub struct Transient {
    pub text: String,
    pub until: Instant,
}

/// The main application state
pub struct App {
    /// The screen being driven
    pub session: Session,

    /// Events published by the session's runs
    events: Receiver<SinkEvent>,

    /// Latest snapshot of the current run
    pub frame: Option<Published>,

    /// Result of the last completed run
    pub outcome: Option<Outcome>,

    /// Error shown in the status bar until it expires
    pub transient: Option<Transient>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around `session`, reading run events from `events`
    pub fn new(session: Session, events: Receiver<SinkEvent>) -> Self {
        App {
            session,
            events,
            frame: None,
            outcome: None,
            transient: None,
            should_quit: false,
            status_message: String::from("Ready! Press Enter to start"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.drain_events();
            self.expire_transient(Instant::now());

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Use poll with timeout so snapshots keep flowing while no key is pressed
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.session.reset();
        self.session.join();
        Ok(())
    }

    /// Apply every event the sink has queued since the last frame
    pub fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.apply_event(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn apply_event(&mut self, event: SinkEvent) {
        match event {
            SinkEvent::Snapshot(published) => {
                // snapshots from a cancelled run may still be queued
                if published.run == self.session.current_run() {
                    self.frame = Some(published);
                }
            }
            SinkEvent::RunState(state) => {
                self.status_message = match state {
                    RunState::Running => "Running...".to_string(),
                    RunState::Paused => "Paused".to_string(),
                    RunState::Completed => self
                        .outcome
                        .as_ref()
                        .map_or_else(|| "Done".to_string(), Outcome::to_string),
                    RunState::Cancelled => "Cancelled".to_string(),
                    RunState::Idle => "Ready!".to_string(),
                };
            }
            SinkEvent::TransientError { message, duration } => {
                self.transient = Some(Transient {
                    text: message,
                    until: Instant::now() + duration,
                });
            }
            SinkEvent::Outcome(outcome) => {
                self.status_message = outcome.to_string();
                self.outcome = Some(outcome);
            }
        }
    }

    /// Drop the transient message once its window has passed
    pub fn expire_transient(&mut self, now: Instant) {
        if self.transient.as_ref().is_some_and(|t| now >= t.until) {
            self.transient = None;
        }
    }

    fn clear_view(&mut self) {
        self.frame = None;
        self.outcome = None;
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Visualization, a detail strip, then the status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(size);

        match self.session.kind().family() {
            Family::Sort => self.render_sort(frame, main_chunks[0]),
            Family::Search => self.render_search(frame, main_chunks[0]),
            Family::Traversal => self.render_traversal(frame, main_chunks[0]),
            Family::Replay => self.render_replay(frame, main_chunks[0]),
        }

        self.render_details(frame, main_chunks[1]);

        let step = match self.session.merge_log() {
            Some(log) => Some((log.position(), Some(log.len()))),
            None => self.frame.as_ref().map(|p| (p.index, None)),
        };
        let (message, is_error) = match &self.transient {
            Some(t) => (t.text.as_str(), true),
            None => (self.status_message.as_str(), false),
        };
        render_status_bar(
            frame,
            main_chunks[2],
            StatusRenderData {
                message,
                step,
                state: self.session.state(),
                speed: self.session.speed(),
                is_error,
                is_replay: self.session.kind().family() == Family::Replay,
            },
        );
    }

    fn render_sort(&self, frame: &mut Frame, area: Rect) {
        let title = self.session.kind().name();
        let data = match self.frame.as_ref().map(|p| &p.snapshot) {
            Some(Snapshot::Sort(sf)) => ArrayRenderData {
                title,
                values: &sf.values,
                roles: (0..sf.values.len()).map(|i| sf.role_of(i)).collect(),
                bounds: None,
            },
            _ => idle_array(title, self.session.values()),
        };
        render_array_pane(frame, area, data);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let title = self.session.kind().name();
        let search = match self.frame.as_ref().map(|p| &p.snapshot) {
            Some(Snapshot::Search(sf)) => Some(sf),
            _ => None,
        };

        let data = match search {
            Some(sf) => {
                let mut roles = vec![None; sf.values.len()];
                if let Some(probe) = sf.probe {
                    if let Some(slot) = roles.get_mut(probe) {
                        *slot = Some(Role::Compare);
                    }
                }
                if let SearchStatus::Found(index) = sf.status {
                    if let Some(slot) = roles.get_mut(index) {
                        *slot = Some(Role::Found);
                    }
                }
                ArrayRenderData {
                    title,
                    values: &sf.values,
                    roles,
                    bounds: sf.bounds,
                }
            }
            None => idle_array(title, self.session.values()),
        };
        render_array_pane(frame, columns[0], data);
        render_history_pane(frame, columns[1], search, self.session.search_key());
    }

    fn render_traversal(&self, frame: &mut Frame, area: Rect) {
        let traversal = match self.frame.as_ref().map(|p| &p.snapshot) {
            Some(Snapshot::Traversal(tf)) => Some(tf),
            _ => None,
        };
        let discipline = if self.session.kind() == AlgorithmKind::Dfs {
            Discipline::Stack
        } else {
            Discipline::Queue
        };
        render_graph_pane(
            frame,
            area,
            GraphRenderData {
                graph: self.session.graph(),
                frame: traversal,
                discipline,
                start: self.session.start_node(),
                target: self.session.target_node(),
            },
        );
    }

    fn render_replay(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let title = self.session.kind().name();
        let values = self.session.values();
        let data = match self.session.merge_step() {
            Some(step) => ArrayRenderData {
                title,
                values,
                roles: (0..values.len())
                    .map(|i| (i >= step.range.0 && i <= step.range.1).then_some(Role::Active))
                    .collect(),
                bounds: None,
            },
            None => idle_array(title, values),
        };
        render_array_pane(frame, rows[0], data);
        render_merge_pane(frame, rows[1], self.session.merge_log());
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let label = Style::default().fg(DEFAULT_THEME.comment);
        let strong = Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD);

        let note = match (self.session.merge_step(), &self.frame) {
            (Some(step), _) => step.action.clone(),
            (None, Some(published)) => published.snapshot.note().to_string(),
            (None, None) => String::new(),
        };

        let mut params = vec![
            Span::styled("Size: ", label),
            Span::styled(self.session.size().to_string(), strong),
            Span::styled("  Speed: ", label),
            Span::styled(self.session.speed().to_string(), strong),
        ];
        match self.session.kind().family() {
            Family::Search => {
                params.push(Span::styled("  Key: ", label));
                params.push(Span::styled(
                    self.session
                        .search_key()
                        .map_or_else(|| "-".to_string(), format_value),
                    strong,
                ));
            }
            Family::Traversal => {
                let name = |node: Option<NodeId>| node.map_or_else(|| "-".to_string(), |n| n.to_string());
                params.push(Span::styled("  Start: ", label));
                params.push(Span::styled(name(self.session.start_node()), strong));
                params.push(Span::styled("  Target: ", label));
                params.push(Span::styled(name(self.session.target_node()), strong));
            }
            Family::Sort | Family::Replay => {}
        }
        if let Some(Snapshot::Sort(sf)) = self.frame.as_ref().map(|p| &p.snapshot) {
            params.push(Span::styled("  Swaps: ", label));
            params.push(Span::styled(sf.swaps.to_string(), strong));
        }

        let mut lines = vec![Line::from(params), Line::from(Span::styled(note, strong))];
        if let Some(outcome) = &self.outcome {
            lines.push(Line::from(Span::styled(
                outcome.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        );
        frame.render_widget(paragraph, area);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.start(),
            KeyCode::Char(' ') => {
                // Debounce key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    match self.session.toggle_pause() {
                        Some(state) => debug!("Toggled pause, now {}", state),
                        None => self.status_message = "Nothing to pause".to_string(),
                    }
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.session.randomize() {
                    self.clear_view();
                    self.status_message = "New input".to_string();
                } else {
                    self.status_message = "Cannot change input while running".to_string();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.resize(self.session.size() + 1);
            }
            KeyCode::Char('-') => {
                self.resize(self.session.size().saturating_sub(1));
            }
            KeyCode::Char('1') => self.speed(SpeedLevel::Fast),
            KeyCode::Char('2') => self.speed(SpeedLevel::Normal),
            KeyCode::Char('3') => self.speed(SpeedLevel::Slow),
            KeyCode::Char('k') | KeyCode::Char('K') => {
                let key = next_key(self.session.values(), self.session.search_key());
                self.session.set_search_key(key);
                self.status_message = match key {
                    Some(k) => format!("Search key {}", format_value(k)),
                    None => "Search key cleared".to_string(),
                };
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let node = next_node(self.session.graph(), self.session.start_node());
                if self.session.set_start_node(node) {
                    self.status_message = "Start node changed".to_string();
                }
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                let node = next_node(self.session.graph(), self.session.target_node());
                if self.session.set_target_node(node) {
                    self.status_message = "Target node changed".to_string();
                }
            }
            KeyCode::Right => {
                if !self.session.merge_step_forward() {
                    self.status_message = "At the last step".to_string();
                }
            }
            KeyCode::Left => {
                if !self.session.merge_step_backward() {
                    self.status_message = "At the first step".to_string();
                }
            }
            KeyCode::Home => {
                self.session.merge_rewind();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::End => {
                self.session.merge_jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.session.reset();
                self.clear_view();
                self.status_message = "Reset".to_string();
            }
            _ => {}
        }
    }

    fn start(&mut self) {
        match self.session.start() {
            Ok(StartOutcome::Started) => {
                self.clear_view();
                self.status_message = match self.session.merge_log() {
                    Some(log) => format!("Recorded {} steps, use ←/→", log.len()),
                    None => "Running...".to_string(),
                };
            }
            Ok(StartOutcome::AlreadyActive) => {
                self.status_message = "Already running".to_string();
            }
            // the session already reported it through the sink
            Ok(StartOutcome::Rejected(_)) => {}
            Err(err) => {
                self.status_message = format!("Error: {}", err);
            }
        }
    }

    fn resize(&mut self, size: usize) {
        if self.session.set_size(size) {
            self.clear_view();
            self.status_message = format!("Size {}", self.session.size());
        } else {
            self.status_message = "Cannot resize while running".to_string();
        }
    }

    fn speed(&mut self, level: SpeedLevel) {
        self.session.set_speed(level);
        self.status_message = format!("Speed: {}", level);
    }
}

fn idle_array<'a>(title: &'a str, values: &'a [f64]) -> ArrayRenderData<'a> {
    ArrayRenderData {
        title,
        values,
        roles: vec![None; values.len()],
        bounds: None,
    }
}

/// Node after `current` in graph order, wrapping around
pub fn next_node(graph: &Graph, current: Option<NodeId>) -> Option<NodeId> {
    let nodes = graph.nodes();
    let next = match current.and_then(|c| nodes.iter().position(|n| *n == c)) {
        Some(index) => (index + 1) % nodes.len().max(1),
        None => 0,
    };
    nodes.get(next).copied()
}

/// Cycle the search key through the array's values, then one value that is absent,
/// then back to the first value
pub fn next_key(values: &[f64], current: Option<f64>) -> Option<f64> {
    let mut candidates: Vec<f64> = Vec::with_capacity(values.len() + 1);
    for &value in values {
        if !candidates.contains(&value) {
            candidates.push(value);
        }
    }
    let absent = values.iter().copied().fold(0.0_f64, f64::max) + 1.0;
    candidates.push(absent);

    let next = match current.and_then(|k| candidates.iter().position(|c| *c == k)) {
        Some(index) => (index + 1) % candidates.len(),
        None => 0,
    };
    candidates.get(next).copied()
}
