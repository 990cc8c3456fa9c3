use crate::error::{Action, RosterError};
use crate::form::{Field, FormState};
use crate::roster::Roster;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Info,
}

impl AlertKind {
    pub fn title(&self) -> &'static str {
        match self {
            AlertKind::Error => " ERROR ",
            AlertKind::Info => " INFO ",
        }
    }

    fn color(&self) -> Color {
        match self {
            AlertKind::Error => Color::Red,
            AlertKind::Info => Color::Green,
        }
    }
}

/// Modal message shown after an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

pub struct App {
    pub roster: Roster,
    pub state: TableState,
    pub form: FormState,
    pub alert: Option<Alert>,
    pub should_quit: bool,
}

impl App {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            state: TableState::default(),
            form: FormState::new(),
            alert: None,
            should_quit: false,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Selection changed: a selected row pushes its values into the form
    pub fn select(&mut self, index: Option<usize>) {
        self.state.select(index);

        if let Some(record) = index.and_then(|i| self.roster.get(i)) {
            self.form.fill_from(record);
        }
    }

    /// Drop the selection and empty the form, as after every operation
    pub fn reset(&mut self) {
        self.state.select(None);
        self.form.clear();
    }

    pub fn add(&mut self) {
        let result = self
            .roster
            .add(&self.form.name, &self.form.surname, &self.form.age);

        match result {
            Ok(index) => {
                debug!(index, "row added");
                self.info(Action::Add.success_message());
            }
            Err(err @ RosterError::Validation(_)) => {
                // Keep the input so it can be corrected
                self.error(&err);
                return;
            }
            Err(err) => self.error(&err),
        }

        self.reset();
    }

    pub fn modify(&mut self) {
        let index = self.selected();
        let result = self
            .roster
            .update(index, &self.form.name, &self.form.surname, &self.form.age)
            .map(|_| ());

        match result {
            Ok(()) => self.info(Action::Update.success_message()),
            Err(err @ RosterError::Validation(_)) => {
                self.error(&err);
                return;
            }
            Err(err) => self.error(&err),
        }

        self.reset();
    }

    pub fn delete(&mut self) {
        let index = self.selected();

        match self.roster.remove(index) {
            Ok(_) => self.info(Action::Remove.success_message()),
            Err(err) => self.error(&err),
        }

        self.reset();
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn info(&mut self, message: &str) {
        self.alert = Some(Alert {
            kind: AlertKind::Info,
            message: message.to_string(),
        });
    }

    fn error(&mut self, err: &RosterError) {
        self.alert = Some(Alert {
            kind: AlertKind::Error,
            message: err.to_string(),
        });
    }

    pub fn next(&mut self) {
        let len = self.roster.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.roster.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => len - 1,
        };
        self.select(Some(i));
    }

    pub fn first(&mut self) {
        if !self.roster.is_empty() {
            self.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        if !self.roster.is_empty() {
            self.select(Some(self.roster.len() - 1));
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('a') if ctrl => self.add(),
            KeyCode::Char('e') if ctrl => self.modify(),
            KeyCode::Char('d') if ctrl => self.delete(),
            KeyCode::Char('l') if ctrl => self.reset(),
            KeyCode::F(2) => self.add(),
            KeyCode::F(3) => self.modify(),
            KeyCode::F(4) => self.delete(),
            KeyCode::F(5) => self.reset(),
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_previous(),
            KeyCode::Enter => self.form.focus_next(),
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Down => self.next(),
            KeyCode::Up => self.previous(),
            KeyCode::Home => self.first(),
            KeyCode::End => self.last(),
            KeyCode::Char(c) if !ctrl => self.form.push_char(c),
            _ => {}
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(records = app.roster.len(), "interactive session started");

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(records = app.roster.len(), "interactive session ended");

    res.context("Terminal event loop failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Table + form
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Table
            Constraint::Percentage(40), // Form
        ])
        .split(chunks[1]);

    render_table(f, content_chunks[0], app);
    render_form(f, content_chunks[1], app);

    render_status_bar(f, chunks[2]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let header_text = vec![Line::from(vec![
        Span::styled(
            "PERSONAS",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Total: {}", app.roster.len()),
            Style::default().fg(Color::White),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Name", "Surname", "Age"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.roster.iter().map(|record| {
        let cells = vec![
            Cell::from(truncate(&record.name, 24)),
            Cell::from(truncate(&record.surname, 30)),
            Cell::from(record.age.to_string()),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(45),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" People "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (chunk, field) in chunks.iter().zip([Field::Name, Field::Surname, Field::Age]) {
        let focused = app.form.focus == field;
        let border = if focused { Color::Yellow } else { Color::White };
        let value = app.form.value(field);

        let input = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", field.label())),
        );
        f.render_widget(input, *chunk);

        if focused && app.alert.is_none() {
            let width = chunk.width.saturating_sub(2);
            let offset = (value.chars().count() as u16).min(width.saturating_sub(1));
            f.set_cursor(chunk.x + 1 + offset, chunk.y + 1);
        }
    }

    let selection = match app.selected() {
        Some(i) => format!("Row {} selected", i + 1),
        None => "No row selected".to_string(),
    };

    let help = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Ctrl+A", Style::default().fg(Color::Yellow)),
            Span::raw(" / F2  Add"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+E", Style::default().fg(Color::Yellow)),
            Span::raw(" / F3  Modify"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+D", Style::default().fg(Color::Yellow)),
            Span::raw(" / F4  Delete"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+L", Style::default().fg(Color::Yellow)),
            Span::raw(" / F5  Clear"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", selection),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let actions = Paragraph::new(help).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Actions "),
    );

    f.render_widget(actions, chunks[3]);
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let status_spans = vec![
        Span::styled(" Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Field | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Select | "),
        Span::styled("Home/End", Style::default().fg(Color::Yellow)),
        Span::raw(" First/Last | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

const ALERT_HINT: &str = "Press Enter to close";

fn render_alert(f: &mut Frame, alert: &Alert) {
    let screen = f.size();
    let width = percent_of(screen.width, 50);

    // Message, blank line, hint, plus the two border rows
    let inner = usize::from(width.saturating_sub(2)).max(1);
    let rows = wrapped_rows(&alert.message, inner)
        .saturating_add(1)
        .saturating_add(wrapped_rows(ALERT_HINT, inner));
    let area = centered_rect(width, rows.saturating_add(2), screen);

    let mut content: Vec<Line> = alert.message.lines().map(Line::from).collect();
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        ALERT_HINT,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(alert.kind.color()))
                .title(alert.kind.title()),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn percent_of(total: u16, percent: u16) -> u16 {
    let scaled = u32::from(total) * u32::from(percent.min(100)) / 100;
    scaled as u16
}

/// Rows `text` takes once word-wrapped at `width` columns
fn wrapped_rows(text: &str, width: usize) -> u16 {
    let width = width.max(1);
    let mut rows: usize = 0;

    for line in text.lines() {
        let mut current = 0;
        rows += 1;

        for word in line.split_whitespace() {
            let len = word.chars().count();

            if current > 0 && current + 1 + len <= width {
                current += 1 + len;
                continue;
            }
            if current > 0 {
                rows += 1;
            }

            // Words wider than the line get split across rows
            rows += (len.max(1) - 1) / width;
            current = (len - 1) % width + 1;
        }
    }

    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

/// Rectangle of `width` by `height` in the middle of `area`, clamped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
