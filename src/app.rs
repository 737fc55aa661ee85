use crate::bigtext::{BigLabel, Placement};
use crate::display::{Clock, DisplayState};
use crate::editor::{EditInput, NotesEditor, NotesPanel};
use crate::help::Help;
use crate::notes::NotesFile;
use crate::scale::{FontSizes, LabelId, WindowDimensions};
use crate::theme::{gradient_color, HELP_STYLE};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    widgets::Widget,
    Terminal,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Time between refreshes of the calendar labels
const TICK: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
pub(crate) struct App<C> {
    clock: C,
    notes_file: NotesFile,
    display: DisplayState,
    fonts: FontSizes,
    notes_visible: bool,
    editor: NotesEditor,
    /// Set if the notes file exists but couldn't be read; saving is then
    /// disabled so that the file isn't clobbered
    load_error: Option<String>,
    save_error: Option<String>,
    state: AppState,
}

impl<C: Clock> App<C> {
    pub(crate) fn new(clock: C, notes_file: NotesFile) -> App<C> {
        let (text, load_error) = match notes_file.load() {
            Ok(text) => {
                info!(path = %notes_file.path().display(), bytes = text.len(), "Loaded notes");
                (text, None)
            }
            Err(e) => {
                warn!(error = ?e, "Could not load notes; edits will not be saved");
                (String::new(), Some(format!("Not loaded, saving off: {e}")))
            }
        };
        let display = DisplayState::now(&clock);
        App {
            clock,
            notes_file,
            display,
            fonts: FontSizes::default(),
            notes_visible: false,
            editor: NotesEditor::new(text),
            load_error,
            save_error: None,
            state: AppState::Running,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        let size = terminal.size()?;
        self.resize(terminal_dimensions(size.width, size.height));
        let mut next_tick = Instant::now() + TICK;
        while !self.quitting() {
            self.draw(&mut terminal)?;
            if poll(next_tick.saturating_duration_since(Instant::now()))? {
                self.handle_event(read()?)?;
            }
            let now = Instant::now();
            if now >= next_tick {
                self.tick();
                next_tick = next_deadline(next_tick, now);
            }
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(self, area);
            if let Some(pos) = self.cursor_position(area) {
                frame.set_cursor_position(pos);
            }
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Resize(columns, rows) => self.resize(terminal_dimensions(columns, rows)),
            ev => {
                if let Some(key) = ev.as_key_press_event() {
                    if !self.handle_key(key) {
                        self.beep()?;
                    }
                }
            }
        }
        Ok(())
    }

    // Returns `false` if the key was rejected
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let KeyEvent {
            code, modifiers, ..
        } = key;
        if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
            self.state = AppState::Quitting;
            return true;
        }
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match self.state {
            AppState::Helping => {
                self.state = AppState::Running;
                true
            }
            AppState::Running => match code {
                KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::F(1) => {
                    self.state = AppState::Helping;
                    true
                }
                _ => match edit_input(code) {
                    Some(input) if self.notes_visible && normal_modifiers.contains(modifiers) => {
                        if self.editor.handle_input(input) {
                            self.save_notes();
                        }
                        true
                    }
                    _ => false,
                },
            },
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn tick(&mut self) {
        let state = DisplayState::now(&self.clock);
        if state != self.display {
            debug!(
                month = %state.month,
                weekday = %state.weekday,
                day = %state.day_of_month,
                "Date changed"
            );
        }
        self.display = state;
    }

    fn resize(&mut self, dims: WindowDimensions) {
        self.notes_visible = dims.notes_visible();
        self.fonts = FontSizes::for_width(dims.width);
        debug!(
            width = dims.width,
            height = dims.height,
            notes_visible = self.notes_visible,
            "Window resized"
        );
    }

    fn save_notes(&mut self) {
        if self.load_error.is_some() {
            return;
        }
        match self.notes_file.save(self.editor.text()) {
            Ok(()) => {
                if self.save_error.take().is_some() {
                    info!("Notes saved again after earlier failure");
                }
            }
            Err(e) => {
                warn!(error = ?e, "Failed to save notes");
                self.save_error = Some(format!("Not saved: {e}"));
            }
        }
    }

    fn cursor_position(&self, area: Rect) -> Option<Position> {
        if self.state != AppState::Running {
            return None;
        }
        let notes_area = self.areas(area).notes?;
        self.notes_panel().cursor_position(notes_area)
    }
}

impl<C> App<C> {
    fn areas(&self, area: Rect) -> Areas {
        let (calendar, notes) = if self.notes_visible {
            let [calendar, notes] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
            (calendar, Some(notes))
        } else {
            (area, None)
        };
        let [month, day_of_month, weekday] =
            Layout::vertical([Constraint::Fill(1); 3]).areas(calendar);
        Areas {
            month,
            day_of_month,
            weekday,
            notes,
        }
    }

    fn notes_panel(&self) -> NotesPanel<'_> {
        let warning = self.load_error.as_deref().or(self.save_error.as_deref());
        NotesPanel::new(&self.editor, warning)
    }
}

impl<C> Widget for &App<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..area.height {
            let row = Rect {
                y: area.y + y,
                height: 1,
                ..area
            };
            buf.set_style(row, Style::new().bg(gradient_color(y, area.height)));
        }
        let areas = self.areas(area);
        for (label, text, placement, label_area) in [
            (
                LabelId::Month,
                &self.display.month,
                Placement::Center,
                areas.month,
            ),
            (
                LabelId::DayOfMonth,
                &self.display.day_of_month,
                Placement::Bottom,
                areas.day_of_month,
            ),
            (
                LabelId::Weekday,
                &self.display.weekday,
                Placement::Top,
                areas.weekday,
            ),
        ] {
            BigLabel::new(text, self.fonts[label], placement).render(label_area, buf);
        }
        if let Some(notes_area) = areas.notes {
            self.notes_panel().render(notes_area, buf);
        }
        if self.state == AppState::Helping {
            Help(HELP_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Areas {
    month: Rect,
    day_of_month: Rect,
    weekday: Rect,
    notes: Option<Rect>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Running,
    Helping,
    Quitting,
}

/// Deadline of the tick after the one due at `prev`, handled at `now`.
///
/// Ticks stay one `TICK` apart from each other rather than from whenever
/// they were handled.  If `now` is already past the following deadline
/// (e.g., the process was suspended), missed ticks are skipped instead of
/// being fired back to back.
fn next_deadline(prev: Instant, now: Instant) -> Instant {
    let next = prev + TICK;
    if next <= now {
        now + TICK
    } else {
        next
    }
}

fn edit_input(code: KeyCode) -> Option<EditInput> {
    match code {
        KeyCode::Char(ch) => Some(EditInput::Char(ch)),
        KeyCode::Enter => Some(EditInput::Newline),
        KeyCode::Backspace => Some(EditInput::Backspace),
        KeyCode::Delete => Some(EditInput::Delete),
        KeyCode::Left => Some(EditInput::Left),
        KeyCode::Right => Some(EditInput::Right),
        KeyCode::Up => Some(EditInput::Up),
        KeyCode::Down => Some(EditInput::Down),
        KeyCode::Home => Some(EditInput::Home),
        KeyCode::End => Some(EditInput::End),
        _ => None,
    }
}

/// Pixel size of the terminal window, falling back to an estimate from the
/// cell grid when the terminal won't say
fn terminal_dimensions(columns: u16, rows: u16) -> WindowDimensions {
    match crossterm::terminal::window_size() {
        Ok(ws) => WindowDimensions::from_terminal(ws.columns, ws.rows, ws.width, ws.height),
        Err(_) => WindowDimensions::from_terminal(columns, rows, 0, 0),
    }
}
