use std::mem;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::config::Settings;
use crate::controller::Controller;
use crate::form::{FormError, FormField};
use crate::presenter::COLUMNS;
use crate::repository::CarRepository;
use crate::theme::Theme;

use super::forms::{build_field_line, field_value_offset, Dialog, ExportPrompt};
use super::helpers::{centered_rect, cursor_column, surface_error};
use super::logo::Logo;

/// Rows reserved for the logo and the add form.
const HEADER_HEIGHT: u16 = 8;
/// Bordered single-line search box.
const SEARCH_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows moved by PageUp/PageDown in the table.
const PAGE_STEP: isize = 10;

/// Where typed keys go while no popup is open.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
    Field(FormField),
    Search,
    Table,
}

const FOCUS_ORDER: [Focus; 6] = [
    Focus::Field(FormField::Brand),
    Focus::Field(FormField::Model),
    Focus::Field(FormField::Year),
    Focus::Field(FormField::Price),
    Focus::Search,
    Focus::Table,
];

impl Focus {
    fn step(self, delta: isize) -> Focus {
        let len = FOCUS_ORDER.len() as isize;
        let position = FOCUS_ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0) as isize;
        FOCUS_ORDER[(position + delta).rem_euclid(len) as usize]
    }
}

/// Popups layered over the main screen.
enum Mode {
    Normal,
    Exporting(ExportPrompt),
    Message(Dialog),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

enum StatusKind {
    Info,
    Error,
}

/// The terminal shell. All record handling is delegated to the controller;
/// this type only owns focus, popups, theme and decoration.
pub struct App<R: CarRepository> {
    controller: Controller<R>,
    focus: Focus,
    mode: Mode,
    theme: Theme,
    logo: Option<Logo>,
    settings: Settings,
    settings_path: Option<PathBuf>,
    status: Option<StatusMessage>,
}

impl<R: CarRepository> App<R> {
    pub fn new(controller: Controller<R>, settings: Settings) -> Self {
        Self {
            controller,
            focus: Focus::Field(FormField::Brand),
            mode: Mode::Normal,
            theme: Theme::named(&settings.theme),
            logo: None,
            settings,
            settings_path: None,
            status: None,
        }
    }

    /// Show `logo` in the header.
    pub fn with_logo(mut self, logo: Option<Logo>) -> Self {
        self.logo = logo;
        self
    }

    /// Write the settings (currently only the theme changes) back to `path`
    /// whenever they change.
    pub fn persist_settings_to(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn controller(&self) -> &Controller<R> {
        &self.controller
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Process one key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Exporting(prompt) => self.handle_export_prompt(code, prompt),
            // Any key closes a message box.
            Mode::Message(_) => Mode::Normal,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                *exit = true;
                return Ok(Mode::Normal);
            }
            KeyCode::Tab => {
                self.focus = self.focus.step(1);
                return Ok(Mode::Normal);
            }
            KeyCode::BackTab => {
                self.focus = self.focus.step(-1);
                return Ok(Mode::Normal);
            }
            _ => {}
        }

        match self.focus {
            Focus::Field(field) => match code {
                KeyCode::Enter => return Ok(self.submit_form()),
                KeyCode::Left if field.is_selector() => {
                    self.controller.form_mut().cycle(field, -1);
                }
                KeyCode::Right if field.is_selector() => {
                    self.controller.form_mut().cycle(field, 1);
                }
                KeyCode::Char(ch) if field == FormField::Price => {
                    self.controller.form_mut().push_price_char(ch);
                }
                KeyCode::Backspace if field == FormField::Price => {
                    self.controller.form_mut().pop_price_char();
                }
                _ => {}
            },
            Focus::Search => match code {
                KeyCode::Enter => return Ok(self.run_search()),
                KeyCode::Char(ch) => {
                    self.controller.push_search_char(ch);
                }
                KeyCode::Backspace => self.controller.pop_search_char(),
                _ => {}
            },
            Focus::Table => {
                let table = self.controller.table_mut();
                match code {
                    KeyCode::Up => table.move_selection(-1),
                    KeyCode::Down => table.move_selection(1),
                    KeyCode::PageUp => table.move_selection(-PAGE_STEP),
                    KeyCode::PageDown => table.move_selection(PAGE_STEP),
                    KeyCode::Home => table.select_first(),
                    KeyCode::End => table.select_last(),
                    _ => {}
                }
            }
        }

        Ok(Mode::Normal)
    }

    fn handle_export_prompt(&mut self, code: KeyCode, mut prompt: ExportPrompt) -> Mode {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                Mode::Normal
            }
            KeyCode::Enter => self.finish_export(&prompt),
            KeyCode::Backspace => {
                prompt.backspace();
                Mode::Exporting(prompt)
            }
            KeyCode::Char(ch) => {
                prompt.push_char(ch);
                Mode::Exporting(prompt)
            }
            _ => Mode::Exporting(prompt),
        }
    }

    /// Ctrl-E: open the "save as" prompt for the rows on screen.
    pub(crate) fn handle_ctrl_e(&mut self) -> Result<()> {
        if matches!(self.mode, Mode::Normal) {
            self.mode = Mode::Exporting(ExportPrompt::new(&self.settings.export_file_name));
        }
        Ok(())
    }

    /// Ctrl-T: switch to the other theme and remember the choice.
    pub(crate) fn handle_ctrl_t(&mut self) -> Result<()> {
        if !matches!(self.mode, Mode::Normal) {
            return Ok(());
        }
        let name = self.theme.toggle().to_string();
        log::info!("switched theme to {name}");
        self.settings.theme = name.clone();
        if let Some(path) = &self.settings_path {
            if let Err(err) = self.settings.save(path) {
                log::warn!("failed to save settings: {err:#}");
            }
        }
        self.set_status(format!("Theme: {name}"), StatusKind::Info);
        Ok(())
    }

    /// Ctrl-R: drop the search filter and list every record.
    pub(crate) fn handle_ctrl_r(&mut self) -> Result<()> {
        if !matches!(self.mode, Mode::Normal) {
            return Ok(());
        }
        match self.controller.show_all() {
            Ok(count) => self.set_status(format!("Showing all {count} cars."), StatusKind::Info),
            Err(err) => self.mode = Mode::Message(Dialog::error("Error", surface_error(&err))),
        }
        Ok(())
    }

    fn submit_form(&mut self) -> Mode {
        match self.controller.add_car() {
            Ok(car) => {
                self.focus = Focus::Field(FormField::Brand);
                self.set_status(format!("Added {car}."), StatusKind::Info);
                Mode::Normal
            }
            Err(err) if err.is_warning() => {
                Mode::Message(Dialog::warning("Missing Info", err.to_string()))
            }
            Err(err) => {
                let message = match &err {
                    FormError::Storage(inner) => surface_error(inner),
                    other => other.to_string(),
                };
                log::warn!("failed to add car: {message}");
                self.set_status("Car was not saved.", StatusKind::Error);
                Mode::Message(Dialog::error("Error", message))
            }
        }
    }

    fn run_search(&mut self) -> Mode {
        match self.controller.search() {
            Ok(count) => {
                self.set_status(format!("{count} matching cars."), StatusKind::Info);
                Mode::Normal
            }
            Err(err) => Mode::Message(Dialog::error("Error", surface_error(&err))),
        }
    }

    fn finish_export(&mut self, prompt: &ExportPrompt) -> Mode {
        match self.controller.export(&prompt.path) {
            Ok(Some(path)) => {
                self.set_status(format!("Saved {}.", path.display()), StatusKind::Info);
                Mode::Message(Dialog::info(
                    "Exported",
                    "Data exported to Excel successfully.",
                ))
            }
            Ok(None) => Mode::Normal,
            Err(err) => {
                log::warn!("export failed: {err:#}");
                Mode::Message(Dialog::error("Error", surface_error(&err)))
            }
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.theme.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        self.draw_search(frame, chunks[1]);
        self.draw_table(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);

        match &self.mode {
            Mode::Exporting(prompt) => self.draw_export_prompt(frame, area, prompt),
            Mode::Message(dialog) => self.draw_dialog(frame, area, dialog),
            Mode::Normal => {}
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let form_area = match &self.logo {
            Some(logo) => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(logo.width() + 2), Constraint::Min(0)])
                    .split(area);
                let logo_area = Rect {
                    x: chunks[0].x + 1,
                    y: chunks[0].y + 1,
                    width: logo.width().min(chunks[0].width),
                    height: logo.height().min(chunks[0].height.saturating_sub(1)),
                };
                frame.render_widget(Paragraph::new(logo.lines()), logo_area);
                chunks[1]
            }
            None => area,
        };

        let block = Block::default()
            .title(" Car Information Manager ")
            .borders(Borders::ALL)
            .border_style(self.theme.key())
            .style(self.theme.base());
        frame.render_widget(block.clone(), form_area);
        let inner = block.inner(form_area);

        let form = self.controller.form();
        let mut lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|field| {
                build_field_line(form, *field, self.focus == Focus::Field(*field), &self.theme)
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter to add \u{2022} \u{2190}/\u{2192} to choose \u{2022} Tab to move",
            self.theme.muted(),
        )));

        frame.render_widget(Paragraph::new(lines), inner);

        if let (Mode::Normal, Focus::Field(FormField::Price)) = (&self.mode, self.focus) {
            let row = FormField::ALL
                .iter()
                .position(|field| *field == FormField::Price)
                .unwrap_or(0) as u16;
            let cursor_x = cursor_column(inner, field_value_offset(), form.price().chars().count());
            frame.set_cursor_position((cursor_x, inner.y + row));
        }
    }

    fn draw_search(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Search {
            self.theme.focused()
        } else {
            self.theme.base()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style)
            .style(self.theme.base());
        let query = self.controller.search_text();
        let paragraph = Paragraph::new(Span::raw(format!("Search: {query}"))).block(block.clone());
        frame.render_widget(paragraph, area);

        if matches!(self.mode, Mode::Normal) && self.focus == Focus::Search {
            let inner = block.inner(area);
            let cursor_x = cursor_column(inner, "Search: ".len() as u16, query.chars().count());
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let table_view = self.controller.table();
        let border_style = if self.focus == Focus::Table {
            self.theme.focused()
        } else {
            self.theme.base()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Cars ({}) ", table_view.len()))
            .border_style(border_style)
            .style(self.theme.base());

        let header = Row::new(
            COLUMNS
                .iter()
                .map(|title| Cell::from(Line::from(*title).centered())),
        )
        .style(self.theme.header());

        let rows = table_view.rows().iter().map(|row| {
            Row::new(
                row.cells()
                    .into_iter()
                    .map(|cell| Cell::from(Line::from(cell).centered())),
            )
        });

        let widths = [
            Constraint::Percentage(10),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .style(self.theme.base())
            .row_highlight_style(self.theme.highlight());

        let mut state = TableState::default();
        if !table_view.is_empty() {
            state.select(Some(table_view.selected()));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .style(self.theme.base());
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            let style = match status.kind {
                StatusKind::Info => self.theme.success(),
                StatusKind::Error => self.theme.danger(),
            };
            Line::from(vec![Span::styled(status.text.clone(), style)])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = self.theme.key();
        let text_style = self.theme.base();
        let pairs: &[(&str, &str)] = match &self.mode {
            Mode::Exporting(_) => &[("[Enter]", " Save   "), ("[Esc]", " Cancel")],
            Mode::Message(_) => &[("[any key]", " Close")],
            Mode::Normal => &[
                ("[Tab]", " Next field   "),
                ("[Enter]", " Add/Search   "),
                ("[Ctrl-R]", " Show all   "),
                ("[Ctrl-E]", " Export   "),
                ("[Ctrl-T]", " Theme   "),
                ("[Esc]", " Quit"),
            ],
        };

        Line::from(
            pairs
                .iter()
                .flat_map(|(key, label)| {
                    [
                        Span::styled(*key, key_style),
                        Span::styled(*label, text_style),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    }

    fn draw_export_prompt(&self, frame: &mut Frame, area: Rect, prompt: &ExportPrompt) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Export to Excel ")
            .borders(Borders::ALL)
            .border_style(self.theme.key())
            .style(self.theme.base());
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Save as: {}", prompt.path)),
            Line::from(""),
            Line::from(Span::styled(
                "Enter to save \u{2022} Esc to cancel \u{2022} .xlsx is added when missing",
                self.theme.muted(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        let cursor_x = cursor_column(inner, "Save as: ".len() as u16, prompt.value_len());
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_dialog(&self, frame: &mut Frame, area: Rect, dialog: &Dialog) {
        let popup_area = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", dialog.title))
            .borders(Borders::ALL)
            .border_style(dialog.style(&self.theme))
            .style(self.theme.base());
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(Span::styled(dialog.text.clone(), dialog.style(&self.theme))),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue.",
                self.theme.muted(),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewCar;
    use crate::repository::MemoryCarRepository;
    use crate::theme::{DARK_THEME, LIGHT_THEME};
    use ratatui::backend::{Backend, TestBackend};
    use ratatui::Terminal;

    fn app() -> App<MemoryCarRepository> {
        App::new(
            Controller::new(MemoryCarRepository::new()).unwrap(),
            Settings::default(),
        )
    }

    fn press(app: &mut App<MemoryCarRepository>, keys: &[KeyCode]) {
        for key in keys {
            assert!(!app.handle_key(*key).unwrap());
        }
    }

    fn type_text(app: &mut App<MemoryCarRepository>, text: &str) {
        for ch in text.chars() {
            assert!(!app.handle_key(KeyCode::Char(ch)).unwrap());
        }
    }

    fn screen_text(app: &App<MemoryCarRepository>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn keyboard_flow_adds_a_car() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Right,
                KeyCode::Tab,
                KeyCode::Right,
                KeyCode::Tab,
                KeyCode::Left,
                KeyCode::Tab,
            ],
        );
        type_text(&mut app, "12345");
        assert_eq!(app.controller().form().price(), "12,345");

        press(&mut app, &[KeyCode::Enter]);
        assert!(matches!(app.mode, Mode::Normal));
        assert!(app.controller().form().is_empty());
        assert_eq!(app.focus, Focus::Field(FormField::Brand));

        let row = &app.controller().table().rows()[0];
        assert_eq!((row.make.as_str(), row.model.as_str(), row.year), ("Toyota", "Corolla", 2025));
        assert_eq!(row.price, "12,345");
        let stored = app.controller().repository().list_all().unwrap();
        assert_eq!(stored[0].price, 12345.0);
    }

    #[test]
    fn empty_submit_shows_warning_then_dismisses() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter]);
        match &app.mode {
            Mode::Message(dialog) => {
                assert_eq!(dialog.title, "Missing Info");
                assert_eq!(dialog.text, "Please fill all fields.");
            }
            _ => panic!("expected a warning dialog"),
        }
        press(&mut app, &[KeyCode::Char('x')]);
        assert!(matches!(app.mode, Mode::Normal));
        assert!(app.controller().table().is_empty());
    }

    #[test]
    fn bad_price_keeps_form_and_shows_error() {
        let mut app = app();
        press(&mut app, &[KeyCode::Right, KeyCode::Tab, KeyCode::Right, KeyCode::Tab, KeyCode::Right, KeyCode::Tab]);
        type_text(&mut app, "5k");
        press(&mut app, &[KeyCode::Enter]);

        assert!(matches!(&app.mode, Mode::Message(dialog) if dialog.title == "Error"));
        assert_eq!(app.controller().form().price(), "5k");
        assert_eq!(app.controller().form().make(), "Toyota");
    }

    #[test]
    fn search_box_filters_table() {
        let mut repo = MemoryCarRepository::new();
        repo.insert(&NewCar::new("Honda", "City", 2022, 1_200_000.0)).unwrap();
        repo.insert(&NewCar::new("Kia", "Seltos", 2023, 1_400_000.0)).unwrap();
        let mut app = App::new(Controller::new(repo).unwrap(), Settings::default());

        press(&mut app, &[KeyCode::BackTab, KeyCode::BackTab]);
        assert_eq!(app.focus, Focus::Search);
        type_text(&mut app, "sel");
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.controller().table().len(), 1);

        app.handle_ctrl_r().unwrap();
        assert_eq!(app.controller().table().len(), 2);
    }

    #[test]
    fn theme_toggle_round_trips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.toml");
        let mut app = app().persist_settings_to(settings_path.clone());

        app.handle_ctrl_t().unwrap();
        assert_eq!(app.theme().name(), DARK_THEME);
        assert_eq!(Settings::load(&settings_path).theme, DARK_THEME);

        app.handle_ctrl_t().unwrap();
        assert_eq!(app.theme().name(), LIGHT_THEME);
    }

    #[test]
    fn export_prompt_writes_visible_rows() {
        let mut repo = MemoryCarRepository::new();
        repo.insert(&NewCar::new("Honda", "City", 2022, 1_200_000.0)).unwrap();
        let mut app = App::new(Controller::new(repo).unwrap(), Settings::default());
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report");

        app.handle_ctrl_e().unwrap();
        match &mut app.mode {
            Mode::Exporting(prompt) => {
                assert_eq!(prompt.path, "cars.xlsx");
                prompt.path = target.display().to_string();
            }
            _ => panic!("expected the export prompt"),
        }
        press(&mut app, &[KeyCode::Enter]);

        assert!(matches!(&app.mode, Mode::Message(dialog) if dialog.title == "Exported"));
        assert!(dir.path().join("report.xlsx").exists());
    }

    #[test]
    fn cancelled_export_writes_nothing() {
        let mut app = app();
        app.handle_ctrl_e().unwrap();
        press(&mut app, &[KeyCode::Esc]);
        assert!(matches!(app.mode, Mode::Normal));
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Esc).unwrap());
    }

    fn cursor_column_after_draw(app: &App<MemoryCarRepository>) -> u16 {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal.backend_mut().get_cursor_position().unwrap().x
    }

    #[test]
    fn long_input_keeps_cursor_on_screen() {
        let mut searching = app();
        press(&mut searching, &[KeyCode::BackTab, KeyCode::BackTab]);
        type_text(&mut searching, &"k".repeat(300));
        assert!(cursor_column_after_draw(&searching) < 100);

        let mut pricing = app();
        press(&mut pricing, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(pricing.focus, Focus::Field(FormField::Price));
        type_text(&mut pricing, &"9".repeat(200));
        assert!(cursor_column_after_draw(&pricing) < 100);

        pricing.handle_ctrl_e().unwrap();
        if let Mode::Exporting(prompt) = &mut pricing.mode {
            prompt.path = "x".repeat(500);
        }
        assert!(cursor_column_after_draw(&pricing) < 100);
    }

    #[test]
    fn screen_shows_form_and_rows() {
        let mut repo = MemoryCarRepository::new();
        repo.insert(&NewCar::new("Mahindra", "Thar", 2024, 1_650_000.0)).unwrap();
        let app = App::new(Controller::new(repo).unwrap(), Settings::default());

        let text = screen_text(&app);
        assert!(text.contains("Car Information Manager"));
        assert!(text.contains("Brand"));
        assert!(text.contains("Mahindra"));
        assert!(text.contains("1,650,000"));
    }
}
