use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::backend::{JsonFileBackend, PersistError, StoreBackend};
use crate::io::config_io;
use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::model::Todo;
use crate::store::{StoreError, TodoStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Dialog,
    Confirm,
}

/// What a dialog writes to on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Add,
    Edit { id: u64 },
}

/// The two text fields of the add/edit dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Title,
    Description,
}

/// State of the add/edit dialog
#[derive(Debug, Clone)]
pub struct DialogState {
    pub kind: DialogKind,
    pub field: DialogField,
    pub title: String,
    pub description: String,
    /// Byte offset of the cursor within the focused field
    pub cursor: usize,
    /// Validation message shown inside the dialog
    pub error: Option<String>,
}

impl DialogState {
    /// Fresh dialog for a new todo.
    pub fn add() -> Self {
        DialogState {
            kind: DialogKind::Add,
            field: DialogField::Title,
            title: String::new(),
            description: String::new(),
            cursor: 0,
            error: None,
        }
    }

    /// Dialog prefilled from an existing todo, cursor at the end of the title.
    pub fn edit(todo: &Todo) -> Self {
        DialogState {
            kind: DialogKind::Edit { id: todo.id },
            field: DialogField::Title,
            cursor: todo.title.len(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            error: None,
        }
    }

    pub fn focused_text(&self) -> &str {
        match self.field {
            DialogField::Title => &self.title,
            DialogField::Description => &self.description,
        }
    }

    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.field {
            DialogField::Title => &mut self.title,
            DialogField::Description => &mut self.description,
        }
    }

    /// Move focus to the other field, cursor at its end.
    pub fn switch_field(&mut self) {
        self.field = match self.field {
            DialogField::Title => DialogField::Description,
            DialogField::Description => DialogField::Title,
        };
        self.cursor = self.focused_text().len();
    }
}

/// A destructive action awaiting y/n
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTodo { id: u64 },
    ClearAll,
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub message: String,
}

/// Main application state
pub struct App {
    pub store: TodoStore,
    pub backend: JsonFileBackend,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    pub dialog: Option<DialogState>,
    pub confirm: Option<ConfirmState>,
    pub show_help: bool,
    /// One-shot message for the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: TodoStore, backend: JsonFileBackend, theme: Theme) -> Self {
        App {
            store,
            backend,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            dialog: None,
            confirm: None,
            show_help: false,
            status_message: None,
        }
    }

    /// The todo under the cursor
    pub fn selected(&self) -> Option<&Todo> {
        self.store.todos().get(self.cursor)
    }

    /// Keep the cursor inside the list after a mutation
    pub fn clamp_cursor(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Persist the store. On failure the unsaved JSON goes to the recovery
    /// log and the status row reports the problem; the session continues.
    pub fn save(&mut self) {
        if let Err(e) = self.backend.save(self.store.todos()) {
            let body = serde_json::to_string_pretty(self.store.todos()).unwrap_or_default();
            log_recovery(
                self.backend.path(),
                RecoveryEntry::new(RecoveryCategory::Write, "save failed", &body),
            );
            self.status_message = Some(format!("save failed: {}", e));
        }
    }

    /// Show a store error on the status row.
    pub fn report_store_error(&mut self, err: StoreError) {
        self.status_message = Some(err.to_string());
    }
}

/// Load the persisted list, falling back to an empty store on a corrupt
/// file. The corrupt content is captured in the recovery log first; the
/// returned message is shown on the status row.
pub fn load_store(backend: &JsonFileBackend) -> Result<(TodoStore, Option<String>), PersistError> {
    match backend.load() {
        Ok(todos) => Ok((TodoStore::from_todos(todos), None)),
        Err(PersistError::Parse { .. }) => {
            let raw = backend.raw_content().unwrap_or_default();
            log_recovery(
                backend.path(),
                RecoveryEntry::new(RecoveryCategory::Parse, "list not restored", &raw),
            );
            Ok((
                TodoStore::new(),
                Some("could not restore list; old content saved to .recovery.log".to_string()),
            ))
        }
        Err(e) => Err(e),
    }
}

/// Restore cursor/scroll from .state.json
pub fn restore_ui_state(app: &mut App) {
    if let Some(state) = read_ui_state(app.backend.path()) {
        app.cursor = state.cursor;
        app.scroll_offset = state.scroll_offset;
        app.clamp_cursor();
    }
}

/// Save cursor/scroll to .state.json
pub fn save_ui_state(app: &App) {
    let state = UiState {
        cursor: app.cursor,
        scroll_offset: app.scroll_offset,
    };
    let _ = write_ui_state(app.backend.path(), &state);
}

/// Run the TUI application
pub fn run(file_flag: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config()?;
    let backend = JsonFileBackend::new(config_io::resolve_data_file(file_flag, &config));

    let (store, load_message) = load_store(&backend)?;
    let theme = Theme::from_config(&config.ui);
    let mut app = App::new(store, backend, theme);
    app.status_message = load_message;

    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Flush the list and UI state before exit
    app.save();
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
