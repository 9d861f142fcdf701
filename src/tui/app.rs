use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::lock::DirLock;
use crate::io::storage::Storage;
use crate::model::config::Config;
use crate::model::task::Filter;
use crate::model::theme::ThemeMode;
use crate::store::{StoreOptions, TaskStore};

use super::input;
use super::render;
use super::theme::Palette;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task into the entry row
    Insert,
    /// Editing the task under the cursor; the draft lives in the store's
    /// edit session
    Edit,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub storage: Storage,
    pub config: Config,
    pub mode: Mode,
    pub filter: Filter,
    pub theme: ThemeMode,
    pub palette: Palette,
    pub should_quit: bool,
    /// Cursor index into the visible rows
    pub cursor: usize,
    /// First visible row
    pub scroll: usize,
    /// Entry-row draft for a new task (Insert mode)
    pub entry: String,
    /// Byte offset of the caret within the active buffer
    pub caret: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Transient feedback shown in the status row until the next key
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl App {
    pub fn new(store: TaskStore, storage: Storage, config: Config, theme: ThemeMode) -> Self {
        let palette = Palette::for_mode(theme, &config.colors);
        let filter = config.default_filter;
        App {
            store,
            storage,
            config,
            mode: Mode::Navigate,
            filter,
            theme,
            palette,
            should_quit: false,
            cursor: 0,
            scroll: 0,
            entry: String::new(),
            caret: 0,
            show_help: false,
            status_message: None,
            status_is_error: false,
        }
    }

    /// Number of rows under the active filter
    pub fn row_count(&self) -> usize {
        self.store.view(self.filter).len()
    }

    /// Id of the task under the cursor
    pub fn cursor_id(&self) -> Option<String> {
        self.store
            .view(self.filter)
            .get(self.cursor)
            .map(|task| task.id.clone())
    }

    /// Keep the cursor inside the current view after rows come and go
    pub fn clamp_cursor(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            self.cursor = 0;
            self.scroll = 0;
        } else if self.cursor >= rows {
            self.cursor = rows - 1;
        }
    }

    /// Persist the task snapshot. Called after every successful mutation;
    /// read paths never come here. A failed write becomes a status-row
    /// error while the in-memory state stays authoritative.
    pub fn persist_tasks(&mut self) {
        let snapshot = self.store.snapshot();
        if let Err(e) = self.storage.save_tasks(&snapshot) {
            self.set_error(format!("save failed: {e}"));
        }
    }

    fn persist_theme(&mut self) {
        if !self.config.persist_theme {
            return;
        }
        if let Err(e) = self.storage.save_theme(self.theme) {
            self.set_error(format!("save failed: {e}"));
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.palette = Palette::for_mode(self.theme, &self.config.colors);
        self.persist_theme();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }
}

/// Run the TUI application
pub fn run(
    data_dir: Option<&Path>,
    theme_override: Option<ThemeMode>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => Storage::default_dir()?,
    };
    let storage = Storage::new(dir);
    storage.ensure_dir()?;
    let _lock = DirLock::acquire(storage.dir())?;

    let config = read_config(storage.dir());
    // The collection is loaded exactly once; from here on memory is
    // authoritative and saves flow one way.
    let tasks = storage.load_tasks();
    let store = TaskStore::new(
        tasks,
        StoreOptions {
            stamp_created: config.timestamps,
            sort: config.sort,
        },
    );
    let theme = theme_override
        .or_else(|| storage.load_theme())
        .unwrap_or_else(ThemeMode::detect);
    let mut app = App::new(store, storage, config, theme);

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

    let result = run_event_loop(&mut terminal, &mut app);

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
