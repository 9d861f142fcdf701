use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::storage::Storage;
use crate::model::config::Config;
use crate::model::theme::ThemeMode;
use crate::store::{StoreOptions, TaskStore};
use crate::tui::app::App;

pub const TERM_W: u16 = 40;
pub const TERM_H: u16 = 10;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over a throwaway data directory. The returned TempDir
/// keeps the directory alive for the test's duration.
///
/// Tasks are created without timestamps so rendered rows are stable.
pub fn test_app(texts: &[&str]) -> (App, TempDir) {
    test_app_with(Config::default(), texts)
}

/// Same, with a custom config
pub fn test_app_with(config: Config, texts: &[&str]) -> (App, TempDir) {
    let tmp = TempDir::new().unwrap();
    let storage = Storage::new(tmp.path());
    let mut store = TaskStore::new(
        Vec::new(),
        StoreOptions {
            stamp_created: false,
            sort: config.sort,
        },
    );
    for text in texts {
        store.add(text);
    }
    let app = App::new(store, storage, config, ThemeMode::Dark);
    (app, tmp)
}
