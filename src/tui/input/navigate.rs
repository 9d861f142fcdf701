use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::task::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.clear_status();

    match (key.modifiers, key.code) {
        // Quit: q or Ctrl+Q
        (m, KeyCode::Char('q')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Help overlay
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Cursor movement
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.row_count().saturating_sub(1);
        }

        // Filter tabs
        (_, KeyCode::Tab) => set_filter(app, app.filter.next()),
        (_, KeyCode::Char('1')) => set_filter(app, Filter::All),
        (_, KeyCode::Char('2')) => set_filter(app, Filter::Active),
        (_, KeyCode::Char('3')) => set_filter(app, Filter::Completed),

        // Toggle completion
        (_, KeyCode::Char(' ')) | (_, KeyCode::Char('x')) => toggle_cursor_task(app),

        // Delete the task under the cursor
        (_, KeyCode::Char('d')) | (_, KeyCode::Delete) => delete_cursor_task(app),

        // Clear all completed tasks
        (_, KeyCode::Char('C')) => clear_completed(app),

        // New task entry
        (_, KeyCode::Char('a')) | (_, KeyCode::Char('i')) => open_entry(app),

        // Edit the task under the cursor
        (_, KeyCode::Char('e')) | (_, KeyCode::Enter) => start_edit(app),

        // Theme toggle
        (_, KeyCode::Char('t')) => app.toggle_theme(),

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let rows = app.row_count();
    if rows == 0 {
        return;
    }
    app.cursor = if delta < 0 {
        app.cursor.saturating_sub(delta.unsigned_abs())
    } else {
        (app.cursor + delta as usize).min(rows - 1)
    };
}

fn set_filter(app: &mut App, filter: Filter) {
    if app.filter != filter {
        app.filter = filter;
        app.cursor = 0;
        app.scroll = 0;
    }
}

fn toggle_cursor_task(app: &mut App) {
    let Some(id) = app.cursor_id() else { return };
    if app.store.toggle(&id) {
        app.persist_tasks();
        // The row may have just left the active/completed view
        app.clamp_cursor();
    }
}

fn delete_cursor_task(app: &mut App) {
    let Some(id) = app.cursor_id() else { return };
    if app.store.delete(&id) {
        app.persist_tasks();
        app.clamp_cursor();
        app.set_status("deleted");
    }
}

fn clear_completed(app: &mut App) {
    let removed = app.store.clear_completed();
    if removed == 0 {
        return;
    }
    app.persist_tasks();
    app.clamp_cursor();
    if removed == 1 {
        app.set_status("cleared 1 completed task");
    } else {
        app.set_status(format!("cleared {removed} completed tasks"));
    }
}

fn open_entry(app: &mut App) {
    app.entry.clear();
    app.caret = 0;
    app.mode = Mode::Insert;
}

fn start_edit(app: &mut App) {
    let Some(id) = app.cursor_id() else { return };
    if app.store.start_editing(&id) {
        // Caret starts at the end of the seeded draft
        app.caret = app.store.session().draft().map_or(0, str::len);
        app.mode = Mode::Edit;
    }
}
