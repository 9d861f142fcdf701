use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::text;

/// Insert mode: the entry row is capturing a new task
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        // Commit and stay in Insert for rapid entry
        KeyCode::Enter => commit_entry(app),
        KeyCode::Esc => {
            app.entry.clear();
            app.caret = 0;
            app.mode = Mode::Navigate;
        }
        _ => edit_buffer(&mut app.entry, &mut app.caret, key),
    }
}

/// Edit mode: rewriting the task under the cursor in place
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if app.store.save_editing() {
                app.persist_tasks();
            }
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        KeyCode::Esc => {
            app.store.cancel_editing();
            app.mode = Mode::Navigate;
        }
        _ => {
            let Some(draft) = app.store.draft_mut() else {
                // Session gone from under us; drop back to navigate
                app.mode = Mode::Navigate;
                return;
            };
            edit_buffer(draft, &mut app.caret, key);
        }
    }
}

fn commit_entry(app: &mut App) {
    let Some(id) = app.store.add(&app.entry) else {
        // Whitespace-only input: nothing to commit, keep typing
        return;
    };
    app.persist_tasks();
    app.entry.clear();
    app.caret = 0;
    // Park the cursor on the new task if the filter shows it
    if let Some(pos) = app
        .store
        .view(app.filter)
        .iter()
        .position(|task| task.id == id)
    {
        app.cursor = pos;
    }
}

/// Apply one key to a single-line buffer, grapheme-aware
fn edit_buffer(buf: &mut String, caret: &mut usize, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Backspace) => {
            if *caret > 0 {
                let start = text::prev_boundary(buf, *caret);
                buf.drain(start..*caret);
                *caret = start;
            }
        }
        (_, KeyCode::Delete) => {
            if *caret < buf.len() {
                let end = text::next_boundary(buf, *caret);
                buf.drain(*caret..end);
            }
        }

        // Word jumps: Ctrl+arrows (or Alt on macOS terminals)
        (m, KeyCode::Left) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            *caret = text::word_left(buf, *caret);
        }
        (m, KeyCode::Right) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            *caret = text::word_right(buf, *caret);
        }
        (_, KeyCode::Left) => *caret = text::prev_boundary(buf, *caret),
        (_, KeyCode::Right) => *caret = text::next_boundary(buf, *caret),
        (_, KeyCode::Home) => *caret = 0,
        (_, KeyCode::End) => *caret = buf.len(),

        // Kill to start: Ctrl+U
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            buf.drain(..*caret);
            *caret = 0;
        }
        // Delete previous word: Ctrl+W
        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => {
            let start = text::word_left(buf, *caret);
            buf.drain(start..*caret);
            *caret = start;
        }

        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            buf.insert(*caret, c);
            *caret += c.len_utf8();
        }

        _ => {}
    }
}
