use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::{Filter, Task};
use crate::tui::app::{App, Mode};
use crate::util::text;

use super::pad_to_width;

/// Cells taken by the checkbox prefix: ` [x] `
const PREFIX_WIDTH: usize = 5;

/// Render the task list for the active filter
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = area.width as usize;
    let visible = area.height as usize;

    let rows: Vec<Task> = app.store.view(app.filter).into_iter().cloned().collect();
    if rows.is_empty() {
        render_empty(frame, app, area);
        return;
    }

    // Keep the cursor on a row and scrolled into view
    app.clamp_cursor();
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if visible > 0 && app.cursor >= app.scroll + visible {
        app.scroll = app.cursor + 1 - visible;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in rows.iter().enumerate().skip(app.scroll).take(visible) {
        lines.push(render_row(app, task, i == app.cursor, width));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.palette.background));
    frame.render_widget(paragraph, area);
}

fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let message = match app.filter {
        Filter::All => " Nothing to do. Press a to add a task.",
        Filter::Active => " No active tasks.",
        Filter::Completed => " No completed tasks.",
    };
    let paragraph = Paragraph::new(message).style(
        Style::default()
            .fg(app.palette.dim)
            .bg(app.palette.background),
    );
    frame.render_widget(paragraph, area);
}

fn render_row<'a>(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'a> {
    let palette = &app.palette;
    let bg = if is_cursor {
        palette.selection_bg
    } else {
        palette.background
    };
    let mut spans: Vec<Span> = Vec::new();

    // Checkbox
    let (mark, mark_style) = if task.completed {
        ("[x] ", Style::default().fg(palette.done).bg(bg))
    } else {
        ("[ ] ", Style::default().fg(palette.dim).bg(bg))
    };
    spans.push(Span::styled(" ", Style::default().bg(bg)));
    spans.push(Span::styled(mark, mark_style));

    // Right-aligned time column, only for stamped tasks under the
    // timestamps variant
    let stamp = if app.config.timestamps {
        task.created_at
            .map(|at| at.with_timezone(&Local).format("%b %e %H:%M").to_string())
    } else {
        None
    };
    let reserved = stamp.as_ref().map_or(0, |s| text::width(s) + 2);

    let editing_here =
        app.mode == Mode::Edit && app.store.session().target() == Some(task.id.as_str());
    if editing_here {
        let draft = app.store.session().draft().unwrap_or("");
        let caret = app.caret.min(draft.len());
        let style = Style::default().fg(palette.text_bright).bg(bg);
        spans.push(Span::styled(draft[..caret].to_string(), style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(palette.accent).bg(bg),
        ));
        spans.push(Span::styled(draft[caret..].to_string(), style));
    } else {
        let style = if task.completed {
            Style::default()
                .fg(palette.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default()
                .fg(palette.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text).bg(bg)
        };
        let avail = width.saturating_sub(PREFIX_WIDTH + reserved);
        spans.push(Span::styled(text::clip(&task.text, avail), style));
    }

    if let Some(stamp) = stamp {
        let gap = width.saturating_sub(text::width(&stamp) + 1);
        pad_to_width(&mut spans, gap, bg);
        spans.push(Span::styled(
            stamp,
            Style::default().fg(palette.dim).bg(bg),
        ));
    }
    pad_to_width(&mut spans, width, bg);
    Line::from(spans)
}
