use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::text;

use super::pad_to_width;

/// Bottom row: a transient message when one is set, otherwise the
/// remaining-item count with key hints on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let palette = &app.palette;
    let mut spans: Vec<Span> = Vec::new();

    if let Some(message) = &app.status_message {
        let fg = if app.status_is_error {
            palette.error
        } else {
            palette.text
        };
        spans.push(Span::styled(
            format!(" {message}"),
            Style::default().fg(fg).bg(palette.background),
        ));
    } else {
        spans.push(Span::styled(
            format!(" {}", items_left(app)),
            Style::default().fg(palette.text).bg(palette.background),
        ));
        let hint = match app.mode {
            Mode::Navigate => "? help",
            Mode::Insert => "Enter add  Esc done",
            Mode::Edit => "Enter save  Esc cancel",
        };
        let gap = width.saturating_sub(text::width(hint) + 1);
        pad_to_width(&mut spans, gap, palette.background);
        spans.push(Span::styled(
            hint,
            Style::default().fg(palette.dim).bg(palette.background),
        ));
    }
    pad_to_width(&mut spans, width, palette.background);

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background));
    frame.render_widget(paragraph, area);
}

fn items_left(app: &App) -> String {
    let active = app.store.counts().active;
    if active == 1 {
        "1 item left".to_string()
    } else {
        format!("{active} items left")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};
    use insta::assert_snapshot;

    #[test]
    fn counts_active_items_with_hints() {
        let (app, _tmp) = test_app(&["one", "two"]);
        let out = render_to_string(30, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_snapshot!(out, @" 2 items left          ? help");
    }

    #[test]
    fn singular_for_one_remaining_item() {
        let (mut app, _tmp) = test_app(&["one", "two"]);
        app.store.toggle("t-2");
        let out = render_to_string(40, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.contains("1 item left"));
    }

    #[test]
    fn hints_follow_the_mode() {
        let (mut app, _tmp) = test_app(&["one"]);
        app.mode = Mode::Insert;
        let out = render_to_string(40, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.contains("Enter add  Esc done"));

        app.mode = Mode::Edit;
        let out = render_to_string(40, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.contains("Enter save  Esc cancel"));
    }

    #[test]
    fn a_message_replaces_the_count() {
        let (mut app, _tmp) = test_app(&["one"]);
        app.set_status("deleted");
        let out = render_to_string(40, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.contains("deleted"));
        assert!(!out.contains("item left"));
    }
}
