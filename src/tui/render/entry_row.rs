use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::pad_to_width;

const PROMPT: &str = " \u{276F} ";
const PLACEHOLDER: &str = "What needs to be done?";

/// Render the entry row: live input in Insert mode, a dim placeholder
/// otherwise
pub fn render_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.palette.background;

    let mut spans: Vec<Span> = Vec::new();
    if app.mode == Mode::Insert {
        let caret = app.caret.min(app.entry.len());
        let input_style = Style::default().fg(app.palette.text_bright).bg(bg);
        spans.push(Span::styled(
            PROMPT,
            Style::default().fg(app.palette.accent).bg(bg),
        ));
        spans.push(Span::styled(app.entry[..caret].to_string(), input_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.palette.accent).bg(bg),
        ));
        spans.push(Span::styled(app.entry[caret..].to_string(), input_style));
    } else {
        let dim = Style::default().fg(app.palette.dim).bg(bg);
        spans.push(Span::styled(PROMPT, dim));
        spans.push(Span::styled(PLACEHOLDER, dim));
    }
    pad_to_width(&mut spans, area.width as usize, bg);

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_W, render_to_string, test_app};

    #[test]
    fn shows_the_placeholder_outside_insert_mode() {
        let (app, _tmp) = test_app(&["one"]);

        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_entry_row(frame, &app, area);
        });
        insta::assert_snapshot!(out, @" ❯ What needs to be done?");
    }

    #[test]
    fn shows_typed_text_with_the_caret_block() {
        let (mut app, _tmp) = test_app(&[]);
        app.mode = Mode::Insert;
        app.entry = "Buy milk".to_string();
        app.caret = app.entry.len();

        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_entry_row(frame, &app, area);
        });
        insta::assert_snapshot!(out, @" ❯ Buy milk▌");
    }

    #[test]
    fn caret_block_splits_the_text_mid_buffer() {
        let (mut app, _tmp) = test_app(&[]);
        app.mode = Mode::Insert;
        app.entry = "Buy milk".to_string();
        app.caret = 3;

        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_entry_row(frame, &app, area);
        });
        insta::assert_snapshot!(out, @" ❯ Buy▌ milk");
    }
}
