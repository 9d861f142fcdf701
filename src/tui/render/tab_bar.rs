use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::{Counts, Filter};
use crate::tui::app::App;

use super::pad_to_width;

/// Render the tab bar: one tab per filter with its live count, and the
/// separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let counts = app.store.counts();
    let bg_style = Style::default().bg(app.palette.background);
    let sep = Span::styled(
        "\u{2502}",
        Style::default()
            .fg(app.palette.dim)
            .bg(app.palette.background),
    );

    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();

    // Leading mark
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{2713}",
        Style::default()
            .fg(app.palette.accent)
            .bg(app.palette.background),
    ));
    spans.push(Span::styled(" ", bg_style));

    for filter in Filter::ORDER {
        let style = tab_style(app, filter == app.filter);
        spans.push(Span::styled(
            format!(" {} {} ", filter.label(), tab_count(counts, filter)),
            style,
        ));
        sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
        spans.push(sep.clone());
    }

    pad_to_width(&mut spans, area.width as usize, app.palette.background);
    let tabs = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(tabs, area);
    sep_cols
}

fn tab_count(counts: Counts, filter: Filter) -> usize {
    match filter {
        Filter::All => counts.total,
        Filter::Active => counts.active,
        Filter::Completed => counts.completed,
    }
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let mut line = String::with_capacity(width * 3);
    for col in 0..width {
        if sep_cols.contains(&col) {
            line.push('\u{2534}');
        } else {
            line.push('\u{2500}');
        }
    }
    let sep_widget = Paragraph::new(line).style(
        Style::default()
            .fg(app.palette.dim)
            .bg(app.palette.background),
    );
    frame.render_widget(sep_widget, area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.palette.text_bright)
            .bg(app.palette.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(app.palette.text)
            .bg(app.palette.background)
    }
}
