use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit a string into `max` cells, appending `…` if it had to be cut
pub fn clip(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if width(s) <= max {
        return s.to_string();
    }
    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for grapheme in s.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(grapheme);
    }
    out.push('\u{2026}');
    out
}

/// Start of the grapheme cluster before `at`; 0 when already at the start
pub fn prev_boundary(s: &str, at: usize) -> usize {
    let at = at.min(s.len());
    s[..at]
        .grapheme_indices(true)
        .last()
        .map_or(0, |(i, _)| i)
}

/// End of the grapheme cluster starting at `at`; `s.len()` when at the end
pub fn next_boundary(s: &str, at: usize) -> usize {
    let at = at.min(s.len());
    s[at..]
        .graphemes(true)
        .next()
        .map_or(at, |g| at + g.len())
}

/// Start of the whitespace-delimited word left of `at`
pub fn word_left(s: &str, at: usize) -> usize {
    let head = s[..at.min(s.len())].trim_end();
    head.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Start of the next word right of `at`; `s.len()` when none remains
pub fn word_right(s: &str, at: usize) -> usize {
    let at = at.min(s.len());
    let mut rest = s[at..].char_indices().skip_while(|(_, c)| !c.is_whitespace());
    match rest.find(|(_, c)| !c.is_whitespace()) {
        Some((i, _)) => at + i,
        None => s.len(),
    }
}
