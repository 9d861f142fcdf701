use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::config::ColorOverrides;
use crate::model::theme::ThemeMode;

/// Resolved colors for one theme mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub done: Color,
    pub error: Color,
    pub selection_bg: Color,
}

impl Palette {
    fn dark() -> Self {
        Palette {
            background: Color::Rgb(0x12, 0x16, 0x1F),
            text: Color::Rgb(0xC6, 0xCD, 0xD9),
            text_bright: Color::Rgb(0xF4, 0xF6, 0xFA),
            dim: Color::Rgb(0x5E, 0x68, 0x7A),
            accent: Color::Rgb(0x5D, 0xB2, 0xFF),
            done: Color::Rgb(0x74, 0xC9, 0x7C),
            error: Color::Rgb(0xE8, 0x6A, 0x6A),
            selection_bg: Color::Rgb(0x26, 0x30, 0x42),
        }
    }

    fn light() -> Self {
        Palette {
            background: Color::Rgb(0xFA, 0xF8, 0xF2),
            text: Color::Rgb(0x3A, 0x40, 0x4C),
            text_bright: Color::Rgb(0x14, 0x18, 0x20),
            dim: Color::Rgb(0x9B, 0xA1, 0xAD),
            accent: Color::Rgb(0x1A, 0x6F, 0xC4),
            done: Color::Rgb(0x3E, 0x8E, 0x49),
            error: Color::Rgb(0xC0, 0x3A, 0x3A),
            selection_bg: Color::Rgb(0xE4, 0xE9, 0xF2),
        }
    }

    /// Resolve the palette for `mode` with config hex overrides applied
    pub fn for_mode(mode: ThemeMode, overrides: &ColorOverrides) -> Self {
        let (mut palette, table) = match mode {
            ThemeMode::Dark => (Palette::dark(), &overrides.dark),
            ThemeMode::Light => (Palette::light(), &overrides.light),
        };
        palette.apply(table);
        palette
    }

    fn apply(&mut self, table: &HashMap<String, String>) {
        for (key, value) in table {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => self.background = color,
                    "text" => self.text = color,
                    "text_bright" => self.text_bright = color,
                    "dim" => self.dim = color,
                    "accent" => self.accent = color,
                    "done" => self.done = color,
                    "error" => self.error = color,
                    "selection_bg" => self.selection_bg = color,
                    _ => {}
                }
            }
        }
    }
}

/// Parse "#RRGGBB" into an RGB color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let n = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb((n >> 16) as u8, (n >> 8) as u8, n as u8))
}
