/// Light/dark display preference, persisted separately from task data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The literal written to storage
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored literal; anything else is treated as no preference
    pub fn from_name(name: &str) -> Option<ThemeMode> {
        match name.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Guess the terminal preference from the COLORFGBG convention,
    /// falling back to dark.
    pub fn detect() -> ThemeMode {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()).unwrap_or(ThemeMode::Dark)
    }

    /// COLORFGBG holds `;`-separated color indices, background last.
    /// Indices 0-6 and 8 are the dark half of the base palette.
    fn from_colorfgbg(value: Option<&str>) -> Option<ThemeMode> {
        let bg = value?.rsplit(';').next()?.trim().parse::<u8>().ok()?;
        Some(match bg {
            0..=6 | 8 => ThemeMode::Dark,
            _ => ThemeMode::Light,
        })
    }
}
