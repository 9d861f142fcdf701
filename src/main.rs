use std::path::PathBuf;

use clap::Parser;
use todopad::model::ThemeMode;

#[derive(Parser)]
#[command(name = "td", about = concat!("[x] todopad v", env!("CARGO_PKG_VERSION"), " - your to-dos on one screen"), version)]
struct Cli {
    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Start with the given theme instead of the saved or detected one
    #[arg(long, value_name = "light|dark")]
    theme: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let theme = match cli.theme.as_deref() {
        None => None,
        Some(name) => match ThemeMode::from_name(name) {
            Some(mode) => Some(mode),
            None => {
                eprintln!("error: unknown theme {name:?} (expected light or dark)");
                std::process::exit(2);
            }
        },
    };

    if let Err(e) = todopad::tui::run(cli.data_dir.as_deref(), theme) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
