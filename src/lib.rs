//! todopad: a single-screen to-do list for the terminal.

pub mod io;
pub mod model;
pub mod store;
pub mod tui;
pub mod util;
