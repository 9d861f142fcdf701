pub mod config;
pub mod task;
pub mod theme;

pub use config::*;
pub use task::*;
pub use theme::*;
