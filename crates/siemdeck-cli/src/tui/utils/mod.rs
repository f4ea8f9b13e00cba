//! TUI utilities

pub mod text;

pub use text::{display_width, truncate_to_width};
