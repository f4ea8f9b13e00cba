//! siemdeck core library
//!
//! Markup formatting, static dashboard content, AI alert analysis and
//! configuration. The terminal UI lives in the `siemdeck` binary crate.

pub mod analysis;
pub mod config;
pub mod content;
pub mod icons;
pub mod markup;

pub use analysis::{AnalysisClient, AnalysisOutcome, AnalysisSession, AnalysisState};
pub use config::Config;
pub use markup::{format, Block, Inline};
