//! Markup formatting for the markdown subset shown in the dashboard
//!
//! One formatter serves every call site: AI analysis text, runbook
//! sections, and snippet descriptions. Formatting produces [`Block`]s;
//! inline emphasis is resolved separately at render time via [`resolve`].

mod elements;
mod formatter;
pub mod inline;

pub use elements::{Block, Inline};
pub use formatter::format;
pub use inline::{plain_text, resolve};
