//! AI alert analysis
//!
//! An alert's title and description go to a text-generation backend; the
//! reply is classified into an [`AnalysisOutcome`] and rendered through the
//! markup formatter like any other content.

mod client;
mod gemini;
mod prompt;
mod session;
mod types;

pub use client::{AnalysisBackend, AnalysisClient};
pub use gemini::GeminiBackend;
pub use prompt::alert_prompt;
pub use session::{AnalysisSession, AnalysisState};
pub use types::{AnalysisError, AnalysisOutcome, API_KEY_HELP, UNAVAILABLE_MESSAGE};
