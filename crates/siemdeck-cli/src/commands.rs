//! One-shot subcommands

use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use siemdeck_core::analysis::AnalysisError;
use siemdeck_core::content::{alerts_newest_first, find_alert, MOCK_ALERTS};
use siemdeck_core::markup::{plain_text, resolve};
use siemdeck_core::{format, AnalysisClient, AnalysisOutcome, Block, Config};

/// Format a file (or stdin) and print the blocks
pub fn format_file(file: Option<&Path>, json: bool) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let blocks = format(&raw);
    tracing::debug!(blocks = blocks.len(), "Formatted input");
    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        print!("{}", blocks_to_text(&blocks));
    }
    Ok(())
}

pub fn list_alerts() {
    for alert in alerts_newest_first() {
        println!(
            "{:<10} {:<9} {:>5}m  {}",
            alert.id,
            alert.severity.label(),
            alert.minutes_ago,
            alert.title
        );
    }
}

/// Analyze one mock alert and print the outcome. Returns whether the
/// analysis succeeded.
pub async fn analyze(config: &Config, alert_id: &str) -> Result<bool> {
    let Some(alert) = find_alert(alert_id) else {
        let known: Vec<&str> = MOCK_ALERTS.iter().map(|a| a.id).collect();
        bail!("unknown alert '{}' (known: {})", alert_id, known.join(", "));
    };

    let client = AnalysisClient::from_config(config).context("failed to set up AI client")?;
    let timeout = Duration::from_secs(config.ai.timeout_secs);
    let result = tokio::time::timeout(timeout, client.analyze(alert.title, alert.description))
        .await
        .unwrap_or(Err(AnalysisError::TimedOut(config.ai.timeout_secs)));
    let outcome = AnalysisOutcome::from_result(result);

    println!("{} [{}] {}\n", alert.id, alert.severity.label(), alert.title);
    print!("{}", blocks_to_text(&format(outcome.text())));
    Ok(outcome.is_success())
}

/// Plain-text rendering: emphasis markers dropped, list markers kept
pub(crate) fn blocks_to_text(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let marks = "#".repeat(usize::from(*level));
                out.push_str(&format!("{} {}\n", marks, plain_text(&resolve(text))));
            }
            Block::Paragraph { text } => {
                out.push_str(&plain_text(&resolve(text)));
                out.push('\n');
            }
            Block::List { ordered, items } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}.", i + 1)
                    } else {
                        "-".to_string()
                    };
                    out.push_str(&format!("{} {}\n", marker, plain_text(&resolve(item))));
                }
            }
            Block::CodeBlock { text, .. } => {
                for line in text.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            Block::LineBreak => out.push('\n'),
        }
    }
    out
}
