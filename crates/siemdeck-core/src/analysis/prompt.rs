//! Prompt sent for a single alert

/// Build the analyst prompt for an alert's title and description
pub fn alert_prompt(title: &str, description: &str) -> String {
    format!(
        "You are a helpful security analyst assistant. Provide a concise analysis for the following security alert.
Focus on:
1. A brief explanation of what this alert type generally means.
2. Potential impact or risks.
3. Recommended initial investigation steps for a SOC analyst (2-3 actionable bullet points).
Keep the response clear, professional, and brief (around 100-150 words).

Alert Title: \"{title}\"
Alert Description: \"{description}\"

Analysis:"
    )
}
