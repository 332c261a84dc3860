//! Plain text output for merge results.

use super::terminal::format_field;
use crate::processing::MergeOutcome;
use colored::Colorize;

/// One output token per line. With `color` on, the merged prefix is highlighted.
pub fn render_text(outcome: &MergeOutcome, color: bool) -> String {
    let merged = outcome.merged.to_string();
    let mut out = String::new();
    for (i, token) in outcome.output.iter().enumerate() {
        // the merged prefix is always the last one
        let is_merged = color && i + 1 == outcome.output.len() && *token == merged;
        if is_merged {
            out.push_str(&token.green().bold().to_string());
        } else {
            out.push_str(token);
        }
        out.push('\n');
    }
    out
}

/// Short human readable description of what was merged.
pub fn render_summary(outcome: &MergeOutcome) -> String {
    let [a, b] = &outcome.consumed;
    let width = 18;
    format!(
        "{} + {} -> {}  (literals={}, prefixes={})",
        format_field(a, width),
        format_field(b, width),
        format_field(outcome.merged, width),
        outcome.literals.len(),
        outcome.prefixes.len()
    )
}
