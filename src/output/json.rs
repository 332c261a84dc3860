//! JSON output for merge results.

use crate::processing::MergeOutcome;
use std::error::Error;

/// Render the whole outcome as pretty printed JSON.
pub fn render_json(outcome: &MergeOutcome) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(outcome)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}
