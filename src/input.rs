//! Reading allow-list tokens from text, files and stdin.

use regex::Regex;
use std::error::Error;
use std::path::Path;
use std::sync::OnceLock;

/// Separators between tokens: whitespace, commas and semicolons.
static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[\s,;]+").expect("Invalid Regex"))
}

/// Split raw allow-list text into tokens.
///
/// `#` starts a comment running to the end of the line. Surrounding quotes are
/// stripped and empty tokens dropped.
pub fn split_tokens(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(keep, _)| keep))
        .flat_map(|line| get_separator_regex().split(line))
        .map(|t| t.trim_matches('\'').trim_matches('"'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and split every file in `paths`, in order.
pub fn read_tokens<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>, Box<dyn Error>> {
    let mut tokens = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
        let found = split_tokens(&text);
        log::info!("Read {} token(s) from {}", found.len(), path.display());
        tokens.extend(found);
    }
    Ok(tokens)
}

/// Read and split all of stdin.
pub fn read_stdin_tokens() -> Result<Vec<String>, Box<dyn Error>> {
    let text = std::io::read_to_string(std::io::stdin())
        .map_err(|e| format!("Error reading stdin: {e}"))?;
    Ok(split_tokens(&text))
}
