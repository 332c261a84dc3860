//! Output formatting for merge results.
//!
//! - [`text`] - one token per line, plus a short summary
//! - [`json`] - machine readable document
//! - [`terminal`] - field formatting helpers

mod json;
mod terminal;
mod text;

pub use json::render_json;
pub use terminal::format_field;
pub use text::{render_summary, render_text};
