//! Output formatting for human and JSON modes
//!
//! Listings are rendered either as a one-line human summary or as
//! pretty-printed JSON objects, one per stage.

use serde::Serialize;

use crate::models::Fixlet;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// The collection as read back after one step of the demonstration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// Step that preceded the read, e.g. "creation"
    pub stage: String,
    /// Fixlets in stored order
    pub fixlets: Vec<Fixlet>,
}

impl Listing {
    /// Create a listing for `stage`
    #[must_use]
    pub fn new(stage: impl Into<String>, fixlets: Vec<Fixlet>) -> Self {
        Self {
            stage: stage.into(),
            fixlets,
        }
    }

    /// Format the listing for the given mode
    pub fn format(&self, mode: OutputMode) -> serde_json::Result<String> {
        match mode {
            OutputMode::Human => Ok(self.format_human()),
            OutputMode::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Render the listing to stdout
    ///
    /// A listing that cannot be serialized is logged instead of printed.
    pub fn render(&self, mode: OutputMode) {
        match self.format(mode) {
            Ok(text) => println!("{text}"),
            Err(err) => log::error!("failed to render listing after {}: {err}", self.stage),
        }
    }

    fn format_human(&self) -> String {
        let items: Vec<String> = self.fixlets.iter().map(ToString::to_string).collect();
        format!("Fixlets after {}: [{}]", self.stage, items.join(" "))
    }
}
