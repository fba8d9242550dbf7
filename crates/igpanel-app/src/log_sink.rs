//! Per-page log buffer
//!
//! Entries accumulate without bound for the life of the page. Every append
//! snaps the view back to the newest line, even if the operator had
//! scrolled back.

use igpanel_core::{LogEntry, Severity};

use crate::log_view_state::LogViewState;

/// What to show instead of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Nothing received yet on this page
    Empty,
    /// The operator cleared the log
    Cleared,
}

impl Placeholder {
    pub fn text(&self) -> &'static str {
        match self {
            Placeholder::Empty => "Waiting for log output...",
            Placeholder::Cleared => "Log cleared",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogSink {
    entries: Vec<LogEntry>,
    placeholder: Option<Placeholder>,
    pub view: LogViewState,
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            placeholder: Some(Placeholder::Empty),
            view: LogViewState::new(),
        }
    }

    /// Add an entry at the end and follow it
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        self.placeholder = None;
        let visible = self.view.visible_lines;
        self.view.update_content_size(self.entries.len(), visible);
        self.view.scroll_to_bottom();
    }

    /// Classify and append a raw backend line
    pub fn append_line(&mut self, line: &str) -> &LogEntry {
        self.append(LogEntry::from_line(line));
        &self.entries[self.entries.len() - 1]
    }

    /// Drop all entries and show the "cleared" indicator
    pub fn clear(&mut self) {
        self.entries.clear();
        self.placeholder = Some(Placeholder::Cleared);
        self.view.reset();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries together with the scroll state, for rendering
    pub fn view_parts(&mut self) -> (&[LogEntry], &mut LogViewState) {
        (&self.entries, &mut self.view)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        self.placeholder
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|e| e.severity == severity)
            .count()
    }
}
