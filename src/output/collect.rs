//! In-memory sink

use std::io;

use crate::tree::{PathEntry, WalkOutput};

/// Keeps every entry in the order the walker emitted it.
#[derive(Debug, Default)]
pub struct EntryCollector {
    entries: Vec<PathEntry>,
}

impl EntryCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<PathEntry> {
        self.entries
    }
}

impl WalkOutput for EntryCollector {
    fn output_entry(&mut self, entry: &PathEntry) -> io::Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}
