//! In-memory message catalog.

use std::collections::HashMap;

use crate::traits::MessageTable;

/// Localized strings keyed by message id.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<u32, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a client message string table: one entry per line, id is the
    /// zero-based line number, and each entry ends with a `#` terminator.
    pub fn from_msgstringtable(text: &str) -> Self {
        let messages = text
            .lines()
            .enumerate()
            .map(|(id, line)| {
                let line = line.strip_suffix('\r').unwrap_or(line);
                let entry = line.strip_suffix('#').unwrap_or(line);
                (id as u32, entry.to_string())
            })
            .collect();
        Self { messages }
    }

    pub fn insert(&mut self, id: u32, text: impl Into<String>) {
        self.messages.insert(id, text.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<(u32, String)> for MessageCatalog {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl MessageTable for MessageCatalog {
    fn lookup(&self, id: u32) -> Option<String> {
        self.messages.get(&id).cloned()
    }
}
