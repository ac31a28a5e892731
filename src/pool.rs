//! Suggestion pool
//!
//! The fixed, ordered list of candidates a [`MultiSelect`](crate::select::MultiSelect)
//! filters. The pool never changes after construction.

pub mod reader;

/// Ordered, immutable list of suggestion strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionPool {
    items: Vec<String>,
}

impl SuggestionPool {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Build a pool from newline separated text.
    ///
    /// Lines are trimmed and blank lines skipped. Order and duplicates are kept.
    pub fn from_lines(text: &str) -> Self {
        let items = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { items }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<String>> for SuggestionPool {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<&[&str]> for SuggestionPool {
    fn from(items: &[&str]) -> Self {
        Self::new(items.iter().map(|s| s.to_string()).collect())
    }
}
