//! Selection mode and the ordered multi-select value set.

use serde::{Deserialize, Serialize};

/// Selection mode for a picklist, fixed per initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// One value, tracked directly (radio-button style).
    #[default]
    Single,
    /// Any number of values, shown as pills (checkbox style).
    Multi,
}

impl SelectionMode {
    /// Check if this is multi-select mode.
    pub fn is_multi(self) -> bool {
        matches!(self, SelectionMode::Multi)
    }
}

/// Selected values in the order they were picked.
///
/// Pill order follows insertion order, so this is a `Vec` with set
/// semantics rather than a `HashSet`. Option lists are small.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSelection {
    values: Vec<String>,
}

impl MultiSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a value. Returns true if the value is now selected.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.remove(value) {
            false
        } else {
            self.values.push(value.to_string());
            true
        }
    }

    /// Insert a value. Returns false if it was already present.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.contains(value) {
            return false;
        }
        self.values.push(value.to_string());
        true
    }

    /// Remove a value. Returns true if it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check if a value is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Selected values in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Owned copy of the selected values.
    pub fn to_vec(&self) -> Vec<String> {
        self.values.clone()
    }
}
