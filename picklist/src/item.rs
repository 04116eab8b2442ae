//! Option types for the picklist.

use serde::{Deserialize, Serialize};

/// One selectable entry owned by a picklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOption {
    /// Unique key within one picklist.
    pub value: String,
    /// Display text, also what filtering matches against.
    pub label: String,
    /// Mirrors membership in the multi-select selection.
    pub selected: bool,
    /// Derived from the current search text.
    pub visible: bool,
}

impl PickOption {
    /// Create an unselected, hidden option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
            visible: false,
        }
    }
}

/// An option as supplied by the host.
///
/// Only `value` and `label` are required. `selected` is accepted for shape
/// compatibility but the initial selection always comes from the config's
/// selected values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionInput {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(default, alias = "isVisible", skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl OptionInput {
    /// Create an option record with only the required fields.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: None,
            visible: None,
        }
    }
}

impl From<&OptionInput> for PickOption {
    fn from(input: &OptionInput) -> Self {
        Self {
            value: input.value.clone(),
            label: input.label.clone(),
            selected: false,
            visible: input.visible.unwrap_or(false),
        }
    }
}
