//! Picklist configuration supplied by the host.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::item::{OptionInput, PickOption};
use crate::selection::SelectionMode;

/// Default number of typed characters before filtering kicks in.
pub const DEFAULT_MIN_CHARS: usize = 2;

/// Everything the host hands to a picklist in one initialization cycle.
///
/// Absent options or selections are valid and mean "empty". Host payloads
/// use camelCase keys; unknown keys are rejected so a misspelt setting
/// surfaces as [`ConfigError::Parse`] instead of being silently dropped.
///
/// # Example
///
/// ```
/// use picklist::config::PickListConfig;
///
/// let config = PickListConfig::new()
///     .options([("CA", "California"), ("TX", "Texas")])
///     .selected_values(["TX"])
///     .multi_select()
///     .field_name("State");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PickListConfig {
    /// Catalog in render order.
    pub options: Option<Vec<OptionInput>>,
    /// Initial selection in single-select mode.
    pub selected_value: Option<String>,
    /// Initial selection in multi-select mode.
    pub selected_values: Option<Vec<String>>,
    /// `"single"` or `"multi"`.
    pub mode: SelectionMode,
    /// Typed characters needed before filtering applies.
    pub min_chars: usize,
    /// Blocks browsing the full list.
    pub disabled: bool,
    /// Echoed back in every change notification.
    pub field_name: Option<String>,
    /// Label shown above the input.
    pub label: Option<String>,
    /// Display-only, not enforced.
    pub required: bool,
}

impl Default for PickListConfig {
    fn default() -> Self {
        Self {
            options: None,
            selected_value: None,
            selected_values: None,
            mode: SelectionMode::Single,
            min_chars: DEFAULT_MIN_CHARS,
            disabled: false,
            field_name: None,
            label: None,
            required: false,
        }
    }
}

impl PickListConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a host payload such as
    /// `{"options":[{"value":"CA","label":"California"}],"mode":"multi"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the option list from (value, label) pairs.
    pub fn options(
        mut self,
        options: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        self.options = Some(
            options
                .into_iter()
                .map(|(v, l)| OptionInput::new(v, l))
                .collect(),
        );
        self
    }

    /// Set the initial single-select value.
    pub fn selected_value(mut self, value: impl Into<String>) -> Self {
        self.selected_value = Some(value.into());
        self
    }

    /// Set the initial multi-select values.
    pub fn selected_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.selected_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the selection mode.
    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Switch to multi-select mode.
    pub fn multi_select(self) -> Self {
        self.mode(SelectionMode::Multi)
    }

    /// Set the filtering threshold.
    pub fn min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Mark the picklist as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the field identifier echoed in notifications.
    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    /// Set the label shown above the input.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the field as required (display only).
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Strict check of the option list.
    ///
    /// `initialize` does not require this; it drops the same entries instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, option) in self.options.iter().flatten().enumerate() {
            if option.value.is_empty() {
                return Err(ConfigError::EmptyValue { index });
            }
            if !seen.insert(option.value.as_str()) {
                return Err(ConfigError::duplicate_value(&option.value));
            }
        }
        Ok(())
    }

    /// Owned copies of the usable options, in host order.
    ///
    /// Entries with an empty or repeated value are skipped.
    pub(crate) fn build_options(&self) -> Vec<PickOption> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for (index, input) in self.options.iter().flatten().enumerate() {
            if input.value.is_empty() {
                log::warn!("PickListConfig: dropping option {} with empty value", index);
                continue;
            }
            if !seen.insert(input.value.as_str()) {
                log::warn!(
                    "PickListConfig: dropping duplicate option value={}",
                    input.value
                );
                continue;
            }
            options.push(PickOption::from(input));
        }
        options
    }
}
