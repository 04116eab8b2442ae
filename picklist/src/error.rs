//! Error types for the host configuration boundary.

/// Error produced while reading or checking a host-supplied configuration.
///
/// Widget operations themselves never fail; this only surfaces where the
/// host hands over loosely-typed data.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The payload is not a valid picklist configuration.
    #[error("Invalid picklist configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// An option has an empty value and could never be selected.
    #[error("Option at index {index} has an empty value")]
    EmptyValue { index: usize },

    /// Two options share the same value.
    #[error("Option value '{value}' is not unique")]
    DuplicateValue { value: String },
}

impl ConfigError {
    /// Creates a duplicate value error.
    pub fn duplicate_value(value: impl Into<String>) -> Self {
        Self::DuplicateValue {
            value: value.into(),
        }
    }
}
