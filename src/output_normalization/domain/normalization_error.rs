use thiserror::Error;

/// Errors raised while normalizing output declarations.
///
/// Both variants are fatal for the current packaging attempt: no partial
/// `Outputs` block is ever installed when one of them is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// A stack level output is a mapping that is neither canonical nor a
    /// single `exportName: value` pair.
    #[error("Expected single key value pair to export for output '{key}'\nReason: {reason}\n\n💡 Hint: Use either `{key}: {{ ExportName: value }}` or the canonical `{{ Value, Export }}` form")]
    Shape { key: String, reason: String },

    /// The same output key is declared twice across the stack and its resources.
    #[error("Duplicate export key '{key}'\n\n💡 Hint: Output keys must be unique across the stack level Outputs and every resource's Outputs")]
    DuplicateKey { key: String },
}

impl NormalizationError {
    /// The output key the error refers to
    pub fn key(&self) -> &str {
        match self {
            NormalizationError::Shape { key, .. } | NormalizationError::DuplicateKey { key } => {
                key
            }
        }
    }
}
