use super::canonical_output::CanonicalOutput;
use super::normalization_error::NormalizationError;
use super::output_key::OutputKey;
use serde_yaml_ng::Value;

/// A stack level output declaration as the author wrote it
///
/// The shape is decided once, by [`RawOutput::classify`], and every later
/// step works on the variant instead of re-inspecting the YAML node.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutput {
    /// Mapping that already contains `Value` and/or `Export`
    Canonical(serde_yaml_ng::Mapping),
    /// `{ exportName: exportValue }`
    ShorthandExport { name: String, value: Value },
    /// String, number, boolean or tagged intrinsic (`!Ref`, `!GetAtt`, ...)
    Scalar(Value),
    /// Sequences and nulls are never valid output declarations
    Unsupported,
}

impl RawOutput {
    /// Classifies the raw value declared under `key`
    ///
    /// # Errors
    /// Returns [`NormalizationError::Shape`] when a non-canonical mapping does
    /// not hold exactly one entry, or when its single key is not a scalar.
    pub fn classify(key: &str, raw: Value) -> Result<Self, NormalizationError> {
        match raw {
            Value::Mapping(mapping) if CanonicalOutput::is_canonical(&mapping) => {
                Ok(RawOutput::Canonical(mapping))
            }
            Value::Mapping(mapping) => {
                let found = mapping.len();
                let mut entries = mapping.into_iter();
                let (name, value) = match (entries.next(), entries.next()) {
                    (Some(entry), None) => entry,
                    _ => {
                        return Err(NormalizationError::Shape {
                            key: key.to_string(),
                            reason: format!("found {} key(s) in the export mapping", found),
                        })
                    }
                };
                let name = OutputKey::from_value(&name).ok_or_else(|| NormalizationError::Shape {
                    key: key.to_string(),
                    reason: format!(
                        "export name must be a string, got {}",
                        OutputKey::describe(&name)
                    ),
                })?;
                Ok(RawOutput::ShorthandExport {
                    name: name.into_string(),
                    value,
                })
            }
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Tagged(_) => {
                Ok(RawOutput::Scalar(raw))
            }
            Value::Sequence(_) | Value::Null => Ok(RawOutput::Unsupported),
        }
    }

    /// Rewrites the declaration into its canonical form
    ///
    /// # Returns
    /// `None` for unsupported declarations, which are dropped
    pub fn into_canonical(self) -> Option<CanonicalOutput> {
        match self {
            RawOutput::Canonical(mapping) => Some(CanonicalOutput::Declared(mapping)),
            RawOutput::ShorthandExport { name, value } => {
                Some(CanonicalOutput::exported(name, value))
            }
            RawOutput::Scalar(value) => Some(CanonicalOutput::value(value)),
            RawOutput::Unsupported => None,
        }
    }

    /// Returns true for shorthand exports whose name looks like a long-form
    /// intrinsic function (`Ref`, `Fn::GetAtt`, ...)
    pub fn has_intrinsic_export_name(&self) -> bool {
        match self {
            RawOutput::ShorthandExport { name, .. } => {
                name == "Ref" || name.starts_with("Fn::")
            }
            _ => false,
        }
    }
}
