use super::canonical_output::CanonicalOutput;
use serde_yaml_ng::Value;

/// One output declared inside a resource's non-standard `Outputs` annotation
///
/// Resource level outputs have no export shorthand: the value is always
/// taken as-is and wrapped into `{ Value: value }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceOutput {
    pub key: String,
    pub value: Value,
}

impl ResourceOutput {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn into_canonical(self) -> CanonicalOutput {
        CanonicalOutput::value(self.value)
    }
}
