use serde_yaml_ng::Value;

/// NewType wrapper for an output (or resource) logical id
///
/// YAML allows any node as a mapping key while CloudFormation only knows
/// string ids, so numeric and boolean keys are stringified and every other
/// key shape is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputKey(String);

impl OutputKey {
    /// Converts a YAML mapping key into an output key
    ///
    /// # Returns
    /// `None` when the key is not a string, number or boolean
    pub fn from_value(key: &Value) -> Option<Self> {
        match key {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            Value::Bool(b) => Some(Self(b.to_string())),
            _ => None,
        }
    }

    /// Best-effort label used in messages for keys that cannot be converted
    pub fn describe(key: &Value) -> String {
        Self::from_value(key)
            .map(Self::into_string)
            .unwrap_or_else(|| format!("{:?}", key))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
