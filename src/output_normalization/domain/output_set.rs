use super::canonical_output::CanonicalOutput;
use super::normalization_error::NormalizationError;
use serde_yaml_ng::{Mapping, Value};
use std::collections::HashMap;

/// Ordered collection of canonical outputs with unique keys
///
/// Keeps declaration order so the installed `Outputs` block reads in the
/// same order the author wrote it, stack level entries first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputSet {
    entries: Vec<(String, CanonicalOutput)>,
    index: HashMap<String, usize>,
}

impl OutputSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an output, refusing to overwrite an existing key
    ///
    /// # Errors
    /// Returns [`NormalizationError::DuplicateKey`] if `key` is already present
    pub fn insert_unique(
        &mut self,
        key: impl Into<String>,
        output: CanonicalOutput,
    ) -> Result<(), NormalizationError> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(NormalizationError::DuplicateKey { key });
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, output));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the set as the template's `Outputs` mapping
    pub fn into_mapping(self) -> Mapping {
        self.entries
            .into_iter()
            .map(|(key, output)| (Value::String(key), output.into_value()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(mapping: &Mapping) -> Vec<&str> {
        mapping.keys().filter_map(Value::as_str).collect()
    }

    #[test]
    fn test_duplicate_key_rejected_and_first_entry_kept() {
        let mut set = OutputSet::new();
        set.insert_unique("key", CanonicalOutput::value(Value::from("first")))
            .unwrap();

        let err = set
            .insert_unique("key", CanonicalOutput::value(Value::from("second")))
            .unwrap_err();

        assert_eq!(
            err,
            NormalizationError::DuplicateKey {
                key: "key".to_string()
            }
        );

        let mapping = set.into_mapping();
        assert_eq!(keys(&mapping), vec!["key"]);
        assert_eq!(mapping["key"]["Value"], Value::from("first"));
    }

    #[test]
    fn test_into_mapping_preserves_insertion_order() {
        let mut set = OutputSet::new();
        for key in ["zeta", "alpha", "mid"] {
            set.insert_unique(key, CanonicalOutput::value(Value::from(key)))
                .unwrap();
        }

        let mapping = set.into_mapping();
        assert_eq!(keys(&mapping), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_set() {
        let set = OutputSet::new();
        assert!(set.is_empty());
        assert!(set.into_mapping().is_empty());
    }
}
