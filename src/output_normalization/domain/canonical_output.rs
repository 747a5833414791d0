use serde_yaml_ng::{Mapping, Value};

pub const VALUE_FIELD: &str = "Value";
pub const EXPORT_FIELD: &str = "Export";
pub const NAME_FIELD: &str = "Name";

/// Canonical output entry: `{ Value: any, Export?: { Name: string } }`
///
/// Entries the author already wrote in canonical form are kept verbatim so
/// that sibling fields such as `Description` or `Condition` survive.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalOutput {
    /// Author-supplied mapping containing `Value` and/or `Export`
    Declared(Mapping),
    /// Entry rewritten from a scalar or shorthand export declaration
    Generated {
        value: Value,
        export_name: Option<String>,
    },
}

impl CanonicalOutput {
    /// `{ Value: value }` without an export
    pub fn value(value: Value) -> Self {
        CanonicalOutput::Generated {
            value,
            export_name: None,
        }
    }

    /// `{ Export: { Name: name }, Value: value }`
    pub fn exported(name: impl Into<String>, value: Value) -> Self {
        CanonicalOutput::Generated {
            value,
            export_name: Some(name.into()),
        }
    }

    /// Returns true if the mapping already carries a `Value` or `Export` field
    pub fn is_canonical(mapping: &Mapping) -> bool {
        mapping.contains_key(VALUE_FIELD) || mapping.contains_key(EXPORT_FIELD)
    }

    /// Renders the entry back into a template node
    pub fn into_value(self) -> Value {
        match self {
            CanonicalOutput::Declared(mapping) => Value::Mapping(mapping),
            CanonicalOutput::Generated { value, export_name } => {
                let mut mapping = Mapping::new();
                if let Some(name) = export_name {
                    let mut export = Mapping::new();
                    export.insert(Value::from(NAME_FIELD), Value::String(name));
                    mapping.insert(Value::from(EXPORT_FIELD), Value::Mapping(export));
                }
                mapping.insert(Value::from(VALUE_FIELD), value);
                Value::Mapping(mapping)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml_ng::from_str(source).unwrap()
    }

    #[test]
    fn test_value_only_rendering() {
        let output = CanonicalOutput::value(Value::from("value"));
        assert_eq!(output.into_value(), yaml("Value: value"));
    }

    #[test]
    fn test_exported_rendering_puts_export_first() {
        let output = CanonicalOutput::exported("myKey", Value::from("myValue"));
        let rendered = output.into_value();
        assert_eq!(rendered, yaml("{ Export: { Name: myKey }, Value: myValue }"));

        let keys: Vec<_> = rendered
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, vec!["Export", "Value"]);
    }

    #[test]
    fn test_declared_is_rendered_verbatim() {
        let declared = yaml("{ Description: Queue arn, Value: arn, Condition: IsProd }");
        let output = CanonicalOutput::Declared(declared.as_mapping().unwrap().clone());
        assert_eq!(output.into_value(), declared);
    }

    #[test]
    fn test_is_canonical() {
        assert!(CanonicalOutput::is_canonical(
            yaml("{ Value: v }").as_mapping().unwrap()
        ));
        assert!(CanonicalOutput::is_canonical(
            yaml("{ Export: { Name: n } }").as_mapping().unwrap()
        ));
        assert!(!CanonicalOutput::is_canonical(
            yaml("{ myKey: myValue }").as_mapping().unwrap()
        ));
    }
}
