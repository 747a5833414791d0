use crate::ports::outbound::TemplateFormatter;
use crate::shared::error::ExportsError;
use crate::shared::Result;
use serde_yaml_ng::value::TaggedValue;
use serde_yaml_ng::{Mapping, Value};

/// JSON template formatter
///
/// JSON has no tags, so short-form intrinsics coming from a YAML source are
/// rewritten into their long form (`!Ref X` becomes `{"Ref": "X"}`,
/// `!GetAtt A.B` becomes `{"Fn::GetAtt": ["A", "B"]}`) before serializing.
pub struct JsonTemplateFormatter;

impl JsonTemplateFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonTemplateFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateFormatter for JsonTemplateFormatter {
    fn format_name(&self) -> &'static str {
        "JSON"
    }

    fn parse(&self, content: &str) -> Result<Value> {
        if content.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(content)?)
    }

    fn format(&self, document: &Value) -> Result<String> {
        let document = expand_intrinsics(document.clone());
        let mut output = serde_json::to_string_pretty(&document).map_err(|e| {
            ExportsError::SerializationError {
                format: self.format_name().to_string(),
                details: e.to_string(),
            }
        })?;
        output.push('\n');
        Ok(output)
    }
}

fn expand_intrinsics(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => long_form(*tagged),
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(expand_intrinsics).collect()),
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .map(|(key, value)| (key, expand_intrinsics(value)))
                .collect(),
        ),
        other => other,
    }
}

fn long_form(tagged: TaggedValue) -> Value {
    let tag = tagged.tag.to_string();
    let name = tag.trim_start_matches('!');
    let value = expand_intrinsics(tagged.value);

    let (function, argument) = match (name, value) {
        ("Ref", value) | ("Condition", value) => (name.to_string(), value),
        ("GetAtt", Value::String(path)) => {
            let argument = match path.split_once('.') {
                Some((resource, attribute)) => Value::Sequence(vec![
                    Value::from(resource),
                    Value::from(attribute),
                ]),
                None => Value::String(path),
            };
            ("Fn::GetAtt".to_string(), argument)
        }
        (name, value) => (format!("Fn::{}", name), value),
    };

    let mut mapping = Mapping::new();
    mapping.insert(Value::String(function), argument);
    Value::Mapping(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml_ng::from_str(source).unwrap()
    }

    #[test]
    fn test_parse_json_template() {
        let formatter = JsonTemplateFormatter::new();
        let document = formatter
            .parse(r#"{"Outputs": {"key": "value"}, "Resources": {}}"#)
            .unwrap();
        assert_eq!(document, yaml("{ Outputs: { key: value }, Resources: {} }"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let formatter = JsonTemplateFormatter::new();
        assert!(formatter.parse("{ not json").is_err());
    }

    #[test]
    fn test_format_preserves_key_order() {
        let formatter = JsonTemplateFormatter::new();
        let document = formatter.parse(r#"{"b": 1, "a": {"Export": {"Name": "n"}, "Value": "v"}}"#).unwrap();
        let output = formatter.format(&document).unwrap();

        let b = output.find("\"b\"").unwrap();
        let a = output.find("\"a\"").unwrap();
        let export = output.find("\"Export\"").unwrap();
        let value = output.find("\"Value\"").unwrap();
        assert!(b < a);
        assert!(export < value);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_format_expands_short_form_intrinsics() {
        let formatter = JsonTemplateFormatter::new();
        let document = yaml(
            r#"
Outputs:
  queueArn:
    Value: !GetAtt Queue.Arn
  queueUrl:
    Value: !Ref Queue
  topic:
    Value: !Sub "${AWS::StackName}-topic"
"#,
        );

        let output = formatter.format(&document).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            parsed["Outputs"]["queueArn"]["Value"],
            serde_json::json!({ "Fn::GetAtt": ["Queue", "Arn"] })
        );
        assert_eq!(
            parsed["Outputs"]["queueUrl"]["Value"],
            serde_json::json!({ "Ref": "Queue" })
        );
        assert_eq!(
            parsed["Outputs"]["topic"]["Value"],
            serde_json::json!({ "Fn::Sub": "${AWS::StackName}-topic" })
        );
    }

    #[test]
    fn test_format_nested_intrinsics() {
        let document = yaml("Value: !Join ['', [!Ref Bucket, '/path']]");
        let expanded = expand_intrinsics(document);
        assert_eq!(
            expanded,
            yaml("Value: { 'Fn::Join': ['', [{ Ref: Bucket }, '/path']] }")
        );
    }
}
