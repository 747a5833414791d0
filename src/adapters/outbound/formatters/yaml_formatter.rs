use crate::ports::outbound::TemplateFormatter;
use crate::shared::error::ExportsError;
use crate::shared::Result;
use serde_yaml_ng::Value;

/// YAML template formatter
///
/// Short-form intrinsic tags (`!Ref`, `!GetAtt`, `!Sub`, ...) are kept as
/// tagged values and written back unchanged.
pub struct YamlTemplateFormatter;

impl YamlTemplateFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlTemplateFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateFormatter for YamlTemplateFormatter {
    fn format_name(&self) -> &'static str {
        "YAML"
    }

    fn parse(&self, content: &str) -> Result<Value> {
        if content.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }

    fn format(&self, document: &Value) -> Result<String> {
        serde_yaml_ng::to_string(document).map_err(|e| {
            ExportsError::SerializationError {
                format: self.format_name().to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
