use crate::shared::Result;
use serde_yaml_ng::Value;

/// TemplateFormatter port for converting between template text and the
/// in-memory template model
pub trait TemplateFormatter {
    /// Human-readable name of the serialization format ("YAML", "JSON")
    fn format_name(&self) -> &'static str;

    /// Parses template text into a document
    ///
    /// # Errors
    /// Returns an error if the text is not valid for this format
    fn parse(&self, content: &str) -> Result<Value>;

    /// Serializes a document back into template text
    ///
    /// # Errors
    /// Returns an error if the document cannot be represented in this format
    fn format(&self, document: &Value) -> Result<String>;
}

impl<T: TemplateFormatter + ?Sized> TemplateFormatter for Box<T> {
    fn format_name(&self) -> &'static str {
        (**self).format_name()
    }

    fn parse(&self, content: &str) -> Result<Value> {
        (**self).parse(content)
    }

    fn format(&self, document: &Value) -> Result<String> {
        (**self).format(document)
    }
}
