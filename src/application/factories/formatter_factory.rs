use crate::adapters::outbound::formatters::{JsonTemplateFormatter, YamlTemplateFormatter};
use crate::application::dto::TemplateFormat;
use crate::ports::outbound::TemplateFormatter;

/// Factory for creating template formatters
///
/// Selects the formatter adapter for a template format. It belongs in the
/// application layer as it orchestrates the choice of infrastructure
/// adapters based on the request.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified template format
    ///
    /// # Examples
    /// ```
    /// use stack_exports::application::dto::TemplateFormat;
    /// use stack_exports::application::factories::FormatterFactory;
    /// use stack_exports::ports::outbound::TemplateFormatter;
    ///
    /// let formatter = FormatterFactory::create(TemplateFormat::Json);
    /// assert_eq!(formatter.format_name(), "JSON");
    /// ```
    pub fn create(format: TemplateFormat) -> Box<dyn TemplateFormatter> {
        match format {
            TemplateFormat::Yaml => Box::new(YamlTemplateFormatter::new()),
            TemplateFormat::Json => Box::new(JsonTemplateFormatter::new()),
        }
    }
}
