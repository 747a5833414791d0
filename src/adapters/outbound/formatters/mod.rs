/// Template formatters for the supported serialization formats
mod json_formatter;
mod yaml_formatter;

pub use json_formatter::JsonTemplateFormatter;
pub use yaml_formatter::YamlTemplateFormatter;
