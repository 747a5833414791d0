use super::TemplateFormat;
use std::path::PathBuf;

/// NormalizeRequest - request DTO for the normalize-outputs use case
#[derive(Debug, Clone)]
pub struct NormalizeRequest {
    /// Path to the template file
    pub template_path: PathBuf,
    /// Format of the serialized result; the input format follows the file extension
    pub format: TemplateFormat,
    /// Top-level key holding `Resources`/`Outputs`; `None` for the document root
    pub section: Option<String>,
    /// Validate only; no serialized template is produced
    pub check_only: bool,
}

impl NormalizeRequest {
    pub fn new(template_path: PathBuf, format: TemplateFormat) -> Self {
        Self {
            template_path,
            format,
            section: None,
            check_only: false,
        }
    }

    pub fn with_section(mut self, section: Option<String>) -> Self {
        self.section = section;
        self
    }

    pub fn with_check_only(mut self, check_only: bool) -> Self {
        self.check_only = check_only;
        self
    }
}
