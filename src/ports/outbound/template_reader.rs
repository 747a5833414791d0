use crate::shared::Result;
use std::path::Path;

/// TemplateReader port for loading raw template text
///
/// This port abstracts the file system operations needed to read a stack
/// template (CloudFormation template or framework configuration file).
pub trait TemplateReader {
    /// Reads the template at the given path
    ///
    /// # Returns
    /// The raw template content
    ///
    /// # Errors
    /// Returns an error if:
    /// - The template file does not exist
    /// - The file cannot be read due to permissions, size limits or I/O errors
    fn read_template(&self, template_path: &Path) -> Result<String>;
}
