use crate::ports::outbound::TemplateReader;
use crate::shared::error::ExportsError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading templates from the file system
///
/// Reads are guarded by the shared security checks: symbolic links,
/// non-regular files and oversized files are rejected before any content
/// is loaded.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateReader for FileSystemReader {
    fn read_template(&self, template_path: &Path) -> Result<String> {
        if !template_path.exists() {
            return Err(ExportsError::TemplateNotFound {
                path: template_path.to_path_buf(),
                suggestion: "Check the path passed on the command line. \
                     Templates are usually named serverless.yml, template.yaml or template.json."
                    .to_string(),
            }
            .into());
        }

        validate_regular_file(template_path, "template")?;

        fs::read_to_string(template_path).map_err(|e| {
            ExportsError::FileReadError {
                path: template_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
