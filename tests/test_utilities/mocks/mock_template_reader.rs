use std::path::Path;
use stack_exports::prelude::*;

/// Mock TemplateReader serving a fixed template body
pub struct MockTemplateReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockTemplateReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl TemplateReader for MockTemplateReader {
    fn read_template(&self, _template_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock template read failure");
        }
        Ok(self.content.clone())
    }
}
