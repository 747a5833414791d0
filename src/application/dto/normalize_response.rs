use crate::output_normalization::domain::{NormalizationReport, StackTemplate};

/// NormalizeResponse - response DTO from the normalize-outputs use case
#[derive(Debug, Clone)]
pub struct NormalizeResponse {
    /// The normalized template
    pub template: StackTemplate,
    /// What the normalization pass did
    pub report: NormalizationReport,
    /// Whether the normalized document differs from the input
    pub changed: bool,
    /// Serialized template; `None` in check-only mode
    pub content: Option<String>,
}

impl NormalizeResponse {
    pub fn new(
        template: StackTemplate,
        report: NormalizationReport,
        changed: bool,
        content: Option<String>,
    ) -> Self {
        Self {
            template,
            report,
            changed,
            content,
        }
    }
}
