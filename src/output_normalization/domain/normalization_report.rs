/// Summary of what a normalization pass did to the template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    /// Stack level outputs that were already canonical
    pub passed_through: usize,
    /// Stack level `{ exportName: value }` declarations rewritten with an export
    pub shorthand_exports: usize,
    /// Stack level scalars wrapped into `{ Value }`
    pub scalars: usize,
    /// Stack level keys dropped because their value was a sequence or null
    pub skipped: Vec<String>,
    /// Outputs collected from resource annotations
    pub resource_outputs: usize,
    /// Logical ids of resources whose `Outputs` annotation was removed
    pub stripped_resources: Vec<String>,
    /// Output keys whose shorthand export name looks like an intrinsic function
    pub intrinsic_export_names: Vec<String>,
}

impl NormalizationReport {
    /// Number of entries in the installed `Outputs` block
    pub fn total_outputs(&self) -> usize {
        self.passed_through + self.shorthand_exports + self.scalars + self.resource_outputs
    }

    /// Number of entries that were rewritten rather than passed through
    pub fn rewritten(&self) -> usize {
        self.shorthand_exports + self.scalars + self.resource_outputs
    }
}
