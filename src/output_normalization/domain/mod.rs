pub mod canonical_output;
pub mod normalization_error;
pub mod normalization_report;
pub mod output_key;
pub mod output_set;
pub mod raw_output;
pub mod resource_output;
pub mod stack_template;

pub use canonical_output::CanonicalOutput;
pub use normalization_error::NormalizationError;
pub use normalization_report::NormalizationReport;
pub use output_key::OutputKey;
pub use output_set::OutputSet;
pub use raw_output::RawOutput;
pub use resource_output::ResourceOutput;
pub use stack_template::StackTemplate;
