//! stack-exports - normalize CloudFormation Outputs before packaging
//!
//! Outputs can be declared informally, either at stack level
//! (`Outputs: { queueUrl: !Ref Queue }`, `Outputs: { arn: { shared-name: value } }`)
//! or inside a resource (`Resources.Queue.Outputs`). This library rewrites
//! all of them into one canonical `Outputs` block of `{ Value, Export }`
//! entries, removes the resource level annotations and rejects duplicate
//! keys.
//!
//! # Architecture
//!
//! - **Domain Layer** (`output_normalization`): the normalizer and its value types
//! - **Application Layer** (`application`): use case, lifecycle hooks, DTOs, factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): file system, console and YAML/JSON formatters
//! - **Shared** (`shared`): error types and security checks
//!
//! # Example
//!
//! ```
//! use stack_exports::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let document = serde_yaml_ng::from_str(
//!     "Resources:\n  Queue:\n    Type: AWS::SQS::Queue\n    Outputs:\n      queueUrl: !Ref Queue\n",
//! )?;
//! let mut template = StackTemplate::new(document);
//!
//! let report = OutputNormalizer::new().apply(&mut template)?;
//! assert_eq!(report.resource_outputs, 1);
//! assert!(template.resources().unwrap()["Queue"].get("Outputs").is_none());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod output_normalization;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonTemplateFormatter, YamlTemplateFormatter};
    pub use crate::application::dto::{NormalizeRequest, NormalizeResponse, TemplateFormat};
    pub use crate::application::factories::{
        FormatterFactory, PresenterFactory, PresenterType,
    };
    pub use crate::application::lifecycle::{ExportsPlugin, LifecycleHook};
    pub use crate::application::use_cases::NormalizeOutputsUseCase;
    pub use crate::output_normalization::domain::{
        CanonicalOutput, NormalizationError, NormalizationReport, OutputSet, RawOutput,
        ResourceOutput, StackTemplate,
    };
    pub use crate::output_normalization::services::OutputNormalizer;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, TemplateFormatter, TemplateReader,
    };
    pub use crate::shared::error::{ExitCode, ExportsError};
    pub use crate::shared::Result;
}
