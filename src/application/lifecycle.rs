use crate::output_normalization::domain::{NormalizationError, NormalizationReport, StackTemplate};
use crate::output_normalization::services::OutputNormalizer;
use crate::ports::outbound::ProgressReporter;
use serde_yaml_ng::Value;

/// Packaging lifecycle events the exports plugin is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleHook {
    /// `initialize`: outputs are normalized here, before packaging starts
    Initialize,
    /// `before:package:initialize`: diagnostics only
    BeforePackageInitialize,
    /// `after:package:initialize`: diagnostics only
    AfterPackageInitialize,
}

impl LifecycleHook {
    /// Hooks in the order a packaging run fires them
    pub const ALL: [LifecycleHook; 3] = [
        LifecycleHook::Initialize,
        LifecycleHook::BeforePackageInitialize,
        LifecycleHook::AfterPackageInitialize,
    ];

    /// The host event name the hook is registered under
    pub fn event_name(&self) -> &'static str {
        match self {
            LifecycleHook::Initialize => "initialize",
            LifecycleHook::BeforePackageInitialize => "before:package:initialize",
            LifecycleHook::AfterPackageInitialize => "after:package:initialize",
        }
    }
}

impl std::str::FromStr for LifecycleHook {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleHook::ALL
            .into_iter()
            .find(|hook| hook.event_name() == s)
            .ok_or_else(|| format!("Unknown lifecycle event: {}", s))
    }
}

impl std::fmt::Display for LifecycleHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.event_name())
    }
}

/// ExportsPlugin - adapter between a packaging host and the normalizer
///
/// The host fires lifecycle events; the plugin runs the output
/// normalization on `initialize` and only traces the template on the
/// package hooks.
pub struct ExportsPlugin<'a, PR> {
    progress_reporter: &'a PR,
}

impl<'a, PR: ProgressReporter> ExportsPlugin<'a, PR> {
    pub fn new(progress_reporter: &'a PR) -> Self {
        Self { progress_reporter }
    }

    /// Runs the handler registered for `hook`
    ///
    /// # Returns
    /// The normalization report for `initialize`, `None` for the
    /// diagnostic hooks
    ///
    /// # Errors
    /// Propagates [`NormalizationError`] from the `initialize` handler; the
    /// template is unchanged in that case
    pub fn run_hook(
        &self,
        hook: LifecycleHook,
        template: &mut StackTemplate,
    ) -> Result<Option<NormalizationReport>, NormalizationError> {
        self.progress_reporter
            .report_debug(&format!("🔗 Running hook: {}", hook));

        match hook {
            LifecycleHook::Initialize => self.on_init(template).map(Some),
            LifecycleHook::BeforePackageInitialize => {
                self.trace("Outputs", template.outputs());
                Ok(None)
            }
            LifecycleHook::AfterPackageInitialize => {
                self.trace("Resources", template.resources());
                Ok(None)
            }
        }
    }

    fn on_init(
        &self,
        template: &mut StackTemplate,
    ) -> Result<NormalizationReport, NormalizationError> {
        OutputNormalizer::new().apply(template)
    }

    fn trace(&self, label: &str, node: Option<&Value>) {
        let rendered = match node {
            None => "<absent>".to_string(),
            Some(node) => serde_yaml_ng::to_string(node)
                .unwrap_or_else(|e| format!("<unrenderable: {}>", e)),
        };
        self.progress_reporter
            .report_debug(&format!("{}:\n{}", label, rendered.trim_end()));
    }
}
