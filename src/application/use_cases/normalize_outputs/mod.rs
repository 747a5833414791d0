use crate::application::dto::{NormalizeRequest, NormalizeResponse};
use crate::application::lifecycle::{ExportsPlugin, LifecycleHook};
use crate::output_normalization::domain::stack_template::SectionState;
use crate::output_normalization::domain::{NormalizationReport, StackTemplate};
use crate::ports::outbound::{ProgressReporter, TemplateFormatter, TemplateReader};
use crate::shared::error::ExportsError;
use crate::shared::Result;

/// NormalizeOutputsUseCase - Core use case for output normalization
///
/// Loads a template, drives the exports plugin through the packaging
/// lifecycle and serializes the normalized template.
///
/// The template is parsed with `template_parser` and written with
/// `template_formatter`, so a YAML template can be emitted as JSON.
///
/// # Type Parameters
/// * `TR` - TemplateReader implementation
/// * `TP` - TemplateFormatter used to parse the input
/// * `TF` - TemplateFormatter used to serialize the output
/// * `PR` - ProgressReporter implementation
pub struct NormalizeOutputsUseCase<TR, TP, TF, PR> {
    template_reader: TR,
    template_parser: TP,
    template_formatter: TF,
    progress_reporter: PR,
}

impl<TR, TP, TF, PR> NormalizeOutputsUseCase<TR, TP, TF, PR>
where
    TR: TemplateReader,
    TP: TemplateFormatter,
    TF: TemplateFormatter,
    PR: ProgressReporter,
{
    /// Creates a new NormalizeOutputsUseCase with injected dependencies
    pub fn new(
        template_reader: TR,
        template_parser: TP,
        template_formatter: TF,
        progress_reporter: PR,
    ) -> Self {
        Self {
            template_reader,
            template_parser,
            template_formatter,
            progress_reporter,
        }
    }

    /// Executes the normalization use case
    ///
    /// # Errors
    /// Returns an error if the template cannot be read or parsed, if the
    /// configured section is not a mapping, or if the output declarations
    /// are rejected (the error then downcasts to
    /// [`NormalizationError`](crate::output_normalization::domain::NormalizationError))
    pub fn execute(&self, request: NormalizeRequest) -> Result<NormalizeResponse> {
        // Step 1: Load the template
        let mut template = self.load_template(&request)?;
        let original = template.document().clone();

        // Step 2: Run the packaging lifecycle
        let report = self.run_lifecycle(&mut template)?;
        self.report_summary(&report);

        let changed = template.document() != &original;

        // Step 3: Serialize unless only validating
        if request.check_only {
            let message = if changed {
                "✅ Outputs are valid (normalization would rewrite the template)"
            } else {
                "✅ Outputs are valid and already normalized"
            };
            self.progress_reporter.report_completion(message);
            return Ok(NormalizeResponse::new(template, report, changed, None));
        }

        let content = self.template_formatter.format(template.document())?;
        self.progress_reporter.report_completion(&format!(
            "✅ Normalized {} output(s)",
            report.total_outputs()
        ));

        Ok(NormalizeResponse::new(template, report, changed, Some(content)))
    }

    fn load_template(&self, request: &NormalizeRequest) -> Result<StackTemplate> {
        self.progress_reporter.report(&format!(
            "📖 Loading template from: {}",
            request.template_path.display()
        ));

        let content = self.template_reader.read_template(&request.template_path)?;
        let document = self.template_parser.parse(&content).map_err(|e| {
            ExportsError::TemplateParseError {
                path: request.template_path.clone(),
                format: self.template_parser.format_name().to_string(),
                details: e.to_string(),
            }
        })?;

        let template = match &request.section {
            Some(section) => StackTemplate::with_section(document, section.clone()),
            None => StackTemplate::new(document),
        };

        match template.section_state() {
            SectionState::Invalid => {
                return Err(ExportsError::InvalidSection {
                    path: request.template_path.clone(),
                    section: request.section.clone().unwrap_or_else(|| "<root>".to_string()),
                }
                .into());
            }
            SectionState::Missing | SectionState::Empty => {
                let location = request.section.as_deref().unwrap_or("the document root");
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: No resources found in {}; nothing to normalize.",
                    location
                ));
            }
            SectionState::Populated => {}
        }

        Ok(template)
    }

    fn run_lifecycle(&self, template: &mut StackTemplate) -> Result<NormalizationReport> {
        let plugin = ExportsPlugin::new(&self.progress_reporter);
        let mut report = NormalizationReport::default();

        for hook in LifecycleHook::ALL {
            if let Some(hook_report) = plugin.run_hook(hook, template)? {
                report = hook_report;
            }
        }

        Ok(report)
    }

    fn report_summary(&self, report: &NormalizationReport) {
        if report.total_outputs() == 0 && report.skipped.is_empty() {
            return;
        }

        self.progress_reporter.report(&format!(
            "🔍 Outputs: {} canonical, {} shorthand export(s), {} scalar(s), {} from resources",
            report.passed_through, report.shorthand_exports, report.scalars, report.resource_outputs
        ));

        for resource_id in &report.stripped_resources {
            self.progress_reporter.report_debug(&format!(
                "   Removed Outputs annotation from resource '{}'",
                resource_id
            ));
        }

        for key in &report.skipped {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Output '{}' is a list or empty value and was skipped.",
                key
            ));
        }

        for key in &report.intrinsic_export_names {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Output '{}' was read as a shorthand export named after an intrinsic function. \
                 Use `{}: {{ Value: ... }}` if the value was meant to be a Ref or Fn:: call.",
                key, key
            ));
        }
    }
}
