use crate::output_normalization::domain::stack_template::{OUTPUTS_FIELD, RESOURCES_FIELD};
use crate::output_normalization::domain::{
    NormalizationError, NormalizationReport, OutputKey, OutputSet, RawOutput, ResourceOutput,
    StackTemplate,
};
use serde_yaml_ng::{Mapping, Value};

/// OutputNormalizer service for rewriting output declarations
///
/// Collects stack level and resource level outputs, merges them into a
/// single canonical `Outputs` block and removes the non-standard
/// `Outputs` annotation from every resource.
///
/// A normalizer accumulates a [`NormalizationReport`] while it runs; use a
/// fresh instance for every template.
#[derive(Debug, Default)]
pub struct OutputNormalizer {
    report: NormalizationReport,
}

impl OutputNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies the stack level `Outputs` mapping
    ///
    /// # Arguments
    /// * `outputs` - The raw `Outputs` node, `None` or null when absent
    ///
    /// # Returns
    /// Canonical outputs in declaration order. Sequence and null entries are
    /// skipped.
    ///
    /// # Errors
    /// Returns [`NormalizationError::Shape`] for malformed shorthand exports
    /// or when `Outputs` itself is not a mapping
    pub fn classify_stack_outputs(
        &mut self,
        outputs: Option<&Value>,
    ) -> Result<OutputSet, NormalizationError> {
        let mut classified = OutputSet::new();

        let entries = match outputs {
            None | Some(Value::Null) => return Ok(classified),
            Some(Value::Mapping(entries)) => entries,
            Some(_) => {
                return Err(NormalizationError::Shape {
                    key: OUTPUTS_FIELD.to_string(),
                    reason: "Outputs must be a mapping of output keys".to_string(),
                })
            }
        };

        for (key, raw_value) in entries {
            let key = output_key(key)?;
            let raw = RawOutput::classify(&key, raw_value.clone())?;

            match &raw {
                RawOutput::Canonical(_) => self.report.passed_through += 1,
                RawOutput::ShorthandExport { .. } => {
                    if raw.has_intrinsic_export_name() {
                        self.report.intrinsic_export_names.push(key.clone());
                    }
                    self.report.shorthand_exports += 1;
                }
                RawOutput::Scalar(_) => self.report.scalars += 1,
                RawOutput::Unsupported => self.report.skipped.push(key.clone()),
            }

            if let Some(canonical) = raw.into_canonical() {
                // YAML keys such as `1` and '1' only collide once stringified
                classified
                    .insert_unique(key.clone(), canonical)
                    .map_err(|_| NormalizationError::Shape {
                        key,
                        reason: "another stack level output reads as the same key".to_string(),
                    })?;
            }
        }

        Ok(classified)
    }

    /// Collects outputs declared inside resources and strips the annotation
    ///
    /// Only resources whose `Outputs` field is a mapping are touched; the
    /// field is removed from them in place.
    ///
    /// # Returns
    /// Resource outputs in resource declaration order, then template order
    ///
    /// # Errors
    /// Returns [`NormalizationError::Shape`] if an output key is not a scalar
    pub fn extract_resource_outputs(
        &mut self,
        resources: Option<&mut Value>,
    ) -> Result<Vec<ResourceOutput>, NormalizationError> {
        let mut collected = Vec::new();

        let Some(Value::Mapping(resources)) = resources else {
            return Ok(collected);
        };

        for (logical_id, resource) in resources.iter_mut() {
            let Some(resource) = resource.as_mapping_mut() else {
                continue;
            };
            if !matches!(resource.get(OUTPUTS_FIELD), Some(Value::Mapping(_))) {
                continue;
            }
            let Some(Value::Mapping(annotation)) = resource.shift_remove(OUTPUTS_FIELD) else {
                continue;
            };

            let resource_id = OutputKey::describe(logical_id);
            for (key, value) in annotation {
                let key = output_key(&key)?;
                collected.push(ResourceOutput::new(key, value));
            }
            self.report.stripped_resources.push(resource_id);
        }

        self.report.resource_outputs += collected.len();
        Ok(collected)
    }

    /// Merges stack level and resource level outputs of a section
    ///
    /// Mutates `section` by removing resource `Outputs` annotations, but
    /// does not install the merged block.
    ///
    /// # Errors
    /// Returns [`NormalizationError::DuplicateKey`] on the first resource
    /// output whose key is already taken, in resource declaration order
    pub fn merge(&mut self, section: &mut Mapping) -> Result<OutputSet, NormalizationError> {
        let mut outputs = self.classify_stack_outputs(section.get(OUTPUTS_FIELD))?;
        let resource_outputs = self.extract_resource_outputs(section.get_mut(RESOURCES_FIELD))?;

        for resource_output in resource_outputs {
            let key = resource_output.key.clone();
            outputs.insert_unique(key, resource_output.into_canonical())?;
        }

        Ok(outputs)
    }

    /// Normalizes the template's section and installs the merged `Outputs`
    ///
    /// Returns immediately when the section is absent or empty. The work is
    /// done on a staged copy of the section, so the template is left
    /// untouched when an error is returned.
    pub fn apply(
        mut self,
        template: &mut StackTemplate,
    ) -> Result<NormalizationReport, NormalizationError> {
        let Some(section) = template.section_mut() else {
            return Ok(self.report);
        };
        if section.is_empty() {
            return Ok(self.report);
        }

        let mut staged = section.clone();
        let outputs = self.merge(&mut staged)?;

        if !outputs.is_empty() || staged.contains_key(OUTPUTS_FIELD) {
            staged.insert(
                Value::from(OUTPUTS_FIELD),
                Value::Mapping(outputs.into_mapping()),
            );
        }
        *section = staged;

        Ok(self.report)
    }
}

fn output_key(key: &Value) -> Result<String, NormalizationError> {
    OutputKey::from_value(key)
        .map(OutputKey::into_string)
        .ok_or_else(|| NormalizationError::Shape {
            key: OutputKey::describe(key),
            reason: "output keys must be strings".to_string(),
        })
}
