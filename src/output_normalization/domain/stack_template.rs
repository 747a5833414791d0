use serde_yaml_ng::{Mapping, Value};

pub const RESOURCES_FIELD: &str = "Resources";
pub const OUTPUTS_FIELD: &str = "Outputs";

/// State of the mapping that holds `Resources` and `Outputs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// The section key (or the whole document) is absent or null
    Missing,
    /// The section is an empty mapping
    Empty,
    /// The section is a mapping with at least one entry
    Populated,
    /// The section exists but is not a mapping
    Invalid,
}

/// A stack template document
///
/// For a plain CloudFormation template the document root holds `Resources`
/// and `Outputs`. Framework configuration files nest them under a key, e.g.
/// `resources:` in `serverless.yml`, which is what `section_key` selects.
#[derive(Debug, Clone, PartialEq)]
pub struct StackTemplate {
    document: Value,
    section_key: Option<String>,
}

impl StackTemplate {
    /// Template whose root holds `Resources` and `Outputs`
    pub fn new(document: Value) -> Self {
        Self {
            document,
            section_key: None,
        }
    }

    /// Template whose `Resources` and `Outputs` live under `section_key`
    pub fn with_section(document: Value, section_key: impl Into<String>) -> Self {
        Self {
            document,
            section_key: Some(section_key.into()),
        }
    }

    pub fn section_key(&self) -> Option<&str> {
        self.section_key.as_deref()
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn into_document(self) -> Value {
        self.document
    }

    fn section_node(&self) -> Option<&Value> {
        match self.section_key.as_deref() {
            Some(key) => self.document.get(key),
            None => Some(&self.document),
        }
    }

    pub fn section_state(&self) -> SectionState {
        match self.section_node() {
            None | Some(Value::Null) => SectionState::Missing,
            Some(Value::Mapping(mapping)) if mapping.is_empty() => SectionState::Empty,
            Some(Value::Mapping(_)) => SectionState::Populated,
            Some(_) => SectionState::Invalid,
        }
    }

    /// The section mapping, if present
    pub fn section(&self) -> Option<&Mapping> {
        self.section_node().and_then(Value::as_mapping)
    }

    pub fn section_mut(&mut self) -> Option<&mut Mapping> {
        let node = match self.section_key.as_deref() {
            Some(key) => self.document.get_mut(key)?,
            None => &mut self.document,
        };
        node.as_mapping_mut()
    }

    pub fn outputs(&self) -> Option<&Value> {
        self.section().and_then(|section| section.get(OUTPUTS_FIELD))
    }

    pub fn resources(&self) -> Option<&Value> {
        self.section().and_then(|section| section.get(RESOURCES_FIELD))
    }
}
