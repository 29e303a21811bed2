//! CloudFormation template model.
//!
//! A [`Template`] is the synthesized form of a
//! [`ProvisioningScope`](crate::scope::ProvisioningScope): the batch of
//! definitions handed to the provisioning engine. Resources keep their
//! registration order so the output is stable across runs.

mod resource;
mod value;

pub use resource::{Parameter, ResourceDefinition, ResourceKind};
pub use value::Value;

use crate::error::{Error, Result};
use crate::scope::Diagnostic;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Template format version understood by CloudFormation.
pub const FORMAT_VERSION: &str = "2010-09-09";

/// Output format for synthesized templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl FromStr for TemplateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(TemplateFormat::Json),
            "yaml" | "yml" => Ok(TemplateFormat::Yaml),
            _ => Err(Error::Config(format!(
                "Invalid template format '{}'. Valid formats: json, yaml",
                s
            ))),
        }
    }
}

impl fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateFormat::Json => write!(f, "json"),
            TemplateFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// A synthesized CloudFormation template.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    format_version: String,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(rename = "Parameters", skip_serializing_if = "IndexMap::is_empty")]
    parameters: IndexMap<String, Parameter>,

    #[serde(rename = "Resources")]
    resources: IndexMap<String, ResourceDefinition>,

    #[serde(skip)]
    diagnostics: Vec<Diagnostic>,
}

impl Template {
    pub(crate) fn new(
        description: Option<String>,
        parameters: IndexMap<String, Parameter>,
        resources: IndexMap<String, ResourceDefinition>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            description,
            parameters,
            resources,
            diagnostics,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// Resources keyed by logical id, in registration order.
    pub fn resources(&self) -> &IndexMap<String, ResourceDefinition> {
        &self.resources
    }

    pub fn resource(&self, logical_id: &str) -> Option<&ResourceDefinition> {
        self.resources.get(logical_id)
    }

    /// Warnings and notes collected while the scope was built.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Renders the template as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the template as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Renders the template in the requested format.
    pub fn render(&self, format: TemplateFormat) -> Result<String> {
        match format {
            TemplateFormat::Json => self.to_json(),
            TemplateFormat::Yaml => self.to_yaml(),
        }
    }
}
