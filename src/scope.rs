//! Provisioning scope: the in-memory registry resource definitions are
//! recorded into before they are synthesized into a template.
//!
//! Registration never fails. Components call [`ProvisioningScope::add_resource`]
//! and move on; whether the resulting set of definitions is deployable is
//! decided by [`ProvisioningScope::synthesize`], which performs the checks the
//! provisioning engine would otherwise report at apply time:
//!
//! 1. every logical id is alphanumeric and at most 255 characters,
//! 2. no logical id is used twice across parameters and resources,
//! 3. every `Ref` / `Fn::GetAtt` points at a definition in the scope.
//!
//! With [`SynthesisOptions::strict`] set, warning diagnostics also abort
//! synthesis.

use crate::error::{Error, Result};
use crate::template::{Parameter, ResourceDefinition, Template};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

static LOGICAL_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]{1,255}$").expect("Invalid logical id regex")
});

/// Returns true if `logical_id` is acceptable to CloudFormation.
pub fn is_valid_logical_id(logical_id: &str) -> bool {
    LOGICAL_ID.is_match(logical_id)
}

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational note
    Info,
    /// Definition is deployable but probably not what was intended
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A note attached to a definition while the scope was being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Logical id of the definition the note is about
    pub logical_id: String,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.logical_id, self.message)
    }
}

/// Options controlling synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Treat warning diagnostics as errors
    pub strict: bool,
    /// Check logical ids against the CloudFormation naming rule
    pub validate_logical_ids: bool,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            strict: false,
            validate_logical_ids: true,
        }
    }
}

impl SynthesisOptions {
    /// Strict options with logical id validation enabled.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Context under which resource definitions are registered.
#[derive(Debug, Clone, Default)]
pub struct ProvisioningScope {
    name: String,
    description: Option<String>,
    parameters: Vec<(String, Parameter)>,
    resources: Vec<ResourceDefinition>,
    diagnostics: Vec<Diagnostic>,
}

impl ProvisioningScope {
    /// Creates an empty scope.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the template description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Registers a resource definition.
    pub fn add_resource(&mut self, resource: ResourceDefinition) {
        debug!(
            scope = %self.name,
            logical_id = resource.logical_id(),
            kind = %resource.kind(),
            "Registered resource"
        );
        self.resources.push(resource);
    }

    /// Registers a template parameter.
    pub fn add_parameter(&mut self, logical_id: impl Into<String>, parameter: Parameter) {
        let logical_id = logical_id.into();
        debug!(scope = %self.name, logical_id = %logical_id, "Registered parameter");
        self.parameters.push((logical_id, parameter));
    }

    /// Records a warning about a definition.
    pub fn warn(&mut self, logical_id: impl Into<String>, message: impl Into<String>) {
        self.diagnose(Severity::Warning, logical_id, message);
    }

    /// Records a diagnostic about a definition.
    pub fn diagnose(
        &mut self,
        severity: Severity,
        logical_id: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            severity,
            logical_id: logical_id.into(),
            message: message.into(),
        });
    }

    /// Resources in registration order.
    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }

    /// Finds the first resource registered under `logical_id`.
    pub fn resource(&self, logical_id: &str) -> Option<&ResourceDefinition> {
        self.resources
            .iter()
            .find(|resource| resource.logical_id() == logical_id)
    }

    /// Parameters in registration order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.parameters
            .iter()
            .map(|(id, parameter)| (id.as_str(), parameter))
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics with [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Validates the scope and produces a template.
    pub fn synthesize(&self, options: &SynthesisOptions) -> Result<Template> {
        let ids = self.parameters.iter().map(|(id, _)| id.as_str()).chain(
            self.resources
                .iter()
                .map(ResourceDefinition::logical_id),
        );

        let mut defined = HashSet::new();
        for id in ids {
            if options.validate_logical_ids && !is_valid_logical_id(id) {
                return Err(Error::InvalidLogicalId(id.to_string()));
            }
            if !defined.insert(id) {
                return Err(Error::DuplicateLogicalId(id.to_string()));
            }
        }

        for resource in &self.resources {
            if let Some(target) = resource.references().find(|id| !defined.contains(id)) {
                return Err(Error::dangling_reference(resource.logical_id(), target));
            }
        }

        let warnings: Vec<_> = self.warnings().collect();
        if options.strict && !warnings.is_empty() {
            return Err(Error::StrictDiagnostics {
                count: warnings.len(),
                summary: warnings[0].to_string(),
            });
        }

        let parameters: IndexMap<_, _> = self.parameters.iter().cloned().collect();
        let resources: IndexMap<_, _> = self
            .resources
            .iter()
            .map(|resource| (resource.logical_id().to_string(), resource.clone()))
            .collect();

        info!(
            scope = %self.name,
            resources = resources.len(),
            parameters = parameters.len(),
            warnings = warnings.len(),
            "Synthesized template"
        );

        Ok(Template::new(
            self.description.clone(),
            parameters,
            resources,
            self.diagnostics.clone(),
        ))
    }
}
