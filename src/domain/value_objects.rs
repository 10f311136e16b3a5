//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// Placeholder token substituted with the target IP in a provider URL.
pub const IP_PLACEHOLDER: char = '*';

/// A provider URL template with one `*` placeholder for the target IP.
///
/// Templates are immutable once constructed and their order in the
/// resolver's list defines fallback priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderTemplate(String);

impl ProviderTemplate {
    /// Validate and wrap a template string.
    ///
    /// The placeholder must appear exactly once; anything else is a
    /// configuration error, not something the fallback loop can recover from.
    pub fn parse(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = template.into();
        match template.matches(IP_PLACEHOLDER).count() {
            1 => Ok(Self(template)),
            n => Err(TemplateError {
                template,
                placeholders: n,
            }),
        }
    }

    /// Build the request URL by substituting the placeholder with `ip`.
    pub fn fill(&self, ip: &str) -> String {
        self.0.replacen(IP_PLACEHOLDER, ip, 1)
    }

    /// The raw template string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ProviderTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProviderTemplate {
    type Error = TemplateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<ProviderTemplate> for String {
    fn from(t: ProviderTemplate) -> String {
        t.0
    }
}

impl std::fmt::Display for ProviderTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider template validation error.
#[derive(Debug, Clone, thiserror::Error)]
#[error("provider template must contain '{IP_PLACEHOLDER}' exactly once, found {placeholders}: {template}")]
pub struct TemplateError {
    template: String,
    placeholders: usize,
}
