use std::fmt;
use std::str::FromStr;

use crate::bundled::BundledSpec;
use crate::error::SourceError;

/// Remote OpenAPI document used when no other source is configured.
pub const DEFAULT_SPEC_URL: &str = "https://api.hirestack.ai/openapi.json";

/// Which form of API description reference to hand to the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// Viewer fetches the document from a URL at runtime.
    #[default]
    Url,
    /// Viewer receives an already-parsed document by value.
    Bundled,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Bundled => "bundled",
        }
    }
}

impl FromStr for SourceKind {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "url" => Ok(Self::Url),
            "bundled" => Ok(Self::Bundled),
            _ => Err(SourceError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single API description reference passed to the viewer.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecSource {
    Url(String),
    Bundled(BundledSpec),
}

impl SpecSource {
    /// URL source pointing at [`DEFAULT_SPEC_URL`].
    pub fn default_url() -> Self {
        Self::Url(DEFAULT_SPEC_URL.to_string())
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Url(_) => SourceKind::Url,
            Self::Bundled(_) => SourceKind::Bundled,
        }
    }

    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Bundled(_) => None,
        }
    }

    pub fn as_bundled(&self) -> Option<&BundledSpec> {
        match self {
            Self::Url(_) => None,
            Self::Bundled(spec) => Some(spec),
        }
    }
}

impl Default for SpecSource {
    fn default() -> Self {
        Self::default_url()
    }
}

impl From<BundledSpec> for SpecSource {
    fn from(spec: BundledSpec) -> Self {
        Self::Bundled(spec)
    }
}
