//! Startup configuration.
//!
//! The API description source is chosen once here and shared read-only for
//! the lifetime of the process.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use hirestack_docs_source::{BundledSpec, SourceError, SourceKind, SpecSource, DEFAULT_SPEC_URL};
use hirestack_docs_telemetry::log_source_resolved;

use crate::shell::ShellPage;
use crate::viewer::Viewer;

/// Bundled OpenAPI document, embedded at compile time.
pub const EMBEDDED_SPEC: &str = include_str!("../openapi.yaml");

/// Options selecting the API description and the viewer.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Which API description reference to pass to the viewer (url or bundled).
    #[arg(long, env = "HIRESTACK_DOCS_SOURCE", default_value = "url")]
    pub source: SourceKind,

    /// Remote OpenAPI document (url source).
    #[arg(long, env = "HIRESTACK_DOCS_SPEC_URL", default_value = DEFAULT_SPEC_URL)]
    pub spec_url: String,

    /// Spec file to bundle instead of the embedded document (bundled source).
    #[arg(long, env = "HIRESTACK_DOCS_SPEC_FILE")]
    pub spec_file: Option<PathBuf>,

    /// Documentation viewer (elements or scalar).
    #[arg(long, env = "HIRESTACK_DOCS_VIEWER", default_value = "elements")]
    pub viewer: Viewer,

    /// Page title. Defaults to the bundled document's info.title.
    #[arg(long, env = "HIRESTACK_DOCS_TITLE")]
    pub title: Option<String>,
}

impl Default for SourceArgs {
    fn default() -> Self {
        Self {
            source: SourceKind::Url,
            spec_url: DEFAULT_SPEC_URL.to_string(),
            spec_file: None,
            viewer: Viewer::Elements,
            title: None,
        }
    }
}

impl SourceArgs {
    /// Resolve the single active API description reference.
    pub fn resolve_source(&self) -> Result<SpecSource, SourceError> {
        let source = match self.source {
            SourceKind::Url => {
                if let Some(path) = &self.spec_file {
                    tracing::warn!(
                        spec_file = %path.display(),
                        "--spec-file ignored for url source"
                    );
                }
                SpecSource::Url(self.spec_url.clone())
            }
            SourceKind::Bundled => {
                let spec = match &self.spec_file {
                    Some(path) => BundledSpec::from_file(path)?,
                    None => BundledSpec::embedded(EMBEDDED_SPEC)?,
                };
                SpecSource::Bundled(spec)
            }
        };

        match &source {
            SpecSource::Url(url) => log_source_resolved!(source = "url", url = %url),
            SpecSource::Bundled(spec) => log_source_resolved!(
                source = "bundled",
                origin = spec.origin(),
                format = spec.format().as_str(),
                version = spec.version()
            ),
        }

        Ok(source)
    }

    /// Resolve the source and build the shell around it.
    pub fn build_shell(&self) -> Result<ShellPage, SourceError> {
        let source = Arc::new(self.resolve_source()?);
        Ok(ShellPage::new(source, self.viewer, self.title.clone()))
    }
}
