use std::path::Path;

use serde_json::Value;

use crate::error::SourceError;

/// Origin label for documents compiled into the binary.
pub const EMBEDDED_ORIGIN: &str = "<embedded>";

/// Description format detected from the root version field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    OpenApi,
    Swagger,
}

impl SpecFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenApi => "openapi",
            Self::Swagger => "swagger",
        }
    }
}

/// A bundled API description, parsed once and passed to the viewer by value.
#[derive(Debug, Clone, PartialEq)]
pub struct BundledSpec {
    document: Value,
    origin: String,
    format: SpecFormat,
    version: String,
}

impl BundledSpec {
    /// Parse a bundled document from a YAML or JSON string.
    ///
    /// Only the root shape and the version field are checked. Everything
    /// else in the document is left for the viewer to interpret.
    pub fn parse(input: &str, origin: impl Into<String>) -> Result<Self, SourceError> {
        let origin = origin.into();

        // JSON is valid YAML, so one parser covers both
        let document: Value = serde_yaml::from_str(input).map_err(|e| SourceError::Parse {
            origin: origin.clone(),
            message: e.to_string(),
        })?;

        let root = document
            .as_object()
            .ok_or_else(|| SourceError::NotAnObject(origin.clone()))?;

        let (format, version) = detect_format(root, &origin)?;

        Ok(Self {
            document,
            origin,
            format,
            version,
        })
    }

    /// Parse a document compiled into the binary.
    pub fn embedded(input: &str) -> Result<Self, SourceError> {
        Self::parse(input, EMBEDDED_ORIGIN)
    }

    /// Read and parse a bundled document from disk.
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        let origin = path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self::parse(&content, origin)
    }

    /// The deserialized document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// File name the document was loaded from, or `<embedded>`.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn format(&self) -> SpecFormat {
        self.format
    }

    /// Value of the root `openapi` / `swagger` field.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// `info.title`, if the document declares one.
    pub fn title(&self) -> Option<&str> {
        self.document
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(|v| v.as_str())
    }
}

fn detect_format(
    root: &serde_json::Map<String, Value>,
    origin: &str,
) -> Result<(SpecFormat, String), SourceError> {
    if let Some(version) = root.get("openapi").and_then(version_string) {
        if version.starts_with("3.") {
            return Ok((SpecFormat::OpenApi, version));
        }
    } else if let Some(version) = root.get("swagger").and_then(version_string) {
        if version == "2.0" {
            return Ok((SpecFormat::Swagger, version));
        }
    }
    Err(SourceError::UnknownFormat(origin.to_string()))
}

/// Version field as text. An unquoted `3.0` in YAML arrives as a float.
fn version_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_f64() => Some(n.to_string()),
        _ => None,
    }
}
