use thiserror::Error;

/// Errors produced while resolving an API description source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// YAML/JSON parse error.
    #[error("parse error in {origin}: {message}")]
    Parse { origin: String, message: String },

    /// Document root is not a mapping.
    #[error("{0}: document root must be an object")]
    NotAnObject(String),

    /// Neither `openapi` nor `swagger` version field found.
    #[error("{0}: not an OpenAPI 3.x or Swagger 2.0 document")]
    UnknownFormat(String),

    /// Unrecognized source kind name.
    #[error("unknown spec source '{0}' (expected 'url' or 'bundled')")]
    UnknownKind(String),

    /// I/O error reading the spec file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
