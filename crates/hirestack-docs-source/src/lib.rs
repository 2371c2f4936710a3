//! API description reference for the documentation shell.
//!
//! A [`SpecSource`] is either a URL the viewer fetches at runtime, or a
//! bundled OpenAPI document that was parsed once at load time. Exactly one
//! form is active per process.

pub mod bundled;
pub mod error;
pub mod source;

pub use bundled::{BundledSpec, SpecFormat};
pub use error::SourceError;
pub use source::{SourceKind, SpecSource, DEFAULT_SPEC_URL};
