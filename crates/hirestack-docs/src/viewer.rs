//! Third-party documentation viewers the shell can mount.

use std::fmt;
use std::str::FromStr;

use hirestack_docs_source::SpecSource;
use scalar_api_reference::scalar_html_default;
use serde_json::{json, Value};

/// Stoplight Elements web component bundle.
const ELEMENTS_SCRIPT_URL: &str = "https://unpkg.com/@stoplight/elements/web-components.min.js";

/// Stoplight Elements stylesheet.
const ELEMENTS_STYLES_URL: &str = "https://unpkg.com/@stoplight/elements/styles.min.css";

/// Documentation viewer component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewer {
    /// Stoplight Elements `<elements-api>` web component.
    #[default]
    Elements,
    /// Scalar API reference.
    Scalar,
}

impl Viewer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elements => "elements",
            Self::Scalar => "scalar",
        }
    }

    /// Stoplight Elements assets for the document `<head>`.
    pub fn elements_head() -> String {
        format!(
            "<script src=\"{ELEMENTS_SCRIPT_URL}\"></script>\n    \
             <link rel=\"stylesheet\" href=\"{ELEMENTS_STYLES_URL}\">"
        )
    }

    /// The single `<elements-api>` element, configured with `reference`.
    ///
    /// `reference` is the URL string or the bundled document, matching `source`.
    pub fn elements_mount(source: &SpecSource, reference: &Value) -> String {
        let attr = match source {
            SpecSource::Url(_) => "apiDescriptionUrl",
            SpecSource::Bundled(_) => "apiDescriptionDocument",
        };
        let value = match reference {
            Value::String(url) => url.clone(),
            other => other.to_string(),
        };
        format!(
            "<elements-api {attr}=\"{}\" router=\"hash\" layout=\"sidebar\"></elements-api>",
            escape_attr(&value)
        )
    }

    /// Scalar configuration object for `source`, with page styling as `customCss`.
    pub fn scalar_config(source: &SpecSource, reference: &Value, css: &str) -> Value {
        let spec = match source {
            SpecSource::Url(_) => json!({ "url": reference }),
            SpecSource::Bundled(_) => json!({ "content": reference }),
        };

        json!({
            "spec": spec,
            "layout": "modern",
            "hideModels": false,
            "hideDownloadButton": false,
            "customCss": css
        })
    }

    /// Scalar head assets and mount, lifted out of the generated document so
    /// the shell can wrap them in its own container.
    ///
    /// The generated `<title>` is dropped; the shell supplies its own.
    pub fn scalar_parts(source: &SpecSource, reference: &Value, css: &str) -> (String, String) {
        let document = scalar_html_default(&Self::scalar_config(source, reference, css));
        split_document(&document)
    }
}

/// Split a full HTML document into (head contents without `<title>`, body contents).
///
/// A document without a `<body>` is returned whole as the body part.
fn split_document(document: &str) -> (String, String) {
    let Some(body) = element_inner(document, "body") else {
        return (String::new(), document.trim().to_string());
    };

    let head = element_inner(document, "head")
        .map(|head| strip_element(head, "title"))
        .unwrap_or_default();

    (head.trim().to_string(), body.trim().to_string())
}

/// Inner content of the first `<tag ...>...</tag>` in `html`.
fn element_inner<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
    let open = html.find(&format!("<{tag}"))?;
    let content_start = open + html[open..].find('>')? + 1;
    let close = content_start + html[content_start..].find(&format!("</{tag}>"))?;
    Some(&html[content_start..close])
}

/// Remove every `<tag ...>...</tag>` from `html`.
fn strip_element(html: &str, tag: &str) -> String {
    let mut out = html.to_string();
    let close_tag = format!("</{tag}>");
    while let Some(open) = out.find(&format!("<{tag}")) {
        let Some(close) = out[open..].find(&close_tag) else {
            break;
        };
        out.replace_range(open..open + close + close_tag.len(), "");
    }
    out
}

impl FromStr for Viewer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "elements" => Ok(Self::Elements),
            "scalar" => Ok(Self::Scalar),
            _ => Err(format!(
                "unknown viewer '{s}' (expected 'elements' or 'scalar')"
            )),
        }
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
