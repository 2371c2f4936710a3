//! Application shell: one page, one container, one viewer.
//!
//! The shell never fetches or parses the API description. It receives an
//! already-resolved [`SpecSource`] and passes it to the viewer as its only
//! configuration input. Failures to load or render the description are
//! shown by the viewer itself.

use std::sync::Arc;

use hirestack_docs_source::SpecSource;
use serde_json::Value;

use crate::viewer::{escape_attr, Viewer};

/// Page-level styling.
pub const APP_CSS: &str = include_str!("../assets/app.css");

/// Title used when neither the config nor the bundled document names one.
pub const DEFAULT_TITLE: &str = "API Reference";

/// The documentation page.
#[derive(Debug, Clone)]
pub struct ShellPage {
    source: Arc<SpecSource>,
    viewer: Viewer,
    title: String,
}

impl ShellPage {
    /// Build the shell. Without an explicit title the bundled document's
    /// `info.title` is used, then [`DEFAULT_TITLE`].
    pub fn new(source: Arc<SpecSource>, viewer: Viewer, title: Option<String>) -> Self {
        let title = title
            .or_else(|| {
                source
                    .as_bundled()
                    .and_then(|spec| spec.title())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self {
            source,
            viewer,
            title,
        }
    }

    pub fn source(&self) -> &SpecSource {
        &self.source
    }

    pub fn viewer(&self) -> Viewer {
        self.viewer
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The value handed to the viewer: the URL string, or the bundled document.
    pub fn viewer_config(&self) -> Value {
        match self.source.as_ref() {
            SpecSource::Url(url) => Value::String(url.clone()),
            SpecSource::Bundled(spec) => spec.document().clone(),
        }
    }

    /// Render the page.
    pub fn render(&self) -> String {
        let reference = self.viewer_config();
        match self.viewer {
            Viewer::Elements => {
                let mount = Viewer::elements_mount(&self.source, &reference);
                self.render_container(&Viewer::elements_head(), &mount)
            }
            Viewer::Scalar => {
                let (head, mount) = Viewer::scalar_parts(&self.source, &reference, APP_CSS);
                self.render_container(&head, &mount)
            }
        }
    }

    fn render_container(&self, head: &str, mount: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no">
    <title>{title}</title>
    {head}
    <style>
{css}    </style>
  </head>
  <body>
    <div class="App">
      {mount}
    </div>
  </body>
</html>
"#,
            title = escape_attr(&self.title),
            css = APP_CSS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hirestack_docs_source::BundledSpec;

    const BUNDLED: &str = r#"
openapi: "3.1.0"
info:
  title: Bundled API
  version: "1.0.0"
paths: {}
"#;

    fn url_shell() -> ShellPage {
        ShellPage::new(Arc::new(SpecSource::default_url()), Viewer::Elements, None)
    }

    fn bundled_shell() -> ShellPage {
        let spec = BundledSpec::embedded(BUNDLED).unwrap();
        ShellPage::new(
            Arc::new(SpecSource::from(spec)),
            Viewer::Elements,
            Some(DEFAULT_TITLE.to_string()),
        )
    }

    /// Replace the viewer element with a placeholder, leaving the container.
    fn container_markup(html: &str) -> String {
        let start = html.find("<elements-api").unwrap();
        let end = html.find("</elements-api>").unwrap() + "</elements-api>".len();
        format!("{}<viewer/>{}", &html[..start], &html[end..])
    }

    #[test]
    fn render_mounts_exactly_one_viewer() {
        for shell in [url_shell(), bundled_shell()] {
            let html = shell.render();
            assert_eq!(html.matches("<elements-api").count(), 1);
            assert_eq!(html.matches("<div class=\"App\">").count(), 1);
        }
    }

    #[test]
    fn url_variant_passes_hirestack_url() {
        let shell = url_shell();
        assert_eq!(
            shell.viewer_config(),
            Value::String("https://api.hirestack.ai/openapi.json".into())
        );
        assert!(shell
            .render()
            .contains(r#"apiDescriptionUrl="https://api.hirestack.ai/openapi.json""#));
    }

    #[test]
    fn bundled_variant_passes_parsed_document() {
        let shell = bundled_shell();
        let expected = BundledSpec::embedded(BUNDLED).unwrap().document().clone();
        assert_eq!(shell.viewer_config(), expected);
        assert!(shell.render().contains("apiDescriptionDocument="));
    }

    #[test]
    fn switching_variant_keeps_container_markup() {
        let url_html = url_shell().render();
        let bundled_html = bundled_shell().render();
        assert_ne!(url_html, bundled_html);
        assert_eq!(container_markup(&url_html), container_markup(&bundled_html));
    }

    #[test]
    fn render_is_idempotent() {
        let shell = bundled_shell();
        let first = shell.render();
        for _ in 0..3 {
            assert_eq!(shell.render(), first);
        }
        assert_eq!(shell.viewer_config(), shell.viewer_config());
    }

    #[test]
    fn title_falls_back_to_bundled_info_then_default() {
        let spec = BundledSpec::embedded(BUNDLED).unwrap();
        let shell = ShellPage::new(Arc::new(SpecSource::from(spec)), Viewer::Elements, None);
        assert_eq!(shell.title(), "Bundled API");
        assert_eq!(url_shell().title(), DEFAULT_TITLE);

        let titled = ShellPage::new(
            Arc::new(SpecSource::default_url()),
            Viewer::Elements,
            Some("HireStack <Docs>".into()),
        );
        assert!(titled.render().contains("<title>HireStack &lt;Docs&gt;</title>"));
    }

    #[test]
    fn page_styling_is_embedded() {
        let html = url_shell().render();
        assert!(html.contains(".App {"));
        assert!(html.contains("@stoplight/elements/web-components.min.js"));
    }

    #[test]
    fn scalar_viewer_receives_same_reference() {
        let shell = ShellPage::new(Arc::new(SpecSource::default_url()), Viewer::Scalar, None);
        assert_eq!(
            shell.viewer_config(),
            Value::String("https://api.hirestack.ai/openapi.json".into())
        );
        let html = shell.render();
        assert!(html.contains("api.hirestack.ai"));
        assert_eq!(html, shell.render());
    }

    #[test]
    fn scalar_viewer_sits_in_the_app_container() {
        let shell = ShellPage::new(
            Arc::new(SpecSource::default_url()),
            Viewer::Scalar,
            Some("HireStack Docs".into()),
        );
        let html = shell.render();
        assert_eq!(html.matches("<div class=\"App\">").count(), 1);
        assert!(html.contains("<title>HireStack Docs</title>"));
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains(".App {"));
        assert!(html.contains("api.hirestack.ai"));
    }
}
