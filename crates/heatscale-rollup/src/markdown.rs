//! Markdown rendering for scale documentation.
//!
//! `documentation.text` is authored in Markdown and shipped to the card as
//! HTML. The card shows it inside a dialog, so every link must open in a
//! new tab; anchor tags are emitted by hand with the target/rel attributes
//! set instead of letting the HTML writer produce bare `<a href>` tags.

use std::path::Path;

use pulldown_cmark::{html, Event, Parser, Tag, TagEnd};
use serde_json::{Map, Value};

use crate::error::{RollupError, RollupResult};

/// Record field holding the documentation mapping.
pub const DOCUMENTATION_FIELD: &str = "documentation";

/// Field under `documentation` holding the Markdown source.
pub const TEXT_FIELD: &str = "text";

/// Render Markdown to HTML with all links marked for new-tab opening.
pub fn render(text: &str) -> String {
    let events = Parser::new(text).map(|event| match event {
        Event::Start(Tag::Link {
            dest_url, title, ..
        }) => {
            let mut anchor = String::from("<a href=\"");
            anchor.push_str(&html_escape(&dest_url));
            if !title.is_empty() {
                anchor.push_str("\" title=\"");
                anchor.push_str(&html_escape(&title));
            }
            anchor.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
            Event::InlineHtml(anchor.into())
        }
        Event::End(TagEnd::Link) => Event::InlineHtml("</a>".into()),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

/// Render `documentation.text` in place, if the record carries one.
///
/// Records without a `documentation` mapping, or whose mapping has no
/// `text` field, pass through untouched. Sibling fields under
/// `documentation` are never altered.
pub fn render_documentation(record: &mut Map<String, Value>, path: &Path) -> RollupResult<()> {
    let docs = match record.get_mut(DOCUMENTATION_FIELD) {
        Some(Value::Object(docs)) => docs,
        _ => return Ok(()),
    };

    match docs.get_mut(TEXT_FIELD) {
        None => Ok(()),
        Some(Value::String(text)) => {
            *text = render(text);
            Ok(())
        }
        Some(_) => Err(RollupError::DocumentationText(path.to_path_buf())),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn links_open_in_a_new_tab() {
        let out = render("[link](http://x)");
        assert!(out.contains("<a href=\"http://x\" target=\"_blank\" rel=\"noopener noreferrer\">"));
        assert!(out.contains("link</a>"));
    }

    #[test]
    fn link_titles_are_preserved() {
        let out = render("[docs](http://x \"the docs\")");
        assert!(out.contains("title=\"the docs\""));
        assert!(out.contains("target=\"_blank\""));
    }

    #[test]
    fn plain_markdown_still_renders() {
        let out = render("Reads **best** on dark themes.");
        assert_eq!(out, "<p>Reads <strong>best</strong> on dark themes.</p>\n");
    }

    #[test]
    fn href_is_escaped() {
        let out = render("[q](http://x?a=1&b=2)");
        assert!(out.contains("href=\"http://x?a=1&amp;b=2\""));
    }

    #[test]
    fn documentation_text_is_rewritten_in_place() {
        let mut record = match json!({
            "name": "Iron red",
            "documentation": {
                "text": "See [the wiki](http://x).",
                "author": "someone"
            }
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        render_documentation(&mut record, Path::new("iron_red.yaml")).unwrap();

        let docs = record["documentation"].as_object().unwrap();
        assert!(docs["text"].as_str().unwrap().contains("target=\"_blank\""));
        // Siblings pass through unchanged.
        assert_eq!(docs["author"], "someone");
        assert_eq!(record["name"], "Iron red");
    }

    #[test]
    fn records_without_documentation_pass_through() {
        let mut record = Map::new();
        record.insert("name".into(), Value::String("Stoplight".into()));

        render_documentation(&mut record, Path::new("stoplight.yaml")).unwrap();
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn documentation_without_text_passes_through() {
        let mut record = match json!({"documentation": {"author": "someone"}}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        render_documentation(&mut record, Path::new("x.yaml")).unwrap();
        assert_eq!(record["documentation"]["author"], "someone");
    }

    #[test]
    fn non_string_text_is_an_error() {
        let mut record = match json!({"documentation": {"text": 42}}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let err = render_documentation(&mut record, Path::new("x.yaml")).unwrap_err();
        assert!(matches!(err, RollupError::DocumentationText(_)));
    }
}
