//! JSON renderer — machine-readable output for editor integrations.

use crate::model::{CommentKind, RenderOptions, SourceDoc};
use crate::render::Renderer;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDoc<'a> {
    title: Option<&'a str>,
    comments: Vec<JsonComment<'a>>,
}

#[derive(Serialize)]
struct JsonComment<'a> {
    line: usize,
    kind: CommentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    html: String,
}

impl Renderer for JsonRenderer {
    fn render(&self, doc: &SourceDoc, opts: &RenderOptions) -> String {
        let out = JsonDoc {
            title: doc.title.as_deref(),
            comments: doc
                .comments
                .iter()
                .map(|c| JsonComment {
                    line: c.line,
                    kind: c.kind,
                    subject: c.subject.as_deref(),
                    source: c.source.as_deref(),
                    html: c.block().to_html(opts),
                })
                .collect(),
        };
        // Only strings, integers and enums: serialization cannot fail.
        let mut json = serde_json::to_string_pretty(&out).unwrap_or_default();
        json.push('\n');
        json
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
