//! Fragment renderer — one converted comment per line, nothing else.

use crate::model::{RenderOptions, SourceDoc};
use crate::render::Renderer;

pub struct FragmentRenderer;

impl Renderer for FragmentRenderer {
    fn render(&self, doc: &SourceDoc, opts: &RenderOptions) -> String {
        let mut out = String::new();
        for comment in &doc.comments {
            out.push_str(&comment.block().to_html(opts));
            out.push('\n');
        }
        out
    }

    fn file_extension(&self) -> &str {
        "frag.html"
    }
}
