//! HTML renderer — standalone page, one section per documented declaration.

use crate::model::{RenderOptions, SourceDoc};
use crate::render::Renderer;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &SourceDoc, opts: &RenderOptions) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if let Some(ref title) = doc.title {
            out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("h3 code { font-size: 0.95em; }\n");
        out.push_str(".line { color: #888; font-size: 0.75em; margin-left: 0.5em; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        if let Some(ref title) = doc.title {
            out.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));
        }

        for (n, comment) in doc.comments.iter().enumerate() {
            out.push_str(&format!("<section id=\"c{}\">\n", n + 1));
            let location = match comment.source {
                Some(ref source) => format!("{}:{}", html_escape(source), comment.line),
                None => format!("line {}", comment.line),
            };
            match comment.subject {
                Some(ref subject) => out.push_str(&format!(
                    "<h3><code>{}</code><span class=\"line\">{}</span></h3>\n",
                    html_escape(subject),
                    location
                )),
                None => out.push_str(&format!(
                    "<h3><span class=\"line\">{}</span></h3>\n",
                    location
                )),
            }
            out.push_str(&comment.block().to_html(opts));
            out.push_str("\n</section>\n");
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
