//! Doxygen comment → HTML fragment converter — line-by-line state machine.
//!
//! The output only ever uses `<p>`, `<strong>`, `<i>`, `<br>` and `<pre>`,
//! and is meant to be dropped as-is into a tooltip or documentation popup.
//! Rendering is total: unknown tags, missing arguments and unterminated
//! blocks all degrade to best-effort output.

pub mod inline;
pub mod lines;
pub mod tags;

use crate::model::{CommentBlock, CommentKind, RenderOptions};
use tags::{ArgStyle, TagLine, TagRule};

/// Render one comment with the default options.
pub fn render_to_html(text: &str, kind: CommentKind) -> String {
    render_with(text, kind, &RenderOptions::default())
}

/// Render one comment.
pub fn render_with(text: &str, kind: CommentKind, opts: &RenderOptions) -> String {
    let mut scanner = Scanner::default();
    for line in lines::strip(text, kind) {
        scanner.feed(&line);
    }
    scanner.finish(kind, opts)
}

impl CommentBlock<'_> {
    pub fn to_html(&self, opts: &RenderOptions) -> String {
        render_with(self.text, self.kind, opts)
    }
}

// -- Scanner state ------------------------------------------------------------

#[derive(Debug)]
enum Mode {
    Prose {
        lines: Vec<String>,
    },
    TagBody {
        label: String,
        head: String,
        lines: Vec<String>,
    },
    Verbatim {
        terminator: &'static str,
        lines: Vec<String>,
    },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Prose { lines: Vec::new() }
    }
}

#[derive(Debug, Default)]
struct Scanner {
    out: String,
    mode: Mode,
    prose_paragraphs: usize,
    tag_paragraphs: usize,
    has_author: bool,
}

impl Scanner {
    fn feed(&mut self, line: &str) {
        if let Mode::Verbatim { terminator, .. } = self.mode {
            if let Some(rest) = tags::strip_terminator(line, terminator) {
                self.close_block(false);
                if !rest.trim().is_empty() {
                    self.feed(rest.trim_start());
                }
            } else if let Mode::Verbatim { lines, .. } = &mut self.mode {
                lines.push(line.to_string());
            }
            return;
        }

        if let Some(tag) = tags::parse_head(line) {
            self.start_tag(tag);
            return;
        }

        let text = line.trim();
        match &mut self.mode {
            Mode::Prose { lines } => {
                if text.is_empty() {
                    self.flush();
                } else {
                    lines.push(text.to_string());
                }
            }
            Mode::TagBody { lines, .. } => lines.push(text.to_string()),
            Mode::Verbatim { .. } => unreachable!("verbatim lines are handled above"),
        }
    }

    fn start_tag(&mut self, tag: TagLine<'_>) {
        self.flush();
        if tags::is_author(tag.name) {
            self.has_author = true;
        }

        match tags::lookup(tag.name) {
            Some(TagRule::Block { terminator }) => {
                self.mode = Mode::Verbatim {
                    terminator,
                    lines: Vec::new(),
                };
                let first = tags::skip_language(tag.rest);
                if !first.trim().is_empty() {
                    self.feed(first.strip_prefix(' ').unwrap_or(first));
                }
            }
            Some(TagRule::Stray) => {}
            Some(TagRule::Brief) => {
                let text = tag.rest.trim();
                if !text.is_empty() {
                    self.mode = Mode::Prose {
                        lines: vec![text.to_string()],
                    };
                }
            }
            Some(TagRule::Labeled { label, style }) => {
                self.open_body(label.to_string(), tags::render_argument(tag.rest, style));
            }
            None => {
                self.open_body(
                    tag.name.to_string(),
                    tags::render_argument(tag.rest, ArgStyle::Plain),
                );
            }
        }
    }

    fn open_body(&mut self, label: String, head: String) {
        self.mode = Mode::TagBody {
            label,
            head,
            lines: Vec::new(),
        };
    }

    /// Emit whatever paragraph is open and return to empty prose.
    fn flush(&mut self) {
        match std::mem::take(&mut self.mode) {
            Mode::Prose { lines } => {
                if lines.is_empty() {
                    return;
                }
                let body: Vec<String> = lines.iter().map(|l| inline::render(l)).collect();
                self.push_paragraph(&body.join("\n"));
                self.prose_paragraphs += 1;
            }
            Mode::TagBody {
                label,
                head,
                mut lines,
            } => {
                while lines.last().is_some_and(|l| l.is_empty()) {
                    lines.pop();
                }
                let mut body: Vec<String> = Vec::with_capacity(lines.len() + 1);
                if !head.is_empty() {
                    body.push(head);
                }
                body.extend(lines.iter().map(|l| inline::render(l)));
                self.push_labeled(&label, &body.join("\n"));
                self.tag_paragraphs += 1;
            }
            verbatim @ Mode::Verbatim { .. } => {
                self.mode = verbatim;
                self.close_block(true);
            }
        }
    }

    /// Close a preformatted block. Implicit closes (end of input) drop the
    /// trailing blank lines left over from the comment terminator.
    fn close_block(&mut self, implicit: bool) {
        let Mode::Verbatim { mut lines, .. } = std::mem::take(&mut self.mode) else {
            return;
        };
        if implicit {
            while lines.last().is_some_and(|l| l.trim().is_empty()) {
                lines.pop();
            }
        }
        self.out.push_str("<p><pre>");
        for line in &lines {
            self.out.push_str(&escape_angles(line));
            self.out.push('\n');
        }
        self.out.push_str("</pre></p>");
    }

    fn push_paragraph(&mut self, html: &str) {
        self.out.push_str("<p>");
        self.out.push_str(html);
        self.out.push_str("</p>");
    }

    fn push_labeled(&mut self, label: &str, html: &str) {
        self.push_paragraph(&format!("<strong>{}:</strong><br>&nbsp;  {}", label, html));
    }

    fn finish(mut self, kind: CommentKind, opts: &RenderOptions) -> String {
        self.flush();
        if kind == CommentKind::DoxygenComment
            && self.prose_paragraphs > 0
            && self.tag_paragraphs > 0
            && !self.has_author
        {
            if let Some(ref author) = opts.default_author {
                self.push_labeled("Author", &inline::render(author));
            }
        }
        self.out
    }
}

/// Verbatim escaping: angle brackets only.
fn escape_angles(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}
