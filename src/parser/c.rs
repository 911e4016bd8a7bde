//! C-family comment extractor.
//!
//! Finds `/* */` and `//` comments outside string and character literals.
//! Consecutive `//` lines of the same kind that sit alone on their lines are
//! merged into one comment, the way doxygen reads `///` runs. Each comment
//! records the declaration that follows it, or for `///<`-style member docs
//! the code before it on the same line.

use crate::model::{CommentKind, DocComment, SourceDoc};
use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static RE_MEMBER_DOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:/\*[*!]|//[/!])<").unwrap());

/// Byte span of one comment plus what the merger needs to know about it.
#[derive(Debug)]
struct Span {
    start: usize,
    end: usize,
    kind: CommentKind,
    first_line: usize,
    last_line: usize,
    standalone: bool,
    member: bool,
}

pub fn parse(content: &str) -> SourceDoc {
    SourceDoc {
        title: None,
        comments: extract(content),
    }
}

/// Extract every comment in `content`, in source order.
pub fn extract(content: &str) -> Vec<DocComment> {
    let lines = LineIndex::new(content);
    let mut spans: Vec<Span> = Vec::new();

    for (start, end) in scan(content) {
        let text = &content[start..end];
        let kind = CommentKind::classify(text);
        let first_line = lines.line_of(start);
        let span = Span {
            start,
            end,
            kind,
            first_line,
            last_line: first_line + text.matches('\n').count(),
            standalone: content[lines.start_of(first_line)..start].trim().is_empty(),
            member: RE_MEMBER_DOC.is_match(text),
        };

        if let Some(prev) = spans.last_mut() {
            let joins = span.kind.is_line()
                && prev.kind == span.kind
                && prev.standalone
                && span.standalone
                && !prev.member
                && !span.member
                && prev.last_line + 1 == span.first_line;
            if joins {
                prev.end = span.end;
                prev.last_line = span.last_line;
                continue;
            }
        }
        spans.push(span);
    }

    spans
        .into_iter()
        .map(|span| {
            let subject = if span.member {
                clean_subject(&content[lines.start_of(span.first_line)..span.start])
            } else {
                subject_after(content, span.end)
            };
            DocComment {
                kind: span.kind,
                line: span.first_line,
                text: content[span.start..span.end].to_string(),
                subject,
                source: None,
            }
        })
        .collect()
}

/// Byte ranges of raw comments, unmerged.
fn scan(content: &str) -> Vec<(usize, usize)> {
    let bytes = content.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => i = skip_literal(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = content[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |p| i + 2 + p + 2);
                found.push((i, end));
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = content[i..].find('\n').map_or(bytes.len(), |p| i + p);
                let end = if end > i && bytes[end - 1] == b'\r' { end - 1 } else { end };
                found.push((i, end));
                i = end;
            }
            _ => i += 1,
        }
    }
    found
}

/// Skip a string or character literal starting at `start`. Literals never
/// run past the end of their line.
fn skip_literal(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut j = start + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'\n' => return j,
            b if b == quote => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}

/// The first non-blank code after `end`: the rest of the comment's last line,
/// or the next non-blank line. Another comment there means no subject.
fn subject_after(content: &str, end: usize) -> Option<String> {
    let rest = &content[end..];
    let (same_line, following) = match rest.find('\n') {
        Some(p) => (&rest[..p], &rest[p + 1..]),
        None => (rest, ""),
    };

    let candidate = if same_line.trim().is_empty() {
        following.lines().find(|l| !l.trim().is_empty())?
    } else {
        same_line
    };
    let t = candidate.trim_start();
    if t.starts_with("/*") || t.starts_with("//") {
        return None;
    }
    clean_subject(t)
}

fn clean_subject(code: &str) -> Option<String> {
    let collapsed = RE_WHITESPACE.replace_all(code.trim(), " ");
    let s = collapsed.trim_end_matches('{').trim_end();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// 1-based line lookup over byte offsets.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(content: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(content.match_indices('\n').map(|(i, _)| i + 1));
        LineIndex { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&s| s <= offset)
    }

    fn start_of(&self, line: usize) -> usize {
        self.starts[line - 1]
    }
}
