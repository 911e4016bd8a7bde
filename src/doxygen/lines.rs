//! Comment delimiter and per-line marker stripping.
//!
//! Block comments lose `/*`, the doxygen `*`/`!`, an optional member marker
//! `<` and the closing `*/`; every line then loses a leading `*` and one space
//! after it. Line comments lose their `//`-style marker line by line.

use crate::model::CommentKind;

/// Split a raw comment into logical text lines for `kind`.
pub fn strip(text: &str, kind: CommentKind) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    match kind {
        CommentKind::BlockComment => strip_block(text, false),
        CommentKind::DoxygenComment => strip_block(text, true),
        CommentKind::LineComment => strip_lines(text, false),
        CommentKind::DoxygenLineComment => strip_lines(text, true),
    }
}

fn strip_block(text: &str, doxygen: bool) -> Vec<String> {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("/*") {
        body = rest.strip_suffix("*/").unwrap_or(rest);
        if doxygen {
            body = body
                .strip_prefix('*')
                .or_else(|| body.strip_prefix('!'))
                .unwrap_or(body);
            body = body.strip_prefix('<').unwrap_or(body);
        }
    }

    body.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .enumerate()
        .map(|(i, line)| {
            let lead = line.trim_start_matches([' ', '\t']);
            if let Some(rest) = lead.strip_prefix('*') {
                one_space(rest).to_string()
            } else if i == 0 {
                one_space(line).to_string()
            } else {
                line.to_string()
            }
        })
        .collect()
}

fn strip_lines(text: &str, doxygen: bool) -> Vec<String> {
    text.lines()
        .map(|line| {
            let lead = line.trim_start_matches([' ', '\t']);
            let rest = if doxygen {
                lead.strip_prefix("///")
                    .or_else(|| lead.strip_prefix("//!"))
                    .map(|r| r.strip_prefix('<').unwrap_or(r))
                    .or_else(|| lead.strip_prefix("//"))
            } else {
                lead.strip_prefix("//")
            };
            match rest {
                Some(r) => one_space(r).to_string(),
                None => line.to_string(),
            }
        })
        .collect()
}

fn one_space(s: &str) -> &str {
    s.strip_prefix(' ').unwrap_or(s)
}
