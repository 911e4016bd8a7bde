//! Paragraph tag table.
//!
//! A tag opens a paragraph when it is the first thing on a line. What it
//! renders as is looked up here; names missing from the table still render,
//! labelled with their own name.

use super::inline;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// How a tag's argument text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgStyle {
    Plain,
    /// First word is a name and is set in italics (`@param argc ...`)
    NamedArgument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// Preformatted block closed by `terminator`
    Block { terminator: &'static str },
    /// Labelled paragraph
    Labeled { label: &'static str, style: ArgStyle },
    /// Argument continues as ordinary prose
    Brief,
    /// Terminator seen outside its block
    Stray,
}

static TAGS: LazyLock<HashMap<&'static str, TagRule>> = LazyLock::new(|| {
    use ArgStyle::*;
    use TagRule::*;

    let labeled = |label, style| Labeled { label, style };
    HashMap::from([
        ("verbatim", Block { terminator: "endverbatim" }),
        ("code", Block { terminator: "endcode" }),
        ("endverbatim", Stray),
        ("endcode", Stray),
        ("brief", Brief),
        ("short", Brief),
        ("details", Brief),
        ("param", labeled("Parameter", NamedArgument)),
        ("tparam", labeled("Template parameter", NamedArgument)),
        ("retval", labeled("Return value", NamedArgument)),
        ("exception", labeled("Throws", NamedArgument)),
        ("throws", labeled("Throws", NamedArgument)),
        ("throw", labeled("Throws", NamedArgument)),
        ("return", labeled("Returns", Plain)),
        ("returns", labeled("Returns", Plain)),
        ("result", labeled("Returns", Plain)),
        ("author", labeled("Author", Plain)),
        ("authors", labeled("Author", Plain)),
        ("see", labeled("See also", Plain)),
        ("sa", labeled("See also", Plain)),
        ("since", labeled("Since", Plain)),
        ("version", labeled("Version", Plain)),
        ("date", labeled("Date", Plain)),
        ("deprecated", labeled("Deprecated", Plain)),
        ("note", labeled("Note", Plain)),
        ("warning", labeled("Warning", Plain)),
        ("attention", labeled("Attention", Plain)),
        ("remark", labeled("Remarks", Plain)),
        ("remarks", labeled("Remarks", Plain)),
        ("todo", labeled("Todo", Plain)),
        ("bug", labeled("Bug", Plain)),
        ("pre", labeled("Precondition", Plain)),
        ("post", labeled("Postcondition", Plain)),
        ("invariant", labeled("Invariant", Plain)),
        ("copyright", labeled("Copyright", Plain)),
    ])
});

static RE_TAG_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[@\\]([A-Za-z_][A-Za-z0-9_]*)(.*)$").unwrap());

static RE_DIRECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\[[A-Za-z, ]*\])\s*").unwrap());

/// A line that opens with a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine<'a> {
    pub name: &'a str,
    /// Everything after the name, untrimmed
    pub rest: &'a str,
}

/// Recognise a line-initial tag. Inline word commands and escapes are not tags.
pub fn parse_head(line: &str) -> Option<TagLine<'_>> {
    let caps = RE_TAG_HEAD.captures(line.trim_start())?;
    let name = caps.get(1)?.as_str();
    let rest = caps.get(2)?.as_str();

    if inline::is_word_command(name) {
        return None;
    }
    // `@return: x` is a tag; `@example.com` and `@foo:bar` are not
    let rest = match rest.strip_prefix(':') {
        Some(after) if after.is_empty() || after.starts_with(char::is_whitespace) => after,
        Some(_) => return None,
        None => rest,
    };
    match rest.chars().next() {
        None => {}
        Some(c) if c.is_whitespace() || c == '[' || c == '{' => {}
        Some(_) => return None,
    }
    Some(TagLine { name, rest })
}

pub fn lookup(name: &str) -> Option<TagRule> {
    TAGS.get(name).copied()
}

pub fn is_author(name: &str) -> bool {
    matches!(name, "author" | "authors")
}

/// Render a tag's argument text in `style`.
pub fn render_argument(rest: &str, style: ArgStyle) -> String {
    let arg = rest.trim();
    match style {
        ArgStyle::Plain => inline::render(arg),
        ArgStyle::NamedArgument => {
            let (direction, arg) = match RE_DIRECTION.captures(arg) {
                Some(caps) => {
                    let whole = caps.get(0).map_or(0, |m| m.end());
                    (caps.get(1).map(|m| m.as_str()), &arg[whole..])
                }
                None => (None, arg),
            };
            let (name, tail) = match arg.find(char::is_whitespace) {
                Some(pos) => (&arg[..pos], arg[pos..].trim_start()),
                None => (arg, ""),
            };

            let mut out = String::new();
            if let Some(dir) = direction {
                out.push_str(dir);
                if !name.is_empty() {
                    out.push(' ');
                }
            }
            if !name.is_empty() {
                out.push_str(&format!("<i>{}</i>", inline::render(name)));
            }
            if !tail.is_empty() {
                out.push(' ');
                out.push_str(&inline::render(tail));
            }
            out
        }
    }
}

/// If `line` opens with `terminator` (either spelling), return what follows it.
pub fn strip_terminator<'a>(line: &'a str, terminator: &str) -> Option<&'a str> {
    let t = line.trim_start();
    let body = t.strip_prefix('@').or_else(|| t.strip_prefix('\\'))?;
    let rest = body.strip_prefix(terminator)?;
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' => None,
        _ => Some(rest),
    }
}

/// Drop a `{.lang}` annotation after `@code`.
pub fn skip_language(rest: &str) -> &str {
    if rest.starts_with('{') {
        if let Some(end) = rest.find('}') {
            return &rest[end + 1..];
        }
    }
    rest
}
