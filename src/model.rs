//! Data model shared by the converter, the extractor and the renderers.

use serde::Serialize;

/// Author used when a doxygen block documents tags but names nobody.
pub const DEFAULT_AUTHOR: &str = "thp";

/// Delimiter style and documentation significance of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    /// `/* ... */`
    #[value(name = "block")]
    BlockComment,
    /// `// ...`
    #[value(name = "line")]
    LineComment,
    /// `/** ... */` or `/*! ... */`
    #[value(name = "doxygen")]
    DoxygenComment,
    /// `/// ...` or `//! ...`
    #[value(name = "doxygen-line")]
    DoxygenLineComment,
}

impl CommentKind {
    /// Guess the kind from the opening delimiter. Text that opens with no
    /// comment delimiter at all is treated as a plain block comment body.
    pub fn classify(text: &str) -> CommentKind {
        let t = text.trim_start();
        if t.starts_with("/**/") {
            CommentKind::BlockComment
        } else if t.starts_with("/**") || t.starts_with("/*!") {
            CommentKind::DoxygenComment
        } else if t.starts_with("///") || t.starts_with("//!") {
            // `////` banners are ordinary line comments
            if t.starts_with("////") {
                CommentKind::LineComment
            } else {
                CommentKind::DoxygenLineComment
            }
        } else if t.starts_with("//") {
            CommentKind::LineComment
        } else {
            CommentKind::BlockComment
        }
    }

    pub fn is_doxygen(self) -> bool {
        matches!(
            self,
            CommentKind::DoxygenComment | CommentKind::DoxygenLineComment
        )
    }

    pub fn is_line(self) -> bool {
        matches!(
            self,
            CommentKind::LineComment | CommentKind::DoxygenLineComment
        )
    }
}

/// One raw comment, delimiters included.
#[derive(Debug, Clone, Copy)]
pub struct CommentBlock<'a> {
    pub text: &'a str,
    pub kind: CommentKind,
}

impl<'a> CommentBlock<'a> {
    pub fn new(text: &'a str, kind: CommentKind) -> Self {
        CommentBlock { text, kind }
    }
}

/// Knobs for a render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name for the synthesized `Author:` paragraph; `None` disables it.
    pub default_author: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            default_author: Some(DEFAULT_AUTHOR.to_string()),
        }
    }
}

/// A comment located in a source file.
#[derive(Debug, Clone)]
pub struct DocComment {
    pub kind: CommentKind,
    /// 1-based line of the opening delimiter
    pub line: usize,
    pub text: String,
    /// First non-blank source line after the comment, trimmed
    pub subject: Option<String>,
    /// Source file, set when several files share one output
    pub source: Option<String>,
}

impl DocComment {
    pub fn block(&self) -> CommentBlock<'_> {
        CommentBlock::new(&self.text, self.kind)
    }
}

/// All comments extracted from a single source file.
#[derive(Debug, Default)]
pub struct SourceDoc {
    /// File stem, when known
    pub title: Option<String>,
    pub comments: Vec<DocComment>,
}
