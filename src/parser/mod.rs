//! Parser module — dispatch by file extension.

pub mod c;
pub mod merge;

use crate::model::SourceDoc;
use anyhow::{anyhow, Result};
use std::path::Path;

/// File extensions recognized as C-family sources.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "c", "h", "cc", "cpp", "cxx", "hpp", "hh", "hxx", "ipp", "tpp", "m", "mm",
];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Parse a source file into a SourceDoc based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<SourceDoc> {
    if !is_supported(path) {
        return Err(anyhow!("unsupported file type: {}", path.display()));
    }
    let mut doc = c::parse(content);
    doc.title = path.file_stem().map(|s| s.to_string_lossy().to_string());
    Ok(doc)
}
