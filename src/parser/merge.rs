//! Output-name merge: sources that map to the same output file are combined.
//!
//! `list.c` and `list.h`, or `a/list.h` and `b/list.h`, all render to
//! `list.<ext>`. Their comments are concatenated into one SourceDoc, in input
//! order, each tagged with the file it came from.

use crate::model::SourceDoc;
use std::path::{Path, PathBuf};

/// Output name (without extension) for a source path.
/// "include/list.h" → "list"
pub fn output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// A group of inputs that share an output name.
#[derive(Debug)]
pub struct Merged {
    pub name: String,
    pub sources: Vec<PathBuf>,
    pub doc: SourceDoc,
}

/// Group documents by output name, keeping first-seen order.
pub fn merge(docs: Vec<(PathBuf, SourceDoc)>) -> Vec<Merged> {
    let mut groups: Vec<Merged> = Vec::new();

    for (path, doc) in docs {
        let name = output_name(&path);
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => {
                if group.sources.len() == 1 {
                    let first = group.sources[0].display().to_string();
                    for c in &mut group.doc.comments {
                        c.source = Some(first.clone());
                    }
                }
                let source = path.display().to_string();
                group.doc.comments.extend(doc.comments.into_iter().map(|mut c| {
                    c.source = Some(source.clone());
                    c
                }));
                group.sources.push(path);
            }
            None => groups.push(Merged {
                name,
                sources: vec![path],
                doc,
            }),
        }
    }

    groups
}
