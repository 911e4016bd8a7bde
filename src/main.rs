//! doxyhtml — render doxygen comments as HTML fragments.
//!
//! Two modes:
//!
//! - **stdin mode**: `doxyhtml --kind doxygen < comment.txt` converts a single
//!   comment; `--extract` treats stdin as a C source file instead.
//! - **file mode**: `doxyhtml -o docs -f html include/*.h` writes one output
//!   file per file stem; `list.c` and `list.h` share `list.html`.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use doxyhtml::model::{CommentKind, RenderOptions, SourceDoc, DEFAULT_AUTHOR};
use doxyhtml::parser::merge;
use doxyhtml::{parser, render};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "doxyhtml",
    about = "Render doxygen/javadoc style comments as HTML fragments"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: fragment (default), html, json
    #[arg(short = 'f', long, default_value = "fragment")]
    format: String,

    /// Comment kind of stdin. Guessed from the opening delimiter if omitted.
    #[arg(short = 'k', long, value_enum)]
    kind: Option<CommentKind>,

    /// Treat stdin as a C-family source file and convert every comment in it
    #[arg(long, conflicts_with = "kind")]
    extract: bool,

    /// Author named when a documented block has no @author tag
    #[arg(long, conflicts_with = "no_author")]
    author: Option<String>,

    /// Never synthesize an Author paragraph
    #[arg(long)]
    no_author: bool,

    /// Keep plain (non-doxygen) comments too
    #[arg(long)]
    all_comments: bool,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        let default_author = if self.no_author {
            None
        } else {
            Some(
                self.author
                    .clone()
                    .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            )
        };
        RenderOptions { default_author }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// stdin mode: one comment in, one fragment out.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let opts = cli.render_options();

    if cli.extract {
        let mut doc = parser::c::parse(&input);
        filter_comments(&mut doc, cli.all_comments);
        let renderer = render::create_renderer(&cli.format)?;
        print!("{}", renderer.render(&doc, &opts));
        return Ok(());
    }

    let kind = cli.kind.unwrap_or_else(|| CommentKind::classify(&input));
    debug!(?kind, "rendering stdin");
    println!("{}", doxyhtml::render_with(&input, kind, &opts));
    Ok(())
}

/// file mode: process multiple files, write one output per output name.
/// Inputs that share a stem (`list.c` + `list.h`) land in the same file.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();
    let opts = cli.render_options();

    let mut parsed: Vec<(PathBuf, SourceDoc)> = Vec::new();
    for path in collect_inputs(&cli.files)? {
        let Some(mut doc) = load_source(&path) else {
            continue;
        };
        filter_comments(&mut doc, cli.all_comments);
        if doc.comments.is_empty() {
            debug!("no documentation comments in {}", path.display());
            continue;
        }
        parsed.push((path, doc));
    }

    for group in merge::merge(parsed) {
        let out_path = output_dir.join(format!("{}.{}", group.name, ext));
        if group.sources.len() > 1 {
            let names: Vec<String> = group.sources.iter().map(|p| p.display().to_string()).collect();
            info!("merging {} into {}", names.join(", "), out_path.display());
        }
        fs::write(&out_path, renderer.render(&group.doc, &opts))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(
            "wrote {} ({} comments)",
            out_path.display(),
            group.doc.comments.len()
        );
    }

    Ok(())
}

/// Read and parse one input; unreadable or unsupported files are skipped
/// with a warning.
fn load_source(path: &Path) -> Option<SourceDoc> {
    let parsed = fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| parser::parse_file(path, &content));
    match parsed {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!("skipping {}: {}", path.display(), e);
            None
        }
    }
}

/// Resolve every argument to input files, sorted and deduplicated.
fn collect_inputs(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for arg in args {
        let found = resolve_input(arg)?;
        if found.is_empty() {
            warn!("no files matched: {}", arg);
        }
        files.extend(found);
    }
    Ok(files.into_iter().collect())
}

/// A file as given, a directory's supported sources (non-recursive), or the
/// matches of a glob pattern.
fn resolve_input(arg: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(arg);
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if path.is_dir() {
        let entries = fs::read_dir(path)
            .with_context(|| format!("failed to read directory: {}", path.display()))?;
        return Ok(entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.is_file() && parser::is_supported(p))
            .collect());
    }
    Ok(glob::glob(arg)
        .with_context(|| format!("invalid glob pattern: {}", arg))?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect())
}

/// Drop plain comments unless --all-comments was given.
fn filter_comments(doc: &mut SourceDoc, all_comments: bool) {
    if !all_comments {
        doc.comments.retain(|c| c.kind.is_doxygen());
    }
}
