//! Renderer module — trait-based format dispatch.

pub mod fragment;
pub mod html;
pub mod json;

use crate::model::{RenderOptions, SourceDoc};
use anyhow::{anyhow, Result};

/// Trait for rendering a SourceDoc into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &SourceDoc, opts: &RenderOptions) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "fragment" | "frag" => Ok(Box::new(fragment::FragmentRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use fragment, html, or json",
            format
        )),
    }
}
