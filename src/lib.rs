//! doxyhtml — turn doxygen/javadoc style source comments into HTML fragments.
//!
//! The converter in [`doxygen`] is a pure function over one isolated comment.
//! [`parser`] finds comments in C-family files and [`render`] lays a whole
//! file out as a fragment list, a standalone page, or JSON.

pub mod doxygen;
pub mod model;
pub mod parser;
pub mod render;

pub use doxygen::{render_to_html, render_with};
pub use model::{CommentBlock, CommentKind, RenderOptions};
