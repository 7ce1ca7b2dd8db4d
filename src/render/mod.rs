//! Rendering module for turning line trees into PHP source text.

mod cleanup;
mod document;
mod flatten;
mod imports;
mod options;

pub use cleanup::{collapse_blank_lines, trim_newlines};
pub use document::Document;
pub use flatten::flatten;
pub use imports::{ImportRegistry, Importer};
pub use options::{IndentStyle, RenderOptions};
