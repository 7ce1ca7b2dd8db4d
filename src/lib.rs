//! # phpgen
//!
//! Composable PHP source generation for Rust.
//!
//! Code is built as a tree of lines: plain text, and groups that indent
//! their contents. Combinators transform these trees (suffix the last line,
//! wrap, join, comment, lay out calls) while keeping the indentation of any
//! nested group intact. A [`Document`] renders the tree, collapsing blank
//! lines and emitting sorted, conflict-free `use` declarations for every
//! symbol imported along the way.
//!
//! ## Quick Start
//!
//! ```
//! use phpgen::{lines, statement, Document, FullyQualified, Group, NamespaceName};
//!
//! fn main() -> phpgen::Result<()> {
//!     let document = Document::new().with_namespace(NamespaceName::new("App\\Services")?);
//!     let user = document.import(FullyQualified::new("App\\Models\\User")?);
//!
//!     let php = document.render_file(lines![
//!         "final class UserService",
//!         "{",
//!         Group::indent(1, lines![
//!             format!("public function create(): {user}"),
//!             "{",
//!             Group::indent(1, statement(format!("return new {user}()"))),
//!             "}",
//!         ]),
//!         "}",
//!     ]);
//!
//!     assert!(php.contains("use App\\Models\\User;"));
//!     assert!(php.contains("        return new User();"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Lazy content**: closures run once, at render time, and may import
//! - **Group-aware combinators**: transformations recurse into nested groups
//! - **Import registry**: `User`, `User2`, ... aliases; functions kept apart
//! - **Deterministic output**: case-insensitive sorted declarations
//! - **Configurable**: indentation, header lines and blank-line limits

pub mod combinator;
pub mod error;
pub mod model;
pub mod render;
pub mod symbol;

// Re-export commonly used types
pub use combinator::{
    all_suffix, attribute, block_comment, chained_call, class_reference, comment, doc_comment,
    function_call, indent, indent_with, join, join_first_pair, maybe_dump, maybe_nowdoc,
    maybe_wrap, method_call, prefix, prefix_first, statement, suffix_first, suffix_last, trim,
    wrap, CallOptions, Dispatch, ReferenceMode,
};
pub use error::{Error, Result};
pub use model::{resolve, Code, Group, Line};
pub use render::{Document, ImportRegistry, Importer, IndentStyle, RenderOptions};
pub use symbol::{Alias, ClassName, FullyQualified, FunctionName, NamespaceName, Symbol};

/// Render a fragment with default options.
///
/// Blank-line runs are collapsed and surrounding newlines stripped; no
/// header or declarations are added.
///
/// ```
/// use phpgen::{lines, render, Group};
///
/// assert_eq!(render(lines!["a", Group::indent(1, "b"), "c"]), "a\n    b\nc");
/// ```
pub fn render<'a>(data: impl Into<Code<'a>>) -> String {
    Document::new().render(data)
}

/// Render a complete file with default options and no namespace.
///
/// ```
/// use phpgen::render_file;
///
/// assert_eq!(
///     render_file("echo 'hi';"),
///     "<?php\n\ndeclare(strict_types=1);\n\necho 'hi';\n"
/// );
/// ```
pub fn render_file<'a>(data: impl Into<Code<'a>>) -> String {
    Document::new().render_file(data)
}
