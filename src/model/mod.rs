//! Line model for composed source code.
//!
//! This module defines the tree that callers build and the renderer
//! consumes: text lines, indented groups, and the lazily-evaluated [`Code`]
//! input that resolves into them.

mod code;
mod line;

pub use code::{resolve, Code};
pub use line::{Group, Line};
