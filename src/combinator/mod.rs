//! Line-transformation combinators.
//!
//! Every combinator takes anything convertible to [`Code`](crate::Code),
//! resolves it, and returns concrete lines. Transformations that touch a
//! group rebuild it with the same depth, so indentation survives any
//! amount of nesting.

mod call;
mod comment;
mod edges;
mod join;
mod literal;
mod transform;

pub use call::{
    attribute, chained_call, class_reference, function_call, method_call, CallOptions, Dispatch,
    ReferenceMode,
};
pub use comment::{block_comment, comment, doc_comment};
pub use edges::{maybe_wrap, prefix_first, statement, suffix_first, suffix_last, wrap};
pub use join::{join, join_first_pair};
pub use literal::maybe_nowdoc;
pub use transform::{all_suffix, indent, indent_with, maybe_dump, prefix, trim};
