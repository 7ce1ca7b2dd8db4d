//! Call, attribute and class reference helpers.
//!
//! The helpers that mention classes take an [`Importer`] so the class is
//! declared as a side effect and referenced by its alias.

use super::{all_suffix, wrap};
use crate::error::Result;
use crate::model::{resolve, Code, Group, Line};
use crate::render::Importer;
use crate::symbol::{FullyQualified, Symbol};

const CONSTRUCTOR: &str = "__construct";

/// How a method is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch {
    /// `$object->method()`, or `new Class()` for constructors
    #[default]
    Instance,
    /// `Class::method()`
    Static,
}

/// Options for method calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOptions {
    /// Instance or static dispatch
    pub dispatch: Dispatch,

    /// Put a comma after the last argument of a multi-line call
    pub trailing_commas: bool,
}

impl CallOptions {
    /// Create call options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a static call.
    pub fn static_call() -> Self {
        Self::default().with_dispatch(Dispatch::Static)
    }

    /// Set the dispatch mode.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Enable or disable the trailing comma.
    pub fn with_trailing_commas(mut self, enabled: bool) -> Self {
        self.trailing_commas = enabled;
        self
    }
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            dispatch: Dispatch::Instance,
            trailing_commas: true,
        }
    }
}

/// How [`class_reference`] names the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceMode {
    /// Import the class and use its alias
    #[default]
    Import,
    /// Import the enclosing namespace and use `Scope\Class`
    ByScope,
    /// Use the absolute path without importing
    FullyQualified,
}

/// Lay out `callee(args)`.
///
/// No arguments give `callee()`, a single argument is wrapped in place and
/// several arguments go one per line in an indented group.
fn call_lines(
    callee: &str,
    open: &str,
    close: &str,
    args: Vec<Line>,
    trailing_commas: bool,
) -> Vec<Line> {
    match args.len() {
        0 => vec![Line::Text(format!("{callee}{open}{close}"))],
        1 => wrap(&format!("{callee}{open}"), args, Some(close)),
        _ => vec![
            Line::Text(format!("{callee}{open}")),
            Line::Group(Group::indent(1, separated(args, trailing_commas))),
            Line::text(close),
        ],
    }
}

fn separated(mut args: Vec<Line>, trailing_commas: bool) -> Vec<Line> {
    if trailing_commas {
        return all_suffix(",", args);
    }

    let last = args.pop();
    let mut lines = all_suffix(",", args);
    lines.extend(last);
    lines
}

/// Call a plain function: `name(args)`.
pub fn function_call<'a>(name: &str, args: impl Into<Code<'a>>) -> Vec<Line> {
    call_lines(name, "(", ")", resolve(args), true)
}

/// Call a method on an object expression or a class.
///
/// With [`Dispatch::Static`], `object` is a class path that gets imported,
/// except for `__construct` where it is used verbatim (e.g. `parent`).
/// With [`Dispatch::Instance`], `__construct` imports `object` and emits
/// `new Alias(...)`; any other method is called on the expression as-is.
pub fn method_call<'a>(
    importer: &impl Importer,
    object: &str,
    method: &str,
    args: impl Into<Code<'a>>,
    options: CallOptions,
) -> Result<Vec<Line>> {
    let callee = match (options.dispatch, method == CONSTRUCTOR) {
        (Dispatch::Static, false) => {
            let class = Symbol::from(FullyQualified::new(object)?);
            format!("{}::{method}", importer.import(&class))
        }
        (Dispatch::Static, true) => format!("{object}::{method}"),
        (Dispatch::Instance, true) => {
            let class = Symbol::from(FullyQualified::new(object)?);
            format!("new {}", importer.import(&class))
        }
        (Dispatch::Instance, false) => format!("{object}->{method}"),
    };

    Ok(call_lines(
        &callee,
        "(",
        ")",
        resolve(args),
        options.trailing_commas,
    ))
}

/// Call a method on a multi-line object expression.
///
/// The object lines come first and the call follows on its own indented
/// line: `$builder` then `    ->build()`.
pub fn chained_call<'a, 'b>(
    object: impl Into<Code<'a>>,
    method: &str,
    args: impl Into<Code<'b>>,
    options: CallOptions,
) -> Vec<Line> {
    let mut lines = resolve(object);
    let call = call_lines(
        &format!("->{method}"),
        "(",
        ")",
        resolve(args),
        options.trailing_commas,
    );
    lines.push(Line::Group(Group::indent(1, call)));
    lines
}

/// Emit an attribute, importing its class: `#[Alias]` or `#[Alias(args)]`.
pub fn attribute<'a>(
    importer: &impl Importer,
    symbol: impl Into<Symbol>,
    args: impl Into<Code<'a>>,
) -> Vec<Line> {
    let alias = importer.import(&symbol.into());
    let args = resolve(args);

    if args.is_empty() {
        return vec![Line::Text(format!("#[{alias}]"))];
    }

    call_lines(&format!("#[{alias}"), "(", ")]", args, true)
}

/// Reference a class constant: `Alias::class`.
pub fn class_reference(
    importer: &impl Importer,
    symbol: impl Into<Symbol>,
    mode: ReferenceMode,
) -> String {
    let symbol = symbol.into();
    let name = match mode {
        ReferenceMode::Import => importer.import(&symbol),
        ReferenceMode::ByScope => importer.import_by_scope(&symbol),
        ReferenceMode::FullyQualified => format!("\\{}", symbol.path()),
    };
    format!("{name}::class")
}
