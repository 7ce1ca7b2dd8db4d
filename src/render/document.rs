//! Document assembly: header, declarations and body.

use std::cell::RefCell;

use super::cleanup::{collapse_blank_lines, trim_newlines};
use super::flatten::flatten;
use super::imports::{ImportRegistry, Importer};
use super::options::RenderOptions;
use crate::error::Result;
use crate::model::{resolve, Code};
use crate::symbol::{NamespaceName, Symbol};

/// A PHP file being generated.
///
/// A document owns the imports declared while its content is built. Imports
/// go through `&self`, so lazy producers can call [`Document::import`] while
/// the same document is rendering them:
///
/// ```
/// use phpgen::{Code, Document, FullyQualified, NamespaceName};
///
/// let document = Document::new().with_namespace(NamespaceName::new("App\\Services").unwrap());
/// let out = document.render_file(Code::lazy(|| {
///     let user = document.import(FullyQualified::new("App\\Models\\User").unwrap());
///     format!("function find(int $id): ?{user} {{}}")
/// }));
///
/// assert!(out.contains("use App\\Models\\User;"));
/// assert!(out.ends_with("function find(int $id): ?User {}\n"));
/// ```
#[derive(Debug, Default)]
pub struct Document {
    namespace: Option<NamespaceName>,
    options: RenderOptions,
    imports: RefCell<ImportRegistry>,
}

impl Document {
    /// Create a document in the global namespace with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the namespace the file lives in.
    pub fn with_namespace(mut self, namespace: NamespaceName) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Set render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the declared namespace, if any.
    pub fn namespace(&self) -> Option<&NamespaceName> {
        self.namespace.as_ref()
    }

    /// Get the render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Import a symbol and get the alias to reference it by.
    pub fn import(&self, symbol: impl Into<Symbol>) -> String {
        self.imports.borrow_mut().import(&symbol.into())
    }

    /// Import the namespace enclosing a class and get `Scope\Class`.
    pub fn import_by_scope(&self, symbol: impl Into<Symbol>) -> String {
        self.imports.borrow_mut().import_by_scope(&symbol.into())
    }

    /// Parse and import a path; `function A\b` imports a function.
    pub fn import_path(&self, path: &str) -> Result<String> {
        let symbol: Symbol = path.parse()?;
        Ok(self.import(symbol))
    }

    /// Import an enum and reference one of its cases: `Status::Active`.
    pub fn import_enum_case(&self, symbol: impl Into<Symbol>, case: &str) -> String {
        format!("{}::{}", self.import(symbol), case)
    }

    /// Get the `use` declarations for everything imported so far.
    pub fn declarations(&self) -> Vec<String> {
        self.imports.borrow().declarations(self.namespace.as_ref())
    }

    /// Render a fragment without header or declarations.
    pub fn render<'a>(&self, data: impl Into<Code<'a>>) -> String {
        let lines = resolve(data);
        let text = flatten(&lines, &self.options.indent.unit()).join("\n");
        let collapsed = collapse_blank_lines(&text, self.options.max_blank_lines);

        log::trace!(
            "Rendered {} top-level lines into {} bytes ({} before collapsing)",
            lines.len(),
            collapsed.len(),
            text.len()
        );

        trim_newlines(&collapsed).to_string()
    }

    /// Render a complete file: header, namespace, declarations and body.
    ///
    /// The body is resolved first so imports made while producing it are
    /// declared. The result ends with exactly one newline, or is empty when
    /// there is nothing to emit at all.
    pub fn render_file<'a>(&self, data: impl Into<Code<'a>>) -> String {
        let body = self.render(data);

        let mut header = Vec::new();
        if self.options.open_tag {
            header.push("<?php".to_string());
        }
        if self.options.strict_types {
            header.push("declare(strict_types=1);".to_string());
        }
        if let Some(namespace) = &self.namespace {
            header.push(format!("namespace {};", namespace));
        }

        let declarations = self.declarations();

        let mut sections = header;
        if !declarations.is_empty() {
            sections.push(declarations.join("\n"));
        }
        if !body.is_empty() {
            sections.push(body);
        }

        if sections.is_empty() {
            return String::new();
        }

        format!("{}\n", sections.join("\n\n"))
    }
}

impl Importer for Document {
    fn import(&self, symbol: &Symbol) -> String {
        self.imports.borrow_mut().import(symbol)
    }

    fn import_by_scope(&self, symbol: &Symbol) -> String {
        self.imports.borrow_mut().import_by_scope(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines;
    use crate::model::Group;
    use crate::render::IndentStyle;
    use crate::symbol::FullyQualified;

    fn fq(path: &str) -> FullyQualified {
        FullyQualified::new(path).unwrap()
    }

    #[test]
    fn test_render_file_with_namespace() {
        let document = Document::new().with_namespace(NamespaceName::new("App\\Models").unwrap());
        assert_eq!(
            document.render_file(lines![]),
            "<?php\n\ndeclare(strict_types=1);\n\nnamespace App\\Models;\n"
        );
    }

    #[test]
    fn test_render_file_without_namespace() {
        assert_eq!(
            Document::new().render_file(lines![]),
            "<?php\n\ndeclare(strict_types=1);\n"
        );
    }

    #[test]
    fn test_render_file_with_imports() {
        let document = Document::new().with_namespace(NamespaceName::new("App\\Services").unwrap());
        assert_eq!(document.import(fq("App\\Models\\User")), "User");

        assert_eq!(
            document.render_file("class Test {}"),
            "<?php\n\ndeclare(strict_types=1);\n\nnamespace App\\Services;\n\nuse App\\Models\\User;\n\nclass Test {}\n"
        );
    }

    #[test]
    fn test_render_file_skips_same_namespace() {
        let document = Document::new().with_namespace(NamespaceName::new("App\\Models").unwrap());
        document.import(fq("App\\Models\\User"));
        assert_eq!(
            document.render_file(lines![]),
            "<?php\n\ndeclare(strict_types=1);\n\nnamespace App\\Models;\n"
        );
    }

    #[test]
    fn test_render_file_without_header() {
        let options = RenderOptions::new().with_open_tag(false).with_strict_types(false);
        let document = Document::new().with_options(options);

        assert_eq!(document.render_file(lines![]), "");
        assert_eq!(document.render_file("echo 1;"), "echo 1;\n");
    }

    #[test]
    fn test_imports_during_render() {
        let document = Document::new();
        let out = document.render_file(Code::lazy(|| {
            let user = document.import(fq("App\\Models\\User"));
            format!("new {user}();")
        }));
        assert_eq!(
            out,
            "<?php\n\ndeclare(strict_types=1);\n\nuse App\\Models\\User;\n\nnew User();\n"
        );
    }

    #[test]
    fn test_import_path_and_enum_case() {
        let document = Document::new();
        assert_eq!(document.import_path("function array_map").unwrap(), "array_map");
        assert_eq!(
            document.import_enum_case(fq("App\\Enums\\Status"), "ACTIVE"),
            "Status::ACTIVE"
        );
        assert!(document.import_path("\\").is_err());

        assert_eq!(
            document.declarations(),
            vec!["use App\\Enums\\Status;", "use function array_map;"]
        );
    }

    #[test]
    fn test_render_collapses_blank_lines() {
        let document = Document::new();
        let out = document.render(lines![
            "class Test {",
            "",
            "",
            Group::indent(1, lines!["", "", "public function method()", "{", "}"]),
            "",
            "",
            "}",
        ]);
        assert_eq!(out, "class Test {\n\n    public function method()\n    {\n    }\n\n}");
    }

    #[test]
    fn test_render_keeps_first_line_indentation() {
        assert_eq!(Document::new().render(Group::indent(1, "x")), "    x");
    }

    #[test]
    fn test_render_with_tabs_and_more_blank_lines() {
        let options = RenderOptions::new()
            .with_indent(IndentStyle::Tabs)
            .with_max_blank_lines(2);
        let document = Document::new().with_options(options);

        let out = document.render(lines!["a", "", "", "", "", Group::indent(1, "b")]);
        assert_eq!(out, "a\n\n\n\tb");
    }

    #[test]
    fn test_render_with_largest_blank_line_limit() {
        let options = RenderOptions::from_json(r#"{"max_blank_lines": 255}"#).unwrap();
        let document = Document::new().with_options(options);

        let out = document.render(lines!["a", vec![""; 300], "b"]);
        assert_eq!(out, format!("a{}b", "\n".repeat(256)));
    }
}
