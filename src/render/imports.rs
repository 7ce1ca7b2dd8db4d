//! Import registry: alias assignment and `use` declarations.

use indexmap::IndexMap;

use crate::symbol::{NamespaceName, Symbol, SEPARATOR};

/// Something that can declare an import and hand back the name to use.
///
/// The call and attribute helpers only need this capability, so they take
/// `&impl Importer` rather than a whole document.
pub trait Importer {
    /// Import `symbol` and get the alias to reference it by.
    fn import(&self, symbol: &Symbol) -> String;

    /// Import the namespace enclosing `symbol` and get `Scope\Leaf`.
    fn import_by_scope(&self, symbol: &Symbol) -> String;
}

/// Alias-to-symbol bindings for one document.
///
/// Classes and namespaces share one alias space and functions have their
/// own, matching how PHP resolves `use` and `use function`.
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    classes: IndexMap<String, Symbol>,
    functions: IndexMap<String, Symbol>,
}

impl ImportRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `symbol` to a free alias and return it.
    ///
    /// Importing the same path again returns the alias it already has,
    /// whichever kind of symbol names it.
    /// An explicit [`Alias`](crate::Alias) binds its target under the
    /// requested name.
    pub fn import(&mut self, symbol: &Symbol) -> String {
        match symbol {
            Symbol::Alias(alias) => self.bind(alias.alias(), alias.target()),
            other => self.bind(other.preferred_alias(), other),
        }
    }

    /// Import the namespace enclosing a qualified name and return the
    /// reference through it (e.g. `Models\User`).
    ///
    /// Anything without an enclosing namespace is imported directly.
    pub fn import_by_scope(&mut self, symbol: &Symbol) -> String {
        match symbol {
            Symbol::Qualified(qualified) => match qualified.namespace() {
                Some(namespace) => {
                    let scope = Symbol::Namespace(namespace.clone());
                    let alias = self.bind(namespace.last_part(), &scope);
                    format!("{}{}{}", alias, SEPARATOR, qualified.class_name())
                }
                None => self.import(symbol),
            },
            other => self.import(other),
        }
    }

    fn bind(&mut self, preferred: &str, target: &Symbol) -> String {
        let space = if target.is_function() {
            &mut self.functions
        } else {
            &mut self.classes
        };

        let mut attempt = 1;
        loop {
            let candidate = if attempt == 1 {
                preferred.to_string()
            } else {
                format!("{preferred}{attempt}")
            };

            match space.get(&candidate) {
                Some(existing) if existing.path() == target.path() => return candidate,
                Some(_) => attempt += 1,
                None => {
                    if attempt > 1 {
                        log::debug!("Alias `{preferred}` taken, importing {target} as `{candidate}`");
                    }
                    space.insert(candidate.clone(), target.clone());
                    return candidate;
                }
            }
        }
    }

    /// Check if nothing has been imported.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.functions.is_empty()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.classes.len() + self.functions.len()
    }

    /// Render sorted `use` declarations.
    ///
    /// Classes living directly in `scope` need no declaration and are left
    /// out, unless they were bound under a different name.
    pub fn declarations(&self, scope: Option<&NamespaceName>) -> Vec<String> {
        let mut entries: Vec<(&String, &Symbol)> =
            self.classes.iter().chain(self.functions.iter()).collect();
        entries.sort_by(|(a_alias, a), (b_alias, b)| a.cmp(b).then_with(|| a_alias.cmp(b_alias)));

        entries
            .into_iter()
            .filter_map(|(alias, symbol)| {
                let natural = alias == symbol.leaf_name();

                if symbol.is_function() {
                    return Some(declaration("use function", symbol, alias, natural));
                }

                if natural && scope.is_some() && symbol.scope().as_ref() == scope {
                    log::debug!("Skipping declaration of {} inside its own namespace", symbol);
                    return None;
                }

                Some(declaration("use", symbol, alias, natural))
            })
            .collect()
    }
}

fn declaration(keyword: &str, symbol: &Symbol, alias: &str, natural: bool) -> String {
    if natural {
        format!("{} {};", keyword, symbol.path())
    } else {
        format!("{} {} as {};", keyword, symbol.path(), alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Alias, ClassName, FullyQualified, FunctionName};

    fn sym(path: &str) -> Symbol {
        path.parse().unwrap()
    }

    #[test]
    fn test_import_returns_leaf() {
        let mut registry = ImportRegistry::new();
        assert_eq!(registry.import(&sym("App\\Models\\User")), "User");
        assert_eq!(registry.declarations(None), vec!["use App\\Models\\User;"]);
    }

    #[test]
    fn test_conflicts_get_numbered() {
        let mut registry = ImportRegistry::new();
        assert_eq!(registry.import(&sym("App\\Models\\User")), "User");
        assert_eq!(registry.import(&sym("App\\Entities\\User")), "User2");
        assert_eq!(registry.import(&sym("Legacy\\User")), "User3");
        assert_eq!(registry.import(&sym("App\\Entities\\User")), "User2");
        assert_eq!(registry.len(), 3);

        assert_eq!(
            registry.declarations(None),
            vec![
                "use App\\Entities\\User as User2;",
                "use App\\Models\\User;",
                "use Legacy\\User as User3;",
            ]
        );
    }

    #[test]
    fn test_same_path_as_different_kinds_shares_alias() {
        let mut registry = ImportRegistry::new();
        let class = Symbol::from(ClassName::new("DateTimeImmutable").unwrap());
        assert_eq!(registry.import(&class), "DateTimeImmutable");
        assert_eq!(registry.import(&sym("DateTimeImmutable")), "DateTimeImmutable");
        assert_eq!(registry.import(&sym("\\DateTimeImmutable")), "DateTimeImmutable");

        assert_eq!(registry.import_by_scope(&sym("App\\Models\\User")), "Models\\User");
        assert_eq!(registry.import(&sym("App\\Models")), "Models");
        let namespace = Symbol::from(NamespaceName::new("App\\Models").unwrap());
        assert_eq!(registry.import(&namespace), "Models");

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.declarations(None),
            vec!["use App\\Models;", "use DateTimeImmutable;"]
        );
    }

    #[test]
    fn test_reimport_is_stable() {
        let mut registry = ImportRegistry::new();
        let first = registry.import(&sym("App\\User"));
        let second = registry.import(&sym("App\\User"));
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_functions_have_their_own_space() {
        let mut registry = ImportRegistry::new();
        assert_eq!(registry.import(&sym("App\\format")), "format");
        assert_eq!(registry.import(&sym("function App\\Helpers\\format")), "format");
        assert_eq!(registry.import(&sym("function Other\\format")), "format2");

        assert_eq!(
            registry.declarations(None),
            vec![
                "use App\\format;",
                "use function App\\Helpers\\format;",
                "use function Other\\format as format2;",
            ]
        );
    }

    #[test]
    fn test_explicit_alias() {
        let mut registry = ImportRegistry::new();
        let target = FullyQualified::new("App\\Models\\User").unwrap();
        let alias = Alias::new("UserModel", target).unwrap();

        assert_eq!(registry.import(&Symbol::from(alias)), "UserModel");
        assert_eq!(
            registry.declarations(None),
            vec!["use App\\Models\\User as UserModel;"]
        );
    }

    #[test]
    fn test_import_by_scope() {
        let mut registry = ImportRegistry::new();
        assert_eq!(registry.import_by_scope(&sym("App\\Models\\User")), "Models\\User");
        assert_eq!(registry.import_by_scope(&sym("App\\Models\\Post")), "Models\\Post");
        assert_eq!(registry.import_by_scope(&sym("Legacy\\Models\\User")), "Models2\\User");
        assert_eq!(
            registry.import_by_scope(&Symbol::from(ClassName::new("Helper").unwrap())),
            "Helper"
        );

        assert_eq!(
            registry.declarations(None),
            vec!["use App\\Models;", "use Helper;", "use Legacy\\Models as Models2;"]
        );
    }

    #[test]
    fn test_same_namespace_is_skipped() {
        let mut registry = ImportRegistry::new();
        registry.import(&sym("App\\Models\\User"));
        registry.import(&sym("App\\Services\\Mailer"));
        registry.import(&Symbol::from(FunctionName::new("App\\Models\\helper").unwrap()));

        let scope = NamespaceName::new("App\\Models").unwrap();
        assert_eq!(
            registry.declarations(Some(&scope)),
            vec![
                "use function App\\Models\\helper;",
                "use App\\Services\\Mailer;",
            ]
        );
    }

    #[test]
    fn test_renamed_same_namespace_class_is_declared() {
        let mut registry = ImportRegistry::new();
        registry.import(&sym("Vendor\\User"));
        assert_eq!(registry.import(&sym("App\\Models\\User")), "User2");

        let scope = NamespaceName::new("App\\Models").unwrap();
        assert_eq!(
            registry.declarations(Some(&scope)),
            vec!["use App\\Models\\User as User2;", "use Vendor\\User;"]
        );
    }

    #[test]
    fn test_global_classes_are_declared() {
        let mut registry = ImportRegistry::new();
        registry.import(&Symbol::from(ClassName::new("DateTimeImmutable").unwrap()));
        assert!(!registry.is_empty());
        assert_eq!(registry.declarations(None), vec!["use DateTimeImmutable;"]);
    }
}
