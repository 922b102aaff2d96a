use std::io::Write;

use logging::{log_attention, log_print, log_println, log_scope};

/// A declaration and the declarations nested inside it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Decl {
    pub name: String,
    pub children: Vec<Decl>,
}

impl Decl {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            children: Vec::new(),
        }
    }

    fn child_mut(&mut self, name: &str) -> &mut Self {
        child_mut(&mut self.children, name)
    }
}

fn child_mut<'a>(decls: &'a mut Vec<Decl>, name: &str) -> &'a mut Decl {
    let index = match decls.iter().position(|decl| decl.name == name) {
        Some(index) => index,
        None => {
            decls.push(Decl::new(name));
            decls.len() - 1
        }
    };
    &mut decls[index]
}

/// Declarations in the order their paths were first seen.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeclTree {
    pub roots: Vec<Decl>,
}

impl DeclTree {
    /// Builds the tree from `/`-separated declaration paths.
    ///
    /// Empty components are skipped with an attention alert, since they name
    /// nothing the generator can resolve.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::default();
        for path in paths {
            let path = path.as_ref();
            let mut components = path.split('/').filter(|component| !component.is_empty());
            if path.split('/').any(str::is_empty) {
                log_attention!("ignoring empty component in '{}'", path);
            }

            let Some(first) = components.next() else {
                continue;
            };
            let mut decl = child_mut(&mut tree.roots, first);
            for component in components {
                decl = decl.child_mut(component);
            }
        }
        tree
    }
}

/// Walks the tree, emitting one nested trace per declaration.
///
/// Returns the number of declarations resolved.
pub fn generate(tree: &DeclTree) -> usize {
    let resolved: usize = tree.roots.iter().map(resolve).sum();
    let _ = writeln!(logging::cout(), "resolved {resolved} declaration(s)");
    resolved
}

fn resolve(decl: &Decl) -> usize {
    log_println!("resolve({})", decl.name);
    log_scope!();

    if decl.children.is_empty() {
        let _ = writeln!(logging::cout(), "leaf: {}", decl.name);
        return 1;
    }

    log_print!("{} member(s)\n", decl.children.len());
    1 + decl.children.iter().map(resolve).sum::<usize>()
}
