//! Identifier hygiene and the set of emotion imports a rewrite needs.

use std::collections::HashSet;

use indexmap::IndexMap;
use swc_core::{
    common::{SyntaxContext, DUMMY_SP},
    ecma::{
        ast::*,
        visit::{Visit, VisitWith},
    },
};

// -----------------------------------------------------------------------------
// Binding collection
// -----------------------------------------------------------------------------

struct BindingCollector<'a> {
    out: &'a mut HashSet<String>,
}

impl<'a> Visit for BindingCollector<'a> {
    fn visit_binding_ident(&mut self, n: &BindingIdent) {
        self.out.insert(n.id.sym.to_string());
    }
    fn visit_fn_decl(&mut self, n: &FnDecl) {
        self.out.insert(n.ident.sym.to_string());
        n.visit_children_with(self);
    }
    fn visit_fn_expr(&mut self, n: &FnExpr) {
        if let Some(ident) = &n.ident {
            self.out.insert(ident.sym.to_string());
        }
        n.visit_children_with(self);
    }
    fn visit_class_decl(&mut self, n: &ClassDecl) {
        self.out.insert(n.ident.sym.to_string());
        n.visit_children_with(self);
    }
    fn visit_class_expr(&mut self, n: &ClassExpr) {
        if let Some(ident) = &n.ident {
            self.out.insert(ident.sym.to_string());
        }
        n.visit_children_with(self);
    }
    fn visit_import_specifier(&mut self, n: &ImportSpecifier) {
        let local = match n {
            ImportSpecifier::Named(named) => &named.local,
            ImportSpecifier::Default(def) => &def.local,
            ImportSpecifier::Namespace(ns) => &ns.local,
        };
        self.out.insert(local.sym.to_string());
    }
}

// -----------------------------------------------------------------------------
// Hygiene
// -----------------------------------------------------------------------------

/// Hands out local names that do not collide with anything bound in the module.
#[derive(Debug, Clone, Default)]
pub struct Hygiene {
    bound: HashSet<String>,
}

impl Hygiene {
    pub fn collect(module: &Module) -> Self {
        let mut bound = HashSet::new();
        module.visit_with(&mut BindingCollector { out: &mut bound });
        Self { bound }
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bound.contains(name)
    }

    /// Returns `candidate` if it is free, otherwise `_candidate`, `_candidate2`, ...
    /// The returned name counts as bound from then on.
    pub fn reserve(&mut self, candidate: &str) -> Ident {
        let name = if self.is_bound(candidate) {
            let base = format!("_{candidate}");
            let mut name = base.clone();
            let mut idx: usize = 2;
            while self.is_bound(&name) {
                name = format!("{base}{idx}");
                idx += 1;
            }
            name
        } else {
            candidate.to_string()
        };
        self.bound.insert(name.clone());
        Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty())
    }
}

// -----------------------------------------------------------------------------
// Import requirements
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Export {
    Default(&'static str),
    Named(&'static str),
}

impl Export {
    fn candidate(self) -> &'static str {
        match self {
            Export::Default(name) | Export::Named(name) => name,
        }
    }
}

/// Emotion symbols requested while rewriting one glamorous import, grouped by
/// module in the order they were first asked for.
#[derive(Debug, Default)]
pub struct ImportRequirements {
    modules: IndexMap<&'static str, IndexMap<Export, Ident>>,
}

impl ImportRequirements {
    /// Local identifier for `export` of `module`, reserving it on first use.
    pub fn require(
        &mut self,
        hygiene: &mut Hygiene,
        module: &'static str,
        export: Export,
    ) -> Ident {
        self.modules
            .entry(module)
            .or_default()
            .entry(export)
            .or_insert_with(|| hygiene.reserve(export.candidate()))
            .clone()
    }

    pub fn get(&self, module: &str, export: Export) -> Option<&Ident> {
        self.modules.get(module).and_then(|exports| exports.get(&export))
    }

    /// One import declaration per module, default specifier first.
    pub fn into_import_decls(self) -> Vec<ModuleItem> {
        self.modules
            .into_iter()
            .map(|(module, exports)| {
                let mut specifiers: Vec<ImportSpecifier> = exports
                    .into_iter()
                    .map(|(export, local)| match export {
                        Export::Default(_) => ImportSpecifier::Default(ImportDefaultSpecifier {
                            span: DUMMY_SP,
                            local,
                        }),
                        Export::Named(name) => ImportSpecifier::Named(ImportNamedSpecifier {
                            span: DUMMY_SP,
                            imported: (local.sym.as_ref() != name).then(|| {
                                ModuleExportName::Ident(Ident::new(
                                    name.into(),
                                    DUMMY_SP,
                                    SyntaxContext::empty(),
                                ))
                            }),
                            local,
                            is_type_only: false,
                        }),
                    })
                    .collect();
                specifiers.sort_by_key(|s| !matches!(s, ImportSpecifier::Default(_)));
                import_decl(specifiers, module)
            })
            .collect()
    }
}

pub fn import_decl(specifiers: Vec<ImportSpecifier>, src: &str) -> ModuleItem {
    ModuleItem::ModuleDecl(ModuleDecl::Import(ImportDecl {
        span: DUMMY_SP,
        specifiers,
        src: Box::new(Str {
            span: DUMMY_SP,
            value: src.into(),
            raw: None,
        }),
        type_only: false,
        with: None,
        phase: ImportPhase::Evaluation,
    }))
}
