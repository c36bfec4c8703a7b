use swc_core::common::Span;
use swc_core::ecma::ast::Ident;

use crate::config::Config;
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::hygiene::{Export, Hygiene, ImportRequirements};

/// State of one glamorous import statement's rewrite.
///
/// Emotion helpers are requested lazily; nothing is imported unless a
/// rewritten usage actually references it.
pub struct RewriteContext<'a> {
    pub config: &'a Config,
    hygiene: &'a mut Hygiene,
    pub imports: ImportRequirements,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> RewriteContext<'a> {
    pub fn new(config: &'a Config, hygiene: &'a mut Hygiene) -> Self {
        Self {
            config,
            hygiene,
            imports: ImportRequirements::default(),
            diagnostics: vec![],
        }
    }

    pub fn styled_fn(&mut self) -> Ident {
        let module = self.config.styled_module();
        self.imports.require(self.hygiene, module, Export::Default("styled"))
    }

    pub fn css_fn(&mut self) -> Ident {
        let module = self.config.css_module();
        self.imports.require(self.hygiene, module, Export::Named("css"))
    }

    pub fn cx_fn(&mut self) -> Ident {
        let module = self.config.cx_module();
        self.imports.require(self.hygiene, module, Export::Named("cx"))
    }

    pub fn jsx_fn(&mut self) -> Ident {
        let module = self.config.jsx_module();
        self.imports.require(self.hygiene, module, Export::Named("jsx"))
    }

    /// Local name of `jsx` if any element needed the pragma.
    pub fn jsx_pragma(&self) -> Option<&Ident> {
        self.imports.get(self.config.jsx_module(), Export::Named("jsx"))
    }

    pub fn report(&mut self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        self.diagnostics.push(Diagnostic::new(code, message, span));
    }
}
