//! Drives the migration over every `glamorous` import of a module.

use std::collections::HashMap;

use swc_core::{
    common::{
        comments::{Comment, CommentKind, Comments},
        DUMMY_SP,
    },
    ecma::{
        ast::*,
        visit::{VisitMut, VisitMutWith},
    },
};

use crate::config::Config;
use crate::context::RewriteContext;
use crate::diagnostics::{Diagnostic, DiagnosticCode, Report, RewriteError};
use crate::html::{element_name, host_tag};
use crate::hygiene::{import_decl, Hygiene};
use crate::references::{DefaultUsageRewriter, NamedTagRewriter};

const LEGACY_SOURCES: &[&str] = &["glamorous", "glamorous.macro"];
const THEMING_EXPORTS: &[&str] = &["ThemeProvider", "withTheme"];

fn is_legacy_source(import: &ImportDecl) -> bool {
    LEGACY_SOURCES.contains(&&*import.src.value)
}

fn imported_name(named: &ImportNamedSpecifier) -> &str {
    match &named.imported {
        Some(ModuleExportName::Ident(ident)) => &ident.sym,
        Some(ModuleExportName::Str(s)) => &s.value,
        None => &named.local.sym,
    }
}

/// Everything produced for one legacy import, applied only if no fatal error
/// happened.
struct Rewritten {
    body: Vec<ModuleItem>,
    imports: Vec<ModuleItem>,
    diagnostics: Vec<Diagnostic>,
    jsx_pragma: Option<String>,
}

fn rewrite_import(
    config: &Config,
    hygiene: &mut Hygiene,
    body: &[ModuleItem],
    import: &ImportDecl,
) -> Result<Rewritten, RewriteError> {
    let mut body = body.to_vec();
    let mut ctx = RewriteContext::new(config, hygiene);
    let mut tags = HashMap::new();
    let mut theming = vec![];

    for specifier in &import.specifiers {
        match specifier {
            ImportSpecifier::Default(default) => {
                let mut rewriter = DefaultUsageRewriter::new(&mut ctx, default.local.to_id());
                body.visit_mut_with(&mut rewriter);
                rewriter.finish()?;
            }
            ImportSpecifier::Named(named) => {
                let name = imported_name(named);
                if THEMING_EXPORTS.contains(&name) {
                    theming.push(ImportSpecifier::Named(named.clone()));
                } else if element_name(name).is_some() {
                    tags.insert(named.local.to_id(), host_tag(name));
                } else {
                    ctx.report(
                        DiagnosticCode::DroppedSpecifier,
                        format!("`{name}` has no emotion counterpart and its import was removed"),
                        named.span,
                    );
                }
            }
            ImportSpecifier::Namespace(ns) => ctx.report(
                DiagnosticCode::DroppedSpecifier,
                format!("namespace import `{}` was removed", ns.local.sym),
                ns.span,
            ),
        }
    }

    if !tags.is_empty() {
        body.visit_mut_with(&mut NamedTagRewriter::new(&mut ctx, tags));
    }

    let jsx_pragma = ctx.jsx_pragma().map(|local| local.sym.to_string());
    let mut imports = vec![];
    if !theming.is_empty() {
        imports.push(import_decl(theming, config.theming_module()));
    }
    imports.extend(ctx.imports.into_import_decls());

    Ok(Rewritten {
        body,
        imports,
        diagnostics: ctx.diagnostics,
        jsx_pragma,
    })
}

/// `VisitMut` pass migrating glamorous to emotion.
///
/// Every legacy import statement is rewritten on its own; a fatal error leaves
/// that statement and all of its usages untouched and is recorded in the
/// report.
pub struct GlamorousToEmotion<C: Comments> {
    config: Config,
    comments: Option<C>,
    report: Report,
    pragma_added: bool,
}

impl<C: Comments> GlamorousToEmotion<C> {
    pub fn new(config: Config, comments: Option<C>) -> Self {
        Self {
            config,
            comments,
            report: Report::default(),
            pragma_added: false,
        }
    }

    pub fn into_report(self) -> Report {
        self.report
    }

    fn add_pragma(&mut self, module: &Module, local: &str) {
        if self.pragma_added {
            return;
        }
        let Some(comments) = &self.comments else { return };
        comments.add_leading(
            module.span.lo,
            Comment {
                kind: CommentKind::Block,
                span: DUMMY_SP,
                text: format!("* @jsx {local} ").into(),
            },
        );
        self.pragma_added = true;
    }
}

impl<C: Comments> VisitMut for GlamorousToEmotion<C> {
    fn visit_mut_module(&mut self, module: &mut Module) {
        let mut hygiene = Hygiene::collect(module);
        let mut idx = 0;
        while idx < module.body.len() {
            let import = match &module.body[idx] {
                ModuleItem::ModuleDecl(ModuleDecl::Import(import)) if is_legacy_source(import) => {
                    import.clone()
                }
                _ => {
                    idx += 1;
                    continue;
                }
            };
            // names reserved by a failed attempt are released with it
            let mut attempt = hygiene.clone();
            match rewrite_import(&self.config, &mut attempt, &module.body, &import) {
                Ok(rewritten) => {
                    hygiene = attempt;
                    tracing::debug!(
                        source = %import.src.value,
                        imports = rewritten.imports.len(),
                        "migrated glamorous import"
                    );
                    let inserted = rewritten.imports.len();
                    module.body = rewritten.body;
                    module.body.splice(idx..=idx, rewritten.imports);
                    idx += inserted;
                    self.report.diagnostics.extend(rewritten.diagnostics);
                    if let Some(local) = rewritten.jsx_pragma {
                        self.add_pragma(module, &local);
                    }
                }
                Err(err) => {
                    tracing::debug!(
                        source = %import.src.value,
                        error = %err,
                        "glamorous import left in place"
                    );
                    self.report.diagnostics.push(err.into());
                    idx += 1;
                }
            }
        }
    }
}
