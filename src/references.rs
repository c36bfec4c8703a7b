//! Rewrites every usage of a glamorous import binding.

use std::collections::HashMap;

use swc_core::{
    common::{Span, Spanned, SyntaxContext},
    ecma::{
        ast::*,
        utils::ExprFactory,
        visit::{VisitMut, VisitMutWith},
    },
};

use crate::attributes::rewrite_attributes;
use crate::build::{call, str_lit};
use crate::context::RewriteContext;
use crate::diagnostics::{DiagnosticCode, RewriteError};
use crate::html::host_tag;
use crate::options::{rewrite_options, static_prop_name};

/// `glamorous(Comp)` / `glamorous(Comp, options)`; the options argument is
/// rewritten, any other argument count cannot be mapped onto `styled`.
fn rewrite_factory_args(
    mut args: Vec<ExprOrSpread>,
    span: Span,
    ctx: &mut RewriteContext,
) -> Result<Vec<ExprOrSpread>, RewriteError> {
    match args.len() {
        0 => Err(RewriteError::NoFactoryArguments { span }),
        1 => Ok(args),
        2 => {
            if let Some(options) = args.pop() {
                args.push(rewrite_options(options, &mut ctx.diagnostics));
            }
            Ok(args)
        }
        count => Err(RewriteError::TooManyFactoryArguments { span, count }),
    }
}

/// glamorous and emotion disagree on the `content` property: emotion wants the
/// quotes inside the string, i.e. `{content: ""}` becomes `{content: '""'}`.
fn quote_content(args: &mut [ExprOrSpread], ctx: &mut RewriteContext) {
    for arg in args {
        let object = match (&arg.spread, &mut *arg.expr) {
            (None, Expr::Object(object)) => object,
            (_, other) => {
                ctx.report(
                    DiagnosticCode::ContentNotInspected,
                    "factory argument is not an object literal; \
                     a `content` property in it was not quoted",
                    other.span(),
                );
                continue;
            }
        };
        for prop in &mut object.props {
            let PropOrSpread::Prop(prop) = prop else { continue };
            let Prop::KeyValue(kv) = &mut **prop else { continue };
            if static_prop_name(&kv.key).as_deref() != Some("content") {
                continue;
            }
            match &*kv.value {
                Expr::Lit(Lit::Str(s)) => {
                    let quoted = format!("\"{}\"", s.value);
                    kv.value = Box::new(str_lit(&quoted));
                }
                other => ctx.report(
                    DiagnosticCode::ContentNotInspected,
                    "`content` is not a string literal and was left unquoted",
                    other.span(),
                ),
            }
        }
    }
}

/// Root identifier of a JSX member tag such as `<a.b.C>`.
fn jsx_root(obj: &JSXObject) -> &Ident {
    match obj {
        JSXObject::Ident(ident) => ident,
        JSXObject::JSXMemberExpr(inner) => jsx_root(&inner.obj),
    }
}

fn retag(element: &mut JSXElement, tag: &str, span: Span, ctx: &mut RewriteContext) {
    let name = JSXElementName::Ident(Ident::new(tag.into(), span, SyntaxContext::empty()));
    if let Some(closing) = &mut element.closing {
        closing.name = name.clone();
    }
    element.opening.name = name;
    let attrs = std::mem::take(&mut element.opening.attrs);
    element.opening.attrs = rewrite_attributes(tag, attrs, ctx);
}

// -----------------------------------------------------------------------------
// Default binding: glamorous(...), glamorous.div(...), <glamorous.Div/>
// -----------------------------------------------------------------------------

pub struct DefaultUsageRewriter<'a, 'b> {
    ctx: &'a mut RewriteContext<'b>,
    binding: Id,
    error: Option<RewriteError>,
}

impl<'a, 'b> DefaultUsageRewriter<'a, 'b> {
    pub fn new(ctx: &'a mut RewriteContext<'b>, binding: Id) -> Self {
        Self {
            ctx,
            binding,
            error: None,
        }
    }

    /// The first fatal error hit, if any. Rewriting stops at that point.
    pub fn finish(self) -> Result<(), RewriteError> {
        self.error.map_or(Ok(()), Err)
    }

    fn is_binding(&self, ident: &Ident) -> bool {
        ident.sym == self.binding.0 && ident.ctxt == self.binding.1
    }

    fn is_binding_object(&self, member: &MemberExpr) -> bool {
        matches!(&*member.obj, Expr::Ident(obj) if self.is_binding(obj))
    }

    fn unknown_usage(&mut self, context: &str, span: Span) {
        self.ctx.report(
            DiagnosticCode::UnknownUsage,
            format!("found glamorous being used in an unknown context: {context}"),
            span,
        );
    }

    fn factory_kind(&self, call_expr: &CallExpr) -> Option<Factory> {
        let Callee::Expr(callee) = &call_expr.callee else {
            return None;
        };
        match &**callee {
            Expr::Ident(ident) if self.is_binding(ident) => Some(Factory::Direct),
            Expr::Member(member) if self.is_binding_object(member) => {
                Some(match &member.prop {
                    MemberProp::Ident(prop) => Factory::Tag(host_tag(&prop.sym)),
                    _ => Factory::Computed(member.span),
                })
            }
            _ => None,
        }
    }

    /// Rewrites `call_expr` in place if its callee is the glamorous binding.
    fn rewrite_call(&mut self, call_expr: &mut CallExpr) -> Result<(), RewriteError> {
        match self.factory_kind(call_expr) {
            // glamorous(Comp, options) -> styled(Comp, options)
            Some(Factory::Direct) => {
                let args = std::mem::take(&mut call_expr.args);
                call_expr.args = rewrite_factory_args(args, call_expr.span, self.ctx)?;
                tracing::debug!(span = ?call_expr.span, "rewriting glamorous factory call");
                call_expr.callee = Expr::Ident(self.ctx.styled_fn()).as_callee();
            }
            // glamorous.div(styles) -> styled("div")(styles)
            Some(Factory::Tag(tag)) => {
                quote_content(&mut call_expr.args, self.ctx);
                tracing::debug!(%tag, "rewriting glamorous tag factory");
                let styled = Expr::Ident(self.ctx.styled_fn());
                call_expr.callee = call(styled, vec![str_lit(&tag).as_arg()]).as_callee();
            }
            Some(Factory::Computed(span)) => {
                return Err(RewriteError::UnsupportedMemberUsage {
                    span,
                    context: "a computed MemberExpression",
                });
            }
            None => {}
        }
        Ok(())
    }
}

enum Factory {
    Direct,
    Tag(String),
    Computed(Span),
}

impl VisitMut for DefaultUsageRewriter<'_, '_> {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        if self.error.is_some() {
            return;
        }
        match expr {
            Expr::Call(call_expr) => {
                if let Err(err) = self.rewrite_call(call_expr) {
                    self.error = Some(err);
                    return;
                }
            }
            Expr::Member(member) if self.is_binding_object(member) => {
                self.error = Some(RewriteError::UnsupportedMemberUsage {
                    span: member.span,
                    context: "a MemberExpression that is not called",
                });
                return;
            }
            Expr::Ident(ident) if self.is_binding(ident) => {
                let span = ident.span;
                self.unknown_usage("Identifier", span);
            }
            _ => {}
        }
        expr.visit_mut_children_with(self);
    }

    fn visit_mut_prop(&mut self, prop: &mut Prop) {
        if let Prop::Shorthand(ident) = prop {
            if self.is_binding(ident) {
                let span = ident.span;
                self.unknown_usage("ObjectProperty", span);
            }
        }
        prop.visit_mut_children_with(self);
    }

    fn visit_mut_export_named_specifier(&mut self, n: &mut ExportNamedSpecifier) {
        if let ModuleExportName::Ident(ident) = &n.orig {
            if self.is_binding(ident) {
                let span = ident.span;
                self.unknown_usage("ExportSpecifier", span);
            }
        }
    }

    fn visit_mut_jsx_element(&mut self, element: &mut JSXElement) {
        if self.error.is_some() {
            return;
        }
        let usage = match &element.opening.name {
            // <glamorous.Div> -> <div>
            JSXElementName::JSXMemberExpr(m) => match &m.obj {
                JSXObject::Ident(obj) if self.is_binding(obj) => {
                    Some(Ok((host_tag(&m.prop.sym), m.span)))
                }
                JSXObject::JSXMemberExpr(inner) if self.is_binding(jsx_root(&inner.obj)) => {
                    Some(Err(("JSXMemberExpression", m.span)))
                }
                _ => None,
            },
            JSXElementName::Ident(ident) if self.is_binding(ident) => {
                Some(Err(("JSXOpeningElement", ident.span)))
            }
            _ => None,
        };
        match usage {
            Some(Ok((tag, span))) => {
                tracing::debug!(%tag, "rewriting glamorous element");
                retag(element, &tag, span, self.ctx);
            }
            Some(Err((context, span))) => self.unknown_usage(context, span),
            None => {}
        }
        element.visit_mut_children_with(self);
    }
}

// -----------------------------------------------------------------------------
// Named tag imports: import {Div, Span as StyledSpan} from "glamorous"
// -----------------------------------------------------------------------------

pub struct NamedTagRewriter<'a, 'b> {
    ctx: &'a mut RewriteContext<'b>,
    /// Local binding -> host element name.
    tags: HashMap<Id, String>,
}

impl<'a, 'b> NamedTagRewriter<'a, 'b> {
    pub fn new(ctx: &'a mut RewriteContext<'b>, tags: HashMap<Id, String>) -> Self {
        Self { ctx, tags }
    }

    fn unknown_usage(&mut self, ident: &Ident, context: &str) {
        if self.tags.contains_key(&ident.to_id()) {
            self.ctx.report(
                DiagnosticCode::UnknownUsage,
                format!(
                    "found glamorous `{}` being used in an unknown context: {context}",
                    ident.sym
                ),
                ident.span,
            );
        }
    }
}

impl VisitMut for NamedTagRewriter<'_, '_> {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        if let Expr::Ident(ident) = expr {
            self.unknown_usage(ident, "Identifier");
        }
        expr.visit_mut_children_with(self);
    }

    fn visit_mut_prop(&mut self, prop: &mut Prop) {
        if let Prop::Shorthand(ident) = prop {
            self.unknown_usage(ident, "ObjectProperty");
        }
        prop.visit_mut_children_with(self);
    }

    fn visit_mut_export_named_specifier(&mut self, n: &mut ExportNamedSpecifier) {
        if let ModuleExportName::Ident(ident) = &n.orig {
            self.unknown_usage(ident, "ExportSpecifier");
        }
    }

    fn visit_mut_jsx_element(&mut self, element: &mut JSXElement) {
        let target = match &element.opening.name {
            JSXElementName::Ident(ident) => self
                .tags
                .get(&ident.to_id())
                .map(|tag| (tag.clone(), ident.span)),
            _ => None,
        };
        if let Some((tag, span)) = target {
            retag(element, &tag, span, self.ctx);
        }
        element.visit_mut_children_with(self);
    }
}
