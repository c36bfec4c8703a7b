//! Small AST constructors.

use swc_core::{
    common::{SyntaxContext, DUMMY_SP},
    ecma::{ast::*, utils::ExprFactory},
};

pub fn ident(name: &str) -> Ident {
    Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty())
}

pub fn str_lit(value: &str) -> Expr {
    Expr::Lit(Lit::Str(Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    }))
}

/// `obj.prop`, parenthesizing `obj` unless it already binds tighter than member access.
pub fn member(obj: Box<Expr>, prop: &str) -> Expr {
    let obj = match *obj {
        e @ (Expr::Ident(_)
        | Expr::This(_)
        | Expr::Array(_)
        | Expr::Object(_)
        | Expr::Member(_)
        | Expr::Call(_)
        | Expr::Paren(_)) => Box::new(e),
        other => Box::new(Expr::Paren(ParenExpr {
            span: DUMMY_SP,
            expr: Box::new(other),
        })),
    };
    Expr::Member(MemberExpr {
        span: DUMMY_SP,
        obj,
        prop: MemberProp::Ident(IdentName::new(prop.into(), DUMMY_SP)),
    })
}

pub fn call(callee: Expr, args: Vec<ExprOrSpread>) -> Expr {
    Expr::Call(CallExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        callee: callee.as_callee(),
        args,
        type_args: None,
    })
}

pub fn expr_container(expr: Box<Expr>) -> JSXAttrValue {
    JSXAttrValue::JSXExprContainer(JSXExprContainer {
        span: DUMMY_SP,
        expr: JSXExpr::Expr(expr),
    })
}

pub fn jsx_attr(name: &str, value: Box<Expr>) -> JSXAttrOrSpread {
    JSXAttrOrSpread::JSXAttr(JSXAttr {
        span: DUMMY_SP,
        name: JSXAttrName::Ident(IdentName::new(name.into(), DUMMY_SP)),
        value: Some(expr_container(value)),
    })
}
