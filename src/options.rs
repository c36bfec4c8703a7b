//! Glamorous factory options rewritten into emotion's `shouldForwardProp`.
//!
//! ```text
//! {forwardProps: ["one"]}         ->  {shouldForwardProp: prop => prop === "one"}
//! {forwardProps: ["one", "two"]}  ->  {shouldForwardProp: prop =>
//!                                        ["one", "two"].indexOf(prop) > -1}
//! {filterProps: ["one"]}          ->  {shouldForwardProp: prop => prop !== "one"}
//! {filterProps: ["one", "two"]}   ->  {shouldForwardProp: prop =>
//!                                        ["one", "two"].indexOf(prop) === -1}
//! ```

use swc_core::{
    common::{Spanned, SyntaxContext, DUMMY_SP},
    ecma::{ast::*, utils::ExprFactory},
};

use crate::build::{call, ident, member};
use crate::diagnostics::{Diagnostic, DiagnosticCode};

const FORWARD_PROPS: &str = "forwardProps";
const FILTER_PROPS: &str = "filterProps";
const SHOULD_FORWARD_PROP: &str = "shouldForwardProp";
const PREDICATE_PARAM: &str = "prop";

pub(crate) fn static_prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(i) => Some(i.sym.to_string()),
        PropName::Str(s) => Some(s.value.to_string()),
        _ => None,
    }
}

fn describe(expr: &Expr) -> String {
    match expr {
        Expr::Ident(i) => i.sym.to_string(),
        Expr::Array(_) => "ArrayExpression".into(),
        Expr::Call(_) => "CallExpression".into(),
        Expr::Member(_) => "MemberExpression".into(),
        Expr::Arrow(_) | Expr::Fn(_) => "FunctionExpression".into(),
        Expr::Lit(_) => "Literal".into(),
        _ => "Expression".into(),
    }
}

/// Rewrites the options argument of `glamorous(Component, options)`.
///
/// Anything that is not an object literal is passed through untouched.
pub fn rewrite_options(options: ExprOrSpread, diagnostics: &mut Vec<Diagnostic>) -> ExprOrSpread {
    let ExprOrSpread { spread, expr } = options;
    let object = match (spread, *expr) {
        (None, Expr::Object(object)) => object,
        (spread, expr) => {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::OptionsNotObject,
                format!(
                    "codemod received '{}' as an options argument. This is left in place, \
                     but will probably contain content that emotion won't understand",
                    describe(&expr)
                ),
                expr.span(),
            ));
            return ExprOrSpread {
                spread,
                expr: Box::new(expr),
            };
        }
    };

    let mut keep: Option<Box<Expr>> = None;
    let mut exclude: Option<Box<Expr>> = None;
    let mut props = Vec::with_capacity(object.props.len() + 1);

    for prop in object.props {
        let prop = match prop {
            PropOrSpread::Prop(prop) => prop,
            spread => {
                unknown_option(diagnostics, "...spread", spread.span());
                props.push(spread);
                continue;
            }
        };
        match *prop {
            Prop::KeyValue(kv) => match static_prop_name(&kv.key).as_deref() {
                Some(FORWARD_PROPS) => keep = Some(kv.value),
                Some(FILTER_PROPS) => exclude = Some(kv.value),
                name => {
                    unknown_option(diagnostics, name.unwrap_or("[computed]"), kv.key.span());
                    props.push(PropOrSpread::Prop(Box::new(Prop::KeyValue(kv))));
                }
            },
            Prop::Shorthand(ident) if &*ident.sym == FORWARD_PROPS => {
                keep = Some(Box::new(Expr::Ident(ident)));
            }
            Prop::Shorthand(ident) if &*ident.sym == FILTER_PROPS => {
                exclude = Some(Box::new(Expr::Ident(ident)));
            }
            other => {
                let name = match &other {
                    Prop::Shorthand(ident) => ident.sym.to_string(),
                    Prop::Method(m) => static_prop_name(&m.key).unwrap_or_default(),
                    _ => String::new(),
                };
                unknown_option(diagnostics, &name, other.span());
                props.push(PropOrSpread::Prop(Box::new(other)));
            }
        }
    }

    if let Some(predicate) = forward_predicate(keep, exclude) {
        props.push(PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
            key: PropName::Ident(IdentName::new(SHOULD_FORWARD_PROP.into(), DUMMY_SP)),
            value: Box::new(Expr::Arrow(ArrowExpr {
                span: DUMMY_SP,
                ctxt: SyntaxContext::empty(),
                params: vec![Pat::Ident(BindingIdent {
                    id: prop_ident(),
                    type_ann: None,
                })],
                body: Box::new(BlockStmtOrExpr::Expr(Box::new(predicate))),
                is_async: false,
                is_generator: false,
                type_params: None,
                return_type: None,
            })),
        }))));
    }

    ExprOrSpread {
        spread: None,
        expr: Box::new(Expr::Object(ObjectLit {
            span: object.span,
            props,
        })),
    }
}

fn unknown_option(diagnostics: &mut Vec<Diagnostic>, name: &str, span: swc_core::common::Span) {
    diagnostics.push(Diagnostic::new(
        DiagnosticCode::UnknownOption,
        format!(
            "codemod received '{name}' as an option. This is left in place, \
             but will probably not be understood by emotion"
        ),
        span,
    ));
}

/// Combines the keep and exclude predicates with `&&`, keep first.
pub fn forward_predicate(keep: Option<Box<Expr>>, exclude: Option<Box<Expr>>) -> Option<Expr> {
    let keep = keep.map(|list| list_predicate(list, BinaryOp::EqEqEq, BinaryOp::Gt));
    let exclude = exclude.map(|list| list_predicate(list, BinaryOp::NotEqEq, BinaryOp::EqEqEq));
    match (keep, exclude) {
        (Some(keep), Some(exclude)) => Some(bin(BinaryOp::LogicalAnd, keep, exclude)),
        (keep, exclude) => keep.or(exclude),
    }
}

/// `prop <single_op> el` for one-element array literals,
/// `list.indexOf(prop) <many_op> -1` otherwise.
fn list_predicate(list: Box<Expr>, single_op: BinaryOp, many_op: BinaryOp) -> Expr {
    match single_element(list) {
        Ok(element) => bin(single_op, Expr::Ident(prop_ident()), *element),
        Err(list) => bin(many_op, index_of(list), minus_one()),
    }
}

fn single_element(list: Box<Expr>) -> Result<Box<Expr>, Box<Expr>> {
    match *list {
        Expr::Array(mut array)
            if array.elems.len() == 1
                && matches!(array.elems[0], Some(ExprOrSpread { spread: None, .. })) =>
        {
            match array.elems.pop() {
                Some(Some(element)) => Ok(element.expr),
                _ => unreachable!("checked above"),
            }
        }
        other => Err(Box::new(other)),
    }
}

fn index_of(list: Box<Expr>) -> Expr {
    call(
        member(list, "indexOf"),
        vec![Expr::Ident(prop_ident()).as_arg()],
    )
}

fn prop_ident() -> Ident {
    ident(PREDICATE_PARAM)
}

fn minus_one() -> Expr {
    Expr::Unary(UnaryExpr {
        span: DUMMY_SP,
        op: UnaryOp::Minus,
        arg: Box::new(Expr::Lit(Lit::Num(Number {
            span: DUMMY_SP,
            value: 1.0,
            raw: None,
        }))),
    })
}

fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Bin(BinExpr {
        span: DUMMY_SP,
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}
