//! Style props on glamorous elements, moved into emotion styles.
//!
//! `<glamorous.Div css={styles} marginTop={5} onClick={h}/>` becomes, depending
//! on the output mode, `<div css={{...styles, marginTop: 5}} onClick={h}/>` or
//! `<div onClick={h} className={css({...styles, marginTop: 5})}/>`.

use std::sync::LazyLock;

use regex::Regex;
use swc_core::{
    common::{Spanned, DUMMY_SP},
    ecma::{ast::*, utils::ExprFactory},
};

use crate::build::{call, expr_container, ident, jsx_attr, member};
use crate::context::RewriteContext;
use crate::diagnostics::DiagnosticCode;
use crate::html::is_markup_attribute;

const CSS: &str = "css";
const CLASS_NAME: &str = "className";
const INNER_REF: &str = "innerRef";
const REF: &str = "ref";

static EVENT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^on[A-Z]").expect("Invalid event handler regex"));

/// The explicit `css` attribute of an element.
struct Container {
    /// Position in the retained attributes, when the mode keeps the attribute.
    index: Option<usize>,
    expr: Box<Expr>,
}

/// Attributes of one element, sorted by what they mean for styling.
#[derive(Default)]
struct Buckets {
    /// Entries taken from `css`; always placed before `attr_entries`.
    container_entries: Vec<PropOrSpread>,
    attr_entries: Vec<PropOrSpread>,
    container: Option<Container>,
    class_name: Option<usize>,
    spreads: Vec<Box<Expr>>,
}

impl Buckets {
    fn has_styles(&self) -> bool {
        !self.container_entries.is_empty() || !self.attr_entries.is_empty()
    }

    /// The style value handed to emotion.
    ///
    /// `spread_prop` names the sub-value of each spread attribute that also has
    /// to be merged in (`...props.css`), lowest precedence first.
    fn into_composite(self, spread_prop: Option<&str>) -> Box<Expr> {
        let spread_entries: Vec<PropOrSpread> = match spread_prop {
            Some(prop) => self
                .spreads
                .iter()
                .map(|spread| {
                    PropOrSpread::Spread(SpreadElement {
                        dot3_token: DUMMY_SP,
                        expr: Box::new(member(spread.clone(), prop)),
                    })
                })
                .collect(),
            None => vec![],
        };

        if let Some(container) = self.container {
            if spread_entries.is_empty()
                && self.attr_entries.is_empty()
                && self.container_entries.len() == 1
            {
                return container.expr;
            }
        }

        let props = spread_entries
            .into_iter()
            .chain(self.container_entries)
            .chain(self.attr_entries)
            .collect();
        Box::new(Expr::Object(ObjectLit {
            span: DUMMY_SP,
            props,
        }))
    }
}

fn is_event_handler(name: &str) -> bool {
    EVENT_HANDLER.is_match(name)
}

/// Value of a JSX attribute as a plain expression (`<div hidden/>` is `true`).
fn attr_value_expr(value: Option<JSXAttrValue>) -> Box<Expr> {
    match value {
        None => Box::new(Expr::Lit(Lit::Bool(Bool {
            span: DUMMY_SP,
            value: true,
        }))),
        Some(JSXAttrValue::Lit(lit)) => Box::new(Expr::Lit(lit)),
        Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::Expr(expr),
            ..
        })) => expr,
        Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::JSXEmptyExpr(_),
            ..
        })) => Box::new(Expr::Ident(ident("undefined"))),
        Some(JSXAttrValue::JSXElement(element)) => Box::new(Expr::JSXElement(element)),
        Some(JSXAttrValue::JSXFragment(fragment)) => Box::new(Expr::JSXFragment(fragment)),
    }
}

fn css_expression(attr: &JSXAttr) -> Option<Box<Expr>> {
    match &attr.value {
        Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::Expr(expr),
            ..
        })) => Some(expr.clone()),
        _ => None,
    }
}

fn set_value(attrs: &mut [JSXAttrOrSpread], index: usize, value: Box<Expr>) {
    if let Some(JSXAttrOrSpread::JSXAttr(attr)) = attrs.get_mut(index) {
        attr.value = Some(expr_container(value));
    }
}

/// Rewrites the attributes of an element that is becoming the host `tag`.
pub fn rewrite_attributes(
    tag: &str,
    attrs: Vec<JSXAttrOrSpread>,
    ctx: &mut RewriteContext,
) -> Vec<JSXAttrOrSpread> {
    let mode = ctx.config.mode();
    let mut retained: Vec<JSXAttrOrSpread> = Vec::with_capacity(attrs.len() + 1);
    let mut buckets = Buckets::default();

    for attr in attrs {
        let mut attr = match attr {
            JSXAttrOrSpread::SpreadElement(spread) => {
                buckets.spreads.push(spread.expr.clone());
                retained.push(JSXAttrOrSpread::SpreadElement(spread));
                continue;
            }
            JSXAttrOrSpread::JSXAttr(attr) => attr,
        };
        let name = match &attr.name {
            JSXAttrName::Ident(name) => name.sym.to_string(),
            JSXAttrName::JSXNamespacedName(_) => {
                retained.push(JSXAttrOrSpread::JSXAttr(attr));
                continue;
            }
        };

        match name.as_str() {
            CSS => {
                let Some(expr) = css_expression(&attr) else {
                    ctx.report(
                        DiagnosticCode::CssAttributeLiteral,
                        "css attribute without an expression value is left in place",
                        attr.span,
                    );
                    retained.push(JSXAttrOrSpread::JSXAttr(attr));
                    continue;
                };
                match &*expr {
                    Expr::Object(object) => {
                        buckets.container_entries.extend(object.props.iter().cloned())
                    }
                    _ => buckets.container_entries.push(PropOrSpread::Spread(SpreadElement {
                        dot3_token: DUMMY_SP,
                        expr: expr.clone(),
                    })),
                }
                let index = mode.keeps_css_attribute().then(|| {
                    retained.push(JSXAttrOrSpread::JSXAttr(attr));
                    retained.len() - 1
                });
                buckets.container = Some(Container { index, expr });
            }
            CLASS_NAME => {
                buckets.class_name = Some(retained.len());
                retained.push(JSXAttrOrSpread::JSXAttr(attr));
            }
            INNER_REF => {
                attr.name = JSXAttrName::Ident(IdentName::new(REF.into(), attr.name.span()));
                retained.push(JSXAttrOrSpread::JSXAttr(attr));
            }
            name if is_event_handler(name)
                || name.contains('-')
                || is_markup_attribute(tag, name) =>
            {
                retained.push(JSXAttrOrSpread::JSXAttr(attr));
            }
            name => {
                let key = PropName::Ident(IdentName::new(name.into(), attr.name.span()));
                buckets
                    .attr_entries
                    .push(PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
                        key,
                        value: attr_value_expr(attr.value),
                    }))));
            }
        }
    }

    if mode.needs_jsx_pragma() && buckets.container.is_some() {
        ctx.jsx_fn();
    }
    if !buckets.has_styles() {
        return retained;
    }

    if mode.keeps_css_attribute() {
        let container_index = buckets.container.as_ref().and_then(|c| c.index);
        // spread props may carry a css prop of their own
        let spread_prop = buckets.container.is_none().then_some(CSS);
        let styles = buckets.into_composite(spread_prop);
        match container_index {
            Some(index) => set_value(&mut retained, index, styles),
            None => {
                retained.push(jsx_attr(CSS, styles));
                if mode.needs_jsx_pragma() {
                    ctx.jsx_fn();
                }
            }
        }
        return retained;
    }

    let class_name = buckets.class_name;
    let class_name_args: Option<Vec<ExprOrSpread>> = match class_name {
        Some(index) => match &retained[index] {
            JSXAttrOrSpread::JSXAttr(attr) => {
                Some(vec![attr_value_expr(attr.value.clone()).as_arg()])
            }
            JSXAttrOrSpread::SpreadElement(_) => None,
        },
        None if !buckets.spreads.is_empty() => Some(
            buckets
                .spreads
                .iter()
                .map(|spread| member(spread.clone(), CLASS_NAME).as_arg())
                .collect(),
        ),
        None => None,
    };
    let styles = buckets.into_composite(None);

    let class_name_value = match class_name_args {
        // <div className={css(styles)}/>
        None => call(Expr::Ident(ctx.css_fn()), vec![styles.as_arg()]),
        // <div className={cx("my-class", styles)}/>
        // <div {...props} className={cx(props.className, styles)}/>
        Some(mut args) => {
            args.push(styles.as_arg());
            call(Expr::Ident(ctx.cx_fn()), args)
        }
    };
    match class_name {
        Some(index) => set_value(&mut retained, index, Box::new(class_name_value)),
        None => retained.push(jsx_attr(CLASS_NAME, Box::new(class_name_value))),
    }
    retained
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, OutputMode};
    use crate::hygiene::Hygiene;
    use crate::testing::{parse_module, print_module};
    use pretty_assertions::assert_eq;
    use swc_core::ecma::visit::{VisitMut, VisitMutWith};

    /// Rewrites every `<div>`/`<span>`/`<img>` in `code` as if it were a glamorous element.
    struct AllElements<'a, 'b> {
        ctx: &'a mut RewriteContext<'b>,
    }

    impl VisitMut for AllElements<'_, '_> {
        fn visit_mut_jsx_opening_element(&mut self, n: &mut JSXOpeningElement) {
            if let JSXElementName::Ident(tag) = &n.name {
                let tag = tag.sym.to_string();
                let attrs = std::mem::take(&mut n.attrs);
                n.attrs = rewrite_attributes(&tag, attrs, self.ctx);
            }
        }
    }

    fn rewrite(code: &str, mode: OutputMode) -> (String, Vec<String>) {
        let mut module = parse_module(code);
        let config = Config::new(mode, Default::default());
        let mut hygiene = Hygiene::collect(&module);
        let mut ctx = RewriteContext::new(&config, &mut hygiene);
        module.visit_mut_with(&mut AllElements { ctx: &mut ctx });
        let requested = ctx
            .imports
            .into_import_decls()
            .into_iter()
            .map(|item| print_module(&Module { span: DUMMY_SP, body: vec![item], shebang: None }))
            .collect();
        (print_module(&module), requested)
    }

    fn expect(code: &str) -> String {
        print_module(&parse_module(code))
    }

    #[test]
    fn class_name_mode_compiles_styles_to_css_call() {
        let (out, imports) = rewrite(
            r#"<div onClick={h} css={{marginTop: 10, marginTop: 5, marginBottom: "5"}}/>;"#,
            OutputMode::ClassName,
        );
        assert_eq!(
            out,
            expect(
                r#"<div onClick={h} className={css({marginTop: 10, marginTop: 5, marginBottom: "5"})}/>;"#
            )
        );
        assert_eq!(imports, vec![expect(r#"import { css } from "@emotion/core";"#)]);
    }

    #[test]
    fn container_entries_precede_individual_style_props() {
        let (out, _) = rewrite(
            r#"<div marginTop={5} css={{marginTop: 10, color: "red"}} marginBottom="5"/>;"#,
            OutputMode::ClassName,
        );
        assert_eq!(
            out,
            expect(
                r#"<div className={css({marginTop: 10, color: "red", marginTop: 5, marginBottom: "5"})}/>;"#
            )
        );
    }

    #[test]
    fn lone_container_expression_is_reused() {
        let (out, _) = rewrite("<span css={redStyles}/>;", OutputMode::ClassName);
        assert_eq!(out, expect("<span className={css(redStyles)}/>;"));

        let (out, _) = rewrite("<span css={redStyles} marginLeft={5}/>;", OutputMode::ClassName);
        assert_eq!(out, expect("<span className={css({...redStyles, marginLeft: 5})}/>;"));
    }

    #[test]
    fn existing_class_name_is_combined_in_place() {
        let (out, imports) = rewrite(
            r#"<span className="my-class" css={redStyles} id="x"/>;"#,
            OutputMode::ClassName,
        );
        assert_eq!(out, expect(r#"<span className={cx("my-class", redStyles)} id="x"/>;"#));
        assert_eq!(imports, vec![expect(r#"import { cx } from "emotion";"#)]);
    }

    #[test]
    fn spreads_contribute_their_class_name() {
        let (out, _) = rewrite("<span marginTop={5} {...props}/>;", OutputMode::ClassName);
        assert_eq!(
            out,
            expect("<span {...props} className={cx(props.className, {marginTop: 5})}/>;")
        );
    }

    #[test]
    fn every_spread_contributes_its_class_name_in_order() {
        let (out, _) = rewrite("<span marginTop={5} {...a} {...b}/>;", OutputMode::ClassName);
        assert_eq!(
            out,
            expect("<span {...a} {...b} className={cx(a.className, b.className, {marginTop: 5})}/>;")
        );
    }

    #[test]
    fn explicit_class_name_wins_over_spreads() {
        let (out, _) = rewrite(
            r#"<span className="x" {...props} marginTop={5}/>;"#,
            OutputMode::ClassName,
        );
        assert_eq!(out, expect(r#"<span className={cx("x", {marginTop: 5})} {...props}/>;"#));
    }

    #[test]
    fn markup_attributes_and_handlers_stay() {
        let (out, _) = rewrite(
            r#"<img width={100} alt="" onLoad={f} data-test="x" aria-label="y" key="k"/>;"#,
            OutputMode::ClassName,
        );
        assert_eq!(
            out,
            expect(r#"<img width={100} alt="" onLoad={f} data-test="x" aria-label="y" key="k"/>;"#)
        );
    }

    #[test]
    fn lowercase_on_prefix_needs_uppercase_follower() {
        let (out, _) = rewrite("<div once={1} buttonType={2}/>;", OutputMode::ClassName);
        assert_eq!(out, expect("<div className={css({once: 1, buttonType: 2})}/>;"));
    }

    #[test]
    fn inner_ref_becomes_ref() {
        let (out, _) = rewrite("<div marginTop={5} innerRef={handler}/>;", OutputMode::ClassName);
        assert_eq!(out, expect("<div ref={handler} className={css({marginTop: 5})}/>;"));
    }

    #[test]
    fn valueless_style_prop_is_true() {
        let (out, _) = rewrite("<div flex/>;", OutputMode::Legacy);
        assert_eq!(out, expect("<div className={css({flex: true})}/>;"));
    }

    #[test]
    fn pragma_mode_keeps_css_attribute_and_requests_jsx() {
        let (out, imports) = rewrite(
            r#"<div marginTop={5} css={{marginTop: 10}} marginBottom="5" onClick={handler}/>;"#,
            OutputMode::JsxPragma,
        );
        assert_eq!(
            out,
            expect(
                r#"<div css={{marginTop: 10, marginTop: 5, marginBottom: "5"}} onClick={handler}/>;"#
            )
        );
        assert_eq!(imports, vec![expect(r#"import { jsx } from "@emotion/core";"#)]);
    }

    #[test]
    fn pragma_mode_appends_css_attribute() {
        let (out, imports) = rewrite("<div marginTop={5}/>;", OutputMode::JsxPragma);
        assert_eq!(out, expect("<div css={{marginTop: 5}}/>;"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn pragma_mode_merges_spread_css_when_no_container() {
        let (out, _) = rewrite("<span marginTop={5} {...a} {...b}/>;", OutputMode::BabelPlugin);
        assert_eq!(
            out,
            expect("<span {...a} {...b} css={{...a.css, ...b.css, marginTop: 5}}/>;")
        );
    }

    #[test]
    fn pragma_mode_leaves_explicit_container_alone() {
        let (out, imports) = rewrite("<span css={styles} {...props}/>;", OutputMode::BabelPlugin);
        assert_eq!(out, expect("<span css={styles} {...props}/>;"));
        assert!(imports.is_empty());
    }

    #[test]
    fn elements_without_styles_are_untouched() {
        let (out, imports) = rewrite("<span {...props}>Hi</span>;", OutputMode::ClassName);
        assert_eq!(out, expect("<span {...props}>Hi</span>;"));
        assert!(imports.is_empty());
    }

    #[test]
    fn literal_css_attribute_is_reported() {
        let mut module = parse_module(r#"<div css="color: red"/>;"#);
        let config = Config::new(OutputMode::ClassName, Default::default());
        let mut hygiene = Hygiene::collect(&module);
        let mut ctx = RewriteContext::new(&config, &mut hygiene);
        module.visit_mut_with(&mut AllElements { ctx: &mut ctx });
        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(ctx.diagnostics[0].code, DiagnosticCode::CssAttributeLiteral);
        assert_eq!(print_module(&module), expect(r#"<div css="color: red"/>;"#));
    }
}
