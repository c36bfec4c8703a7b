//! Parse/print helpers shared by the unit tests.

use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap, Span, DUMMY_SP};
use swc_core::ecma::ast::{Decl, Expr, Module, ModuleItem, Number, Program, Stmt, Str};
use swc_core::ecma::codegen::{text_writer::JsWriter, Config as CodegenConfig, Emitter};
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, Parser, StringInput, Syntax};
use swc_core::ecma::visit::{VisitMut, VisitMutWith};

use crate::config::{Config, OutputMode};
use crate::diagnostics::Report;

pub fn parse_module(code: &str) -> Module {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(Lrc::new(FileName::Custom("test.jsx".into())), code.to_string());
    let lexer = Lexer::new(
        Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        Default::default(),
        StringInput::from(&*fm),
        None,
    );
    let mut parser = Parser::new_from(lexer);
    let module = parser.parse_module().expect("failed to parse module");
    assert!(parser.take_errors().is_empty());
    module
}

/// Forgets everything codegen could use to reproduce the input layout.
struct Normalize;

impl VisitMut for Normalize {
    fn visit_mut_span(&mut self, span: &mut Span) {
        *span = DUMMY_SP;
    }
    fn visit_mut_str(&mut self, s: &mut Str) {
        s.raw = None;
        s.visit_mut_children_with(self);
    }
    fn visit_mut_number(&mut self, n: &mut Number) {
        n.raw = None;
        n.visit_mut_children_with(self);
    }
}

pub fn print_module(module: &Module) -> String {
    let mut module = module.clone();
    module.visit_mut_with(&mut Normalize);

    let cm: Lrc<SourceMap> = Default::default();
    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: CodegenConfig::default(),
            comments: None,
            cm: cm.clone(),
            wr: writer,
        };
        emitter.emit_module(&module).expect("failed to emit module");
    }
    String::from_utf8(buf).expect("module is not valid UTF-8")
}

fn expr_slot(module: &mut Module) -> &mut Option<Box<Expr>> {
    match module.body.first_mut() {
        Some(ModuleItem::Stmt(Stmt::Decl(Decl::Var(var)))) => &mut var.decls[0].init,
        _ => panic!("expected `const __expr = ...;`"),
    }
}

/// Parses `code` as the initializer of a variable declaration.
pub fn parse_expr(code: &str) -> Box<Expr> {
    let mut module = parse_module(&format!("const __expr = {code};"));
    expr_slot(&mut module).take().expect("initializer")
}

pub fn print_expr(expr: &Expr) -> String {
    let mut module = parse_module("const __expr = 0;");
    *expr_slot(&mut module) = Some(Box::new(expr.clone()));
    print_module(&module)
}

/// Formatting-insensitive form of a source snippet.
pub fn normalized(code: &str) -> String {
    print_module(&parse_module(code))
}

pub fn run(code: &str, mode: OutputMode) -> (String, Report) {
    let mut program = Program::Module(parse_module(code));
    let config = Config::new(mode, Default::default());
    let report = crate::migrate(
        &mut program,
        &config,
        None::<swc_core::common::comments::NoopComments>,
    );
    match program {
        Program::Module(module) => (print_module(&module), report),
        Program::Script(_) => unreachable!("parsed as module"),
    }
}
