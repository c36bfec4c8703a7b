//! Fixture tests: every `tests/fixtures/<mode>/<case>/code.js` is migrated with
//! the mode's `options.json` and compared against `output.js`.

use std::fs;
use std::path::{Path, PathBuf};

use glamorous_to_emotion::{migrate, Config};
use pretty_assertions::assert_eq;
use swc_core::common::comments::SingleThreadedComments;
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap, DUMMY_SP};
use swc_core::ecma::ast::{Module, Number, Program, Str};
use swc_core::ecma::codegen::{text_writer::JsWriter, Config as CodegenConfig, Emitter};
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, Parser, StringInput, Syntax};
use swc_core::ecma::visit::{VisitMut, VisitMutWith};

fn parse(path: &Path, comments: &SingleThreadedComments) -> Module {
    let code = fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(Lrc::new(FileName::Real(path.to_path_buf())), code);
    let lexer = Lexer::new(
        Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        Default::default(),
        StringInput::from(&*fm),
        Some(comments),
    );
    let mut parser = Parser::new_from(lexer);
    parser
        .parse_module()
        .unwrap_or_else(|e| panic!("{}: {:?}", path.display(), e))
}

struct Normalize;

impl VisitMut for Normalize {
    fn visit_mut_span(&mut self, span: &mut swc_core::common::Span) {
        *span = DUMMY_SP;
    }

    fn visit_mut_str(&mut self, s: &mut Str) {
        s.raw = None;
    }

    fn visit_mut_number(&mut self, n: &mut Number) {
        n.raw = None;
    }
}

/// The `@jsx` pragmas attached anywhere in `comments`, followed by the
/// layout-insensitive print of `module`.
fn render(mut module: Module, comments: &SingleThreadedComments) -> String {
    let (leading, _) = comments.borrow_all();
    let mut pragmas: Vec<String> = leading
        .values()
        .flatten()
        .filter(|c| c.text.contains("@jsx"))
        .map(|c| format!("/*{}*/", c.text.trim_end()))
        .collect();
    drop(leading);
    pragmas.sort();

    module.visit_mut_with(&mut Normalize);
    let cm: Lrc<SourceMap> = Default::default();
    let mut buf = vec![];
    {
        let mut emitter = Emitter {
            cfg: CodegenConfig::default(),
            cm: cm.clone(),
            comments: None,
            wr: JsWriter::new(cm, "\n", &mut buf, None),
        };
        emitter.emit_module(&module).expect("failed to print module");
    }
    let printed = String::from_utf8(buf).expect("codegen produced invalid utf-8");

    let mut out = pragmas.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&printed);
    out
}

fn cases(mode: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(mode);
    let mut cases: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("{}: {e}", dir.display()))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    cases.sort();
    assert!(!cases.is_empty(), "no fixtures under {}", dir.display());
    cases
}

fn run_fixtures(mode: &str) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(mode);
    let options = fs::read_to_string(dir.join("options.json")).unwrap_or_else(|_| "{}".into());
    let config = Config::from_json(&options).expect("invalid options.json");

    for case in cases(mode) {
        let comments = SingleThreadedComments::default();
        let mut program = Program::Module(parse(&case.join("code.js"), &comments));
        let report = migrate(&mut program, &config, Some(&comments));
        assert!(
            !report.has_errors(),
            "{}: {:?}",
            case.display(),
            report.diagnostics
        );
        let Program::Module(module) = program else { unreachable!() };
        let actual = render(module, &comments);

        let expected_comments = SingleThreadedComments::default();
        let expected = render(
            parse(&case.join("output.js"), &expected_comments),
            &expected_comments,
        );

        assert_eq!(actual, expected, "fixture {}", case.display());
    }
}

#[test]
fn jsx_pragma() {
    run_fixtures("jsx-pragma");
}

#[test]
fn babel_plugin() {
    run_fixtures("babel-plugin");
}

#[test]
fn class_name() {
    run_fixtures("class-name");
}

#[test]
fn legacy() {
    run_fixtures("legacy");
}

#[test]
fn legacy_preact() {
    run_fixtures("legacy-preact");
}

#[test]
fn without_jsx_pragma() {
    run_fixtures("without-jsx-pragma");
}
