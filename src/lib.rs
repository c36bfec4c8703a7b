//! SWC plugin that migrates `glamorous` components to `emotion`.
//!
//! ```text
//! import glamorous from "glamorous";              import styled from "@emotion/styled";
//! const Box = glamorous.div({margin: 1});    =>   const Box = styled("div")({margin: 1});
//! <glamorous.Div marginTop={5}/>                  <div css={{marginTop: 5}}/>
//! ```
//!
//! See [`Config`] for the supported output flavours.

use swc_core::{
    common::{comments::Comments, SourceMapper, Span},
    ecma::{ast::Program, visit::VisitMutWith},
    plugin::{plugin_transform, proxies::TransformPluginProgramMetadata},
};

mod attributes;
mod build;
mod config;
mod context;
mod diagnostics;
mod html;
mod hygiene;
mod imports;
mod options;
mod references;

#[cfg(test)]
mod testing;

pub use config::{Config, OutputMode, TargetFramework};
pub use diagnostics::{Diagnostic, DiagnosticCode, Report, RewriteError, Severity};
pub use imports::GlamorousToEmotion;

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

/// Rewrites every glamorous import of `program` in place.
///
/// `comments` receives the `/** @jsx jsx */` pragma when the output mode needs
/// one; pass `None` to skip it.
pub fn migrate<C: Comments>(
    program: &mut Program,
    config: &Config,
    comments: Option<C>,
) -> Report {
    let mut pass = GlamorousToEmotion::new(config.clone(), comments);
    program.visit_mut_with(&mut pass);
    pass.into_report()
}

#[plugin_transform]
pub fn process_transform(
    mut program: Program,
    metadata: TransformPluginProgramMetadata,
) -> Program {
    let config = match metadata.get_transform_plugin_config() {
        Some(json) => Config::from_json(&json).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid glamorous-to-emotion config, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };

    let report = migrate(&mut program, &config, metadata.comments);

    for diagnostic in &report.diagnostics {
        let location = span_file_lines(&metadata.source_map, diagnostic.span);
        let code = diagnostic.code;
        let message = &diagnostic.message;
        match diagnostic.severity {
            Severity::Error => tracing::error!(%code, %location, "{message}"),
            Severity::Warning => tracing::warn!(%code, %location, "{message}"),
            Severity::Note => tracing::info!(%code, %location, "{message}"),
        }
    }

    program
}

// -----------------------------------------------------------------------------
// Diagnostic locations
// -----------------------------------------------------------------------------

/// Strips bundler decorations (`file://`, turbopack's `[project]/`) off a
/// source file name.
fn normalize_filename(filename: &str) -> String {
    let mut s = filename.replace('\\', "/");
    s = s.replace("%5Bproject%5D", "[project]");
    s = s.replace("%5bproject%5d", "[project]");
    if let Some(rest) = s.strip_prefix("file:///") {
        s = rest.to_string();
    } else if let Some(rest) = s.strip_prefix("file://") {
        s = rest.to_string();
    }
    for prefix in &["turbopack/[project]/", "/turbopack/[project]/", "[project]/"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    s
}

/// `file:startLine-endLine` for log output.
fn span_file_lines(cm: &dyn SourceMapper, span: Span) -> String {
    if span.is_dummy() {
        return "unknown:0-0".to_string();
    }
    let lo = cm.lookup_char_pos(span.lo);
    let hi = cm.lookup_char_pos(span.hi);
    format!(
        "{}:{}-{}",
        normalize_filename(&lo.file.name.to_string()),
        lo.line,
        hi.line
    )
}
