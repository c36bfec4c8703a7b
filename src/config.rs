use serde::Deserialize;

/// How styles moved off a glamorous element are expressed on the host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputMode {
    /// `<div css={...}/>` with `/** @jsx jsx */` and `jsx` from `@emotion/core`.
    JsxPragma,
    /// `<div css={...}/>` left for the emotion babel plugin to compile.
    BabelPlugin,
    /// `<div className={css(...)}/>` using `@emotion/core` and `emotion`.
    ClassName,
    /// `<div className={css(...)}/>` with every helper from `react-emotion`.
    Legacy,
}

impl OutputMode {
    /// Whether the `css` attribute survives on the host element.
    pub fn keeps_css_attribute(self) -> bool {
        matches!(self, OutputMode::JsxPragma | OutputMode::BabelPlugin)
    }

    pub fn needs_jsx_pragma(self) -> bool {
        self == OutputMode::JsxPragma
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetFramework {
    #[default]
    React,
    Preact,
}

impl TargetFramework {
    fn emotion_bindings(self) -> &'static str {
        match self {
            TargetFramework::React => "react-emotion",
            TargetFramework::Preact => "preact-emotion",
        }
    }
}

/// Plugin options, as passed in the SWC plugin config JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub output_mode: Option<OutputMode>,
    pub target_framework: TargetFramework,

    // Flags understood by the babel codemod this plugin replaces.
    pub without_jsx_pragma: bool,
    pub with_babel_plugin: bool,
}

impl Config {
    pub fn new(output_mode: OutputMode, target_framework: TargetFramework) -> Self {
        Self {
            output_mode: Some(output_mode),
            target_framework,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn mode(&self) -> OutputMode {
        if let Some(mode) = self.output_mode {
            return mode;
        }
        if self.with_babel_plugin {
            OutputMode::BabelPlugin
        } else if self.without_jsx_pragma {
            OutputMode::ClassName
        } else {
            OutputMode::JsxPragma
        }
    }

    /// Module providing the `styled` default export.
    pub fn styled_module(&self) -> &'static str {
        match self.mode() {
            OutputMode::JsxPragma | OutputMode::ClassName => "@emotion/styled",
            OutputMode::BabelPlugin | OutputMode::Legacy => {
                self.target_framework.emotion_bindings()
            }
        }
    }

    /// Module providing the class-name producing `css` helper.
    pub fn css_module(&self) -> &'static str {
        match self.mode() {
            OutputMode::Legacy => self.target_framework.emotion_bindings(),
            _ => "@emotion/core",
        }
    }

    pub fn cx_module(&self) -> &'static str {
        match self.mode() {
            OutputMode::Legacy => self.target_framework.emotion_bindings(),
            _ => "emotion",
        }
    }

    pub fn jsx_module(&self) -> &'static str {
        "@emotion/core"
    }

    pub fn theming_module(&self) -> &'static str {
        "emotion-theming"
    }
}
