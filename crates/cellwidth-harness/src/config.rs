#![forbid(unsafe_code)]

//! Harness configuration from the environment and the command line.
//!
//! The environment is read first; command line arguments override it.

use std::fmt;
use std::str::FromStr;

use cellwidth_core::WidthMode;
use cellwidth_core::env::{env_bool, env_nonempty};
use cellwidth_text::{AmbiguousTable, WidthCalculator};

use crate::error::HarnessError;

/// Scene selection (`table` or `titles`).
pub const ENV_HARNESS_VIEW: &str = "CELLWIDTH_HARNESS_VIEW";
/// Emit ANSI-styled output instead of plain text.
pub const ENV_HARNESS_ANSI: &str = "CELLWIDTH_HARNESS_ANSI";

/// Default scene width when neither `--width` nor the terminal says otherwise.
pub const DEFAULT_WIDTH: u16 = 80;

pub const USAGE: &str = "\
usage: cellwidth-harness [table|titles] [--east-asian] [--ansi | --json] [--width N]

  table         strategy comparison: metrics, boxes, titles, ambiguous chars
  titles        titled boxes drawn per codepoint and per cluster
  --east-asian  render ambiguous-width characters two columns wide
  --narrow      render ambiguous-width characters one column wide
  --ansi        keep colors and bold in the output
  --json        print per-icon metrics as JSON lines instead of a scene
  --width N     scene width in columns (default: terminal width or 80)";

/// Which scene to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Metrics table and side-by-side strategy boxes.
    #[default]
    Table,
    /// Titled boxes, the way a view library draws them.
    Titles,
}

impl View {
    pub const ALL: [Self; 2] = [Self::Table, Self::Titles];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Titles => "titles",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "compare" | "tcell" => Ok(Self::Table),
            "titles" | "title" | "gocui" => Ok(Self::Titles),
            other => Err(HarnessError::Config(format!("unknown view `{other}`"))),
        }
    }
}

/// How the rendered output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Ansi,
    /// Icon metrics as JSON lines; no scene.
    Json,
}

/// Everything the harness binary needs to render one scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub view: View,
    pub mode: WidthMode,
    pub format: OutputFormat,
    /// Explicit width; `None` means ask the terminal.
    pub width: Option<u16>,
    pub ambiguous: AmbiguousTable,
    pub show_help: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            view: View::default(),
            mode: WidthMode::default(),
            format: OutputFormat::default(),
            width: None,
            ambiguous: AmbiguousTable::unicode(),
            show_help: false,
        }
    }
}

impl HarnessConfig {
    /// Read `CELLWIDTH_*` variables through `get_env`.
    pub fn from_env_with<F>(get_env: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let view = match env_nonempty(&get_env, ENV_HARNESS_VIEW) {
            Some(value) => value.parse()?,
            None => View::default(),
        };
        let format = if env_bool(&get_env, ENV_HARNESS_ANSI).unwrap_or(false) {
            OutputFormat::Ansi
        } else {
            OutputFormat::Text
        };
        Ok(Self {
            view,
            mode: WidthMode::from_env_with(&get_env),
            format,
            width: None,
            ambiguous: AmbiguousTable::from_env_with(&get_env)?,
            show_help: false,
        })
    }

    /// Apply command line arguments (without the program name).
    pub fn apply_args<I, S>(mut self, args: I) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => self.show_help = true,
                "--east-asian" => self.mode = WidthMode::Wide,
                "--narrow" => self.mode = WidthMode::Narrow,
                "--ansi" => self.format = OutputFormat::Ansi,
                "--json" => self.format = OutputFormat::Json,
                "--width" => {
                    let value = args
                        .next()
                        .ok_or_else(|| HarnessError::Config("--width needs a value".into()))?;
                    self.width = Some(parse_width(value.as_ref())?);
                }
                _ if arg.starts_with("--width=") => {
                    self.width = Some(parse_width(&arg["--width=".len()..])?);
                }
                _ if arg.starts_with('-') => {
                    return Err(HarnessError::Config(format!("unknown option `{arg}`")));
                }
                _ => self.view = arg.parse()?,
            }
        }
        Ok(self)
    }

    /// Width calculator honoring any ambiguous-table overrides.
    #[must_use]
    pub fn calculator(&self) -> WidthCalculator {
        WidthCalculator::new(self.ambiguous.clone())
    }
}

fn parse_width(value: &str) -> Result<u16, HarnessError> {
    match value.trim().parse::<u16>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(HarnessError::Config(format!(
            "invalid width `{value}`, expected 1..=65535"
        ))),
    }
}
