//! Command-line parsing.
//!
//! Flags use the `--name=value` form; anything not starting with `-` is a
//! path. A lone `-` reads standard input.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CliError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Lex(LexOptions),
    Presets,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub preset: Preset,
    pub inputs: Vec<Input>,
    /// Omit whitespace tokens from the listing.
    pub skip_whitespace: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn label(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// Stock configuration to tokenize with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Default,
    Ansi,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Default, Preset::Ansi];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Ansi => "ansi",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Default => "C-like punctuation, operators, identifiers and numbers",
            Preset::Ansi => "ANSI SGR escape sequences such as \\x1b[1;31m",
        }
    }
}

impl FromStr for Preset {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| CliError::UnknownPreset(s.to_string()))
    }
}

/// Parse the arguments after the program name.
pub fn parse(args: &[String]) -> Result<Command, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "lex" => parse_lex(rest).map(Command::Lex),
        "presets" => Ok(Command::Presets),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    }
}

fn parse_lex(args: &[String]) -> Result<LexOptions, CliError> {
    let mut options = LexOptions {
        preset: Preset::default(),
        inputs: Vec::new(),
        skip_whitespace: false,
    };

    for arg in args {
        if let Some(name) = arg.strip_prefix("--preset=") {
            options.preset = name.parse()?;
        } else if arg == "--skip-whitespace" {
            options.skip_whitespace = true;
        } else if arg == "-" {
            if options.inputs.contains(&Input::Stdin) {
                return Err(CliError::Usage("'-' given more than once".to_string()));
            }
            options.inputs.push(Input::Stdin);
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else {
            options.inputs.push(Input::File(PathBuf::from(arg)));
        }
    }

    if options.inputs.is_empty() {
        return Err(CliError::Usage("missing input file".to_string()));
    }
    Ok(options)
}
