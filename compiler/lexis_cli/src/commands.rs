//! Command handlers.

use std::fmt;
use std::io::Read;

use lexis::presets::{ansi_config, default_config};
use lexis::{Lexer, LexerConfig};
use rayon::prelude::*;

use crate::args::{Input, LexOptions, Preset};
use crate::error::CliError;

/// Tokenize every input with the chosen preset and print the listings.
pub fn lex(options: &LexOptions) -> Result<(), CliError> {
    let listings = match options.preset {
        Preset::Default => lex_inputs(&default_config()?, options)?,
        Preset::Ansi => lex_inputs(&ansi_config()?, options)?,
    };
    for listing in listings {
        print!("{listing}");
    }
    Ok(())
}

pub fn list_presets() {
    for preset in Preset::ALL {
        println!("{:<10} {}", preset.name(), preset.description());
    }
}

/// Tokenize all inputs in parallel against one shared configuration.
///
/// Listings come back in input order; the first read error aborts.
#[tracing::instrument(level = "debug", skip_all, fields(inputs = options.inputs.len()))]
fn lex_inputs<K>(config: &LexerConfig<K>, options: &LexOptions) -> Result<Vec<String>, CliError>
where
    K: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync,
{
    options
        .inputs
        .par_iter()
        .map(|input| {
            let source = read_input(input)?;
            Ok(render(config, &input.label(), &source, options.skip_whitespace))
        })
        .collect()
}

fn read_input(input: &Input) -> Result<Vec<u8>, CliError> {
    match input {
        Input::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(CliError::Stdin)?;
            Ok(buf)
        }
        Input::File(path) => std::fs::read(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
    }
}

/// One header line, then one indented line per token.
pub(crate) fn render<K>(
    config: &LexerConfig<K>,
    label: &str,
    source: &[u8],
    skip_whitespace: bool,
) -> String
where
    K: Copy + Eq + fmt::Debug + fmt::Display,
{
    let tokens = Lexer::new(config).lex(source);
    let is_whitespace = |kind: K| {
        config
            .whitespace()
            .is_some_and(|set| set.iter().any(|pattern| pattern.tag() == kind))
    };

    let mut out = format!("Tokens for '{label}' ({} tokens):\n", tokens.len());
    for token in tokens
        .iter()
        .filter(|token| !(skip_whitespace && is_whitespace(token.kind)))
    {
        out.push_str("  ");
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}
