//! lexis CLI
//!
//! Prints token listings for files using the stock configurations.

mod args;
mod commands;
mod error;

use std::sync::Once;

use args::Command;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=lexis=debug` or `RUST_LOG=lexis_switch=debug,lexis=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = match args::parse(args.get(1..).unwrap_or(&[])) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let result = match command {
        Command::Lex(options) => commands::lex(&options),
        Command::Presets => {
            commands::list_presets();
            Ok(())
        }
        Command::Help => {
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: lexis <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file>...        Print the tokens of each file ('-' reads stdin)");
    eprintln!("  presets              List the available configurations");
    eprintln!("  help                 Show this message");
    eprintln!();
    eprintln!("Options for lex:");
    eprintln!("  --preset=<name>      Configuration to tokenize with (default: default)");
    eprintln!("  --skip-whitespace    Leave whitespace tokens out of the listing");
}
