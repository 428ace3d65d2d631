//! CLI tool to tokenize and validate DAX files.

use std::fs;
use std::process::ExitCode;

use log::{debug, warn};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: daxlex <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens    Print the token stream of each file");
        eprintln!("  validate  Check that each file lexes without errors");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  daxlex tokens measures.dax");
        eprintln!("  daxlex validate queries/*.dax");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if !matches!(command, "tokens" | "validate") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        if !dax_lexer::DAX.matches_filename(path) {
            warn!("{path}: not a {} file, lexing anyway", dax_lexer::DAX.title);
        }

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };
        debug!("{path}: {} bytes", content.len());

        if command == "tokens" {
            for token in dax_lexer::tokenize(&content) {
                println!(
                    "{}:{}\t{}\t{:?}",
                    token.span.line, token.span.column, token.kind, token.text
                );
            }
        } else {
            match dax_lexer::validate(&content) {
                Ok(tokens) => {
                    eprintln!("{path}: ok ({} tokens)", tokens.len());
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
