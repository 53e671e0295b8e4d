//! Stache CLI
//!
//! Inspect how templates tokenize: dump the token stream or print the
//! canonical form of a template.

mod commands;
mod logging;

use commands::{canon_file, lex_file, parse_file_args};

fn main() {
    logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let options = match parse_file_args(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: stache lex <file> [--json] [--delimiters=\"<open> <close>\"]");
                    std::process::exit(1);
                }
            };
            lex_file(&options);
        }
        "canon" => {
            let options = match parse_file_args(&args[2..]) {
                Ok(options) if options.json => {
                    eprintln!("error: --json is only supported by `stache lex`");
                    std::process::exit(1);
                }
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: stache canon <file> [--delimiters=\"<open> <close>\"]");
                    std::process::exit(1);
                }
            };
            canon_file(&options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("stache {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Stache template lexer");
    println!();
    println!("Usage: stache <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>       Tokenize a template and display the tokens");
    println!("  canon <file>     Print the template in canonical tag syntax");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Options:");
    println!("  --json                       Print tokens as JSON (lex only)");
    println!("  --delimiters=\"<open> <close>\" Starting delimiters (default: \"{{{{ }}}}\")");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=stache_lexer=trace) for lexer tracing on stderr.");
}
