//! tsq developer CLI
//!
//! Shows what the lexer makes of a query: assembled tokens, raw scanner
//! output, numeric classification, and the keyword vocabulary.

mod commands;
mod logging;

use commands::{keywords_command, lex_command, number_command, LexArgs};

fn main() {
    logging::setup_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match LexArgs::parse(&args[2..]) {
            Ok(lex_args) => {
                if !lex_command(&lex_args) {
                    std::process::exit(1);
                }
            }
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: tsq lex <file.sql> [--raw] [--keep-trivia]");
                eprintln!("       tsq lex -e <sql> [--raw] [--keep-trivia]");
                std::process::exit(1);
            }
        },
        "number" => {
            if args.len() < 3 {
                eprintln!("Usage: tsq number <text>");
                std::process::exit(1);
            }
            if !number_command(&args[2]) {
                std::process::exit(1);
            }
        }
        "keywords" => keywords_command(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("tsq {}", env!("CARGO_PKG_VERSION"));
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
    println!("tsq query lexer");
    println!();
    println!("Usage: tsq <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.sql>       Tokenize a query file and display tokens");
    println!("  lex -e <sql>         Tokenize an inline query");
    println!("  number <text>        Classify text as a numeric literal");
    println!("  keywords             List reserved words");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --raw                Show single-token scanner output (no assembly)");
    println!("  --keep-trivia        Keep comments in the assembled output");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Log filter, e.g. tsq_lexer=trace");
    println!("  TSQ_LOG_TREE         Render logs as an indented tree");
}
