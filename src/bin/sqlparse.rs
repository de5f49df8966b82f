//! `sqlparse` — a thin CLI wrapper around [`sqlite_parser::parse`] and
//! [`sqlite_parser::tokenize`].
//!
//! Reads a SQL file (or stdin, if no path is given) and prints either
//! the raw token stream or the parsed statement list. This binary does
//! no parsing of its own; it exists only to exercise the library from
//! a terminal.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sqlite_parser::diagnostic::Severity;

/// Tokenize or parse a SQLite SQL source file.
#[derive(ClapParser)]
#[command(name = "sqlparse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL file to read. Reads from stdin when omitted.
    file: Option<PathBuf>,

    /// Print the raw token stream instead of parsing.
    #[arg(long)]
    tokens: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("sqlparse: a global tracing subscriber was already installed");
    }

    let source = match read_input(cli.file.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("sqlparse: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.tokens {
        for token in sqlite_parser::tokenize(&source) {
            println!(
                "{:>6}..{:<6} {}",
                token.span.start,
                token.span.end,
                token.kind.describe()
            );
        }
        return ExitCode::SUCCESS;
    }

    let (statements, diagnostics) = sqlite_parser::parse(&source);
    info!(count = statements.len(), "parsed statements");
    for statement in &statements {
        println!("{statement:#?}");
    }
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic.render_snippet(&source));
    }

    if diagnostics
        .iter()
        .any(|d| d.severity == Severity::Error)
    {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_input(path: Option<&std::path::Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
