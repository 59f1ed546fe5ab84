//! `json-with` — get or create an object or array at a JSON Pointer.
//!
//! Usage:
//!   json-with <object|array> '<pointer>' [--mode none|nulls|all] [--no-prefer-index] [--merge '<json>']
//!
//! The document is read from stdin; the resulting document goes to stdout.

use json_nav_cli::json_cli::{parse_args, run_with};
use json_nav_cli::logging::setup_logging;
use std::io::{self, Read, Write};

fn main() {
    setup_logging();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run_with(buf.trim(), &args) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "json-with failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
