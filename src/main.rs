// src/main.rs
//
// Thin CLI over the calculator library: one expression in, one line
// out. All the arithmetic lives in the library; this file only maps
// argv and the error taxonomy onto stdout/stderr and the exit code.

use std::env;
use std::process::ExitCode;

use precise_calc::{calculate, format_result};

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "precise-calc".to_string());

    let expression = match args.next() {
        Some(expression) => expression,
        None => {
            eprintln!("Usage: {program} \"<expression>\"");
            eprintln!("Example: {program} \"0.1 + 0.2\"");
            return ExitCode::FAILURE;
        }
    };

    match calculate(&expression) {
        Ok(result) => {
            println!("{}", format_result(&result));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
