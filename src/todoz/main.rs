//! Thin binary: parse, dispatch, print.
//!
//! All state logic lives in the library; this file only invokes `cli::run()`
//! and maps errors to the exit code.

mod args;
mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
