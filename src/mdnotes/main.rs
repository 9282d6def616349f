//! # mdnotes CLI
//!
//! The binary is thin: argument parsing, printing and the interactive menu
//! live in `cli/`, every operation goes through [`mdnotes::api::NotesApi`].
//! This file only runs the CLI and maps failures to an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
