//! xflconv - Command-line tool for converting XFL-style animation projects to JSON

use std::process::ExitCode;

use xflconv::cli;

fn main() -> ExitCode {
    cli::run()
}
