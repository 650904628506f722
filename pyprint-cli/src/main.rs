//! pyprint CLI - Command line interface
//!
//! Joins the given values with a separator, appends a terminator and writes
//! the line to stdout or appends it to a file.

use clap::Parser;
use std::process;
use tracing::debug;

mod config;
mod logging;

use crate::config::Cli;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.log_level, cli.log_format.into());

    let (values, options) = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    debug!(
        target: "pyprint_cli",
        count = values.len(),
        target_path = options.target(),
        "printing"
    );

    if let Err(e) = pyprint::print(&values, &options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
