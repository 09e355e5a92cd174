//! CLI tool to run the demo's actions from a terminal.
//!
//! Usage:
//!   playground calc <a> <b> [--strict]
//!   playground text <text>
//!   playground scope [--times N]
//!   playground progress [--seed S] [--max-increment M]
//!   playground bindings [--action NAME]

use std::io;
use std::process;

use clap::Parser;
use playground_rs::cli::{Cli, run};
use playground_rs::logging::init_cli_logger;

fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = run(&cli.command, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
