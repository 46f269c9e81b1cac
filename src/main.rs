mod cli;
mod config;
mod data;
mod model;
mod text;
mod tui;
mod viewer;

use std::process;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
