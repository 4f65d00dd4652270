//! Sort integers from standard input.
//!
//! Usage:
//!   sortkit <algorithm> <order> < input.txt   # Sort, print to stdout
//!   sortkit --list                            # List available algorithms
//!   sortkit --verify [--seed N]               # Self-check every algorithm
//!   sortkit --help                            # Show help

use std::io::{self, Write};
use std::process;

use clap::error::ErrorKind;
use env_logger::Env;
use log::Level;

use sortkit::app;
use sortkit::config::parse_args;
use sortkit::error::{AppError, UsageError};
use sortkit::registry::build_registry;
use sortkit::tui;

fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| match record.level() {
            Level::Info | Level::Debug | Level::Trace => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();
}

fn main() {
    init_logger();
    let registry = build_registry();

    let command = match parse_args(std::env::args_os()) {
        Ok(command) => command,
        Err(UsageError::Clap(e))
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            println!("{}", tui::usage(&registry));
            return;
        }
        Err(UsageError::Clap(e)) => {
            eprint!("{}", e);
            tui::print_usage(&registry);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            tui::print_usage(&registry);
            process::exit(1);
        }
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match app::execute(&registry, command, stdin, stdout) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(AppError::Input(e)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
