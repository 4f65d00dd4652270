//! Text output for the CLI.
//!
//! The sorted sequence is the only thing written to standard output during a
//! sort; everything here except the listing and verification report goes to
//! the diagnostic stream.

use log::info;

use crate::config::SortRequest;
use crate::registry::SortFactory;

const BANNER_WIDTH: usize = 50;

/// Log the request summary framed by separator lines.
pub fn print_request_banner(request: &SortRequest, list_size: usize) {
    let separator = "-".repeat(BANNER_WIDTH);

    info!("{}", separator);
    info!("Processing sort request...");
    info!("  Algorithm: {}", request.algorithm);
    info!("  Order:     {}", request.order);
    info!("  List Size: {}", list_size);
    info!("{}", separator);
}

pub fn usage(registry: &SortFactory) -> String {
    format!(
        "Usage: sortkit <algorithm> <order>\n  \
         <algorithm>: {}\n  \
         <order>: asc, desc\n\n\
         Options:\n  \
         --list, -l     List all available algorithms\n  \
         --verify       Check every algorithm against the standard library sort\n  \
         --seed N       Random seed for --verify (default: time-based)\n  \
         --help, -h     Show this help message\n\n\
         Example:\n  \
         sortkit quick asc < input.txt > output.txt",
        registry.names().join(", ")
    )
}

/// Print usage instructions to standard error
pub fn print_usage(registry: &SortFactory) {
    eprintln!("{}", usage(registry));
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &SortFactory) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!("  {:<12} - {}", algo.name(), algo.description());
    }
}

/// Run every algorithm's self-check and print one line per algorithm.
///
/// Returns whether all of them passed.
pub fn run_and_display_verification(registry: &SortFactory, seed: u64) -> bool {
    println!("Verifying {} algorithms (seed {})...", registry.all().len(), seed);

    let mut all_passed = true;
    for algo in registry.all() {
        match algo.verify(seed) {
            Ok(()) => println!("  ✅ {:<12} passed", algo.name()),
            Err(e) => {
                println!("  ❌ {:<12} {}", algo.name(), e);
                all_passed = false;
            }
        }
    }

    all_passed
}

/// Format the sorted sequence as a single space-separated line.
pub fn format_sequence(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
