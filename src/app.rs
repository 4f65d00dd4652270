//! Request pipeline, independent of process globals.

use std::io::{Read, Write};
use std::time::Instant;

use log::{debug, warn};

use crate::config::{Command, SortRequest, SIZE_WARNING_THRESHOLD};
use crate::error::AppError;
use crate::input::read_integers;
use crate::registry::SortFactory;
use crate::tui;

/// Read integers from `input`, sort them and write one line to `output`.
///
/// Nothing is written to `output` unless the whole request succeeds.
pub fn run_sort<R: Read, W: Write>(
    registry: &SortFactory,
    request: &SortRequest,
    input: R,
    mut output: W,
) -> Result<(), AppError> {
    let data = read_integers(input)?;
    let list_size = data.len();

    if list_size > SIZE_WARNING_THRESHOLD {
        warn!("List size ({}) exceeds 2x1e5.", list_size);
    }

    tui::print_request_banner(request, list_size);

    let start = Instant::now();
    let sorted = registry.sort_data(&request.algorithm, &data, request.order, Some(list_size))?;
    debug!("Sorted {} elements in {:?}", list_size, start.elapsed());

    writeln!(output, "{}", tui::format_sequence(&sorted)).map_err(AppError::Output)?;
    output.flush().map_err(AppError::Output)
}

/// Execute a parsed command. Returns `Ok(false)` when verification ran but
/// at least one algorithm failed.
pub fn execute<R: Read, W: Write>(
    registry: &SortFactory,
    command: Command,
    input: R,
    output: W,
) -> Result<bool, AppError> {
    match command {
        Command::Sort(request) => run_sort(registry, &request, input, output).map(|()| true),
        Command::List => {
            tui::print_available_algorithms(registry);
            Ok(true)
        }
        Command::Verify { seed } => {
            let seed = seed.unwrap_or_else(time_seed);
            Ok(tui::run_and_display_verification(registry, seed))
        }
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}
