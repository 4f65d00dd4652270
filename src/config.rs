//! Command-line configuration.

use std::ffi::OsString;

use clap::Parser;

use crate::error::UsageError;
use crate::sorting::Order;

/// Inputs longer than this are still sorted, but trigger a warning.
pub const SIZE_WARNING_THRESHOLD: usize = 200_000;

/// Sort whitespace-separated integers read from standard input.
#[derive(Parser, Debug)]
#[command(name = "sortkit")]
pub struct Args {
    /// ALGORITHM (bubble, selection, quick, merge, shell) and ORDER (asc, desc)
    #[arg(value_name = "ALGORITHM ORDER")]
    pub positional: Vec<String>,

    /// List available algorithms
    #[arg(short, long, conflicts_with_all = ["positional", "verify"])]
    pub list: bool,

    /// Check every algorithm against the standard library sort
    #[arg(long, conflicts_with = "positional")]
    pub verify: bool,

    /// Random seed for --verify (default: time-based)
    #[arg(long, requires = "verify")]
    pub seed: Option<u64>,
}

/// A validated sort request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortRequest {
    /// Lowercased algorithm name; resolved later by the dispatcher
    pub algorithm: String,
    pub order: Order,
}

/// What the process was asked to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Sort(SortRequest),
    List,
    Verify { seed: Option<u64> },
}

impl Args {
    /// Turn parsed flags into a [`Command`], validating the positionals.
    pub fn into_command(self) -> Result<Command, UsageError> {
        if self.list {
            return Ok(Command::List);
        }
        if self.verify {
            return Ok(Command::Verify { seed: self.seed });
        }

        let [algorithm, order] = <[String; 2]>::try_from(self.positional)
            .map_err(|rest| UsageError::ArgumentCount(rest.len()))?;

        let order = order
            .parse::<Order>()
            .map_err(|_| UsageError::InvalidOrder(order.to_lowercase()))?;

        Ok(Command::Sort(SortRequest {
            algorithm: algorithm.to_lowercase(),
            order,
        }))
    }
}

/// Parse a full argument list (including the program name).
pub fn parse_args<I, T>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)?.into_command()
}
