//! Command-line interface over a BingoRoute destination catalog.
//!
//! Every subcommand reads a JSON catalog, runs one stage of the trip
//! planner and prints its result as pretty JSON on stdout.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod filter;
mod fs;
mod nearby;
mod output;
mod recommend;

pub use error::CliError;

use filter::{FilterArgs, run_filter};
use nearby::{NearbyArgs, run_nearby};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_THEME: &str = "theme";
pub(crate) const ARG_DISTRICT: &str = "district";
pub(crate) const ARG_MAX_COST: &str = "max-cost";
pub(crate) const ARG_START_DATE: &str = "start-date";
pub(crate) const ARG_END_DATE: &str = "end-date";
pub(crate) const ARG_MAX_RESULTS: &str = "max-results";
pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ENV_FILTER_CATALOG: &str = "BINGOROUTE_CMDS_FILTER_CATALOG";
pub(crate) const ENV_RECOMMEND_CATALOG: &str = "BINGOROUTE_CMDS_RECOMMEND_CATALOG";
pub(crate) const ENV_NEARBY_CATALOG: &str = "BINGOROUTE_CMDS_NEARBY_CATALOG";
pub(crate) const ENV_NEARBY_LATITUDE: &str = "BINGOROUTE_CMDS_NEARBY_LATITUDE";
pub(crate) const ENV_NEARBY_LONGITUDE: &str = "BINGOROUTE_CMDS_NEARBY_LONGITUDE";

/// Run the BingoRoute CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Filter(args) => run_filter(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Nearby(args) => run_nearby(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "bingoroute",
    about = "Search, rank and locate Seoul travel destinations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Narrow a catalog by search text, themes, districts and budget.
    Filter(FilterArgs),
    /// Rank a catalog against visitor preferences and group the results.
    Recommend(RecommendArgs),
    /// List catalog entries by distance from a point.
    Nearby(NearbyArgs),
}

#[cfg(test)]
mod tests;
