//! `filter` command implementation for the BingoRoute CLI.

use std::io::Write;

use bingoroute_core::DestinationFilter;
use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::output::write_json;
use crate::{
    ARG_CATALOG, ARG_DISTRICT, ARG_MAX_COST, ARG_QUERY, ARG_THEME, CliError, ENV_FILTER_CATALOG,
};

/// CLI arguments for the `filter` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the catalog entries matching every supplied \
                 criterion, in catalog order. Omitted criteria match \
                 everything.",
    about = "Filter a destination catalog"
)]
#[ortho_config(prefix = "BINGOROUTE")]
pub(crate) struct FilterArgs {
    /// Path to a JSON destination catalog.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Case-insensitive text searched in names, districts and descriptions.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Accepted theme; repeat for several.
    #[arg(long = ARG_THEME, value_name = "theme")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) themes: Vec<String>,
    /// Accepted district; repeat for several.
    #[arg(long = ARG_DISTRICT, value_name = "district")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) districts: Vec<String>,
    /// Upper bound on the estimated cost per person.
    #[arg(long = ARG_MAX_COST, value_name = "amount")]
    #[serde(default)]
    pub(crate) max_cost: Option<f64>,
}

impl FilterArgs {
    pub(crate) fn into_config(self) -> Result<FilterConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FilterConfig::try_from(merged)
    }
}

/// Resolved `filter` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FilterConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) filter: DestinationFilter,
}

impl TryFrom<FilterArgs> for FilterConfig {
    type Error = CliError;

    fn try_from(args: FilterArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_FILTER_CATALOG,
        })?;
        let mut filter = DestinationFilter::new()
            .with_query(args.query.as_deref().unwrap_or_default())
            .with_themes(&args.themes)
            .with_districts(&args.districts);
        if let Some(max_cost) = args.max_cost {
            if !max_cost.is_finite() || max_cost < 0.0 {
                return Err(CliError::OutOfRange {
                    field: ARG_MAX_COST,
                    expected: "a non-negative number",
                    value: max_cost,
                });
            }
            filter = filter.with_max_cost(max_cost);
        }
        Ok(Self { catalog, filter })
    }
}

pub(crate) fn run_filter(args: FilterArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_filter_with(args, &mut stdout)
}

pub(crate) fn run_filter_with(args: FilterArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = load_catalog(&config.catalog)?;
    let matches = config.filter.apply(&catalog);
    debug!("{} of {} destinations matched", matches.len(), catalog.len());
    write_json(writer, &matches)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<FilterConfig, CliError> {
    let merged = FilterArgs::merge_from_layers(layers).map_err(CliError::from)?;
    FilterConfig::try_from(merged)
}
