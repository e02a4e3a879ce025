//! `recommend` command implementation for the BingoRoute CLI.

use std::io::Write;

use bingoroute_core::{Preferences, ScoredDestination};
use bingoroute_scorer::{Categories, DEFAULT_MAX_RESULTS, categorize, recommend};
use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::output::write_json;
use crate::{
    ARG_CATALOG, ARG_DISTRICT, ARG_END_DATE, ARG_MAX_RESULTS, ARG_START_DATE, ARG_THEME, CliError,
    ENV_RECOMMEND_CATALOG,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every catalog entry against the supplied themes, \
                 districts and travel dates, then print the ranking with \
                 its top picks, theme matches and nearby options.",
    about = "Recommend destinations for a trip"
)]
#[ortho_config(prefix = "BINGOROUTE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON destination catalog.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Preferred theme; repeat for several.
    #[arg(long = ARG_THEME, value_name = "theme")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) themes: Vec<String>,
    /// Preferred district; repeat for several.
    #[arg(long = ARG_DISTRICT, value_name = "district")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) districts: Vec<String>,
    /// First day of the trip (YYYY-MM-DD); selects the season.
    #[arg(long = ARG_START_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) start_date: Option<String>,
    /// Last day of the trip (YYYY-MM-DD).
    #[arg(long = ARG_END_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) end_date: Option<String>,
    /// Maximum number of ranked destinations to keep.
    #[arg(long = ARG_MAX_RESULTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_results: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) preferences: Preferences,
    pub(crate) max_results: usize,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        let start = parse_date(args.start_date.as_deref(), ARG_START_DATE)?;
        let end = parse_date(args.end_date.as_deref(), ARG_END_DATE)?;
        if let (Some(start), Some(end)) = (start, end)
            && end < start
        {
            return Err(CliError::DateOrder { start, end });
        }
        let preferences = Preferences::new()
            .with_themes(args.themes)
            .with_districts(args.districts)
            .with_dates(start, end);
        Ok(Self {
            catalog,
            preferences,
            max_results: args.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        })
    }
}

fn parse_date(value: Option<&str>, field: &'static str) -> Result<Option<NaiveDate>, CliError> {
    value
        .map(|text| {
            NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|source| CliError::InvalidDate {
                field,
                value: text.to_owned(),
                source,
            })
        })
        .transpose()
}

/// Printed result: the three buckets plus the full ranking.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendOutput {
    #[serde(flatten)]
    pub(crate) categories: Categories,
    pub(crate) ranked: Vec<ScoredDestination>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = load_catalog(&config.catalog)?;
    let ranked = recommend(&catalog, &config.preferences, config.max_results);
    let output = RecommendOutput {
        categories: categorize(&ranked),
        ranked,
    };
    write_json(writer, &output)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
