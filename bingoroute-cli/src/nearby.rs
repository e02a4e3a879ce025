//! `nearby` command implementation for the BingoRoute CLI.

use std::io::Write;

use bingoroute_core::{Coordinates, format_distance, nearest_first};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::output::write_json;
use crate::{
    ARG_CATALOG, ARG_LATITUDE, ARG_LIMIT, ARG_LONGITUDE, CliError, ENV_NEARBY_CATALOG,
    ENV_NEARBY_LATITUDE, ENV_NEARBY_LONGITUDE,
};

const DEFAULT_LIMIT: usize = 10;

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print catalog entries ordered by great-circle distance \
                 from the given point, nearest first.",
    about = "List destinations near a point"
)]
#[ortho_config(prefix = "BINGOROUTE")]
pub(crate) struct NearbyArgs {
    /// Path to a JSON destination catalog.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Latitude of the reference point in degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the reference point in degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Maximum number of destinations to print.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) origin: Coordinates,
    pub(crate) limit: usize,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_NEARBY_CATALOG,
        })?;
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_NEARBY_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_NEARBY_LONGITUDE,
        })?;
        check_range(latitude, 90.0, ARG_LATITUDE, "within -90..=90")?;
        check_range(longitude, 180.0, ARG_LONGITUDE, "within -180..=180")?;
        Ok(Self {
            catalog,
            origin: Coordinates::new(latitude, longitude),
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
        })
    }
}

fn check_range(
    value: f64,
    bound: f64,
    field: &'static str,
    expected: &'static str,
) -> Result<(), CliError> {
    if value.is_finite() && value.abs() <= bound {
        Ok(())
    } else {
        Err(CliError::OutOfRange {
            field,
            expected,
            value,
        })
    }
}

/// One printed row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NearbyEntry<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: &'a str,
    pub(crate) district: &'a str,
    pub(crate) distance_km: f64,
    pub(crate) distance: String,
}

pub(crate) fn run_nearby(args: NearbyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearby_with(args, &mut stdout)
}

pub(crate) fn run_nearby_with(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = load_catalog(&config.catalog)?;
    let entries: Vec<NearbyEntry<'_>> = nearest_first(&catalog, config.origin)
        .into_iter()
        .take(config.limit)
        .map(|nearby| NearbyEntry {
            id: &nearby.destination.id,
            name: &nearby.destination.name,
            district: &nearby.destination.district,
            distance_km: nearby.km,
            distance: format_distance(nearby.km),
        })
        .collect();
    write_json(writer, &entries)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NearbyConfig, CliError> {
    let merged = NearbyArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NearbyConfig::try_from(merged)
}
