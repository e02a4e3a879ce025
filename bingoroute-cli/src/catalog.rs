//! Locate, open and validate the catalog file named on the command line.

use std::io::{BufReader, ErrorKind};

use bingoroute_core::Catalog;
use camino::Utf8Path;
use log::debug;

use crate::{ARG_CATALOG, CliError, fs};

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == ErrorKind::NotFound => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load and validate a JSON catalog from disk.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Catalog, CliError> {
    require_existing(path, ARG_CATALOG)?;
    let file = fs::open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::InvalidCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("loaded {} destinations from {path}", catalog.len());
    Ok(catalog)
}
