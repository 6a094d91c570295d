use std::path::PathBuf;

use anyhow::{Context, Result};
use drift_catalog::Catalog;
use drift_view::InitialSelection;

use crate::{DriftMapCli, LogConfig};

/// Where the concepts come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into the binary
    Builtin,
    /// A catalog document on disk
    File(PathBuf),
}

impl CatalogSource {
    /// Loads the catalog, validating documents on the way in.
    pub fn load(&self) -> Result<Catalog> {
        match self {
            CatalogSource::Builtin => Ok(Catalog::builtin().clone()),
            CatalogSource::File(path) => Catalog::load(path)
                .with_context(|| format!("Could not load catalog from {}", path.display())),
        }
    }
}

/// Settings resolved once from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftMapConfig {
    /// Catalog to browse
    pub catalog: CatalogSource,
    /// Selection when no concept is requested explicitly
    pub initial: InitialSelection,
    /// Log sink and filter
    pub log: LogConfig,
}

impl From<&DriftMapCli> for DriftMapConfig {
    fn from(cli: &DriftMapCli) -> Self {
        let interactive = cli
            .command
            .as_ref()
            .is_none_or(|command| command.is_interactive());

        Self {
            catalog: match &cli.catalog {
                Some(path) => CatalogSource::File(path.clone()),
                None => CatalogSource::Builtin,
            },
            initial: cli.initial.into(),
            log: LogConfig {
                filter: cli.log_level.clone(),
                file: cli.log_file.clone(),
                interactive,
            },
        }
    }
}
