use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use drift_view::{InitialSelection, NodeRef};

/// Command line of the `drift-map` binary.
#[derive(Debug, Parser)]
#[command(name = "drift-map")]
#[command(bin_name = "drift-map")]
#[command(about = "Visualize how data concepts drift across services", long_about = None)]
pub struct DriftMapCli {
    /// Load concepts from a catalog document instead of the built-in catalog
    #[arg(long, global = true, env = "DRIFT_MAP_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// What to select on start when no concept is given
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = InitialArg::First,
        env = "DRIFT_MAP_INITIAL"
    )]
    pub initial: InitialArg,

    /// Log filter such as `debug` or `drift_view=trace`; defaults to `RUST_LOG`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs to this file (the only log sink while browsing)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Defaults to `browse`
    #[command(subcommand)]
    pub command: Option<DriftMapCommand>,
}

/// Sub-commands of `drift-map`.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum DriftMapCommand {
    /// Browse the drift map interactively
    Browse {
        /// Concept to select on start
        #[arg(short, long)]
        concept: Option<String>,
    },

    /// List concepts with their overall drift
    List,

    /// Print a rendered snapshot of the drift map
    Show {
        /// Concept to select
        #[arg(short, long)]
        concept: Option<String>,

        /// Version node to activate, as `SERVICE:INDEX`
        #[arg(short, long, value_parser = parse_node_ref)]
        node: Option<NodeRef>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the catalog as a JSON document
    Export,
}

impl Default for DriftMapCommand {
    fn default() -> Self {
        DriftMapCommand::Browse { concept: None }
    }
}

impl DriftMapCommand {
    /// Whether this command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self, DriftMapCommand::Browse { .. })
    }
}

/// `--initial` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InitialArg {
    /// Pre-select the first concept
    First,
    /// Start with nothing selected
    #[value(name = "none")]
    Nothing,
}

impl From<InitialArg> for InitialSelection {
    fn from(value: InitialArg) -> Self {
        match value {
            InitialArg::First => InitialSelection::First,
            InitialArg::Nothing => InitialSelection::Nothing,
        }
    }
}

/// `show --format` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report
    #[default]
    Text,
    /// Standalone HTML page
    Html,
    /// JSON snapshot
    Json,
}

/// Parses `SERVICE:INDEX`. Service names may themselves contain `:`.
pub fn parse_node_ref(value: &str) -> Result<NodeRef, String> {
    let (service, index) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("expected SERVICE:INDEX, found '{value}'"))?;

    let service = service.trim();
    if service.is_empty() {
        return Err(format!("missing service name in '{value}'"));
    }

    let index = index
        .trim()
        .parse()
        .map_err(|error| format!("invalid version index in '{value}': {error}"))?;

    Ok(NodeRef::new(service, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_has_a_consistent_command_definition() {
        DriftMapCli::command().debug_assert();
    }

    #[test]
    fn it_parses_node_references() {
        assert_eq!(
            parse_node_ref("Service A:0"),
            Ok(NodeRef::new("Service A", 0))
        );
        assert_eq!(
            parse_node_ref("ns:svc : 2"),
            Ok(NodeRef::new("ns:svc", 2))
        );
        assert!(parse_node_ref("Service A").is_err());
        assert!(parse_node_ref(":1").is_err());
        assert!(parse_node_ref("Service A:first").is_err());
    }

    #[test]
    fn it_parses_show_arguments() {
        let cli = DriftMapCli::parse_from([
            "drift-map",
            "show",
            "--concept",
            "user_status",
            "--node",
            "Service B:1",
            "--format",
            "html",
        ]);

        assert_eq!(
            cli.command,
            Some(DriftMapCommand::Show {
                concept: Some("user_status".into()),
                node: Some(NodeRef::new("Service B", 1)),
                format: OutputFormat::Html,
            })
        );
    }

    #[test]
    fn it_accepts_global_options_after_the_command() {
        let cli = DriftMapCli::parse_from(["drift-map", "list", "--initial", "none"]);

        assert_eq!(cli.command, Some(DriftMapCommand::List));
        assert_eq!(cli.initial, InitialArg::Nothing);
    }

    #[test]
    fn it_browses_by_default() {
        assert!(DriftMapCommand::default().is_interactive());
        assert!(!DriftMapCommand::List.is_interactive());
    }
}
