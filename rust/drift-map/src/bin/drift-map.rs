use anyhow::Result;
use clap::Parser;
use drift_map::{
    DriftMapCli, DriftMapCommand, DriftMapConfig, DriftMapState, ShowRequest, export_catalog,
    init_logging, list_concepts, show_snapshot,
};

pub fn main() -> Result<()> {
    let cli = DriftMapCli::parse();
    let config = DriftMapConfig::from(&cli);

    init_logging(&config.log)?;

    let catalog = config.catalog.load()?;
    let mut stdout = std::io::stdout().lock();

    match cli.command.unwrap_or_default() {
        DriftMapCommand::Browse { concept } => {
            let state = DriftMapState::new(catalog, config.initial, concept.as_deref());
            let terminal = ratatui::init();
            let result = state.run(terminal);
            ratatui::restore();
            result
        }
        DriftMapCommand::List => list_concepts(&catalog, &mut stdout),
        DriftMapCommand::Show {
            concept,
            node,
            format,
        } => show_snapshot(
            &catalog,
            config.initial,
            ShowRequest {
                concept,
                node,
                format,
            },
            &mut stdout,
        ),
        DriftMapCommand::Export => export_catalog(&catalog, &mut stdout),
    }
}
