use std::io::Write;

use anyhow::{Context, Result};
use drift_catalog::Catalog;
use drift_view::{HtmlPage, InitialSelection, NodeRef, TextReport, ViewState};

use crate::OutputFormat;

/// Title of generated HTML pages.
pub const PAGE_TITLE: &str = "Truth Drift Map";

/// Writes one line per concept: id, overall drift and label.
pub fn list_concepts(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    let width = catalog
        .concepts()
        .map(|concept| concept.id.chars().count())
        .max()
        .unwrap_or_default();

    for concept in catalog.concepts() {
        writeln!(
            out,
            "{:width$}  {:6}  {}",
            concept.id,
            concept.overall_drift().key(),
            concept.label
        )?;
    }

    Ok(())
}

/// What `show` should select before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowRequest {
    /// Concept to select; falls back to the initial selection
    pub concept: Option<String>,
    /// Node to activate within the selected concept
    pub node: Option<NodeRef>,
    /// Output format
    pub format: OutputFormat,
}

/// Renders a snapshot of the requested selection.
///
/// An unresolvable `node` is an error; an unknown `concept` renders idle.
pub fn show_snapshot(
    catalog: &Catalog,
    initial: InitialSelection,
    request: ShowRequest,
    out: &mut impl Write,
) -> Result<()> {
    let mut state = match request.concept.as_deref() {
        Some(id) => {
            let mut state = ViewState::idle();
            state.select_concept(catalog, Some(id));
            state
        }
        None => ViewState::initial(catalog, initial),
    };

    if let Some(node) = request.node {
        state
            .activate_node(catalog, node)
            .context("Could not show node")?;
    }

    let view = state.view(catalog);
    match request.format {
        OutputFormat::Text => write!(out, "{}", TextReport(&view))?,
        OutputFormat::Html => write!(
            out,
            "{}",
            HtmlPage {
                view: &view,
                title: PAGE_TITLE,
            }
        )?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Writes the catalog as a document that `--catalog` accepts.
pub fn export_catalog(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", catalog.to_json_pretty()?)?;
    Ok(())
}
