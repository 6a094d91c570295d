use std::fmt;

use crate::{DESCRIPTION_HINT, DetailPanel, DriftView, EMPTY_MAP, MAP_HEADER, MapView, SectionBody};

/// A plain-text report of a [`DriftView`], one region after another.
///
/// ```text
/// User Status (user_status)
/// Represents whether a user is active, ...
///
/// Canonical: user_status (string)
/// ...
/// ```
pub struct TextReport<'a>(pub &'a DriftView);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        match (&view.select.selected, &view.description) {
            (Some(id), Some(description)) => {
                let label = &view.select.options[view.select.selected_index()].label;
                writeln!(f, "{label} ({id})")?;
                writeln!(f, "{description}")?;
            }
            _ => writeln!(f, "{DESCRIPTION_HINT}")?,
        }

        if let Some(canonical) = &view.canonical {
            writeln!(f)?;
            writeln!(
                f,
                "Canonical: {} ({})",
                canonical.field_name, canonical.schema.value_type
            )?;
            writeln!(f, "  {}", canonical.meaning)?;
            writeln!(
                f,
                "  {}: {}",
                canonical.schema.constraint.title(),
                canonical.schema.constraint.items().join(", ")
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", view.summary.text())?;

        writeln!(f)?;
        match &view.map {
            MapView::Empty => writeln!(f, "{EMPTY_MAP}")?,
            MapView::Grid(grid) => {
                let width = grid
                    .lanes
                    .iter()
                    .map(|lane| lane.service.chars().count())
                    .chain([MAP_HEADER[0].len()])
                    .max()
                    .unwrap_or_default();

                writeln!(f, "{:width$} | {}", MAP_HEADER[0], MAP_HEADER[1])?;
                for lane in &grid.lanes {
                    let nodes = lane
                        .nodes
                        .iter()
                        .map(|node| {
                            format!(
                                "{}[{} {} · {}]",
                                if node.active { "*" } else { "" },
                                node.version,
                                node.time,
                                node.drift
                            )
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                    writeln!(f, "{:width$} | {}", lane.service, nodes)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", view.details.heading())?;
        match &view.details {
            DetailPanel::Prompt { text } => writeln!(f, "{text}")?,
            DetailPanel::Record(record) => {
                writeln!(f, "{}", record.meta)?;
                writeln!(f, "{}", record.level_line())?;
                for section in &record.sections {
                    writeln!(f)?;
                    writeln!(f, "{}", section.title)?;
                    match &section.body {
                        SectionBody::Text(body) => writeln!(f, "  {body}")?,
                        SectionBody::List(items) => {
                            for item in items {
                                writeln!(f, "  - {item}")?;
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
