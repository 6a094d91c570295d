//! Main application widget for the drift map browser.

use ratatui::prelude::*;

use crate::{ConceptList, ConceptPanel, DetailCard, DriftMapState, LaneGrid, SummaryBadge};

/// Main application widget that renders the overall TUI layout.
///
/// - Header with the overall drift badge
/// - Concept list on the left
/// - Concept definition and service lanes in the middle
/// - Drift details on the right
/// - Footer with help text
pub struct DriftMapApp {}

impl StatefulWidget for &DriftMapApp {
    type State = DriftMapState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let view = state.snapshot();

        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ]);
        let [header_area, inner_area, footer_area] = vertical.areas(area);

        let horizontal = Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]);
        let [summary_area, title_area] = horizontal.areas(header_area);

        SummaryBadge {
            summary: &view.summary,
        }
        .render(summary_area, buf);
        "Truth Drift Map".bold().render(title_area, buf);

        Line::raw("↑↓ concept | Tab lane | ◄ ► version | Enter details | 'q' quit")
            .centered()
            .render(footer_area, buf);

        let horizontal = Layout::horizontal([
            Constraint::Length(26),
            Constraint::Min(0),
            Constraint::Percentage(40),
        ]);
        let [concepts_area, center_area, details_area] = horizontal.areas(inner_area);

        let vertical = Layout::vertical([Constraint::Percentage(45), Constraint::Min(0)]);
        let [concept_area, lanes_area] = vertical.areas(center_area);

        ConceptList {
            select: &view.select,
        }
        .render(concepts_area, buf);

        ConceptPanel {
            description: view.description.as_deref(),
            canonical: view.canonical.as_ref(),
        }
        .render(concept_area, buf);

        LaneGrid {
            map: &view.map,
            cursor: Some(state.cursor),
        }
        .render(lanes_area, buf);

        DetailCard {
            details: &view.details,
        }
        .render(details_area, buf);
    }
}
