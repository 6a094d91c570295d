use drift_catalog::CanonicalDefinition;
use drift_view::{DESCRIPTION_HINT, SelectControl};
use ratatui::{
    prelude::*,
    widgets::{Block, List, ListItem, ListState, Paragraph, Wrap},
};

/// The concept dropdown, drawn as a list with the placeholder on top.
pub struct ConceptList<'a> {
    /// Dropdown state from the snapshot
    pub select: &'a SelectControl,
}

impl Widget for ConceptList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items = self.select.options.iter().map(|option| {
            let item = ListItem::new(option.label.as_str());
            if option.is_placeholder() {
                item.style(Style::new().dim())
            } else {
                item
            }
        });

        let list = List::new(items)
            .block(Block::bordered().title("Concepts"))
            .highlight_style(Style::new().reversed())
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.select.selected_index()));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

/// Description and canonical definition of the selected concept.
pub struct ConceptPanel<'a> {
    /// `None` while nothing is selected
    pub description: Option<&'a str>,
    /// `None` while nothing is selected
    pub canonical: Option<&'a CanonicalDefinition>,
}

impl Widget for ConceptPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![match self.description {
            Some(description) => Line::raw(description),
            None => Line::raw(DESCRIPTION_HINT).italic().dim(),
        }];

        if let Some(canonical) = self.canonical {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                canonical.field_name.as_str().bold(),
                format!(" ({})", canonical.schema.value_type).dim(),
            ]));
            lines.push(Line::raw(canonical.meaning.as_str()));
            lines.push(Line::from(vec![
                format!("{}: ", canonical.schema.constraint.title()).dim(),
                canonical.schema.constraint.items().join(", ").into(),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title("Concept"))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use drift_catalog::Catalog;
    use drift_view::{InitialSelection, ViewState};

    use super::*;
    use crate::buffer_lines;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_highlights_the_selected_concept() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::idle();
        state.select_concept(catalog, Some("subscription_tier"));
        let view = state.view(catalog);

        let mut buf = Buffer::empty(Rect::new(0, 0, 26, 6));
        ConceptList {
            select: &view.select,
        }
        .render(buf.area, &mut buf);

        let lines = buffer_lines(&buf);
        assert_eq!(lines[1], "│  Select a concept…     │");
        assert_eq!(lines[3], "│> Subscription Tier     │");
        assert!(buf[(3, 3)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(3, 2)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn it_shows_the_canonical_definition() {
        let catalog = Catalog::builtin();
        let view = ViewState::initial(catalog, InitialSelection::First).view(catalog);

        let mut buf = Buffer::empty(Rect::new(0, 0, 120, 10));
        ConceptPanel {
            description: view.description.as_deref(),
            canonical: view.canonical.as_ref(),
        }
        .render(buf.area, &mut buf);

        let screen = buffer_lines(&buf).join("\n");
        assert!(screen.contains("user_status (string)"));
        assert!(screen.contains("Allowed values: ACTIVE, SUSPENDED, CLOSED"));
    }

    #[test]
    fn it_shows_the_hint_while_idle() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 4));
        ConceptPanel {
            description: None,
            canonical: None,
        }
        .render(buf.area, &mut buf);

        let screen = buffer_lines(&buf).join("\n");
        assert!(screen.contains(DESCRIPTION_HINT));
    }
}
