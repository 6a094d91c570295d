use drift_view::{DetailPanel, SectionBody};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::severity_color;

/// The detail card for the activated version node.
pub struct DetailCard<'a> {
    /// Detail region from the snapshot
    pub details: &'a DetailPanel,
}

impl Widget for DetailCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self.details {
            DetailPanel::Prompt { text } => vec![Line::raw(text.as_str()).italic().dim()],
            DetailPanel::Record(record) => {
                let mut lines = vec![
                    Line::raw(record.meta.as_str()).dim(),
                    Line::from(Span::styled(
                        record.level_line(),
                        Style::new().fg(severity_color(record.level)).bold(),
                    )),
                ];

                for section in &record.sections {
                    lines.push(Line::default());
                    lines.push(Line::raw(section.title.as_str()).bold());
                    match &section.body {
                        SectionBody::Text(body) => lines.push(Line::raw(body.as_str())),
                        SectionBody::List(items) => {
                            lines.extend(items.iter().map(|item| Line::raw(format!("• {item}"))))
                        }
                    }
                }

                lines
            }
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(self.details.heading()))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use drift_catalog::Catalog;
    use drift_view::{NodeRef, ViewState};

    use super::*;
    use crate::buffer_lines;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_draws_every_section_of_the_record() -> anyhow::Result<()> {
        let catalog = Catalog::builtin();
        let mut state = ViewState::idle();
        state.select_concept(catalog, Some("login_event"));
        state.activate_node(catalog, NodeRef::new("Auth Service", 0))?;
        let view = state.view(catalog);

        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 20));
        DetailCard {
            details: &view.details,
        }
        .render(buf.area, &mut buf);

        let lines: Vec<String> = buffer_lines(&buf)
            .iter()
            .map(|line| line.trim_matches(|c: char| c == '│' || c == ' ').to_string())
            .collect();

        assert!(lines[0].contains("Drift Details"));
        assert_eq!(lines[1], "Login Event · Auth Service · v1 (2023 Q3)");
        assert_eq!(lines[2], "Local drift level: Low drift");
        assert_eq!(lines[4], "Local Meaning");
        assert!(lines.iter().any(|line| line == "Notes"));
        assert!(lines.iter().any(|line| line.starts_with("• ")));
        assert_eq!(buf[(1, 2)].fg, Color::Green);
        Ok(())
    }

    #[test]
    fn it_draws_the_prompt_before_activation() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::idle();
        state.select_concept(catalog, Some("login_event"));
        let view = state.view(catalog);

        let mut buf = Buffer::empty(Rect::new(0, 0, 120, 3));
        DetailCard {
            details: &view.details,
        }
        .render(buf.area, &mut buf);

        assert!(buffer_lines(&buf)[1].contains(
            "Click any node in the map to see how Login Event is interpreted in that service/version."
        ));
    }
}
