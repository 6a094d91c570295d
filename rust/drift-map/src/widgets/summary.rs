use drift_view::Summary;
use ratatui::prelude::*;

use crate::severity_color;

/// The overall drift badge.
pub struct SummaryBadge<'a> {
    /// Badge state from the snapshot
    pub summary: &'a Summary,
}

impl Widget for SummaryBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match self.summary.level() {
            None => Style::new().dim(),
            Some(level) => Style::new().fg(Color::Black).bg(severity_color(level)).bold(),
        };

        Line::from(Span::styled(format!(" {} ", self.summary.text()), style)).render(area, buf);
    }
}
